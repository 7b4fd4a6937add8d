//! Input events the host forwards to a slider.

/// Direction hint for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliderInput {
    // Keyboard, only honored while the slider is the keyboard target
    Key(Key),

    // Touch (horizontal screen coordinate)
    TouchStart { x: f32 },
    TouchEnd { x: f32 },

    // Pointer and focus
    PointerEnter,
    PointerLeave,
    FocusGained,
    FocusLost,

    // Chrome
    PrevArrow,
    NextArrow,
    DotPressed(usize),

    // Slide activation
    /// Slide body clicked; invokes the click callback.
    SlideActivated(usize),
    /// Primary action clicked; navigates to the detail page only.
    WatchActivated(usize),

    /// The surface finished a visual transition. `generation` is the value
    /// carried by the [`SlideStyle`](crate::SlideStyle) that started it;
    /// acknowledgments for any other transition are ignored.
    TransitionEnd { generation: u64 },
}
