//! Render surface abstraction.
//!
//! The slider never draws anything itself. It describes element creation
//! and style mutation through [`RenderSurface`], and the host maps those
//! calls onto whatever it renders with. [`MemorySurface`] keeps the
//! resulting element tree in memory.

mod memory;

pub use memory::{MemorySurface, RenderedDot, RenderedSlide};

use std::time::Duration;

use crate::card::{Chrome, DotIndicator, SlideCard};
use crate::messages::Direction;

/// Horizontal position and fade of a slide element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStyle {
    /// Translation as a percentage of the slide width.
    pub offset_percent: i16,
    pub opacity: f32,
    /// Duration of the eased transform/opacity transition, when animating.
    pub transition: Option<Duration>,
    /// Transition this style belongs to, echoed back by the host in
    /// [`SliderInput::TransitionEnd`](crate::SliderInput::TransitionEnd).
    /// Zero for resting styles.
    pub generation: u64,
}

impl SlideStyle {
    /// Resting style of the visible slide.
    pub const fn resting() -> Self {
        Self {
            offset_percent: 0,
            opacity: 1.0,
            transition: None,
            generation: 0,
        }
    }

    /// Style for the slide leaving the viewport. Moving to the next slide
    /// pushes it out to the left, moving back pushes it to the right.
    pub fn outgoing(
        direction: Direction,
        duration: Duration,
        generation: u64,
    ) -> Self {
        let offset_percent = match direction {
            Direction::Next => -100,
            Direction::Prev => 100,
        };
        Self {
            offset_percent,
            opacity: 0.0,
            transition: Some(duration),
            generation,
        }
    }

    /// Style for the slide entering the viewport.
    pub fn incoming(duration: Duration, generation: u64) -> Self {
        Self {
            transition: Some(duration),
            generation,
            ..Self::resting()
        }
    }
}

/// DOM-like collaborator the slider renders into.
///
/// Indices refer to slide and dot positions in the order they were
/// appended since the last clear.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSurface {
    fn mount_chrome(&mut self, chrome: Chrome);

    fn clear_slides(&mut self);

    fn append_slide(&mut self, card: SlideCard);

    fn clear_dots(&mut self);

    fn append_dot(&mut self, dot: DotIndicator);

    fn style_slide(&mut self, index: usize, style: SlideStyle);

    /// Drop transition styling, leaving the final transform/opacity.
    fn clear_transition(&mut self, index: usize);

    /// Accessibility visibility of a slide.
    fn set_slide_hidden(&mut self, index: usize, hidden: bool);

    /// Active marker of a slide; exactly one slide is active at rest.
    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_dot_selected(&mut self, index: usize, selected: bool);

    /// Full-page navigation to `url`.
    fn navigate(&mut self, url: &str);
}
