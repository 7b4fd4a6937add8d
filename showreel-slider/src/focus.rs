//! Keyboard target tracking.
//!
//! Arrow keys reach a slider only while it is hovered or explicitly
//! focused, so several sliders (or other keyboard-driven widgets) can share
//! a page without stealing each other's input.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSource {
    #[default]
    None,
    Mouse,
    Keyboard,
}

#[derive(Debug, Clone, Default)]
pub struct SliderFocus {
    hovered: bool,
    focused: bool,
    last_source: FocusSource,
}

impl SliderFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered or left the slider region.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if hovered {
            self.last_source = FocusSource::Mouse;
        }
    }

    /// Keyboard focus entered or left the slider region.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.last_source = FocusSource::Keyboard;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether keyboard navigation should be routed to this slider.
    pub fn is_keyboard_target(&self) -> bool {
        self.hovered || self.focused
    }

    pub fn last_source(&self) -> FocusSource {
        self.last_source
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_target_requires_hover_or_focus() {
        let mut focus = SliderFocus::new();
        assert!(!focus.is_keyboard_target());

        focus.set_hovered(true);
        assert!(focus.is_keyboard_target());
        assert_eq!(focus.last_source(), FocusSource::Mouse);

        focus.set_hovered(false);
        focus.set_focused(true);
        assert!(focus.is_keyboard_target());
        assert_eq!(focus.last_source(), FocusSource::Keyboard);

        focus.clear_all();
        assert!(!focus.is_keyboard_target());
    }
}
