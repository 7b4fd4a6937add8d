//! Slider options.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Boundary behavior when navigating past either end of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Navigation stops at the first and last slide.
    Finite,
    /// Navigation past either end continues from the other end.
    Infinite,
}

/// Named slider options.
///
/// Hosts usually hand these over as a JSON object using the camelCase
/// names (`autoplaySpeed`, `showDots`, ...). Every field is optional and
/// unknown keys are ignored. Speeds are unsigned milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub autoplay: bool,
    pub autoplay_speed: u64,
    pub transition_speed: u64,
    pub show_dots: bool,
    pub show_arrows: bool,
    #[serde(rename = "loop")]
    pub loop_around: bool,
    pub pause_on_hover: bool,
    pub swipe_threshold: u32,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_speed: 5000,
            transition_speed: 800,
            show_dots: true,
            show_arrows: true,
            loop_around: true,
            pause_on_hover: true,
            swipe_threshold: 50,
        }
    }
}

impl SliderOptions {
    /// Parse host-supplied options from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_speed)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_speed)
    }

    pub fn wrap_mode(&self) -> WrapMode {
        if self.loop_around {
            WrapMode::Infinite
        } else {
            WrapMode::Finite
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SliderOptions::default();
        assert!(options.autoplay);
        assert_eq!(options.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(options.transition_duration(), Duration::from_millis(800));
        assert!(options.show_dots && options.show_arrows);
        assert_eq!(options.wrap_mode(), WrapMode::Infinite);
        assert!(options.pause_on_hover);
        assert_eq!(options.swipe_threshold, 50);
    }

    #[test]
    fn test_partial_json_overrides_and_ignores_unknown_keys() {
        let options = SliderOptions::from_json(
            r#"{"autoplaySpeed": 3000, "loop": false, "bogus": 1}"#,
        )
        .unwrap();

        assert_eq!(options.autoplay_speed, 3000);
        assert_eq!(options.wrap_mode(), WrapMode::Finite);
        assert_eq!(options.transition_speed, 800);
        assert!(options.show_dots);
    }

    #[test]
    fn test_negative_speed_is_rejected() {
        assert!(SliderOptions::from_json(r#"{"transitionSpeed": -5}"#).is_err());
    }

    #[test]
    fn test_toml_options() {
        let options: SliderOptions =
            toml::from_str("showArrows = false\nswipeThreshold = 80\n").unwrap();
        assert!(!options.show_arrows);
        assert_eq!(options.swipe_threshold, 80);
    }
}
