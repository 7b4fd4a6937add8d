//! # Showreel Slider
//!
//! A headless featured-content slider. The [`Slider`] owns a rotation of
//! [`SlideItem`]s and renders them through a [`RenderSurface`]: arrows and
//! dot indicators, one card per item with a five-star popularity rating,
//! and directional slide/fade transitions.
//!
//! Navigation comes from arrows, dots, focus-scoped arrow keys, horizontal
//! swipes and an autoplay timer. A transition latch drops navigation input
//! while a transition is running; it is released by the surface's
//! transition-end acknowledgment or, at the latest, after the configured
//! transition duration.
//!
//! Hosts either drive a slider themselves (`handle` + `poll` on their own
//! event loop) or hand it to [`SliderDriver`] to run on a tokio task.

pub mod card;
pub mod driver;
pub mod focus;
pub mod messages;
pub mod options;
pub mod rating;
pub mod slider;
pub mod surface;
pub mod swipe;
pub mod time;
pub mod timers;

pub use card::{Chrome, DotIndicator, ImageLoading, SlideCard};
pub use driver::{DriverError, SliderCommand, SliderDriver, SliderHandle};
pub use messages::{Direction, Key, SliderInput};
pub use options::{SliderOptions, WrapMode};
pub use rating::{Star, StarRating};
pub use showreel_model::SlideItem;
pub use slider::{SlideClickHandler, Slider, SliderSnapshot};
pub use surface::{MemorySurface, RenderSurface, SlideStyle};
pub use time::{
    SystemTimeProvider, TimeProvider, TokioTimeProvider, VirtualTimeProvider,
};
