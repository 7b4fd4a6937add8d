//! Core data model definitions shared across Showreel crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod ids;
pub mod links;
pub mod media_kind;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::Catalog;
pub use error::{ModelError, Result as ModelResult};
pub use ids::ContentId;
pub use links::DetailLink;
pub use media_kind::MediaKind;
pub use slide::SlideItem;
