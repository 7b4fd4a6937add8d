//! Shape of the persisted catalog document.

use serde::{Deserialize, Serialize};

use crate::SlideItem;

/// The document the save service seeds its data file with.
///
/// The service itself stores whatever object it receives; this type is for
/// hosts that want typed access to a catalog they loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<SlideItem>,
    #[serde(default)]
    pub series: Vec<SlideItem>,
    #[serde(default)]
    pub featured: Vec<SlideItem>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
            && self.series.is_empty()
            && self.featured.is_empty()
    }

    /// Records for the featured rotation, falling back to every movie and
    /// series when nothing is explicitly featured.
    pub fn rotation(&self) -> Vec<SlideItem> {
        if !self.featured.is_empty() {
            return self.featured.clone();
        }
        self.movies.iter().chain(&self.series).cloned().collect()
    }
}
