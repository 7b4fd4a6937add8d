//! Content records displayed by the slider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ContentId, DetailLink, MediaKind};

/// One content record, as supplied by the host page.
///
/// Only `id`, `title`, `image` and `genre` are required. Missing optional
/// fields degrade silently: no description renders as empty text and no
/// popularity counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideItem {
    pub id: ContentId,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percentage in `0..=100`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    /// Only its presence matters: a record with seasons is a series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Value>,
}

impl SlideItem {
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        image: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            genre: genre.into(),
            description: None,
            popularity: None,
            seasons: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    pub fn with_seasons(mut self, seasons: Value) -> Self {
        self.seasons = Some(seasons);
        self
    }

    /// Popularity with the zero default applied.
    pub fn popularity_or_default(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `Series` when the record carries a truthy `seasons` value.
    ///
    /// `false`, `0` and `""` count as absent, matching how catalog files
    /// written by hand mark "no seasons".
    pub fn kind(&self) -> MediaKind {
        match &self.seasons {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                MediaKind::Movie
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                MediaKind::Movie
            }
            Some(Value::String(s)) if s.is_empty() => MediaKind::Movie,
            Some(_) => MediaKind::Series,
        }
    }

    pub fn detail_link(&self) -> DetailLink {
        DetailLink::new(self.id.clone(), self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_record_uses_defaults() {
        let item: SlideItem = serde_json::from_value(json!({
            "id": 7,
            "title": "Arrival",
            "image": "img/arrival.jpg",
            "genre": "Sci-Fi",
        }))
        .unwrap();

        assert_eq!(item.popularity_or_default(), 0.0);
        assert_eq!(item.description_or_default(), "");
        assert_eq!(item.kind(), MediaKind::Movie);
    }

    #[test]
    fn test_seasons_presence_marks_series() {
        let base = SlideItem::new(1u64, "Dark", "dark.jpg", "Drama");

        assert_eq!(base.clone().with_seasons(json!(3)).kind(), MediaKind::Series);
        assert_eq!(
            base.clone().with_seasons(json!([])).kind(),
            MediaKind::Series
        );
        assert_eq!(base.clone().with_seasons(json!(0)).kind(), MediaKind::Movie);
        assert_eq!(
            base.clone().with_seasons(Value::Null).kind(),
            MediaKind::Movie
        );
        assert_eq!(base.kind(), MediaKind::Movie);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let item: SlideItem = serde_json::from_value(json!({
            "id": "abc",
            "title": "Heat",
            "image": "heat.jpg",
            "genre": "Crime",
            "year": 1995,
        }))
        .unwrap();

        assert_eq!(item.id, ContentId::Text("abc".into()));
    }
}
