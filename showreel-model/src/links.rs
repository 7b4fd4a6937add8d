//! Detail page links.

use url::{Url, form_urlencoded};

use crate::{ContentId, MediaKind, ModelError, ModelResult};

/// Page every slide's watch action points at.
pub const DETAIL_PAGE: &str = "content.html";

/// Target of a slide's primary action: the detail page for one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailLink {
    pub id: ContentId,
    pub kind: MediaKind,
}

impl DetailLink {
    pub fn new(id: ContentId, kind: MediaKind) -> Self {
        Self { id, kind }
    }

    /// Relative URL, e.g. `content.html?id=42&type=series`.
    pub fn to_relative_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("id", &self.id.to_string())
            .append_pair("type", self.kind.as_str())
            .finish();
        format!("{DETAIL_PAGE}?{query}")
    }

    /// Parse a detail URL, relative or absolute, back into a link.
    pub fn parse(raw: &str) -> ModelResult<Self> {
        let base = Url::parse("http://localhost/")?;
        let url = base.join(raw)?;

        if !url.path().ends_with(DETAIL_PAGE) {
            return Err(ModelError::InvalidLink(format!(
                "expected {DETAIL_PAGE}, got {}",
                url.path()
            )));
        }

        let mut id = None;
        let mut kind = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "id" => id = Some(value.parse::<ContentId>()?),
                "type" => kind = Some(value.parse::<MediaKind>()?),
                _ => {}
            }
        }

        match (id, kind) {
            (Some(id), Some(kind)) => Ok(Self { id, kind }),
            (None, _) => Err(ModelError::InvalidLink("missing id".into())),
            (_, None) => Err(ModelError::InvalidLink("missing type".into())),
        }
    }
}

impl std::fmt::Display for DetailLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_relative_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_format() {
        let link = DetailLink::new(ContentId::Numeric(42), MediaKind::Series);
        assert_eq!(link.to_relative_url(), "content.html?id=42&type=series");
    }

    #[test]
    fn test_text_ids_are_encoded() {
        let link = DetailLink::new("a b&c".into(), MediaKind::Movie);
        let url = link.to_relative_url();

        assert_eq!(url, "content.html?id=a+b%26c&type=movie");
        assert_eq!(DetailLink::parse(&url).unwrap(), link);
    }

    #[test]
    fn test_parse_rejects_other_pages() {
        assert!(DetailLink::parse("index.html?id=1&type=movie").is_err());
        assert!(DetailLink::parse("content.html?id=1").is_err());
        assert!(DetailLink::parse("content.html?id=1&type=episode").is_err());
    }
}
