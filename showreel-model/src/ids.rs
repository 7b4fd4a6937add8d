use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier of a content record.
///
/// Catalog files carry both numeric ids (`"id": 42`) and string ids
/// (`"id": "tt0111161"`); the original representation is kept so the
/// record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    Numeric(u64),
    Text(String),
}

impl ContentId {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ContentId::Numeric(_))
    }
}

impl From<u64> for ContentId {
    fn from(value: u64) -> Self {
        ContentId::Numeric(value)
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        ContentId::Text(value.to_string())
    }
}

impl FromStr for ContentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(s.to_string()));
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(n) => ContentId::Numeric(n),
            Err(_) => ContentId::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentId::Numeric(n) => write!(f, "{n}"),
            ContentId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_and_text_ids() {
        let numeric: ContentId = serde_json::from_str("42").unwrap();
        let text: ContentId = serde_json::from_str("\"tt0111161\"").unwrap();

        assert_eq!(numeric, ContentId::Numeric(42));
        assert_eq!(text, ContentId::Text("tt0111161".into()));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "42");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!("   ".parse::<ContentId>().is_err());
        assert_eq!("17".parse::<ContentId>().unwrap(), ContentId::Numeric(17));
        assert_eq!(
            " abc ".parse::<ContentId>().unwrap(),
            ContentId::Text("abc".into())
        );
    }
}
