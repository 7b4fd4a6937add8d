use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidId(String),
    UnknownKind(String),
    InvalidLink(String),
    Url(url::ParseError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(raw) => {
                write!(f, "invalid content id: {raw:?}")
            }
            ModelError::UnknownKind(raw) => {
                write!(f, "unknown media kind: {raw:?}")
            }
            ModelError::InvalidLink(msg) => {
                write!(f, "invalid detail link: {msg}")
            }
            ModelError::Url(err) => write!(f, "url error: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Url(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ModelError {
    fn from(err: url::ParseError) -> Self {
        ModelError::Url(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
