use thiserror::Error;

/// Returned when a database tag is outside the supported set.
///
/// This is the only error the library defines. It carries the rejected tag
/// verbatim so callers can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported database type: {tag}")]
pub struct UnsupportedTypeError {
    pub tag: String,
}

impl UnsupportedTypeError {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
