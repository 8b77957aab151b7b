use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced by the containers, comparisons and config loader.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("the container is empty")]
    EmptyContainer,

    #[error("expected {expected} value, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    #[error("failed to read config file '{}': {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl TemplateError {
    pub fn type_mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch { expected, found }
    }

    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// True for the error returned when reading from an empty container.
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer)
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TemplateError::EmptyContainer.to_string(), "the container is empty");

        let err = TemplateError::type_mismatch(ValueKind::Int, ValueKind::Text);
        assert_eq!(err.to_string(), "expected int value, found text");
        assert!(!err.is_empty_container());
    }

    #[test]
    fn test_config_io_keeps_path_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = TemplateError::config_io("list.toml", io);

        assert!(err.to_string().contains("list.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
