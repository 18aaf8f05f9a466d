//! Error types for Partlet.

use std::io;

/// Errors produced by the Partlet framework.
#[derive(Debug, thiserror::Error)]
pub enum PartletError {
    #[error("config error: {0}")]
    Config(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("history error: {0}")]
    History(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PartletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = PartletError::Config("missing home page".into());
        assert_eq!(format!("{e}"), "config error: missing home page");
    }

    #[test]
    fn fetch_error_display() {
        let e = PartletError::Fetch("partial not found".into());
        assert_eq!(format!("{e}"), "fetch error: partial not found");
    }

    #[test]
    fn document_error_display() {
        let e = PartletError::Document("no content element".into());
        assert_eq!(format!("{e}"), "document error: no content element");
    }

    #[test]
    fn history_error_display() {
        let e = PartletError::History("push failed".into());
        assert_eq!(format!("{e}"), "history error: push failed");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: PartletError = io_err.into();
        assert!(matches!(e, PartletError::Io(_)));
        assert!(format!("{e}").contains("gone"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: PartletError = json_err.into();
        assert!(matches!(e, PartletError::Json(_)));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let e: PartletError = toml_err.into();
        assert!(matches!(e, PartletError::TomlParse(_)));
    }
}
