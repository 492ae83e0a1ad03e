// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for media import issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// File extension is not an accepted upload type
    UnsupportedType(String),

    /// File matched the accept filter but could not be decoded
    DecodeFailed(String),

    /// File could not be read from disk (missing, permission denied, etc.)
    Unreadable(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::UnsupportedType(_) => "error-import-unsupported-type",
            MediaError::DecodeFailed(_) => "error-import-decode-failed",
            MediaError::Unreadable(_) => "error-import-unreadable",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedType(ext) => {
                write!(f, "Unsupported upload type: {}", ext)
            }
            MediaError::DecodeFailed(msg) => write!(f, "Decoding failed: {}", msg),
            MediaError::Unreadable(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_error_converts_to_error() {
        let media_err = MediaError::UnsupportedType("gif".to_string());
        let err: Error = media_err.clone().into();
        assert_eq!(err, Error::Media(media_err));
    }

    #[test]
    fn io_error_converts_to_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        match err {
            Error::Io(msg) => assert!(msg.contains("missing")),
            other => panic!("expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn i18n_keys_are_stable() {
        assert_eq!(
            MediaError::UnsupportedType("bmp".into()).i18n_key(),
            "error-import-unsupported-type"
        );
        assert_eq!(
            MediaError::DecodeFailed("truncated".into()).i18n_key(),
            "error-import-decode-failed"
        );
        assert_eq!(
            MediaError::Unreadable("permission denied".into()).i18n_key(),
            "error-import-unreadable"
        );
    }

    #[test]
    fn display_includes_detail() {
        let err = Error::Media(MediaError::DecodeFailed("bad header".into()));
        assert_eq!(err.to_string(), "Media Error: Decoding failed: bad header");
    }
}
