//! Crate error type.

use std::path::PathBuf;

use crate::markup::MarkupError;

/// Errors from the fallible edges of the crate: reading files, parsing
/// configuration and page markup. The page runtime itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse page markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_errors_convert() {
        let err: Error = MarkupError::UnterminatedTag { position: 7 }.into();
        assert_eq!(
            err.to_string(),
            "failed to parse page markup: unterminated tag starting at byte 7"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = Error::Io {
            path: PathBuf::from("public/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read public/index.html: gone");
    }
}
