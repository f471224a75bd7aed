//! Error taxonomy for a generation pass.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The deploy manifest could not be parsed.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// An inclusion pattern is not a valid glob.
    #[error("invalid glob pattern \"{pattern}\": {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("filesystem walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The cancellation signal fired mid-pass; no partial output is kept.
    #[error("generation cancelled")]
    Cancelled,
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Manifest(err.to_string())
    }
}
