use std::path::PathBuf;

use crate::page::Target;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a page from being rendered.
///
/// Every variant is fatal to [`initialize`](crate::initialize): rendering
/// steps run in order and the first failure stops the rest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote product document could not be fetched.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// A local file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the expected schema.
    #[error("invalid JSON document: {0}")]
    Decode(#[from] serde_json::Error),
    /// The document is well formed but a required value is absent.
    #[error("missing product data: {field}")]
    MissingData { field: &'static str },
    /// The page has no element for a target that is being written.
    #[error("page has no element for {target} (selector `{selector}`)")]
    RenderTargetMissing { target: Target, selector: String },
    #[error("invalid CSS selector `{selector}`")]
    InvalidSelector { selector: String },
    #[error("no thumbnail at index {index} ({count} available)")]
    NoSuchThumbnail { index: usize, count: usize },
    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}
