//! Error taxonomy for the extraction/fetch pipeline.

use std::path::PathBuf;

/// Fatal, stage-level pipeline failures.
///
/// Per-URL download failures are deliberately not here; they are values
/// inside `fetch::DownloadResult` and never abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No base exchange/scope was selected; nothing anchors extraction.
    #[error("no base transaction selected")]
    NoSelection,
    /// Extraction finished with zero JS URLs; nothing to persist or fetch.
    #[error("no JavaScript URLs found")]
    NoUrlsFound,
    /// The intermediate URL list could not be written.
    #[error("failed to write URL list {path}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure fetching or saving a single URL.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Transport-level failure (DNS, connection refused, timeout, TLS).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// Response status other than 200 after redirects.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local write of the downloaded body failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
