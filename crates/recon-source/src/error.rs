//! Data source error types.

use recon_core::Section;
use thiserror::Error;

/// Errors that abort a run while fetching a section.
///
/// Every variant is fatal: no partial report is produced.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout, or body transfer failure.
    #[error("failed to fetch {section}: {source}")]
    Transport {
        section: Section,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("API error fetching {section} ({status}): {message}")]
    Api {
        section: Section,
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The response body is not the expected JSON envelope.
    #[error("invalid JSON in {section} response: {source}")]
    Parse {
        section: Section,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The section being fetched when the error occurred, if any.
    #[must_use]
    pub const fn section(&self) -> Option<Section> {
        match self {
            Self::Client(_) => None,
            Self::Transport { section, .. }
            | Self::Api { section, .. }
            | Self::Parse { section, .. } => Some(*section),
        }
    }
}
