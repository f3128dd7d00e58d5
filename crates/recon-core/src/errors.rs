//! Error types for the core crate.
//!
//! Unresolved references are deliberately absent here: they are data, surfaced
//! as [`crate::Finding`]s and [`crate::Resolution::Unresolved`], never as errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A section name that does not map to a known endpoint.
    #[error("Unknown section: {0} (expected drivers, vehicles, or reservations)")]
    UnknownSection(String),
}
