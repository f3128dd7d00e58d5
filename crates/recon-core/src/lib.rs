//! # recon-core
//!
//! Core types and pure logic for the reservation/driver/vehicle reconciliation
//! reporter.
//!
//! This crate has no I/O. It provides:
//! - Partial-field record structs for each fetched section
//! - [`RecordKey`] scalar ids and [`MembershipIndex`] for O(1) existence checks
//! - The reference resolver with ordered [`LabelStrategy`] fallback chains
//! - The broken-reference consistency checker
//! - The [`Report`] model, its text renderer, and the fixed-section report
//!   assembly in [`analysis`]

pub mod analysis;
pub mod check;
pub mod entities;
pub mod errors;
pub mod index;
pub mod key;
pub mod report;
pub mod resolve;

pub use analysis::{Datasets, ReportOptions, build_report};
pub use check::{Finding, ReferenceCheck, find_broken_references};
pub use entities::{Driver, ForeignKey, Record, Reservation, Section, Vehicle};
pub use errors::CoreError;
pub use index::MembershipIndex;
pub use key::RecordKey;
pub use report::{Report, ReportSection};
pub use resolve::{LabelStep, LabelStrategy, Resolution, resolve};
