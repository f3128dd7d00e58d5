//! Partial-field record types for the three fetched sections.
//!
//! Every field is optional: the upstream API does not enforce a schema, so a
//! missing or `null` field is normal and must never fail deserialization.

mod driver;
mod reservation;
mod section;
mod vehicle;

pub use driver::Driver;
pub use reservation::Reservation;
pub use section::Section;
pub use vehicle::Vehicle;

use crate::key::RecordKey;

/// A fetched record with an optional primary key.
pub trait Record {
    /// The record's `id` field, if present and non-null.
    fn id(&self) -> Option<&RecordKey>;
}

/// A named foreign-key field on a linking record of type `L`.
pub struct ForeignKey<L> {
    /// Field name as it appears in the payload, used in findings and reports.
    pub field: &'static str,
    /// Reads the foreign-key value.
    pub get: fn(&L) -> Option<&RecordKey>,
}

impl<L> ForeignKey<L> {
    #[must_use]
    pub fn value<'a>(&self, record: &'a L) -> Option<&'a RecordKey> {
        (self.get)(record)
    }
}

impl<L> Clone for ForeignKey<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for ForeignKey<L> {}

impl<L> std::fmt::Debug for ForeignKey<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForeignKey").field("field", &self.field).finish()
    }
}
