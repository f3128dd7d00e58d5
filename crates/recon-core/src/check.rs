//! Broken-reference detection for linking records.

use serde::Serialize;

use crate::entities::{ForeignKey, Record};
use crate::index::MembershipIndex;
use crate::key::RecordKey;

/// One configured reference check: a foreign key on the linking record and
/// the index of the collection it should point into.
pub struct ReferenceCheck<'a, L> {
    pub foreign_key: ForeignKey<L>,
    pub target_index: &'a MembershipIndex,
    pub target_name: &'a str,
}

/// A linking record whose foreign key points at nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub record_id: Option<RecordKey>,
    pub foreign_key_field: String,
    pub value: RecordKey,
    pub target_name: String,
}

/// Scan `linking` against every check.
///
/// A finding is emitted iff the foreign key is present and the target index
/// does not contain it. A null or absent foreign key means "not assigned" and
/// is never a finding. Output order is linking-collection order, then check
/// order.
pub fn find_broken_references<L: Record>(
    linking: &[L],
    checks: &[ReferenceCheck<'_, L>],
) -> Vec<Finding> {
    linking
        .iter()
        .flat_map(|record| {
            checks.iter().filter_map(move |check| {
                let value = check.foreign_key.value(record)?;
                (!check.target_index.contains(value)).then(|| Finding {
                    record_id: record.id().cloned(),
                    foreign_key_field: check.foreign_key.field.to_string(),
                    value: value.clone(),
                    target_name: check.target_name.to_string(),
                })
            })
        })
        .collect()
}
