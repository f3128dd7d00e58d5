//! Membership index over a collection's keys.

use std::collections::HashSet;

use crate::entities::Record;
use crate::key::RecordKey;

/// The set of key values present in one collection.
///
/// Built once per collection per run. Presence of a key means "some record in
/// the source collection has this key"; iteration order is unspecified and
/// nothing downstream depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    keys: HashSet<RecordKey>,
}

impl MembershipIndex {
    /// Index `records` by an arbitrary key field. Records without a value for
    /// the key are skipped.
    pub fn build<T>(records: &[T], key: impl Fn(&T) -> Option<&RecordKey>) -> Self {
        Self {
            keys: records.iter().filter_map(key).cloned().collect(),
        }
    }

    /// Index `records` by their `id` field.
    pub fn by_id<T: Record>(records: &[T]) -> Self {
        Self::build(records, T::id)
    }

    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
