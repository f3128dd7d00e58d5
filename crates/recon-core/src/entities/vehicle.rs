use serde::{Deserialize, Serialize};

use crate::entities::Record;
use crate::key::{RecordKey, lenient_text, non_empty, optional_key};

/// A vehicle as returned by `/api/data/section/vehicles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, deserialize_with = "optional_key")]
    pub id: Option<RecordKey>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub plate: Option<String>,
}

impl Vehicle {
    /// `brand model (plate)`, omitting empty parts.
    ///
    /// Returns `None` when brand, model, and plate are all empty.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        let head: Vec<&str> = [self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        let head = head.join(" ");
        match (head.is_empty(), non_empty(self.plate.as_deref())) {
            (true, None) => None,
            (false, None) => Some(head),
            (true, Some(plate)) => Some(format!("({plate})")),
            (false, Some(plate)) => Some(format!("{head} ({plate})")),
        }
    }

    /// Whether brand, model, and plate are all present and non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.brand, &self.model, &self.plate]
            .into_iter()
            .all(|field| non_empty(field.as_deref()).is_some())
    }
}

impl Record for Vehicle {
    fn id(&self) -> Option<&RecordKey> {
        self.id.as_ref()
    }
}
