use serde::{Deserialize, Serialize};

use crate::entities::Record;
use crate::key::{RecordKey, lenient_text, non_empty, optional_key};

/// A driver as returned by `/api/data/section/drivers`.
///
/// Name data arrives in one of several shapes depending on which screen
/// created the record, so every name field is independently optional. Split
/// and full names may be spelled in snake_case or camelCase; snake_case wins
/// when both are non-null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DriverWire")]
pub struct Driver {
    pub id: Option<RecordKey>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
struct DriverWire {
    #[serde(default, deserialize_with = "optional_key")]
    id: Option<RecordKey>,
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    full_name: Option<String>,
    #[serde(default, rename = "fullName", deserialize_with = "lenient_text")]
    full_name_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    first_name: Option<String>,
    #[serde(default, rename = "firstName", deserialize_with = "lenient_text")]
    first_name_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    last_name: Option<String>,
    #[serde(default, rename = "lastName", deserialize_with = "lenient_text")]
    last_name_camel: Option<String>,
}

impl From<DriverWire> for Driver {
    fn from(wire: DriverWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            full_name: wire.full_name.or(wire.full_name_camel),
            first_name: wire.first_name.or(wire.first_name_camel),
            last_name: wire.last_name.or(wire.last_name_camel),
        }
    }
}

impl Driver {
    /// `first_name last_name`, skipping whichever half is empty.
    #[must_use]
    pub fn joined_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Whether any of the name shapes carries a non-empty value.
    #[must_use]
    pub fn has_name(&self) -> bool {
        non_empty(self.name.as_deref()).is_some()
            || non_empty(self.full_name.as_deref()).is_some()
            || self.joined_name().is_some()
    }
}

impl Record for Driver {
    fn id(&self) -> Option<&RecordKey> {
        self.id.as_ref()
    }
}
