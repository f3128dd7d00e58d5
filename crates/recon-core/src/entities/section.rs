use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named collection exposed by the data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Drivers,
    Vehicles,
    Reservations,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Drivers, Self::Vehicles, Self::Reservations];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drivers => "drivers",
            Self::Vehicles => "vehicles",
            Self::Reservations => "reservations",
        }
    }

    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> String {
        format!("/api/data/section/{}", self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drivers" => Ok(Self::Drivers),
            "vehicles" => Ok(Self::Vehicles),
            "reservations" => Ok(Self::Reservations),
            other => Err(CoreError::UnknownSection(other.to_string())),
        }
    }
}
