//! Report presentation settings.

use recon_core::ReportOptions;
use serde::{Deserialize, Serialize};

const fn default_sample_size() -> usize {
    5
}

fn default_unassigned_label() -> String {
    "Sin asignar".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Reservations shown in the sample and resolution sections.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Label shown when a reservation has no resolvable driver.
    #[serde(default = "default_unassigned_label")]
    pub unassigned_driver_label: String,

    /// Label shown when a reservation has no resolvable vehicle.
    #[serde(default = "default_unassigned_label")]
    pub unassigned_vehicle_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            unassigned_driver_label: default_unassigned_label(),
            unassigned_vehicle_label: default_unassigned_label(),
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            sample_size: self.sample_size,
            unassigned_driver_label: self.unassigned_driver_label.clone(),
            unassigned_vehicle_label: self.unassigned_vehicle_label.clone(),
        }
    }
}
