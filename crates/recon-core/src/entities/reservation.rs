use serde::{Deserialize, Serialize};

use crate::entities::{ForeignKey, Record};
use crate::key::{RecordKey, lenient_text, optional_key};

/// A reservation: the linking record that references drivers and vehicles.
///
/// Foreign keys and the driver override may arrive in snake_case or
/// camelCase; when both are present the first non-null one, snake_case
/// first, is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReservationWire")]
pub struct Reservation {
    pub id: Option<RecordKey>,
    pub driver_id: Option<RecordKey>,
    pub vehicle_id: Option<RecordKey>,
    /// Denormalized driver label stored on the reservation itself.
    pub driver_name: Option<String>,
    /// Denormalized vehicle label stored on the reservation itself.
    pub vehicle: Option<String>,
}

/// Payload shape with each spelling in its own slot.
#[derive(Deserialize)]
struct ReservationWire {
    #[serde(default, deserialize_with = "optional_key")]
    id: Option<RecordKey>,
    #[serde(default, deserialize_with = "optional_key")]
    driver_id: Option<RecordKey>,
    #[serde(default, rename = "driverId", deserialize_with = "optional_key")]
    driver_id_camel: Option<RecordKey>,
    #[serde(default, deserialize_with = "optional_key")]
    vehicle_id: Option<RecordKey>,
    #[serde(default, rename = "vehicleId", deserialize_with = "optional_key")]
    vehicle_id_camel: Option<RecordKey>,
    #[serde(default, deserialize_with = "lenient_text")]
    driver_name: Option<String>,
    #[serde(default, rename = "driverName", deserialize_with = "lenient_text")]
    driver_name_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    vehicle: Option<String>,
}

impl From<ReservationWire> for Reservation {
    fn from(wire: ReservationWire) -> Self {
        Self {
            id: wire.id,
            driver_id: wire.driver_id.or(wire.driver_id_camel),
            vehicle_id: wire.vehicle_id.or(wire.vehicle_id_camel),
            driver_name: wire.driver_name.or(wire.driver_name_camel),
            vehicle: wire.vehicle,
        }
    }
}

impl Reservation {
    pub const DRIVER_ID: ForeignKey<Self> = ForeignKey {
        field: "driver_id",
        get: driver_id,
    };

    pub const VEHICLE_ID: ForeignKey<Self> = ForeignKey {
        field: "vehicle_id",
        get: vehicle_id,
    };
}

fn driver_id(r: &Reservation) -> Option<&RecordKey> {
    r.driver_id.as_ref()
}

fn vehicle_id(r: &Reservation) -> Option<&RecordKey> {
    r.vehicle_id.as_ref()
}

impl Record for Reservation {
    fn id(&self) -> Option<&RecordKey> {
        self.id.as_ref()
    }
}
