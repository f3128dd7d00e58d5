//! Reference resolution with ordered label fallback chains.
//!
//! A [`LabelStrategy`] is an explicit, ordered list of label sources. Each
//! step reads either the linking record (a denormalized override such as
//! `reservation.driver_name`) or the matched target record. The first step
//! yielding a non-empty string wins; empty strings and absent values fall
//! through identically.
//!
//! The same walk is used whether or not the reference resolved: `Target`
//! steps simply yield nothing when there is no matched record.

use crate::entities::{Driver, ForeignKey, Record, Reservation, Vehicle};
use crate::key::RecordKey;

/// One source in a label fallback chain.
pub enum LabelStep<L, T> {
    /// Read from the linking record.
    Linking(fn(&L) -> Option<String>),
    /// Read from the resolved target record.
    Target(fn(&T) -> Option<String>),
}

/// A named, prioritized label fallback chain with a default.
pub struct LabelStrategy<L, T> {
    /// Chain name, printed in the resolution section of the report.
    pub name: &'static str,
    pub steps: Vec<LabelStep<L, T>>,
    pub default_label: String,
}

impl<L, T> LabelStrategy<L, T> {
    /// Walk the chain against `linking` and an optional matched `target`.
    pub fn label(&self, linking: &L, target: Option<&T>) -> String {
        self.steps
            .iter()
            .find_map(|step| {
                let label = match step {
                    LabelStep::Linking(read) => read(linking),
                    LabelStep::Target(read) => target.and_then(read),
                };
                label.filter(|label| !label.is_empty())
            })
            .unwrap_or_else(|| self.default_label.clone())
    }
}

/// Outcome of resolving one foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a, T> {
    Matched {
        record: &'a T,
        label: String,
    },
    Unresolved {
        /// The foreign-key value that failed to resolve, `None` when the
        /// linking record carried no value at all.
        raw_value: Option<RecordKey>,
        label: String,
    },
}

impl<T> Resolution<'_, T> {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Matched { label, .. } | Self::Unresolved { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Resolve `linking`'s foreign key against `targets`.
///
/// A null or absent foreign key resolves immediately without scanning
/// `targets`. Otherwise the first target whose `id` equals the value is the
/// match. Unresolved references are an expected outcome, never an error.
pub fn resolve<'a, L, T: Record>(
    linking: &L,
    foreign_key: ForeignKey<L>,
    targets: &'a [T],
    strategy: &LabelStrategy<L, T>,
) -> Resolution<'a, T> {
    let Some(value) = foreign_key.value(linking) else {
        return Resolution::Unresolved {
            raw_value: None,
            label: strategy.label(linking, None),
        };
    };

    match targets.iter().find(|t| t.id() == Some(value)) {
        Some(record) => Resolution::Matched {
            record,
            label: strategy.label(linking, Some(record)),
        },
        None => Resolution::Unresolved {
            raw_value: Some(value.clone()),
            label: strategy.label(linking, None),
        },
    }
}

/// Driver label: reservation override, then `name`, `fullName`,
/// `first_name last_name`, then `default_label`.
#[must_use]
pub fn driver_name(default_label: impl Into<String>) -> LabelStrategy<Reservation, Driver> {
    LabelStrategy {
        name: "driver_name",
        steps: vec![
            LabelStep::Linking(|r: &Reservation| r.driver_name.clone()),
            LabelStep::Target(|d: &Driver| d.name.clone()),
            LabelStep::Target(|d: &Driver| d.full_name.clone()),
            LabelStep::Target(Driver::joined_name),
        ],
        default_label: default_label.into(),
    }
}

/// Vehicle label: `brand model (plate)` from the vehicle record, then the
/// reservation's `vehicle` override, then `default_label`.
///
/// The record-before-override order is the reverse of [`driver_name`]; both
/// orders are what the back-office screens display today.
#[must_use]
pub fn vehicle_info(default_label: impl Into<String>) -> LabelStrategy<Reservation, Vehicle> {
    LabelStrategy {
        name: "vehicle_info",
        steps: vec![
            LabelStep::Target(Vehicle::description),
            LabelStep::Linking(|r: &Reservation| r.vehicle.clone()),
        ],
        default_label: default_label.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SENTINEL: &str = "Sin asignar";

    fn reservation(driver_id: Option<&str>, driver_name: Option<&str>) -> Reservation {
        Reservation {
            id: Some(RecordKey::text("R1")),
            driver_id: driver_id.map(RecordKey::text),
            driver_name: driver_name.map(str::to_string),
            ..Reservation::default()
        }
    }

    fn named_driver(id: &str, name: Option<&str>, full_name: Option<&str>) -> Driver {
        Driver {
            id: Some(RecordKey::text(id)),
            name: name.map(str::to_string),
            full_name: full_name.map(str::to_string),
            first_name: Some("Luis".to_string()),
            last_name: Some("Gómez".to_string()),
        }
    }

    #[test]
    fn matched_driver_uses_name_first() {
        let drivers = vec![named_driver("D1", Some("Ana"), Some("Ana María"))];
        let r = reservation(Some("D1"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert!(resolution.is_matched());
        assert_eq!(resolution.label(), "Ana");
    }

    #[rstest]
    #[case::empty_string(Some(""))]
    #[case::null(None)]
    fn empty_and_absent_names_fall_through_alike(#[case] name: Option<&str>) {
        let drivers = vec![named_driver("D1", name, Some("Ana María"))];
        let r = reservation(Some("D1"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert_eq!(resolution.label(), "Ana María");
    }

    #[test]
    fn undefined_name_field_falls_through_like_null() {
        let drivers: Vec<Driver> =
            serde_json::from_str(r#"[{"id":"D1","fullName":"Ana María"}]"#).unwrap();
        let r = reservation(Some("D1"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert_eq!(resolution.label(), "Ana María");
    }

    #[test]
    fn falls_back_to_first_and_last_name() {
        let drivers = vec![named_driver("D3", None, Some(""))];
        let r = reservation(Some("D3"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert_eq!(resolution.label(), "Luis Gómez");
    }

    #[test]
    fn driver_override_beats_matched_record() {
        let drivers = vec![named_driver("D1", Some("Ana"), None)];
        let r = reservation(Some("D1"), Some("Ana (guía)"));
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert!(resolution.is_matched());
        assert_eq!(resolution.label(), "Ana (guía)");
    }

    #[test]
    fn null_foreign_key_is_unresolved_with_sentinel() {
        let r = reservation(None, None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &[], &driver_name(SENTINEL));
        assert_eq!(
            resolution,
            Resolution::Unresolved {
                raw_value: None,
                label: SENTINEL.to_string(),
            }
        );
    }

    #[test]
    fn null_foreign_key_never_scans_targets() {
        // A target with no id would match a naive `id == fk` comparison on None.
        let drivers = vec![Driver {
            name: Some("Anon".to_string()),
            ..Driver::default()
        }];
        let r = reservation(None, None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert!(!resolution.is_matched());
        assert_eq!(resolution.label(), SENTINEL);
    }

    #[test]
    fn dangling_foreign_key_keeps_raw_value() {
        let r = reservation(Some("D99"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &[], &driver_name(SENTINEL));
        assert_eq!(
            resolution,
            Resolution::Unresolved {
                raw_value: Some(RecordKey::text("D99")),
                label: SENTINEL.to_string(),
            }
        );
    }

    #[test]
    fn first_matching_target_wins() {
        let drivers = vec![
            named_driver("D1", Some("First"), None),
            named_driver("D1", Some("Second"), None),
        ];
        let r = reservation(Some("D1"), None);
        let resolution = resolve(&r, Reservation::DRIVER_ID, &drivers, &driver_name(SENTINEL));
        assert_eq!(resolution.label(), "First");
    }

    #[test]
    fn vehicle_record_beats_reservation_override() {
        let vehicles = vec![Vehicle {
            id: Some(RecordKey::text("V1")),
            brand: Some("Toyota".to_string()),
            model: Some("Hiace".to_string()),
            plate: Some("ABC-123".to_string()),
        }];
        let r = Reservation {
            vehicle_id: Some(RecordKey::text("V1")),
            vehicle: Some("Van blanca".to_string()),
            ..Reservation::default()
        };
        let resolution = resolve(&r, Reservation::VEHICLE_ID, &vehicles, &vehicle_info(SENTINEL));
        assert_eq!(resolution.label(), "Toyota Hiace (ABC-123)");
    }

    #[test]
    fn vehicle_override_used_when_unresolved() {
        let r = Reservation {
            vehicle_id: Some(RecordKey::text("V404")),
            vehicle: Some("Van blanca".to_string()),
            ..Reservation::default()
        };
        let resolution = resolve(&r, Reservation::VEHICLE_ID, &[], &vehicle_info(SENTINEL));
        assert!(!resolution.is_matched());
        assert_eq!(resolution.label(), "Van blanca");
    }

    #[test]
    fn matched_vehicle_without_details_uses_default() {
        let vehicles = vec![Vehicle {
            id: Some(RecordKey::text("V1")),
            ..Vehicle::default()
        }];
        let r = Reservation {
            vehicle_id: Some(RecordKey::text("V1")),
            ..Reservation::default()
        };
        let resolution = resolve(&r, Reservation::VEHICLE_ID, &vehicles, &vehicle_info("Sin vehículo"));
        assert!(resolution.is_matched());
        assert_eq!(resolution.label(), "Sin vehículo");
    }
}
