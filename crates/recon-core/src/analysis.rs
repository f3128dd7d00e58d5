//! Assembly of the fixed-order reconciliation report.
//!
//! Section order is part of the output contract: drivers, vehicles,
//! reservations with a sample, cross-reference findings, resolution
//! simulation, filter options. Every count line is always emitted, including
//! zero counts.

use std::collections::BTreeSet;

use crate::check::{Finding, ReferenceCheck, find_broken_references};
use crate::entities::{Driver, Record, Reservation, Section, Vehicle};
use crate::index::MembershipIndex;
use crate::key::RecordKey;
use crate::report::{Report, ReportSection};
use crate::resolve::{LabelStrategy, Resolution, driver_name, resolve, vehicle_info};

/// The three collections fetched for one run.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
    pub reservations: Vec<Reservation>,
}

/// Presentation knobs for [`build_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of reservations shown in the sample and resolution sections.
    pub sample_size: usize,
    pub unassigned_driver_label: String,
    pub unassigned_vehicle_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sample_size: 5,
            unassigned_driver_label: "Sin asignar".to_string(),
            unassigned_vehicle_label: "Sin asignar".to_string(),
        }
    }
}

/// Per-reservation labels, resolved once and shared by the later sections.
struct Resolved<'a> {
    reservation: &'a Reservation,
    driver: Resolution<'a, Driver>,
    vehicle: Resolution<'a, Vehicle>,
}

/// Index, check, resolve, and lay out the report sections.
#[must_use]
pub fn build_report(data: &Datasets, options: &ReportOptions) -> Report {
    let driver_index = MembershipIndex::by_id(&data.drivers);
    let vehicle_index = MembershipIndex::by_id(&data.vehicles);
    let checks = [
        ReferenceCheck {
            foreign_key: Reservation::DRIVER_ID,
            target_index: &driver_index,
            target_name: Section::Drivers.as_str(),
        },
        ReferenceCheck {
            foreign_key: Reservation::VEHICLE_ID,
            target_index: &vehicle_index,
            target_name: Section::Vehicles.as_str(),
        },
    ];
    let findings = find_broken_references(&data.reservations, &checks);

    let driver_strategy = driver_name(options.unassigned_driver_label.as_str());
    let vehicle_strategy = vehicle_info(options.unassigned_vehicle_label.as_str());
    let resolved: Vec<Resolved<'_>> = data
        .reservations
        .iter()
        .map(|reservation| Resolved {
            reservation,
            driver: resolve(reservation, Reservation::DRIVER_ID, &data.drivers, &driver_strategy),
            vehicle: resolve(reservation, Reservation::VEHICLE_ID, &data.vehicles, &vehicle_strategy),
        })
        .collect();

    let mut report = Report::default();
    report.push(drivers_section(&data.drivers, &options.unassigned_driver_label));
    report.push(vehicles_section(&data.vehicles));
    report.push(reservations_section(&data.reservations, options.sample_size));
    report.push(cross_reference_section(&driver_index, &vehicle_index, &findings));
    report.push(resolution_section(
        &resolved,
        options.sample_size,
        &driver_strategy,
        &vehicle_strategy,
    ));
    report.push(filter_options_section(&resolved, &driver_strategy, &vehicle_strategy));
    report
}

fn display_id(key: Option<&RecordKey>) -> String {
    key.map_or_else(|| "<no id>".to_string(), RecordKey::to_string)
}

fn display_field<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}

fn drivers_section(drivers: &[Driver], unnamed_label: &str) -> ReportSection {
    let nameless: Vec<&Driver> = drivers.iter().filter(|d| !d.has_name()).collect();

    let mut section = ReportSection::new("Drivers");
    section
        .line(format!("Total drivers: {}", drivers.len()))
        .line(format!("With name: {}", drivers.len() - nameless.len()))
        .line(format!("Without name: {}", nameless.len()));
    for driver in nameless {
        section.line(format!("  - {} → {unnamed_label}", display_id(driver.id())));
    }
    section
}

fn vehicles_section(vehicles: &[Vehicle]) -> ReportSection {
    let incomplete: Vec<&Vehicle> = vehicles.iter().filter(|v| !v.is_complete()).collect();

    let mut section = ReportSection::new("Vehicles");
    section
        .line(format!("Total vehicles: {}", vehicles.len()))
        .line(format!(
            "Complete (brand, model, plate): {}",
            vehicles.len() - incomplete.len()
        ))
        .line(format!("Incomplete: {}", incomplete.len()));
    for vehicle in incomplete {
        section.line(format!(
            "  - {}: {}",
            display_id(vehicle.id()),
            display_field(vehicle.description().as_ref())
        ));
    }
    section
}

fn reservations_section(reservations: &[Reservation], sample_size: usize) -> ReportSection {
    let with_driver = reservations.iter().filter(|r| r.driver_id.is_some()).count();
    let with_vehicle = reservations.iter().filter(|r| r.vehicle_id.is_some()).count();
    let sample = &reservations[..sample_size.min(reservations.len())];

    let mut section = ReportSection::new("Reservations");
    section
        .line(format!("Total reservations: {}", reservations.len()))
        .line(format!("With driver_id: {with_driver}"))
        .line(format!("Without driver_id: {}", reservations.len() - with_driver))
        .line(format!("With vehicle_id: {with_vehicle}"))
        .line(format!("Without vehicle_id: {}", reservations.len() - with_vehicle))
        .line(format!("Sample (first {}):", sample.len()));
    if sample.is_empty() {
        section.line("  (none)");
    }
    for r in sample {
        section.line(format!(
            "  {}: driver_id={}, vehicle_id={}, driver_name={}, vehicle={}",
            display_id(r.id()),
            display_field(r.driver_id.as_ref()),
            display_field(r.vehicle_id.as_ref()),
            display_field(r.driver_name.as_ref()),
            display_field(r.vehicle.as_ref()),
        ));
    }
    section
}

fn cross_reference_section(
    driver_index: &MembershipIndex,
    vehicle_index: &MembershipIndex,
    findings: &[Finding],
) -> ReportSection {
    let missing = |target: Section| {
        findings
            .iter()
            .filter(|f| f.target_name == target.as_str())
            .count()
    };

    let mut section = ReportSection::new("Cross-reference");
    section
        .line(format!("Distinct driver ids: {}", driver_index.len()))
        .line(format!("Distinct vehicle ids: {}", vehicle_index.len()))
        .line(format!(
            "Reservations with missing driver: {}",
            missing(Section::Drivers)
        ))
        .line(format!(
            "Reservations with missing vehicle: {}",
            missing(Section::Vehicles)
        ));
    for finding in findings {
        section.line(format!(
            "  - reservation {}: {}={} not found in {}",
            display_id(finding.record_id.as_ref()),
            finding.foreign_key_field,
            finding.value,
            finding.target_name
        ));
    }
    section
}

fn resolution_section(
    resolved: &[Resolved<'_>],
    sample_size: usize,
    driver_strategy: &LabelStrategy<Reservation, Driver>,
    vehicle_strategy: &LabelStrategy<Reservation, Vehicle>,
) -> ReportSection {
    fn describe<T>(resolution: &Resolution<'_, T>) -> String {
        if resolution.is_matched() {
            resolution.label().to_string()
        } else {
            format!("{} [unresolved]", resolution.label())
        }
    }

    let unresolved_drivers = resolved.iter().filter(|r| !r.driver.is_matched()).count();
    let unresolved_vehicles = resolved.iter().filter(|r| !r.vehicle.is_matched()).count();

    let mut section = ReportSection::new("Resolution simulation");
    section.line(format!(
        "Label chains: driver={}, vehicle={}",
        driver_strategy.name, vehicle_strategy.name
    ));
    for entry in resolved.iter().take(sample_size) {
        section.line(format!(
            "  {}: driver={} | vehicle={}",
            display_id(entry.reservation.id()),
            describe(&entry.driver),
            describe(&entry.vehicle)
        ));
    }
    section
        .line(format!(
            "Unresolved drivers: {unresolved_drivers} of {}",
            resolved.len()
        ))
        .line(format!(
            "Unresolved vehicles: {unresolved_vehicles} of {}",
            resolved.len()
        ));
    section
}

fn filter_options_section(
    resolved: &[Resolved<'_>],
    driver_strategy: &LabelStrategy<Reservation, Driver>,
    vehicle_strategy: &LabelStrategy<Reservation, Vehicle>,
) -> ReportSection {
    let drivers = option_labels(
        resolved.iter().map(|r| r.driver.label()),
        &driver_strategy.default_label,
    );
    let vehicles = option_labels(
        resolved.iter().map(|r| r.vehicle.label()),
        &vehicle_strategy.default_label,
    );

    let mut section = ReportSection::new("Filter options");
    section.line(format!("Driver options: {}", drivers.len()));
    for label in &drivers {
        section.line(format!("  - {label}"));
    }
    section.line(format!("Vehicle options: {}", vehicles.len()));
    for label in &vehicles {
        section.line(format!("  - {label}"));
    }
    section
}

/// Distinct labels a filter dropdown would offer, sorted, sentinel excluded.
fn option_labels<'a>(labels: impl Iterator<Item = &'a str>, default: &str) -> BTreeSet<String> {
    labels
        .filter(|label| *label != default)
        .map(str::to_string)
        .collect()
}
