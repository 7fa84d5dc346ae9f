#![allow(dead_code)]

use std::path::PathBuf;

use cargoyard_lib::{
    ContainerKind, ContainerSpec, FleetRoster, RecordingHazardNotifier, SerialNumber, Yard,
};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Yard seeded with the fixture fleet and a recording hazard notifier.
pub fn fixture_yard() -> Yard<RecordingHazardNotifier> {
    let roster =
        FleetRoster::from_path(&fixtures_dir().join("fleet.csv")).expect("load fixture fleet.csv");
    let mut yard = Yard::with_notifier(RecordingHazardNotifier::new());
    yard.add_roster(roster).expect("fixture ships are valid");
    yard
}

pub fn liquid(max_capacity_kg: f64, own_weight_kg: f64, hazardous: bool) -> ContainerSpec {
    ContainerSpec::new(
        max_capacity_kg,
        own_weight_kg,
        259.0,
        606.0,
        ContainerKind::Liquid { hazardous },
    )
}

pub fn gas(max_capacity_kg: f64, own_weight_kg: f64) -> ContainerSpec {
    ContainerSpec::new(
        max_capacity_kg,
        own_weight_kg,
        259.0,
        606.0,
        ContainerKind::Gas { pressure_atm: 3.5 },
    )
}

pub fn reefer(max_capacity_kg: f64, own_weight_kg: f64) -> ContainerSpec {
    ContainerSpec::new(
        max_capacity_kg,
        own_weight_kg,
        259.0,
        1219.0,
        ContainerKind::Refrigerated {
            product_type: "Bananas".to_string(),
            temperature_c: 13.3,
        },
    )
}

/// Every serial in the yard, pool first, then each ship's manifest in order.
pub fn all_serials(yard: &Yard<RecordingHazardNotifier>) -> Vec<SerialNumber> {
    yard.unassigned()
        .iter()
        .chain(yard.ships().iter().flat_map(|ship| ship.containers()))
        .map(|c| c.serial().clone())
        .collect()
}
