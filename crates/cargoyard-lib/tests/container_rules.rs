mod common;

use cargoyard_lib::container::GAS_RESIDUE_RATIO;
use cargoyard_lib::{Error, Location};

use common::{fixture_yard, gas, liquid, reefer};

#[test]
fn successful_loads_accumulate_deltas() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(2000.0, 300.0, false))
        .expect("valid container");

    let deltas = [120.0, 300.5, 79.5, 600.0];
    for delta in deltas {
        yard.load_cargo(serial.as_str(), delta).expect("within ceiling");
    }

    let container = yard.container(serial.as_str()).expect("container exists");
    assert_eq!(container.cargo_kg(), deltas.iter().sum::<f64>());
    assert!(container.cargo_kg() <= container.ceiling_kg());
    assert!(yard.notifier().notices().is_empty());
}

#[test]
fn hazardous_liquid_example_fires_one_notice() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(1000.0, 200.0, true))
        .expect("valid container");

    yard.load_cargo(serial.as_str(), 400.0).expect("400 <= 500");
    let err = yard
        .load_cargo(serial.as_str(), 150.0)
        .expect_err("550 > 500");

    assert_eq!(
        err,
        Error::Overfill {
            serial: serial.to_string(),
            attempted_kg: 550.0,
            ceiling_kg: 500.0,
        }
    );
    let notices = yard.notifier().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].serial, serial);
    assert_eq!(notices[0].attempted_kg, 550.0);
    assert_eq!(
        yard.container(serial.as_str()).map(|c| c.cargo_kg()),
        Some(400.0)
    );
}

#[test]
fn every_hazardous_breach_notifies_exactly_once() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(1000.0, 200.0, true))
        .expect("valid container");

    for attempt in 1..=3 {
        assert!(yard.load_cargo(serial.as_str(), 501.0).is_err());
        assert_eq!(yard.notifier().notices().len(), attempt);
    }
}

#[test]
fn non_hazardous_liquid_allows_ninety_percent() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(1000.0, 200.0, false))
        .expect("valid container");

    yard.load_cargo(serial.as_str(), 900.0).expect("900 <= 900");
    let err = yard.load_cargo(serial.as_str(), 1.0).expect_err("901 > 900");
    assert!(matches!(err, Error::Overfill { ceiling_kg, .. } if ceiling_kg == 900.0));
}

#[test]
fn gas_unload_keeps_five_percent_aboard() {
    let mut yard = fixture_yard();
    let serial = yard.create_container(gas(5000.0, 800.0)).expect("valid container");

    yard.load_cargo(serial.as_str(), 3000.0).expect("within capacity");
    yard.unload_cargo(serial.as_str()).expect("unload");

    let cargo = yard
        .container(serial.as_str())
        .map(|c| c.cargo_kg())
        .expect("container exists");
    assert!((cargo - 3000.0 * GAS_RESIDUE_RATIO).abs() < 1e-9);

    yard.unload_cargo(serial.as_str()).expect("second unload");
    let cargo_after = yard
        .container(serial.as_str())
        .map(|c| c.cargo_kg())
        .expect("container exists");
    assert!((cargo_after - cargo * GAS_RESIDUE_RATIO).abs() < 1e-9);
}

#[test]
fn gas_and_refrigerated_overfills_send_no_notice() {
    let mut yard = fixture_yard();
    let gas_serial = yard.create_container(gas(1000.0, 100.0)).expect("valid");
    let reefer_serial = yard.create_container(reefer(1000.0, 100.0)).expect("valid");

    let err = yard
        .load_cargo(gas_serial.as_str(), 1000.5)
        .expect_err("gas above rated capacity");
    assert!(matches!(err, Error::Overfill { .. }));
    assert!(yard.load_cargo(reefer_serial.as_str(), 1000.5).is_err());

    assert!(yard.notifier().notices().is_empty());
    assert_eq!(
        yard.container(gas_serial.as_str()).map(|c| c.cargo_kg()),
        Some(0.0)
    );

    yard.load_cargo(reefer_serial.as_str(), 1000.0)
        .expect("reefer fills to rated capacity");
    yard.unload_cargo(reefer_serial.as_str()).expect("unload");
    assert_eq!(
        yard.container(reefer_serial.as_str()).map(|c| c.cargo_kg()),
        Some(0.0)
    );
}

#[test]
fn serials_share_one_sequence_across_kinds() {
    let mut yard = fixture_yard();
    let a = yard.create_container(liquid(100.0, 10.0, true)).expect("valid");
    let b = yard.create_container(gas(100.0, 10.0)).expect("valid");
    let c = yard.create_container(reefer(100.0, 10.0)).expect("valid");

    assert_eq!(a.as_str(), "KON-L-1");
    assert_eq!(b.as_str(), "KON-G-2");
    assert_eq!(c.as_str(), "KON-C-3");
    assert_eq!(yard.locate(c.as_str()), Some(Location::Unassigned));
}

#[test]
fn invalid_container_is_rejected_without_side_effects() {
    let mut yard = fixture_yard();
    let err = yard
        .create_container(liquid(0.0, 10.0, false))
        .expect_err("zero capacity");
    assert!(matches!(err, Error::InvalidContainer { .. }));
    assert!(yard.unassigned().is_empty());

    let serial = yard.create_container(liquid(10.0, 1.0, false)).expect("valid");
    assert_eq!(serial.as_str(), "KON-L-1");
}

#[test]
fn unknown_container_is_a_soft_failure() {
    let mut yard = fixture_yard();
    let err = yard.load_cargo("KON-L-404", 1.0).expect_err("missing");
    assert!(err.is_not_found());
    assert!(yard.unload_cargo("KON-L-404").unwrap_err().is_not_found());
}
