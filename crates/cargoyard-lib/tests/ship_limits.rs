mod common;

use cargoyard_lib::{Error, ShipSpec, Yard};

use common::{fixture_yard, gas, liquid, reefer};

#[test]
fn single_slot_ship_refuses_second_container_regardless_of_weight() {
    let mut yard = fixture_yard();
    let first = yard.create_container(liquid(10.0, 1.0, false)).expect("valid");
    let second = yard.create_container(liquid(10.0, 1.0, false)).expect("valid");

    yard.load_onto_ship(first.as_str(), "Maersk Essen")
        .expect("first container fits");
    let err = yard
        .load_onto_ship(second.as_str(), "Maersk Essen")
        .expect_err("count limit reached");

    assert_eq!(
        err,
        Error::ContainerLimitReached {
            ship: "Maersk Essen".to_string(),
            limit: 1,
        }
    );
    assert!(yard.unassigned().contains(second.as_str()));
}

#[test]
fn total_weight_never_exceeds_limit_after_successful_loads() {
    let mut yard = fixture_yard();
    // Ever Given: 3 containers, 40 t
    let specs = [
        gas(20_000.0, 4_000.0),
        reefer(20_000.0, 5_000.0),
        liquid(30_000.0, 3_000.0, false),
    ];
    let mut serials = Vec::new();
    for spec in specs {
        serials.push(yard.create_container(spec).expect("valid"));
    }
    yard.load_cargo(serials[0].as_str(), 10_000.0).expect("fits");
    yard.load_cargo(serials[1].as_str(), 15_000.0).expect("fits");
    yard.load_cargo(serials[2].as_str(), 9_000.0).expect("fits");

    let mut accepted = 0;
    for serial in &serials {
        if yard.load_onto_ship(serial.as_str(), "Ever Given").is_ok() {
            accepted += 1;
        }
        let ship = yard.ship("Ever Given").expect("ship exists");
        assert!(ship.total_weight_kg() <= ship.max_weight_kg());
        assert!(ship.container_count() <= ship.max_containers());
    }

    // 14 t + 20 t fit, the 12 t liquid container would make 46 t
    assert_eq!(accepted, 2);
    let ship = yard.ship("ever given").expect("case-insensitive lookup");
    assert_eq!(ship.total_weight_kg(), 34_000.0);
}

#[test]
fn overweight_load_is_a_capacity_error() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(20_000.0, 2_000.0, false))
        .expect("valid");
    yard.load_cargo(serial.as_str(), 14_000.0).expect("fits ceiling");

    let err = yard
        .load_onto_ship(serial.as_str(), "Maersk Essen")
        .expect_err("16 t exceeds 15 t");
    assert!(err.is_capacity());
    match err {
        Error::ShipOverweight {
            attempted_kg,
            limit_kg,
            ..
        } => {
            assert_eq!(attempted_kg, 16_000.0);
            assert_eq!(limit_kg, 15_000.0);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn cargo_added_aboard_is_held_to_ship_limit() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(liquid(20_000.0, 5_000.0, true))
        .expect("valid");
    yard.load_onto_ship(serial.as_str(), "Maersk Essen")
        .expect("empty container fits");

    yard.load_cargo(serial.as_str(), 10_000.0)
        .expect("exactly 15 t aboard");
    let err = yard
        .load_cargo(serial.as_str(), 1.0)
        .expect_err("ceiling breach comes first");
    assert!(matches!(err, Error::Overfill { .. }));
    assert_eq!(yard.notifier().notices().len(), 1);

    yard.unload_cargo(serial.as_str()).expect("unload aboard");
    let ship = yard.ship("Maersk Essen").expect("ship exists");
    assert_eq!(ship.total_weight_kg(), 5_000.0);
}

#[test]
fn cargo_load_aboard_rolls_back_on_ship_overweight() {
    let mut yard = fixture_yard();
    let serial = yard
        .create_container(gas(30_000.0, 5_000.0))
        .expect("valid");
    yard.load_onto_ship(serial.as_str(), "Maersk Essen")
        .expect("fits");

    let err = yard
        .load_cargo(serial.as_str(), 10_001.0)
        .expect_err("ship limit breached");
    assert!(err.is_capacity());
    assert_eq!(
        yard.container(serial.as_str()).map(|c| c.cargo_kg()),
        Some(0.0)
    );
}

#[test]
fn invalid_ship_specs_are_rejected() {
    let mut yard = Yard::new();
    let err = yard
        .create_ship(ShipSpec::new("Ghost", 0, 10.0, 5.0))
        .expect_err("zero containers");
    assert!(matches!(err, Error::InvalidShip { .. }));
    assert!(yard.ships().is_empty());
}
