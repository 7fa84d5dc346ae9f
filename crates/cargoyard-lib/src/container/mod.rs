//! Container data types, load ceilings, and hazard reporting.
//!
//! This module is organized into focused submodules:
//!
//! - [`kind`] - Kind-specific fields and load ceilings
//! - [`serial`] - Serial numbers and the sequence that issues them
//! - [`hazard`] - Hazard notices and notifier sinks
//! - [`constants`] - Shared ratios and unit constants
//!
//! # Example
//!
//! ```
//! use cargoyard_lib::container::{
//!     Container, ContainerKind, ContainerSpec, RecordingHazardNotifier, SerialSequence,
//! };
//!
//! let mut serials = SerialSequence::new();
//! let spec = ContainerSpec::new(1000.0, 250.0, 259.0, 606.0, ContainerKind::Liquid { hazardous: true });
//! let mut container = Container::new(spec, &mut serials).unwrap();
//! let mut notifier = RecordingHazardNotifier::new();
//!
//! container.load(400.0, &mut notifier).unwrap();
//! assert!(container.load(150.0, &mut notifier).is_err());
//! assert_eq!(container.cargo_kg(), 400.0);
//! assert_eq!(notifier.notices().len(), 1);
//! ```

pub mod constants;
pub mod hazard;
pub mod kind;
pub mod serial;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

pub use constants::{
    GAS_RESIDUE_RATIO, HAZARDOUS_LIQUID_RATIO, KG_PER_TONNE, SAFE_LIQUID_RATIO, SERIAL_PREFIX,
};
pub use hazard::{HazardNotice, HazardNotifier, RecordingHazardNotifier, TracingHazardNotifier};
pub use kind::ContainerKind;
pub use serial::{SerialNumber, SerialSequence};

/// Construction parameters for a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub max_capacity_kg: f64,
    pub own_weight_kg: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub kind: ContainerKind,
}

impl ContainerSpec {
    pub fn new(
        max_capacity_kg: f64,
        own_weight_kg: f64,
        height_cm: f64,
        depth_cm: f64,
        kind: ContainerKind,
    ) -> Self {
        Self {
            max_capacity_kg,
            own_weight_kg,
            height_cm,
            depth_cm,
            kind,
        }
    }

    /// Validate container parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.max_capacity_kg, "max_capacity_kg"),
            (self.own_weight_kg, "own_weight_kg"),
            (self.height_cm, "height_cm"),
            (self.depth_cm, "depth_cm"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidContainer {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        self.kind
            .validate()
            .map_err(|message| Error::InvalidContainer { message })
    }
}

/// A cargo container. Cargo weight always stays within `0..=ceiling_kg()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    serial: SerialNumber,
    cargo_kg: f64,
    max_capacity_kg: f64,
    own_weight_kg: f64,
    height_cm: f64,
    depth_cm: f64,
    #[serde(flatten)]
    kind: ContainerKind,
}

impl Container {
    /// Validate `spec` and create an empty container with a fresh serial.
    ///
    /// No serial number is consumed when validation fails.
    pub fn new(spec: ContainerSpec, serials: &mut SerialSequence) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            serial: serials.issue(spec.kind.tag()),
            cargo_kg: 0.0,
            max_capacity_kg: spec.max_capacity_kg,
            own_weight_kg: spec.own_weight_kg,
            height_cm: spec.height_cm,
            depth_cm: spec.depth_cm,
            kind: spec.kind,
        })
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn cargo_kg(&self) -> f64 {
        self.cargo_kg
    }

    pub fn max_capacity_kg(&self) -> f64 {
        self.max_capacity_kg
    }

    pub fn own_weight_kg(&self) -> f64 {
        self.own_weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn depth_cm(&self) -> f64 {
        self.depth_cm
    }

    /// Effective ceiling for cargo loads, which may be tighter than `max_capacity_kg`.
    pub fn ceiling_kg(&self) -> f64 {
        self.kind.ceiling_kg(self.max_capacity_kg)
    }

    /// Own weight plus cargo.
    pub fn gross_weight_kg(&self) -> f64 {
        self.own_weight_kg + self.cargo_kg
    }

    /// Capability query for hazard reporting; `None` for kinds that cannot report.
    pub fn hazard_reporter(&self) -> Option<HazardReporter<'_>> {
        self.kind
            .reports_hazards()
            .then_some(HazardReporter { container: self })
    }

    /// Add `weight_kg` of cargo.
    ///
    /// On a ceiling breach a liquid container first sends one notice through
    /// `notifier`, then the call fails with [`Error::Overfill`]. Other kinds
    /// fail without a notice. The cargo weight is left unchanged on failure.
    pub fn load<N>(&mut self, weight_kg: f64, notifier: &mut N) -> Result<()>
    where
        N: HazardNotifier + ?Sized,
    {
        self.cargo_kg = self.admit(weight_kg, notifier)?;
        debug!(serial = %self.serial, cargo_kg = self.cargo_kg, "loaded cargo");
        Ok(())
    }

    /// Empty the container.
    ///
    /// Gas containers keep [`GAS_RESIDUE_RATIO`] of their cargo aboard: the
    /// unload goes through the base load path with a negative delta, checked
    /// against `max_capacity_kg` rather than the kind's ceiling.
    pub fn unload(&mut self) -> Result<()> {
        match self.kind {
            ContainerKind::Gas { .. } => {
                let delta = -(1.0 - GAS_RESIDUE_RATIO) * self.cargo_kg;
                self.base_load(delta)?;
            }
            ContainerKind::Liquid { .. } | ContainerKind::Refrigerated { .. } => {
                self.cargo_kg = 0.0;
            }
        }
        debug!(serial = %self.serial, cargo_kg = self.cargo_kg, "unloaded cargo");
        Ok(())
    }

    /// Textual description: serial, cargo against capacity, and kind-specific fields.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Compute the cargo weight a load would produce without applying it.
    ///
    /// Fires the hazard notice on a ceiling breach exactly like [`Container::load`].
    pub(crate) fn admit<N>(&self, weight_kg: f64, notifier: &mut N) -> Result<f64>
    where
        N: HazardNotifier + ?Sized,
    {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidCargoWeight { weight: weight_kg });
        }

        let attempted_kg = self.cargo_kg + weight_kg;
        let ceiling_kg = self.ceiling_kg();
        if attempted_kg > ceiling_kg {
            if self.kind.notifies_on_overfill() {
                if let Some(reporter) = self.hazard_reporter() {
                    reporter.notify(notifier, attempted_kg, ceiling_kg);
                }
            }
            return Err(Error::Overfill {
                serial: self.serial.to_string(),
                attempted_kg,
                ceiling_kg,
            });
        }

        Ok(attempted_kg)
    }

    pub(crate) fn set_cargo_kg(&mut self, cargo_kg: f64) {
        self.cargo_kg = cargo_kg;
    }

    fn base_load(&mut self, delta_kg: f64) -> Result<()> {
        let attempted_kg = self.cargo_kg + delta_kg;
        if attempted_kg > self.max_capacity_kg {
            return Err(Error::Overfill {
                serial: self.serial.to_string(),
                attempted_kg,
                ceiling_kg: self.max_capacity_kg,
            });
        }
        self.cargo_kg = attempted_kg.max(0.0);
        Ok(())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] cargo {:.1}/{:.1} kg, {}",
            self.serial,
            self.kind.label(),
            self.cargo_kg,
            self.max_capacity_kg,
            self.kind
        )
    }
}

/// Hazard-reporting capability of a Liquid or Gas container.
#[derive(Debug, Clone, Copy)]
pub struct HazardReporter<'a> {
    container: &'a Container,
}

impl HazardReporter<'_> {
    /// Send a notice about an attempted load of `attempted_kg` against `ceiling_kg`.
    pub fn notify<N>(&self, notifier: &mut N, attempted_kg: f64, ceiling_kg: f64)
    where
        N: HazardNotifier + ?Sized,
    {
        let container = self.container;
        let message = match container.kind {
            ContainerKind::Liquid { hazardous: true } => format!(
                "hazardous liquid in {} would exceed its safe fill level",
                container.serial
            ),
            ContainerKind::Gas { pressure_atm } => format!(
                "gas container {} at {pressure_atm:.1} atm would be overfilled",
                container.serial
            ),
            _ => format!("dangerous load attempted on {}", container.serial),
        };
        notifier.notify(HazardNotice {
            serial: container.serial.clone(),
            attempted_kg,
            ceiling_kg,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ContainerSpecBuilder;

    fn container(kind: ContainerKind, max_capacity_kg: f64) -> Container {
        let spec = ContainerSpecBuilder::new()
            .kind(kind)
            .max_capacity_kg(max_capacity_kg)
            .build();
        Container::new(spec, &mut SerialSequence::new()).expect("valid container")
    }

    #[test]
    fn hazardous_liquid_notifies_once_then_overfills() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut liquid = container(ContainerKind::Liquid { hazardous: true }, 1000.0);

        liquid.load(400.0, &mut notifier).expect("within ceiling");
        assert_eq!(liquid.cargo_kg(), 400.0);

        let err = liquid
            .load(150.0, &mut notifier)
            .expect_err("should exceed 50% ceiling");
        match err {
            Error::Overfill {
                attempted_kg,
                ceiling_kg,
                ..
            } => {
                assert_eq!(attempted_kg, 550.0);
                assert_eq!(ceiling_kg, 500.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(liquid.cargo_kg(), 400.0);
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(notifier.notices()[0].serial, *liquid.serial());
    }

    #[test]
    fn safe_liquid_fills_to_ninety_percent() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut liquid = container(ContainerKind::Liquid { hazardous: false }, 1000.0);

        liquid.load(900.0, &mut notifier).expect("exactly at ceiling");
        assert!(liquid.load(0.5, &mut notifier).is_err());
        assert_eq!(liquid.cargo_kg(), 900.0);
    }

    #[test]
    fn gas_unload_leaves_residue() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut gas = container(ContainerKind::Gas { pressure_atm: 3.0 }, 2000.0);

        gas.load(1000.0, &mut notifier).expect("within capacity");
        gas.unload().expect("negative delta never overfills");
        assert!((gas.cargo_kg() - 50.0).abs() < 1e-9);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn gas_overfill_fails_without_notice() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut gas = container(ContainerKind::Gas { pressure_atm: 3.0 }, 100.0);

        assert!(gas.hazard_reporter().is_some());
        let err = gas.load(101.0, &mut notifier).expect_err("above capacity");
        assert!(matches!(err, Error::Overfill { .. }));
        assert_eq!(gas.cargo_kg(), 0.0);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn refrigerated_overfill_is_silent() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut reefer = container(
            ContainerKind::Refrigerated {
                product_type: "Fish".to_string(),
                temperature_c: 2.0,
            },
            500.0,
        );

        assert!(reefer.hazard_reporter().is_none());
        assert!(reefer.load(501.0, &mut notifier).is_err());
        assert!(notifier.notices().is_empty());

        reefer.load(500.0, &mut notifier).expect("full capacity allowed");
        reefer.unload().expect("unload");
        assert_eq!(reefer.cargo_kg(), 0.0);
    }

    #[test]
    fn rejects_non_positive_weights() {
        let mut notifier = RecordingHazardNotifier::new();
        let mut liquid = container(ContainerKind::Liquid { hazardous: false }, 100.0);

        for weight in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                liquid.load(weight, &mut notifier),
                Err(Error::InvalidCargoWeight { .. })
            ));
        }
        assert_eq!(liquid.cargo_kg(), 0.0);
    }

    #[test]
    fn invalid_spec_does_not_consume_a_serial() {
        let mut serials = SerialSequence::new();
        let spec = ContainerSpecBuilder::new().max_capacity_kg(-1.0).build();

        let err = Container::new(spec, &mut serials).expect_err("negative capacity");
        match err {
            Error::InvalidContainer { message } => assert!(message.contains("max_capacity_kg")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(serials.peek(), 1);
    }

    #[test]
    fn describe_includes_kind_fields() {
        let liquid = container(ContainerKind::Liquid { hazardous: true }, 1000.0);
        let text = liquid.describe();
        assert!(text.starts_with("KON-L-1"));
        assert!(text.contains("0.0/1000.0 kg"));
        assert!(text.contains("hazardous: yes"));
    }
}
