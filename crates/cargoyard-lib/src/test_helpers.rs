// Test-only helpers for `cargoyard-lib` tests
#![allow(dead_code)]
use crate::container::{Container, ContainerKind, ContainerSpec, SerialSequence};

/// Builder to create `ContainerSpec` instances in tests with sensible defaults.
pub struct ContainerSpecBuilder {
    spec: ContainerSpec,
}

impl ContainerSpecBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spec: ContainerSpec {
                max_capacity_kg: 1000.0,
                own_weight_kg: 100.0,
                height_cm: 259.0,
                depth_cm: 606.0,
                kind: ContainerKind::Liquid { hazardous: false },
            },
        }
    }

    pub fn kind(mut self, kind: ContainerKind) -> Self {
        self.spec.kind = kind;
        self
    }

    pub fn max_capacity_kg(mut self, value: f64) -> Self {
        self.spec.max_capacity_kg = value;
        self
    }

    pub fn own_weight_kg(mut self, value: f64) -> Self {
        self.spec.own_weight_kg = value;
        self
    }

    pub fn height_cm(mut self, value: f64) -> Self {
        self.spec.height_cm = value;
        self
    }

    pub fn depth_cm(mut self, value: f64) -> Self {
        self.spec.depth_cm = value;
        self
    }

    pub fn build(self) -> ContainerSpec {
        self.spec
    }
}

impl Default for ContainerSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty non-hazardous liquid container built from the builder defaults.
pub fn sample_container(serials: &mut SerialSequence) -> Container {
    Container::new(ContainerSpecBuilder::new().build(), serials).expect("valid sample container")
}
