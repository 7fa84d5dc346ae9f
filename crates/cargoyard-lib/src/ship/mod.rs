//! Ships, their manifests, and fleet roster loading.
//!
//! - [`spec`] - Ship limits and validation
//! - [`roster`] - CSV fleet roster loading
//!
//! A [`Ship`] owns its manifest and enforces two limits on every load: the
//! number of containers and the aggregate gross weight (own weight plus
//! cargo) in kilograms.

pub mod roster;
pub mod spec;

use std::fmt;

use tracing::{debug, warn};

use crate::container::{Container, HazardNotifier};
use crate::error::{Error, Result};
use crate::pool::ContainerPool;

pub use roster::FleetRoster;
pub use spec::ShipSpec;

/// A container the ship refused, handed back together with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRejection {
    pub container: Container,
    pub error: Error,
}

impl From<LoadRejection> for Error {
    fn from(rejection: LoadRejection) -> Self {
        rejection.error
    }
}

/// A ship and its ordered manifest (insertion order = load order).
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    spec: ShipSpec,
    containers: Vec<Container>,
}

impl Ship {
    /// Validate `spec` and create a ship with an empty manifest.
    pub fn new(spec: ShipSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            containers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn spec(&self) -> &ShipSpec {
        &self.spec
    }

    pub fn max_containers(&self) -> usize {
        self.spec.max_containers
    }

    pub fn max_weight_tons(&self) -> f64 {
        self.spec.max_weight_tons
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.spec.max_weight_kg()
    }

    pub fn speed_knots(&self) -> f64 {
        self.spec.speed_knots
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn container(&self, serial: &str) -> Option<&Container> {
        self.position(serial).map(|index| &self.containers[index])
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.position(serial).is_some()
    }

    /// Sum of own weight plus cargo across the manifest, in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.containers.iter().map(Container::gross_weight_kg).sum()
    }

    /// Check both ship limits against adding `container`, without mutating.
    pub fn ensure_room_for(&self, container: &Container) -> Result<()> {
        if self.contains(container.serial().as_str()) {
            return Err(Error::DuplicateContainer {
                serial: container.serial().to_string(),
            });
        }

        if self.containers.len() >= self.spec.max_containers {
            return Err(Error::ContainerLimitReached {
                ship: self.spec.name.clone(),
                limit: self.spec.max_containers,
            });
        }

        let attempted_kg = self.total_weight_kg() + container.gross_weight_kg();
        let limit_kg = self.max_weight_kg();
        if attempted_kg > limit_kg {
            return Err(Error::ShipOverweight {
                ship: self.spec.name.clone(),
                attempted_kg,
                limit_kg,
            });
        }

        Ok(())
    }

    /// Append `container` to the manifest if both limits allow it.
    ///
    /// The caller is responsible for detaching the container from wherever it
    /// came from. A refused container is handed back inside the rejection.
    pub fn load_container(
        &mut self,
        container: Container,
    ) -> std::result::Result<(), LoadRejection> {
        if let Err(error) = self.ensure_room_for(&container) {
            warn!(
                ship = %self.spec.name,
                serial = %container.serial(),
                %error,
                "ship refused container"
            );
            return Err(LoadRejection { container, error });
        }

        debug!(ship = %self.spec.name, serial = %container.serial(), "container loaded onto ship");
        self.containers.push(container);
        Ok(())
    }

    /// Detach a container from the manifest without placing it anywhere.
    pub fn detach(&mut self, serial: &str) -> Option<Container> {
        let index = self.position(serial)?;
        Some(self.containers.remove(index))
    }

    /// Remove a container and hand it back to the unassigned pool.
    ///
    /// Returns `false` when no container with that serial is aboard, or when
    /// the pool refuses it; a refused container stays where it was.
    pub fn remove_container(&mut self, serial: &str, pool: &mut ContainerPool) -> bool {
        let Some(index) = self.position(serial) else {
            return false;
        };

        let container = self.containers.remove(index);
        match pool.insert(container) {
            Ok(()) => {
                debug!(ship = %self.spec.name, serial, "container returned to pool");
                true
            }
            Err(container) => {
                warn!(ship = %self.spec.name, serial, "pool refused container");
                self.containers.insert(index, container);
                false
            }
        }
    }

    /// Move a container from this ship onto `target`.
    ///
    /// Returns `Ok(false)` when the container is not aboard. If `target`
    /// refuses the container, it stays in this manifest at its original
    /// position and the refusal is returned.
    pub fn transfer_container(&mut self, target: &mut Ship, serial: &str) -> Result<bool> {
        let Some(index) = self.position(serial) else {
            return Ok(false);
        };

        target.ensure_room_for(&self.containers[index])?;
        let container = self.containers.remove(index);
        if let Err(rejection) = target.load_container(container) {
            self.containers.insert(index, rejection.container);
            return Err(rejection.error);
        }
        Ok(true)
    }

    /// Load cargo into a container aboard, enforcing the ship's weight limit too.
    ///
    /// The container's own ceiling is checked first (and may fire a hazard
    /// notice); the ship limit is checked before anything is committed.
    pub fn load_cargo<N>(&mut self, serial: &str, weight_kg: f64, notifier: &mut N) -> Result<()>
    where
        N: HazardNotifier + ?Sized,
    {
        let index = self.position(serial).ok_or_else(|| Error::UnknownContainer {
            serial: serial.to_string(),
        })?;

        let cargo_kg = self.containers[index].admit(weight_kg, notifier)?;
        let attempted_kg =
            self.total_weight_kg() - self.containers[index].cargo_kg() + cargo_kg;
        let limit_kg = self.max_weight_kg();
        if attempted_kg > limit_kg {
            return Err(Error::ShipOverweight {
                ship: self.spec.name.clone(),
                attempted_kg,
                limit_kg,
            });
        }

        self.containers[index].set_cargo_kg(cargo_kg);
        debug!(ship = %self.spec.name, serial, cargo_kg, "loaded cargo aboard");
        Ok(())
    }

    /// Unload a container aboard.
    pub fn unload_cargo(&mut self, serial: &str) -> Result<()> {
        let index = self.position(serial).ok_or_else(|| Error::UnknownContainer {
            serial: serial.to_string(),
        })?;
        self.containers[index].unload()
    }

    /// Textual description: name, speed, limits, and current container count.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Drain the manifest, leaving the ship empty.
    pub(crate) fn take_containers(&mut self) -> Vec<Container> {
        std::mem::take(&mut self.containers)
    }

    /// Put back a manifest drained with [`Ship::take_containers`].
    pub(crate) fn restore_containers(&mut self, containers: Vec<Container>) {
        self.containers = containers;
    }

    fn position(&self, serial: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| c.serial().matches(serial))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (speed={:.1} kn, maxContainers={}, maxWeight={:.1} t, containers={})",
            self.spec.name,
            self.spec.speed_knots,
            self.spec.max_containers,
            self.spec.max_weight_tons,
            self.containers.len()
        )
    }
}

/// Normalize a ship name for case-insensitive lookup.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
