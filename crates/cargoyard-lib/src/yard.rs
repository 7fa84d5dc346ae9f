//! The yard: every ship, the unassigned pool, and the moves between them.
//!
//! [`Yard`] is the entry point shells should use. It owns the serial
//! sequence, so container identities are issued in one place, and it owns
//! the hazard notifier passed down to container loads. Each container lives
//! in exactly one place at a time: the unassigned pool or a single ship's
//! manifest. Every move below either completes or leaves both sides as they
//! were.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::container::{
    Container, ContainerSpec, HazardNotifier, SerialNumber, SerialSequence,
    TracingHazardNotifier,
};
use crate::error::{Error, Result};
use crate::pool::ContainerPool;
use crate::ship::{normalize_name, FleetRoster, Ship, ShipSpec};

/// Maximum number of "did you mean" suggestions attached to unknown ship errors.
const MAX_SHIP_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a ship name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Where a container currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "location", rename_all = "snake_case")]
pub enum Location {
    Unassigned,
    Aboard { ship: String },
}

/// Result of deleting a ship.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipRemoval {
    pub spec: ShipSpec,
    /// Containers that were aboard and went back to the unassigned pool.
    pub returned: Vec<SerialNumber>,
}

/// Ships and unassigned containers, with the operations that move containers
/// between them.
#[derive(Debug)]
pub struct Yard<N = TracingHazardNotifier> {
    ships: Vec<Ship>,
    pool: ContainerPool,
    serials: SerialSequence,
    notifier: N,
}

impl Yard<TracingHazardNotifier> {
    pub fn new() -> Self {
        Self::with_notifier(TracingHazardNotifier)
    }
}

impl Default for Yard<TracingHazardNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: HazardNotifier> Yard<N> {
    /// Create an empty yard that sends hazard notices to `notifier`.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            ships: Vec::new(),
            pool: ContainerPool::new(),
            serials: SerialSequence::new(),
            notifier,
        }
    }

    /// Add every ship listed in `roster`.
    pub fn add_roster(&mut self, roster: FleetRoster) -> Result<()> {
        for spec in roster.into_ships() {
            self.create_ship(spec)?;
        }
        Ok(())
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Register a new ship. Names are unique, compared case-insensitively.
    pub fn create_ship(&mut self, spec: ShipSpec) -> Result<&Ship> {
        let ship = Ship::new(spec)?;
        if self.ship_index(ship.name()).is_some() {
            return Err(Error::DuplicateShipName {
                name: ship.name().to_string(),
            });
        }

        info!(ship = %ship.name(), "ship registered");
        self.ships.push(ship);
        let last = self.ships.len() - 1;
        Ok(&self.ships[last])
    }

    /// Delete a ship by name. Any containers aboard go back to the unassigned pool.
    pub fn delete_ship(&mut self, name: &str) -> Result<ShipRemoval> {
        let index = self.require_ship(name)?;
        let containers = self.ships[index].take_containers();
        let returned: Vec<SerialNumber> =
            containers.iter().map(|c| c.serial().clone()).collect();
        if let Err(rejection) = self.pool.insert_all(containers) {
            self.ships[index].restore_containers(rejection.containers);
            return Err(Error::DuplicateContainer {
                serial: rejection.serial.to_string(),
            });
        }
        let ship = self.ships.remove(index);

        info!(
            ship = %ship.name(),
            returned = returned.len(),
            "ship deleted"
        );
        Ok(ShipRemoval {
            spec: ship.spec().clone(),
            returned,
        })
    }

    /// Create a container in the unassigned pool and return its serial.
    pub fn create_container(&mut self, spec: ContainerSpec) -> Result<SerialNumber> {
        let container = Container::new(spec, &mut self.serials)?;
        let serial = container.serial().clone();
        self.pool
            .insert(container)
            .map_err(|_| Error::DuplicateContainer {
                serial: serial.to_string(),
            })?;
        debug!(%serial, "container created");
        Ok(serial)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn unassigned(&self) -> &ContainerPool {
        &self.pool
    }

    /// Look up a ship by name (case-insensitive).
    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ship_index(name).map(|index| &self.ships[index])
    }

    /// Like [`Yard::ship`], but a miss becomes [`Error::UnknownShip`] with suggestions.
    pub fn lookup_ship(&self, name: &str) -> Result<&Ship> {
        let index = self.require_ship(name)?;
        Ok(&self.ships[index])
    }

    /// Like [`Yard::container`], but a miss becomes [`Error::UnknownContainer`].
    pub fn lookup_container(&self, serial: &str) -> Result<&Container> {
        self.container(serial).ok_or_else(|| Error::UnknownContainer {
            serial: serial.to_string(),
        })
    }

    /// Look up a container wherever it lives.
    pub fn container(&self, serial: &str) -> Option<&Container> {
        self.pool
            .get(serial)
            .or_else(|| self.ships.iter().find_map(|ship| ship.container(serial)))
    }

    /// Report where a container currently lives.
    pub fn locate(&self, serial: &str) -> Option<Location> {
        if self.pool.contains(serial) {
            return Some(Location::Unassigned);
        }
        self.ships
            .iter()
            .find(|ship| ship.contains(serial))
            .map(|ship| Location::Aboard {
                ship: ship.name().to_string(),
            })
    }

    /// Move a container from the unassigned pool onto a ship.
    pub fn load_onto_ship(&mut self, serial: &str, ship_name: &str) -> Result<()> {
        let index = self.require_ship(ship_name)?;
        let Some(container) = self.pool.get(serial) else {
            return Err(self.missing_from_pool(serial));
        };

        if let Err(error) = self.ships[index].ensure_room_for(container) {
            warn!(ship = %self.ships[index].name(), serial, %error, "load refused");
            return Err(error);
        }
        let (position, container) =
            self.pool
                .take_indexed(serial)
                .ok_or_else(|| Error::UnknownContainer {
                    serial: serial.to_string(),
                })?;
        if let Err(rejection) = self.ships[index].load_container(container) {
            self.pool.restore(position, rejection.container);
            return Err(rejection.error);
        }
        Ok(())
    }

    /// Take a container off a ship and put it back in the unassigned pool.
    ///
    /// A container the pool refuses stays aboard.
    pub fn remove_from_ship(&mut self, ship_name: &str, serial: &str) -> Result<()> {
        let index = self.require_ship(ship_name)?;
        if !self.ships[index].contains(serial) {
            return Err(Error::UnknownContainer {
                serial: serial.to_string(),
            });
        }
        if self.ships[index].remove_container(serial, &mut self.pool) {
            Ok(())
        } else {
            Err(Error::DuplicateContainer {
                serial: serial.to_string(),
            })
        }
    }

    /// Move a container directly from one ship to another.
    ///
    /// If the destination refuses it, the container stays on the origin ship.
    pub fn transfer(&mut self, from_ship: &str, to_ship: &str, serial: &str) -> Result<()> {
        let from = self.require_ship(from_ship)?;
        let to = self.require_ship(to_ship)?;
        if from == to {
            return Err(Error::TransferToSameShip {
                ship: self.ships[from].name().to_string(),
            });
        }

        let (origin, target) = pair_mut(&mut self.ships, from, to);
        let moved = origin.transfer_container(target, serial).inspect_err(|error| {
            warn!(serial, to = %target.name(), %error, "transfer refused");
        })?;
        if moved {
            debug!(
                serial,
                from = %origin.name(),
                to = %target.name(),
                "container transferred"
            );
            Ok(())
        } else {
            Err(Error::UnknownContainer {
                serial: serial.to_string(),
            })
        }
    }

    /// Load cargo into a container, wherever it lives.
    ///
    /// Containers aboard a ship are also held to that ship's weight limit.
    pub fn load_cargo(&mut self, serial: &str, weight_kg: f64) -> Result<()> {
        if let Some(container) = self.pool.get_mut(serial) {
            return container.load(weight_kg, &mut self.notifier);
        }

        let notifier = &mut self.notifier;
        match self.ships.iter_mut().find(|ship| ship.contains(serial)) {
            Some(ship) => ship.load_cargo(serial, weight_kg, notifier),
            None => Err(Error::UnknownContainer {
                serial: serial.to_string(),
            }),
        }
    }

    /// Unload a container, wherever it lives.
    pub fn unload_cargo(&mut self, serial: &str) -> Result<()> {
        if let Some(container) = self.pool.get_mut(serial) {
            return container.unload();
        }

        match self.ships.iter_mut().find(|ship| ship.contains(serial)) {
            Some(ship) => ship.unload_cargo(serial),
            None => Err(Error::UnknownContainer {
                serial: serial.to_string(),
            }),
        }
    }

    fn ship_index(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.ships
            .iter()
            .position(|ship| normalize_name(ship.name()) == key)
    }

    fn require_ship(&self, name: &str) -> Result<usize> {
        self.ship_index(name).ok_or_else(|| Error::UnknownShip {
            name: name.to_string(),
            suggestions: self.fuzzy_ship_matches(name),
        })
    }

    fn missing_from_pool(&self, serial: &str) -> Error {
        match self.locate(serial) {
            Some(Location::Aboard { ship }) => Error::AlreadyAboard {
                serial: serial.to_string(),
                ship,
            },
            _ => Error::UnknownContainer {
                serial: serial.to_string(),
            },
        }
    }

    /// Ship names close to `name`, best match first.
    fn fuzzy_ship_matches(&self, name: &str) -> Vec<String> {
        let key = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .ships
            .iter()
            .map(|ship| {
                let score = strsim::jaro_winkler(&key, &normalize_name(ship.name()));
                (score, ship.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(MAX_SHIP_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Borrow two distinct ships mutably.
fn pair_mut(ships: &mut [Ship], a: usize, b: usize) -> (&mut Ship, &mut Ship) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = ships.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = ships.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
