//! The unassigned container pool.

use std::collections::HashSet;

use serde::Serialize;

use crate::container::{Container, SerialNumber};

/// Containers the pool refused, handed back with the first clashing serial.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRejection {
    pub containers: Vec<Container>,
    pub serial: SerialNumber,
}

/// Ordered set of containers not currently aboard any ship, keyed by serial.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ContainerPool {
    containers: Vec<Container>,
}

impl ContainerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a container.
    ///
    /// A container whose serial is already pooled is refused and handed back.
    pub fn insert(&mut self, container: Container) -> Result<(), Container> {
        if self.contains(container.serial().as_str()) {
            return Err(container);
        }
        self.containers.push(container);
        Ok(())
    }

    /// Append every container, or none of them.
    ///
    /// The batch is refused whole if any serial is already pooled or appears
    /// twice in `containers`.
    pub fn insert_all(&mut self, containers: Vec<Container>) -> Result<(), PoolRejection> {
        let mut seen = HashSet::new();
        let clash = containers.iter().find(|c| {
            let serial = c.serial().as_str();
            self.contains(serial) || !seen.insert(serial.to_ascii_uppercase())
        });
        if let Some(clash) = clash {
            let serial = clash.serial().clone();
            return Err(PoolRejection { containers, serial });
        }
        self.containers.extend(containers);
        Ok(())
    }

    /// Detach a container by serial, preserving the order of the rest.
    pub fn take(&mut self, serial: &str) -> Option<Container> {
        self.take_indexed(serial).map(|(_, container)| container)
    }

    /// Like [`ContainerPool::take`], also reporting where the container sat.
    pub(crate) fn take_indexed(&mut self, serial: &str) -> Option<(usize, Container)> {
        let index = self.position(serial)?;
        Some((index, self.containers.remove(index)))
    }

    /// Put back a container detached with [`ContainerPool::take_indexed`].
    pub(crate) fn restore(&mut self, index: usize, container: Container) {
        let index = index.min(self.containers.len());
        self.containers.insert(index, container);
    }

    pub fn get(&self, serial: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.serial().matches(serial))
    }

    pub fn get_mut(&mut self, serial: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.serial().matches(serial))
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.position(serial).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn position(&self, serial: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.serial().matches(serial))
    }
}
