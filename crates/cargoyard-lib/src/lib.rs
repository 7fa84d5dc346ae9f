//! Cargo yard library entry points.
//!
//! This crate models containers of distinct kinds, the ships that carry them,
//! and the yard that moves containers between an unassigned pool and ship
//! manifests while enforcing every capacity rule. Higher-level consumers
//! (the interactive shell) should only depend on the items exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod output;
pub mod pool;
pub mod ship;
pub mod yard;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use container::{
    Container, ContainerKind, ContainerSpec, HazardNotice, HazardNotifier, HazardReporter,
    RecordingHazardNotifier, SerialNumber, SerialSequence, TracingHazardNotifier,
};
pub use error::{Error, Result};
pub use output::{ContainerSummary, ShipSummary, YardSnapshot};
pub use pool::{ContainerPool, PoolRejection};
pub use ship::{FleetRoster, LoadRejection, Ship, ShipSpec};
pub use yard::{Location, ShipRemoval, Yard};
