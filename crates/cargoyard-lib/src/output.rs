//! Serializable summaries of containers, ships, and the whole yard.
//!
//! Shells render these either through `render_text` or as JSON.

use std::fmt::Write;

use serde::Serialize;

use crate::container::{Container, ContainerKind, HazardNotifier};
use crate::ship::Ship;
use crate::yard::Yard;

/// Serializable view of a single container.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContainerSummary {
    pub serial: String,
    #[serde(flatten)]
    pub kind: ContainerKind,
    pub cargo_kg: f64,
    pub ceiling_kg: f64,
    pub max_capacity_kg: f64,
    pub own_weight_kg: f64,
    pub gross_weight_kg: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    /// Same text as [`Container::describe`].
    pub description: String,
}

impl From<&Container> for ContainerSummary {
    fn from(container: &Container) -> Self {
        Self {
            serial: container.serial().to_string(),
            kind: container.kind().clone(),
            cargo_kg: container.cargo_kg(),
            ceiling_kg: container.ceiling_kg(),
            max_capacity_kg: container.max_capacity_kg(),
            own_weight_kg: container.own_weight_kg(),
            gross_weight_kg: container.gross_weight_kg(),
            height_cm: container.height_cm(),
            depth_cm: container.depth_cm(),
            description: container.describe(),
        }
    }
}

/// Serializable view of a ship and its manifest.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShipSummary {
    pub name: String,
    pub speed_knots: f64,
    pub max_containers: usize,
    pub max_weight_tons: f64,
    pub container_count: usize,
    pub total_weight_kg: f64,
    pub containers: Vec<ContainerSummary>,
    /// Same text as [`Ship::describe`].
    pub description: String,
}

impl ShipSummary {
    /// Header line followed by one indented line per container.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.description);
        let _ = writeln!(
            buffer,
            "  load: {:.1}/{:.1} kg",
            self.total_weight_kg,
            self.max_weight_tons * crate::container::KG_PER_TONNE
        );
        for container in &self.containers {
            let _ = writeln!(buffer, "  - {}", container.description);
        }
        buffer
    }
}

impl From<&Ship> for ShipSummary {
    fn from(ship: &Ship) -> Self {
        Self {
            name: ship.name().to_string(),
            speed_knots: ship.speed_knots(),
            max_containers: ship.max_containers(),
            max_weight_tons: ship.max_weight_tons(),
            container_count: ship.container_count(),
            total_weight_kg: ship.total_weight_kg(),
            containers: ship.containers().iter().map(ContainerSummary::from).collect(),
            description: ship.describe(),
        }
    }
}

/// Structured representation of the whole yard that shells can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YardSnapshot {
    pub ships: Vec<ShipSummary>,
    pub unassigned: Vec<ContainerSummary>,
}

impl YardSnapshot {
    pub fn capture<N: HazardNotifier>(yard: &Yard<N>) -> Self {
        Self {
            ships: yard.ships().iter().map(ShipSummary::from).collect(),
            unassigned: yard.unassigned().iter().map(ContainerSummary::from).collect(),
        }
    }

    /// Number of containers across the pool and every manifest.
    pub fn container_total(&self) -> usize {
        self.unassigned.len()
            + self
                .ships
                .iter()
                .map(|ship| ship.containers.len())
                .sum::<usize>()
    }

    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Ships ({}):", self.ships.len());
        if self.ships.is_empty() {
            let _ = writeln!(buffer, "  (none)");
        }
        for ship in &self.ships {
            for line in ship.render_text().lines() {
                let _ = writeln!(buffer, "  {line}");
            }
        }

        let _ = writeln!(buffer, "Unassigned containers ({}):", self.unassigned.len());
        if self.unassigned.is_empty() {
            let _ = writeln!(buffer, "  (none)");
        }
        for container in &self.unassigned {
            let _ = writeln!(buffer, "  - {}", container.description);
        }
        buffer
    }
}
