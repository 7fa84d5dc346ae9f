//! Ship subcommands.

use clap::Subcommand;

use cargoyard_lib::{HazardNotifier, Result, ShipSpec, ShipSummary, Yard};

use crate::output::Outcome;

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShipCommand {
    /// Register a new ship.
    Add {
        /// Ship name (quote names containing spaces).
        name: String,
        /// Maximum number of containers aboard.
        #[arg(long = "max-containers")]
        max_containers: usize,
        /// Maximum total weight in tonnes.
        #[arg(long = "max-weight")]
        max_weight_tons: f64,
        /// Cruising speed in knots.
        #[arg(long = "speed", default_value_t = 0.0)]
        speed_knots: f64,
    },
    /// Delete a ship; its containers return to the unassigned pool.
    Delete {
        name: String,
    },
    /// List every ship.
    List,
    /// Show one ship and its manifest.
    Show {
        name: String,
    },
}

/// Execute a ship subcommand against the yard.
pub fn handle_ship<N: HazardNotifier>(yard: &mut Yard<N>, command: ShipCommand) -> Result<Outcome> {
    match command {
        ShipCommand::Add {
            name,
            max_containers,
            max_weight_tons,
            speed_knots,
        } => {
            let ship = yard.create_ship(ShipSpec::new(
                name,
                max_containers,
                max_weight_tons,
                speed_knots,
            ))?;
            Ok(Outcome::message(format!("added ship {}", ship.describe())))
        }
        ShipCommand::Delete { name } => {
            let removal = yard.delete_ship(&name)?;
            let text = if removal.returned.is_empty() {
                format!("deleted ship {}", removal.spec.name)
            } else {
                format!(
                    "deleted ship {}; returned {} container(s) to the pool: {}",
                    removal.spec.name,
                    removal.returned.len(),
                    removal
                        .returned
                        .iter()
                        .map(|serial| serial.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            };
            Ok(Outcome::message(text))
        }
        ShipCommand::List => Ok(Outcome::Ships {
            ships: yard.ships().iter().map(ShipSummary::from).collect(),
        }),
        ShipCommand::Show { name } => {
            let ship = yard.lookup_ship(&name)?;
            Ok(Outcome::Ship {
                ship: ShipSummary::from(ship),
            })
        }
    }
}
