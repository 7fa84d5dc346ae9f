//! Container subcommands.

use clap::{Args, Subcommand};

use cargoyard_lib::{
    ContainerKind, ContainerSpec, ContainerSummary, HazardNotifier, Location, Result, Yard,
};

use crate::output::Outcome;

/// Dimensions and weights shared by every container kind.
#[derive(Args, Debug, PartialEq)]
pub struct ContainerDimensions {
    /// Rated cargo capacity in kilograms.
    #[arg(long = "capacity")]
    pub max_capacity_kg: f64,
    /// Empty container weight in kilograms.
    #[arg(long = "own-weight")]
    pub own_weight_kg: f64,
    /// Height in centimetres.
    #[arg(long = "height")]
    pub height_cm: f64,
    /// Depth in centimetres.
    #[arg(long = "depth")]
    pub depth_cm: f64,
}

impl ContainerDimensions {
    fn into_spec(self, kind: ContainerKind) -> ContainerSpec {
        ContainerSpec::new(
            self.max_capacity_kg,
            self.own_weight_kg,
            self.height_cm,
            self.depth_cm,
            kind,
        )
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum NewContainer {
    /// Liquid container (hazardous liquids fill to 50%, others to 90%).
    Liquid {
        #[command(flatten)]
        dimensions: ContainerDimensions,
        /// Mark the cargo as hazardous.
        #[arg(long)]
        hazardous: bool,
    },
    /// Gas container.
    Gas {
        #[command(flatten)]
        dimensions: ContainerDimensions,
        /// Pressure in atmospheres.
        #[arg(long = "pressure")]
        pressure_atm: f64,
    },
    /// Refrigerated container.
    Refrigerated {
        #[command(flatten)]
        dimensions: ContainerDimensions,
        /// Product carried (e.g. Bananas).
        #[arg(long = "product")]
        product_type: String,
        /// Holding temperature in °C.
        #[arg(long = "temperature", allow_negative_numbers = true)]
        temperature_c: f64,
    },
}

impl NewContainer {
    fn into_spec(self) -> ContainerSpec {
        match self {
            NewContainer::Liquid {
                dimensions,
                hazardous,
            } => dimensions.into_spec(ContainerKind::Liquid { hazardous }),
            NewContainer::Gas {
                dimensions,
                pressure_atm,
            } => dimensions.into_spec(ContainerKind::Gas { pressure_atm }),
            NewContainer::Refrigerated {
                dimensions,
                product_type,
                temperature_c,
            } => dimensions.into_spec(ContainerKind::Refrigerated {
                product_type,
                temperature_c,
            }),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ContainerCommand {
    /// Create a container in the unassigned pool.
    #[command(subcommand)]
    Add(NewContainer),
    /// List unassigned containers.
    List,
    /// Show one container and where it is.
    Show { serial: String },
    /// Add cargo (kilograms) to a container.
    Load {
        serial: String,
        #[arg(allow_negative_numbers = true)]
        weight_kg: f64,
    },
    /// Empty a container (gas containers keep a 5% residue).
    Unload { serial: String },
}

/// Execute a container subcommand against the yard.
pub fn handle_container<N: HazardNotifier>(
    yard: &mut Yard<N>,
    command: ContainerCommand,
) -> Result<Outcome> {
    match command {
        ContainerCommand::Add(new) => {
            let serial = yard.create_container(new.into_spec())?;
            Ok(Outcome::message(format!("created container {serial}")))
        }
        ContainerCommand::List => Ok(Outcome::Containers {
            containers: yard.unassigned().iter().map(ContainerSummary::from).collect(),
        }),
        ContainerCommand::Show { serial } => describe(yard, &serial),
        ContainerCommand::Load { serial, weight_kg } => {
            yard.load_cargo(&serial, weight_kg)?;
            describe(yard, &serial)
        }
        ContainerCommand::Unload { serial } => {
            yard.unload_cargo(&serial)?;
            describe(yard, &serial)
        }
    }
}

fn describe<N: HazardNotifier>(yard: &Yard<N>, serial: &str) -> Result<Outcome> {
    let container = yard.lookup_container(serial)?;
    let location = yard.locate(serial).unwrap_or(Location::Unassigned);
    Ok(Outcome::Container {
        container: ContainerSummary::from(container),
        location,
    })
}
