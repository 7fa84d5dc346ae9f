use thiserror::Error;

/// Convenient result alias for the cargo yard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Raised when a cargo load would exceed the container's effective ceiling.
    #[error(
        "container {serial} would be overfilled: {attempted_kg:.1} kg exceeds ceiling of {ceiling_kg:.1} kg"
    )]
    Overfill {
        serial: String,
        attempted_kg: f64,
        ceiling_kg: f64,
    },

    /// Raised when a ship already carries its maximum number of containers.
    #[error("ship {ship} cannot take more than {limit} containers")]
    ContainerLimitReached { ship: String, limit: usize },

    /// Raised when a load would push a ship past its weight limit.
    #[error("ship {ship} would carry {attempted_kg:.1} kg, above its limit of {limit_kg:.1} kg")]
    ShipOverweight {
        ship: String,
        attempted_kg: f64,
        limit_kg: f64,
    },

    /// Raised when a ship name could not be found in the yard.
    #[error("unknown ship: {name}{}", format_suggestions(.suggestions))]
    UnknownShip {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a container serial number could not be found.
    #[error("unknown container: {serial}")]
    UnknownContainer { serial: String },

    /// Raised when loading a container that is already aboard a ship.
    #[error("container {serial} is already aboard ship {ship}; transfer it instead")]
    AlreadyAboard { serial: String, ship: String },

    /// Raised when creating a ship whose name is already taken (case-insensitive).
    #[error("duplicate ship name encountered: {name}")]
    DuplicateShipName { name: String },

    /// Raised when a container would share its serial with one already there.
    #[error("duplicate container serial: {serial}")]
    DuplicateContainer { serial: String },

    /// Raised when the source and destination of a transfer are the same ship.
    #[error("cannot transfer a container from ship {ship} onto itself")]
    TransferToSameShip { ship: String },

    /// Raised when container parameters fail validation.
    #[error("invalid container data: {message}")]
    InvalidContainer { message: String },

    /// Raised when ship parameters fail validation.
    #[error("invalid ship data: {message}")]
    InvalidShip { message: String },

    /// Raised when a cargo weight is not a finite positive number.
    #[error("cargo weight must be a finite positive number, got {weight}")]
    InvalidCargoWeight { weight: f64 },

    /// Raised when a fleet roster file cannot be parsed.
    #[error("invalid fleet roster: {message}")]
    FleetRoster { message: String },

    /// Wrapper for IO errors, flattened to a message so the enum stays `Clone`.
    #[error("io error: {message}")]
    Io { message: String },
}

impl Error {
    /// Whether this error is one of the ship-level capacity failures.
    pub fn is_capacity(&self) -> bool {
        matches!(
            self,
            Error::ContainerLimitReached { .. } | Error::ShipOverweight { .. }
        )
    }

    /// Whether this error is a soft lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UnknownShip { .. } | Error::UnknownContainer { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
