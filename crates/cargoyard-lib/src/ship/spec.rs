//! Ship construction parameters.
//!
//! This module contains the data describing a ship's limits before it joins
//! the yard.

use serde::Serialize;

use crate::container::KG_PER_TONNE;
use crate::error::{Error, Result};

/// Ship limits and informational attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSpec {
    pub name: String,
    pub max_containers: usize,
    pub max_weight_tons: f64,
    pub speed_knots: f64,
}

impl ShipSpec {
    pub fn new(
        name: impl Into<String>,
        max_containers: usize,
        max_weight_tons: f64,
        speed_knots: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_containers,
            max_weight_tons,
            speed_knots,
        }
    }

    /// Validate ship parameters for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidShip {
                message: "ship name must not be empty".to_string(),
            });
        }

        if self.max_containers == 0 {
            return Err(Error::InvalidShip {
                message: "max_containers must be at least 1".to_string(),
            });
        }

        if !self.max_weight_tons.is_finite() || self.max_weight_tons <= 0.0 {
            return Err(Error::InvalidShip {
                message: "max_weight_tons must be a finite positive number".to_string(),
            });
        }

        if !self.speed_knots.is_finite() || self.speed_knots < 0.0 {
            return Err(Error::InvalidShip {
                message: "speed_knots must be finite and non-negative".to_string(),
            });
        }

        Ok(())
    }

    /// Weight limit converted to kilograms.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_tons * KG_PER_TONNE
    }
}
