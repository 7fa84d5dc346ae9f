//! Kind-specific container behaviour.

use std::fmt;

use serde::Serialize;

use super::constants::{HAZARDOUS_LIQUID_RATIO, SAFE_LIQUID_RATIO};

/// Physical kind of a container together with its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerKind {
    /// Liquid cargo. Hazardous liquids may only be filled to half capacity.
    Liquid { hazardous: bool },
    /// Pressurised gas. Pressure (atm) is informational only.
    Gas { pressure_atm: f64 },
    /// Refrigerated goods kept at a fixed temperature (°C).
    Refrigerated {
        product_type: String,
        temperature_c: f64,
    },
}

impl ContainerKind {
    /// Single-letter tag embedded in serial numbers.
    pub fn tag(&self) -> char {
        match self {
            ContainerKind::Liquid { .. } => 'L',
            ContainerKind::Gas { .. } => 'G',
            ContainerKind::Refrigerated { .. } => 'C',
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "liquid",
            ContainerKind::Gas { .. } => "gas",
            ContainerKind::Refrigerated { .. } => "refrigerated",
        }
    }

    /// Maximum cargo a container of this kind accepts, given its rated capacity.
    pub fn ceiling_kg(&self, max_capacity_kg: f64) -> f64 {
        match self {
            ContainerKind::Liquid { hazardous: true } => max_capacity_kg * HAZARDOUS_LIQUID_RATIO,
            ContainerKind::Liquid { hazardous: false } => max_capacity_kg * SAFE_LIQUID_RATIO,
            ContainerKind::Gas { .. } | ContainerKind::Refrigerated { .. } => max_capacity_kg,
        }
    }

    /// Whether this kind can raise hazard notices.
    pub fn reports_hazards(&self) -> bool {
        matches!(self, ContainerKind::Liquid { .. } | ContainerKind::Gas { .. })
    }

    /// Whether this kind's own load intercepts a ceiling breach to send a
    /// hazard notice first. Gas can report hazards but loads through the base
    /// path, which fails without a notice.
    pub fn notifies_on_overfill(&self) -> bool {
        matches!(self, ContainerKind::Liquid { .. })
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            ContainerKind::Liquid { .. } => Ok(()),
            ContainerKind::Gas { pressure_atm } => {
                if !pressure_atm.is_finite() || *pressure_atm < 0.0 {
                    return Err("pressure_atm must be finite and non-negative".to_string());
                }
                Ok(())
            }
            ContainerKind::Refrigerated {
                product_type,
                temperature_c,
            } => {
                if product_type.trim().is_empty() {
                    return Err("product_type must not be empty".to_string());
                }
                if !temperature_c.is_finite() {
                    return Err("temperature_c must be finite".to_string());
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Liquid { hazardous } => {
                write!(f, "hazardous: {}", if *hazardous { "yes" } else { "no" })
            }
            ContainerKind::Gas { pressure_atm } => write!(f, "pressure: {pressure_atm:.1} atm"),
            ContainerKind::Refrigerated {
                product_type,
                temperature_c,
            } => write!(f, "product: {product_type}, temperature: {temperature_c:.1} °C"),
        }
    }
}
