//! Container-related constants used across load ceilings and serial numbers.

/// Fraction of `max_capacity` a hazardous liquid container may hold.
pub const HAZARDOUS_LIQUID_RATIO: f64 = 0.5;

/// Fraction of `max_capacity` a non-hazardous liquid container may hold.
pub const SAFE_LIQUID_RATIO: f64 = 0.9;

/// Fraction of the cargo a gas container keeps aboard after unloading.
///
/// Gas cannot be fully pumped out, so an unload leaves this residue behind.
pub const GAS_RESIDUE_RATIO: f64 = 0.05;

/// Kilograms per metric tonne; ship weight limits are given in tonnes.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Leading segment of every container serial number.
pub const SERIAL_PREFIX: &str = "KON";
