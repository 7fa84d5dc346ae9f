//! Fleet roster loading.
//!
//! A roster is a CSV file listing the ships a yard starts with. Headers are
//! matched loosely so hand-written files with slightly different column names
//! still load.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::{Error, Result};

use super::normalize_name;
use super::spec::ShipSpec;

/// Ordered list of validated ship definitions.
#[derive(Debug, Clone, Default)]
pub struct FleetRoster {
    ships: Vec<ShipSpec>,
    source: Option<PathBuf>,
}

impl FleetRoster {
    /// Load a roster from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut roster = Self::from_reader(file)?;
        roster.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            ships = roster.ships.len(),
            "loaded fleet roster"
        );
        Ok(roster)
    }

    /// Load a roster from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::FleetRoster {
                message: format!("failed to read roster headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        // Mapping of canonical field name -> possible header synonyms
        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "ship_name", "shipname", "ship"]),
            (
                "max_containers",
                &["max_containers", "maxcontainers", "containers", "capacity"],
            ),
            (
                "max_weight_tons",
                &[
                    "max_weight_tons",
                    "maxweighttons",
                    "max_weight",
                    "maxweight",
                    "weight_tons",
                ],
            ),
            ("speed_knots", &["speed_knots", "speedknots", "speed", "knots"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(index) = alts.iter().find_map(|alt| {
                let alt = normalize_header(alt);
                normalized_headers.iter().position(|h| *h == alt)
            }) {
                index_map.insert(*canon, index);
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|canon| !index_map.contains_key(canon))
            .collect();

        if !missing.is_empty() {
            return Err(Error::FleetRoster {
                message: format!(
                    "roster missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut ships = Vec::new();
        let mut seen = HashSet::new();

        for (offset, result) in csv_reader.records().enumerate() {
            // header is line 1
            let row = offset + 2;
            let record = result.map_err(|e| Error::FleetRoster {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
            };

            let name = get("name").unwrap_or_default();
            let max_containers: usize =
                parse_field(get("max_containers"), "max_containers", &name, row)?;
            let max_weight_tons: f64 =
                parse_field(get("max_weight_tons"), "max_weight_tons", &name, row)?;
            let speed_knots: f64 = parse_field(get("speed_knots"), "speed_knots", &name, row)?;

            let spec = ShipSpec {
                name,
                max_containers,
                max_weight_tons,
                speed_knots,
            };
            spec.validate()?;

            if !seen.insert(normalize_name(&spec.name)) {
                return Err(Error::DuplicateShipName { name: spec.name });
            }
            ships.push(spec);
        }

        Ok(Self {
            ships,
            source: None,
        })
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn into_ships(self) -> Vec<ShipSpec> {
        self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the source path if the roster was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_field<T>(value: Option<String>, field: &str, name: &str, row: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::FleetRoster {
            message: format!("missing {field} for ship '{name}' at row {row}"),
        })?
        .parse::<T>()
        .map_err(|e| Error::FleetRoster {
            message: format!("invalid {field} for ship '{name}' at row {row}: {e}"),
        })
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_synonyms_are_accepted() {
        let csv = "Ship Name,Capacity,Max Weight,Speed\nNordic,3,40,18\n";
        let roster = FleetRoster::from_reader(Cursor::new(csv)).expect("synonyms should match");
        let ship = &roster.ships()[0];
        assert_eq!(ship.name, "Nordic");
        assert_eq!(ship.max_containers, 3);
        assert_eq!(ship.max_weight_tons, 40.0);
    }
}
