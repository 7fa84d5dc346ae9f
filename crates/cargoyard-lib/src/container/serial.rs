//! Container serial numbers and the sequence that issues them.

use std::fmt;

use serde::Serialize;

use super::constants::SERIAL_PREFIX;

/// Unique container identity in the form `KON-<kind tag>-<sequence>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against user-supplied text.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Monotonic counter shared by every container kind.
///
/// Numbers are never reused, even after the container they were issued to
/// leaves the yard.
#[derive(Debug, Clone)]
pub struct SerialSequence {
    next: u64,
}

impl SerialSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start the sequence at a specific value.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next serial number for a container of the given kind.
    pub fn issue(&mut self, kind_tag: char) -> SerialNumber {
        let number = self.next;
        self.next += 1;
        SerialNumber(format!("{SERIAL_PREFIX}-{kind_tag}-{number}"))
    }

    /// The number the next issued serial will carry.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SerialSequence {
    fn default() -> Self {
        Self::new()
    }
}
