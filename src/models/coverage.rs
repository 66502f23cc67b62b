//! Coverage matrix model.
//!
//! Maps shift id → role id → number of people of that role needed
//! during that shift. The matrix is sparse.
//!
//! # Default requirement
//! A cell absent from the matrix requires [`DEFAULT_REQUIREMENT`] (one)
//! person, not zero. A shift/role pair that should stay unstaffed must
//! be written explicitly as `0`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::role::clamp_count;

/// Requirement for a (shift, role) cell missing from the matrix.
pub const DEFAULT_REQUIREMENT: u32 = 1;

/// Sparse per-shift, per-role staffing requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageMatrix {
    cells: BTreeMap<String, BTreeMap<String, u32>>,
}

impl CoverageMatrix {
    /// Creates an empty matrix (every cell defaults to one).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requirement for a cell.
    pub fn with_requirement(
        mut self,
        shift_id: impl Into<String>,
        role_id: impl Into<String>,
        needed: u32,
    ) -> Self {
        self.set(shift_id, role_id, needed);
        self
    }

    /// Sets the requirement for a cell, replacing any previous value.
    pub fn set(&mut self, shift_id: impl Into<String>, role_id: impl Into<String>, needed: u32) {
        self.cells
            .entry(shift_id.into())
            .or_default()
            .insert(role_id.into(), needed);
    }

    /// The explicitly stored value for a cell, if any.
    pub fn get(&self, shift_id: &str, role_id: &str) -> Option<u32> {
        self.cells.get(shift_id)?.get(role_id).copied()
    }

    /// People of `role_id` needed during `shift_id`.
    ///
    /// Returns [`DEFAULT_REQUIREMENT`] for cells not in the matrix.
    pub fn requirement(&self, shift_id: &str, role_id: &str) -> u32 {
        self.get(shift_id, role_id).unwrap_or(DEFAULT_REQUIREMENT)
    }

    /// Whether no cell is stored.
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(BTreeMap::is_empty)
    }

    /// Shift ids that have at least one stored row.
    pub fn shift_ids(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// All stored cells as `(shift_id, role_id, needed)`.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.cells.iter().flat_map(|(shift, row)| {
            row.iter()
                .map(move |(role, &needed)| (shift.as_str(), role.as_str(), needed))
        })
    }
}

impl<'de> Deserialize<'de> for CoverageMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeMap<String, i64>>::deserialize(deserializer)?;
        let cells = raw
            .into_iter()
            .map(|(shift, row)| {
                let row = row
                    .into_iter()
                    .map(|(role, needed)| (role, clamp_count(needed)))
                    .collect();
                (shift, row)
            })
            .collect();
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cell_defaults_to_one() {
        let m = CoverageMatrix::new();
        assert_eq!(DEFAULT_REQUIREMENT, 1);
        assert_eq!(m.requirement("any", "thing"), 1);
        assert_eq!(m.get("any", "thing"), None);
    }

    #[test]
    fn test_explicit_zero_is_kept() {
        let m = CoverageMatrix::new().with_requirement("am", "cook", 0);
        assert_eq!(m.requirement("am", "cook"), 0);
        // Sibling cell in the same row still defaults
        assert_eq!(m.requirement("am", "srv"), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut m = CoverageMatrix::new();
        m.set("am", "srv", 2);
        m.set("am", "srv", 3);
        assert_eq!(m.requirement("am", "srv"), 3);
        assert_eq!(m.cells().count(), 1);
    }

    #[test]
    fn test_json_round_shape() {
        let m: CoverageMatrix =
            serde_json::from_str(r#"{"am":{"srv":2,"cook":-1},"pm":{}}"#).unwrap();
        assert_eq!(m.requirement("am", "srv"), 2);
        assert_eq!(m.requirement("am", "cook"), 0);
        assert_eq!(m.requirement("pm", "srv"), 1);
        assert_eq!(m.shift_ids().collect::<Vec<_>>(), vec!["am", "pm"]);

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"am":{"cook":0,"srv":2},"pm":{}}"#);
    }

    #[test]
    fn test_json_rejects_fraction() {
        assert!(serde_json::from_str::<CoverageMatrix>(r#"{"am":{"srv":1.5}}"#).is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(CoverageMatrix::new().is_empty());
        let m: CoverageMatrix = serde_json::from_str(r#"{"am":{}}"#).unwrap();
        assert!(m.is_empty());
        assert!(!CoverageMatrix::new().with_requirement("a", "b", 0).is_empty());
    }
}
