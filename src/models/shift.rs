//! Shift definition model.
//!
//! A shift is a named daily window ("Morning", 09:00–14:00). The same
//! set of shifts recurs on every day of the roster.

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, TimeRange};
use crate::error::TimeParseError;

/// A recurring daily shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Unique shift identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Start of the shift.
    pub start: TimeOfDay,
    /// End of the shift. Earlier than `start` for overnight shifts.
    pub end: TimeOfDay,
}

impl ShiftDefinition {
    /// Creates a new shift.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Creates a shift from `HH:MM` strings.
    pub fn parse(
        id: impl Into<String>,
        name: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, TimeParseError> {
        Ok(Self::new(id, name, start.parse()?, end.parse()?))
    }

    /// The shift's daily window.
    #[inline]
    pub fn window(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Length of the shift in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.window().duration_minutes()
    }
}
