//! Scheduler input model.
//!
//! Everything the generator needs, collected up front by the caller.
//! JSON field names are camelCase (`businessName`, `staffCounts`, ...).
//! Missing fields fall back to their defaults: default opening hours,
//! no shifts/roles/staff, and an empty coverage matrix.

use serde::{Deserialize, Serialize};
use std::io::Read;

use super::{CoverageMatrix, OperatingHours, Role, ShiftDefinition, StaffCount};
use crate::error::RosterError;
use crate::validation::validate_input;

/// Complete description of a business to roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerInput {
    /// Business display name.
    pub business_name: String,
    /// Opening hours. Informational; not used for assignment.
    pub operating_hours: OperatingHours,
    /// Shifts, in the order they are filled each day.
    pub shifts: Vec<ShiftDefinition>,
    /// Roles, in the order they are filled within each shift.
    pub roles: Vec<Role>,
    /// Headcount per role.
    pub staff_counts: Vec<StaffCount>,
    /// Required people per (shift, role).
    pub coverage: CoverageMatrix,
}

impl SchedulerInput {
    /// Creates an input with default opening hours and nothing else.
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            ..Default::default()
        }
    }

    /// Parses an input from JSON.
    ///
    /// Negative counts are clamped to zero; fractional counts and
    /// malformed times are rejected.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an input from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses an input from JSON and runs [`validate_input`] on it.
    pub fn from_json_validated(json: &str) -> Result<Self, RosterError> {
        let input = Self::from_json(json)?;
        validate_input(&input)?;
        Ok(input)
    }

    /// Serializes the input to JSON.
    pub fn to_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sets the opening hours.
    pub fn with_operating_hours(mut self, hours: OperatingHours) -> Self {
        self.operating_hours = hours;
        self
    }

    /// Appends a shift.
    pub fn with_shift(mut self, shift: ShiftDefinition) -> Self {
        self.shifts.push(shift);
        self
    }

    /// Appends a role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Appends a staff count.
    pub fn with_staff(mut self, role_id: impl Into<String>, count: u32) -> Self {
        self.staff_counts.push(StaffCount::new(role_id, count));
        self
    }

    /// Sets a coverage requirement.
    pub fn with_coverage(
        mut self,
        shift_id: impl Into<String>,
        role_id: impl Into<String>,
        needed: u32,
    ) -> Self {
        self.coverage.set(shift_id, role_id, needed);
        self
    }

    /// Replaces the whole coverage matrix.
    pub fn with_coverage_matrix(mut self, coverage: CoverageMatrix) -> Self {
        self.coverage = coverage;
        self
    }

    /// Finds a shift by id.
    pub fn shift(&self, shift_id: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|s| s.id == shift_id)
    }

    /// Finds a role by id.
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Headcount for a role (first entry wins, missing means zero).
    pub fn staff_count(&self, role_id: &str) -> u32 {
        self.staff_counts
            .iter()
            .find(|c| c.role_id == role_id)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
