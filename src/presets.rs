//! Starting points for a new roster.
//!
//! Suggested shifts split the weekday opening hours at 14:00; suggested
//! roles are a server and a cook with two staff each. Leaving the
//! coverage matrix empty means one person of every role per shift.

use crate::models::{OperatingHours, Role, SchedulerInput, ShiftDefinition, StaffCount, TimeOfDay};

/// Headcount suggested for each role.
pub const DEFAULT_STAFF_PER_ROLE: u32 = 2;

const SHIFT_CHANGEOVER: TimeOfDay = TimeOfDay::hm(14, 0);

/// Morning (open → 14:00) and Evening (14:00 → close) on weekday hours.
pub fn suggested_shifts(hours: &OperatingHours) -> Vec<ShiftDefinition> {
    vec![
        ShiftDefinition::new("1", "Morning", hours.weekdays.start, SHIFT_CHANGEOVER),
        ShiftDefinition::new("2", "Evening", SHIFT_CHANGEOVER, hours.weekdays.end),
    ]
}

/// Server and Cook.
pub fn suggested_roles() -> Vec<Role> {
    vec![Role::new("1", "Server"), Role::new("2", "Cook")]
}

/// [`DEFAULT_STAFF_PER_ROLE`] staff for every role.
pub fn default_staff_counts(roles: &[Role]) -> Vec<StaffCount> {
    roles
        .iter()
        .map(|r| StaffCount::new(r.id.clone(), DEFAULT_STAFF_PER_ROLE))
        .collect()
}

impl SchedulerInput {
    /// A complete input built from the presets with default hours.
    ///
    /// ```
    /// use u_roster::models::SchedulerInput;
    /// use u_roster::scheduler::generate_schedule;
    ///
    /// let input = SchedulerInput::suggested("Joe's Diner");
    /// // 2 shifts x 2 roles, one each, four staff
    /// assert_eq!(generate_schedule(&input).assignment_count(), 7 * 4);
    /// ```
    pub fn suggested(business_name: impl Into<String>) -> Self {
        let hours = OperatingHours::default();
        let roles = suggested_roles();
        Self {
            business_name: business_name.into(),
            operating_hours: hours,
            shifts: suggested_shifts(&hours),
            staff_counts: default_staff_counts(&roles),
            roles,
            coverage: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeRange;
    use crate::validation::validate_input;

    #[test]
    fn test_suggested_shifts_follow_weekday_hours() {
        let hours = OperatingHours::new(
            TimeRange::parse("07:30", "21:00").unwrap(),
            TimeRange::parse("10:00", "16:00").unwrap(),
        );
        let shifts = suggested_shifts(&hours);
        assert_eq!(shifts[0].window().to_string(), "07:30-14:00");
        assert_eq!(shifts[1].window().to_string(), "14:00-21:00");
        assert_eq!(shifts[1].name, "Evening");
    }

    #[test]
    fn test_default_staff_counts() {
        let counts = default_staff_counts(&suggested_roles());
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().all(|c| c.count == 2));
        assert_eq!(counts[1].role_id, "2");
    }

    #[test]
    fn test_suggested_input_is_valid() {
        let input = SchedulerInput::suggested("Cafe");
        assert!(validate_input(&input).is_ok());
        assert!(input.coverage.is_empty());
        assert_eq!(input.shifts[0].window().to_string(), "09:00-14:00");
        assert_eq!(input.shifts[1].window().to_string(), "14:00-17:00");
    }
}
