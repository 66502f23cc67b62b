//! Roster (solution) model.
//!
//! A generated schedule is seven daily schedules, Monday first. Each
//! day lists its assignments in the order they were made: shift-major,
//! then role, then selection order.

use serde::{Deserialize, Serialize};

use super::{ShiftDefinition, Weekday};

/// One employee working one shift on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedShift {
    /// Shift worked.
    pub shift_id: String,
    /// Role the employee fills.
    pub role_id: String,
    /// Assigned employee ID.
    pub employee_id: String,
    /// Assigned employee display name (denormalized for rendering).
    pub employee_name: String,
}

/// Assignments for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    /// Day of the week.
    pub day: Weekday,
    /// Assignments in generation order.
    pub assignments: Vec<AssignedShift>,
}

/// A full week of assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedSchedule {
    /// Daily schedules, Monday through Sunday.
    pub days: Vec<DailySchedule>,
}

impl AssignedShift {
    /// Creates a new assignment.
    pub fn new(
        shift_id: impl Into<String>,
        role_id: impl Into<String>,
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
    ) -> Self {
        Self {
            shift_id: shift_id.into(),
            role_id: role_id.into(),
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
        }
    }
}

impl DailySchedule {
    /// Creates an empty day.
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            assignments: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: AssignedShift) {
        self.assignments.push(assignment);
    }

    /// Assignments for one shift.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&AssignedShift> {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id)
            .collect()
    }

    /// Assignments for one role, across shifts.
    pub fn assignments_for_role(&self, role_id: &str) -> Vec<&AssignedShift> {
        self.assignments
            .iter()
            .filter(|a| a.role_id == role_id)
            .collect()
    }

    /// Assignments for one (shift, role) cell.
    pub fn assignments_for_cell(&self, shift_id: &str, role_id: &str) -> Vec<&AssignedShift> {
        self.assignments
            .iter()
            .filter(|a| a.shift_id == shift_id && a.role_id == role_id)
            .collect()
    }

    /// Employee IDs working this day, in assignment order.
    pub fn employee_ids(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .map(|a| a.employee_id.as_str())
            .collect()
    }

    /// Whether an employee works this day.
    pub fn is_working(&self, employee_id: &str) -> bool {
        self.assignments.iter().any(|a| a.employee_id == employee_id)
    }
}

impl GeneratedSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day.
    pub fn push_day(&mut self, day: DailySchedule) {
        self.days.push(day);
    }

    /// Finds the schedule for a day.
    pub fn day(&self, day: Weekday) -> Option<&DailySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Total number of assignments across the week.
    pub fn assignment_count(&self) -> usize {
        self.days.iter().map(|d| d.assignments.len()).sum()
    }

    /// Every assignment of an employee, with its day.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<(Weekday, &AssignedShift)> {
        self.days
            .iter()
            .flat_map(|d| {
                d.assignments
                    .iter()
                    .filter(move |a| a.employee_id == employee_id)
                    .map(move |a| (d.day, a))
            })
            .collect()
    }

    /// Number of shifts an employee works this week.
    pub fn shift_count_for(&self, employee_id: &str) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.assignments)
            .filter(|a| a.employee_id == employee_id)
            .count()
    }

    /// Minutes an employee is scheduled this week.
    ///
    /// Assignments to shifts not found in `shifts` count as zero.
    pub fn scheduled_minutes_for(&self, employee_id: &str, shifts: &[ShiftDefinition]) -> u32 {
        self.assignments_for_employee(employee_id)
            .iter()
            .filter_map(|(_, a)| shifts.iter().find(|s| s.id == a.shift_id))
            .map(ShiftDefinition::duration_minutes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> GeneratedSchedule {
        let mut s = GeneratedSchedule::new();
        let mut mon = DailySchedule::new(Weekday::Monday);
        mon.add_assignment(AssignedShift::new("am", "srv", "srv-1", "Server 1"));
        mon.add_assignment(AssignedShift::new("am", "cook", "cook-1", "Cook 1"));
        mon.add_assignment(AssignedShift::new("pm", "srv", "srv-2", "Server 2"));
        s.push_day(mon);

        let mut tue = DailySchedule::new(Weekday::Tuesday);
        tue.add_assignment(AssignedShift::new("pm", "srv", "srv-1", "Server 1"));
        s.push_day(tue);
        s
    }

    #[test]
    fn test_daily_queries() {
        let s = sample_schedule();
        let mon = s.day(Weekday::Monday).unwrap();
        assert_eq!(mon.assignments_for_shift("am").len(), 2);
        assert_eq!(mon.assignments_for_role("srv").len(), 2);
        assert_eq!(mon.assignments_for_cell("pm", "srv")[0].employee_id, "srv-2");
        assert_eq!(mon.employee_ids(), vec!["srv-1", "cook-1", "srv-2"]);
        assert!(mon.is_working("cook-1"));
        assert!(!mon.is_working("cook-2"));
        assert!(s.day(Weekday::Sunday).is_none());
    }

    #[test]
    fn test_weekly_queries() {
        let s = sample_schedule();
        assert_eq!(s.assignment_count(), 4);
        assert_eq!(s.shift_count_for("srv-1"), 2);
        let days: Vec<_> = s
            .assignments_for_employee("srv-1")
            .into_iter()
            .map(|(d, a)| (d, a.shift_id.as_str()))
            .collect();
        assert_eq!(days, vec![(Weekday::Monday, "am"), (Weekday::Tuesday, "pm")]);
    }

    #[test]
    fn test_scheduled_minutes() {
        let s = sample_schedule();
        let shifts = vec![
            ShiftDefinition::parse("am", "Morning", "09:00", "14:00").unwrap(),
            ShiftDefinition::parse("pm", "Evening", "14:00", "22:00").unwrap(),
        ];
        assert_eq!(s.scheduled_minutes_for("srv-1", &shifts), 300 + 480);
        assert_eq!(s.scheduled_minutes_for("srv-1", &shifts[..1]), 300);
        assert_eq!(s.scheduled_minutes_for("nobody", &shifts), 0);
    }

    #[test]
    fn test_json_shape() {
        let s = sample_schedule();
        let value = serde_json::to_value(&s).unwrap();
        let first = &value[0];
        assert_eq!(first["day"], "Monday");
        assert_eq!(first["assignments"][0]["employeeName"], "Server 1");
        assert_eq!(first["assignments"][0]["shiftId"], "am");
        assert!(value.as_array().is_some());
    }
}
