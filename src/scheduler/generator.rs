//! Weekly roster generator.
//!
//! # Algorithm
//!
//! 1. Expand staff counts into an employee pool (role order, then sequence).
//! 2. For each day Monday..Sunday, with a fresh "working today" set:
//!    - For each shift (input order), for each role (input order):
//!    - `needed` = coverage requirement, 1 if the cell is absent.
//!    - Candidates = employees of the role not yet working today.
//!    - Take the `needed` candidates with the fewest shifts so far
//!      (stable, ties by pool order); record each one.
//! 3. Cells that cannot be filled are left short without error.
//!
//! The pool is shared by all seven days, so fairness is weekly, not daily.
//! Opening hours are not consulted.
//!
//! # Complexity
//! O(7 * s * r * e log e) where s=shifts, r=roles, e=employees per role.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::fairness::select_fairest_indices;
use crate::models::{
    AssignedShift, DailySchedule, EmployeePool, GeneratedSchedule, SchedulerInput, Weekday,
};

/// Weekly shift generator.
///
/// Stateless: every call builds and owns its own employee pool, so one
/// generator can be reused and calls never affect each other.
///
/// # Example
///
/// ```
/// use u_roster::models::{Role, SchedulerInput, ShiftDefinition, Weekday};
/// use u_roster::scheduler::ShiftGenerator;
///
/// let input = SchedulerInput::new("Cafe")
///     .with_shift(ShiftDefinition::parse("am", "Morning", "09:00", "14:00").unwrap())
///     .with_role(Role::new("srv", "Server"))
///     .with_staff("srv", 2)
///     .with_coverage("am", "srv", 1);
///
/// let (schedule, pool) = ShiftGenerator::new().generate_with_pool(&input);
/// assert_eq!(schedule.day(Weekday::Monday).unwrap().assignments[0].employee_id, "srv-1");
/// assert_eq!(schedule.day(Weekday::Tuesday).unwrap().assignments[0].employee_id, "srv-2");
/// assert_eq!(pool.get("srv-1").unwrap().shifts_assigned, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftGenerator;

impl ShiftGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a Monday-to-Sunday roster.
    pub fn generate(&self, input: &SchedulerInput) -> GeneratedSchedule {
        self.generate_with_pool(input).0
    }

    /// Generates a roster and returns the final employee pool with
    /// each employee's weekly shift count.
    pub fn generate_with_pool(&self, input: &SchedulerInput) -> (GeneratedSchedule, EmployeePool) {
        let mut pool = EmployeePool::expand(&input.roles, &input.staff_counts);
        debug!(
            business = %input.business_name,
            shifts = input.shifts.len(),
            roles = input.roles.len(),
            employees = pool.len(),
            "generating weekly roster"
        );

        let mut schedule = GeneratedSchedule::new();
        for day in Weekday::ALL {
            schedule.push_day(plan_day(day, input, &mut pool));
        }

        debug!(
            assignments = schedule.assignment_count(),
            "weekly roster generated"
        );
        (schedule, pool)
    }
}

/// Generates a Monday-to-Sunday roster. Never fails.
pub fn generate_schedule(input: &SchedulerInput) -> GeneratedSchedule {
    ShiftGenerator::new().generate(input)
}

/// Fills one day, updating the pool's cumulative shift counts.
///
/// Call once per day in order with the same pool to get weekly fairness.
pub fn plan_day(day: Weekday, input: &SchedulerInput, pool: &mut EmployeePool) -> DailySchedule {
    let mut daily = DailySchedule::new(day);
    // Keyed by employee id: duplicated role ids can put one id in the pool twice.
    let mut working_today: HashSet<String> = HashSet::new();

    for shift in &input.shifts {
        for role in &input.roles {
            let needed = input.coverage.requirement(&shift.id, &role.id) as usize;

            let candidates: Vec<usize> = pool
                .indices_for_role(&role.id)
                .filter(|&i| !working_today.contains(pool.at(i).id.as_str()))
                .collect();

            let chosen = select_fairest_indices(pool, candidates, needed);
            if chosen.len() < needed {
                trace!(
                    day = %day,
                    shift = %shift.id,
                    role = %role.id,
                    needed,
                    assigned = chosen.len(),
                    "cell left short"
                );
            }

            for index in chosen {
                let employee = pool.at(index);
                daily.add_assignment(AssignedShift::new(
                    &shift.id,
                    &role.id,
                    &employee.id,
                    &employee.name,
                ));
                working_today.insert(employee.id.clone());
                pool.record_shift(index);
            }
        }
    }

    debug!(day = %day, assignments = daily.assignments.len(), "day planned");
    daily
}
