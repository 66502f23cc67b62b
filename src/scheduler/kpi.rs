//! Roster quality metrics (KPIs).
//!
//! Computes coverage and workload indicators from a generated roster,
//! its input and the final employee pool.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required slots | Sum of requirements over days x shifts x roles |
//! | Filled slots | Number of assignments |
//! | Fill rate | filled / required (1.0 when nothing is required) |
//! | Shortfalls | Cells with fewer assignments than required |
//! | Shifts by employee | Weekly shift count per employee |
//! | Spread by role | Max minus min weekly shifts within a role |
//!
//! Shortfalls reported here are informational. The generator itself
//! leaves short cells silently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{EmployeePool, GeneratedSchedule, SchedulerInput, Weekday};

/// A (day, shift, role) cell filled with fewer people than required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    /// Day of the short cell.
    pub day: Weekday,
    /// Shift of the short cell.
    pub shift_id: String,
    /// Role of the short cell.
    pub role_id: String,
    /// People required.
    pub required: u32,
    /// People assigned.
    pub assigned: u32,
}

impl Shortfall {
    /// Number of unfilled slots.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.required - self.assigned
    }
}

/// Roster performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// Total people-shifts required over the week.
    pub required_slots: u64,
    /// Total people-shifts assigned over the week.
    pub filled_slots: u64,
    /// Fraction of required slots filled (0.0..=1.0).
    pub fill_rate: f64,
    /// Short cells in generation order.
    pub shortfalls: Vec<Shortfall>,
    /// Weekly shift count per employee ID.
    pub shifts_by_employee: BTreeMap<String, u32>,
    /// Max - min weekly shift count per role with at least one employee.
    pub spread_by_role: BTreeMap<String, u32>,
}

impl ScheduleKpi {
    /// Computes KPIs for a roster.
    ///
    /// # Arguments
    /// * `schedule` - The generated roster.
    /// * `input` - The input it was generated from.
    /// * `pool` - The employee pool returned alongside the roster.
    pub fn calculate(
        schedule: &GeneratedSchedule,
        input: &SchedulerInput,
        pool: &EmployeePool,
    ) -> Self {
        let mut required_slots: u64 = 0;
        let mut shortfalls = Vec::new();

        for day in &schedule.days {
            for shift in &input.shifts {
                for role in &input.roles {
                    let required = input.coverage.requirement(&shift.id, &role.id);
                    required_slots += u64::from(required);

                    let assigned = day.assignments_for_cell(&shift.id, &role.id).len() as u32;
                    if assigned < required {
                        shortfalls.push(Shortfall {
                            day: day.day,
                            shift_id: shift.id.clone(),
                            role_id: role.id.clone(),
                            required,
                            assigned,
                        });
                    }
                }
            }
        }

        let filled_slots = schedule.assignment_count() as u64;
        let fill_rate = if required_slots == 0 {
            1.0
        } else {
            filled_slots as f64 / required_slots as f64
        };

        let shifts_by_employee = pool
            .employees()
            .iter()
            .map(|e| (e.id.clone(), e.shifts_assigned))
            .collect();

        let mut spread_by_role = BTreeMap::new();
        for role in &input.roles {
            let counts = pool.for_role(&role.id).map(|e| e.shifts_assigned);
            let (min, max) = counts.fold((u32::MAX, 0), |(lo, hi), c| (lo.min(c), hi.max(c)));
            if min <= max {
                spread_by_role.insert(role.id.clone(), max - min);
            }
        }

        Self {
            required_slots,
            filled_slots,
            fill_rate,
            shortfalls,
            shifts_by_employee,
            spread_by_role,
        }
    }

    /// Total unfilled slots across all shortfalls.
    pub fn missing_slots(&self) -> u64 {
        self.shortfalls.iter().map(|s| u64::from(s.missing())).sum()
    }

    /// Largest spread across roles (0 when no role has staff).
    pub fn max_spread(&self) -> u32 {
        self.spread_by_role.values().copied().max().unwrap_or(0)
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, max_spread: u32) -> bool {
        self.fill_rate >= min_fill_rate && self.max_spread() <= max_spread
    }
}
