//! Roster generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `ShiftGenerator` is a single-pass greedy heuristic: days in order,
//! shifts in input order, roles in input order, and for each cell the
//! employees with the fewest shifts so far. It never fails and never
//! backtracks; cells it cannot fill are left short.
//!
//! # KPI
//!
//! `ScheduleKpi` computes fill rate, shortfalls and workload spread.

mod fairness;
mod generator;
mod kpi;

pub use fairness::select_fairest;
pub use generator::{generate_schedule, plan_day, ShiftGenerator};
pub use kpi::{ScheduleKpi, Shortfall};
