//! Weekly shift rostering for small businesses.
//!
//! Turns a description of a business (shifts, roles, headcounts and a
//! coverage matrix) into a Monday-to-Sunday roster of named employees.
//! Assignment is greedy and deterministic: each (shift, role) cell is
//! filled with the employees who have worked the fewest shifts so far,
//! and nobody works more than one shift per day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SchedulerInput`, `ShiftDefinition`, `Role`,
//!   `StaffCount`, `CoverageMatrix`, `Employee`, `EmployeePool`,
//!   `GeneratedSchedule`, `DailySchedule`, `AssignedShift`, `Weekday`
//! - **`scheduler`**: The generator, the fairness selector and KPIs
//! - **`validation`**: Opt-in input integrity checks (duplicate IDs, dangling refs)
//! - **`presets`**: Default hours, shifts, roles and headcounts
//!
//! # Example
//!
//! ```
//! use u_roster::models::{Role, SchedulerInput, ShiftDefinition};
//! use u_roster::scheduler::generate_schedule;
//!
//! let input = SchedulerInput::new("Joe's Diner")
//!     .with_shift(ShiftDefinition::parse("am", "Morning", "09:00", "14:00").unwrap())
//!     .with_role(Role::new("srv", "Server"))
//!     .with_staff("srv", 2)
//!     .with_coverage("am", "srv", 1);
//!
//! let schedule = generate_schedule(&input);
//! assert_eq!(schedule.days.len(), 7);
//! assert_eq!(schedule.assignment_count(), 7);
//! ```

pub mod error;
pub mod models;
pub mod presets;
pub mod scheduler;
pub mod validation;

pub use error::RosterError;
