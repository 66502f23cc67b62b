//! Rostering domain models.
//!
//! Input types describe the business (`SchedulerInput` and its parts);
//! output types describe the week (`GeneratedSchedule` and its days).
//! `Employee` and `EmployeePool` sit in between: they are derived from
//! the input and live only for one generation run.
//!
//! # Domain Mappings
//!
//! | u-roster | Restaurant | Retail | Clinic |
//! |----------|-----------|--------|--------|
//! | Shift | Lunch service | Opening | Day clinic |
//! | Role | Server / Cook | Cashier | Nurse |
//! | Coverage | Covers per service | Tills open | Staffing ratio |

mod coverage;
mod employee;
mod input;
mod role;
mod schedule;
mod shift;
mod time;
mod weekday;

pub use coverage::{CoverageMatrix, DEFAULT_REQUIREMENT};
pub use employee::{Employee, EmployeePool};
pub use input::SchedulerInput;
pub use role::{Role, StaffCount};
pub use schedule::{AssignedShift, DailySchedule, GeneratedSchedule};
pub use shift::ShiftDefinition;
pub use time::{OperatingHours, TimeOfDay, TimeRange};
pub use weekday::Weekday;
