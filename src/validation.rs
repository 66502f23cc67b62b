//! Input validation for rostering problems.
//!
//! Checks structural integrity of a `SchedulerInput` before generation.
//! Detects:
//! - Duplicate shift or role IDs
//! - Repeated staff-count entries for one role
//! - Staff counts and coverage cells that reference unknown roles/shifts
//! - Zero-length shifts
//! - Blank names
//!
//! Validation is opt-in. The generator accepts every input, including
//! ones that fail these checks: dangling references are ignored and
//! the first staff-count entry for a role wins.

use std::collections::HashSet;
use std::fmt;

use crate::models::SchedulerInput;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two shifts, or two roles, share the same ID.
    DuplicateId,
    /// A role has more than one staff-count entry.
    DuplicateStaffCount,
    /// A staff count or coverage cell names a role not in the role list.
    UnknownRoleReference,
    /// A coverage row names a shift not in the shift list.
    UnknownShiftReference,
    /// A shift starts and ends at the same time.
    EmptyShiftWindow,
    /// The business, a shift or a role has a blank name.
    EmptyName,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a scheduler input.
///
/// Checks:
/// 1. Business name is not blank
/// 2. No duplicate shift IDs; no blank or zero-length shifts
/// 3. No duplicate role IDs; no blank role names
/// 4. Each staff count references a known role, at most once per role
/// 5. Each coverage row references a known shift
/// 6. Each coverage cell references a known role
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &SchedulerInput) -> ValidationResult {
    let mut errors = Vec::new();

    if input.business_name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Business name is empty",
        ));
    }

    // Shifts
    let mut shift_ids = HashSet::new();
    for shift in &input.shifts {
        if !shift_ids.insert(shift.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate shift ID: {}", shift.id),
            ));
        }
        if shift.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Shift '{}' has an empty name", shift.id),
            ));
        }
        if shift.window().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyShiftWindow,
                format!("Shift '{}' starts and ends at {}", shift.id, shift.start),
            ));
        }
    }

    // Roles
    let mut role_ids = HashSet::new();
    for role in &input.roles {
        if !role_ids.insert(role.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", role.id),
            ));
        }
        if role.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Role '{}' has an empty name", role.id),
            ));
        }
    }

    // Staff counts
    let mut counted = HashSet::new();
    for count in &input.staff_counts {
        if !role_ids.contains(count.role_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoleReference,
                format!("Staff count references unknown role '{}'", count.role_id),
            ));
        } else if !counted.insert(count.role_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStaffCount,
                format!("Role '{}' has more than one staff count", count.role_id),
            ));
        }
    }

    // Coverage references
    let mut unknown_shifts = HashSet::new();
    for (shift_id, role_id, _) in input.coverage.cells() {
        if !shift_ids.contains(shift_id) && unknown_shifts.insert(shift_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownShiftReference,
                format!("Coverage references unknown shift '{shift_id}'"),
            ));
        }
        if !role_ids.contains(role_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoleReference,
                format!("Coverage for shift '{shift_id}' references unknown role '{role_id}'"),
            ));
        }
    }
    // Rows with no cells still name a shift
    for shift_id in input.coverage.shift_ids() {
        if !shift_ids.contains(shift_id) && unknown_shifts.insert(shift_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownShiftReference,
                format!("Coverage references unknown shift '{shift_id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
