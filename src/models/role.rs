//! Role and headcount models.
//!
//! A role is a labor category ("Server", "Cook"). Each role has an
//! independent staff pool whose size is given by a `StaffCount`.

use serde::{Deserialize, Deserializer, Serialize};

/// A labor category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Display name, also the stem of generated employee names.
    pub name: String,
}

impl Role {
    /// Creates a new role.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Number of distinct employees available for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCount {
    /// Role this count applies to.
    pub role_id: String,
    /// Headcount. Negative input is clamped to zero.
    #[serde(deserialize_with = "deserialize_clamped")]
    pub count: u32,
}

impl StaffCount {
    /// Creates a new staff count.
    pub fn new(role_id: impl Into<String>, count: u32) -> Self {
        Self {
            role_id: role_id.into(),
            count,
        }
    }
}

/// Clamps a signed count into `0..=u32::MAX`.
pub(crate) fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Deserializes an integer count, clamping negatives to zero.
///
/// Non-integers (`1.5`, `"2"`) are rejected by the `i64` visitor.
pub(crate) fn deserialize_clamped<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(clamp_count)
}
