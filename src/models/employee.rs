//! Employee model and staff pool expansion.
//!
//! Employees are not part of the input. They are synthesized from the
//! per-role headcounts once per roster generation: a role "Server" with
//! id `srv` and three staff yields `srv-1 "Server 1"`, `srv-2 "Server 2"`,
//! `srv-3 "Server 3"`.

use serde::{Deserialize, Serialize};

use super::{Role, StaffCount};

/// A synthesized employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// `<roleId>-<n>`, n starting at 1 within the role.
    pub id: String,
    /// `<roleName> <n>`.
    pub name: String,
    /// Role this employee belongs to.
    pub role_id: String,
    /// Shifts assigned so far in the current generation run.
    pub shifts_assigned: u32,
}

impl Employee {
    /// Creates the `sequence`-th employee of a role, with no shifts yet.
    pub fn for_role(role: &Role, sequence: u32) -> Self {
        Self {
            id: format!("{}-{}", role.id, sequence),
            name: format!("{} {}", role.name, sequence),
            role_id: role.id.clone(),
            shifts_assigned: 0,
        }
    }
}

/// The ordered set of employees for one generation run.
///
/// Order is role-list order, then ascending sequence number. That order
/// is the fairness tie-break, so it must not be changed after expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePool {
    employees: Vec<Employee>,
}

impl EmployeePool {
    /// Expands headcounts into individual employees.
    ///
    /// Roles without a staff-count entry get no employees. If a role has
    /// several entries, the first one is used. Entries for roles not in
    /// `roles` are ignored.
    pub fn expand(roles: &[Role], staff_counts: &[StaffCount]) -> Self {
        let mut employees = Vec::new();
        for role in roles {
            let count = staff_counts
                .iter()
                .find(|c| c.role_id == role.id)
                .map(|c| c.count)
                .unwrap_or(0);
            employees.extend((1..=count).map(|n| Employee::for_role(role, n)));
        }
        Self { employees }
    }

    /// All employees in pool order.
    #[inline]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees.
    #[inline]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the pool has no employees.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Finds an employee by id.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    /// Pool indices of a role's employees, in pool order.
    pub fn indices_for_role<'a>(&'a self, role_id: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.employees
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.role_id == role_id)
            .map(|(i, _)| i)
    }

    /// Employees of a role, in pool order.
    pub fn for_role<'a>(&'a self, role_id: &'a str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees.iter().filter(move |e| e.role_id == role_id)
    }

    /// Number of employees in a role.
    pub fn headcount(&self, role_id: &str) -> usize {
        self.for_role(role_id).count()
    }

    /// Employee at a pool index.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> &Employee {
        &self.employees[index]
    }

    /// Records one more shift for the employee at a pool index.
    #[inline]
    pub(crate) fn record_shift(&mut self, index: usize) {
        self.employees[index].shifts_assigned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<Role> {
        vec![Role::new("srv", "Server"), Role::new("cook", "Cook")]
    }

    #[test]
    fn test_expand_ids_and_names() {
        let pool = EmployeePool::expand(
            &roles(),
            &[StaffCount::new("cook", 1), StaffCount::new("srv", 2)],
        );
        let ids: Vec<_> = pool.employees().iter().map(|e| e.id.as_str()).collect();
        // Role-list order, not staff-count order
        assert_eq!(ids, vec!["srv-1", "srv-2", "cook-1"]);
        assert_eq!(pool.employees()[1].name, "Server 2");
        assert_eq!(pool.employees()[2].name, "Cook 1");
        assert!(pool.employees().iter().all(|e| e.shifts_assigned == 0));
    }

    #[test]
    fn test_missing_and_zero_counts() {
        let pool = EmployeePool::expand(&roles(), &[StaffCount::new("srv", 0)]);
        assert!(pool.is_empty());
        assert_eq!(pool.headcount("cook"), 0);
    }

    #[test]
    fn test_first_duplicate_count_wins() {
        let pool = EmployeePool::expand(
            &roles(),
            &[StaffCount::new("srv", 1), StaffCount::new("srv", 5)],
        );
        assert_eq!(pool.headcount("srv"), 1);
    }

    #[test]
    fn test_unknown_role_count_ignored() {
        let pool = EmployeePool::expand(&roles(), &[StaffCount::new("ghost", 3)]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_expand_is_deterministic() {
        let counts = [StaffCount::new("srv", 3), StaffCount::new("cook", 2)];
        assert_eq!(
            EmployeePool::expand(&roles(), &counts),
            EmployeePool::expand(&roles(), &counts)
        );
    }

    #[test]
    fn test_lookup_and_indices() {
        let pool = EmployeePool::expand(
            &roles(),
            &[StaffCount::new("srv", 2), StaffCount::new("cook", 2)],
        );
        assert_eq!(pool.get("cook-2").map(|e| e.name.as_str()), Some("Cook 2"));
        assert!(pool.get("cook-3").is_none());
        assert_eq!(pool.indices_for_role("cook").collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_record_shift() {
        let mut pool = EmployeePool::expand(&roles(), &[StaffCount::new("srv", 1)]);
        pool.record_shift(0);
        pool.record_shift(0);
        assert_eq!(pool.at(0).shifts_assigned, 2);
    }
}
