//! Fairness selection.
//!
//! Picks who works a (shift, role) cell: the candidates with the fewest
//! shifts so far this week. Ties go to whoever comes first in the pool,
//! i.e. the lower sequence number within a role.

use crate::models::{Employee, EmployeePool};

/// Returns up to `n` candidates with the lowest `shifts_assigned`.
///
/// `candidates` must be in pool order; equal counts keep that order.
/// Returns fewer than `n` when fewer candidates exist.
///
/// # Example
///
/// ```
/// use u_roster::models::{EmployeePool, Role, StaffCount};
/// use u_roster::scheduler::select_fairest;
///
/// let pool = EmployeePool::expand(&[Role::new("srv", "Server")], &[StaffCount::new("srv", 3)]);
/// let candidates: Vec<_> = pool.employees().iter().collect();
/// let picked = select_fairest(&candidates, 2);
/// assert_eq!(picked[0].id, "srv-1");
/// assert_eq!(picked[1].id, "srv-2");
/// ```
pub fn select_fairest<'a>(candidates: &[&'a Employee], n: usize) -> Vec<&'a Employee> {
    fewest_first(candidates.to_vec(), n, |e| e.shifts_assigned)
}

/// Index-based form of [`select_fairest`] over a pool.
pub(crate) fn select_fairest_indices(
    pool: &EmployeePool,
    candidates: Vec<usize>,
    n: usize,
) -> Vec<usize> {
    fewest_first(candidates, n, |&i| pool.at(i).shifts_assigned)
}

// Stable sort, so equal keys stay in input order.
fn fewest_first<T>(mut items: Vec<T>, n: usize, key: impl Fn(&T) -> u32) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    items.truncate(n);
    items
}
