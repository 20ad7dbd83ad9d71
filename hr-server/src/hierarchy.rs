//! Org-chart derivations
//!
//! Pure functions over a worker snapshot. Grouping keys departments by
//! first encounter and keeps members in encounter order; supervisor
//! resolution is a single-level lookup and never walks the chain, so
//! it stays correct even on a snapshot with a damaged reporting line.

use crate::db::models::Worker;

/// Group workers by department, in first-seen department order.
pub fn group_by_department(workers: &[Worker]) -> Vec<(String, Vec<&Worker>)> {
    let mut groups: Vec<(String, Vec<&Worker>)> = Vec::new();
    for worker in workers {
        match groups.iter_mut().find(|(name, _)| *name == worker.department) {
            Some((_, members)) => members.push(worker),
            None => groups.push((worker.department.clone(), vec![worker])),
        }
    }
    groups
}

/// Resolve a worker's immediate supervisor against the snapshot.
///
/// Returns `None` when the worker has no supervisor or the reference
/// does not resolve (a dangling id after a delete).
pub fn supervisor_of<'a>(worker: &Worker, workers: &'a [Worker]) -> Option<&'a Worker> {
    let supervisor_id = worker.supervisor_id?;
    workers.iter().find(|candidate| candidate.id == supervisor_id)
}
