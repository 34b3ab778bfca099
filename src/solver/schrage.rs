use crate::data::{Instance, JobId, Schedule, Time};
use log::trace;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Weights of the dispatch priority `q * w_q - r * w_r - p * w_p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
  pub r: f64,
  pub p: f64,
  pub q: f64,
}

impl Weights {
  /// Plain Schrage: largest delivery time first.
  pub const CLASSIC: Weights = Weights {
    r: 0.0,
    p: 0.0,
    q: 1.0,
  };

  pub fn new(r: f64, p: f64, q: f64) -> Self {
    return Weights { r: r, p: p, q: q };
  }

  pub fn priority(&self, inst: &Instance, job: JobId) -> f64 {
    return self.q * inst.delivery[job] as f64
      - self.r * inst.release[job] as f64
      - self.p * inst.processing[job] as f64;
  }
}

#[derive(Debug, Clone, Copy)]
struct Priority(f64);

impl PartialEq for Priority {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Priority {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.total_cmp(&other.0)
  }
}

// Schrage, "Obtaining Optimal Solutions to Resource Constrained Network Scheduling Problems"
pub fn find_solution(inst: &Instance) -> Schedule {
  return dispatch(inst, |job| inst.delivery[job]);
}

pub fn find_solution_weighted(inst: &Instance, weights: &Weights) -> Schedule {
  return dispatch(inst, |job| Priority(weights.priority(inst, job)));
}

/// Repeatedly starts the available job with the highest key. Equal keys go to the lowest job id.
fn dispatch<K: Ord, F: Fn(JobId) -> K>(inst: &Instance, key: F) -> Schedule {
  // Stable, so equal release dates keep input order
  let mut by_release = inst.job_ids();
  by_release.sort_by_key(|&job| inst.release[job]);

  let mut order = Vec::with_capacity(inst.n_jobs);
  let mut available = BinaryHeap::new();
  let mut next = 0;
  let mut current_time: Time = 0;

  while next < by_release.len() || !available.is_empty() {
    while next < by_release.len() && inst.release[by_release[next]] <= current_time {
      let job = by_release[next];
      available.push((key(job), Reverse(job)));
      next += 1;
    }

    match available.pop() {
      Some((_, Reverse(job))) => {
        trace!("t={}: dispatching job {}", current_time, inst.external_id(job));
        order.push(job);
        current_time += inst.processing[job];
      }
      None => {
        // Machine idles until the next release
        current_time = inst.release[by_release[next]];
      }
    }
  }

  return Schedule::new(order);
}
