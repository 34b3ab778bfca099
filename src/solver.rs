pub mod local_search;
pub mod multi_start;
pub mod neighborhood;
pub mod schrage;

use crate::data::{Instance, JobId, Schedule, Time};
use log;
use std::cmp;
use std::error::Error;

/// Solver selected for a batch run.
#[derive(Debug, Clone)]
pub enum Algorithm {
  Schrage,
  WeightedSchrage(schrage::Weights),
  LocalSearch(local_search::Config),
  MultiStart(multi_start::Config),
}

impl Algorithm {
  pub fn find_solution(&self, inst: &Instance) -> Schedule {
    return match self {
      Algorithm::Schrage => schrage::find_solution(inst),
      Algorithm::WeightedSchrage(weights) => schrage::find_solution_weighted(inst, weights),
      Algorithm::LocalSearch(config) => {
        let initial = schrage::find_solution(inst);
        local_search::improve_solution(inst, &initial, config)
      }
      Algorithm::MultiStart(config) => multi_start::find_solution(inst, config),
    };
  }
}

pub fn calculate_cmax(inst: &Instance, schedule: &Schedule) -> Time {
  return calculate_cmax_from_order(inst, &schedule.order);
}

pub(crate) fn calculate_cmax_from_order(inst: &Instance, order: &[JobId]) -> Time {
  let mut current_time = 0;
  let mut cmax = 0;

  for &job in order {
    current_time = cmp::max(current_time, inst.release[job]) + inst.processing[job];
    cmax = cmp::max(cmax, current_time + inst.delivery[job]);
  }

  return cmax;
}

pub fn verify_solution(inst: &Instance, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
  if schedule.len() != inst.n_jobs {
    Err(format!(
      "Schedule contains {} jobs, instance has {}",
      schedule.len(),
      inst.n_jobs
    ))?;
  }

  let mut seen = vec![false; inst.n_jobs];
  for (position, &job) in schedule.order.iter().enumerate() {
    if job >= inst.n_jobs {
      Err(format!("Unknown job {} at position {}", job, position))?;
    }
    if seen[job] {
      Err(format!(
        "Job {} scheduled twice (again at position {})",
        inst.external_id(job),
        position
      ))?;
    }
    seen[job] = true;
  }

  log::trace!("Verified schedule of {} jobs", schedule.len());

  Ok(())
}
