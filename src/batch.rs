use crate::data::Time;
use crate::parser::parse_instance;
use crate::solver::{calculate_cmax, verify_solution, Algorithm};
use log::{debug, error, info};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  pub name: String,
  pub cmax: Time,
  pub ids: Vec<usize>,
}

#[derive(Debug)]
pub struct BatchSummary {
  pub results: Vec<(String, Result<Report, Box<dyn Error>>)>,
  pub elapsed: Duration,
}

impl BatchSummary {
  /// Sum of Cmax over the instances that were solved.
  pub fn total_cmax(&self) -> Time {
    return self.reports().map(|report| report.cmax).sum();
  }

  pub fn reports(&self) -> impl Iterator<Item = &Report> {
    return self.results.iter().filter_map(|(_, result)| result.as_ref().ok());
  }

  pub fn failures(&self) -> usize {
    return self.results.iter().filter(|(_, result)| result.is_err()).count();
  }
}

/// Parses, solves and verifies a single instance file.
pub fn run_instance<P: AsRef<Path>>(path: P, algorithm: &Algorithm) -> Result<Report, Box<dyn Error>> {
  let path = path.as_ref();
  let contents = fs::read_to_string(path)?;
  let instance = parse_instance(&contents)?;
  debug!("Loaded {} jobs from {}", instance.n_jobs, path.display());

  let schedule = algorithm.find_solution(&instance);
  verify_solution(&instance, &schedule)?;

  Ok(Report {
    name: path.display().to_string(),
    cmax: calculate_cmax(&instance, &schedule),
    ids: schedule.ids(&instance),
  })
}

/// Runs every instance in order. A failing instance is logged and does not stop the batch.
pub fn run_batch<P: AsRef<Path>>(paths: &[P], algorithm: &Algorithm) -> BatchSummary {
  let start = Instant::now();

  let results = paths
    .iter()
    .map(|path| {
      let name = path.as_ref().display().to_string();
      let result = run_instance(path, algorithm);
      match &result {
        Ok(report) => info!("{}: {}", name, report.cmax),
        Err(e) => error!("Error processing {}: {}", name, e),
      }
      (name, result)
    })
    .collect();

  return BatchSummary {
    results: results,
    elapsed: start.elapsed(),
  };
}
