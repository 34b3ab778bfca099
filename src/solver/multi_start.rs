use crate::data::{Instance, Schedule, Time};
use crate::solver::schrage::{self, Weights};
use crate::solver::{calculate_cmax, local_search};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
  Weighted(Weights),
  Classic,
}

/// Tried in this order; on equal Cmax the earlier start is kept.
pub const STARTS: [Start; 5] = [
  Start::Weighted(Weights {
    r: 1.0,
    p: 0.5,
    q: 2.0,
  }),
  Start::Weighted(Weights {
    r: 0.5,
    p: 1.0,
    q: 2.0,
  }),
  Start::Weighted(Weights {
    r: 2.0,
    p: 0.5,
    q: 1.0,
  }),
  Start::Weighted(Weights {
    r: 1.0,
    p: 1.0,
    q: 1.0,
  }),
  Start::Classic,
];

#[derive(Debug, Clone)]
pub struct Config {
  pub num_starts: usize,
  pub local_search: local_search::Config,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      num_starts: STARTS.len(),
      local_search: local_search::Config::default(),
    }
  }
}

impl Start {
  pub fn construct(&self, inst: &Instance) -> Schedule {
    return match self {
      Start::Weighted(weights) => schrage::find_solution_weighted(inst, weights),
      Start::Classic => schrage::find_solution(inst),
    };
  }
}

/// Builds the start, improves it with local search and returns it with its Cmax.
pub fn run_start(inst: &Instance, start: &Start, config: &local_search::Config) -> (Schedule, Time) {
  let initial = start.construct(inst);
  let initial_cmax = calculate_cmax(inst, &initial);

  let improved = local_search::improve_solution(inst, &initial, config);
  let cmax = calculate_cmax(inst, &improved);

  debug!("{:?}: {} -> {}", start, initial_cmax, cmax);

  return (improved, cmax);
}

pub fn find_solution(inst: &Instance, config: &Config) -> Schedule {
  let best = STARTS
    .iter()
    .take(config.num_starts)
    .map(|start| run_start(inst, start, &config.local_search))
    .fold(None, |best: Option<(Schedule, Time)>, candidate| match best {
      Some(best) if best.1 <= candidate.1 => Some(best),
      _ => Some(candidate),
    });

  return match best {
    Some((schedule, cmax)) => {
      info!("Best of {} starts: {}", config.num_starts.min(STARTS.len()), cmax);
      schedule
    }
    None => Schedule::empty(),
  };
}
