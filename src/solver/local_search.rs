use crate::data::{Instance, JobId, Schedule, Time};
use crate::solver::neighborhood::{generate_moves, Move, MoveKind, MOVE_KINDS};
use crate::solver::{calculate_cmax, calculate_cmax_from_order};
use log::{debug, trace};

pub const DEFAULT_MAX_ITERATIONS: usize = 200;

#[derive(Debug, Clone)]
pub struct Config {
  pub max_iterations: usize,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      max_iterations: DEFAULT_MAX_ITERATIONS,
    }
  }
}

#[derive(Debug, Clone)]
pub struct EvaluatedMove {
  pub kind: MoveKind,
  pub candidate: Move,
  pub cmax: Time,
}

/// First-improvement descent over swap, then relocation, then reversal moves.
/// Every iteration applies at most one move and starts scanning again from swaps.
pub fn improve_solution(inst: &Instance, initial: &Schedule, config: &Config) -> Schedule {
  let mut current = initial.clone();
  let mut current_cmax = calculate_cmax(inst, &current);

  trace!("Starting with {}", current_cmax);
  let mut iteration = 0;
  while iteration < config.max_iterations {
    iteration += 1;

    match find_move(inst, &mut current.order, current_cmax) {
      Some(next_move) => {
        next_move.candidate.apply(&mut current.order);
        current_cmax = next_move.cmax;
        trace!(
          "Found improvement to {} with {:?} {:?} ({})",
          current_cmax,
          next_move.kind,
          next_move.candidate,
          iteration
        );
      }
      None => {
        debug!(
          "Did not find improvement, stopping at {} ({})",
          current_cmax, iteration
        );
        return current;
      }
    }
  }

  debug!(
    "Reached iteration limit at {} ({})",
    current_cmax, config.max_iterations
  );

  return current;
}

/// Returns the first move, in scan order, with a Cmax strictly below `cmax`. `order` is left as it was.
pub fn find_move(inst: &Instance, order: &mut Vec<JobId>, cmax: Time) -> Option<EvaluatedMove> {
  for &kind in MOVE_KINDS.iter() {
    for candidate in generate_moves(kind, order.len()) {
      candidate.apply(order);
      let candidate_cmax = calculate_cmax_from_order(inst, order);
      candidate.inverse().apply(order);

      if candidate_cmax < cmax {
        return Some(EvaluatedMove {
          kind: kind,
          candidate: candidate,
          cmax: candidate_cmax,
        });
      }
    }
    trace!("No improving {:?} move", kind);
  }

  return None;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::solver::schrage;

  #[test]
  fn example_is_already_locally_optimal() {
    let inst = Instance::new(&[(0, 3, 5), (1, 2, 6), (3, 4, 1)]);
    let initial = schrage::find_solution(&inst);

    let improved = improve_solution(&inst, &initial, &Config::default());

    assert_eq!(improved, initial);
    assert_eq!(calculate_cmax(&inst, &improved), 11);
  }

  #[test]
  fn swap_fixes_blocking_job() {
    // Schrage starts the long job at t=0 and delays the urgent one
    let inst = Instance::new(&[(0, 10, 1), (1, 1, 20)]);
    let initial = schrage::find_solution(&inst);
    assert_eq!(calculate_cmax(&inst, &initial), 31);

    let improved = improve_solution(&inst, &initial, &Config::default());

    assert_eq!(improved.ids(&inst), vec![2, 1]);
    assert_eq!(calculate_cmax(&inst, &improved), 22);
  }

  #[test]
  fn zero_iterations_keeps_input() {
    let inst = Instance::new(&[(0, 10, 1), (1, 1, 20)]);
    let initial = Schedule::new(vec![0, 1]);

    let improved = improve_solution(&inst, &initial, &Config { max_iterations: 0 });

    assert_eq!(improved, initial);
  }

  #[test]
  fn one_iteration_applies_one_move() {
    let inst = Instance::new(&[(0, 10, 1), (1, 1, 20)]);
    let initial = Schedule::new(vec![0, 1]);

    let improved = improve_solution(&inst, &initial, &Config { max_iterations: 1 });

    assert_eq!(improved.order, vec![1, 0]);
  }

  #[test]
  fn find_move_reports_first_swap() {
    let inst = Instance::new(&[(0, 10, 1), (1, 1, 20)]);
    let mut order = vec![0, 1];

    let found = find_move(&inst, &mut order, 31).unwrap();

    assert_eq!(found.kind, MoveKind::Swap);
    assert_eq!(found.candidate, Move::Swap(0, 1));
    assert_eq!(found.cmax, 22);
    assert_eq!(order, vec![0, 1]);
  }

  #[test]
  fn find_move_falls_back_to_relocation() {
    // [1,2,3] = 19; every swap is >= 19, moving job 1 to the end gives 17
    let inst = Instance::new(&[(5, 3, 1), (5, 3, 8), (3, 5, 3)]);
    let mut order = vec![0, 1, 2];
    assert_eq!(calculate_cmax_from_order(&inst, &order), 19);

    let found = find_move(&inst, &mut order, 19).unwrap();

    assert_eq!(found.kind, MoveKind::Relocate);
    assert_eq!(found.candidate, Move::Relocate { from: 0, to: 2 });
    assert_eq!(found.cmax, 17);
    assert_eq!(order, vec![0, 1, 2]);
  }

  #[test]
  fn find_move_falls_back_to_reversal() {
    // [1,2,3,4] = 16; no swap or relocation improves, reversing all of it gives 15
    let inst = Instance::new(&[(2, 2, 4), (3, 1, 0), (6, 2, 7), (3, 3, 5)]);
    let mut order = vec![0, 1, 2, 3];
    assert_eq!(calculate_cmax_from_order(&inst, &order), 16);

    let found = find_move(&inst, &mut order, 16).unwrap();

    assert_eq!(found.kind, MoveKind::Reverse);
    assert_eq!(found.candidate, Move::Reverse(0, 3));
    assert_eq!(found.cmax, 15);
  }

  #[test]
  fn improve_applies_relocation() {
    let inst = Instance::new(&[(5, 3, 1), (5, 3, 8), (3, 5, 3)]);
    let initial = Schedule::new(vec![0, 1, 2]);

    let improved = improve_solution(&inst, &initial, &Config { max_iterations: 1 });

    assert_eq!(improved.order, vec![1, 2, 0]);
  }

  #[test]
  fn result_is_local_optimum() {
    let inst = Instance::new(&[
      (0, 6, 2),
      (2, 3, 14),
      (4, 1, 9),
      (1, 7, 3),
      (9, 2, 12),
      (3, 4, 0),
    ]);
    let initial = Schedule::new(inst.job_ids());

    let improved = improve_solution(&inst, &initial, &Config { max_iterations: 10_000 });
    let cmax = calculate_cmax(&inst, &improved);

    assert!(cmax <= calculate_cmax(&inst, &initial));
    let mut order = improved.order.clone();
    assert!(find_move(&inst, &mut order, cmax).is_none());
  }

  #[test]
  fn empty_and_single_job_schedules() {
    let empty = Instance::new(&[]);
    assert!(improve_solution(&empty, &Schedule::empty(), &Config::default()).is_empty());

    let single = Instance::new(&[(2, 3, 4)]);
    let improved = improve_solution(&single, &Schedule::new(vec![0]), &Config::default());
    assert_eq!(calculate_cmax(&single, &improved), 9);
  }
}
