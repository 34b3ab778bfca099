use crate::data::JobId;
use itertools::{iproduct, Itertools};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
  Swap,
  Relocate,
  Reverse,
}

/// Searched in this order, the next kind only when the previous one has no improving move.
pub const MOVE_KINDS: [MoveKind; 3] = [MoveKind::Swap, MoveKind::Relocate, MoveKind::Reverse];

/// Positions refer to the sequence the move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
  /// Exchange positions `i < j`.
  Swap(usize, usize),
  /// Remove the job at `from` and insert it at `to` of the shortened sequence.
  Relocate { from: usize, to: usize },
  /// Reverse `i..=j`, `j >= i + 2`.
  Reverse(usize, usize),
}

impl Move {
  pub fn apply(&self, order: &mut Vec<JobId>) {
    match *self {
      Move::Swap(i, j) => order.swap(i, j),
      Move::Relocate { from, to } => {
        let job = order.remove(from);
        order.insert(to, job);
      }
      Move::Reverse(i, j) => order[i..=j].reverse(),
    }
  }

  pub fn inverse(&self) -> Move {
    match *self {
      Move::Relocate { from, to } => Move::Relocate { from: to, to: from },
      other => other,
    }
  }
}

/// All moves of one kind for a sequence of `n` jobs, in scan order.
pub fn generate_moves(kind: MoveKind, n: usize) -> Box<dyn Iterator<Item = Move>> {
  match kind {
    MoveKind::Swap => Box::new(
      (0..n)
        .tuple_combinations::<(usize, usize)>()
        .map(|(i, j)| Move::Swap(i, j)),
    ),
    MoveKind::Relocate => Box::new(
      iproduct!(0..n, 0..n)
        .filter(|&(from, to)| from != to)
        .map(|(from, to)| Move::Relocate { from: from, to: to }),
    ),
    MoveKind::Reverse => Box::new(
      (0..n)
        .tuple_combinations::<(usize, usize)>()
        .filter(|&(i, j)| j >= i + 2)
        .map(|(i, j)| Move::Reverse(i, j)),
    ),
  }
}
