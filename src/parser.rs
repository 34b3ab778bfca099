use crate::data::{Instance, Time};
use crate::solver::schrage::Weights;
use std::error::Error;
use std::fmt;

const FIELDS: [&str; 3] = ["r", "p", "q"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
  MissingHeader,
  InvalidHeader(String),
  CountMismatch {
    declared: usize,
    found: usize,
  },
  MissingField {
    line: usize,
    field: &'static str,
  },
  NonNumeric {
    line: usize,
    field: &'static str,
    value: String,
  },
  Negative {
    line: usize,
    field: &'static str,
    value: i64,
  },
  OutOfRange {
    line: usize,
    field: &'static str,
    value: String,
  },
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InvalidInput::MissingHeader => write!(f, "job count missing"),
      InvalidInput::InvalidHeader(value) => write!(f, "invalid job count {:?}", value),
      InvalidInput::CountMismatch { declared, found } => write!(
        f,
        "declared {} jobs but found {} data rows",
        declared, found
      ),
      InvalidInput::MissingField { line, field } => {
        write!(f, "line {}: field {} missing", line, field)
      }
      InvalidInput::NonNumeric { line, field, value } => {
        write!(f, "line {}: field {} is not a number ({:?})", line, field, value)
      }
      InvalidInput::Negative { line, field, value } => {
        write!(f, "line {}: field {} is negative ({})", line, field, value)
      }
      InvalidInput::OutOfRange { line, field, value } => {
        write!(f, "line {}: field {} exceeds {} ({})", line, field, u32::max_value(), value)
      }
    }
  }
}

impl Error for InvalidInput {}

/// Parses the `n` / `r p q` text format. Line numbers in errors are 1-based and count blank lines.
pub fn parse_instance(instance: &str) -> Result<Instance, InvalidInput> {
  let mut lines = instance
    .lines()
    .enumerate()
    .map(|(idx, line)| (idx + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty());

  let (_, prelude) = lines.next().ok_or(InvalidInput::MissingHeader)?;
  let n_jobs: usize = prelude
    .split_whitespace()
    .next()
    .and_then(|item| item.parse().ok())
    .ok_or_else(|| InvalidInput::InvalidHeader(prelude.to_string()))?;

  let rows: Vec<(usize, &str)> = lines.collect();
  if rows.len() != n_jobs {
    return Err(InvalidInput::CountMismatch {
      declared: n_jobs,
      found: rows.len(),
    });
  }

  let mut jobs = Vec::with_capacity(n_jobs);
  for (line_no, line) in rows {
    let items: Vec<&str> = line.split_whitespace().collect();
    let mut values = [0 as Time; 3];
    for (i, &field) in FIELDS.iter().enumerate() {
      let item = items.get(i).ok_or(InvalidInput::MissingField {
        line: line_no,
        field: field,
      })?;
      values[i] = parse_field(item, line_no, field)?;
    }
    jobs.push((values[0], values[1], values[2]));
  }

  Ok(Instance::new(&jobs))
}

fn parse_field(item: &str, line: usize, field: &'static str) -> Result<Time, InvalidInput> {
  let value: i64 = item.parse().map_err(|_| InvalidInput::NonNumeric {
    line: line,
    field: field,
    value: item.to_string(),
  })?;

  if value < 0 {
    return Err(InvalidInput::Negative {
      line: line,
      field: field,
      value: value,
    });
  }

  if value > u32::max_value() as i64 {
    return Err(InvalidInput::OutOfRange {
      line: line,
      field: field,
      value: item.to_string(),
    });
  }

  Ok(value as Time)
}

/// Parses `w_r,w_p,w_q`.
pub fn parse_weights(weights: &str) -> Result<Weights, Box<dyn Error>> {
  let items: Vec<&str> = weights.split(',').map(|item| item.trim()).collect();
  if items.len() != 3 {
    Err(format!("Expected 3 weights, got {}", items.len()))?;
  }

  let r: f64 = items[0].parse()?;
  let p: f64 = items[1].parse()?;
  let q: f64 = items[2].parse()?;

  Ok(Weights::new(r, p, q))
}
