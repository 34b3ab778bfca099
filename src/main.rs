#[macro_use]
extern crate log;

use clap::{App, Arg};
use heuristics::batch::run_batch;
use heuristics::parser::parse_weights;
use heuristics::solver::{local_search, multi_start, Algorithm};
use itertools::Itertools;
use std::process;

fn main() {
  env_logger::init();

  let matches = App::new("rpq-heuristics")
    .version("1.0")
    .about("Heuristic solvers for single machine scheduling with release and delivery times")
    .arg(
      Arg::with_name("instance")
        .long("instance")
        .help("Instance file name(s)")
        .takes_value(true)
        .multiple(true)
        .required(true),
    )
    .arg(
      Arg::with_name("solver")
        .long("solver")
        .help("Solver to use")
        .possible_values(&["multi-start", "schrage", "weighted-schrage", "local-search"])
        .default_value("multi-start")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("starts")
        .long("starts")
        .help("Number of weighted starts for multi-start (at most 5)")
        .default_value("5")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("max-iterations")
        .long("max-iterations")
        .help("Iteration limit of the local search")
        .default_value("200")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("weights")
        .long("weights")
        .help("Priority weights r,p,q for weighted Schrage")
        .takes_value(true)
        .required_if("solver", "weighted-schrage"),
    )
    .get_matches();

  let solver = matches.value_of("solver").unwrap_or("multi-start");
  let files: Vec<&str> = matches
    .values_of("instance")
    .map(|values| values.collect())
    .unwrap_or_default();
  let num_starts: usize = parse_or_exit(matches.value_of("starts"), "starts");
  let max_iterations: usize = parse_or_exit(matches.value_of("max-iterations"), "max-iterations");

  let local_search_config = local_search::Config {
    max_iterations: max_iterations,
  };
  let algorithm = match solver {
    "schrage" => Algorithm::Schrage,
    "weighted-schrage" => {
      let weights = matches.value_of("weights").unwrap_or_default();
      match parse_weights(weights) {
        Ok(weights) => Algorithm::WeightedSchrage(weights),
        Err(e) => {
          error!("Invalid weights {:?}: {}", weights, e);
          process::exit(2);
        }
      }
    }
    "local-search" => Algorithm::LocalSearch(local_search_config),
    _ => Algorithm::MultiStart(multi_start::Config {
      num_starts: num_starts,
      local_search: local_search_config,
    }),
  };
  debug!("Running {:?}", algorithm);

  let summary = run_batch(&files, &algorithm);

  for (name, result) in &summary.results {
    match result {
      Ok(report) => {
        println!("{}: {}", name, report.cmax);
        println!("{}", report.ids.iter().join(" "));
      }
      Err(e) => println!("{}: error: {}", name, e),
    }
  }

  println!("Total: {}", summary.total_cmax());
  info!(
    "Solved {} of {} instances in {:.4} s",
    summary.results.len() - summary.failures(),
    summary.results.len(),
    summary.elapsed.as_secs_f64()
  );
}

fn parse_or_exit(value: Option<&str>, name: &str) -> usize {
  match value.and_then(|v| v.parse().ok()) {
    Some(parsed) => parsed,
    None => {
      error!("Invalid {}: {:?}", name, value);
      process::exit(2);
    }
  }
}
