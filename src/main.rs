mod cli;
mod client;
mod driver;
mod error;
mod parser;
mod party;
mod solver;

use std::process::ExitCode;

use clap::Parser;
use cli::{Args, SolverKind};
use driver::{resolve_datasets, run};
use error::PizzaError;
use solver::{RandomWalk, Solver, TakeAway};

fn create_solver(args: &Args) -> Box<dyn Solver> {
	match (args.solver, args.seed) {
		(SolverKind::TakeAway, _) => Box::new(TakeAway),
		(SolverKind::RandomWalk, Some(seed)) => Box::new(RandomWalk::seeded(args.top_options, seed)),
		(SolverKind::RandomWalk, None) => Box::new(RandomWalk::from_thread_rng(args.top_options)),
	}
}

fn one_pizza(args: &Args) -> Result<usize, PizzaError> {
	let datasets = resolve_datasets(&args.datasets, &args.input_dir)?;
	let mut solver = create_solver(args);
	run(&datasets, solver.as_mut(), &args.output_dir)
}

fn main() -> ExitCode {
	env_logger::init();
	let args = Args::parse();

	match one_pizza(&args) {
		Ok(total) => {
			println!("Total points: {}", total);
			ExitCode::SUCCESS
		}
		Err(failure) => {
			eprintln!("error: {}", failure);
			ExitCode::FAILURE
		}
	}
}
