use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::solver::DEFAULT_TOP_OPTIONS;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SolverKind {
	/// Start with all liked toppings and greedily take away the harmful ones
	TakeAway,
	/// Randomly combine the perfect pizzas of groups of clients
	RandomWalk,
}

#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(author = AUTHOR)]
#[command(about = "Chooses the pizza toppings that please the most clients", long_about = None)]
pub struct Args {
	/// The datasets to solve: letters from a to e (like `abe`), or paths to input files
	#[arg(required = true)]
	pub datasets: Vec<String>,

	/// The solver that chooses the toppings
	#[arg(short, long, value_enum, default_value_t = SolverKind::TakeAway)]
	pub solver: SolverKind,

	/// The maximum number of parties that the random walk keeps per generation
	#[arg(short, long, default_value_t = DEFAULT_TOP_OPTIONS)]
	pub top_options: NonZeroUsize,

	/// The seed of the random walk. When omitted, each run is different
	#[arg(long)]
	pub seed: Option<u64>,

	/// The directory containing the input files of the dataset letters
	#[arg(short, long, default_value = "input_data")]
	pub input_dir: PathBuf,

	/// The directory in which the solutions are saved
	#[arg(short, long, default_value = ".")]
	pub output_dir: PathBuf,
}
