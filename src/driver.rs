use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::client::{Client, Toppings, count_buyers};
use crate::error::PizzaError;
use crate::parser::load_clients;
use crate::solver::Solver;

const DATASET_FILES: [(char, &str); 5] = [
	('a', "a_an_example.in.txt"),
	('b', "b_basic.in.txt"),
	('c', "c_coarse.in.txt"),
	('d', "d_difficult.in.txt"),
	('e', "e_elaborate.in.txt"),
];

fn dataset_file(letter: char) -> Option<&'static str> {
	DATASET_FILES.iter().find(|(candidate, _)| *candidate == letter).map(|(_, file)| *file)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dataset {
	pub name: String,
	pub path: PathBuf,
}

/// Turns the dataset arguments into datasets. An argument consisting only of dataset letters
/// (like `abe`) denotes one dataset per letter, which is looked up in `input_dir`. Any other
/// argument must be the path to an input file.
pub fn resolve_datasets(arguments: &[String], input_dir: &Path) -> Result<Vec<Dataset>, PizzaError> {
	let mut datasets = Vec::new();
	for argument in arguments {
		let letters: Option<Vec<(char, &str)>> = argument.chars().map(
			|letter| dataset_file(letter).map(|file| (letter, file))
		).collect();
		if let Some(letters) = letters.filter(|letters| !letters.is_empty()) {
			for (letter, file) in letters {
				datasets.push(Dataset { name: letter.to_string(), path: input_dir.join(file) });
			}
			continue;
		}

		let path = PathBuf::from(argument);
		if !path.is_file() {
			return Err(PizzaError::UnknownDataset(argument.clone()));
		}
		let name = path.file_name().and_then(|name| name.to_str()).unwrap_or(argument);
		let name = name.strip_suffix(".txt").unwrap_or(name);
		let name = name.strip_suffix(".in").unwrap_or(name).to_string();
		datasets.push(Dataset { name, path });
	}
	Ok(datasets)
}

/// Formats the toppings as the practice round expects: the number of toppings, followed by the
/// toppings themselves.
pub fn format_toppings(toppings: &Toppings) -> String {
	let names: Vec<&str> = toppings.iter().map(String::as_str).collect();
	format!("{} {}", toppings.len(), names.join(" "))
}

/// Saves `toppings` in `output_dir` as `<dataset>_<points>`, unless that file already exists.
/// Returns the path when the file was written, and `None` when it was already there.
pub fn save_once(
	output_dir: &Path, dataset: &str, points: usize, toppings: &Toppings
) -> Result<Option<PathBuf>, PizzaError> {
	let path = output_dir.join(format!("{}_{}", dataset, points));
	let to_error = |source: io::Error| PizzaError::Io { path: path.clone(), source };

	let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
		Ok(file) => file,
		Err(error) if error.kind() == io::ErrorKind::AlreadyExists => return Ok(None),
		Err(error) => return Err(to_error(error)),
	};
	file.write_all(format_toppings(toppings).as_bytes()).map_err(to_error)?;
	Ok(Some(path))
}

/// The ids of the clients that would buy a pizza with these `toppings`.
fn satisfied_ids(toppings: &Toppings, clients: &[Client]) -> Vec<usize> {
	clients.iter().filter(|client| client.accepts(toppings)).map(Client::get_id).collect()
}

/// Solves a single dataset, prints its score, and saves the solution. Returns the number of
/// clients that would buy the chosen pizza.
pub fn run_dataset(
	dataset: &Dataset, solver: &mut dyn Solver, output_dir: &Path
) -> Result<usize, PizzaError> {
	let clients = load_clients(&dataset.path)?;
	info!("Loaded {} clients of dataset {} from {}", clients.len(), dataset.name, dataset.path.display());

	let toppings = solver.solve(&clients)?;
	let points = count_buyers(&toppings, &clients);
	println!("dataset {} {} found: {}", dataset.name, solver.name(), points);
	if log::log_enabled!(log::Level::Debug) {
		debug!("Clients of dataset {} that buy the pizza: {:?}", dataset.name, satisfied_ids(&toppings, &clients));
	}

	match save_once(output_dir, &dataset.name, points, &toppings)? {
		Some(path) => {
			println!("saving {}_{}", dataset.name, points);
			info!("Saved {} toppings to {}", toppings.len(), path.display());
		}
		None => info!("Solution {}_{} was already saved", dataset.name, points),
	}
	Ok(points)
}

/// Solves all datasets in order, and returns the total number of points.
pub fn run(datasets: &[Dataset], solver: &mut dyn Solver, output_dir: &Path) -> Result<usize, PizzaError> {
	let mut total = 0;
	for dataset in datasets {
		total += run_dataset(dataset, solver, output_dir)?;
	}
	Ok(total)
}
