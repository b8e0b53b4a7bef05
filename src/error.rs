use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::party::PartyError;

#[derive(Debug, Error)]
pub enum PizzaError {
	#[error("couldn't access {}: {source}", .path.display())]
	Io { path: PathBuf, source: io::Error },
	#[error(transparent)]
	Parse(#[from] ParseError),
	#[error(transparent)]
	Party(#[from] PartyError),
	#[error("unknown dataset `{0}`: expected letters from a to e, or the path to an input file")]
	UnknownDataset(String),
}
