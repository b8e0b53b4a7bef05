use std::fs::read_to_string;
use std::path::Path;

use thiserror::Error;

use crate::client::{Client, Toppings};
use crate::error::PizzaError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("line {line} starts a client, but the file ends before their dislikes")]
	IncompleteRecord { line: usize },
	#[error("line {line} is empty, but should at least contain the number of toppings")]
	MissingCount { line: usize },
}

/// Parses the toppings on a single line, skipping the leading topping count.
fn parse_toppings(line: &str, line_number: usize) -> Result<Toppings, ParseError> {
	let mut tokens = line.split_whitespace();
	if tokens.next().is_none() {
		return Err(ParseError::MissingCount { line: line_number });
	}
	Ok(tokens.map(|topping| topping.to_string()).collect())
}

/// Parses a problem in the format of the *One Pizza* practice round: the first line contains the
/// number of clients, and each client is described by two lines: first the toppings they like,
/// then the toppings they dislike. Both lines start with the number of toppings on that line.
///
/// The clients get their index in the file as id.
pub fn parse_clients(raw_text: &str) -> Result<Vec<Client>, ParseError> {
	let mut lines: Vec<&str> = raw_text.lines().collect();
	while lines.last().is_some_and(|line| line.trim().is_empty()) {
		lines.pop();
	}

	let mut clients = Vec::new();
	let mut index = 1;
	while index < lines.len() {
		let likes = parse_toppings(lines[index], index + 1)?;
		let dislikes_line = lines.get(index + 1).ok_or(ParseError::IncompleteRecord { line: index + 1 })?;
		let dislikes = parse_toppings(dislikes_line, index + 2)?;
		clients.push(Client::new(clients.len(), likes, dislikes));
		index += 2;
	}

	Ok(clients)
}

pub fn load_clients(path: &Path) -> Result<Vec<Client>, PizzaError> {
	let raw_text = read_to_string(path).map_err(|source| PizzaError::Io { path: path.to_path_buf(), source })?;
	Ok(parse_clients(&raw_text)?)
}
