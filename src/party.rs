use std::cmp::Ordering;
use thiserror::Error;

use crate::client::{Client, Toppings};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartyError {
	#[error("can't remove topping `{0}`: it is not on the pizza")]
	MissingTopping(String),
}

/// A candidate pizza together with the clients that would buy it.
///
/// Parties built with `evaluate` (and everything derived from them by `combine` or
/// `remove_topping`) always contain *exactly* the clients of the pool that accept the toppings.
/// The `empty` + `admit` pair is only meant for seed parties, whose clients are a chosen group
/// rather than the whole pool.
#[derive(Debug, Clone)]
pub struct Party<'a> {
	toppings: Toppings,
	clients: Vec<&'a Client>,
}

impl<'a> Party<'a> {

	/// Creates a party with the given toppings and every client in `pool` that accepts them.
	pub fn evaluate(toppings: Toppings, pool: &'a [Client]) -> Self {
		let clients = pool.iter().filter(|client| client.accepts(&toppings)).collect();
		Self { toppings, clients }
	}

	/// Creates a party without any clients. Use `admit` to add them.
	pub fn empty(toppings: Toppings) -> Self {
		Self { toppings, clients: Vec::new() }
	}

	/// Adds `client` to this party if, and only if, they accept its toppings.
	pub fn admit(&mut self, client: &'a Client) -> bool {
		if client.accepts(&self.toppings) {
			self.clients.push(client);
			true
		} else {
			false
		}
	}

	pub fn combine(&self, other: &Party, pool: &'a [Client]) -> Party<'a> {
		Party::evaluate(self.toppings.union(&other.toppings).cloned().collect(), pool)
	}

	pub fn remove_topping(&self, topping: &str, pool: &'a [Client]) -> Result<Party<'a>, PartyError> {
		if !self.toppings.contains(topping) {
			return Err(PartyError::MissingTopping(topping.to_string()));
		}
		let mut toppings = self.toppings.clone();
		toppings.remove(topping);
		Ok(Party::evaluate(toppings, pool))
	}

	pub fn members(&self) -> usize { self.clients.len() }

	pub fn get_toppings(&self) -> &Toppings { &self.toppings }

	#[cfg(test)]
	pub fn get_clients(&self) -> &[&'a Client] { &self.clients }

	pub fn into_toppings(self) -> Toppings { self.toppings }
}

/// Puts the parties with the most clients first.
pub fn by_members_descending(a: &Party, b: &Party) -> Ordering {
	b.members().cmp(&a.members())
}
