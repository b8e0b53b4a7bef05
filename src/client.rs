use std::collections::BTreeSet;
use std::fmt;

pub type Topping = String;
pub type Toppings = BTreeSet<Topping>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Client {
	id: usize,
	likes: Toppings,
	dislikes: Toppings,
}

impl Client {
	pub fn new(id: usize, likes: Toppings, dislikes: Toppings) -> Client {
		Client { id, likes, dislikes }
	}

	pub fn get_id(&self) -> usize { self.id }

	pub fn get_likes(&self) -> &Toppings { &self.likes }

	#[cfg(test)]
	pub fn get_dislikes(&self) -> &Toppings { &self.dislikes }

	/// A client accepts a pizza when it has everything they like, and nothing they dislike.
	pub fn accepts(&self, toppings: &Toppings) -> bool {
		self.likes.is_subset(toppings) && self.dislikes.is_disjoint(toppings)
	}
}

impl fmt::Display for Client {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let likes: Vec<&str> = self.likes.iter().map(String::as_str).collect();
		let dislikes: Vec<&str> = self.dislikes.iter().map(String::as_str).collect();
		write!(f, "{} l:{} d:{}", self.id, likes.join(" "), dislikes.join(" "))
	}
}

/// Counts how many of `clients` would buy a pizza with exactly these `toppings`.
pub fn count_buyers(toppings: &Toppings, clients: &[Client]) -> usize {
	clients.iter().filter(|client| client.accepts(toppings)).count()
}

#[cfg(test)]
pub fn toppings(names: &[&str]) -> Toppings {
	names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client() {
		let client = Client::new(3, toppings(&["cheese", "basil"]), toppings(&["pineapple"]));
		assert_eq!(client.get_id(), 3);
		assert_eq!(client.get_likes(), &toppings(&["basil", "cheese"]));
		assert_eq!(client.get_dislikes(), &toppings(&["pineapple"]));
		assert_eq!(client.to_string(), "3 l:basil cheese d:pineapple");
	}

	#[test]
	fn test_accepts() {
		let client = Client::new(0, toppings(&["cheese", "basil"]), toppings(&["pineapple"]));
		assert!(client.accepts(&toppings(&["cheese", "basil"])));
		assert!(client.accepts(&toppings(&["cheese", "basil", "tomatoes"])));
		assert!(!client.accepts(&toppings(&["cheese"])));
		assert!(!client.accepts(&toppings(&[])));
		assert!(!client.accepts(&toppings(&["cheese", "basil", "pineapple"])));
	}

	#[test]
	fn test_accepts_matches_definition_exhaustively() {
		let universe = ["a", "b", "c", "d"];
		let subset = |mask: u32| -> Toppings {
			universe.iter().enumerate()
				.filter(|(index, _)| mask & (1 << index) != 0)
				.map(|(_, name)| name.to_string())
				.collect()
		};

		for likes_mask in 0 .. 16 {
			for dislikes_mask in 0 .. 16 {
				let client = Client::new(0, subset(likes_mask), subset(dislikes_mask));
				for pizza_mask in 0 .. 16 {
					let expected = likes_mask & pizza_mask == likes_mask && dislikes_mask & pizza_mask == 0;
					assert_eq!(expected, client.accepts(&subset(pizza_mask)));
				}
			}
		}
	}

	#[test]
	fn test_removing_a_topping_is_monotonic() {
		let clients = vec![
			Client::new(0, toppings(&["olives"]), toppings(&[])),
			Client::new(1, toppings(&["cheese", "olives"]), toppings(&[])),
			Client::new(2, toppings(&[]), toppings(&["olives"])),
			Client::new(3, toppings(&["cheese"]), toppings(&["olives"])),
			Client::new(4, toppings(&["cheese"]), toppings(&[])),
		];
		let before = toppings(&["cheese", "olives"]);
		let after = toppings(&["cheese"]);

		for client in &clients {
			if client.get_dislikes().contains("olives") {
				assert!(!client.accepts(&before) || client.accepts(&after));
			}
			if client.get_likes().contains("olives") {
				assert!(!client.accepts(&after));
			}
		}
	}

	#[test]
	fn test_count_buyers() {
		let clients = vec![
			Client::new(0, toppings(&["cheese"]), toppings(&[])),
			Client::new(1, toppings(&["cheese", "mushrooms"]), toppings(&[])),
			Client::new(2, toppings(&[]), toppings(&["cheese"])),
		];
		assert_eq!(count_buyers(&toppings(&["cheese", "mushrooms"]), &clients), 2);
		assert_eq!(count_buyers(&toppings(&["cheese"]), &clients), 1);
		assert_eq!(count_buyers(&toppings(&[]), &clients), 1);
		assert_eq!(count_buyers(&toppings(&["cheese"]), &[]), 0);
	}
}
