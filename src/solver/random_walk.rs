use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::rc::Rc;

use log::debug;
use rand::prelude::*;
use rand::seq::index;

use crate::client::{Client, Toppings};
use crate::party::{Party, PartyError, by_members_descending};
use crate::solver::Solver;

pub const DEFAULT_TOP_OPTIONS: NonZeroUsize = NonZeroUsize::new(50).unwrap();

/// Builds one 'perfect' party for each distinct set of likes, containing the clients with exactly
/// those likes. The parties are returned in order of first appearance.
fn perfect_pizzas(clients: &[Client]) -> Vec<Party<'_>> {
	let mut parties = Vec::<Party>::new();
	let mut index_map = HashMap::<&Toppings, usize>::new();
	for client in clients {
		let index = *index_map.entry(client.get_likes()).or_insert_with(|| {
			parties.push(Party::empty(client.get_likes().clone()));
			parties.len() - 1
		});
		parties[index].admit(client);
	}
	parties
}

/// Picks `amount` distinct elements of `items` in random order, or all of them when there are
/// fewer than `amount`.
fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], amount: usize) -> Vec<T> {
	let amount = usize::min(amount, items.len());
	index::sample(rng, items.len(), amount).into_iter().map(|index| items[index].clone()).collect()
}

fn same_population(a: &[Rc<Party>], b: &[Rc<Party>]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(party_a, party_b)| Rc::ptr_eq(party_a, party_b))
}

/// Combines each party of `current` with each *other* party of `retained`. Returns the
/// combinations that have more clients than both of their parents. Any combination with more than
/// `most` clients becomes the new `best`, regardless of whether it is returned.
fn combine_generation<'a>(
	current: &[Rc<Party<'a>>], retained: &[Rc<Party<'a>>], pool: &'a [Client],
	most: &mut usize, best: &mut Option<Rc<Party<'a>>>
) -> Vec<Rc<Party<'a>>> {
	let mut next = Vec::new();
	for party_a in current {
		for party_b in retained {
			if Rc::ptr_eq(party_a, party_b) {
				continue;
			}
			let combined = Rc::new(party_a.combine(party_b, pool));
			let new_size = combined.members();

			if new_size > party_a.members() && new_size > party_b.members() {
				next.push(Rc::clone(&combined));
			}
			if new_size > *most {
				*most = new_size;
				*best = Some(combined);
			}
		}
	}
	next
}

/// Combines parties generation by generation. It starts with the perfect pizza of each group of
/// clients with the same likes. In each generation, a random subset of the current parties is
/// combined with every retained party. Only combinations that have more clients than both of
/// their parents make it into the next generation. The best combination that was ever seen is
/// returned once a generation ends up empty.
///
/// At most `top_options` parties are considered in each generation, and at most `top_options`
/// parties are retained. The randomness comes from `rng`, so seeding it makes runs reproducible.
pub struct RandomWalk<R> {
	top_options: NonZeroUsize,
	rng: R,
}

impl<R: Rng> RandomWalk<R> {
	pub fn new(top_options: NonZeroUsize, rng: R) -> Self {
		Self { top_options, rng }
	}
}

impl RandomWalk<StdRng> {
	pub fn seeded(top_options: NonZeroUsize, seed: u64) -> Self {
		Self::new(top_options, StdRng::seed_from_u64(seed))
	}

	pub fn from_thread_rng(top_options: NonZeroUsize) -> Self {
		Self::new(top_options, StdRng::from_rng(&mut rand::rng()))
	}
}

impl<R: Rng> Solver for RandomWalk<R> {
	fn name(&self) -> &'static str { "RandomWalk" }

	fn solve(&mut self, clients: &[Client]) -> Result<Toppings, PartyError> {
		let top_options = self.top_options.get();
		let mut current: Vec<Rc<Party>> = perfect_pizzas(clients).into_iter().map(Rc::new).collect();

		let mut most = 0;
		let mut best: Option<Rc<Party>> = None;
		for party in &current {
			if party.members() > most {
				most = party.members();
				best = Some(Rc::clone(party));
			}
		}
		debug!("RandomWalk starts with {} perfect pizzas, the best has {} clients", current.len(), most);

		let mut retained = sample(&mut self.rng, &current, top_options);
		let mut generation = 0;
		while !current.is_empty() {
			current.sort_by(|a, b| by_members_descending(a, b));
			current = sample(&mut self.rng, &current, top_options);

			let next = combine_generation(&current, &retained, clients, &mut most, &mut best);

			// The retained parties are replaced by a sample of this generation; the old ones are
			// not part of the draw.
			if !same_population(&current, &retained) {
				retained = sample(&mut self.rng, &current, top_options);
			}

			generation += 1;
			debug!(
				"RandomWalk generation {} combined {} parties into {} better ones, best has {} clients",
				generation, current.len(), next.len(), most
			);
			current = next;
		}

		Ok(best.map(|party| party.get_toppings().clone()).unwrap_or_default())
	}
}
