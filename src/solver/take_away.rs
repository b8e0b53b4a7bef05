use log::debug;

use crate::client::{Client, Toppings};
use crate::party::{Party, PartyError};
use crate::solver::Solver;

/// Starts with every topping that any client likes, and keeps taking away the toppings whose
/// removal would make more clients happy. This is fully deterministic.
///
/// During each pass, every topping is tried individually, and *all* toppings whose individual
/// removal was an improvement are removed at once. The combined removal is not checked again,
/// so a pass can end up worse than its starting point. That is fine, since `best` remembers the
/// best candidate that was ever evaluated.
pub struct TakeAway;

impl Solver for TakeAway {
	fn name(&self) -> &'static str { "TakeAway" }

	fn solve(&mut self, clients: &[Client]) -> Result<Toppings, PartyError> {
		let everything: Toppings = clients.iter().flat_map(
			|client| client.get_likes().iter().cloned()
		).collect();
		let mut party = Party::evaluate(everything, clients);
		let mut best = party.clone();
		let mut most = best.members();

		while !party.get_toppings().is_empty() {
			debug!(
				"TakeAway pass with {} toppings and {} clients, best has {} clients",
				party.get_toppings().len(), party.members(), most
			);
			let mut better = Toppings::new();
			for topping in party.get_toppings() {
				let candidate = party.remove_topping(topping, clients)?;
				if candidate.members() > party.members() {
					better.insert(topping.clone());
				}
				if candidate.members() > most {
					most = candidate.members();
					best = candidate;
				}
			}

			if better.is_empty() {
				return Ok(best.into_toppings());
			}
			let remaining = party.get_toppings().difference(&better).cloned().collect();
			party = Party::evaluate(remaining, clients);
		}

		Ok(best.into_toppings())
	}
}
