use crate::client::{Client, Toppings};
use crate::party::PartyError;

mod random_walk;
mod take_away;

pub use random_walk::{DEFAULT_TOP_OPTIONS, RandomWalk};
pub use take_away::TakeAway;

/// Chooses the toppings of a single pizza, trying to please as many clients as possible.
///
/// Solvers only read `clients`, so the same slice can be shared by any number of solvers.
pub trait Solver {
	fn name(&self) -> &'static str;

	fn solve(&mut self, clients: &[Client]) -> Result<Toppings, PartyError>;
}
