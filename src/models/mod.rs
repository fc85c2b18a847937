pub mod availability;
pub mod day;
pub mod food;
pub mod user;
pub mod vote;

pub use availability::FoodAvailability;
pub use day::Day;
pub use food::Food;
pub use user::{User, UserResponse};
pub use vote::{Vote, VoteSummary};
