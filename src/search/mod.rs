mod frontier;
mod models;
mod solver;

pub use frontier::{CostFrontier, Frontier, QueueFrontier, SearchNode, StackFrontier};
pub use models::{ConfigError, SearchConfig, SearchOutcome, SearchStats, SearchStrategy, Solution};
pub use solver::{replay, search, solve};
