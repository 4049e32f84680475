mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod heuristics;
mod liquids;
mod state_key;

pub use models::{Tile, Direction, UserAction, GameState, GameUpdate, GameChangeType, MoveRejection, Vec2};
pub use consts::*;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use heuristics::search_penalty;
pub use liquids::{plan_spread, spread_candidates, Liquid, SpreadPlan};
pub use state_key::StateKey;
pub use update::{apply_move, step, valid_moves};
