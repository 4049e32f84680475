use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Barrier,
    Goal,
    Purple,
    Movable,
    Timed,
    /// Any map character without a rule of its own, kept verbatim.
    Other(char),
}

/// Grid position, `i` is the row and `j` the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

/// One full configuration of a level.
///
/// Every field takes part in equality and hashing, including `move_count` and the
/// terminal flags: two boards that only differ in how many moves it took to reach
/// them are different states.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub grid: BoundedGrid<Tile>,
    pub water: BoundedGrid<bool>,
    pub lava: BoundedGrid<bool>,
    pub timed_blocks: BTreeMap<Vec2, i32>,
    pub movable_blocks: BTreeSet<Vec2>,
    pub player: Vec2,
    pub goal: Option<Vec2>,
    pub purple_total: u32,
    pub purple_collected: u32,
    pub move_count: u32,
    pub game_over: bool,
    pub won: bool,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Rejected(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBlockMove,
    Collected,
    ReachedGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("the game is over")]
    GameOver,
    #[error("cannot move out of bounds")]
    OutOfBounds,
    #[error("cannot walk into {0:?}")]
    Obstructed(Tile),
    #[error("the goal is locked until every collectible is picked up")]
    GoalLocked,
    #[error("cannot push block")]
    PushBlocked,
}
