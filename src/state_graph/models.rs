use std::collections::{BTreeSet, VecDeque};
use bimap::BiMap;
use crate::core::{Direction, GameChangeType, GameState, StateKey};

/// Id of the state the exploration starts from.
pub const ROOT: usize = 0;

/// Every state reachable from a level, up to a node limit, with the moves between them.
#[derive(Clone)]
pub struct StateGraph {
    pub ids: BiMap<StateKey, usize>,
    // interned but not yet expanded, oldest first
    pub(super) open: VecDeque<(usize, GameState)>,
    pub edges: Vec<Edge>,
    pub won: BTreeSet<usize>,
    pub lost: BTreeSet<usize>,
    pub node_limit: usize,
    pub(super) next_id: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub change: GameChangeType,
}

/// How far an exploration got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exploration {
    /// Every reachable state is in the graph.
    Complete,
    /// The node limit was hit with states still unexpanded.
    Truncated,
}
