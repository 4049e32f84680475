use std::collections::{BTreeSet, VecDeque};
use bimap::BiMap;
use log::{debug, info};
use crate::core::{step, GameState, GameUpdate, UserAction};
use crate::state_graph::models::{Edge, Exploration, StateGraph, ROOT};

impl StateGraph {
    pub fn new(node_limit: usize) -> Self {
        StateGraph {
            ids: BiMap::new(),
            open: VecDeque::new(),
            edges: Vec::new(),
            won: BTreeSet::new(),
            lost: BTreeSet::new(),
            node_limit,
            next_id: ROOT,
        }
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Id for `state`, adding it when unseen. Only live states are queued for expansion.
    pub fn intern(&mut self, state: GameState) -> usize {
        let key = state.state_key();
        if let Some(&id) = self.ids.get_by_left(&key) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(key, id);
        if state.won {
            self.won.insert(id);
        } else if state.game_over {
            self.lost.insert(id);
        } else {
            self.open.push_back((id, state));
        }
        id
    }

    /// Expands the oldest open state. Returns its id, or `None` when nothing is open.
    pub fn expand_next(&mut self) -> Option<usize> {
        let (from, state) = self.open.pop_front()?;
        for action in UserAction::all_actions() {
            let UserAction::Move(direction) = action;
            if let GameUpdate::NextState(next, change) = step(&state, action) {
                let to = self.intern(next);
                self.edges.push(Edge { from, to, direction, change });
            }
        }
        Some(from)
    }

    /// Expands open states until none are left or the node limit is reached.
    pub fn expand_all(&mut self) -> Exploration {
        let mut expanded = 0usize;
        loop {
            if self.open.is_empty() {
                return Exploration::Complete;
            }
            if self.node_count() >= self.node_limit {
                return Exploration::Truncated;
            }
            self.expand_next();
            expanded += 1;
            if expanded % 10_000 == 0 {
                debug!("{} expanded, {} nodes, {} open", expanded, self.node_count(), self.open.len());
            }
        }
    }
}

/// Builds the graph reachable from `initial`, which gets id `ROOT`.
pub fn explore(initial: &GameState, node_limit: usize) -> (StateGraph, Exploration) {
    let mut graph = StateGraph::new(node_limit);
    let root = graph.intern(initial.clone());
    debug_assert_eq!(root, ROOT);

    let exploration = graph.expand_all();
    info!(
        "explored {:?}: {} nodes, {} edges, {} won, {} lost, {} open",
        exploration,
        graph.node_count(),
        graph.edge_count(),
        graph.won.len(),
        graph.lost.len(),
        graph.open.len()
    );
    (graph, exploration)
}
