use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use crate::state_graph::StateGraph;

/// What `retain_winnable` removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pruned {
    pub nodes: usize,
    pub edges: usize,
    pub nodes_left: usize,
    pub edges_left: usize,
}

impl fmt::Display for Pruned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pruned {} dead-end states and {} moves; {} states and {} moves can still reach the goal",
            self.nodes, self.edges, self.nodes_left, self.edges_left
        )
    }
}

/// Ids from which a won state can be reached, found by walking edges backwards from every win.
pub fn winnable_ids(graph: &StateGraph) -> HashSet<usize> {
    let mut predecessors: HashMap<usize, Vec<usize>> = HashMap::new();
    for edge in &graph.edges {
        predecessors.entry(edge.to).or_default().push(edge.from);
    }

    let mut winnable: HashSet<usize> = graph.won.iter().copied().collect();
    let mut queue: VecDeque<usize> = graph.won.iter().copied().collect();
    while let Some(id) = queue.pop_front() {
        for &pred in predecessors.get(&id).into_iter().flatten() {
            if winnable.insert(pred) {
                queue.push_back(pred);
            }
        }
    }
    winnable
}

/// Drops every state that cannot lead to a win, along with the moves touching it.
/// States still open are dropped as well, since nothing is known about where they lead.
pub fn retain_winnable(graph: &mut StateGraph) -> Pruned {
    let winnable = winnable_ids(graph);
    let nodes_before = graph.node_count();
    let edges_before = graph.edge_count();

    graph.ids.retain(|_, id| winnable.contains(id));
    graph.edges.retain(|edge| winnable.contains(&edge.from) && winnable.contains(&edge.to));
    graph.open.clear();
    graph.lost.clear();

    Pruned {
        nodes: nodes_before - graph.node_count(),
        edges: edges_before - graph.edge_count(),
        nodes_left: graph.node_count(),
        edges_left: graph.edge_count(),
    }
}
