use std::collections::HashMap;
use petgraph::Directed;
use petgraph::graph::NodeIndex;
use crate::core::Direction;
use crate::state_graph::StateGraph;

pub type DirectionGraph = petgraph::Graph<usize, Direction, Directed>;

/// Node weights are state ids, edge weights the move taken.
pub fn convert_to_petgraph(graph: &StateGraph) -> (DirectionGraph, HashMap<usize, NodeIndex>) {
    let mut petgraph = DirectionGraph::new();

    let mut ids: Vec<usize> = graph.ids.right_values().copied().collect();
    ids.sort_unstable();
    let node_map: HashMap<usize, NodeIndex> = ids
        .into_iter()
        .map(|id| (id, petgraph.add_node(id)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from), Some(&to)) = (node_map.get(&edge.from), node_map.get(&edge.to)) {
            petgraph.add_edge(from, to, edge.direction);
        }
    }

    (petgraph, node_map)
}

/// Fewest moves from `start_id` to any won state in the graph.
pub fn shortest_winning_path(graph: &StateGraph, start_id: usize) -> Option<Vec<Direction>> {
    let (petgraph, node_map) = convert_to_petgraph(graph);
    let &start = node_map.get(&start_id)?;

    let (_, path) = petgraph::algo::astar(
        &petgraph,
        start,
        |node| graph.won.contains(&petgraph[node]),
        |_| 1usize,
        |_| 0usize,
    )?;

    path.windows(2)
        .map(|pair| petgraph.find_edge(pair[0], pair[1]).map(|edge| petgraph[edge]))
        .collect()
}
