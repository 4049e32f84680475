use serde::Serialize;
use crate::core::{Direction, GameChangeType};
use crate::state_graph::StateGraph;

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum NodeStatus {
    Live,
    Won,
    Lost,
}

#[derive(Serialize, Debug)]
struct GraphDump {
    root: usize,
    nodes: Vec<NodeDump>,
    moves: Vec<MoveDump>,
}

#[derive(Serialize, Debug)]
struct NodeDump {
    id: usize,
    status: NodeStatus,
}

#[derive(Serialize, Debug)]
struct MoveDump {
    from: usize,
    to: usize,
    direction: Direction,
    change: GameChangeType,
}

/// Pretty JSON of the graph: nodes sorted by id, moves by (from, to).
pub fn get_json_data(graph: &StateGraph, root: usize) -> serde_json::Result<String> {
    let mut nodes: Vec<NodeDump> = graph
        .ids
        .right_values()
        .map(|&id| NodeDump {
            id,
            status: if graph.won.contains(&id) {
                NodeStatus::Won
            } else if graph.lost.contains(&id) {
                NodeStatus::Lost
            } else {
                NodeStatus::Live
            },
        })
        .collect();
    nodes.sort_by_key(|node| node.id);

    let mut moves: Vec<MoveDump> = graph
        .edges
        .iter()
        .map(|edge| MoveDump {
            from: edge.from,
            to: edge.to,
            direction: edge.direction,
            change: edge.change,
        })
        .collect();
    moves.sort_by_key(|mv| (mv.from, mv.to));

    serde_json::to_string_pretty(&GraphDump { root, nodes, moves })
}
