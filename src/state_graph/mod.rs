mod audit;
mod graph;
mod json_export;
mod models;
mod petgraph_interface;
mod prune;

pub use audit::{audit_outcome, AuditError, Verdict};
pub use graph::explore;
pub use json_export::get_json_data;
pub use models::{Edge, Exploration, StateGraph, ROOT};
pub use petgraph_interface::{convert_to_petgraph, shortest_winning_path, DirectionGraph};
pub use prune::{retain_winnable, winnable_ids, Pruned};
