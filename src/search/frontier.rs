use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use crate::core::{search_penalty, Direction, GameState};

pub struct SearchNode {
    pub state: GameState,
    pub path: Vec<Direction>,
}

/// Pending states of a search. The implementation decides which node comes out next.
pub trait Frontier {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.nodes.pop_front()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.nodes.pop()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

struct CostEntry {
    cost: usize,
    order: u64,
    node: SearchNode,
}

impl PartialEq for CostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostEntry {}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.order).cmp(&(other.cost, other.order))
    }
}

/// Lowest `search_penalty` first; equal costs come out in insertion order.
#[derive(Default)]
pub struct CostFrontier {
    heap: BinaryHeap<Reverse<CostEntry>>,
    next_order: u64,
}

impl Frontier for CostFrontier {
    fn push(&mut self, node: SearchNode) {
        let cost = search_penalty(&node.state, node.path.len());
        let order = self.next_order;
        self.next_order += 1;
        self.heap.push(Reverse(CostEntry { cost, order, node }));
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
