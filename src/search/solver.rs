use std::collections::HashSet;
use std::time::Instant;
use log::{debug, info, warn};
use crate::core::{apply_move, valid_moves, Direction, GameState, StateKey};
use crate::search::frontier::{CostFrontier, Frontier, QueueFrontier, SearchNode, StackFrontier};
use crate::search::models::{SearchConfig, SearchOutcome, SearchStats, SearchStrategy, Solution};

pub fn solve(initial: &GameState, config: &SearchConfig) -> SearchOutcome {
    match config.strategy {
        SearchStrategy::BreadthFirst => search(initial, config, QueueFrontier::default()),
        SearchStrategy::DepthFirst => search(initial, config, StackFrontier::default()),
        SearchStrategy::UniformCost => search(initial, config, CostFrontier::default()),
    }
}

/// Generic search loop shared by every strategy; only the frontier differs.
pub fn search<F: Frontier>(initial: &GameState, config: &SearchConfig, mut frontier: F) -> SearchOutcome {
    let start_time = Instant::now();
    let mut visited: HashSet<StateKey> = HashSet::new();
    let mut expanded = 0;

    visited.insert(initial.state_key());
    frontier.push(SearchNode {
        state: initial.clone(),
        path: Vec::new(),
    });

    let stats = |visited: &HashSet<StateKey>, expanded: usize| SearchStats {
        generated: visited.len(),
        expanded,
        elapsed: start_time.elapsed(),
    };

    loop {
        let Some(SearchNode { state, path }) = frontier.pop() else {
            let stats = stats(&visited, expanded);
            info!(
                "{:?} search found no solution after generating {} states in {:?}",
                config.strategy, stats.generated, stats.elapsed
            );
            return SearchOutcome::NoSolution(stats);
        };
        expanded += 1;

        for dir in valid_moves(&state) {
            let next = apply_move(&state, dir);

            if next.won {
                let mut moves = path.clone();
                moves.push(dir);
                let stats = stats(&visited, expanded);
                info!(
                    "{:?} search found a {} move solution after generating {} states ({} expanded) in {:?}",
                    config.strategy,
                    moves.len(),
                    stats.generated,
                    stats.expanded,
                    stats.elapsed
                );
                return SearchOutcome::Solved(Solution { moves, stats });
            }

            let key = next.state_key();
            if visited.contains(&key) {
                continue;
            }
            // the budget only trips when a state past it would have to be recorded
            if visited.len() >= config.max_generated_states {
                let stats = stats(&visited, expanded);
                warn!(
                    "{:?} search overloaded: {} states generated, {} expanded, {:?}",
                    config.strategy, stats.generated, stats.expanded, stats.elapsed
                );
                return SearchOutcome::Overloaded(stats);
            }
            visited.insert(key);

            let mut next_path = path.clone();
            next_path.push(dir);
            frontier.push(SearchNode {
                state: next,
                path: next_path,
            });
        }

        if expanded % 10_000 == 0 {
            debug!(
                "{} expanded, {} generated, {} pending",
                expanded,
                visited.len(),
                frontier.len()
            );
        }
    }
}

/// Applies `moves` in order from `initial`. Illegal moves leave the state as it was.
pub fn replay(initial: &GameState, moves: &[Direction]) -> GameState {
    moves
        .iter()
        .fold(initial.clone(), |state, &dir| apply_move(&state, dir))
}
