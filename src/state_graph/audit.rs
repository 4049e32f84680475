use log::{info, warn};
use thiserror::Error;
use crate::core::GameState;
use crate::search::{replay, SearchOutcome, SearchStrategy};
use crate::state_graph::{shortest_winning_path, Exploration, StateGraph, ROOT};

/// A search result the explored graph contradicts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("search found no solution, but a {0} move win is reachable")]
    MissedWin(usize),
    #[error("the {0} move solution does not end in a win")]
    SolutionDoesNotWin(usize),
    #[error("breadth-first search returned {found} moves, a {shortest} move win exists")]
    NotShortest { found: usize, shortest: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The graph agrees with the search result.
    Confirmed { shortest: Option<usize> },
    /// The graph was truncated before it could settle the question.
    Unverified,
}

/// Checks a search result against a graph explored from the same initial state.
pub fn audit_outcome(
    initial: &GameState,
    graph: &StateGraph,
    exploration: Exploration,
    strategy: SearchStrategy,
    outcome: &SearchOutcome,
) -> Result<Verdict, AuditError> {
    let shortest = shortest_winning_path(graph, ROOT).map(|path| path.len());

    let verdict = match outcome {
        SearchOutcome::Solved(solution) => {
            let found = solution.moves.len();
            if !replay(initial, &solution.moves).won {
                return Err(AuditError::SolutionDoesNotWin(found));
            }
            match shortest {
                Some(shortest) if strategy == SearchStrategy::BreadthFirst && found > shortest => {
                    return Err(AuditError::NotShortest { found, shortest });
                }
                _ => Verdict::Confirmed { shortest },
            }
        }
        SearchOutcome::NoSolution(_) => match (shortest, exploration) {
            (Some(shortest), _) => return Err(AuditError::MissedWin(shortest)),
            (None, Exploration::Complete) => Verdict::Confirmed { shortest: None },
            (None, Exploration::Truncated) => Verdict::Unverified,
        },
        SearchOutcome::Overloaded(_) => match (shortest, exploration) {
            // a complete graph with no win settles it even though the search gave up
            (None, Exploration::Complete) => Verdict::Confirmed { shortest: None },
            _ => Verdict::Unverified,
        },
    };

    match &verdict {
        Verdict::Confirmed { shortest } => info!("{:?} result confirmed, shortest win {:?}", strategy, shortest),
        Verdict::Unverified => warn!("{:?} result left unverified, graph {:?}", strategy, exploration),
    }
    Ok(verdict)
}
