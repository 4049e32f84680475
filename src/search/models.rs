use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::{Direction, DEFAULT_MAX_GENERATED_STATES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SearchStrategy {
    /// Oldest state first; shortest solutions.
    #[value(name = "bfs")]
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// Newest state first.
    #[value(name = "dfs")]
    #[serde(rename = "dfs")]
    DepthFirst,
    /// Cheapest state first, see `search_penalty`.
    #[value(name = "ucs")]
    #[serde(rename = "ucs")]
    UniformCost,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The search gives up once this many distinct states have been generated.
    pub max_generated_states: usize,
    pub strategy: SearchStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_generated_states: DEFAULT_MAX_GENERATED_STATES,
            strategy: SearchStrategy::BreadthFirst,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {} is not valid", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchConfig {
    pub fn from_json_str(s: &str) -> Result<SearchConfig, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<SearchConfig, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        SearchConfig::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states recorded in the visited set, the initial state included.
    pub generated: usize,
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Direction>,
    pub stats: SearchStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every reachable state was generated without reaching the goal.
    NoSolution(SearchStats),
    /// The generated-state budget ran out first.
    Overloaded(SearchStats),
}

impl SearchOutcome {
    pub fn moves(&self) -> Option<&[Direction]> {
        match self {
            SearchOutcome::Solved(solution) => Some(&solution.moves),
            _ => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::NoSolution(stats) | SearchOutcome::Overloaded(stats) => stats,
        }
    }
}
