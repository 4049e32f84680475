use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use log::debug;
use thiserror::Error;
use crate::core::{BoundedGrid, GameState, Tile, Vec2, DEFAULT_TIMED_TURNS};

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("map must contain a player starting position ('{0}')")]
    MissingPlayer(char),
    #[error("timed block at row {row}, column {col} has an unusable turn count in '{token}'")]
    InvalidTimedCount { row: usize, col: usize, token: String },
    #[error("could not read level file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Characters the loader recognises. Anything else becomes `Tile::Other`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrammar {
    pub empty: char,
    pub wall: char,
    pub player: char,
    pub water: char,
    pub lava: char,
    pub movable: char,
    pub goal: char,
    pub barrier: char,
    pub purple: char,
    pub timed: char,
    pub default_timed_turns: i32,
}

impl Default for LevelGrammar {
    fn default() -> Self {
        LevelGrammar {
            empty: '.',
            wall: '#',
            player: 'P',
            water: 'W',
            lava: 'L',
            movable: 'M',
            goal: 'G',
            barrier: '*',
            purple: 'C',
            timed: 'T',
            default_timed_turns: DEFAULT_TIMED_TURNS,
        }
    }
}

pub fn load_level(path: impl AsRef<Path>) -> Result<GameState, LevelError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded level text from {}", path.display());
    parse_level(&text)
}

pub fn parse_level(s: &str) -> Result<GameState, LevelError> {
    parse_level_with(s, &LevelGrammar::default())
}

/// Splits a line into single-character tokens, except that a timed marker followed
/// by `:` swallows the digits after it (`T:12` is one token).
fn tokenize_line<'a>(line: &'a str, grammar: &LevelGrammar) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while let Some(ch) = rest.chars().next() {
        let mut len = ch.len_utf8();
        if ch == grammar.timed && rest[len..].starts_with(':') {
            len += 1;
            len += rest[len..].chars().take_while(|c| c.is_ascii_digit()).count();
        }
        tokens.push(&rest[..len]);
        rest = &rest[len..];
    }
    tokens
}

pub fn parse_level_with(s: &str, grammar: &LevelGrammar) -> Result<GameState, LevelError> {
    // every line is a row, blank ones included; a final line terminator adds none
    let rows: Vec<Vec<&str>> = s
        .lines()
        .map(|line| tokenize_line(line.trim_end(), grammar))
        .collect();

    let height = rows.len() as i32;
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as i32;

    let mut grid = BoundedGrid::new_with_size(height, width, Tile::Empty);
    let mut water = BoundedGrid::new_with_size(height, width, false);
    let mut lava = BoundedGrid::new_with_size(height, width, false);
    let mut timed_blocks = BTreeMap::new();
    let mut movable_blocks = BTreeSet::new();
    let mut player = None;
    let mut goal = None;
    let mut purple_total = 0;

    for (i, row) in rows.iter().enumerate() {
        for (j, &token) in row.iter().enumerate() {
            let pos = Vec2 { i: i as i32, j: j as i32 };
            let mut chars = token.chars();
            let Some(ch) = chars.next() else {
                continue;
            };
            let tile = if ch == grammar.player {
                player = Some(pos);
                Tile::Empty
            } else if ch == grammar.water {
                water[&pos] = true;
                Tile::Empty
            } else if ch == grammar.lava {
                lava[&pos] = true;
                Tile::Empty
            } else if ch == grammar.goal {
                goal = Some(pos);
                Tile::Goal
            } else if ch == grammar.purple {
                purple_total += 1;
                Tile::Purple
            } else if ch == grammar.movable {
                movable_blocks.insert(pos);
                Tile::Movable
            } else if ch == grammar.timed {
                let digits = chars.as_str().trim_start_matches(':');
                let turns = if digits.is_empty() {
                    grammar.default_timed_turns
                } else {
                    digits.parse().map_err(|_| LevelError::InvalidTimedCount {
                        row: i,
                        col: j,
                        token: token.to_string(),
                    })?
                };
                timed_blocks.insert(pos, turns);
                Tile::Timed
            } else if ch == grammar.empty {
                Tile::Empty
            } else if ch == grammar.wall {
                Tile::Wall
            } else if ch == grammar.barrier {
                Tile::Barrier
            } else {
                Tile::Other(ch)
            };
            grid[&pos] = tile;
        }
    }

    let Some(player) = player else {
        return Err(LevelError::MissingPlayer(grammar.player));
    };
    debug!(
        "parsed level {}x{}: {} collectibles, {} timed blocks, {} movable blocks",
        height,
        width,
        purple_total,
        timed_blocks.len(),
        movable_blocks.len()
    );

    Ok(GameState {
        grid,
        water,
        lava,
        timed_blocks,
        movable_blocks,
        player,
        goal,
        purple_total,
        purple_collected: 0,
        move_count: 0,
        game_over: false,
        won: false,
    })
}
