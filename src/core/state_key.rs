use crate::core::consts::STATE_KEY_VERSION;
use crate::core::models::{GameState, Tile, Vec2};

/// Compact canonical encoding of a `GameState`, used wherever states are deduplicated.
///
/// Layout, in order:
/// version byte, height, width, player, purple_collected, move_count, grid tiles,
/// water bits, lava bits, timed blocks (count then position/turns, sorted by position),
/// movable blocks (count then positions, sorted), goal (presence byte then position),
/// purple_total, game_over, won.
///
/// Integers are little-endian. Two states encode to the same key exactly when they
/// compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    pub fn version(&self) -> u8 {
        self.0[0]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_pos(out: &mut Vec<u8>, pos: Vec2) {
    push_i32(out, pos.i);
    push_i32(out, pos.j);
}

fn push_tile(out: &mut Vec<u8>, tile: Tile) {
    let code = match tile {
        Tile::Empty => 0,
        Tile::Wall => 1,
        Tile::Barrier => 2,
        Tile::Goal => 3,
        Tile::Purple => 4,
        Tile::Movable => 5,
        Tile::Timed => 6,
        Tile::Other(c) => {
            out.push(0xFF);
            push_u32(out, c as u32);
            return;
        }
    };
    out.push(code);
}

fn push_bits(out: &mut Vec<u8>, bits: &[bool]) {
    for chunk in bits.chunks(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (k, &set)| if set { acc | (1 << k) } else { acc });
        out.push(byte);
    }
}

impl GameState {
    pub fn state_key(&self) -> StateKey {
        let cells = self.grid.cells().len();
        let mut out = Vec::with_capacity(32 + cells + cells / 4 + 12 * self.timed_blocks.len() + 8 * self.movable_blocks.len());

        out.push(STATE_KEY_VERSION);
        push_i32(&mut out, self.height());
        push_i32(&mut out, self.width());
        push_pos(&mut out, self.player);
        push_u32(&mut out, self.purple_collected);
        push_u32(&mut out, self.move_count);

        for &tile in self.grid.cells() {
            push_tile(&mut out, tile);
        }
        push_bits(&mut out, self.water.cells());
        push_bits(&mut out, self.lava.cells());

        push_u32(&mut out, self.timed_blocks.len() as u32);
        for (&pos, &turns) in &self.timed_blocks {
            push_pos(&mut out, pos);
            push_i32(&mut out, turns);
        }

        push_u32(&mut out, self.movable_blocks.len() as u32);
        for &pos in &self.movable_blocks {
            push_pos(&mut out, pos);
        }

        match self.goal {
            Some(goal) => {
                out.push(1);
                push_pos(&mut out, goal);
            }
            None => out.push(0),
        }
        push_u32(&mut out, self.purple_total);
        out.push(self.game_over as u8);
        out.push(self.won as u8);

        StateKey(out.into_boxed_slice())
    }
}
