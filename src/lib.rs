// Lava & Aqua rules engine and solver.
// Map tiles: '.' empty, '#' wall, 'P' player, 'W' water, 'L' lava, 'M' movable block,
// 'G' goal, '*' barrier, 'C' collectible, 'T' or 'T:<n>' timed block.

pub mod console_interface;
pub mod core;
pub mod logging;
pub mod map_loader;
pub mod models;
pub mod search;
pub mod session;
pub mod state_graph;

#[cfg(test)]
mod test;
