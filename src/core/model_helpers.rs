use std::ops::Add;
use crate::core::models::{Direction, GameState, Tile, UserAction, Vec2};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    /// Enumeration order of legal moves. Search tie-breaks depend on it, so it is fixed.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&d| UserAction::Move(d)).collect()
    }
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Barrier => '*',
            Tile::Goal => 'G',
            Tile::Purple => 'C',
            Tile::Movable => 'M',
            Tile::Timed => 'T',
            Tile::Other(c) => c,
        }
    }
}

impl GameState {
    pub fn height(&self) -> i32 {
        self.grid.size().height()
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width()
    }

    pub fn is_in_bounds(&self, pos: Vec2) -> bool {
        self.grid.contains(&pos)
    }

    pub fn tile_at(&self, pos: Vec2) -> Option<Tile> {
        self.grid.get(&pos).copied()
    }

    pub fn has_water_at(&self, pos: Vec2) -> bool {
        self.water.get(&pos).copied().unwrap_or(false)
    }

    pub fn has_lava_at(&self, pos: Vec2) -> bool {
        self.lava.get(&pos).copied().unwrap_or(false)
    }

    pub fn is_goal_unlocked(&self) -> bool {
        self.purple_collected >= self.purple_total
    }

    pub fn can_player_enter(&self, pos: Vec2) -> bool {
        match self.tile_at(pos) {
            None => false,
            Some(Tile::Wall | Tile::Barrier | Tile::Timed) => false,
            Some(Tile::Goal) => self.is_goal_unlocked(),
            Some(_) => true,
        }
    }

    pub fn can_liquid_flow_to(&self, pos: Vec2) -> bool {
        match self.tile_at(pos) {
            None => false,
            Some(Tile::Wall | Tile::Movable | Tile::Timed | Tile::Purple | Tile::Goal) => false,
            Some(_) => true,
        }
    }

    pub fn lava_cell_count(&self) -> usize {
        self.lava.count_set()
    }

    pub fn water_cell_count(&self) -> usize {
        self.water.count_set()
    }
}
