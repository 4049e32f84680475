use std::collections::BTreeSet;
use crate::core::models::{Direction, GameState, Tile, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Liquid {
    Water,
    Lava,
}

/// Cells each liquid would newly cover this turn, before collisions are resolved.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SpreadPlan {
    pub water: BTreeSet<Vec2>,
    pub lava: BTreeSet<Vec2>,
}

impl SpreadPlan {
    pub fn collisions(&self) -> BTreeSet<Vec2> {
        self.water.intersection(&self.lava).copied().collect()
    }
}

/// Candidate cells for one liquid. Sources are read from the current masks only,
/// so cells gained this turn do not spread again until the next one.
pub fn spread_candidates(game: &GameState, liquid: Liquid) -> BTreeSet<Vec2> {
    let (own, other) = match liquid {
        Liquid::Water => (&game.water, &game.lava),
        Liquid::Lava => (&game.lava, &game.water),
    };

    let mut candidates = BTreeSet::new();
    for source in own.positions_set() {
        for dir in Direction::ALL {
            let next = source + dir.delta();
            if !game.can_liquid_flow_to(next) {
                continue;
            }
            // water and lava masks stay disjoint, so a cell holds at most one liquid
            // and liquids only meet through a same-turn collision
            if own[&next] || other[&next] {
                continue;
            }
            candidates.insert(next);
        }
    }
    candidates
}

pub fn plan_spread(game: &GameState) -> SpreadPlan {
    SpreadPlan {
        water: spread_candidates(game, Liquid::Water),
        lava: spread_candidates(game, Liquid::Lava),
    }
}

/// One synchronous spread step. Cells both liquids reach at once harden into walls.
pub fn spread_liquids(game: &mut GameState) {
    let plan = plan_spread(game);
    let collisions = plan.collisions();

    for pos in &collisions {
        game.grid[pos] = Tile::Wall;
    }
    for pos in plan.water.difference(&collisions) {
        game.water[pos] = true;
    }
    for pos in plan.lava.difference(&collisions) {
        game.lava[pos] = true;
    }
}
