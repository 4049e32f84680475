use crate::core::liquids::spread_liquids;
use crate::core::models::{Direction, GameChangeType, GameState, GameUpdate, MoveRejection, Tile, UserAction, Vec2};

/// What a legal action will do, worked out without touching the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MovePlan {
    Walk { to: Vec2 },
    Push { block: Vec2, beyond: Vec2 },
}

fn plan_move(game: &GameState, dir: Direction) -> Result<MovePlan, MoveRejection> {
    if game.game_over {
        return Err(MoveRejection::GameOver);
    }

    let delta = dir.delta();
    let target = game.player + delta;
    let Some(dest) = game.tile_at(target) else {
        return Err(MoveRejection::OutOfBounds);
    };

    if dest == Tile::Movable {
        let beyond = target + delta;
        let Some(beyond_tile) = game.tile_at(beyond) else {
            return Err(MoveRejection::PushBlocked);
        };
        // liquid cells take the block whatever tile sits under the liquid
        if beyond_tile == Tile::Empty || game.water[&beyond] || game.lava[&beyond] {
            return Ok(MovePlan::Push { block: target, beyond });
        }
        return Err(MoveRejection::PushBlocked);
    }

    if game.can_player_enter(target) {
        return Ok(MovePlan::Walk { to: target });
    }
    if dest == Tile::Goal {
        Err(MoveRejection::GoalLocked)
    } else {
        Err(MoveRejection::Obstructed(dest))
    }
}

pub fn step(game: &GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d,
    };

    let plan = match plan_move(game, dir) {
        Ok(plan) => plan,
        Err(rejection) => return GameUpdate::Rejected(rejection),
    };

    let mut next = game.clone();
    let change = match plan {
        MovePlan::Push { block, beyond } => {
            next.water[&beyond] = false;
            next.lava[&beyond] = false;
            next.grid[&beyond] = Tile::Movable;
            next.grid[&block] = Tile::Empty;
            next.movable_blocks.remove(&block);
            next.movable_blocks.insert(beyond);
            next.player = block;
            GameChangeType::PlayerAndBlockMove
        }
        MovePlan::Walk { to } => {
            next.player = to;
            match next.grid[&to] {
                Tile::Purple => {
                    next.purple_collected += 1;
                    next.grid[&to] = Tile::Empty;
                    GameChangeType::Collected
                }
                Tile::Goal => {
                    // can_player_enter already required the goal to be unlocked
                    next.won = true;
                    next.game_over = true;
                    next.move_count += 1;
                    return GameUpdate::NextState(next, GameChangeType::ReachedGoal);
                }
                _ => GameChangeType::PlayerMove,
            }
        }
    };

    finish_turn(&mut next);
    GameUpdate::NextState(next, change)
}

fn finish_turn(game: &mut GameState) {
    game.move_count += 1;
    tick_timed_blocks(game);
    spread_liquids(game);
    check_player_death(game);
}

fn tick_timed_blocks(game: &mut GameState) {
    for turns in game.timed_blocks.values_mut() {
        *turns -= 1;
    }
    let expired: Vec<Vec2> = game
        .timed_blocks
        .iter()
        .filter(|&(_, &turns)| turns <= 0)
        .map(|(&pos, _)| pos)
        .collect();
    for pos in expired {
        game.timed_blocks.remove(&pos);
        game.grid[&pos] = Tile::Empty;
    }
}

fn check_player_death(game: &mut GameState) {
    let player = game.player;
    if game.lava[&player] || game.grid[&player] == Tile::Wall {
        game.game_over = true;
        game.won = false;
    }
}

/// Successor state for `dir`, or an unchanged copy when the move is not legal.
pub fn apply_move(game: &GameState, dir: Direction) -> GameState {
    match step(game, UserAction::Move(dir)) {
        GameUpdate::NextState(next, _) => next,
        GameUpdate::Rejected(_) => game.clone(),
    }
}

/// Legal directions in `Direction::ALL` order.
pub fn valid_moves(game: &GameState) -> Vec<Direction> {
    if game.game_over {
        return vec![];
    }
    Direction::ALL
        .into_iter()
        .filter(|&dir| plan_move(game, dir).is_ok())
        .collect()
}
