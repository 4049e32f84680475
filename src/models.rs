use crate::core::{GameChangeType, GameState};

pub struct GameRenderState {
    pub game: GameState,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
    /// Free-form line for solver progress and results.
    pub status: Option<String>,
}

impl GameRenderState {
    pub fn new(game: GameState) -> Self {
        GameRenderState {
            game,
            error: None,
            last_change: None,
            status: None,
        }
    }
}
