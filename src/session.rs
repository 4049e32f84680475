use std::collections::VecDeque;
use crate::core::{step, Direction, GameChangeType, GameState, GameUpdate, MoveRejection, UserAction};

/// Interactive play: the current board, an undo history, and any queued auto-solve moves.
pub struct PlaySession {
    initial: GameState,
    current: GameState,
    history: Vec<GameState>,
    replay: VecDeque<Direction>,
}

impl PlaySession {
    pub fn new(initial: GameState) -> Self {
        PlaySession {
            current: initial.clone(),
            initial,
            history: Vec::new(),
            replay: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    pub fn initial(&self) -> &GameState {
        &self.initial
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// A manual move. Cancels any queued replay, which was planned for the board as it was.
    pub fn apply(&mut self, direction: Direction) -> Result<GameChangeType, MoveRejection> {
        self.replay.clear();
        self.advance(direction)
    }

    fn advance(&mut self, direction: Direction) -> Result<GameChangeType, MoveRejection> {
        match step(&self.current, UserAction::Move(direction)) {
            GameUpdate::NextState(next, change) => {
                let previous = std::mem::replace(&mut self.current, next);
                self.history.push(previous);
                Ok(change)
            }
            GameUpdate::Rejected(rejection) => Err(rejection),
        }
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.replay.clear();
                true
            }
            None => false,
        }
    }

    pub fn restart(&mut self) {
        self.current = self.initial.clone();
        self.history.clear();
        self.replay.clear();
    }

    pub fn queue_solution(&mut self, moves: &[Direction]) {
        self.replay = moves.iter().copied().collect();
    }

    pub fn is_replaying(&self) -> bool {
        !self.replay.is_empty()
    }

    /// Applies the next queued move, if any.
    pub fn next_replay_move(&mut self) -> Option<Result<GameChangeType, MoveRejection>> {
        let direction = self.replay.pop_front()?;
        Some(self.advance(direction))
    }
}
