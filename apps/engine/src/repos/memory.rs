use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use super::games::GameStore;
use crate::domain::game::Game;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Process-local store for tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: Mutex<HashMap<Uuid, Game>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn load(&self, game_id: Uuid) -> Result<Game, AppError> {
        self.games.lock().get(&game_id).cloned().ok_or_else(|| {
            AppError::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
        })
    }

    async fn save(&self, game: Game) -> Result<(), AppError> {
        self.games.lock().insert(game.id(), game);
        Ok(())
    }
}
