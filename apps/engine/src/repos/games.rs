use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::error::AppError;

/// Loads and stores whole game aggregates by id.
///
/// The flow service saves only after an action and its follow-ups succeeded,
/// so an implementation never sees a half-applied transition.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Fails with `AppError::NotFound` for an unknown id.
    async fn load(&self, game_id: Uuid) -> Result<Game, AppError>;

    async fn save(&self, game: Game) -> Result<(), AppError>;
}
