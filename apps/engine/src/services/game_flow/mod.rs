//! Game flow service: bridges the pure domain with the game store.
//!
//! Each public operation loads the aggregate, checks who is acting, applies
//! one domain operation, drives the automatic follow-ups and saves. Nothing
//! is saved when any step fails.

mod orchestration;
mod player_actions;
mod round_lifecycle;

use parking_lot::Mutex;
use rand_chacha::ChaCha20Rng;
use tracing::{error, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::game::Game;
use crate::domain::round::Round;
use crate::domain::state::Seat;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};
use crate::errors::Action;
use crate::repos::GameStore;

/// The authenticated user issuing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
}

impl Actor {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

pub struct GameFlowService<S: GameStore> {
    store: S,
    config: EngineConfig,
    rng: Mutex<ChaCha20Rng>,
}

impl<S: GameStore> GameFlowService<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        let rng = Mutex::new(config.dealing_rng());
        Self { store, config, rng }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Convert a domain failure, logging it by severity.
pub(super) fn domain_err(game_id: Uuid, round_no: u32, action: Action, err: DomainError) -> AppError {
    if err.is_policy_violation() {
        warn!(%game_id, round_no, action = %action, error = %err, "Rejected action");
    } else if matches!(err, DomainError::Internal(..)) {
        error!(%game_id, round_no, action = %action, error = %err, "Round consistency failure");
    }
    AppError::from_domain(action, err)
}

/// The current round, or a phase error if none was dealt yet.
pub(super) fn current_round(game: &Game, action: Action) -> Result<&Round, AppError> {
    game.current_round().ok_or_else(|| no_round(game.id(), action))
}

pub(super) fn current_round_mut(game: &mut Game, action: Action) -> Result<&mut Round, AppError> {
    let game_id = game.id();
    game.current_round_mut().ok_or_else(|| no_round(game_id, action))
}

fn no_round(game_id: Uuid, action: Action) -> AppError {
    domain_err(
        game_id,
        0,
        action,
        DomainError::validation(ValidationKind::PhaseMismatch, "No round has been dealt"),
    )
}

/// Seat of the acting user in `round`; only hand owners may act on it.
pub(super) fn owned_seat(
    game_id: Uuid,
    round: &Round,
    actor: Actor,
    action: Action,
) -> Result<Seat, AppError> {
    round.seat_of_player(actor.user_id).ok_or_else(|| {
        domain_err(
            game_id,
            round.number(),
            action,
            DomainError::forbidden(
                ForbiddenKind::NotHandOwner,
                "You do not hold a hand in this round",
            ),
        )
    })
}
