use tracing::{debug, info};
use uuid::Uuid;

use super::{current_round, domain_err, Actor, GameFlowService};
use crate::domain::game::Game;
use crate::domain::player_view::RoundView;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind};
use crate::errors::Action;
use crate::repos::GameStore;

impl<S: GameStore> GameFlowService<S> {
    /// Open a table with the actor as creator and first player.
    pub async fn create_game(&self, actor: Actor) -> Result<Uuid, AppError> {
        let game = Game::new(Uuid::new_v4(), actor.user_id, self.config.max_players);
        let game_id = game.id();
        self.store.save(game).await?;
        info!(%game_id, creator = %actor.user_id, "Game created");
        Ok(game_id)
    }

    pub async fn join_game(&self, actor: Actor, game_id: Uuid) -> Result<(), AppError> {
        debug!(%game_id, user = %actor.user_id, "Joining game");
        let mut game = self.store.load(game_id).await?;
        game.join(actor.user_id)
            .map_err(|e| domain_err(game_id, 0, Action::GameJoin, e))?;
        let seated = game.players().len();
        self.store.save(game).await?;
        info!(%game_id, user = %actor.user_id, seated, "Player joined");
        Ok(())
    }

    /// Deal the next round. Only the creator may do this.
    pub async fn start_round(&self, actor: Actor, game_id: Uuid) -> Result<RoundView, AppError> {
        let mut game = self.store.load(game_id).await?;
        let number = game.rounds().len() as u32 + 1;
        debug!(%game_id, round_no = number, "Starting round");

        {
            let mut rng = self.rng.lock();
            game.start_round(actor.user_id, Uuid::new_v4(), &mut *rng)
                .map_err(|e| domain_err(game_id, number, Action::RoundCreate, e))?;
        }

        let round = current_round(&game, Action::RoundCreate)?;
        let view = RoundView::for_viewer(round, round.seat_of_player(actor.user_id));
        self.store.save(game).await?;
        info!(%game_id, round_no = number, "Round dealt; waiting for declarations");
        Ok(view)
    }

    /// The current round as the actor may see it. Seated players who sit
    /// this round out get the public view.
    pub async fn view_round(&self, actor: Actor, game_id: Uuid) -> Result<RoundView, AppError> {
        let game = self.store.load(game_id).await?;
        if !game.is_seated(actor.user_id) {
            return Err(domain_err(
                game_id,
                0,
                Action::RoundView,
                DomainError::forbidden(ForbiddenKind::NotSeated, "You are not seated at this table"),
            ));
        }
        let round = current_round(&game, Action::RoundView)?;
        Ok(RoundView::for_viewer(round, round.seat_of_player(actor.user_id)))
    }

    /// Cumulative score of every seated player.
    pub async fn scores(&self, game_id: Uuid) -> Result<Vec<(Uuid, i32)>, AppError> {
        let game = self.store.load(game_id).await?;
        let totals = game.scores();
        Ok(game
            .players()
            .iter()
            .map(|p| (*p, totals.get(p).copied().unwrap_or(0)))
            .collect())
    }
}
