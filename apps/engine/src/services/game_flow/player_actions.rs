use tracing::debug;
use uuid::Uuid;

use super::orchestration::process_round_state;
use super::{current_round_mut, domain_err, owned_seat, Actor, GameFlowService};
use crate::domain::calls::CallType;
use crate::domain::cards_types::Card;
use crate::domain::hand::{BiddingOption, DeclarationOption};
use crate::domain::player_view::RoundView;
use crate::domain::round::Round;
use crate::domain::state::Seat;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::Action;
use crate::repos::GameStore;

impl<S: GameStore> GameFlowService<S> {
    pub async fn declare(
        &self,
        actor: Actor,
        game_id: Uuid,
        option: DeclarationOption,
    ) -> Result<RoundView, AppError> {
        self.act(actor, game_id, Action::DeclarationCreate, |round, seat| {
            round.declare(seat, option)
        })
        .await
    }

    pub async fn bid(
        &self,
        actor: Actor,
        game_id: Uuid,
        option: BiddingOption,
    ) -> Result<RoundView, AppError> {
        self.act(actor, game_id, Action::BiddingCreate, |round, seat| {
            round.bid(seat, option)
        })
        .await
    }

    pub async fn place_call(
        &self,
        actor: Actor,
        game_id: Uuid,
        call_type: CallType,
    ) -> Result<RoundView, AppError> {
        self.act(actor, game_id, Action::CallCreate, |round, seat| {
            round.place_call(seat, call_type).map(|_| ())
        })
        .await
    }

    pub async fn play_card(
        &self,
        actor: Actor,
        game_id: Uuid,
        card: Card,
    ) -> Result<RoundView, AppError> {
        self.act(actor, game_id, Action::CardPlay, |round, seat| {
            round.play_card(seat, card).map(|_| ())
        })
        .await
    }

    /// Load, check ownership, apply `op` for the actor's seat, run the
    /// follow-ups and save. Returns the actor's view of the result.
    async fn act<F>(
        &self,
        actor: Actor,
        game_id: Uuid,
        action: Action,
        op: F,
    ) -> Result<RoundView, AppError>
    where
        F: FnOnce(&mut Round, Seat) -> Result<(), DomainError> + Send,
    {
        let mut game = self.store.load(game_id).await?;
        let round = current_round_mut(&mut game, action)?;
        let round_no = round.number();
        let seat = owned_seat(game_id, round, actor, action)?;
        debug!(%game_id, round_no, seat, action = %action, "Applying player action");

        op(round, seat).map_err(|e| domain_err(game_id, round_no, action, e))?;
        process_round_state(game_id, round)?;

        let view = RoundView::for_viewer(round, Some(seat));
        self.store.save(game).await?;
        Ok(view)
    }
}
