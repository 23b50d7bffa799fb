use tracing::{debug, info};
use uuid::Uuid;

use super::domain_err;
use crate::domain::round::Round;
use crate::domain::state::{ContractState, RoundState};
use crate::error::AppError;
use crate::errors::Action;

/// Apply every transition that needs no player input: auction evaluation,
/// trick evaluation, marriage resolution and round evaluation. Stops when
/// the round waits for a player again.
pub(super) fn process_round_state(game_id: Uuid, round: &mut Round) -> Result<(), AppError> {
    let round_no = round.number();
    loop {
        match round.state() {
            RoundState::WaitingForDeclarations => {
                if round.can_evaluate_declarations().is_err() {
                    return Ok(());
                }
                round
                    .evaluate_declarations()
                    .map_err(|e| domain_err(game_id, round_no, Action::DeclarationEvaluate, e))?;
                info!(
                    %game_id,
                    round_no,
                    contract = ?round.contract(),
                    state = ?round.state(),
                    "Declarations evaluated"
                );
            }
            RoundState::WaitingForBids => {
                if round.can_evaluate_bids().is_err() {
                    return Ok(());
                }
                round
                    .evaluate_bids()
                    .map_err(|e| domain_err(game_id, round_no, Action::BiddingEvaluate, e))?;
                info!(%game_id, round_no, contract = ?round.contract(), "Bids evaluated");
            }
            RoundState::PlayingTricks => {
                if round.can_evaluate_trick().is_ok() {
                    let winner = round
                        .evaluate_trick()
                        .map_err(|e| domain_err(game_id, round_no, Action::TrickEvaluate, e))?;
                    debug!(%game_id, round_no, trick = round.tricks().len(), winner, "Trick won");
                    resolve_marriage(game_id, round)?;
                    continue;
                }
                if round.can_evaluate_round().is_err() {
                    return Ok(());
                }
                round
                    .evaluate_round()
                    .map_err(|e| domain_err(game_id, round_no, Action::RoundEvaluate, e))?;
                info!(
                    %game_id,
                    round_no,
                    settlement = ?round.settlement(),
                    "Round evaluated"
                );
                return Ok(());
            }
            RoundState::Evaluated => return Ok(()),
        }
    }
}

fn resolve_marriage(game_id: Uuid, round: &mut Round) -> Result<(), AppError> {
    if round.contract() != ContractState::MarriageUnresolved {
        return Ok(());
    }
    let round_no = round.number();
    round
        .resolve_marriage()
        .map_err(|e| domain_err(game_id, round_no, Action::MarriageResolve, e))?;
    if round.contract() != ContractState::MarriageUnresolved {
        info!(
            %game_id,
            round_no,
            contract = ?round.contract(),
            trick = ?round.marriage_resolved_at(),
            "Marriage resolved"
        );
    }
    Ok(())
}
