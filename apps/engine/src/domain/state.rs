use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, InternalKind};

/// Ordinal seat within a round, 0..=3, counted clockwise from the first
/// hand after the dealer.
pub type Seat = u8;

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundState {
    /// Every hand must declare.
    #[default]
    WaitingForDeclarations,
    /// Reserving hands must bid.
    WaitingForBids,
    /// Cards are played trick by trick.
    PlayingTricks,
    /// Results computed; the round is immutable.
    Evaluated,
}

/// Rule-set governing the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractState {
    #[default]
    Undecided,
    Normal,
    SilentMarriage,
    Solo,
    MarriageUnresolved,
    MarriageResolved,
    MarriageSolo,
}

impl ContractState {
    /// One player against three.
    pub fn is_solo(self) -> bool {
        matches!(
            self,
            ContractState::Solo | ContractState::SilentMarriage | ContractState::MarriageSolo
        )
    }
}

/// Seat that played the card at `card_index` of a trick.
#[inline]
pub fn seat_of_card(open_index: Seat, card_index: usize) -> Seat {
    ((open_index as usize + card_index) % PLAYERS) as Seat
}

pub fn require_seat(seat: Seat, ctx: &'static str) -> Result<usize, DomainError> {
    let idx = seat as usize;
    if idx >= PLAYERS {
        return Err(DomainError::internal(
            InternalKind::HandNotFound,
            format!("Invariant violated: no hand at seat {seat} ({ctx})"),
        ));
    }
    Ok(idx)
}
