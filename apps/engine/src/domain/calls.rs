//! Calls: early scoring commitments with a deadline and a point value.

use serde::{Deserialize, Serialize};

use super::state::Seat;
use super::team::Team;

/// Ordered chain of calls. A later call implies every earlier one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallType {
    /// Announces the team ("Re" / "Kontra").
    Under120,
    Under90,
    Under60,
    Under30,
    NoTricks,
}

impl CallType {
    pub const ALL: [CallType; 5] = [
        CallType::Under120,
        CallType::Under90,
        CallType::Under60,
        CallType::Under30,
        CallType::NoTricks,
    ];

    /// Position in the chain, starting at 0.
    pub const fn order(self) -> u8 {
        match self {
            CallType::Under120 => 0,
            CallType::Under90 => 1,
            CallType::Under60 => 2,
            CallType::Under30 => 3,
            CallType::NoTricks => 4,
        }
    }

    /// Most cards that may already be on the table when the call is made.
    pub const fn max_cards_played(self) -> usize {
        match self {
            CallType::Under120 => 4,
            CallType::Under90 => 8,
            CallType::Under60 => 12,
            CallType::Under30 => 16,
            CallType::NoTricks => 20,
        }
    }

    pub const fn points(self) -> u16 {
        match self {
            CallType::Under120 => 2,
            CallType::Under90 | CallType::Under60 | CallType::Under30 | CallType::NoTricks => 1,
        }
    }

    pub const fn is_reducing(self) -> bool {
        !matches!(self, CallType::Under120)
    }

    /// This call and every call it implies, weakest first.
    pub fn implied(self) -> impl Iterator<Item = CallType> {
        CallType::ALL.into_iter().filter(move |c| *c <= self)
    }
}

/// A call made during a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub seat: Seat,
    pub team: Team,
    pub call_type: CallType,
    /// Cards on the table when the call was made.
    pub cards_played: usize,
}

/// Strongest call a team has made.
pub fn highest_call(calls: &[Call], team: Team) -> Option<CallType> {
    calls
        .iter()
        .filter(|c| c.team == team)
        .map(|c| c.call_type)
        .max()
}
