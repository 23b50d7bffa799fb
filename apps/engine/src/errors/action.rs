//! Machine-readable slugs naming the action a player attempted.
//!
//! Slugs are `Resource:Verb` and appear verbatim in user-facing errors.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GameCreate,
    GameJoin,
    RoundCreate,
    DeclarationCreate,
    DeclarationEvaluate,
    BiddingCreate,
    BiddingEvaluate,
    CallCreate,
    CardPlay,
    TrickEvaluate,
    MarriageResolve,
    RoundEvaluate,
    RoundView,
}

impl Action {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameCreate => "Game:Create",
            Self::GameJoin => "Game:Join",
            Self::RoundCreate => "Round:Create",
            Self::DeclarationCreate => "Declaration:Create",
            Self::DeclarationEvaluate => "Declaration:Evaluate",
            Self::BiddingCreate => "Bidding:Create",
            Self::BiddingEvaluate => "Bidding:Evaluate",
            Self::CallCreate => "Call:Create",
            Self::CardPlay => "Card:Play",
            Self::TrickEvaluate => "Trick:Evaluate",
            Self::MarriageResolve => "Marriage:Resolve",
            Self::RoundEvaluate => "Round:Evaluate",
            Self::RoundView => "Round:View",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
