//! Error codes surfaced by the engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use super::domain::{ForbiddenKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Auction
    AlreadyDeclared,
    DeclarationNotAllowed,
    AlreadyBid,
    BidWithoutReservation,
    BiddingNotAllowed,
    DeclarationsPending,
    BidsPending,

    // Play
    PhaseMismatch,
    OutOfTurn,
    CardNotInHand,
    MustServeDemand,
    TrickIncomplete,
    TrickAlreadyWon,
    TrickFull,
    TricksPending,
    MarriageNotPending,

    // Calls
    CallTooLate,
    CallNotAllowed,
    TeamUnknown,

    // Cards
    ParseCard,
    InvalidCard,

    // Seating
    TableFull,
    NotEnoughPlayers,
    AlreadySeated,
    RoundInProgress,

    // Ownership
    NotHandOwner,
    NotCreator,
    NotSeated,

    /// Generic rule violation
    ValidationError,
    GameNotFound,
    NotImplemented,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyDeclared => "ALREADY_DECLARED",
            Self::DeclarationNotAllowed => "DECLARATION_NOT_ALLOWED",
            Self::AlreadyBid => "ALREADY_BID",
            Self::BidWithoutReservation => "BID_WITHOUT_RESERVATION",
            Self::BiddingNotAllowed => "BIDDING_NOT_ALLOWED",
            Self::DeclarationsPending => "DECLARATIONS_PENDING",
            Self::BidsPending => "BIDS_PENDING",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustServeDemand => "MUST_SERVE_DEMAND",
            Self::TrickIncomplete => "TRICK_INCOMPLETE",
            Self::TrickAlreadyWon => "TRICK_ALREADY_WON",
            Self::TrickFull => "TRICK_FULL",
            Self::TricksPending => "TRICKS_PENDING",
            Self::MarriageNotPending => "MARRIAGE_NOT_PENDING",
            Self::CallTooLate => "CALL_TOO_LATE",
            Self::CallNotAllowed => "CALL_NOT_ALLOWED",
            Self::TeamUnknown => "TEAM_UNKNOWN",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidCard => "INVALID_CARD",
            Self::TableFull => "TABLE_FULL",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::AlreadySeated => "ALREADY_SEATED",
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
            Self::NotHandOwner => "NOT_HAND_OWNER",
            Self::NotCreator => "NOT_CREATOR",
            Self::NotSeated => "NOT_SEATED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::AlreadyDeclared => Self::AlreadyDeclared,
            ValidationKind::DeclarationNotAllowed => Self::DeclarationNotAllowed,
            ValidationKind::AlreadyBid => Self::AlreadyBid,
            ValidationKind::BidWithoutReservation => Self::BidWithoutReservation,
            ValidationKind::BiddingNotAllowed => Self::BiddingNotAllowed,
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::DeclarationsPending => Self::DeclarationsPending,
            ValidationKind::BidsPending => Self::BidsPending,
            ValidationKind::OutOfTurn => Self::OutOfTurn,
            ValidationKind::CardNotInHand => Self::CardNotInHand,
            ValidationKind::MustServeDemand => Self::MustServeDemand,
            ValidationKind::TrickIncomplete => Self::TrickIncomplete,
            ValidationKind::TrickAlreadyWon => Self::TrickAlreadyWon,
            ValidationKind::TrickFull => Self::TrickFull,
            ValidationKind::TricksPending => Self::TricksPending,
            ValidationKind::MarriageNotPending => Self::MarriageNotPending,
            ValidationKind::CallTooLate => Self::CallTooLate,
            ValidationKind::CallNotAllowed => Self::CallNotAllowed,
            ValidationKind::TeamUnknown => Self::TeamUnknown,
            ValidationKind::ParseCard => Self::ParseCard,
            ValidationKind::InvalidCard => Self::InvalidCard,
            ValidationKind::TableFull => Self::TableFull,
            ValidationKind::NotEnoughPlayers => Self::NotEnoughPlayers,
            ValidationKind::AlreadySeated => Self::AlreadySeated,
            ValidationKind::RoundInProgress => Self::RoundInProgress,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl From<&ForbiddenKind> for ErrorCode {
    fn from(kind: &ForbiddenKind) -> Self {
        match kind {
            ForbiddenKind::NotHandOwner => Self::NotHandOwner,
            ForbiddenKind::NotCreator => Self::NotCreator,
            ForbiddenKind::NotSeated => Self::NotSeated,
        }
    }
}
