//! Domain-level error type used by the pure rule layer.
//!
//! This error type is transport- and storage-agnostic. Services attach the
//! attempted [`Action`](super::Action) and convert into
//! [`AppError`](crate::error::AppError).

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule violations a player can trigger by acting at the wrong time or
/// with the wrong option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    AlreadyDeclared,
    DeclarationNotAllowed,
    AlreadyBid,
    BidWithoutReservation,
    BiddingNotAllowed,
    PhaseMismatch,
    DeclarationsPending,
    BidsPending,
    OutOfTurn,
    CardNotInHand,
    MustServeDemand,
    TrickIncomplete,
    TrickAlreadyWon,
    TrickFull,
    TricksPending,
    MarriageNotPending,
    CallTooLate,
    CallNotAllowed,
    TeamUnknown,
    ParseCard,
    InvalidCard,
    TableFull,
    NotEnoughPlayers,
    AlreadySeated,
    RoundInProgress,
    Other(String),
}

/// Actions attempted on something the acting user does not own or lacks
/// the role for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForbiddenKind {
    NotHandOwner,
    NotCreator,
    NotSeated,
}

/// Internal consistency failures. These indicate a bug, never a user error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InternalKind {
    HandNotFound,
    InvariantViolated,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rule violation by the acting player
    Validation(ValidationKind, String),
    /// Ownership or role violation
    Forbidden(ForbiddenKind, String),
    /// Rule branch the engine does not model
    NotImplemented(String),
    /// Inconsistent aggregate state
    Internal(InternalKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Forbidden(kind, d) => write!(f, "forbidden {kind:?}: {d}"),
            DomainError::NotImplemented(d) => write!(f, "not implemented: {d}"),
            DomainError::Internal(kind, d) => write!(f, "internal {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn forbidden(kind: ForbiddenKind, detail: impl Into<String>) -> Self {
        Self::Forbidden(kind, detail.into())
    }

    pub fn not_implemented(detail: impl Into<String>) -> Self {
        Self::NotImplemented(detail.into())
    }

    pub fn internal(kind: InternalKind, detail: impl Into<String>) -> Self {
        Self::Internal(kind, detail.into())
    }

    /// True for failures a player caused and can correct.
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::Validation(..) | Self::Forbidden(..))
    }
}
