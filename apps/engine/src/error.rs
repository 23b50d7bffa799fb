use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::{Action, ErrorCode};

/// Outward error type of the engine.
///
/// `InvalidAction` and `ForbiddenAction` are policy violations meant to be
/// shown to the player as-is and never retried automatically. Everything
/// else is an opaque failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid action {action}: {detail}")]
    InvalidAction {
        action: Action,
        code: ErrorCode,
        detail: String,
    },
    #[error("Forbidden action {action}: {detail}")]
    ForbiddenAction {
        action: Action,
        code: ErrorCode,
        detail: String,
    },
    #[error("Not implemented {action}: {detail}")]
    NotImplemented { action: Action, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Attach the attempted action to a domain failure.
    pub fn from_domain(action: Action, err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => Self::InvalidAction {
                action,
                code: ErrorCode::from(&kind),
                detail,
            },
            DomainError::Forbidden(kind, detail) => Self::ForbiddenAction {
                action,
                code: ErrorCode::from(&kind),
                detail,
            },
            DomainError::NotImplemented(detail) => Self::NotImplemented { action, detail },
            DomainError::Internal(kind, detail) => Self::Internal {
                detail: format!("{action} {kind:?}: {detail}"),
            },
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidAction { code, .. } => *code,
            AppError::ForbiddenAction { code, .. } => *code,
            AppError::NotImplemented { .. } => ErrorCode::NotImplemented,
            AppError::NotFound { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// The action slug for policy violations.
    pub fn action(&self) -> Option<Action> {
        match self {
            AppError::InvalidAction { action, .. }
            | AppError::ForbiddenAction { action, .. }
            | AppError::NotImplemented { action, .. } => Some(*action),
            _ => None,
        }
    }

    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::InvalidAction { .. }
                | AppError::ForbiddenAction { .. }
                | AppError::NotFound { .. }
        )
    }

    /// Text safe to show a player. Internal details stay in the logs.
    pub fn public_detail(&self) -> String {
        match self {
            AppError::InvalidAction { detail, .. }
            | AppError::ForbiddenAction { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::NotImplemented { detail, .. } => detail.clone(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Something went wrong".to_string()
            }
        }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
