//! Error handling for the Doppelkopf rule engine.

pub mod action;
pub mod domain;
pub mod error_code;

pub use action::Action;
pub use domain::DomainError;
pub use error_code::ErrorCode;
