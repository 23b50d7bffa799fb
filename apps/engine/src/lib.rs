#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use error::AppError;
pub use errors::{Action, DomainError, ErrorCode};
pub use repos::{GameStore, InMemoryGameStore};
pub use services::{Actor, GameFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
