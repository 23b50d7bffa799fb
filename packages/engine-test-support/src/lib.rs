//! Engine test support utilities
//!
//! Shared helpers for unit and integration tests of the rule engine.

pub mod test_logging;
