//! Persistence seam for game aggregates.

pub mod games;
pub mod memory;

pub use games::GameStore;
pub use memory::InMemoryGameStore;
