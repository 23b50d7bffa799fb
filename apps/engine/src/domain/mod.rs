//! Domain layer: pure, synchronous Doppelkopf rule logic.

pub mod calls;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod hand;
pub mod player_view;
pub mod ranking;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod team;
pub mod tricks;

#[cfg(test)]
mod test_round_helpers;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use calls::{Call, CallType};
pub use cards_types::{Card, CopyIndex, DeckMode, Face, Kind, Suit};
pub use deck::Deck;
pub use game::Game;
pub use hand::{Bidding, BiddingOption, Declaration, DeclarationOption, Hand, SoloKind};
pub use player_view::{RoundView, SeatView};
pub use ranking::{create_ranking, Ranking};
pub use round::Round;
pub use scoring::TeamResult;
pub use state::{ContractState, RoundState, Seat};
pub use team::{RevealScope, Team, TeamVisibility, Viewer};
pub use tricks::{Demand, Trick, TrickState};
