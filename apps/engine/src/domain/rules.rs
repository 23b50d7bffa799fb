//! Table constants.

pub const PLAYERS: usize = 4;
pub const MIN_SEATED: usize = 4;
pub const MAX_SEATED: usize = 8;
pub const DECK_SIZE: usize = 48;
pub const CARDS_PER_HAND: usize = 12;
pub const TRICKS_PER_ROUND: u8 = 12;
pub const TOTAL_CARD_POINTS: u16 = 240;

/// Tricks during which a marriage holder may win without being forced alone.
pub const MARRIAGE_GRACE_TRICKS: u8 = 2;

/// A trick worth at least this many points scores a Doppelkopf.
pub const DOPPELKOPF_POINTS: u16 = 40;
