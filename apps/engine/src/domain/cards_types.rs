//! Core card-related types: Card, Kind, Suit, DeckMode

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// Trump order for Queens and Jacks: Clubs beat Spades beat Hearts beat Diamonds.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub const fn priority(self) -> u16 {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Ace,
    Ten,
    King,
    Queen,
    Jack,
    Nine,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Ace,
        Kind::Ten,
        Kind::King,
        Kind::Queen,
        Kind::Jack,
        Kind::Nine,
    ];

    pub const fn priority(self) -> u16 {
        match self {
            Kind::Ace => 0,
            Kind::Ten => 1,
            Kind::King => 2,
            Kind::Queen => 3,
            Kind::Jack => 4,
            Kind::Nine => 5,
        }
    }

    /// Card points counted at round evaluation.
    pub const fn points(self) -> u16 {
        match self {
            Kind::Ace => 11,
            Kind::Ten => 10,
            Kind::King => 4,
            Kind::Queen => 3,
            Kind::Jack => 2,
            Kind::Nine => 0,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Kind::Ace => 'A',
            Kind::Ten => 'T',
            Kind::King => 'K',
            Kind::Queen => 'Q',
            Kind::Jack => 'J',
            Kind::Nine => '9',
        }
    }
}

/// Copy index of a card; every kind/suit pair exists twice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CopyIndex {
    First,
    Second,
}

impl CopyIndex {
    pub const ALL: [CopyIndex; 2] = [CopyIndex::First, CopyIndex::Second];

    pub const fn index(self) -> u8 {
        match self {
            CopyIndex::First => 0,
            CopyIndex::Second => 1,
        }
    }
}

/// One physical card.
///
/// `Ord` is only for stable sorting (kind/suit/copy). Trick resolution goes
/// through [`Ranking`](super::ranking::Ranking).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub kind: Kind,
    pub suit: Suit,
    pub copy: CopyIndex,
}

impl Card {
    pub const fn new(kind: Kind, suit: Suit, copy: CopyIndex) -> Self {
        Self { kind, suit, copy }
    }

    pub const fn points(&self) -> u16 {
        self.kind.points()
    }

    /// `{kind}{suit}` lookup key shared by both copies.
    pub fn face(&self) -> Face {
        Face {
            kind: self.kind,
            suit: self.suit,
        }
    }

    pub fn is(&self, kind: Kind, suit: Suit) -> bool {
        self.kind == kind && self.suit == suit
    }

    /// Queen of Clubs; holding both copies is a marriage.
    pub fn is_club_queen(&self) -> bool {
        self.is(Kind::Queen, Suit::Clubs)
    }
}

/// A kind/suit pair without copy index: the unit the ranking table is keyed by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Face {
    pub kind: Kind,
    pub suit: Suit,
}

/// Contract mode selecting the ranking table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckMode {
    /// Queens, Jacks, the given suit and the Ten of Hearts are trump.
    Normal(Suit),
    QueensSolo,
    JacksSolo,
    FreeSolo,
}

impl Default for DeckMode {
    fn default() -> Self {
        DeckMode::Normal(Suit::Diamonds)
    }
}
