//! Per-contract ranking tables. Lower rank beats higher rank.

use std::collections::HashMap;

use super::cards_types::{Card, DeckMode, Face, Kind, Suit};

/// Ranks at or above this value are plain (non-trump) cards.
pub const PLAIN_BASE: u16 = 400;
const QUEEN_BASE: u16 = 100;
const JACK_BASE: u16 = 200;
const SUIT_BASE: u16 = 300;
/// The Ten of Hearts outranks everything in suit-colored modes.
const TEN_OF_HEARTS_RANK: u16 = 1;

/// Immutable map from face to rank for one contract mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    mode: DeckMode,
    ranks: HashMap<Face, u16>,
}

impl Ranking {
    pub fn mode(&self) -> DeckMode {
        self.mode
    }

    pub fn rank_of(&self, card: &Card) -> u16 {
        self.rank_of_face(card.face())
    }

    pub fn rank_of_face(&self, face: Face) -> u16 {
        // Every face is populated by `no_color`, so the fallback is unreachable.
        self.ranks.get(&face).copied().unwrap_or(u16::MAX)
    }

    pub fn is_trump(&self, card: &Card) -> bool {
        self.rank_of(card) < PLAIN_BASE
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Face, &u16)> {
        self.ranks.iter()
    }
}

/// Build the ranking table for a contract mode.
pub fn create_ranking(mode: DeckMode) -> Ranking {
    let ranks = match mode {
        DeckMode::Normal(suit) => colored_by_suit(suit),
        DeckMode::QueensSolo => colored_by_kind(Kind::Queen),
        DeckMode::JacksSolo => colored_by_kind(Kind::Jack),
        DeckMode::FreeSolo => no_color(),
    };
    Ranking { mode, ranks }
}

fn all_faces() -> impl Iterator<Item = Face> {
    Kind::ALL
        .into_iter()
        .flat_map(|kind| Suit::ALL.into_iter().map(move |suit| Face { kind, suit }))
}

fn no_color() -> HashMap<Face, u16> {
    all_faces()
        .map(|face| {
            let index = face.kind.priority() * 4 + face.suit.priority();
            (face, PLAIN_BASE + index)
        })
        .collect()
}

fn colored_by_suit(trump_suit: Suit) -> HashMap<Face, u16> {
    let mut ranks = no_color();
    for face in all_faces() {
        let rank = match face.kind {
            Kind::Queen => QUEEN_BASE + face.suit.priority(),
            Kind::Jack => JACK_BASE + face.suit.priority(),
            _ if face.suit == trump_suit => SUIT_BASE + face.kind.priority(),
            _ => continue,
        };
        ranks.insert(face, rank);
    }
    ranks.insert(
        Face {
            kind: Kind::Ten,
            suit: Suit::Hearts,
        },
        TEN_OF_HEARTS_RANK,
    );
    ranks
}

fn colored_by_kind(trump_kind: Kind) -> HashMap<Face, u16> {
    let mut ranks = no_color();
    for suit in Suit::ALL {
        ranks.insert(
            Face {
                kind: trump_kind,
                suit,
            },
            QUEEN_BASE + suit.priority(),
        );
    }
    ranks
}
