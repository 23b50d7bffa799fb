//! The 48-card Doppelkopf deck and dealing.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::cards_types::{Card, CopyIndex, DeckMode, Kind, Suit};
use super::ranking::{create_ranking, Ranking};
use super::rules::{CARDS_PER_HAND, DECK_SIZE, PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Immutable deck for one contract mode.
#[derive(Debug, Clone)]
pub struct Deck {
    ranking: Ranking,
    cards: Vec<Card>,
    by_token: HashMap<String, Card>,
}

impl Deck {
    pub fn new(mode: DeckMode) -> Self {
        let cards = full_deck();
        let by_token = cards.iter().map(|c| (c.to_string(), *c)).collect();
        Self {
            ranking: create_ranking(mode),
            cards,
            by_token,
        }
    }

    pub fn mode(&self) -> DeckMode {
        self.ranking.mode()
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by its wire token.
    pub fn get_card(&self, encoding: &str) -> Result<Card, DomainError> {
        self.by_token.get(encoding).copied().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidCard,
                format!("Unknown card: {encoding}"),
            )
        })
    }

    pub fn get_cards<I, S>(&self, encodings: I) -> Result<Vec<Card>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        encodings
            .into_iter()
            .map(|s| self.get_card(s.as_ref()))
            .collect()
    }

    /// Shuffle all 48 cards and cut them into four hands of 12 in dealing
    /// order; chunk `i` belongs to seat `i`.
    pub fn deal_hand_cards<R: Rng + ?Sized>(&self, rng: &mut R) -> [Vec<Card>; PLAYERS] {
        let mut shuffled = self.cards.clone();
        shuffled.shuffle(rng);

        let mut hands: [Vec<Card>; PLAYERS] = Default::default();
        for (seat, chunk) in shuffled.chunks(CARDS_PER_HAND).enumerate() {
            hands[seat] = chunk.to_vec();
        }
        hands
    }

    /// Deterministic deal for a seed.
    pub fn deal_with_seed(&self, seed: u64) -> [Vec<Card>; PLAYERS] {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.deal_hand_cards(&mut rng)
    }
}

fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for kind in Kind::ALL {
        for suit in Suit::ALL {
            for copy in CopyIndex::ALL {
                deck.push(Card::new(kind, suit, copy));
            }
        }
    }
    deck
}
