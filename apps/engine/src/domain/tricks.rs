//! One exchange of four cards.
//!
//! The leading-card index, score and state are caches over the card list.
//! They are rebuilt by [`Trick::recompute`] at the single mutation point.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::hand::Hand;
use super::ranking::Ranking;
use super::rules::PLAYERS;
use super::state::{seat_of_card, Seat};
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

/// What the first card asks of the following ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Demand {
    Trump,
    Suit(Suit),
}

impl Demand {
    pub fn of(card: &Card, ranking: &Ranking) -> Self {
        if ranking.is_trump(card) {
            Demand::Trump
        } else {
            Demand::Suit(card.suit)
        }
    }

    pub fn is_served_by(self, card: &Card, ranking: &Ranking) -> bool {
        match self {
            Demand::Trump => ranking.is_trump(card),
            Demand::Suit(suit) => !ranking.is_trump(card) && card.suit == suit,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrickState {
    #[default]
    Opened,
    FirstCardPlayed,
    SecondCardPlayed,
    ThirdCardPlayed,
    FourthCardPlayed,
}

impl TrickState {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => TrickState::Opened,
            1 => TrickState::FirstCardPlayed,
            2 => TrickState::SecondCardPlayed,
            3 => TrickState::ThirdCardPlayed,
            _ => TrickState::FourthCardPlayed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    number: u8,
    open_index: Seat,
    cards: Vec<Card>,
    demand: Option<Demand>,
    leading_card_index: Option<usize>,
    score: u16,
    state: TrickState,
    winner: Option<Seat>,
}

impl Trick {
    pub fn new(number: u8, open_index: Seat) -> Self {
        Self {
            number,
            open_index,
            cards: Vec::with_capacity(PLAYERS),
            demand: None,
            leading_card_index: None,
            score: 0,
            state: TrickState::Opened,
            winner: None,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn open_index(&self) -> Seat {
        self.open_index
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn demand(&self) -> Option<Demand> {
        self.demand
    }

    pub fn leading_card_index(&self) -> Option<usize> {
        self.leading_card_index
    }

    pub fn leading_card(&self) -> Option<&Card> {
        self.leading_card_index.and_then(|i| self.cards.get(i))
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn state(&self) -> TrickState {
        self.state
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn is_complete(&self) -> bool {
        self.state == TrickState::FourthCardPlayed
    }

    /// Seat due to play the next card, if the trick is not full.
    pub fn next_seat(&self) -> Option<Seat> {
        if self.is_complete() {
            return None;
        }
        Some(seat_of_card(self.open_index, self.cards.len()))
    }

    /// Seat that played the card at `index`.
    pub fn seat_of(&self, index: usize) -> Seat {
        seat_of_card(self.open_index, index)
    }

    /// Append a card. Turn order and demand are the round's concern.
    pub fn play_card(&mut self, card: Card, ranking: &Ranking) -> Result<(), DomainError> {
        if self.cards.len() >= PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::TrickFull,
                format!("Trick {} already holds four cards", self.number),
            ));
        }
        self.cards.push(card);
        self.recompute(ranking);
        Ok(())
    }

    /// Rebuild every cached field from the card list.
    pub fn recompute(&mut self, ranking: &Ranking) {
        self.demand = self.cards.first().map(|c| Demand::of(c, ranking));
        self.leading_card_index = leading_card_index(&self.cards, ranking);
        self.score = trick_score(&self.cards);
        self.state = TrickState::for_count(self.cards.len());
    }

    pub fn can_evaluate(&self) -> Result<(), DomainError> {
        if self.winner.is_some() {
            return Err(DomainError::validation(
                ValidationKind::TrickAlreadyWon,
                format!("Trick {} already has a winner", self.number),
            ));
        }
        if !self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::TrickIncomplete,
                format!("Trick {} is not complete", self.number),
            ));
        }
        Ok(())
    }

    /// Determine and record the winning hand.
    pub fn evaluate(&mut self, hands: &[Hand]) -> Result<Seat, DomainError> {
        self.can_evaluate()?;
        let leading = self.leading_card_index.ok_or_else(|| {
            DomainError::internal(
                InternalKind::InvariantViolated,
                format!("complete trick {} has no leading card", self.number),
            )
        })?;
        let winner_seat = self.seat_of(leading);
        let hand = hands
            .iter()
            .find(|h| h.seat() == winner_seat)
            .ok_or_else(|| {
                DomainError::internal(
                    InternalKind::HandNotFound,
                    format!("no hand at winner seat {winner_seat}"),
                )
            })?;
        self.winner = Some(hand.seat());
        Ok(winner_seat)
    }
}

/// Index of the strongest card: only cards serving the demand or trumps
/// compete, the lowest rank wins, and the earlier card wins a tie.
pub fn leading_card_index(cards: &[Card], ranking: &Ranking) -> Option<usize> {
    let demand = Demand::of(cards.first()?, ranking);
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| demand.is_served_by(c, ranking) || ranking.is_trump(c))
        .min_by_key(|(i, c)| (ranking.rank_of(c), *i))
        .map(|(i, _)| i)
}

pub fn trick_score(cards: &[Card]) -> u16 {
    cards.iter().map(|c| c.points()).sum()
}
