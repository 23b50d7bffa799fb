//! One seated player's hand for one round: cards, auction statements, team.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::Card;
use super::state::Seat;
use super::team::{Team, TeamVisibility, Viewer};
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

/// Options a player may declare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeclarationOption {
    Healthy,
    SilentMarriage,
    Reservation,
}

/// Declaration state of a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Declaration {
    #[default]
    Nothing,
    Healthy,
    SilentMarriage,
    Reservation,
}

impl From<DeclarationOption> for Declaration {
    fn from(option: DeclarationOption) -> Self {
        match option {
            DeclarationOption::Healthy => Declaration::Healthy,
            DeclarationOption::SilentMarriage => Declaration::SilentMarriage,
            DeclarationOption::Reservation => Declaration::Reservation,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoloKind {
    Queens,
    Jacks,
    Free,
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

/// Options a reserving player may bid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiddingOption {
    Marriage,
    Solo(SoloKind),
}

/// Bidding state of a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bidding {
    #[default]
    Nothing,
    Marriage,
    Solo(SoloKind),
}

impl From<BiddingOption> for Bidding {
    fn from(option: BiddingOption) -> Self {
        match option {
            BiddingOption::Marriage => Bidding::Marriage,
            BiddingOption::Solo(kind) => Bidding::Solo(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    seat: Seat,
    player_id: Uuid,
    cards: Vec<Card>,
    played: Vec<Card>,
    declared: Declaration,
    bidding: Bidding,
    has_marriage: bool,
    team: TeamVisibility,
    is_married: bool,
    plays_solo: bool,
}

impl Hand {
    /// Create a freshly dealt hand. Marriage is fixed at deal time.
    pub fn new(seat: Seat, player_id: Uuid, mut cards: Vec<Card>) -> Self {
        cards.sort();
        let has_marriage = cards.iter().filter(|c| c.is_club_queen()).count() == 2;
        Self {
            seat,
            player_id,
            cards,
            played: Vec::new(),
            declared: Declaration::Nothing,
            bidding: Bidding::Nothing,
            has_marriage,
            team: TeamVisibility::default(),
            is_married: false,
            plays_solo: false,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn player_id(&self) -> Uuid {
        self.player_id
    }

    pub fn is_owned_by(&self, player_id: Uuid) -> bool {
        self.player_id == player_id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn played(&self) -> &[Card] {
        &self.played
    }

    pub fn declared(&self) -> Declaration {
        self.declared
    }

    pub fn bidding(&self) -> Bidding {
        self.bidding
    }

    pub fn has_marriage(&self) -> bool {
        self.has_marriage
    }

    pub fn is_married(&self) -> bool {
        self.is_married
    }

    pub fn plays_solo(&self) -> bool {
        self.plays_solo
    }

    /// Holds at least one Queen of Clubs.
    pub fn holds_club_queen(&self) -> bool {
        self.cards
            .iter()
            .chain(self.played.iter())
            .any(|c| c.is_club_queen())
    }

    pub fn team(&self) -> &TeamVisibility {
        &self.team
    }

    pub fn internal_team(&self) -> Team {
        self.team.visible_team_for(Viewer::Engine)
    }

    pub fn player_team(&self) -> Team {
        self.team.visible_team_for(Viewer::Owner)
    }

    pub fn public_team(&self) -> Team {
        self.team.visible_team_for(Viewer::Public)
    }

    /// Declared a reservation and has not bid yet.
    pub fn is_reservation_pending(&self) -> bool {
        self.declared == Declaration::Reservation && self.bidding == Bidding::Nothing
    }

    pub fn can_declare(&self, option: DeclarationOption) -> Result<(), DomainError> {
        if self.declared != Declaration::Nothing {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDeclared,
                "Hand has already declared",
            ));
        }
        match option {
            DeclarationOption::Healthy if self.has_marriage => Err(DomainError::validation(
                ValidationKind::DeclarationNotAllowed,
                "A hand holding both Queens of Clubs cannot declare healthy",
            )),
            DeclarationOption::SilentMarriage if !self.has_marriage => {
                Err(DomainError::validation(
                    ValidationKind::DeclarationNotAllowed,
                    "Silent marriage requires both Queens of Clubs",
                ))
            }
            DeclarationOption::Healthy
            | DeclarationOption::SilentMarriage
            | DeclarationOption::Reservation => Ok(()),
        }
    }

    pub fn declare(&mut self, option: DeclarationOption) -> Result<(), DomainError> {
        self.can_declare(option)?;
        self.declared = option.into();
        Ok(())
    }

    pub fn can_bid(&self, option: BiddingOption) -> Result<(), DomainError> {
        if self.bidding != Bidding::Nothing {
            return Err(DomainError::validation(
                ValidationKind::AlreadyBid,
                "Hand has already bid",
            ));
        }
        if self.declared != Declaration::Reservation {
            return Err(DomainError::validation(
                ValidationKind::BidWithoutReservation,
                "Only a hand that declared a reservation may bid",
            ));
        }
        match option {
            BiddingOption::Marriage if !self.has_marriage => Err(DomainError::validation(
                ValidationKind::BiddingNotAllowed,
                "Marriage requires both Queens of Clubs",
            )),
            BiddingOption::Marriage | BiddingOption::Solo(_) => Ok(()),
        }
    }

    pub fn bid(&mut self, option: BiddingOption) -> Result<(), DomainError> {
        self.can_bid(option)?;
        self.bidding = option.into();
        Ok(())
    }

    /// Set the team for the engine and the owner; others keep seeing NA.
    pub fn assign_private_team(&mut self, team: Team) {
        self.team.assign_private(team);
    }

    pub fn assign_public_team(&mut self, team: Team) {
        self.team.assign_public(team);
    }

    pub fn reveal_team(&mut self) {
        self.team.reveal();
    }

    pub fn marry(&mut self) {
        self.is_married = true;
        self.plays_solo = false;
    }

    pub fn force_solo(&mut self) {
        self.is_married = false;
        self.plays_solo = true;
    }

    pub fn holds(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Move a card from the hand to the played pile.
    pub fn take_card(&mut self, card: &Card) -> Result<Card, DomainError> {
        let pos = self.cards.iter().position(|c| c == card).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card {card} is not in hand"),
            )
        })?;
        let card = self.cards.remove(pos);
        self.played.push(card);
        Ok(card)
    }

    /// Every card this hand was dealt.
    pub fn dealt_cards(&self) -> Vec<Card> {
        let mut all: Vec<Card> = self.cards.iter().chain(self.played.iter()).copied().collect();
        all.sort();
        all
    }

    pub(crate) fn require_card_count(&self, expected: usize) -> Result<(), DomainError> {
        let total = self.cards.len() + self.played.len();
        if total != expected {
            return Err(DomainError::internal(
                InternalKind::InvariantViolated,
                format!("hand at seat {} holds {total} cards", self.seat),
            ));
        }
        Ok(())
    }
}
