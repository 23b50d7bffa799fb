//! Round orchestration: auction, marriage resolution, trick play, calls and
//! evaluation.
//!
//! Every mutating operation has a side-effect-free `can_*` twin. The mutator
//! runs the check first and only then touches state, so a rejected action
//! never leaves a partial transition behind.

use rand::Rng;
use uuid::Uuid;

use super::calls::{highest_call, Call, CallType};
use super::cards_types::{Card, DeckMode};
use super::deck::Deck;
use super::hand::{Bidding, BiddingOption, Declaration, DeclarationOption, Hand};
use super::rules::{CARDS_PER_HAND, MARRIAGE_GRACE_TRICKS, PLAYERS, TRICKS_PER_ROUND};
use super::scoring::{compute_results, game_value, ScoringInput, TeamResult};
use super::state::{require_seat, ContractState, RoundState, Seat};
use super::team::Team;
use super::tricks::Trick;
use crate::errors::domain::{DomainError, InternalKind, ValidationKind};

#[derive(Debug, Clone)]
pub struct Round {
    id: Uuid,
    number: u32,
    state: RoundState,
    contract: ContractState,
    deck: Deck,
    hands: Vec<Hand>,
    tricks: Vec<Trick>,
    calls: Vec<Call>,
    results: Vec<TeamResult>,
    /// Trick whose completion settled the marriage.
    marriage_resolved_at: Option<u8>,
    /// Last trick the marriage check ran for.
    marriage_checked_through: u8,
}

impl Round {
    /// Deal a fresh round. `players[i]` sits at ordinal seat `i`.
    pub fn deal<R: Rng + ?Sized>(
        id: Uuid,
        number: u32,
        players: [Uuid; PLAYERS],
        rng: &mut R,
    ) -> Self {
        let deck = Deck::new(DeckMode::default());
        let dealt = deck.deal_hand_cards(rng);
        let hands = players
            .into_iter()
            .zip(dealt)
            .enumerate()
            .map(|(seat, (player, cards))| Hand::new(seat as Seat, player, cards))
            .collect();
        Self::from_parts(id, number, deck, hands)
    }

    /// Build a round from known hands, e.g. when replaying a stored deal.
    pub fn with_hands(
        id: Uuid,
        number: u32,
        hands: [(Uuid, Vec<Card>); PLAYERS],
    ) -> Result<Self, DomainError> {
        let deck = Deck::new(DeckMode::default());
        let hands: Vec<Hand> = hands
            .into_iter()
            .enumerate()
            .map(|(seat, (player, cards))| Hand::new(seat as Seat, player, cards))
            .collect();
        for hand in &hands {
            hand.require_card_count(CARDS_PER_HAND)?;
        }
        Ok(Self::from_parts(id, number, deck, hands))
    }

    fn from_parts(id: Uuid, number: u32, deck: Deck, hands: Vec<Hand>) -> Self {
        Self {
            id,
            number,
            state: RoundState::WaitingForDeclarations,
            contract: ContractState::Undecided,
            deck,
            hands,
            tricks: Vec::new(),
            calls: Vec::new(),
            results: Vec::new(),
            marriage_resolved_at: None,
            marriage_checked_through: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn contract(&self) -> ContractState {
        self.contract
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mode(&self) -> DeckMode {
        self.deck.mode()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn results(&self) -> &[TeamResult] {
        &self.results
    }

    pub fn marriage_resolved_at(&self) -> Option<u8> {
        self.marriage_resolved_at
    }

    pub fn hand(&self, seat: Seat) -> Result<&Hand, DomainError> {
        let idx = require_seat(seat, "hand")?;
        self.hands.get(idx).ok_or_else(|| missing_hand(seat))
    }

    fn hand_mut(&mut self, seat: Seat) -> Result<&mut Hand, DomainError> {
        let idx = require_seat(seat, "hand_mut")?;
        self.hands.get_mut(idx).ok_or_else(|| missing_hand(seat))
    }

    pub fn seat_of_player(&self, player_id: Uuid) -> Option<Seat> {
        self.hands
            .iter()
            .find(|h| h.is_owned_by(player_id))
            .map(|h| h.seat())
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    /// Cards on the table across all tricks.
    pub fn cards_played(&self) -> usize {
        self.tricks.iter().map(|t| t.cards().len()).sum()
    }

    fn require_state(&self, expected: RoundState, what: &str) -> Result<(), DomainError> {
        if self.state != expected {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot {what} while round is {:?}", self.state),
            ));
        }
        Ok(())
    }

    // ---- declarations ----

    pub fn can_declare(&self, seat: Seat, option: DeclarationOption) -> Result<(), DomainError> {
        self.require_state(RoundState::WaitingForDeclarations, "declare")?;
        self.hand(seat)?.can_declare(option)
    }

    pub fn declare(&mut self, seat: Seat, option: DeclarationOption) -> Result<(), DomainError> {
        self.can_declare(seat, option)?;
        self.hand_mut(seat)?.declare(option)
    }

    pub fn can_evaluate_declarations(&self) -> Result<(), DomainError> {
        self.require_state(RoundState::WaitingForDeclarations, "evaluate declarations")?;
        if let Some(hand) = self.hands.iter().find(|h| h.declared() == Declaration::Nothing) {
            return Err(DomainError::validation(
                ValidationKind::DeclarationsPending,
                format!("Seat {} has not declared yet", hand.seat()),
            ));
        }
        Ok(())
    }

    pub fn evaluate_declarations(&mut self) -> Result<(), DomainError> {
        self.can_evaluate_declarations()?;

        let count = |d: Declaration| self.hands.iter().filter(|h| h.declared() == d).count();
        let reservations = count(Declaration::Reservation);
        let silent = count(Declaration::SilentMarriage);

        if reservations > 0 {
            self.state = RoundState::WaitingForBids;
        } else if silent == 1 {
            for hand in &mut self.hands {
                if hand.declared() == Declaration::SilentMarriage {
                    hand.assign_private_team(Team::Re);
                    hand.force_solo();
                } else {
                    hand.assign_private_team(Team::Ko);
                }
            }
            self.contract = ContractState::SilentMarriage;
            self.state = RoundState::PlayingTricks;
        } else {
            for hand in &mut self.hands {
                let team = if hand.holds_club_queen() {
                    Team::Re
                } else {
                    Team::Ko
                };
                hand.assign_public_team(team);
            }
            self.contract = ContractState::Normal;
            self.state = RoundState::PlayingTricks;
        }
        Ok(())
    }

    // ---- bidding ----

    pub fn can_bid(&self, seat: Seat, option: BiddingOption) -> Result<(), DomainError> {
        self.require_state(RoundState::WaitingForBids, "bid")?;
        self.hand(seat)?.can_bid(option)
    }

    pub fn bid(&mut self, seat: Seat, option: BiddingOption) -> Result<(), DomainError> {
        self.can_bid(seat, option)?;
        self.hand_mut(seat)?.bid(option)
    }

    pub fn can_evaluate_bids(&self) -> Result<(), DomainError> {
        self.require_state(RoundState::WaitingForBids, "evaluate bids")?;
        if let Some(hand) = self.hands.iter().find(|h| h.is_reservation_pending()) {
            return Err(DomainError::validation(
                ValidationKind::BidsPending,
                format!("Seat {} has reserved but not bid", hand.seat()),
            ));
        }
        Ok(())
    }

    pub fn evaluate_bids(&mut self) -> Result<(), DomainError> {
        self.can_evaluate_bids()?;

        let marriages = self
            .hands
            .iter()
            .filter(|h| h.bidding() == Bidding::Marriage)
            .count();
        let solos = self
            .hands
            .iter()
            .filter(|h| matches!(h.bidding(), Bidding::Solo(_)))
            .count();

        match (marriages, solos) {
            (1, 0) => {
                self.configure_marriage_round();
                Ok(())
            }
            _ => Err(DomainError::not_implemented(format!(
                "solo system: {marriages} marriage and {solos} solo bids"
            ))),
        }
    }

    fn configure_marriage_round(&mut self) {
        self.deck = Deck::new(DeckMode::default());
        self.contract = ContractState::MarriageUnresolved;
        self.state = RoundState::PlayingTricks;
        for hand in &mut self.hands {
            if hand.bidding() == Bidding::Marriage {
                hand.assign_public_team(Team::Re);
            } else {
                hand.assign_public_team(Team::Na);
            }
        }
    }

    // ---- trick play ----

    /// Seat expected to play next, if anyone.
    pub fn next_to_play(&self) -> Option<Seat> {
        if self.state != RoundState::PlayingTricks {
            return None;
        }
        match self.tricks.last() {
            None => Some(0),
            Some(trick) if !trick.is_complete() => trick.next_seat(),
            Some(trick) if (trick.number()) < TRICKS_PER_ROUND => trick.winner(),
            Some(_) => None,
        }
    }

    pub fn can_play_card(&self, seat: Seat, card: &Card) -> Result<(), DomainError> {
        self.require_state(RoundState::PlayingTricks, "play a card")?;

        if let Some(last) = self.tricks.last() {
            if last.is_complete() {
                if last.winner().is_none() {
                    return Err(DomainError::validation(
                        ValidationKind::TricksPending,
                        format!("Trick {} awaits evaluation", last.number()),
                    ));
                }
                if last.number() >= TRICKS_PER_ROUND {
                    return Err(DomainError::validation(
                        ValidationKind::PhaseMismatch,
                        "All tricks have been played",
                    ));
                }
                if self.contract == ContractState::MarriageUnresolved
                    && self.marriage_checked_through < last.number()
                {
                    return Err(DomainError::validation(
                        ValidationKind::PhaseMismatch,
                        format!("Marriage resolution pending for trick {}", last.number()),
                    ));
                }
            }
        }

        let expected = self.next_to_play().ok_or_else(|| {
            DomainError::internal(
                InternalKind::InvariantViolated,
                "playing round has no next seat",
            )
        })?;
        if expected != seat {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Seat {expected} is due to play, not seat {seat}"),
            ));
        }

        let hand = self.hand(seat)?;
        if !hand.holds(card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card {card} is not in hand"),
            ));
        }

        let ranking = self.deck.ranking();
        let demand = self
            .tricks
            .last()
            .filter(|t| !t.is_complete())
            .and_then(|t| t.demand());
        if let Some(demand) = demand {
            let can_serve = hand.cards().iter().any(|c| demand.is_served_by(c, ranking));
            if can_serve && !demand.is_served_by(card, ranking) {
                return Err(DomainError::validation(
                    ValidationKind::MustServeDemand,
                    format!("Card {card} does not serve {demand:?}"),
                ));
            }
        }
        Ok(())
    }

    /// Legal cards for `seat` right now, empty when it is not their turn.
    pub fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        let Ok(hand) = self.hand(seat) else {
            return Vec::new();
        };
        hand.cards()
            .iter()
            .copied()
            .filter(|c| self.can_play_card(seat, c).is_ok())
            .collect()
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<&Trick, DomainError> {
        self.can_play_card(seat, &card)?;

        let needs_new_trick = self.tricks.last().map_or(true, |t| t.is_complete());
        if needs_new_trick {
            let open_index = self.next_to_play().unwrap_or(seat);
            let number = self.tricks.len() as u8 + 1;
            self.tricks.push(Trick::new(number, open_index));
        }

        let card = self.hand_mut(seat)?.take_card(&card)?;
        let ranking = self.deck.ranking().clone();
        let trick = self.tricks.last_mut().ok_or_else(|| {
            DomainError::internal(InternalKind::InvariantViolated, "no open trick")
        })?;
        trick.play_card(card, &ranking)?;
        Ok(trick)
    }

    pub fn can_evaluate_trick(&self) -> Result<(), DomainError> {
        self.require_state(RoundState::PlayingTricks, "evaluate a trick")?;
        match self.tricks.last() {
            Some(trick) => trick.can_evaluate(),
            None => Err(DomainError::validation(
                ValidationKind::TrickIncomplete,
                "No trick has been played",
            )),
        }
    }

    /// Record the winner of the current trick and return their seat.
    pub fn evaluate_trick(&mut self) -> Result<Seat, DomainError> {
        self.can_evaluate_trick()?;
        let hands = &self.hands;
        let trick = self.tricks.last_mut().ok_or_else(|| {
            DomainError::internal(InternalKind::InvariantViolated, "no trick to evaluate")
        })?;
        trick.evaluate(hands)
    }

    // ---- marriage ----

    fn marriage_holder(&self) -> Option<Seat> {
        self.hands
            .iter()
            .find(|h| h.bidding() == Bidding::Marriage)
            .map(|h| h.seat())
    }

    pub fn can_resolve_marriage(&self) -> Result<(), DomainError> {
        if self.contract != ContractState::MarriageUnresolved {
            return Err(DomainError::validation(
                ValidationKind::MarriageNotPending,
                "No marriage awaits resolution",
            ));
        }
        match self.tricks.last() {
            Some(trick) if trick.winner().is_some() => Ok(()),
            _ => Err(DomainError::validation(
                ValidationKind::TrickIncomplete,
                "The latest trick has no winner yet",
            )),
        }
    }

    /// Settle the marriage from the latest trick. A no-op once the contract
    /// is no longer unresolved.
    pub fn resolve_marriage(&mut self) -> Result<(), DomainError> {
        if self.contract != ContractState::MarriageUnresolved {
            return Ok(());
        }
        self.can_resolve_marriage()?;

        let holder = self.marriage_holder().ok_or_else(|| {
            DomainError::internal(
                InternalKind::HandNotFound,
                "unresolved marriage without a marriage bid",
            )
        })?;
        let (number, winner) = match self.tricks.last() {
            Some(trick) => (trick.number(), trick.winner()),
            None => (0, None),
        };
        let winner = winner.ok_or_else(|| {
            DomainError::internal(InternalKind::InvariantViolated, "trick winner vanished")
        })?;
        self.marriage_checked_through = number;

        if winner == holder {
            if number <= MARRIAGE_GRACE_TRICKS {
                return Ok(());
            }
            for hand in &mut self.hands {
                if hand.seat() == holder {
                    hand.assign_public_team(Team::Re);
                    hand.force_solo();
                } else {
                    hand.assign_public_team(Team::Ko);
                }
            }
            self.contract = ContractState::MarriageSolo;
        } else {
            for hand in &mut self.hands {
                if hand.seat() == holder || hand.seat() == winner {
                    hand.assign_public_team(Team::Re);
                    hand.marry();
                } else {
                    hand.assign_public_team(Team::Ko);
                }
            }
            self.contract = ContractState::MarriageResolved;
        }
        self.marriage_resolved_at = Some(number);
        Ok(())
    }

    // ---- calls ----

    /// Extra cards granted to call deadlines by a late marriage resolution.
    fn call_deadline_shift(&self) -> usize {
        match (self.contract, self.marriage_resolved_at) {
            (ContractState::MarriageResolved | ContractState::MarriageSolo, Some(n)) => {
                PLAYERS * (n as usize).saturating_sub(1)
            }
            _ => 0,
        }
    }

    pub fn can_place_call(&self, seat: Seat, call_type: CallType) -> Result<(), DomainError> {
        self.require_state(RoundState::PlayingTricks, "call")?;
        let hand = self.hand(seat)?;
        let team = hand.player_team();
        if !team.is_known() {
            return Err(DomainError::validation(
                ValidationKind::TeamUnknown,
                "Cannot call before knowing your team",
            ));
        }
        if let Some(highest) = highest_call(&self.calls, team) {
            if call_type <= highest {
                return Err(DomainError::validation(
                    ValidationKind::CallNotAllowed,
                    format!("{call_type:?} does not exceed the team's {highest:?}"),
                ));
            }
        }
        let deadline = call_type.max_cards_played() + self.call_deadline_shift();
        let played = self.cards_played();
        if played > deadline {
            return Err(DomainError::validation(
                ValidationKind::CallTooLate,
                format!("{call_type:?} must be made before card {}", deadline + 1),
            ));
        }
        Ok(())
    }

    pub fn place_call(&mut self, seat: Seat, call_type: CallType) -> Result<Call, DomainError> {
        self.can_place_call(seat, call_type)?;
        let cards_played = self.cards_played();
        let hand = self.hand_mut(seat)?;
        let call = Call {
            seat,
            team: hand.internal_team(),
            call_type,
            cards_played,
        };
        hand.reveal_team();
        self.calls.push(call);
        Ok(call)
    }

    // ---- evaluation ----

    pub fn can_evaluate_round(&self) -> Result<(), DomainError> {
        self.require_state(RoundState::PlayingTricks, "evaluate the round")?;
        let finished = self.tricks.len() == TRICKS_PER_ROUND as usize
            && self.tricks.iter().all(|t| t.winner().is_some());
        if !finished {
            return Err(DomainError::validation(
                ValidationKind::TricksPending,
                "Not every trick has been played and evaluated",
            ));
        }
        if self.contract == ContractState::MarriageUnresolved {
            return Err(DomainError::internal(
                InternalKind::InvariantViolated,
                "marriage still unresolved after the last trick",
            ));
        }
        Ok(())
    }

    pub fn evaluate_round(&mut self) -> Result<&[TeamResult], DomainError> {
        self.can_evaluate_round()?;
        let mut teams = [Team::Na; PLAYERS];
        for hand in &self.hands {
            teams[require_seat(hand.seat(), "evaluate_round")?] = hand.internal_team();
        }
        let results = compute_results(&ScoringInput {
            contract: self.contract,
            teams,
            tricks: &self.tricks,
            calls: &self.calls,
        })?;

        for hand in &mut self.hands {
            hand.reveal_team();
        }
        self.results = results.to_vec();
        self.state = RoundState::Evaluated;
        Ok(&self.results)
    }

    /// Round score per seat. Zero-sum; a soloist carries three times the value.
    pub fn settlement(&self) -> Option<[i32; PLAYERS]> {
        if self.state != RoundState::Evaluated {
            return None;
        }
        let mut scores = [0; PLAYERS];
        for hand in &self.hands {
            let value = game_value(&self.results, hand.internal_team());
            let factor = if hand.plays_solo() { 3 } else { 1 };
            scores[hand.seat() as usize % PLAYERS] = value * factor;
        }
        Some(scores)
    }
}

fn missing_hand(seat: Seat) -> DomainError {
    DomainError::internal(
        InternalKind::HandNotFound,
        format!("no hand at seat {seat}"),
    )
}
