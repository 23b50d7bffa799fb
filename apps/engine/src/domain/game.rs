//! Game aggregate: seated players, dealer rotation and cumulative scores.

use std::collections::HashMap;

use rand::Rng;
use uuid::Uuid;

use super::round::Round;
use super::rules::{MAX_SEATED, MIN_SEATED, PLAYERS};
use super::state::{RoundState, Seat};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

#[derive(Debug, Clone)]
pub struct Game {
    id: Uuid,
    creator: Uuid,
    players: Vec<Uuid>,
    max_players: usize,
    rounds: Vec<Round>,
}

impl Game {
    /// Create a game with its creator seated first. `max_players` is clamped
    /// to the legal table size.
    pub fn new(id: Uuid, creator: Uuid, max_players: usize) -> Self {
        Self {
            id,
            creator,
            players: vec![creator],
            max_players: max_players.clamp(MIN_SEATED, MAX_SEATED),
            rounds: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn creator(&self) -> Uuid {
        self.creator
    }

    pub fn players(&self) -> &[Uuid] {
        &self.players
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn is_seated(&self, user_id: Uuid) -> bool {
        self.players.contains(&user_id)
    }

    pub fn can_join(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_seated(user_id) {
            return Err(DomainError::validation(
                ValidationKind::AlreadySeated,
                "Player already sits at this table",
            ));
        }
        if self.players.len() >= self.max_players {
            return Err(DomainError::validation(
                ValidationKind::TableFull,
                format!("Table is full ({} players)", self.max_players),
            ));
        }
        Ok(())
    }

    pub fn join(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        self.can_join(user_id)?;
        self.players.push(user_id);
        Ok(())
    }

    /// Index into `players` of the dealer for round `number` (1-based).
    pub fn dealer_index(&self, number: u32) -> usize {
        let n = self.players.len().max(1);
        (number.saturating_sub(1) as usize) % n
    }

    /// The four players following the dealer, in seat order.
    pub fn active_players(&self, number: u32) -> Option<[Uuid; PLAYERS]> {
        let n = self.players.len();
        if n < PLAYERS {
            return None;
        }
        let dealer = self.dealer_index(number);
        let mut active = [Uuid::nil(); PLAYERS];
        for (seat, slot) in active.iter_mut().enumerate() {
            *slot = self.players[(dealer + 1 + seat) % n];
        }
        Some(active)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    pub fn can_start_round(&self, user_id: Uuid) -> Result<(), DomainError> {
        if user_id != self.creator {
            return Err(DomainError::forbidden(
                ForbiddenKind::NotCreator,
                "Only the game creator may start a round",
            ));
        }
        if self.players.len() < MIN_SEATED {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("Need {MIN_SEATED} players, have {}", self.players.len()),
            ));
        }
        if let Some(round) = self.current_round() {
            if round.state() != RoundState::Evaluated {
                return Err(DomainError::validation(
                    ValidationKind::RoundInProgress,
                    format!("Round {} is still in progress", round.number()),
                ));
            }
        }
        Ok(())
    }

    /// Deal the next round with the given rng.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        user_id: Uuid,
        round_id: Uuid,
        rng: &mut R,
    ) -> Result<&Round, DomainError> {
        self.can_start_round(user_id)?;
        let number = self.rounds.len() as u32 + 1;
        let active = self.active_players(number).ok_or_else(|| {
            DomainError::validation(ValidationKind::NotEnoughPlayers, "Too few players")
        })?;
        self.rounds.push(Round::deal(round_id, number, active, rng));
        self.current_round().ok_or_else(|| {
            DomainError::validation(ValidationKind::Other("NO_ROUND".into()), "No round dealt")
        })
    }

    /// Seat of `user_id` in the current round, if they play in it.
    pub fn seat_in_current_round(&self, user_id: Uuid) -> Option<Seat> {
        self.current_round()?.seat_of_player(user_id)
    }

    /// Cumulative score per player over every evaluated round.
    pub fn scores(&self) -> HashMap<Uuid, i32> {
        let mut totals: HashMap<Uuid, i32> = self.players.iter().map(|p| (*p, 0)).collect();
        for round in &self.rounds {
            let Some(settlement) = round.settlement() else {
                continue;
            };
            for hand in round.hands() {
                let score = settlement[hand.seat() as usize % PLAYERS];
                *totals.entry(hand.player_id()).or_insert(0) += score;
            }
        }
        totals
    }
}
