// Fixtures for round-level tests: deterministic deals and a play-out driver.

use uuid::Uuid;

use crate::domain::cards_types::{Card, DeckMode};
use crate::domain::deck::Deck;
use crate::domain::hand::DeclarationOption;
use crate::domain::round::Round;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{ContractState, Seat};

/// Deal the sorted deck round-robin. Seats 0 and 1 hold one Queen of Clubs
/// each, so nobody has a marriage.
pub fn round_robin_hands() -> [Vec<Card>; PLAYERS] {
    let deck = Deck::new(DeckMode::default());
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (i, card) in deck.cards().iter().enumerate() {
        hands[i % PLAYERS].push(*card);
    }
    hands
}

/// Round-robin deal with both Queens of Clubs moved to seat 0.
pub fn marriage_hands() -> [Vec<Card>; PLAYERS] {
    let mut hands = round_robin_hands();
    swap_cards(&mut hands, 0, "QH0", 1, "QC1");
    hands
}

/// Exchange one card between two seats.
pub fn swap_cards(
    hands: &mut [Vec<Card>; PLAYERS],
    seat_a: usize,
    token_a: &str,
    seat_b: usize,
    token_b: &str,
) {
    let a: Card = token_a.parse().unwrap();
    let b: Card = token_b.parse().unwrap();
    let pos_a = hands[seat_a].iter().position(|c| *c == a).unwrap();
    let pos_b = hands[seat_b].iter().position(|c| *c == b).unwrap();
    hands[seat_a][pos_a] = b;
    hands[seat_b][pos_b] = a;
}

pub fn players() -> [Uuid; PLAYERS] {
    [
        Uuid::from_u128(1),
        Uuid::from_u128(2),
        Uuid::from_u128(3),
        Uuid::from_u128(4),
    ]
}

pub fn round_with(hands: [Vec<Card>; PLAYERS]) -> Round {
    let ids = players();
    let [h0, h1, h2, h3] = hands;
    Round::with_hands(
        Uuid::from_u128(99),
        1,
        [(ids[0], h0), (ids[1], h1), (ids[2], h2), (ids[3], h3)],
    )
    .unwrap()
}

/// A round past declarations with every hand healthy.
pub fn healthy_round() -> Round {
    let mut round = round_with(round_robin_hands());
    for seat in 0..PLAYERS as Seat {
        round.declare(seat, DeclarationOption::Healthy).unwrap();
    }
    round.evaluate_declarations().unwrap();
    round
}

/// Play the first legal card of whoever is due, evaluating each full trick
/// and resolving a pending marriage. Stops after `tricks` evaluated tricks.
pub fn play_tricks(round: &mut Round, tricks: usize) {
    while round
        .tricks()
        .iter()
        .filter(|t| t.winner().is_some())
        .count()
        < tricks
    {
        let seat = round.next_to_play().unwrap();
        let card = round.legal_cards(seat)[0];
        let complete = round.play_card(seat, card).unwrap().is_complete();
        if complete {
            round.evaluate_trick().unwrap();
            if round.contract() == ContractState::MarriageUnresolved {
                round.resolve_marriage().unwrap();
            }
        }
    }
}

pub fn play_out(round: &mut Round) {
    play_tricks(round, 12);
}
