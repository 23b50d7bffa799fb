use uuid::Uuid;

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::cards_types::DeckMode;
use crate::domain::hand::Hand;
use crate::domain::ranking::create_ranking;
use crate::domain::test_round_helpers::round_robin_hands;
use crate::domain::tricks::{leading_card_index, Demand, Trick, TrickState};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

fn hands() -> Vec<Hand> {
    round_robin_hands()
        .into_iter()
        .enumerate()
        .map(|(seat, cards)| Hand::new(seat as u8, Uuid::from_u128(seat as u128), cards))
        .collect()
}

fn filled_trick(open_index: u8, tokens: &[&str], mode: DeckMode) -> Trick {
    let ranking = create_ranking(mode);
    let mut trick = Trick::new(1, open_index);
    for card in try_parse_cards(tokens.iter().copied()).unwrap() {
        trick.play_card(card, &ranking).unwrap();
    }
    trick
}

#[test]
fn plain_suit_trick_won_by_first_ace() {
    let mut trick = filled_trick(2, &["AS0", "TS0", "TS1", "AH0"], DeckMode::Normal(Suit::Diamonds));
    assert_eq!(trick.demand(), Some(Demand::Suit(Suit::Spades)));
    assert_eq!(trick.leading_card_index(), Some(0));
    assert_eq!(trick.score(), 11 + 10 + 10 + 11);
    assert_eq!(trick.state(), TrickState::FourthCardPlayed);

    let winner = trick.evaluate(&hands()).unwrap();
    assert_eq!(winner, 2);
    assert_eq!(trick.winner(), Some(2));
}

#[test]
fn trump_beats_the_demanded_suit() {
    let trick = filled_trick(0, &["AS0", "9D0", "TS0", "KS0"], DeckMode::default());
    assert_eq!(trick.leading_card_index(), Some(1));
    assert_eq!(trick.seat_of(1), 1);
}

#[test]
fn equal_cards_go_to_the_earlier_player() {
    let trick = filled_trick(3, &["QC0", "QC1", "JD0", "TH0"], DeckMode::default());
    // Ten of Hearts outranks both queens
    assert_eq!(trick.leading_card_index(), Some(3));

    let trick = filled_trick(3, &["AC0", "KC0", "AC1", "9C0"], DeckMode::default());
    assert_eq!(trick.leading_card_index(), Some(0));
}

#[test]
fn off_suit_discard_never_leads() {
    // Ace of Hearts is not trump and not the demanded suit
    let cards = try_parse_cards(["9S0", "AH0", "KS0", "9C0"]).unwrap();
    let ranking = create_ranking(DeckMode::default());
    assert_eq!(leading_card_index(&cards, &ranking), Some(2));
}

#[test]
fn trump_demand_in_queens_solo() {
    let trick = filled_trick(1, &["QS0", "JC0", "QC1", "AD0"], DeckMode::QueensSolo);
    assert_eq!(trick.demand(), Some(Demand::Trump));
    assert_eq!(trick.leading_card_index(), Some(2));
}

#[test]
fn state_advances_per_card() {
    let ranking = create_ranking(DeckMode::default());
    let mut trick = Trick::new(4, 1);
    assert_eq!(trick.state(), TrickState::Opened);
    assert_eq!(trick.next_seat(), Some(1));

    let cards = try_parse_cards(["KH0", "9H1", "AH1", "QD0"]).unwrap();
    let expected = [
        TrickState::FirstCardPlayed,
        TrickState::SecondCardPlayed,
        TrickState::ThirdCardPlayed,
        TrickState::FourthCardPlayed,
    ];
    for (card, state) in cards.into_iter().zip(expected) {
        trick.play_card(card, &ranking).unwrap();
        assert_eq!(trick.state(), state);
    }
    assert_eq!(trick.next_seat(), None);
    assert!(trick.is_complete());
}

#[test]
fn fifth_card_is_rejected() {
    let ranking = create_ranking(DeckMode::default());
    let mut trick = filled_trick(0, &["KH0", "9H1", "AH1", "QD0"], DeckMode::default());
    let extra = "9S0".parse().unwrap();
    let err = trick.play_card(extra, &ranking).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TrickFull, _)
    ));
}

#[test]
fn evaluate_requires_complete_trick_and_runs_once() {
    let mut partial = filled_trick(0, &["KH0", "9H1"], DeckMode::default());
    assert!(matches!(
        partial.evaluate(&hands()).unwrap_err(),
        DomainError::Validation(ValidationKind::TrickIncomplete, _)
    ));

    let mut trick = filled_trick(0, &["KH0", "9H1", "AH1", "QD0"], DeckMode::default());
    trick.evaluate(&hands()).unwrap();
    assert!(matches!(
        trick.evaluate(&hands()).unwrap_err(),
        DomainError::Validation(ValidationKind::TrickAlreadyWon, _)
    ));
}

#[test]
fn missing_winner_hand_is_internal() {
    let mut trick = filled_trick(0, &["KH0", "9H1", "AH1", "QD0"], DeckMode::default());
    let err = trick.evaluate(&[]).unwrap_err();
    assert!(!err.is_policy_violation());
    assert_eq!(trick.winner(), None);
}
