//! Dealing distributes the deck as a bijection onto four hands.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use uuid::Uuid;

use crate::domain::cards_types::{Card, DeckMode};
use crate::domain::deck::Deck;
use crate::domain::round::Round;
use crate::domain::rules::{CARDS_PER_HAND, DECK_SIZE};
use crate::domain::test_gens;
use crate::domain::test_round_helpers::players;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_deal_is_a_partition_of_the_deck(seed in any::<u64>()) {
        let deck = Deck::new(DeckMode::default());
        let hands = deck.deal_with_seed(seed);

        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), CARDS_PER_HAND);
            for card in hand {
                prop_assert!(seen.insert(*card), "card {} dealt twice", card);
            }
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn prop_marriage_flag_matches_club_queens(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let round = Round::deal(Uuid::nil(), 1, players(), &mut rng);

        let holders = round.hands().iter().filter(|h| h.has_marriage()).count();
        prop_assert!(holders <= 1);
        for hand in round.hands() {
            let queens = hand.cards().iter().filter(|c| c.is_club_queen()).count();
            prop_assert_eq!(hand.has_marriage(), queens == 2);
        }
    }
}

#[test]
fn seated_hands_follow_seat_order() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let round = Round::deal(Uuid::nil(), 1, players(), &mut rng);
    for (i, hand) in round.hands().iter().enumerate() {
        assert_eq!(hand.seat() as usize, i);
        assert_eq!(hand.player_id(), players()[i]);
    }
}
