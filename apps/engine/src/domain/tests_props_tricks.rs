//! Property tests for trick caches and leading-card selection.
//!
//! Properties tested:
//! - After every insertion the cached demand, leading index, score and state
//!   equal a fresh computation over the card list
//! - The leading card serves the demand or is trump
//! - No competing card outranks the leading card

use proptest::prelude::*;

use crate::domain::ranking::create_ranking;
use crate::domain::test_gens;
use crate::domain::tricks::{leading_card_index, trick_score, Demand, Trick, TrickState};

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_caches_match_recomputation(
        mode in test_gens::deck_mode(),
        cards in test_gens::unique_cards(4),
        open_index in 0u8..4,
    ) {
        let ranking = create_ranking(mode);
        let mut trick = Trick::new(1, open_index);

        for (i, card) in cards.iter().enumerate() {
            trick.play_card(*card, &ranking).unwrap();
            let played = &cards[..=i];

            prop_assert_eq!(trick.cards(), played);
            prop_assert_eq!(trick.demand(), Some(Demand::of(&played[0], &ranking)));
            prop_assert_eq!(trick.leading_card_index(), leading_card_index(played, &ranking));
            prop_assert_eq!(trick.score(), trick_score(played));
            prop_assert_eq!(trick.state(), TrickState::for_count(played.len()));
        }
    }

    #[test]
    fn prop_leading_card_dominates_competitors(
        mode in test_gens::deck_mode(),
        cards in test_gens::unique_cards(4),
    ) {
        let ranking = create_ranking(mode);
        let demand = Demand::of(&cards[0], &ranking);
        let lead = leading_card_index(&cards, &ranking).unwrap();
        let lead_card = &cards[lead];

        prop_assert!(demand.is_served_by(lead_card, &ranking) || ranking.is_trump(lead_card));
        for (i, card) in cards.iter().enumerate() {
            let competes = demand.is_served_by(card, &ranking) || ranking.is_trump(card);
            if competes {
                prop_assert!(ranking.rank_of(lead_card) <= ranking.rank_of(card));
                if ranking.rank_of(lead_card) == ranking.rank_of(card) {
                    prop_assert!(lead <= i);
                }
            }
        }
    }

    #[test]
    fn prop_first_card_always_competes(
        mode in test_gens::deck_mode(),
        cards in test_gens::unique_cards(4),
    ) {
        let ranking = create_ranking(mode);
        let lead = leading_card_index(&cards, &ranking);
        prop_assert!(lead.is_some());
    }
}
