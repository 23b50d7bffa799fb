use uuid::Uuid;

use crate::domain::calls::{Call, CallType};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::cards_types::DeckMode;
use crate::domain::hand::Hand;
use crate::domain::ranking::create_ranking;
use crate::domain::scoring::{compute_results, game_value, ScoringInput, TeamResult};
use crate::domain::state::{ContractState, Seat};
use crate::domain::team::Team;
use crate::domain::tricks::Trick;
use crate::errors::domain::DomainError;

const RE_SEAT: Seat = 0;
const KO_SEAT: Seat = 2;
const TEAMS: [Team; 4] = [Team::Re, Team::Re, Team::Ko, Team::Ko];

/// 43 points, worth a Doppelkopf.
const BIG: [&str; 4] = ["TH0", "AS0", "AS1", "AC0"];
const MID: [&str; 4] = ["TH0", "AS0", "KS0", "9S0"];
const SMALL: [&str; 4] = ["TH0", "9S0", "9S1", "9C0"];

/// A trick whose first card leads, opened by `winner`.
fn won_trick(number: u8, winner: Seat, tokens: [&str; 4]) -> Trick {
    let ranking = create_ranking(DeckMode::default());
    let hands: Vec<Hand> = (0..4)
        .map(|seat| Hand::new(seat, Uuid::from_u128(seat as u128), Vec::new()))
        .collect();
    let mut trick = Trick::new(number, winner);
    for card in try_parse_cards(tokens).unwrap() {
        trick.play_card(card, &ranking).unwrap();
    }
    assert_eq!(trick.evaluate(&hands).unwrap(), winner);
    trick
}

/// Tricks from `(winner, pattern, count)` groups, numbered in order.
fn tricks(groups: &[(Seat, [&str; 4], usize)]) -> Vec<Trick> {
    let mut out = Vec::new();
    for (winner, pattern, count) in groups {
        for _ in 0..*count {
            let number = out.len() as u8 + 1;
            out.push(won_trick(number, *winner, *pattern));
        }
    }
    out
}

fn call(team: Team, call_type: CallType) -> Call {
    let seat = if team == Team::Re { RE_SEAT } else { KO_SEAT };
    Call {
        seat,
        team,
        call_type,
        cards_played: 0,
    }
}

fn score(contract: ContractState, tricks: &[Trick], calls: &[Call]) -> [TeamResult; 2] {
    compute_results(&ScoringInput {
        contract,
        teams: TEAMS,
        tricks,
        calls,
    })
    .unwrap()
}

#[test]
fn re_wins_with_121_and_collects_doppelkopf() {
    let tricks = tricks(&[
        (RE_SEAT, BIG, 2),
        (RE_SEAT, MID, 1),
        (RE_SEAT, SMALL, 1),
        (KO_SEAT, MID, 4),
    ]);
    let [re, ko] = score(ContractState::Normal, &tricks, &[]);

    assert_eq!(re.card_points, 121);
    assert_eq!(ko.card_points, 100);
    assert_eq!(re.win, 1);
    assert_eq!(re.doppelkopf, 2);
    assert_eq!(re.beat_90, 0);
    assert_eq!(ko.total(), 0);
    assert_eq!(game_value(&[re, ko], Team::Re), 3);
    assert_eq!(game_value(&[re, ko], Team::Ko), -3);
}

#[test]
fn ko_wins_a_tie_at_120_with_opposition_bonus() {
    let tricks = tricks(&[
        (RE_SEAT, MID, 4),
        (RE_SEAT, SMALL, 2),
        (KO_SEAT, MID, 4),
        (KO_SEAT, SMALL, 2),
    ]);
    let [re, ko] = score(ContractState::Normal, &tricks, &[]);

    assert_eq!((re.card_points, ko.card_points), (120, 120));
    assert_eq!(re.win, 0);
    assert_eq!(ko.win, 1);
    assert_eq!(ko.opposition, 1);
    assert_eq!(game_value(&[re, ko], Team::Ko), 2);
}

#[test]
fn lone_ko_call_flips_the_tie() {
    let tricks = tricks(&[
        (RE_SEAT, MID, 4),
        (RE_SEAT, SMALL, 2),
        (KO_SEAT, MID, 4),
        (KO_SEAT, SMALL, 2),
    ]);
    let calls = [call(Team::Ko, CallType::Under120)];
    let [re, ko] = score(ContractState::Normal, &tricks, &calls);

    assert_eq!(re.win, 1);
    assert_eq!(re.basic_call, 2);
    assert_eq!(re.under_call, 0);
    assert_eq!(ko.total(), 0);
}

#[test]
fn failed_reduction_goes_to_the_defenders() {
    let tricks = tricks(&[(RE_SEAT, MID, 4), (RE_SEAT, SMALL, 4), (KO_SEAT, MID, 4)]);
    let calls = [
        call(Team::Re, CallType::Under120),
        call(Team::Re, CallType::Under90),
    ];
    let [re, ko] = score(ContractState::Normal, &tricks, &calls);

    assert_eq!((re.card_points, ko.card_points), (140, 100));
    assert_eq!(re.total(), 0);
    assert_eq!(ko.win, 1);
    assert_eq!(ko.opposition, 1);
    assert_eq!(ko.basic_call, 2);
    assert_eq!(ko.under_call, 1);
    assert_eq!(ko.total(), 5);
}

#[test]
fn reaching_a_reduced_target_wins() {
    let tricks = tricks(&[(RE_SEAT, MID, 8), (KO_SEAT, SMALL, 2)]);
    let calls = [call(Team::Re, CallType::Under60)];
    let [re, ko] = score(ContractState::Normal, &tricks, &calls);

    assert_eq!(re.card_points, 200);
    assert_eq!(re.win, 1);
    assert_eq!(re.basic_call, 2);
    // Under 90 and under 60
    assert_eq!(re.under_call, 2);
    assert_eq!(re.beat_90, 1);
    assert_eq!(re.beat_60, 1);
    assert_eq!(re.beat_30, 1);
    assert_eq!(re.beat_no_tricks, 0);
    assert_eq!(ko.total(), 0);
}

#[test]
fn all_tricks_earn_every_bracket() {
    let tricks = tricks(&[(RE_SEAT, MID, 6)]);
    let [re, ko] = score(ContractState::Normal, &tricks, &[]);

    assert_eq!(ko.tricks_won, 0);
    assert_eq!(
        (re.beat_90, re.beat_60, re.beat_30, re.beat_no_tricks),
        (1, 1, 1, 1)
    );
    assert_eq!(re.total(), 5);
}

#[test]
fn both_teams_reducing_can_leave_no_winner() {
    let tricks = tricks(&[(RE_SEAT, MID, 4), (RE_SEAT, SMALL, 4), (KO_SEAT, MID, 4)]);
    let calls = [
        call(Team::Re, CallType::Under90),
        call(Team::Ko, CallType::Under90),
    ];
    let [re, ko] = score(ContractState::Normal, &tricks, &calls);

    assert_eq!(re.win + ko.win, 0);
    assert_eq!(re.basic_call + ko.basic_call, 0);
    assert_eq!(game_value(&[re, ko], Team::Re), 0);
}

#[test]
fn charly_needs_the_last_trick_won_by_jack_of_clubs() {
    let mut tricks = tricks(&[(RE_SEAT, MID, 5), (KO_SEAT, MID, 6)]);
    tricks.push(won_trick(12, KO_SEAT, ["JC0", "9S0", "9S1", "9C0"]));
    let [re, ko] = score(ContractState::Normal, &tricks, &[]);

    assert_eq!(ko.charly, 1);
    assert_eq!(re.charly, 0);

    let [re, ko] = score(ContractState::MarriageSolo, &tricks, &[]);
    assert_eq!(ko.charly, 0);
    assert_eq!(ko.opposition, 0);
    assert_eq!(re.doppelkopf + ko.doppelkopf, 0);
}

#[test]
fn solo_ignores_doppelkopf() {
    let tricks = tricks(&[(RE_SEAT, BIG, 3), (KO_SEAT, SMALL, 1)]);
    let [re, _] = score(ContractState::SilentMarriage, &tricks, &[]);
    assert_eq!(re.win, 1);
    assert_eq!(re.doppelkopf, 0);
}

#[test]
fn unknown_team_or_missing_winner_is_internal() {
    let tricks = tricks(&[(RE_SEAT, MID, 1)]);
    let err = compute_results(&ScoringInput {
        contract: ContractState::Normal,
        teams: [Team::Re, Team::Na, Team::Ko, Team::Ko],
        tricks: &tricks,
        calls: &[],
    })
    .unwrap_err();
    assert!(matches!(err, DomainError::Internal(..)));

    let open = [Trick::new(1, 0)];
    let err = compute_results(&ScoringInput {
        contract: ContractState::Normal,
        teams: TEAMS,
        tricks: &open,
        calls: &[],
    })
    .unwrap_err();
    assert!(matches!(err, DomainError::Internal(..)));
}
