//! Round results: card points, win targets and bonus points per team.

use serde::{Deserialize, Serialize};

use super::calls::{highest_call, Call, CallType};
use super::cards_types::{Kind, Suit};
use super::rules::{DOPPELKOPF_POINTS, PLAYERS, TOTAL_CARD_POINTS, TRICKS_PER_ROUND};
use super::state::ContractState;
use super::team::Team;
use super::tricks::Trick;
use crate::errors::domain::{DomainError, InternalKind};

/// Point breakdown for one team. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub team: Team,
    /// Card points taken (not part of the total).
    pub card_points: u16,
    /// Tricks taken (not part of the total).
    pub tricks_won: u8,
    pub win: u16,
    /// Won as KO outside a solo.
    pub opposition: u16,
    pub beat_90: u16,
    pub beat_60: u16,
    pub beat_30: u16,
    pub beat_no_tricks: u16,
    pub doppelkopf: u16,
    pub charly: u16,
    pub basic_call: u16,
    pub under_call: u16,
}

impl TeamResult {
    fn empty(team: Team) -> Self {
        Self {
            team,
            card_points: 0,
            tricks_won: 0,
            win: 0,
            opposition: 0,
            beat_90: 0,
            beat_60: 0,
            beat_30: 0,
            beat_no_tricks: 0,
            doppelkopf: 0,
            charly: 0,
            basic_call: 0,
            under_call: 0,
        }
    }

    /// Sum of every bonus field.
    pub fn total(&self) -> u16 {
        self.win
            + self.opposition
            + self.beat_90
            + self.beat_60
            + self.beat_30
            + self.beat_no_tricks
            + self.doppelkopf
            + self.charly
            + self.basic_call
            + self.under_call
    }
}

/// Everything scoring needs from a finished round.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub contract: ContractState,
    /// Ground-truth team per seat.
    pub teams: [Team; PLAYERS],
    pub tricks: &'a [Trick],
    pub calls: &'a [Call],
}

/// Game value for `team`: its total minus the opponent's.
pub fn game_value(results: &[TeamResult], team: Team) -> i32 {
    let own = results
        .iter()
        .find(|r| r.team == team)
        .map_or(0, |r| r.total() as i32);
    let other = results
        .iter()
        .find(|r| r.team == team.opponent())
        .map_or(0, |r| r.total() as i32);
    own - other
}

/// Compute the RE and KO results, in that order.
pub fn compute_results(input: &ScoringInput<'_>) -> Result<[TeamResult; 2], DomainError> {
    if let Some(seat) = input.teams.iter().position(|t| !t.is_known()) {
        return Err(DomainError::internal(
            InternalKind::InvariantViolated,
            format!("seat {seat} has no team at scoring"),
        ));
    }

    let mut re = TeamResult::empty(Team::Re);
    let mut ko = TeamResult::empty(Team::Ko);

    for trick in input.tricks {
        let winner = trick.winner().ok_or_else(|| {
            DomainError::internal(
                InternalKind::InvariantViolated,
                format!("trick {} has no winner at scoring", trick.number()),
            )
        })?;
        let result = match input.teams[winner as usize] {
            Team::Re => &mut re,
            _ => &mut ko,
        };
        result.card_points += trick.score();
        result.tricks_won += 1;
    }

    let expected: u16 = input.tricks.iter().map(|t| t.score()).sum();
    if re.card_points + ko.card_points != expected {
        return Err(DomainError::internal(
            InternalKind::InvariantViolated,
            "card points do not add up",
        ));
    }

    let re_call = highest_call(input.calls, Team::Re);
    let ko_call = highest_call(input.calls, Team::Ko);
    let winner = winning_team(&re, &ko, re_call, ko_call);

    let (re_tally, ko_tally) = (re, ko);
    apply_brackets(&mut re, &ko_tally);
    apply_brackets(&mut ko, &re_tally);

    if let Some(team) = winner {
        let result = if team == Team::Re { &mut re } else { &mut ko };
        result.win = 1;
        if team == Team::Ko && !input.contract.is_solo() {
            result.opposition = 1;
        }
        for call in [re_call, ko_call].into_iter().flatten() {
            result.basic_call += CallType::Under120.points();
            result.under_call += call
                .implied()
                .filter(|c| c.is_reducing())
                .map(|c| c.points())
                .sum::<u16>();
        }
    }

    if !input.contract.is_solo() {
        apply_special_points(input, &mut re, &mut ko);
    }

    Ok([re, ko])
}

fn apply_brackets(own: &mut TeamResult, opp: &TeamResult) {
    own.beat_90 = u16::from(opp.card_points < 90);
    own.beat_60 = u16::from(opp.card_points < 60);
    own.beat_30 = u16::from(opp.card_points < 30);
    own.beat_no_tricks = u16::from(opp.tricks_won == 0);
}

fn apply_special_points(input: &ScoringInput<'_>, re: &mut TeamResult, ko: &mut TeamResult) {
    for trick in input.tricks {
        let Some(winner) = trick.winner() else {
            continue;
        };
        let result = match input.teams[winner as usize] {
            Team::Re => &mut *re,
            _ => &mut *ko,
        };
        if trick.score() >= DOPPELKOPF_POINTS {
            result.doppelkopf += 1;
        }
        let is_last = trick.number() == TRICKS_PER_ROUND;
        if is_last && trick.leading_card().is_some_and(|c| c.is(Kind::Jack, Suit::Clubs)) {
            result.charly += 1;
        }
    }
}

/// Card points a team needs when it made no reducing call.
fn base_target(team: Team, re_call: Option<CallType>, ko_call: Option<CallType>) -> u16 {
    let ko_only = ko_call.is_some() && re_call.is_none();
    match (team, ko_only) {
        (Team::Re, true) => 120,
        (Team::Re, false) => 121,
        (_, true) => 121,
        (_, false) => 120,
    }
}

fn meets_own_target(own: &TeamResult, opp: &TeamResult, call: Option<CallType>, base: u16) -> bool {
    match call {
        None | Some(CallType::Under120) => own.card_points >= base,
        Some(CallType::Under90) => own.card_points > TOTAL_CARD_POINTS - 90,
        Some(CallType::Under60) => own.card_points > TOTAL_CARD_POINTS - 60,
        Some(CallType::Under30) => own.card_points > TOTAL_CARD_POINTS - 30,
        Some(CallType::NoTricks) => opp.tricks_won == 0,
    }
}

/// Target a team reaches to beat the opponent's reducing call.
fn meets_defense(own: &TeamResult, opp_call: CallType) -> bool {
    match opp_call {
        CallType::Under120 => false,
        CallType::Under90 => own.card_points >= 90,
        CallType::Under60 => own.card_points >= 60,
        CallType::Under30 => own.card_points >= 30,
        CallType::NoTricks => own.tricks_won >= 1,
    }
}

fn winning_team(
    re: &TeamResult,
    ko: &TeamResult,
    re_call: Option<CallType>,
    ko_call: Option<CallType>,
) -> Option<Team> {
    let reduced = |call: Option<CallType>| call.is_some_and(CallType::is_reducing);
    let wins = |own: &TeamResult, opp: &TeamResult, own_call, opp_call: Option<CallType>| {
        let base = base_target(own.team, re_call, ko_call);
        meets_own_target(own, opp, own_call, base)
            || (!reduced(own_call) && opp_call.is_some_and(|c| meets_defense(own, c)))
    };

    if wins(re, ko, re_call, ko_call) {
        Some(Team::Re)
    } else if wins(ko, re, ko_call, re_call) {
        Some(Team::Ko)
    } else {
        None
    }
}
