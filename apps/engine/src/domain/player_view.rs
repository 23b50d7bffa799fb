//! What one viewer may see of a round.
//!
//! Other hands are reduced to card counts and their publicly visible team.
//! Declaration and bid values of other hands stay hidden until the round is
//! evaluated; only the fact that they were made is shown.

use serde::Serialize;

use super::calls::Call;
use super::cards_types::{Card, DeckMode};
use super::hand::{Bidding, Declaration, Hand};
use super::scoring::TeamResult;
use super::state::{ContractState, RoundState, Seat};
use super::team::{Team, Viewer};
use super::tricks::Trick;
use super::round::Round;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat: Seat,
    pub card_count: usize,
    pub team: Team,
    pub has_declared: bool,
    pub declaration: Option<Declaration>,
    pub has_bid: bool,
    pub bidding: Option<Bidding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round_number: u32,
    pub state: RoundState,
    /// Contract as the public sees it; a silent marriage looks normal.
    pub contract: ContractState,
    pub deck_mode: DeckMode,
    pub viewer_seat: Option<Seat>,
    pub own_cards: Vec<Card>,
    pub legal_cards: Vec<Card>,
    pub seats: Vec<SeatView>,
    pub next_to_play: Option<Seat>,
    pub current_trick: Option<Trick>,
    pub tricks_played: usize,
    pub calls: Vec<Call>,
    pub results: Vec<TeamResult>,
}

impl RoundView {
    /// Project `round` for the hand at `viewer_seat`, or for a spectator.
    pub fn for_viewer(round: &Round, viewer_seat: Option<Seat>) -> Self {
        let evaluated = round.state() == RoundState::Evaluated;
        let seats = round
            .hands()
            .iter()
            .map(|hand| seat_view(hand, viewer_seat == Some(hand.seat()), evaluated))
            .collect();

        let (own_cards, legal_cards) = match viewer_seat.and_then(|s| round.hand(s).ok()) {
            Some(hand) => (hand.cards().to_vec(), round.legal_cards(hand.seat())),
            None => (Vec::new(), Vec::new()),
        };

        let contract = match round.contract() {
            ContractState::SilentMarriage if !evaluated => ContractState::Normal,
            other => other,
        };

        Self {
            round_number: round.number(),
            state: round.state(),
            contract,
            deck_mode: round.deck_mode(),
            viewer_seat,
            own_cards,
            legal_cards,
            seats,
            next_to_play: round.next_to_play(),
            current_trick: round.current_trick().cloned(),
            tricks_played: round.tricks().len(),
            calls: round.calls().to_vec(),
            results: round.results().to_vec(),
        }
    }
}

fn seat_view(hand: &Hand, is_owner: bool, evaluated: bool) -> SeatView {
    let viewer = if is_owner { Viewer::Owner } else { Viewer::Public };
    let show_values = is_owner || evaluated;
    SeatView {
        seat: hand.seat(),
        card_count: hand.cards().len(),
        team: hand.team().visible_team_for(viewer),
        has_declared: hand.declared() != Declaration::Nothing,
        declaration: show_values.then(|| hand.declared()),
        has_bid: hand.bidding() != Bidding::Nothing,
        bidding: show_values.then(|| hand.bidding()),
    }
}
