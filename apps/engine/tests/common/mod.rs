#![allow(dead_code)]

use std::collections::HashMap;

use doko_engine::domain::state::Seat;
use doko_engine::{Actor, EngineConfig, GameFlowService, InMemoryGameStore};
use uuid::Uuid;

pub fn init_logging() {
    engine_test_support::test_logging::init();
}

pub fn actor(n: u128) -> Actor {
    Actor::new(Uuid::from_u128(n))
}

pub fn service(seed: u64) -> GameFlowService<InMemoryGameStore> {
    init_logging();
    GameFlowService::new(
        InMemoryGameStore::new(),
        EngineConfig::default().with_seed(seed),
    )
}

/// Create a game for actor 1 and seat actors 2..=players.
pub async fn seated_table(service: &GameFlowService<InMemoryGameStore>, players: u128) -> Uuid {
    let game_id = service.create_game(actor(1)).await.unwrap();
    for n in 2..=players {
        service.join_game(actor(n), game_id).await.unwrap();
    }
    game_id
}

/// Seat of every actor that holds a hand in the current round.
pub async fn seat_map(
    service: &GameFlowService<InMemoryGameStore>,
    game_id: Uuid,
    players: u128,
) -> HashMap<Seat, Actor> {
    let mut seats = HashMap::new();
    for n in 1..=players {
        let view = service.view_round(actor(n), game_id).await.unwrap();
        if let Some(seat) = view.viewer_seat {
            seats.insert(seat, actor(n));
        }
    }
    seats
}
