// Copyright © spellclash 2024-present
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(dead_code)]

use data::card_definitions::card_name::CardName;
use data::card_states::card_kind::CardKind;
use data::game_states::game_configuration::GameConfiguration;
use data::game_states::game_state::GameState;
use data::player_states::player_state::{PlayerState, Players};
use primitives::game_primitives::{CardId, GameId, PlayerName, Zone};

/// A fresh four-seat game with nobody joined yet, matching the seats every
/// other crate's tests build against.
pub fn new_game(seed: u64) -> GameState {
    new_game_with_id(GameId(uuid::Uuid::new_v4()), seed)
}

/// As [new_game], but with a caller-chosen id -- for tests that need to
/// look the same game up again, e.g. from an [engine::log::EventLog].
pub fn new_game_with_id(game_id: GameId, seed: u64) -> GameState {
    let players = Players::new([
        PlayerState::new(PlayerName::One, None, 20),
        PlayerState::new(PlayerName::Two, None, 20),
        PlayerState::new(PlayerName::Three, None, 20),
        PlayerState::new(PlayerName::Four, None, 20),
    ]);
    GameState::new(game_id, GameConfiguration::default(), players, seed)
}

/// Creates `name` directly in `zone` under `controller`'s control, bypassing
/// the normal cast/draw procedure. Used to seed a scenario's starting board
/// without exercising unrelated parts of the tick loop.
pub fn put_card(game: &mut GameState, name: CardName, controller: PlayerName, zone: Zone) -> CardId {
    let object_id = game.clock.new_object_id();
    let timestamp = game.clock.new_timestamp();
    game.zones.create_card_in_zone(name, CardKind::Normal, controller, zone, object_id, timestamp)
}
