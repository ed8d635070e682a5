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

//! A game rebuilt from its logged intents alone must match one built by
//! applying the same intents live: the hand drawn and the cards left on top
//! of the library agree element-wise.

mod support;

use data::card_definitions::card_name::CardName;
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::log::{EventLog, InMemoryEventLog};
use engine::replay;
use engine::session::GameSession;
use primitives::game_primitives::PlayerName;

fn deck_of(count: usize) -> Vec<CardName> {
    let names = [
        CardName::FOREST,
        CardName::ISLAND,
        CardName::MOUNTAIN,
        CardName::PLAINS,
        CardName::SWAMP,
        CardName::GRIZZLY_BEARS,
        CardName::ELVISH_WARRIOR,
    ];
    (0..count).map(|i| names[i % names.len()]).collect()
}

fn scripted_intents() -> Vec<Intent> {
    vec![
        Intent::RngSeed { seed: 123_456_789 },
        Intent::Join { player: PlayerName::One, user_id: primitives::game_primitives::UserId(uuid::Uuid::nil()) },
        Intent::DeckImportResolved { player: PlayerName::One, cards: deck_of(30) },
        Intent::ShuffleLibrary { player: PlayerName::One },
        Intent::DrawCards { player: PlayerName::One, count: 7 },
    ]
}

#[test]
fn replay_reproduces_hand_and_library_top_from_a_fresh_application() {
    let game_id = primitives::game_primitives::GameId(uuid::Uuid::new_v4());

    let mut live_log = InMemoryEventLog::default();
    let live = support::new_game_with_id(game_id, 123_456_789);
    let mut session = GameSession::new(live, EngineConfig::default(), InMemoryEventLog::default());
    for intent in scripted_intents() {
        session.submit(intent.clone()).unwrap();
        live_log.append(game_id, &intent).unwrap();
    }
    let live_game = session.game;

    let replayed = replay::replay(&live_log, game_id, EngineConfig::default()).unwrap();

    let live_hand = live_game.zones.hand(PlayerName::One);
    let replayed_hand = replayed.zones.hand(PlayerName::One);
    assert_eq!(live_hand.len(), 7);
    assert_eq!(live_hand.len(), replayed_hand.len());
    for (a, b) in live_hand.iter().zip(replayed_hand.iter()) {
        let name_a = live_game.zones.card(*a).unwrap().card_name;
        let name_b = replayed.zones.card(*b).unwrap().card_name;
        assert_eq!(name_a, name_b);
    }

    let live_library = live_game.zones.library(PlayerName::One);
    let replayed_library = replayed.zones.library(PlayerName::One);
    assert_eq!(live_library.len(), 23);
    let live_top: Vec<_> =
        live_library.iter().rev().take(10).map(|id| live_game.zones.card(*id).unwrap().card_name).collect();
    let replayed_top: Vec<_> =
        replayed_library.iter().rev().take(10).map(|id| replayed.zones.card(*id).unwrap().card_name).collect();
    assert_eq!(live_top, replayed_top);
}
