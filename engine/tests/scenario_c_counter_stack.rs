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

//! Countering a spell removes it from the stack and sends it to its owner's
//! graveyard; once that resolves, the stack is empty.

mod support;

use data::card_definitions::card_name::CardName;
use data::player_states::player_state::PlayerQueries;
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::tick;
use primitives::game_primitives::{Color, EntityId, PlayerName, Zone};

#[test]
fn countering_an_instant_sends_it_to_the_graveyard_and_empties_the_stack() {
    let mut game = support::new_game(42);
    let config = EngineConfig::default();
    game.step = data::game_states::game_phase_step::GamePhaseStep::PreCombatMain;

    let brainstorm = support::put_card(&mut game, CardName::BRAINSTORM, PlayerName::One, Zone::Hand);
    let counterspell = support::put_card(&mut game, CardName::COUNTERSPELL, PlayerName::Two, Zone::Hand);
    game.player_mut(PlayerName::One).mana_pool.add_colored(Color::Blue, 1);
    game.player_mut(PlayerName::Two).mana_pool.add_colored(Color::Blue, 2);

    tick::apply(&mut game, &config, &Intent::CastSpell {
        player: PlayerName::One,
        card_id: brainstorm,
        targets: vec![],
        x_value: None,
    })
    .unwrap();
    assert_eq!(game.zones.stack().len(), 1);

    game.priority = PlayerName::Two;
    tick::apply(&mut game, &config, &Intent::CastSpell {
        player: PlayerName::Two,
        card_id: counterspell,
        targets: vec![EntityId::Card(brainstorm)],
        x_value: None,
    })
    .unwrap();
    assert_eq!(game.zones.stack().len(), 2);

    tick::apply(&mut game, &config, &Intent::ResolveTop).unwrap();

    assert_eq!(game.zones.stack().len(), 0);
    assert_eq!(game.zones.card(brainstorm).unwrap().zone, Zone::Graveyard);
    assert_eq!(game.zones.card(counterspell).unwrap().zone, Zone::Graveyard);
}
