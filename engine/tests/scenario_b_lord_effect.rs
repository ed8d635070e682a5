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

//! A lord boosts other matching creatures its controller controls, excludes
//! itself, and the boost disappears within one tick of the lord leaving the
//! battlefield.

mod support;

use data::card_definitions::card_name::CardName;
use data::card_definitions::registry;
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::tick;
use primitives::game_primitives::{PlayerName, Zone};
use rules::mutations::permanents;
use rules::queries::card_queries;

#[test]
fn lord_boosts_others_but_not_itself_and_the_boost_clears_when_it_leaves() {
    let mut game = support::new_game(11);
    let config = EngineConfig::default();

    tick::apply(&mut game, &config, &Intent::CreateToken {
        controller: PlayerName::One,
        token_name: CardName::ELVISH_CHAMPION,
        count: 1,
    })
    .unwrap();
    let lord = *game.zones.battlefield_controlled_by(PlayerName::One).next().unwrap();

    tick::apply(&mut game, &config, &Intent::CreateToken {
        controller: PlayerName::One,
        token_name: CardName::ELVISH_WARRIOR,
        count: 2,
    })
    .unwrap();
    let warriors: Vec<_> =
        game.zones.battlefield_controlled_by(PlayerName::One).filter(|&id| id != lord).collect();
    assert_eq!(warriors.len(), 2);

    let base_lord = registry::lookup(CardName::ELVISH_CHAMPION).base_power_toughness.unwrap();
    let base_warrior = registry::lookup(CardName::ELVISH_WARRIOR).base_power_toughness.unwrap();
    assert_eq!(card_queries::power(&game, lord), base_lord.0);
    assert_eq!(card_queries::toughness(&game, lord), base_lord.1);
    for &warrior in &warriors {
        assert_eq!(card_queries::power(&game, warrior), base_warrior.0 + 1);
        assert_eq!(card_queries::toughness(&game, warrior), base_warrior.1 + 1);
    }

    permanents::destroy(&mut game, primitives::game_primitives::Source::Game, lord).unwrap();
    tick::apply(&mut game, &config, &Intent::TapPermanent { card_id: warriors[0] }).unwrap();
    assert_eq!(game.zones.card(lord).unwrap().zone, Zone::Graveyard);
    for &warrior in &warriors {
        assert_eq!(card_queries::power(&game, warrior), base_warrior.0);
        assert_eq!(card_queries::toughness(&game, warrior), base_warrior.1);
    }
}
