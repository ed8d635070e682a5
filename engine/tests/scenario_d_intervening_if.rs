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

//! An intervening-if clause is checked twice (rule 603.4): once when the
//! ability triggers, and again right before it resolves. A combat-damage
//! trigger that was true when combat damage was dealt must still fizzle if
//! its condition stops holding before it gets off the stack.

mod support;

use data::card_definitions::card_name::CardName;
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::tick;
use primitives::game_primitives::{CardId, PlayerName, Zone};

#[test]
fn combat_damage_trigger_rechecks_its_condition_at_resolution_and_fizzles() {
    let mut game = support::new_game(5);
    let config = EngineConfig::default();
    game.step = data::game_states::game_phase_step::GamePhaseStep::DeclareAttackers;
    game.turn.active_player = PlayerName::One;

    let skitterclaw = support::put_card(&mut game, CardName::RAVENOUS_SKITTERCLAW, PlayerName::One, Zone::Battlefield);
    support::put_card(&mut game, CardName::FOREST, PlayerName::Two, Zone::Hand);
    support::put_card(&mut game, CardName::FOREST, PlayerName::Two, Zone::Hand);
    for _ in 0..10 {
        support::put_card(&mut game, CardName::FOREST, PlayerName::One, Zone::Library);
    }
    let hand_before: Vec<CardId> = game.zones.hand(PlayerName::One).iter().copied().collect();

    tick::apply(&mut game, &config, &Intent::DeclareAttackers {
        player: PlayerName::One,
        attackers: vec![skitterclaw],
    })
    .unwrap();
    assert_eq!(game.zones.hand(PlayerName::Two).len(), 2);

    tick::apply(&mut game, &config, &Intent::DealCombatDamage).unwrap();
    assert_eq!(game.zones.stack().len(), 1, "the combat-damage trigger should be on the stack awaiting resolution");

    // The condition held when the trigger fired; make it false before it
    // gets a chance to resolve.
    support::put_card(&mut game, CardName::ISLAND, PlayerName::Two, Zone::Hand);
    assert_eq!(game.zones.hand(PlayerName::Two).len(), 3);

    tick::apply(&mut game, &config, &Intent::ResolveTop).unwrap();

    assert_eq!(game.zones.stack().len(), 0);
    let hand_after: Vec<CardId> = game.zones.hand(PlayerName::One).iter().copied().collect();
    assert_eq!(hand_before, hand_after, "the draw should not happen once the intervening-if no longer holds");
}
