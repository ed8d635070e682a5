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

//! Advances the game through the steps and phases of a turn (rule 500).

use data::core::numerics::power_to_damage;
use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_phase_step::GamePhaseStep;
use data::game_states::game_state::GameState;
use data::game_states::turn_data::TurnData;
use data::player_states::player_state::PlayerQueries;
use enumset::EnumSet;
use primitives::game_primitives::{EntityId, PlayerName, Source, Zone};
use tracing::instrument;
use utils::outcome::{self, Outcome};

use crate::mutations::{hand, library, move_card, permanents, players};
use crate::queries::{card_queries, player_queries};
use crate::triggers;

/// The maximum hand size before cleanup forces a discard (rule 120.8),
/// absent an effect granting "no maximum hand size".
const MAXIMUM_HAND_SIZE: usize = 7;

/// Moves the game to its next step, performing that step's turn-based
/// actions (rule 703) and firing `BeginStep`/`EndStep` events for delegates
/// to observe.
///
/// Called once every player has passed priority in succession with an empty
/// stack (rule 500.2).
#[instrument(level = "debug", skip(game))]
pub fn advance(game: &mut GameState) -> Outcome {
    end_step_event(game)?;

    match enum_iterator::next(&game.step) {
        Some(next) => game.step = next,
        None => start_new_turn(game)?,
    }

    enter_step(game)?;
    game.priority = game.turn.active_player;
    game.passed = EnumSet::empty();

    begin_step_event(game)?;
    triggers::push_pending_triggers_onto_stack(game)
}

fn start_new_turn(game: &mut GameState) -> Outcome {
    let active_player = player_queries::next_player_after(game, game.turn.active_player);
    game.turn = TurnData { active_player, turn_number: game.turn.turn_number + 1 };
    game.step = GamePhaseStep::Untap;
    game.combat = None;
    for player in game.players.iter().map(|p| p.name).collect::<Vec<_>>() {
        game.player_mut(player).mana_pool.empty();
    }
    outcome::OK
}

/// Performs the turn-based actions that happen automatically on entering a
/// step, before priority is first given out (rule 703.4).
fn enter_step(game: &mut GameState) -> Outcome {
    match game.step {
        GamePhaseStep::Untap => {
            let active_player = game.turn.active_player;
            let permanents: Vec<_> = game.zones.battlefield(active_player).iter().copied().collect();
            for id in permanents {
                permanents::untap(game, id)?;
            }
        }
        GamePhaseStep::Draw => {
            // 103.8a. The player who plays first skips the draw step of their
            // first turn.
            if game.turn.turn_number > 1 {
                library::draw(game, Source::Game, game.turn.active_player)?;
            }
        }
        GamePhaseStep::DeclareAttackers => {
            game.combat.get_or_insert_with(Default::default);
        }
        GamePhaseStep::CombatDamage => {
            assign_combat_damage(game)?;
        }
        GamePhaseStep::EndCombat => {
            game.combat = None;
        }
        GamePhaseStep::Cleanup => {
            cleanup(game)?;
        }
        _ => {}
    }

    outcome::OK
}

/// Assigns and deals combat damage for every attacker and blocker currently
/// in the combat phase (rule 510). Called automatically on entering the
/// `CombatDamage` step, and exposed here so the engine's `dealCombatDamage`
/// intent can trigger it directly during replay or testing.
pub fn assign_combat_damage(game: &mut GameState) -> Outcome {
    let Some(combat) = &game.combat else { return outcome::OK };
    let attackers: Vec<_> = combat.attackers().collect();

    for attacker in attackers {
        if !game.zones.has_card(attacker) {
            continue;
        }
        let combat = game.combat.as_ref().expect("checked above");
        let blockers = combat.blockers_of(attacker);
        let attacker_power = power_to_damage(card_queries::power(game, attacker));

        if blockers.is_empty() {
            if let Some(defender) = combat.defending_player(attacker) {
                players::deal_damage(game, Source::Game, defender, attacker_power)?;
                fire_combat_damage_event(game, attacker, EntityId::Player(defender));
            }
            continue;
        }

        // Simplification: all of the attacker's damage is assigned to the
        // first declared blocker rather than letting the attacking player
        // order and split it among multiple blockers (rule 510.1c).
        if let Some(&first_blocker) = blockers.first() {
            permanents::mark_damage(game, first_blocker, attacker_power)?;
            fire_combat_damage_event(game, attacker, EntityId::Card(first_blocker));
        }
        for blocker in &blockers {
            if !game.zones.has_card(*blocker) {
                continue;
            }
            let blocker_power = power_to_damage(card_queries::power(game, *blocker));
            permanents::mark_damage(game, attacker, blocker_power)?;
            fire_combat_damage_event(game, *blocker, EntityId::Card(attacker));
        }
    }

    outcome::OK
}

fn fire_combat_damage_event(game: &mut GameState, source_card: primitives::game_primitives::CardId, target: EntityId) {
    let controller = game.zones.card(source_card).map(|c| c.controller).unwrap_or(game.turn.active_player);
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::DealsCombatDamage,
            subject: EntityId::Card(source_card),
            source: Source::Game,
            secondary: Some(target),
            controller_at_time: controller,
        },
    );
}

fn cleanup(game: &mut GameState) -> Outcome {
    let active_player = game.turn.active_player;
    let hand_size = game.zones.hand(active_player).len();
    if hand_size > MAXIMUM_HAND_SIZE {
        hand::discard(game, Source::Game, active_player, hand_size - MAXIMUM_HAND_SIZE)?;
    }

    let battlefield: Vec<_> = game.zones.all_cards().filter(|c| c.zone == Zone::Battlefield).map(|c| c.id).collect();
    for id in battlefield {
        if let Some(card) = game.zones.card_mut(id) {
            card.damage = 0;
        }
    }

    outcome::OK
}

fn begin_step_event(game: &mut GameState) -> Outcome {
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::BeginStep,
            subject: EntityId::Player(game.turn.active_player),
            source: Source::Game,
            secondary: None,
            controller_at_time: game.turn.active_player,
        },
    );
    outcome::OK
}

fn end_step_event(game: &mut GameState) -> Outcome {
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::EndStep,
            subject: EntityId::Player(game.turn.active_player),
            source: Source::Game,
            secondary: None,
            controller_at_time: game.turn.active_player,
        },
    );
    outcome::OK
}

#[cfg(test)]
mod tests {
    use data::game_states::game_configuration::GameConfiguration;
    use data::game_states::game_state::GameState;
    use data::player_states::player_state::{PlayerQueries, PlayerState, Players};
    use primitives::game_primitives::GameId;

    use super::*;

    fn new_game() -> GameState {
        let players = Players::new([
            PlayerState::new(PlayerName::One, None, 20),
            PlayerState::new(PlayerName::Two, None, 20),
            PlayerState::new(PlayerName::Three, None, 20),
            PlayerState::new(PlayerName::Four, None, 20),
        ]);
        GameState::new(GameId(uuid::Uuid::nil()), GameConfiguration::default(), players, 7)
    }

    #[test]
    fn advance_cycles_every_step_of_the_turn() {
        let mut game = new_game();
        let mut seen = vec![game.step];
        for _ in 0..13 {
            advance(&mut game).unwrap();
            seen.push(game.step);
        }
        assert_eq!(seen.len(), 14);
        assert_eq!(seen[0], GamePhaseStep::Untap);
        assert_eq!(seen[12], GamePhaseStep::Cleanup);
        assert_eq!(seen[13], GamePhaseStep::Untap);
    }

    #[test]
    fn advancing_past_cleanup_starts_a_new_turn_for_the_next_player() {
        let mut game = new_game();
        for _ in 0..13 {
            advance(&mut game).unwrap();
        }
        assert_eq!(game.turn.turn_number, 1);
        assert_eq!(game.turn.active_player, PlayerName::Two);
    }

    #[test]
    fn first_turn_draw_step_is_skipped() {
        let mut game = new_game();
        for _ in 0..10 {
            let object_id = game.clock.new_object_id();
            let timestamp = game.clock.new_timestamp();
            game.zones.create_card_in_zone(
                data::card_definitions::card_name::FOREST,
                data::card_states::card_kind::CardKind::Normal,
                PlayerName::One,
                Zone::Library,
                object_id,
                timestamp,
            );
        }
        for _ in 0..2 {
            advance(&mut game).unwrap();
        }
        assert_eq!(game.step, GamePhaseStep::Draw);
        assert_eq!(game.zones.hand(PlayerName::One).len(), 0);
    }
}
