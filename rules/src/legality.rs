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

//! Legality predicates: can a given player take a given action right now?
//!
//! These are granular yes/no checks rather than an enumerator of legal
//! actions. Enumerating the full set of legal actions for a player (the
//! `Intent`/`GameAction` surface) is a concern of the driver that owns a
//! tick loop, not of this crate; see `crate`'s module doc comment.

use data::card_definitions::ability_definition::AbilityType;
use data::card_definitions::cost::{Cost, ManaCost};
use data::card_definitions::registry;
use data::effects::target_requirement::{PlayerFilterKind, TargetFilter, TargetRequirement};
use data::game_states::game_state::GameState;
use data::player_states::mana_pool::ManaPool;
use data::player_states::player_state::PlayerQueries;
use primitives::game_primitives::{
    AbilityId, CardId, CardType, EntityId, PlayerName, StackItemId, Zone,
};

use crate::queries::card_queries;

/// Can `player` legally pass priority right now?
///
/// Only the player currently holding priority may pass it (rule 117.3c).
pub fn can_pass_priority(game: &GameState, player: PlayerName) -> bool {
    game.priority == player
}

/// Can `player` cast the card at `card_id` from their hand right now?
///
/// Does not check individual targets -- see [legal_targets_for] for that --
/// only that the timing, zone, and mana are in order.
pub fn can_cast_spell(game: &GameState, player: PlayerName, card_id: CardId) -> bool {
    let Some(card) = game.zones.card(card_id) else { return false };
    if card.zone != Zone::Hand || card.owner != player || game.priority != player {
        return false;
    }

    let definition = registry::lookup(card.card_name);
    if !is_instant_speed(definition.card_types) && !can_act_at_sorcery_speed(game, player) {
        return false;
    }

    match &definition.mana_cost {
        Some(cost) => can_pay_mana_cost(&game.player(player).mana_pool, cost),
        None => true,
    }
}

/// Can `player` play the land at `card_id` from their hand right now?
///
/// Rule 305.1 timing: sorcery speed, plus the once-per-turn restriction of
/// rule 305.2a (absent an effect granting additional land plays, which this
/// simplified model does not yet track).
pub fn can_play_land(game: &GameState, player: PlayerName, card_id: CardId) -> bool {
    let Some(card) = game.zones.card(card_id) else { return false };
    if card.zone != Zone::Hand || card.owner != player {
        return false;
    }
    if !card_queries::card_types(game, card_id).contains(CardType::Land) {
        return false;
    }
    if !can_act_at_sorcery_speed(game, player) {
        return false;
    }
    game.history.counters_for_turn(game.turn, player).lands_played == 0
}

/// Can `player` activate the ability numbered `ability_id` on its card right
/// now?
///
/// Mana abilities never use the stack and so have no priority restriction
/// (rule 605.3a); every other activated ability follows the same timing
/// restrictions as a spell, unless played from a zone where it functions.
pub fn can_activate_ability(game: &GameState, player: PlayerName, ability_id: AbilityId) -> bool {
    let Some(card) = game.zones.card(ability_id.card_id) else { return false };
    if card.controller != player {
        return false;
    }

    let definition = registry::lookup(card.card_name);
    let ability = definition.get_ability(ability_id.number);
    if ability.ability_type != AbilityType::Activated || !ability.zones.contains(card.zone) {
        return false;
    }
    if !ability.is_mana_ability && game.priority != player {
        return false;
    }

    can_pay_costs(game, player, ability_id.card_id, &ability.costs)
}

/// Can every cost in `costs` currently be paid by `player` as part of
/// activating or casting an ability belonging to `source_id`?
fn can_pay_costs(game: &GameState, player: PlayerName, source_id: CardId, costs: &[Cost]) -> bool {
    costs.iter().all(|cost| match cost {
        Cost::Mana(mana_cost) => can_pay_mana_cost(&game.player(player).mana_pool, mana_cost),
        Cost::TapThis => can_tap_for_cost(game, source_id),
        Cost::Sacrifice(filter) => game
            .zones
            .battlefield_controlled_by(player)
            .any(|id| card_queries::matches_filter(game, id, filter, player, source_id)),
    })
}

fn can_tap_for_cost(game: &GameState, card_id: CardId) -> bool {
    let Some(card) = game.zones.card(card_id) else { return false };
    // Haste (which would waive the summoning-sickness half of this check) is
    // not yet represented; every permanent currently needs to have started
    // the turn under its controller's control to tap for a cost.
    !card.tapped && !card.summoning_sick
}

/// Checks whether `pool` covers `cost`, without spending anything.
///
/// Mirrors [crate::mutations::mana::pay_costs]'s allocation order: colored
/// pips must each be covered by that color, then the generic component by
/// whatever total mana remains.
fn can_pay_mana_cost(pool: &ManaPool, cost: &ManaCost) -> bool {
    let mut pool = *pool;
    for (color, amount) in [
        (primitives::game_primitives::Color::White, cost.white),
        (primitives::game_primitives::Color::Blue, cost.blue),
        (primitives::game_primitives::Color::Black, cost.black),
        (primitives::game_primitives::Color::Red, cost.red),
        (primitives::game_primitives::Color::Green, cost.green),
    ] {
        if amount > 0 && !pool.spend(Some(color), amount) {
            return false;
        }
    }
    pool.total() >= cost.generic
}

/// Can `player` take a sorcery-speed action right now (rule 307.5, 505.6a)?
///
/// They must be the active player, hold priority, be in a main phase, and
/// the stack must be empty.
fn can_act_at_sorcery_speed(game: &GameState, player: PlayerName) -> bool {
    game.turn.active_player == player
        && game.priority == player
        && game.step.is_main_phase()
        && game.zones.stack().is_empty()
}

fn is_instant_speed(card_types: enumset::EnumSet<CardType>) -> bool {
    card_types.contains(CardType::Instant)
}

/// Enumerates every object or player on the battlefield/stack/elsewhere that
/// currently satisfies `requirement`, from the perspective of an ability
/// controlled by `controller` whose source is `source_id`.
///
/// This is the candidate pool a caller chooses from to fill a
/// [TargetRequirement]'s slots; it does not itself enforce
/// [TargetRequirement::quantity].
pub fn legal_targets_for(
    game: &GameState,
    controller: PlayerName,
    source_id: CardId,
    requirement: &TargetRequirement,
) -> Vec<EntityId> {
    matches_target_filter(game, controller, source_id, &requirement.filter)
}

fn matches_target_filter(
    game: &GameState,
    controller: PlayerName,
    source_id: CardId,
    filter: &TargetFilter,
) -> Vec<EntityId> {
    match filter {
        TargetFilter::AnyTarget => {
            let mut targets = matches_target_filter(
                game,
                controller,
                source_id,
                &TargetFilter::Player { controllers: None },
            );
            targets.extend(matches_target_filter(
                game,
                controller,
                source_id,
                &TargetFilter::Card { zones: Zone::Battlefield.into(), filter: Default::default() },
            ));
            targets
        }
        TargetFilter::Player { controllers } => game
            .players_in_turn_order()
            .filter(|&p| game.player(p).is_active())
            .filter(|&p| match controllers {
                Some(PlayerFilterKind::You) => p == controller,
                Some(PlayerFilterKind::Opponents) => p != controller,
                Some(PlayerFilterKind::EachPlayer) | None => true,
            })
            .map(EntityId::Player)
            .collect(),
        TargetFilter::Card { zones, filter } => game
            .zones
            .all_cards()
            .filter(|card| zones.contains(card.zone))
            .filter(|card| card_queries::matches_filter(game, card.id, filter, controller, source_id))
            .map(|card| EntityId::Card(card.id))
            .collect(),
        TargetFilter::StackItem => game
            .zones
            .stack()
            .iter()
            .map(|&item| match item {
                StackItemId::Card(id) => EntityId::Card(id),
                StackItemId::StackAbility(id) => EntityId::StackAbility(id),
            })
            .collect(),
        TargetFilter::AnyOf(filters) => {
            filters.iter().flat_map(|f| matches_target_filter(game, controller, source_id, f)).collect()
        }
    }
}

/// Can `attacker` be declared as an attacker this combat (rule 508.1a)?
///
/// Vigilance is not yet modeled, so declaring an attacker always taps it;
/// tapped creatures and creatures with summoning sickness cannot attack.
pub fn can_declare_attacker(game: &GameState, attacker: CardId) -> bool {
    let Some(card) = game.zones.card(attacker) else { return false };
    card.zone == Zone::Battlefield
        && card.controller == game.turn.active_player
        && card_queries::is_creature(game, attacker)
        && !card.tapped
        && !card.summoning_sick
}

/// Can `blocker` legally block `attacker` (rule 509.1a)?
pub fn can_declare_blocker(game: &GameState, attacker: CardId, blocker: CardId) -> bool {
    let Some(attacker_card) = game.zones.card(attacker) else { return false };
    let Some(blocker_card) = game.zones.card(blocker) else { return false };

    let Some(combat) = &game.combat else { return false };
    let Some(defending_player) = combat.defending_player(attacker) else { return false };

    blocker_card.zone == Zone::Battlefield
        && blocker_card.controller == defending_player
        && card_queries::is_creature(game, blocker)
        && !blocker_card.tapped
        && combat.is_attacking(attacker)
        && attacker_card.zone == Zone::Battlefield
}
