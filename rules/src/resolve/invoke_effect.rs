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

//! Interprets a single [EffectIr] step against the current game state.
//!
//! Card abilities are data, not code: this module is the one place that
//! walks an [EffectIr] and turns it into calls against the mutation
//! functions in [crate::mutations]. No card definition ever runs a closure.

use data::core::numerics::{Damage, LifeValue, ManaValue};
use data::delegates::scope::Scope;
use data::effects::effect_ir::{CountExpr, EffectIr, ObjectRef, PlayerRef};
use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerQueries;
use data::properties::card_property::{CardModifier, IntModifier};
use data::properties::layer::{EffectSortingKey, Layer};
use primitives::game_primitives::{Color, EntityId, HasCardId, HasSource, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::{hand, library, move_card, permanents, players, spells};

/// Runs one effect step of a resolving ability, as part of `scope`, against
/// the targets chosen when the ability was put on the stack.
pub fn invoke(game: &mut GameState, scope: Scope, effect: &EffectIr, targets: &[EntityId]) -> Outcome {
    let source = scope.source();

    match effect {
        EffectIr::DrawCards { player, count } => {
            let amount = resolve_count(game, scope, *count) as usize;
            for player in resolve_players(game, scope, *player, targets) {
                library::draw_cards(game, source, player, amount)?;
            }
        }
        EffectIr::DiscardCards { player, count } => {
            let amount = resolve_count(game, scope, *count) as usize;
            for player in resolve_players(game, scope, *player, targets) {
                hand::discard(game, source, player, amount)?;
            }
        }
        EffectIr::MillCards { player, count } => {
            let amount = resolve_count(game, scope, *count) as usize;
            for player in resolve_players(game, scope, *player, targets) {
                library::mill(game, source, player, amount)?;
            }
        }
        EffectIr::Scry { player, count } => {
            let amount = resolve_count(game, scope, *count) as usize;
            for player in resolve_players(game, scope, *player, targets) {
                library::scry(game, source, player, amount)?;
            }
        }
        EffectIr::Surveil { player, count } => {
            let amount = resolve_count(game, scope, *count) as usize;
            for player in resolve_players(game, scope, *player, targets) {
                library::surveil(game, source, player, amount)?;
            }
        }
        EffectIr::GainLife { player, amount } => {
            let life = resolve_count(game, scope, *amount) as LifeValue;
            for player in resolve_players(game, scope, *player, targets) {
                players::gain_life(game, source, player, life)?;
            }
        }
        EffectIr::LoseLife { player, amount } => {
            let life = resolve_count(game, scope, *amount) as LifeValue;
            for player in resolve_players(game, scope, *player, targets) {
                players::lose_life(game, source, player, life)?;
            }
        }
        EffectIr::DealDamage { target, amount } => {
            let damage = resolve_count(game, scope, *amount) as Damage;
            if let Some(object) = resolve_object(scope, *target, targets) {
                match object {
                    EntityId::Player(player) => {
                        players::deal_damage(game, source, player, damage)?;
                    }
                    EntityId::Card(id) => {
                        permanents::mark_damage(game, id, damage)?;
                    }
                    EntityId::StackAbility(_) => {}
                }
            }
        }
        EffectIr::ModifyPowerToughness { target, power_delta, toughness_delta, duration } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                apply_power_toughness_modifier(game, source, id, *power_delta, *toughness_delta, *duration);
            }
        }
        EffectIr::CreateToken { controller, token_name, count } => {
            let amount = resolve_count(game, scope, *count);
            for controller in resolve_players(game, scope, *controller, targets) {
                permanents::create_token(game, source, controller, *token_name, amount)?;
            }
        }
        EffectIr::Destroy { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                permanents::destroy(game, source, id)?;
            }
        }
        EffectIr::Exile { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                move_card::run(game, source, id, Zone::Exiled)?;
            }
        }
        EffectIr::ReturnToHand { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                move_card::run(game, source, id, Zone::Hand)?;
            }
        }
        EffectIr::Sacrifice { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                permanents::sacrifice(game, source, id)?;
            }
        }
        EffectIr::CounterSpell { target } => {
            if let Some(object) = resolve_object(scope, *target, targets) {
                match object {
                    EntityId::Card(id) => spells::counter(game, source, id)?,
                    EntityId::StackAbility(id) => game.zones.remove_stack_ability(id),
                    EntityId::Player(_) => {}
                }
            }
        }
        EffectIr::Tap { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                permanents::tap(game, id)?;
            }
        }
        EffectIr::Untap { target } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                permanents::untap(game, id)?;
            }
        }
        EffectIr::AddMana { player, amount, color } => {
            for player in resolve_players(game, scope, *player, targets) {
                add_mana(game, player, *amount, *color);
            }
        }
        EffectIr::MoveToZone { target, zone } => {
            if let Some(EntityId::Card(id)) = resolve_object(scope, *target, targets) {
                move_card::run(game, source, id, *zone)?;
            }
        }
    }

    outcome::OK
}

/// Expands a [PlayerRef] into the concrete players it designates, in turn
/// order, skipping anyone who has already lost (rule 800.4a).
fn resolve_players(
    game: &GameState,
    scope: Scope,
    player_ref: PlayerRef,
    targets: &[EntityId],
) -> Vec<PlayerName> {
    match player_ref {
        PlayerRef::Controller => vec![scope.controller],
        PlayerRef::EachPlayer => {
            game.players_in_turn_order().filter(|p| game.player(*p).is_active()).collect()
        }
        PlayerRef::EachOpponent => game
            .players_in_turn_order()
            .filter(|p| *p != scope.controller && game.player(*p).is_active())
            .collect(),
        PlayerRef::Target(index) => match targets.get(index) {
            Some(EntityId::Player(player)) => vec![*player],
            _ => vec![],
        },
    }
}

/// Resolves an [ObjectRef] against the ability's source or its chosen
/// targets; `None` if the referenced target no longer exists or was never
/// recorded (e.g. an optional target that went unchosen).
fn resolve_object(scope: Scope, object_ref: ObjectRef, targets: &[EntityId]) -> Option<EntityId> {
    match object_ref {
        ObjectRef::ThisSource => Some(EntityId::Card(scope.card_id())),
        ObjectRef::Target(index) => targets.get(index).copied(),
    }
}

/// Evaluates a [CountExpr] against the resolving ability's source card.
fn resolve_count(game: &GameState, scope: Scope, count: CountExpr) -> u64 {
    match count {
        CountExpr::Fixed(value) => value,
        CountExpr::XValue => {
            game.zones.card(scope.card_id()).and_then(|card| card.x_value).unwrap_or(0)
        }
        CountExpr::PerCounterOnSource => {
            game.zones.card(scope.card_id()).map(|card| card.counters.p1p1 as u64).unwrap_or(0)
        }
    }
}

fn apply_power_toughness_modifier(
    game: &mut GameState,
    source: Source,
    id: primitives::game_primitives::CardId,
    power_delta: i64,
    toughness_delta: i64,
    duration: data::properties::duration::Duration,
) {
    let Some(card) = game.zones.card_mut(id) else { return };
    let sorting_key = EffectSortingKey::new(Layer::PowerToughnessModifyingEffects, card.timestamp);
    if power_delta != 0 {
        card.properties.power.add(CardModifier {
            source,
            duration,
            sorting_key,
            effect: IntModifier::Add(power_delta),
        });
    }
    if toughness_delta != 0 {
        card.properties.toughness.add(CardModifier {
            source,
            duration,
            sorting_key,
            effect: IntModifier::Add(toughness_delta),
        });
    }
}

fn add_mana(game: &mut GameState, player: PlayerName, amount: ManaValue, color: Option<Color>) {
    let pool = &mut game.player_mut(player).mana_pool;
    match color {
        Some(color) => pool.add_colored(color, amount),
        None => pool.add_colorless(amount),
    }
}
