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

//! Resolution of the top item of the stack (rule 608).

pub mod invoke_effect;

use data::card_definitions::ability_definition::{AbilityDefinition, AbilityType};
use data::card_definitions::registry;
use data::card_states::stack_ability::StackAbilityKind;
use data::delegates::scope::Scope;
use data::game_states::game_state::GameState;
use primitives::game_primitives::{
    AbilityId, CardId, EntityId, Source, StackAbilityId, StackItemId, Zone,
};
use tracing::instrument;
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;
use crate::triggers;

/// Resolves the top item of the stack, per rule 608.
///
/// > 608.1. Each time all players pass in succession, the spell or ability
/// > on top of the stack resolves.
#[instrument(name = "resolve_top_of_stack", level = "debug", skip(game))]
pub fn resolve_top_of_stack(game: &mut GameState) -> Outcome {
    let Some(item) = game.zones.stack().last().copied() else { return outcome::OK };

    match item {
        StackItemId::StackAbility(id) => resolve_stack_ability(game, id)?,
        StackItemId::Card(id) => resolve_spell(game, id)?,
    }

    triggers::push_pending_triggers_onto_stack(game)
}

fn resolve_stack_ability(game: &mut GameState, id: StackAbilityId) -> Outcome {
    let ability_state = game.zones.stack_ability(id);
    let ability_id = ability_state.ability_id;
    let controller = ability_state.controller;
    let targets = ability_state.targets.clone();
    let kind = ability_state.kind;

    if !game.zones.has_card(ability_id.card_id) {
        game.zones.remove_stack_ability(id);
        return outcome::OK;
    }

    if kind == StackAbilityKind::Triggered {
        let still_true_at_trigger_time = ability_state.intervening_if_at_trigger_time != Some(false);
        let still_true_at_resolution = match (&ability_state.intervening_if, &ability_state.triggering_event) {
            (Some(clause), Some(event)) => triggers::evaluate_intervening_if(game, *clause, event),
            _ => true,
        };
        if !still_true_at_trigger_time || !still_true_at_resolution {
            game.zones.remove_stack_ability(id);
            return outcome::OK;
        }
    }

    let Some(card) = game.zones.card(ability_id.card_id) else {
        return Err(inconsistent(ability_id.card_id, "vanished between the existence check and resolution"));
    };
    let card_name = card.card_name;
    let definition = registry::lookup(card_name).get_ability(ability_id.number).clone();
    let scope = Scope { ability_id, controller };

    run_ability_effects(game, scope, &definition, &targets)?;
    game.zones.remove_stack_ability(id);
    outcome::OK
}

fn resolve_spell(game: &mut GameState, card_id: CardId) -> Outcome {
    let Some(card) = game.zones.card(card_id) else { return outcome::OK };
    let card_name = card.card_name;
    let controller = card.controller;
    let targets = card.targets.clone();

    let definition = registry::lookup(card_name);
    let card_types = definition.card_types;
    let Some((number, spell_ability)) =
        definition.all_abilities().find(|(_, a)| a.ability_type == AbilityType::Spell)
    else {
        return Err(inconsistent(card_id, format!("{card_name:?} has no spell ability but is on the stack")));
    };
    let ability = spell_ability.clone();
    let ability_id = AbilityId { card_id, number };
    let scope = Scope { ability_id, controller };

    run_ability_effects(game, scope, &ability, &targets)?;

    // Re-check the spell is still on the stack: a counter effect resolved as
    // part of `run_ability_effects` (e.g. redirected via a replacement) may
    // have already removed it.
    if game.zones.card(card_id).map(|c| c.zone) != Some(Zone::Stack) {
        return outcome::OK;
    }

    let destination = if card_types.iter().any(|t| t.is_permanent()) {
        Zone::Battlefield
    } else {
        Zone::Graveyard
    };
    move_card::run(game, Source::Ability(ability_id), card_id, destination)
}

fn run_ability_effects(
    game: &mut GameState,
    scope: Scope,
    ability: &AbilityDefinition,
    targets: &[EntityId],
) -> Outcome {
    for effect in &ability.effects {
        invoke_effect::invoke(game, scope, effect, targets)?;
    }
    outcome::OK
}

/// An internal invariant was violated while resolving `card_id`. Surfaced as
/// an ordinary [StopCondition::Error] so it propagates through `?` like any
/// other failure here; the engine tick loop is responsible for recognizing
/// this as a mid-tick inconsistency and rolling back rather than panicking.
fn inconsistent(card_id: CardId, detail: impl std::fmt::Display) -> utils::outcome::StopCondition {
    utils::outcome::StopCondition::Error(color_eyre::eyre::eyre!("inconsistent stack state for {card_id:?}: {detail}"))
}
