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

//! Triggered-ability collection and ordering (rule 603).
//!
//! Card abilities are matcher-and-effect data, never closures, so collecting
//! triggers means walking every permanent's [data::card_definitions::ability_definition::AbilityDefinition]
//! and checking its [data::delegates::trigger::TriggerCondition] against the
//! event that just fired.

use data::card_definitions::registry;
use data::delegates::trigger::{InterveningIf, PendingTrigger, TriggerSubject};
use data::events::game_event::GameEvent;
use data::game_states::game_state::GameState;
use data::prompts::prompt::{Prompt, PromptKind};
use primitives::game_primitives::{AbilityId, EntityId, HasController, PlayerName, StackAbilityId, Zone};
use tracing::trace;
use utils::outcome::{self, Outcome};

/// Offers `event` to every permanent currently on the battlefield and queues
/// a [PendingTrigger] for every triggered ability whose matcher fires.
///
/// Per rule 603.3, intervening-if clauses are evaluated now, at trigger
/// time; they are re-checked at resolution by [pending_intervening_if_still_true].
pub fn collect(game: &mut GameState, event: GameEvent) {
    let card_ids: Vec<_> = game.zones.all_cards().map(|c| c.id).collect();
    for card_id in card_ids {
        let Some(card) = game.zones.card(card_id) else { continue };
        if card.zone != Zone::Battlefield {
            continue;
        }
        let controller = card.controller;
        let card_name = card.card_name;
        let definition = registry::lookup(card_name);
        for (number, ability) in definition.all_abilities() {
            let Some(trigger) = &ability.trigger else { continue };
            if trigger.event_kind != event.kind {
                continue;
            }
            if !subject_matches(trigger.subject, &event, card_id, controller) {
                continue;
            }
            let intervening_if_at_trigger_time =
                trigger.intervening_if.map(|clause| evaluate_intervening_if(game, clause, &event));
            trace!(?card_id, ?number, "Triggered ability collected");
            game.pending_triggers.push(PendingTrigger {
                ability_id: AbilityId { card_id, number },
                controller,
                event: event.clone(),
                intervening_if_at_trigger_time,
            });
        }
    }
}

fn subject_matches(
    subject: TriggerSubject,
    event: &GameEvent,
    host_card_id: primitives::game_primitives::CardId,
    host_controller: PlayerName,
) -> bool {
    match subject {
        TriggerSubject::ThisCard => event.involves_card(host_card_id),
        TriggerSubject::AnythingYouControl => {
            matches!(event.subject, EntityId::Card(_)) && event.controller_at_time == host_controller
        }
        TriggerSubject::AnythingAnOpponentControls => {
            matches!(event.subject, EntityId::Card(_)) && event.controller_at_time != host_controller
        }
        TriggerSubject::Anything => true,
    }
}

/// Re-evaluates an [InterveningIf] clause, used both at trigger time and
/// again at resolution (rule 603.4).
pub fn evaluate_intervening_if(game: &GameState, clause: InterveningIf, event: &GameEvent) -> bool {
    match clause {
        InterveningIf::SourceStillOnBattlefield => match event.subject {
            EntityId::Card(id) => game.zones.card(id).is_some_and(|c| c.zone == Zone::Battlefield),
            _ => false,
        },
        InterveningIf::ControllerStillControlsSource => match event.subject {
            EntityId::Card(id) => game
                .zones
                .card(id)
                .is_some_and(|c| c.zone == Zone::Battlefield && c.controller() == event.controller_at_time),
            _ => false,
        },
        InterveningIf::EventSubjectHandSize { comparison, value } => match event.subject {
            EntityId::Player(player) => {
                let hand_size = game.zones.hand(player).len() as i64;
                comparison.evaluate(hand_size, value as i64)
            }
            EntityId::Card(id) => game.zones.card(id).is_some_and(|c| {
                let hand_size = game.zones.hand(c.owner).len() as i64;
                comparison.evaluate(hand_size, value as i64)
            }),
            _ => false,
        },
        InterveningIf::EventSecondaryHandSize { comparison, value } => match event.secondary {
            Some(EntityId::Player(player)) => {
                let hand_size = game.zones.hand(player).len() as i64;
                comparison.evaluate(hand_size, value as i64)
            }
            Some(EntityId::Card(id)) => game.zones.card(id).is_some_and(|c| {
                let hand_size = game.zones.hand(c.owner).len() as i64;
                comparison.evaluate(hand_size, value as i64)
            }),
            _ => false,
        },
    }
}

/// Places every pending trigger onto the stack, in APNAP order starting with
/// the active player (rule 603.3b). A controller with exactly one trigger
/// in this batch has it pushed directly; a controller with more than one
/// is asked to order them, via [PromptKind::OrderSimultaneousTriggers].
pub fn push_pending_triggers_onto_stack(game: &mut GameState) -> Outcome {
    if game.pending_triggers.is_empty() {
        return outcome::OK;
    }

    let order: Vec<PlayerName> = game.players_in_turn_order().collect();
    let mut pending = std::mem::take(&mut game.pending_triggers);

    for player in order {
        let mut batch = Vec::new();
        let mut index = 0;
        while index < pending.len() {
            if pending[index].controller == player {
                batch.push(pending.remove(index));
            } else {
                index += 1;
            }
        }
        push_batch(game, player, batch)?;
    }

    outcome::OK
}

fn push_batch(game: &mut GameState, player: PlayerName, batch: Vec<PendingTrigger>) -> Outcome {
    if batch.is_empty() {
        return outcome::OK;
    }

    let mut created = Vec::with_capacity(batch.len());
    for trigger in &batch {
        if let Some(id) = create_trigger_stack_ability(game, trigger) {
            created.push(id);
        }
    }

    let order = if created.len() <= 1 {
        created
    } else {
        let chosen = game.prompts.order_simultaneous_triggers(Prompt {
            id: game.clock.new_decision_id(),
            player,
            kind: PromptKind::OrderSimultaneousTriggers { pending: created.clone() },
        })?;
        apply_chosen_order(created, chosen)
    };

    for id in order {
        game.zones.push_to_stack(primitives::game_primitives::StackItemId::StackAbility(id));
    }
    outcome::OK
}

/// The first entry of `chosen` is pushed first (ends up lowest in this
/// batch, resolving last); entries the reply omits or repeats are dropped
/// back in to the end in their original order so a malformed reply can
/// never lose a trigger.
fn apply_chosen_order(created: Vec<StackAbilityId>, chosen: Vec<StackAbilityId>) -> Vec<StackAbilityId> {
    let mut ordered: Vec<StackAbilityId> = chosen.into_iter().filter(|id| created.contains(id)).collect();
    for id in created {
        if !ordered.contains(&id) {
            ordered.push(id);
        }
    }
    ordered
}

fn create_trigger_stack_ability(game: &mut GameState, trigger: &PendingTrigger) -> Option<StackAbilityId> {
    let Some(card) = game.zones.card(trigger.ability_id.card_id) else { return None };
    let definition = registry::lookup(card.card_name);
    let intervening_if = definition.get_ability(trigger.ability_id.number).trigger.as_ref().and_then(|t| t.intervening_if);

    let object_id = game.clock.new_object_id();
    let timestamp = game.clock.new_timestamp();
    Some(game.zones.create_triggered_stack_ability(
        trigger.ability_id,
        data::card_states::stack_ability::StackAbilityKind::Triggered,
        trigger.controller,
        object_id,
        timestamp,
        trigger.intervening_if_at_trigger_time,
        intervening_if,
        Some(trigger.event.clone()),
    ))
}
