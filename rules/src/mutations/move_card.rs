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

use data::card_states::card_kind::CardKind;
use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::GameState;
use primitives::game_primitives::{CardId, EntityId, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::replacement;
use crate::triggers;

/// Moves a card to a new zone, minting a fresh object identity (rule 400.7),
/// resetting battlefield-only state left behind, and emitting the
/// enter/leave game events that feed the triggered-ability collection pass.
///
/// Every zone change in the rules crate should go through this function
/// rather than [data::card_states::zones::Zones::move_card] directly, so that
/// triggers can observe the move.
pub fn run(game: &mut GameState, source: Source, id: CardId, zone: Zone) -> Outcome {
    let card = game.zones.card(id).ok_or_else(|| card_not_found(id))?;
    let old_zone = card.zone;
    let controller = card.controller;
    let kind = card.kind;

    if old_zone == Zone::Battlefield {
        on_leave_battlefield(game, source, id, controller)?;
    }

    let entry_plan = if zone == Zone::Battlefield {
        Some(replacement::plan_battlefield_entry(game, EntityId::Card(id)))
    } else {
        None
    };
    let zone = entry_plan.as_ref().map(|plan| plan.zone).unwrap_or(zone);

    let new_object_id = game.clock.new_object_id();
    let timestamp = game.clock.new_timestamp();
    game.zones.move_card(id, zone, new_object_id, timestamp)?;

    // Tokens that leave the battlefield cease to exist once the zone change
    // has been fully applied (rule 111.7); nothing past this point should
    // assume `id` is still resolvable.
    if old_zone == Zone::Battlefield && zone != Zone::Battlefield && kind == CardKind::Token {
        game.zones.destroy_card(id)?;
        return outcome::OK;
    }

    if zone == Zone::Battlefield {
        let turn = game.turn.turn_number;
        let card = game.zones.card_mut(id).ok_or_else(|| card_not_found(id))?;
        card.entered_control_turn = Some(turn);
        card.summoning_sick = true;
        if let Some(plan) = &entry_plan {
            card.tapped = plan.tapped;
        }
    }
    if let Some(plan) = &entry_plan {
        for &(counter_kind, count) in &plan.counters {
            let Some(card) = game.zones.card_mut(id) else { continue };
            card.counters.add(counter_kind, count);
        }
    }

    if zone == Zone::Battlefield {
        let event_id = game.clock.new_event_id();
        triggers::collect(
            game,
            GameEvent {
                id: event_id,
                kind: GameEventKind::EntersBattlefield,
                subject: EntityId::Card(id),
                source,
                secondary: None,
                controller_at_time: controller,
            },
        );
    }

    outcome::OK
}

fn on_leave_battlefield(
    game: &mut GameState,
    source: Source,
    id: CardId,
    controller: primitives::game_primitives::PlayerName,
) -> Outcome {
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::LeavesBattlefield,
            subject: EntityId::Card(id),
            source,
            secondary: None,
            controller_at_time: controller,
        },
    );

    let card = game.zones.card_mut(id).ok_or_else(|| card_not_found(id))?;
    card.tapped = false;
    card.damage = 0;
    card.attached_to = None;
    card.attachments.clear();
    card.controller = card.owner;
    outcome::OK
}

fn card_not_found(id: CardId) -> color_eyre::Report {
    color_eyre::eyre::eyre!("card not found: {id:?}")
}
