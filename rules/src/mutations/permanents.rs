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

use data::card_definitions::card_name::CardName;
use data::card_states::card_kind::CardKind;
use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::GameState;
use data::game_states::state_based_event::StateBasedEvent;
use primitives::game_primitives::{CardId, EntityId, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;
use crate::replacement;
use crate::triggers;

/// Taps `id`. A no-op if it is already tapped (rule 701.21b).
pub fn tap(game: &mut GameState, id: CardId) -> Outcome {
    let Some(card) = game.zones.card_mut(id) else { return outcome::OK };
    card.tapped = true;
    outcome::OK
}

/// Untaps `id`.
pub fn untap(game: &mut GameState, id: CardId) -> Outcome {
    let Some(card) = game.zones.card_mut(id) else { return outcome::OK };
    card.tapped = false;
    outcome::OK
}

/// Marks `amount` damage on `id` and queues a state-based check.
///
/// > 120.3c. Damage dealt to a permanent doesn't destroy it. Instead, the
/// > game checks at state-based action speed whether the amount of damage
/// > marked on a creature is greater than or equal to its toughness.
pub fn mark_damage(game: &mut GameState, id: CardId, amount: data::core::numerics::Damage) -> Outcome {
    if amount == 0 {
        return outcome::OK;
    }
    let Some(card) = game.zones.card_mut(id) else { return outcome::OK };
    card.damage += amount;
    game.add_state_based_event(StateBasedEvent::CreatureDamaged(id));
    outcome::OK
}

/// Destroys `id` (rule 701.6a): moves it to its owner's graveyard, unless a
/// replacement effect (e.g. indestructible, regeneration) prevents it.
pub fn destroy(game: &mut GameState, source: Source, id: CardId) -> Outcome {
    if replacement::is_prevented(game, GameEventKind::WouldBeDestroyed, EntityId::Card(id)) {
        return outcome::OK;
    }
    move_card::run(game, source, id, Zone::Graveyard)
}

/// `id`'s controller sacrifices it (rule 701.20a): like destruction, but
/// not an instance of "destroy" and so immune to "regenerate" or
/// indestructible effects. Not yet distinguished from [destroy] since
/// neither is modeled here.
pub fn sacrifice(game: &mut GameState, source: Source, id: CardId) -> Outcome {
    move_card::run(game, source, id, Zone::Graveyard)
}

/// Creates `count` copies of the token named `token_name`, owned and
/// controlled by `controller`, directly on the battlefield (rule 111.1).
pub fn create_token(
    game: &mut GameState,
    source: Source,
    controller: PlayerName,
    token_name: CardName,
    count: u64,
) -> Outcome {
    for _ in 0..count {
        let object_id = game.clock.new_object_id();
        let timestamp = game.clock.new_timestamp();
        let id = game.zones.create_card_in_zone(
            token_name,
            CardKind::Token,
            controller,
            Zone::Battlefield,
            object_id,
            timestamp,
        );
        let turn = game.turn.turn_number;
        let card = game.zones.card_mut(id).expect("just created");
        card.entered_control_turn = Some(turn);
        card.summoning_sick = true;

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
