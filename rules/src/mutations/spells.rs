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

use data::card_definitions::ability_definition::AbilityType;
use data::card_definitions::registry;
use data::delegates::scope::Scope;
use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::GameState;
use primitives::game_primitives::{AbilityId, CardId, EntityId, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::{mana, move_card};
use crate::triggers;

/// Casts the card at `card_id` from `player`'s hand (rule 601): pays its
/// mana cost, then moves it to the stack with `targets` and `x_value`
/// attached.
///
/// Assumes [crate::legality::can_cast_spell] was already checked. Targets
/// must be set only after the move, since [data::card_states::zones::Zones::move_card]
/// clears both `targets` and `modes` on every zone change.
pub fn cast(
    game: &mut GameState,
    player: PlayerName,
    card_id: CardId,
    targets: Vec<EntityId>,
    x_value: Option<data::core::numerics::ManaValue>,
) -> Outcome {
    let card_name = game.zones.card(card_id).map(|c| c.card_name).ok_or_else(|| card_not_found(card_id))?;
    let definition = registry::lookup(card_name);
    let (number, _) = definition
        .all_abilities()
        .find(|(_, a)| a.ability_type == AbilityType::Spell)
        .ok_or_else(|| color_eyre::eyre::eyre!("{card_name:?} has no spell ability"))?;
    let ability_id = AbilityId { card_id, number };
    let scope = Scope { ability_id, controller: player };

    if let Some(mana_cost) = definition.mana_cost {
        mana::pay_costs(game, scope, &[data::card_definitions::cost::Cost::Mana(mana_cost)])?;
    }

    move_card::run(game, Source::Ability(ability_id), card_id, Zone::Stack)?;
    if let Some(card) = game.zones.card_mut(card_id) {
        card.targets = targets;
        card.x_value = x_value;
    }

    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::IsCast,
            subject: EntityId::Card(card_id),
            source: Source::Ability(ability_id),
            secondary: None,
            controller_at_time: player,
        },
    );
    outcome::OK
}

fn card_not_found(id: CardId) -> color_eyre::Report {
    color_eyre::eyre::eyre!("card not found: {id:?}")
}

/// Counters the spell occupying stack slot `target`.
///
/// > 701.5a. To counter a spell or ability means to cancel it, removing it
/// > from the stack. It doesn't resolve and none of its effects occur. A
/// > countered spell is put into its owner's graveyard.
///
/// <https://yawgatog.com/resources/magic-rules/#R7015a>
pub fn counter(game: &mut GameState, source: Source, target: CardId) -> Outcome {
    move_card::run(game, source, target, Zone::Graveyard)
}
