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

//! Activating non-mana activated abilities (rule 602).

use data::card_definitions::registry;
use data::card_states::stack_ability::StackAbilityKind;
use data::delegates::scope::Scope;
use data::game_states::game_state::GameState;
use primitives::game_primitives::{AbilityId, EntityId, PlayerName, StackItemId};
use utils::outcome::{self, Outcome};

use crate::mutations::mana;

/// Activates `ability_id`, controlled by `player`: pays its costs, then
/// places a copy of it on the stack with `targets` attached (rule 602.2).
///
/// Mana abilities never reach here -- they resolve immediately and do not
/// use the stack (rule 605.3a); see [crate::legality::can_activate_ability].
pub fn activate(
    game: &mut GameState,
    player: PlayerName,
    ability_id: AbilityId,
    targets: Vec<EntityId>,
) -> Outcome {
    let card_name = game.zones.card(ability_id.card_id).map(|c| c.card_name).ok_or_else(|| card_not_found(ability_id))?;
    let ability = registry::lookup(card_name).get_ability(ability_id.number).clone();
    let scope = Scope { ability_id, controller: player };

    mana::pay_costs(game, scope, &ability.costs)?;

    let object_id = game.clock.new_object_id();
    let timestamp = game.clock.new_timestamp();
    let stack_ability_id = game.zones.create_stack_ability(
        ability_id,
        StackAbilityKind::Activated,
        player,
        object_id,
        timestamp,
        None,
    );
    game.zones.stack_ability_mut(stack_ability_id).targets = targets;
    game.zones.push_to_stack(StackItemId::StackAbility(stack_ability_id));
    outcome::OK
}

fn card_not_found(ability_id: AbilityId) -> color_eyre::Report {
    color_eyre::eyre::eyre!("card not found: {:?}", ability_id.card_id)
}
