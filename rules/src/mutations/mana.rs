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

use color_eyre::eyre::eyre;
use data::card_definitions::cost::{Cost, ManaCost};
use data::delegates::scope::Scope;
use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerQueries;
use data::prompts::prompt::{Prompt, PromptKind};
use primitives::game_primitives::{Color, HasCardId, HasSource, PlayerName};
use utils::outcome::{self, Outcome};

use crate::mutations::permanents;
use crate::queries::card_queries;

/// Pays every cost in `costs` in the order listed, as part of activating or
/// casting `scope`'s ability.
///
/// Assumes legality has already been checked (rule 601.2h/602.2h) -- this
/// function does not verify that paying is possible, only applies it.
pub fn pay_costs(game: &mut GameState, scope: Scope, costs: &[Cost]) -> Outcome {
    for cost in costs {
        pay_cost(game, scope, cost)?;
    }
    outcome::OK
}

fn pay_cost(game: &mut GameState, scope: Scope, cost: &Cost) -> Outcome {
    match cost {
        Cost::Mana(mana_cost) => pay_mana(game, scope.controller, mana_cost),
        Cost::TapThis => permanents::tap(game, scope.card_id()),
        Cost::Sacrifice(filter) => {
            let source_id = scope.card_id();
            let legal: Vec<_> = game
                .zones
                .battlefield_controlled_by(scope.controller)
                .filter(|&id| card_queries::matches_filter(game, id, filter, scope.controller, source_id))
                .collect();
            let chosen = game.prompts.sacrifice(Prompt {
                id: game.clock.new_decision_id(),
                player: scope.controller,
                kind: PromptKind::Sacrifice { legal, count: 1 },
            })?;
            for id in chosen {
                permanents::sacrifice(game, scope.source(), id)?;
            }
            outcome::OK
        }
    }
}

/// Spends `mana_cost` from `player`'s mana pool: colored pips first, then
/// the generic component from whatever colors remain.
fn pay_mana(game: &mut GameState, player: PlayerName, mana_cost: &ManaCost) -> Outcome {
    let pool = &mut game.player_mut(player).mana_pool;

    for (color, amount) in [
        (Color::White, mana_cost.white),
        (Color::Blue, mana_cost.blue),
        (Color::Black, mana_cost.black),
        (Color::Red, mana_cost.red),
        (Color::Green, mana_cost.green),
    ] {
        if amount > 0 && !pool.spend(Some(color), amount) {
            return Err(eyre!("insufficient {color:?} mana to pay cost").into());
        }
    }

    let mut remaining = mana_cost.generic;
    for color in [None, Some(Color::White), Some(Color::Blue), Some(Color::Black), Some(Color::Red), Some(Color::Green)]
    {
        while remaining > 0 && pool.spend(color, 1) {
            remaining -= 1;
        }
    }
    if remaining > 0 {
        return Err(eyre!("insufficient mana to pay generic cost").into());
    }

    outcome::OK
}
