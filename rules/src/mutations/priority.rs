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

use data::game_states::game_state::GameState;
use enumset::EnumSet;
use primitives::game_primitives::PlayerName;
use tracing::{debug, instrument};
use utils::outcome::{self, Outcome};

use crate::layers;
use crate::queries::player_queries;
use crate::resolve;
use crate::steps;

/// Passes priority for `player` (rule 117.3c).
///
/// Once every active player has passed in succession, the top of the stack
/// resolves, or, if the stack is empty, the current step ends.
///
/// Panics if `player` does not currently have priority.
#[instrument(level = "debug", skip(game))]
pub fn pass(game: &mut GameState, player: PlayerName) -> Outcome {
    assert_eq!(game.priority, player, "Player {player:?} does not have priority");
    debug!(?player, ?game.step, "Passing priority");
    game.passed.insert(player);
    layers::recompute(game)?;

    if game.passed.len() >= player_queries::active_player_count(game) {
        game.passed = EnumSet::empty();
        if game.zones.stack().is_empty() {
            steps::advance(game)?;
        } else {
            resolve::resolve_top_of_stack(game)?;
        }
    } else {
        game.priority = player_queries::next_player_after(game, game.priority);
    }

    outcome::OK
}
