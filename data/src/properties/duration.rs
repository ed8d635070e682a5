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

use primitives::game_primitives::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::numerics::TurnNumber;
use crate::game_states::game_state::GameState;

/// Controls how long a continuous effect, modifier, or one-shot marker
/// continues to apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Duration {
    /// Applies for as long as the game continues.
    Continuous,
    /// Applies while the named object remains the same object (i.e. until
    /// it changes zones or the game ends).
    WhileOnBattlefield(ObjectId),
    /// Applies while the named object remains on the stack.
    WhileOnStack(ObjectId),
    /// Applies while the named object is on the battlefield, but only
    /// during the given turn.
    UntilEndOfTurn(TurnNumber),
}

impl Duration {
    /// Returns whether a modifier with this duration currently applies.
    pub fn is_active(&self, game: &GameState) -> bool {
        match *self {
            Duration::Continuous => true,
            Duration::WhileOnBattlefield(object_id) => game.zones.object_on_battlefield(object_id),
            Duration::WhileOnStack(object_id) => game.zones.object_on_stack(object_id),
            Duration::UntilEndOfTurn(turn) => game.turn.turn_number == turn,
        }
    }
}
