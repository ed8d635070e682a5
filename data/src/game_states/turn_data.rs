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

use primitives::game_primitives::PlayerName;
use serde::{Deserialize, Serialize};

use crate::core::numerics::TurnNumber;

/// Identifies a single turn within a game, used as a BTreeMap key for
/// per-turn history and as the unit `UntilEndOfTurn` durations compare
/// against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct TurnData {
    pub active_player: PlayerName,
    pub turn_number: TurnNumber,
}
