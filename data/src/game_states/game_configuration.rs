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

use serde::{Deserialize, Serialize};

use crate::core::numerics::LifeValue;

/// Per-game options that affect rules behavior (as opposed to
/// [crate::player_states::player_options::PlayerOptions], which only affect
/// when a player is stopped for priority).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfiguration {
    pub starting_life: LifeValue,
    pub starting_hand_size: usize,

    /// When true, this game is a throwaway fork used to evaluate hypothetical
    /// lines (e.g. by an agent search), and destructive shortcuts such as
    /// skipping undo-log bookkeeping are permitted.
    pub simulation: bool,

    /// Whether players may concede or leave the table; always true for
    /// interactive games, forced false for scenario/regression tests that
    /// drive every action explicitly.
    pub allow_concede: bool,
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self { starting_life: 20, starting_hand_size: 7, simulation: false, allow_concede: true }
    }
}
