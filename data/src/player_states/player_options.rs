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

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::game_states::game_phase_step::GamePhaseStep;

/// Per-player configuration governing when simulation should pause to offer
/// priority rather than auto-passing, matching how a human driver vs. a
/// scripted replay would configure a game differently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Steps in which the game should stop for priority during this
    /// player's own turn, even if they have no other legal actions to take.
    pub active_turn_stops: EnumSet<GamePhaseStep>,

    /// Steps in which the game should stop for priority during an
    /// opponent's turn.
    pub inactive_turn_stops: EnumSet<GamePhaseStep>,

    /// If true, automatically pass priority whenever this player has no
    /// legal action other than passing.
    pub auto_pass: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            active_turn_stops: GamePhaseStep::PreCombatMain
                | GamePhaseStep::DeclareAttackers
                | GamePhaseStep::DeclareBlockers
                | GamePhaseStep::PostCombatMain,
            inactive_turn_stops: GamePhaseStep::DeclareAttackers | GamePhaseStep::DeclareBlockers,
            auto_pass: true,
        }
    }
}
