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

/// The high-level lifecycle state of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game has been created but turn order and starting hands have not
    /// yet been resolved.
    NotStarted,
    /// Normal gameplay is in progress.
    Playing,
    /// The game has ended. An empty `winners` list means the game was a
    /// draw.
    GameOver { winners: Vec<PlayerName> },
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver { .. })
    }
}
