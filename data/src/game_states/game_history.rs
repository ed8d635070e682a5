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

use std::collections::BTreeMap;

use primitives::game_primitives::PlayerName;
use serde::{Deserialize, Serialize};

use crate::events::game_event::GameEvent;
use crate::game_states::turn_data::TurnData;
use crate::player_states::player_map::PlayerMap;

/// Per-turn, per-player counters consulted by rules that care about "the
/// Nth time this happened this turn" (e.g. the single land per turn rule).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryCounters {
    pub cards_drawn: usize,
    pub lands_played: usize,
}

/// Records every rules event that has happened during a game, keyed by the
/// turn it happened on, so delegates can ask "did a creature die this turn"
/// without replaying the whole log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameHistory {
    entries: BTreeMap<TurnData, Vec<GameEvent>>,
    counters: BTreeMap<TurnData, PlayerMap<HistoryCounters>>,
}

impl GameHistory {
    pub fn for_turn(&self, turn: TurnData) -> impl Iterator<Item = &GameEvent> {
        self.entries.get(&turn).into_iter().flatten()
    }

    pub fn add_event(&mut self, turn: TurnData, event: GameEvent) {
        self.entries.entry(turn).or_default().push(event);
    }

    pub fn counters_for_turn(&self, turn: TurnData, player: PlayerName) -> HistoryCounters {
        self.counters.get(&turn).map(|map| map.get(player).clone()).unwrap_or_default()
    }

    pub fn counters_for_turn_mut(&mut self, turn: TurnData, player: PlayerName) -> &mut HistoryCounters {
        self.counters.entry(turn).or_default().get_mut(player)
    }
}
