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

use primitives::game_primitives::{CardId, EntityId, EventId, PlayerName, Source};
use serde::{Deserialize, Serialize};

/// Identifies the kind of rules event that just happened (or is about to
/// happen, for the "would" variants consulted by replacement effects and
/// trigger conditions), independent of the event's payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameEventKind {
    EntersBattlefield,
    WouldEnterBattlefield,
    LeavesBattlefield,
    Dies,
    WouldBeDestroyed,
    Attacks,
    Blocks,
    DealsCombatDamage,
    DealsDamage,
    IsCast,
    IsCountered,
    Draws,
    WouldDraw,
    Discards,
    GainsLife,
    LosesLife,
    BeginStep,
    EndStep,
    ZoneChange,
    /// A player is about to win the game outright (e.g. a replacement effect
    /// turning a would-be empty-library draw into a win), consulted only by
    /// "your opponents can't win the game" style replacement effects.
    WouldWin,
}

/// A firing of a rules event, carried through the trigger-collection pass
/// (C8) so triggered-ability matchers can inspect what happened without
/// needing a reference to the full game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: EventId,
    pub kind: GameEventKind,
    /// The object or player the event is primarily about -- the creature
    /// that died, the player who drew, etc.
    pub subject: EntityId,
    /// The card or ability which caused the event, for "whenever a creature
    /// dies" conditions that need to check "...that was dealt damage by a
    /// red source" style clauses.
    pub source: Source,
    /// The other player or card directly involved, when the event names one
    /// (e.g. the defending player of an Attacks event, the target of a
    /// DealsDamage event already covered by `subject`, the attacker being
    /// blocked).
    pub secondary: Option<EntityId>,
    pub controller_at_time: PlayerName,
}

impl GameEvent {
    pub fn involves_card(&self, card_id: CardId) -> bool {
        matches!(self.subject, EntityId::Card(id) if id == card_id)
            || matches!(self.secondary, Some(EntityId::Card(id)) if id == card_id)
    }
}
