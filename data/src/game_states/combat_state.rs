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

use primitives::game_primitives::{CardId, PlayerName};
use serde::{Deserialize, Serialize};

pub type AttackerId = CardId;
pub type BlockerId = CardId;

/// Tracks which creatures are attacking, whom they're attacking, and how
/// they've been blocked, for the combat phases of a single turn.
///
/// `None` outside of combat; planeswalkers and battles as attack targets are
/// out of scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatState {
    attackers: BTreeMap<AttackerId, PlayerName>,
    /// Blocker -> ordered list of attackers it is blocking.
    blocks: BTreeMap<BlockerId, Vec<AttackerId>>,
}

impl CombatState {
    pub fn declare_attacker(&mut self, attacker: AttackerId, defending_player: PlayerName) {
        self.attackers.insert(attacker, defending_player);
    }

    pub fn declare_block(&mut self, blocker: BlockerId, attacker: AttackerId) {
        self.blocks.entry(blocker).or_default().push(attacker);
    }

    pub fn is_attacking(&self, card: CardId) -> bool {
        self.attackers.contains_key(&card)
    }

    pub fn defending_player(&self, attacker: AttackerId) -> Option<PlayerName> {
        self.attackers.get(&attacker).copied()
    }

    pub fn attackers(&self) -> impl Iterator<Item = AttackerId> + '_ {
        self.attackers.keys().copied()
    }

    /// Every attacker currently blocked by at least one creature.
    pub fn blocked_attackers(&self) -> impl Iterator<Item = AttackerId> + '_ {
        self.blocks.values().flatten().copied()
    }

    pub fn is_blocked(&self, attacker: AttackerId) -> bool {
        self.blocks.values().any(|blockers| blockers.contains(&attacker))
    }

    pub fn blockers_of(&self, attacker: AttackerId) -> Vec<BlockerId> {
        self.blocks
            .iter()
            .filter(|(_, attackers)| attackers.contains(&attacker))
            .map(|(blocker, _)| *blocker)
            .collect()
    }

    pub fn attackers_blocked_by(&self, blocker: BlockerId) -> &[AttackerId] {
        self.blocks.get(&blocker).map(Vec::as_slice).unwrap_or(&[])
    }
}
