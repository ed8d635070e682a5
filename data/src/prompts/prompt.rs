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

use primitives::game_primitives::{CardId, DecisionId, EntityId, PlayerName, StackAbilityId};
use serde::{Deserialize, Serialize};

/// Data for a single decision raised to a player, blocking simulation until a
/// matching [PromptResponse] is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: DecisionId,
    pub player: PlayerName,
    pub kind: PromptKind,
}

/// The kind of choice being requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PromptKind {
    Mulligan,
    MulliganBottomCards { count: usize },
    SelectTargets { ability: StackAbilityId, legal: Vec<EntityId>, min: usize, max: usize },
    ChooseMode { ability: StackAbilityId, mode_count: usize, min: usize, max: usize },
    ChooseXValue { ability: StackAbilityId, max: u64 },
    DeclareAttackers { legal_attackers: Vec<CardId> },
    DeclareBlockers { legal_blockers: Vec<CardId>, attackers: Vec<CardId> },
    OrderSimultaneousTriggers { pending: Vec<StackAbilityId> },
    May { description: String },
    Sacrifice { legal: Vec<CardId>, count: usize },
    Discard { legal: Vec<CardId>, count: usize },
    /// Look at the top `count` cards of your library (rule 701.19a); the
    /// response lists, for each card examined in order, whether it goes to
    /// the bottom of the library instead of staying on top.
    Scry { cards: Vec<CardId> },
    /// Look at the top `count` cards of your library (rule 701.42a); the
    /// response lists which of `cards` to put into the graveyard, the rest
    /// staying on top in the same relative order.
    Surveil { cards: Vec<CardId> },
}

/// The player's answer to a [Prompt], always structurally matched against
/// the [PromptKind] that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PromptResponse {
    Mulligan(bool),
    MulliganBottomCards(Vec<CardId>),
    SelectTargets(Vec<EntityId>),
    ChooseMode(Vec<usize>),
    ChooseXValue(u64),
    DeclareAttackers(Vec<CardId>),
    DeclareBlockers(Vec<(CardId, CardId)>),
    OrderSimultaneousTriggers(Vec<StackAbilityId>),
    May(bool),
    Sacrifice(Vec<CardId>),
    Discard(Vec<CardId>),
    /// Cards (a subset of the prompt's `cards`) to put on the bottom of the
    /// library, in the order they should be stacked there.
    Scry(Vec<CardId>),
    /// Cards (a subset of the prompt's `cards`) to put into the graveyard.
    Surveil(Vec<CardId>),
}
