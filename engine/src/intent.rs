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

//! The closed set of actions that can be appended to a game's event log.
//!
//! Every state change a game ever undergoes, whether submitted by a client
//! or derived internally while resolving an effect, is represented as one
//! of these. Replaying the same sequence of [Intent]s against a fresh
//! [data::game_states::game_state::GameState] seeded with the same value
//! reproduces identical state, which is the engine's whole determinism
//! contract.

use data::card_definitions::card_name::CardName;
use data::card_states::counters::CounterKind;
use data::core::numerics::{Damage, ManaValue};
use data::prompts::prompt::PromptResponse;
use primitives::game_primitives::{
    AbilityId, CardId, DecisionId, EntityId, PlayerName, Source, StackItemId, UserId,
};
use serde::{Deserialize, Serialize};

/// Which of a card's counter piles (or a player's poison-style piles) an
/// intent targets.
///
/// +1/+1 and -1/-1 counters get dedicated variants because
/// [data::card_states::counters::Counters] stores them in dedicated fields
/// rather than the open-ended [CounterKind] bag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum CounterSelector {
    Plus1Plus1,
    Minus1Minus1,
    Named(CounterKind),
}

/// An action applied to a game, forming one entry in its event log.
///
/// Serializes as `{"type": "castSpell", "payload": {...}}`, the nested wire
/// shape; see [crate::replay::normalize_intent_json] for the flat shape
/// older logs may use instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Intent {
    /// Seeds the game's PRNG. Must be the first intent in every log; no
    /// shuffle, coin flip, or random choice is valid before it.
    RngSeed { seed: u64 },
    /// A user takes a seat at the table.
    Join { player: PlayerName, user_id: UserId },
    /// Marks a card already present in `player`'s command zone as their
    /// commander (rule 903.3).
    SetCommander { player: PlayerName, card_id: CardId },
    /// Creates `cards` in `player`'s library, in the given order, as the
    /// result of an externally-resolved deck import.
    DeckImportResolved { player: PlayerName, cards: Vec<CardName> },
    /// Randomizes the order of `player`'s library (rule 103.2).
    ShuffleLibrary { player: PlayerName },
    /// `player` draws `count` cards (rule 120.3).
    DrawCards { player: PlayerName, count: usize },
    /// `player`'s reply to a pending [data::prompts::prompt::PromptKind::Mulligan]
    /// decision.
    MulliganDecision { player: PlayerName, keep: bool },
    /// `player`'s reply to a pending
    /// [data::prompts::prompt::PromptKind::MulliganBottomCards] decision.
    MulliganBottomCards { player: PlayerName, cards: Vec<CardId> },
    /// `player` passes priority (rule 117.3c).
    PassPriority { player: PlayerName },
    /// `player` casts the spell at `card_id` (rule 601).
    CastSpell { player: PlayerName, card_id: CardId, targets: Vec<EntityId>, x_value: Option<ManaValue> },
    /// `player` activates one of `ability_id`'s card's abilities (rule 602).
    ActivateAbility { player: PlayerName, ability_id: AbilityId, targets: Vec<EntityId> },
    /// `player` plays the land at `card_id` (rule 305).
    PlayLand { player: PlayerName, card_id: CardId },
    /// Places an item already constructed elsewhere directly onto the top
    /// of the stack, bypassing the normal cast/activate procedure. Used to
    /// seed scenario tests with stack contents and to place spell copies.
    PushStack { item: StackItemId },
    /// Resolves the top object of the stack (rule 608).
    ResolveTop,
    /// `player` declares `attackers` (rule 508.1).
    DeclareAttackers { player: PlayerName, attackers: Vec<CardId> },
    /// Declares `(blocker, attacker)` pairs (rule 509.1).
    DeclareBlockers { blocks: Vec<(CardId, CardId)> },
    /// Assigns and deals damage for the current combat (rule 510).
    DealCombatDamage,
    /// Advances to the next step or phase (rule 500.2).
    NextStep,
    /// Advances to the next turn, skipping through every remaining step of
    /// the current turn first.
    NextTurn,
    /// `player`'s reply to any other pending decision.
    SubmitDecision { player: PlayerName, reply_to: DecisionId, response: PromptResponse },
    /// `player` concedes (rule 104.3a).
    Concede { player: PlayerName },
    /// Deals `amount` damage to `target`. Engine-level: appended to the log
    /// as the concrete record of what a resolving spell or ability did,
    /// since the amount may depend on board state at resolution time that
    /// replay should not need to recompute.
    DealDamage { source: Source, target: EntityId, amount: Damage },
    /// Adds (`delta` positive) or removes (`delta` negative) counters of a
    /// kind from `target`.
    SetCounters { target: EntityId, kind: CounterSelector, delta: i32 },
    /// Creates `count` tokens named `token_name` under `controller`'s
    /// control (rule 111.1).
    CreateToken { controller: PlayerName, token_name: CardName, count: u64 },
    TapPermanent { card_id: CardId },
    UntapPermanent { card_id: CardId },
    /// An externally-driven timer fired for `player`'s pending decision;
    /// applies a conservative default response in its place.
    Timeout { player: PlayerName, reply_to: DecisionId },
}

impl Intent {
    /// The player this intent is attributed to, for logging and
    /// turn-based-action legality checks. `None` for intents with no single
    /// owning player (e.g. [Intent::ResolveTop], which is a consequence of
    /// the game rules rather than a player's choice).
    pub fn player(&self) -> Option<PlayerName> {
        match self {
            Intent::Join { player, .. }
            | Intent::SetCommander { player, .. }
            | Intent::DeckImportResolved { player, .. }
            | Intent::ShuffleLibrary { player }
            | Intent::DrawCards { player, .. }
            | Intent::MulliganDecision { player, .. }
            | Intent::MulliganBottomCards { player, .. }
            | Intent::PassPriority { player }
            | Intent::CastSpell { player, .. }
            | Intent::ActivateAbility { player, .. }
            | Intent::PlayLand { player, .. }
            | Intent::DeclareAttackers { player, .. }
            | Intent::SubmitDecision { player, .. }
            | Intent::Concede { player }
            | Intent::Timeout { player, .. } => Some(*player),
            Intent::RngSeed { .. }
            | Intent::PushStack { .. }
            | Intent::ResolveTop
            | Intent::DeclareBlockers { .. }
            | Intent::DealCombatDamage
            | Intent::NextStep
            | Intent::NextTurn
            | Intent::DealDamage { .. }
            | Intent::SetCounters { .. }
            | Intent::CreateToken { .. }
            | Intent::TapPermanent { .. }
            | Intent::UntapPermanent { .. } => None,
        }
    }
}
