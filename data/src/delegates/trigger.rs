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

use primitives::game_primitives::{AbilityId, PlayerName};
use serde::{Deserialize, Serialize};

use crate::events::game_event::{GameEvent, GameEventKind};

/// Which entity a [TriggerCondition] requires the firing event's subject to
/// be, relative to the ability's host card.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TriggerSubject {
    /// The event's subject is this ability's host card itself.
    ThisCard,
    /// The event's subject is any permanent controlled by this ability's
    /// controller.
    AnythingYouControl,
    /// The event's subject is any permanent controlled by an opponent of
    /// this ability's controller.
    AnythingAnOpponentControls,
    /// The event may be about anything.
    Anything,
}

/// A numeric comparison used by [InterveningIf] clauses.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    Less,
    Greater,
}

impl Comparison {
    pub fn evaluate(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparison::LessOrEqual => lhs <= rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
            Comparison::Equal => lhs == rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

/// A condition re-checked at resolution time in addition to at trigger time
/// (rule 603.4, "intervening if"). A closed set of common clauses rather
/// than an arbitrary predicate, consistent with abilities being described as
/// data.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum InterveningIf {
    /// The ability's source is still on the battlefield.
    SourceStillOnBattlefield,
    /// The ability's controller still controls the source.
    ControllerStillControlsSource,
    /// The hand size of the event's subject player satisfies `comparison`
    /// against `value`, e.g. "if that player has two or fewer cards in
    /// hand".
    EventSubjectHandSize { comparison: Comparison, value: usize },
    /// Like [Self::EventSubjectHandSize], but checked against the hand size
    /// of the event's `secondary` entity rather than its subject -- for
    /// clauses about the player an event happened *to* rather than the one
    /// (or the card) it happened *to cause*, e.g. "whenever this deals
    /// damage to a player, if that player has two or fewer cards in hand".
    EventSecondaryHandSize { comparison: Comparison, value: usize },
}

/// Describes when a triggered ability fires, in data form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriggerCondition {
    pub event_kind: GameEventKind,
    pub subject: TriggerSubject,
    pub intervening_if: Option<InterveningIf>,
}

/// A triggered ability that has fired and is waiting to be placed on the
/// stack, captured between the event that caused it and the next time a
/// player would receive priority (C8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTrigger {
    pub ability_id: AbilityId,
    pub controller: PlayerName,
    pub event: GameEvent,
    /// The intervening-if clause's value as evaluated at the moment of
    /// triggering, using three-valued logic so "unknown" doesn't silently
    /// become "true".
    pub intervening_if_at_trigger_time: Option<bool>,
}
