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

use primitives::game_primitives::{
    AbilityId, EntityId, HasCardId, HasController, HasObjectId, HasOwner, HasTimestamp, ObjectId,
    PlayerName, StackAbilityId, Timestamp,
};
use serde::{Deserialize, Serialize};

use crate::card_states::zone_object::ZoneObjectTrait;
use crate::delegates::trigger::InterveningIf;
use crate::events::game_event::GameEvent;

/// The kind of ability that created a [StackAbilityState].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum StackAbilityKind {
    Activated,
    Triggered,
    ManaAbilityCopy,
}

/// Represents the state of a triggered or activated ability while it
/// occupies a slot on the stack, separate from [crate::card_states::card_state::CardState]
/// because it is not backed by an owned card object of its own -- it shares
/// identity with the `source` permanent or spell that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackAbilityState {
    pub id: StackAbilityId,

    pub object_id: ObjectId,

    /// The ability definition which produced this stack item.
    pub ability_id: AbilityId,

    pub kind: StackAbilityKind,

    pub owner: PlayerName,

    pub controller: PlayerName,

    pub timestamp: Timestamp,

    pub targets: Vec<EntityId>,

    pub modes: Vec<usize>,

    /// The intervening-if clause's value as evaluated at trigger time, for
    /// triggered abilities. Re-evaluated at resolution (rule 603.4).
    pub intervening_if_at_trigger_time: Option<bool>,

    /// The clause to re-check at resolution, and the event that caused this
    /// ability to trigger, carried along so that re-check can be against
    /// the same subject/secondary the ability triggered on.
    pub intervening_if: Option<InterveningIf>,
    pub triggering_event: Option<GameEvent>,
}

impl HasObjectId for StackAbilityState {
    fn object_id(&self) -> ObjectId {
        self.object_id
    }
}

impl HasCardId for StackAbilityState {
    fn card_id(&self) -> primitives::game_primitives::CardId {
        self.ability_id.card_id
    }
}

impl HasOwner for StackAbilityState {
    fn owner(&self) -> PlayerName {
        self.owner
    }
}

impl HasController for StackAbilityState {
    fn controller(&self) -> PlayerName {
        self.controller
    }
}

impl HasTimestamp for StackAbilityState {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl ZoneObjectTrait for StackAbilityState {
    fn targets(&self) -> &[EntityId] {
        &self.targets
    }
}
