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
use primitives::game_primitives::{
    AbilityId, CardId, EntityId, HasCardId, HasController, HasObjectId, HasOwner, HasTimestamp,
    ObjectId, PlayerName, Timestamp, Zone,
};
use serde::{Deserialize, Serialize};

use crate::card_definitions::card_name::CardName;
use crate::card_states::card_kind::CardKind;
use crate::card_states::counters::Counters;
use crate::card_states::zone_object::ZoneObjectTrait;
use crate::core::numerics::{Damage, ManaValue};
use crate::properties::card_properties::CardProperties;

/// Represents the state of a card or card-like object.
///
/// The term "card" is used broadly here: a normal card, a copy of a spell on
/// the stack, a token, or an ability's host object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardState {
    /// Unique identifier for this card, stable across zone moves only for
    /// as long as rules treat it as the same object -- see [Self::object_id].
    pub id: CardId,

    /// Object identity. Minted fresh whenever this card leaves the
    /// battlefield or the stack (rule 400.7), so continuous effects and
    /// delayed triggers that reference a specific object stop applying
    /// across a zone change even though [Self::id] is preserved.
    pub object_id: ObjectId,

    /// Name of the printed card backing this object, used to look up its
    /// [crate::card_definitions::card_definition::CardDefinition].
    pub card_name: CardName,

    pub kind: CardKind,

    /// The player who owns this card. Never changes once set.
    pub owner: PlayerName,

    /// The player currently able to make decisions about this card. Equal
    /// to `owner` except under a control-changing continuous effect.
    pub controller: PlayerName,

    /// Current zone.
    pub zone: Zone,

    /// Whether this card is tapped. Always `Untapped` off the battlefield.
    pub tapped: bool,

    /// True if this permanent hasn't been under its controller's control
    /// continuously since their most recent turn began (R302.6).
    pub summoning_sick: bool,

    pub counters: Counters,

    /// Damage marked this turn. Always 0 off the battlefield.
    pub damage: Damage,

    /// The object this permanent is attached to (for Auras, Equipment,
    /// Fortifications).
    pub attached_to: Option<ObjectId>,

    /// Reverse index: objects currently attached to this one.
    pub attachments: Vec<ObjectId>,

    /// Timestamp at which this object entered its current zone. Used for
    /// layer tie-breaks (rule 613.7) and for library/stack ordering.
    pub timestamp: Timestamp,

    /// The turn number on which this permanent most recently came under its
    /// controller's continuous control, used to compute summoning sickness.
    pub entered_control_turn: Option<TurnNumberSnapshot>,

    // -- Stack-item-only fields; meaningful only while `zone == Zone::Stack`.
    /// Targets chosen when this spell or ability was placed on the stack.
    pub targets: Vec<EntityId>,

    /// Modes chosen for a modal spell or ability, by 0-indexed mode number.
    pub modes: Vec<usize>,

    /// The value chosen for an `X` in this spell's cost, if any.
    pub x_value: Option<ManaValue>,

    /// Snapshot of which colors of mana were spent to cast this spell and
    /// how much of each, captured at cast time. Used by "X is the amount of
    /// red mana spent" style effects.
    pub mana_spent: ManaSpentSnapshot,

    /// False once a "can't be countered" effect has been applied to this
    /// spell.
    pub can_be_countered: bool,

    // -- Instance-only markers.
    pub is_commander: bool,
    pub is_foretold: bool,
    pub was_kicked: bool,

    /// True once this object has attempted to draw from an empty library
    /// (rule 120.3); checked and cleared by state-based actions.
    pub drew_from_empty_library: bool,

    /// Ability number of the stack ability, when this object's zone is
    /// `Stack` and it represents an activated/triggered ability copy rather
    /// than a spell. `None` for a spell copy of the card itself.
    pub activated_or_triggered_ability: Option<AbilityId>,

    /// Players who have had this card revealed to them, independent of the
    /// zone's default visibility.
    pub revealed_to: EnumSet<PlayerName>,

    /// Continuous-effect accumulators for this card, rebuilt from scratch by
    /// the rules crate's layer pass. Always empty off the battlefield.
    #[serde(default)]
    pub properties: CardProperties,
}

/// Snapshot of the turn a permanent came under continuous control, kept
/// separate from [TurnData] so `card_state` doesn't need to depend on every
/// field of the full turn-tracking type.
pub type TurnNumberSnapshot = crate::core::numerics::TurnNumber;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ManaSpentSnapshot {
    pub white: ManaValue,
    pub blue: ManaValue,
    pub black: ManaValue,
    pub red: ManaValue,
    pub green: ManaValue,
    pub colorless: ManaValue,
}

impl ManaSpentSnapshot {
    pub fn total(&self) -> ManaValue {
        self.white + self.blue + self.black + self.red + self.green + self.colorless
    }
}

impl HasCardId for CardState {
    fn card_id(&self) -> CardId {
        self.id
    }
}

impl HasObjectId for CardState {
    fn object_id(&self) -> ObjectId {
        self.object_id
    }
}

impl HasOwner for CardState {
    fn owner(&self) -> PlayerName {
        self.owner
    }
}

impl HasController for CardState {
    fn controller(&self) -> PlayerName {
        self.controller
    }
}

impl HasTimestamp for CardState {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl ZoneObjectTrait for CardState {
    fn targets(&self) -> &[EntityId] {
        &self.targets
    }
}

impl CardState {
    /// Returns true if `viewer` is allowed to see this card's identity: the
    /// zone is public, or the card has been explicitly revealed to them.
    pub fn is_visible_to(&self, viewer: PlayerName) -> bool {
        self.zone.is_public() || self.owner == viewer || self.revealed_to.contains(viewer)
    }
}
