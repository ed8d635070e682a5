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
use primitives::game_primitives::{CardType, PlayerName, Subtype, Zone};
use serde::{Deserialize, Serialize};

/// How many objects/players matching a [TargetFilter] must be selected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TargetQuantity {
    Exactly(usize),
    UpTo(usize),
}

/// The object-matching algebra shared by targeting filters, continuous
/// effects' affected-object selection, and sacrifice/filter costs: type
/// inclusion, subtype inclusion, controller relation, and "other than the
/// source".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectFilter {
    pub card_types: Option<EnumSet<CardType>>,
    pub subtypes: Option<EnumSet<Subtype>>,
    pub controller: Option<PlayerFilterKind>,
    /// Excludes the source of the effect that owns this filter, e.g. "other
    /// Elves you control" (the lord itself is excluded even if it matches).
    pub exclude_source: bool,
}

impl ObjectFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_card_types(mut self, card_types: impl Into<EnumSet<CardType>>) -> Self {
        self.card_types = Some(card_types.into());
        self
    }

    pub fn with_subtypes(mut self, subtypes: impl Into<EnumSet<Subtype>>) -> Self {
        self.subtypes = Some(subtypes.into());
        self
    }

    pub fn controlled_by(mut self, controller: PlayerFilterKind) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn excluding_source(mut self) -> Self {
        self.exclude_source = true;
        self
    }
}

/// What a single target slot in an ability's target list may be filled with.
///
/// This is deliberately a closed, data-only predicate language rather than a
/// boxed closure: card definitions describe targeting requirements, they do
/// not implement them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TargetFilter {
    AnyTarget,
    Player { controllers: Option<PlayerFilterKind> },
    Card { zones: EnumSet<Zone>, filter: ObjectFilter },
    StackItem,
    AnyOf(Vec<TargetFilter>),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerFilterKind {
    You,
    Opponents,
    EachPlayer,
}

/// One instance of the word "target" in an ability's oracle text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRequirement {
    pub quantity: TargetQuantity,
    pub filter: TargetFilter,
}
