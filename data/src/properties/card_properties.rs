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

use serde::{Deserialize, Serialize};

use crate::properties::card_property::IntModifier;
use crate::properties::card_property::CardProperty;

/// Per-card accumulators for continuous effects (rule 613), recomputed from
/// scratch by the rules crate's layer pass on every priority check rather
/// than mutated in place.
///
/// A card's printed power/toughness lives on its
/// [crate::card_definitions::card_definition::CardDefinition] instead of
/// here; these accumulators hold only the deltas continuous effects
/// contribute on top of that base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardProperties {
    pub power: CardProperty<IntModifier>,
    pub toughness: CardProperty<IntModifier>,
}

impl CardProperties {
    /// Drops every modifier, leaving the accumulators ready for the next
    /// layer pass to repopulate.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
