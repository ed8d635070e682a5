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

use primitives::game_primitives::Timestamp;
use serde::{Deserialize, Serialize};

/// A layer or sublayer in which a continuous effect applies.
///
/// > 613.1. The values of an object's characteristics are determined by
/// > starting with the actual object... Then all applicable continuous
/// > effects are applied in a series of layers in the following order.
///
/// Ordered so that the derive(Ord) comparison matches rules order (earlier
/// variants apply first).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Layer {
    CopyEffects,
    ControlChangingEffects,
    TextChangingEffects,
    TypeChangingEffects,
    ColorChangingEffects,
    AbilityAddingOrRemovingEffects,
    PowerToughnessSettingEffects,
    PowerToughnessModifyingEffects,
    PowerToughnessSwitchingEffects,
}

/// Orders two continuous effects that apply within the same layer: by
/// timestamp, with ties broken by later application order in rare dependency
/// cases (not modeled here -- dependency reordering is a fixpoint pass in the
/// rules crate, not part of this sort key).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EffectSortingKey {
    pub layer: Option<Layer>,
    pub timestamp: Option<Timestamp>,
}

impl EffectSortingKey {
    pub fn new(layer: Layer, timestamp: Timestamp) -> Self {
        Self { layer: Some(layer), timestamp: Some(timestamp) }
    }
}
