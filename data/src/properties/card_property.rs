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

use enumset::{EnumSet, EnumSetType};
use primitives::game_primitives::Source;
use serde::{Deserialize, Serialize};

use crate::game_states::game_state::GameState;
use crate::properties::duration::Duration;
use crate::properties::layer::{EffectSortingKey, Layer};

/// A single continuous effect contributing to a [CardProperty] accumulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardModifier<T> {
    pub source: Source,
    pub duration: Duration,
    pub sorting_key: EffectSortingKey,
    pub effect: T,
}

impl<T> CardModifier<T> {
    fn active(&self, game: &GameState) -> bool {
        self.duration.is_active(game)
    }
}

/// Accumulates every continuous effect that has been registered against a
/// single characteristic of a single card (e.g. "this creature's power"),
/// recomputed from scratch on every layer pass instead of mutated in place.
///
/// Generic over the effect payload `T`; see the `query_*` inherent impls
/// below for the supported payload shapes (integer deltas/sets, boolean
/// flags, set-membership changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardProperty<T> {
    modifiers: Vec<CardModifier<T>>,
}

impl<T> Default for CardProperty<T> {
    fn default() -> Self {
        Self { modifiers: vec![] }
    }
}

impl<T> CardProperty<T> {
    pub fn add(&mut self, modifier: CardModifier<T>) {
        self.modifiers.push(modifier);
    }

    pub fn add_static(&mut self, layer: Layer, effect: T) {
        self.modifiers.push(CardModifier {
            source: Source::Game,
            duration: Duration::Continuous,
            sorting_key: EffectSortingKey::new(layer, primitives::game_primitives::Timestamp(0)),
            effect,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

/// An integer-valued modifier: either a flat delta ("+1/+1") or a
/// layer-ordered absolute set ("power and toughness become 3/3").
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum IntModifier {
    Add(i64),
    Set(i64),
}

impl CardProperty<IntModifier> {
    /// Applies every active modifier to `current`, applying all `Set`
    /// modifiers in sorting-key order (later ones override earlier ones)
    /// before adding every active `Add` modifier's total.
    pub fn query(&self, game: &GameState, current: i64) -> i64 {
        let mut largest_key = EffectSortingKey::default();
        let mut result = current;
        let mut total_add = 0i64;
        for modifier in &self.modifiers {
            if !modifier.active(game) {
                continue;
            }
            match modifier.effect {
                IntModifier::Set(value) if modifier.sorting_key >= largest_key => {
                    result = value;
                    largest_key = modifier.sorting_key;
                }
                IntModifier::Add(delta) => total_add += delta,
                _ => {}
            }
        }
        result + total_add
    }
}

/// A boolean-valued modifier, combined with short-circuit-free AND/OR
/// semantics matching how "can't" effects interact: any active
/// `cant`-style override wins over a plain grant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FlagModifier {
    Overwrite(bool),
    And(bool),
    Or(bool),
}

impl CardProperty<FlagModifier> {
    pub fn query(&self, game: &GameState, current: bool) -> bool {
        let mut largest_key = EffectSortingKey::default();
        let mut result = current;
        let mut and_acc = true;
        let mut or_acc = false;
        for modifier in &self.modifiers {
            if !modifier.active(game) {
                continue;
            }
            match modifier.effect {
                FlagModifier::Overwrite(value) if modifier.sorting_key >= largest_key => {
                    result = value;
                    largest_key = modifier.sorting_key;
                }
                FlagModifier::And(value) => and_acc &= value,
                FlagModifier::Or(value) => or_acc |= value,
                _ => {}
            }
        }
        (result || or_acc) && and_acc
    }
}

/// An `EnumSet`-valued modifier: an additive grant, or a layer-ordered
/// absolute replacement (used for type- and color-changing effects).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SetModifier<T: EnumSetType> {
    Add(EnumSet<T>),
    Set(EnumSet<T>),
}

impl<T: EnumSetType + Serialize + for<'de> Deserialize<'de>> CardProperty<SetModifier<T>> {
    pub fn query(&self, game: &GameState, current: EnumSet<T>) -> EnumSet<T> {
        let mut largest_key = EffectSortingKey::default();
        let mut result = current;
        for modifier in &self.modifiers {
            if !modifier.active(game) {
                continue;
            }
            match &modifier.effect {
                SetModifier::Set(value) if modifier.sorting_key >= largest_key => {
                    result = *value;
                    largest_key = modifier.sorting_key;
                }
                SetModifier::Add(value) => {
                    result = result.union(*value);
                }
                _ => {}
            }
        }
        result
    }
}
