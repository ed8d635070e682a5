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

use crate::core::numerics::ManaValue;
use crate::effects::target_requirement::ObjectFilter;
use primitives::game_primitives::Color;

/// A mana cost expressed as a generic component plus per-color pips.
///
/// Hybrid, Phyrexian, and snow mana are outside the current card set's
/// needs and are not modeled; a card requiring them would need this type
/// extended rather than worked around.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ManaCost {
    pub generic: ManaValue,
    pub white: ManaValue,
    pub blue: ManaValue,
    pub black: ManaValue,
    pub red: ManaValue,
    pub green: ManaValue,
}

impl ManaCost {
    pub fn generic(amount: ManaValue) -> Self {
        Self { generic: amount, ..Default::default() }
    }

    pub fn colored(color: Color, amount: ManaValue) -> Self {
        let mut cost = Self::default();
        match color {
            Color::White => cost.white = amount,
            Color::Blue => cost.blue = amount,
            Color::Black => cost.black = amount,
            Color::Red => cost.red = amount,
            Color::Green => cost.green = amount,
        }
        cost
    }

    pub fn plus(mut self, other: ManaCost) -> Self {
        self.generic += other.generic;
        self.white += other.white;
        self.blue += other.blue;
        self.black += other.black;
        self.red += other.red;
        self.green += other.green;
        self
    }

    /// Mana value (converted mana cost) of this cost.
    pub fn mana_value(&self) -> ManaValue {
        self.generic + self.white + self.blue + self.black + self.red + self.green
    }
}

/// A single component of the total cost of casting a spell or activating an
/// ability. A card's full cost is the conjunction of every [Cost] listed on
/// its ability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Cost {
    Mana(ManaCost),
    /// Tap the permanent this ability belongs to; illegal if it is already
    /// tapped or summoning sick and the ability lacks haste.
    TapThis,
    /// Sacrifice a permanent matching `filter` as part of paying this cost.
    Sacrifice(ObjectFilter),
}
