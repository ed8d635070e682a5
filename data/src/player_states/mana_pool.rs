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

use primitives::game_primitives::Color;
use serde::{Deserialize, Serialize};

use crate::core::numerics::ManaValue;

/// Mana currently available to a player, empty at the start and end of each
/// step and phase (rule 500.4).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ManaPool {
    pub white: ManaValue,
    pub blue: ManaValue,
    pub black: ManaValue,
    pub red: ManaValue,
    pub green: ManaValue,
    pub colorless: ManaValue,
}

impl ManaPool {
    pub fn total(&self) -> ManaValue {
        self.white + self.blue + self.black + self.red + self.green + self.colorless
    }

    pub fn add_colored(&mut self, color: Color, amount: ManaValue) {
        *self.slot_mut(Some(color)) += amount;
    }

    pub fn add_colorless(&mut self, amount: ManaValue) {
        self.colorless += amount;
    }

    /// Spends `amount` of the given color (or colorless if `None`), returning
    /// false without changing anything if there isn't enough available.
    pub fn spend(&mut self, color: Option<Color>, amount: ManaValue) -> bool {
        let slot = self.slot_mut(color);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    pub fn empty(&mut self) {
        *self = ManaPool::default();
    }

    fn slot_mut(&mut self, color: Option<Color>) -> &mut ManaValue {
        match color {
            Some(Color::White) => &mut self.white,
            Some(Color::Blue) => &mut self.blue,
            Some(Color::Black) => &mut self.black,
            Some(Color::Red) => &mut self.red,
            Some(Color::Green) => &mut self.green,
            None => &mut self.colorless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_more_than_available_leaves_pool_unchanged() {
        let mut pool = ManaPool { red: 1, ..Default::default() };
        assert!(!pool.spend(Some(Color::Red), 2));
        assert_eq!(pool.red, 1);
        assert!(pool.spend(Some(Color::Red), 1));
        assert_eq!(pool.red, 0);
    }
}
