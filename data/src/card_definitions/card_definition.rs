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
use primitives::game_primitives::{AbilityNumber, CardSupertype, CardType, Color, Subtype};
use serde::{Deserialize, Serialize};

use crate::card_definitions::ability_definition::AbilityDefinition;
use crate::card_definitions::card_name::CardName;
use crate::card_definitions::cost::ManaCost;
use crate::core::numerics::{Power, Toughness};

/// The immutable printed-card record for a named card: everything that
/// never changes once printed. Overlays (counters, continuous effects,
/// temporary type changes) live on [crate::card_states::card_state::CardState]
/// instead, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: CardName,
    pub mana_cost: Option<ManaCost>,
    pub supertypes: EnumSet<CardSupertype>,
    pub card_types: EnumSet<CardType>,
    pub subtypes: EnumSet<Subtype>,
    pub colors: EnumSet<Color>,
    /// Base power/toughness, for creatures and vehicles. `None` for cards
    /// with no printed power/toughness.
    pub base_power_toughness: Option<(Power, Toughness)>,
    /// One entry per clause of oracle text, in order.
    abilities: Vec<AbilityDefinition>,
}

impl CardDefinition {
    pub fn new(name: CardName) -> Self {
        Self {
            name,
            mana_cost: None,
            supertypes: EnumSet::empty(),
            card_types: EnumSet::empty(),
            subtypes: EnumSet::empty(),
            colors: EnumSet::empty(),
            base_power_toughness: None,
            abilities: vec![],
        }
    }

    pub fn mana_cost(mut self, cost: ManaCost) -> Self {
        self.mana_cost = Some(cost);
        self
    }

    pub fn supertypes(mut self, supertypes: impl Into<EnumSet<CardSupertype>>) -> Self {
        self.supertypes = supertypes.into();
        self
    }

    pub fn card_types(mut self, card_types: impl Into<EnumSet<CardType>>) -> Self {
        self.card_types = card_types.into();
        self
    }

    pub fn subtypes(mut self, subtypes: impl Into<EnumSet<Subtype>>) -> Self {
        self.subtypes = subtypes.into();
        self
    }

    pub fn colors(mut self, colors: impl Into<EnumSet<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    pub fn power_toughness(mut self, power: Power, toughness: Toughness) -> Self {
        self.base_power_toughness = Some((power, toughness));
        self
    }

    /// Adds the next ability in oracle-text order.
    pub fn ability(mut self, ability: AbilityDefinition) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn all_abilities(&self) -> impl Iterator<Item = (AbilityNumber, &AbilityDefinition)> {
        self.abilities.iter().enumerate().map(|(i, ability)| (AbilityNumber(i), ability))
    }

    pub fn get_ability(&self, number: AbilityNumber) -> &AbilityDefinition {
        self.abilities
            .get(number.0)
            .unwrap_or_else(|| panic!("{:?} has no ability {}", self.name, number.0))
    }
}
