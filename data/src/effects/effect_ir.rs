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

use primitives::game_primitives::Zone;
use serde::{Deserialize, Serialize};

use crate::core::numerics::{LifeValue, ManaValue};
use crate::properties::duration::Duration;

/// A reference to the player an effect step acts on, resolved against the
/// ability's resolution context rather than hard-coded at card-authoring
/// time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerRef {
    /// The player who controls the source of this effect.
    Controller,
    /// Every player in turn order starting with the active player.
    EachPlayer,
    /// Every opponent of the controller.
    EachOpponent,
    /// The player chosen as the Nth target of this ability (0-indexed).
    Target(usize),
}

/// A reference to the object an effect step acts on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ObjectRef {
    /// The permanent, spell, or ability which is the source of this effect.
    ThisSource,
    /// The object chosen as the Nth target of this ability (0-indexed).
    Target(usize),
}

/// A numeric quantity used by an effect step.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum CountExpr {
    Fixed(u64),
    /// The value chosen for this spell or ability's `X` cost.
    XValue,
    /// One for every object matching a count recorded at trigger time (e.g.
    /// "draw a card for each creature you control").
    PerCounterOnSource,
}

/// A single step of a data-driven effect program.
///
/// Resolving an ability means running each [EffectIr] of its definition in
/// order against the current game state; this is the "cards are data, not
/// code" executor -- no card ability is ever represented as a Rust closure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectIr {
    DrawCards { player: PlayerRef, count: CountExpr },
    DiscardCards { player: PlayerRef, count: CountExpr },
    MillCards { player: PlayerRef, count: CountExpr },
    Scry { player: PlayerRef, count: CountExpr },
    Surveil { player: PlayerRef, count: CountExpr },
    GainLife { player: PlayerRef, amount: CountExpr },
    LoseLife { player: PlayerRef, amount: CountExpr },
    DealDamage { target: ObjectRef, amount: CountExpr },
    ModifyPowerToughness {
        target: ObjectRef,
        power_delta: i64,
        toughness_delta: i64,
        duration: Duration,
    },
    CreateToken { controller: PlayerRef, token_name: crate::card_definitions::card_name::CardName, count: CountExpr },
    Destroy { target: ObjectRef },
    Exile { target: ObjectRef },
    ReturnToHand { target: ObjectRef },
    Sacrifice { target: ObjectRef },
    /// Counters the spell occupying the targeted stack slot.
    CounterSpell { target: ObjectRef },
    Tap { target: ObjectRef },
    Untap { target: ObjectRef },
    AddMana { player: PlayerRef, amount: ManaValue, color: Option<primitives::game_primitives::Color> },
    MoveToZone { target: ObjectRef, zone: Zone },
}

/// Convenience constructors used by card definitions for common
/// fixed-amount effects.
impl EffectIr {
    pub fn draw(player: PlayerRef, count: u64) -> Self {
        EffectIr::DrawCards { player, count: CountExpr::Fixed(count) }
    }

    pub fn gain_life(player: PlayerRef, amount: LifeValue) -> Self {
        EffectIr::GainLife { player, amount: CountExpr::Fixed(amount as u64) }
    }
}
