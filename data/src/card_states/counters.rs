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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Counters currently on a card, ability, or player.
///
/// +1/+1 and -1/-1 counters get dedicated fields because they interact with
/// each other (they annihilate pairwise during state-based actions, rule
/// 704.5q) and with power/toughness computation (layer 7d); everything else
/// is an open-ended bag keyed by [CounterKind], matching the "bag of named
/// counters with non-negative integer multiplicities" invariant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Counters {
    /// Quantity of +1/+1 counters.
    pub p1p1: u32,
    /// Quantity of -1/-1 counters.
    pub m1m1: u32,
    /// Quantity of every other counter kind present.
    other: HashMap<CounterKind, u32>,
}

impl Counters {
    pub fn get(&self, kind: CounterKind) -> u32 {
        *self.other.get(&kind).unwrap_or(&0)
    }

    /// Adds `count` counters of `kind`, saturating rather than overflowing.
    pub fn add(&mut self, kind: CounterKind, count: u32) {
        *self.other.entry(kind).or_insert(0) = self.get(kind).saturating_add(count);
    }

    /// Removes up to `count` counters of `kind`, never going below zero.
    pub fn remove(&mut self, kind: CounterKind, count: u32) {
        let remaining = self.get(kind).saturating_sub(count);
        if remaining == 0 {
            self.other.remove(&kind);
        } else {
            self.other.insert(kind, remaining);
        }
    }

    /// Cancels +1/+1 and -1/-1 counters pairwise until at most one kind has a
    /// nonzero count remaining (rule 704.5q).
    pub fn annihilate_plus_minus(&mut self) -> bool {
        let pairs = self.p1p1.min(self.m1m1);
        if pairs == 0 {
            return false;
        }
        self.p1p1 -= pairs;
        self.m1m1 -= pairs;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.p1p1 == 0 && self.m1m1 == 0 && self.other.values().all(|&v| v == 0)
    }
}

/// Named counter kinds other than the dedicated +1/+1 and -1/-1 pair.
///
/// This is a representative subset of the hundreds of named counters that
/// exist in the real game; card behavior tables (`card_definitions`) key
/// into this set, and unrecognized oracle-text counter names are rejected at
/// card-data authoring time rather than modeled here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum CounterKind {
    Loyalty,
    Defense,
    Age,
    Blood,
    Bounty,
    Charge,
    Corruption,
    Credit,
    Depletion,
    Divinity,
    Doom,
    Energy,
    Experience,
    Fade,
    Feather,
    Flood,
    Fungus,
    Gold,
    Hatchling,
    Hoofprint,
    Hourglass,
    Ice,
    Infection,
    Intervention,
    Level,
    Luck,
    Magma,
    Mine,
    Mining,
    Music,
    Net,
    Oil,
    Page,
    Paralyzation,
    Petal,
    Phylactery,
    Phyresis,
    Pin,
    Poison,
    Pressure,
    Quest,
    Rad,
    Ribbon,
    Rust,
    Scream,
    Shield,
    Shred,
    Sleep,
    Sleight,
    Soot,
    Spore,
    Stash,
    Storage,
    Strife,
    Study,
    Stun,
    Suspect,
    Ticket,
    Time,
    Training,
    Trap,
    Treasure,
    Unity,
    Vitality,
    Wage,
    Winch,
    Wind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_minus_counters_annihilate_pairwise() {
        let mut counters = Counters { p1p1: 3, m1m1: 1, other: HashMap::new() };
        assert!(counters.annihilate_plus_minus());
        assert_eq!(counters.p1p1, 2);
        assert_eq!(counters.m1m1, 0);
        assert!(!counters.annihilate_plus_minus());
    }

    #[test]
    fn named_counters_track_independently() {
        let mut counters = Counters::default();
        counters.add(CounterKind::Poison, 3);
        counters.add(CounterKind::Energy, 1);
        assert_eq!(counters.get(CounterKind::Poison), 3);
        counters.remove(CounterKind::Poison, 10);
        assert_eq!(counters.get(CounterKind::Poison), 0);
        assert_eq!(counters.get(CounterKind::Energy), 1);
    }
}
