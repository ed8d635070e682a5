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

use std::collections::HashSet;

use primitives::game_primitives::{EntityId, PlayerName, Source, Zone};
use serde::{Deserialize, Serialize};

use crate::card_states::counters::CounterKind;
use crate::events::game_event::GameEventKind;

/// Identifies a single registered [ReplacementEffect].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ReplacementEffectId(pub u64);

/// A data-driven predicate over an in-flight event, checked before the event
/// is applied to decide whether a [ReplacementEffect] intercepts it.
///
/// Kept deliberately coarse: most replacement effects only need to restrict
/// by event kind and by which entity the event targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMatcher {
    pub kind: GameEventKind,
    /// If present, this effect only applies when the event's primary
    /// subject is this entity.
    pub subject: Option<EntityId>,
}

/// What happens instead when a replacement effect's matcher fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReplacementAction {
    /// The event does not happen at all.
    Prevent,
    /// The event's numeric quantity (damage, life, cards drawn, ...) is
    /// modified before being applied.
    Modify(EventModification),
    /// The permanent enters tapped.
    EnterTapped,
    /// The permanent enters with additional counters.
    EnterWithCounters { kind: CounterKind, count: u32 },
    /// The event's destination zone changes.
    ChangeDestination(Zone),
    /// The event is skipped entirely (e.g. "skip your draw step").
    Skip,
    /// The event's subject wins the game instead (e.g. Laboratory Maniac's
    /// "if you would draw a card while your library has no cards in it, you
    /// win the game instead"), subject to "opponents can't win" effects.
    Win,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum EventModification {
    Add(i64),
    Subtract(i64),
    SetTo(i64),
    Double,
}

impl EventModification {
    pub fn apply(&self, value: i64) -> i64 {
        match *self {
            EventModification::Add(n) => value.saturating_add(n),
            EventModification::Subtract(n) => (value - n).max(0),
            EventModification::SetTo(n) => n,
            EventModification::Double => value.saturating_mul(2),
        }
    }
}

/// A single instance of a rule 614 replacement effect, registered either by
/// a static ability (regenerated every state-based-action refresh) or by a
/// resolved spell or ability (persists until removed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementEffect {
    pub id: ReplacementEffectId,
    pub source: Source,
    pub controller: PlayerName,
    pub matcher: EventMatcher,
    pub action: ReplacementAction,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReplacementEffectOrigin {
    StaticAbility,
    Resolution,
}

/// Tracks every currently-active replacement effect in a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacementEffectSet {
    effects: Vec<ReplacementEffect>,
    origins: std::collections::HashMap<u64, ReplacementEffectOrigin>,
    one_shot: HashSet<ReplacementEffectId>,
    next_id: u64,
}

impl ReplacementEffectSet {
    pub fn effects(&self) -> &[ReplacementEffect] {
        &self.effects
    }

    fn add(&mut self, mut effect: ReplacementEffect) -> ReplacementEffectId {
        let id = ReplacementEffectId(self.next_id);
        self.next_id += 1;
        effect.id = id;
        self.effects.push(effect);
        id
    }

    pub fn add_static_ability_effect(&mut self, effect: ReplacementEffect) -> ReplacementEffectId {
        let id = self.add(effect);
        self.origins.insert(id.0, ReplacementEffectOrigin::StaticAbility);
        id
    }

    pub fn add_resolution_effect(&mut self, effect: ReplacementEffect) -> ReplacementEffectId {
        let id = self.add(effect);
        self.origins.insert(id.0, ReplacementEffectOrigin::Resolution);
        id
    }

    pub fn add_one_shot_effect(&mut self, effect: ReplacementEffect) -> ReplacementEffectId {
        let id = self.add(effect);
        self.one_shot.insert(id);
        id
    }

    pub fn remove(&mut self, id: ReplacementEffectId) {
        self.effects.retain(|e| e.id != id);
        self.origins.remove(&id.0);
        self.one_shot.remove(&id);
    }

    /// Removes and returns whether `id` was a one-shot effect still pending;
    /// callers consume an effect this way once it has been applied.
    pub fn mark_used(&mut self, id: ReplacementEffectId) -> bool {
        let was_one_shot = self.one_shot.remove(&id);
        if was_one_shot {
            self.remove(id);
        }
        was_one_shot
    }

    /// Regenerates static-ability-derived effects: called by the layer
    /// system before each continuous-effect recomputation.
    pub fn clear_static_ability_effects(&mut self) {
        let ids: Vec<_> = self
            .origins
            .iter()
            .filter(|(_, origin)| **origin == ReplacementEffectOrigin::StaticAbility)
            .map(|(id, _)| ReplacementEffectId(*id))
            .collect();
        for id in ids {
            self.remove(id);
        }
    }

    /// Returns effects whose matcher could apply to an event of `kind`
    /// affecting `subject`, in registration order (callers are responsible
    /// for further APNAP ordering when more than one applies).
    pub fn matching(&self, kind: GameEventKind, subject: EntityId) -> Vec<&ReplacementEffect> {
        self.effects
            .iter()
            .filter(|e| e.matcher.kind == kind && e.matcher.subject.map_or(true, |s| s == subject))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use primitives::game_primitives::{CardId, PlayerName, Source};
    use slotmap::KeyData;

    use super::*;

    fn dummy_card_id() -> CardId {
        CardId::from(KeyData::from_ffi(1))
    }

    #[test]
    fn static_ability_effects_clear_independently_of_resolution_effects() {
        let mut set = ReplacementEffectSet::default();
        let card = dummy_card_id();
        let matcher = EventMatcher { kind: GameEventKind::WouldEnterBattlefield, subject: None };
        let static_id = set.add_static_ability_effect(ReplacementEffect {
            id: ReplacementEffectId(0),
            source: Source::Ability(primitives::game_primitives::AbilityId {
                card_id: card,
                number: primitives::game_primitives::AbilityNumber(0),
            }),
            controller: PlayerName::One,
            matcher: matcher.clone(),
            action: ReplacementAction::EnterTapped,
        });
        let resolution_id = set.add_resolution_effect(ReplacementEffect {
            id: ReplacementEffectId(0),
            source: Source::Game,
            controller: PlayerName::One,
            matcher,
            action: ReplacementAction::Prevent,
        });

        set.clear_static_ability_effects();

        assert_eq!(set.effects().len(), 1);
        assert_eq!(set.effects()[0].id, resolution_id);
        assert_ne!(static_id, resolution_id);
    }

    #[test]
    fn one_shot_effects_are_removed_once_marked_used() {
        let mut set = ReplacementEffectSet::default();
        let matcher = EventMatcher { kind: GameEventKind::WouldBeDestroyed, subject: None };
        let id = set.add_one_shot_effect(ReplacementEffect {
            id: ReplacementEffectId(0),
            source: Source::Game,
            controller: PlayerName::One,
            matcher,
            action: ReplacementAction::Prevent,
        });

        assert!(set.mark_used(id));
        assert!(set.effects().is_empty());
        assert!(!set.mark_used(id));
    }
}
