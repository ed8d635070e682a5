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
use primitives::game_primitives::Zone;
use serde::{Deserialize, Serialize};

use crate::card_definitions::cost::Cost;
use crate::delegates::trigger::TriggerCondition;
use crate::effects::effect_ir::EffectIr;
use crate::effects::replacement::ReplacementAction;
use crate::effects::target_requirement::{ObjectFilter, TargetRequirement};
use crate::events::game_event::GameEventKind;
use crate::properties::layer::Layer;

/// Which of the five kinds of ability (113.3) an [AbilityDefinition]
/// describes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum AbilityType {
    /// A spell ability: followed as instructions while an instant or
    /// sorcery resolves.
    Spell,
    /// An activated ability: `[Cost]: [Effect]`.
    Activated,
    /// A triggered ability: fires when its [AbilityDefinition::trigger]
    /// condition matches a game event.
    Triggered,
    /// A static ability that continuously applies while the source is in
    /// the zone(s) it functions in; modeled as a standing continuous
    /// effect rather than a one-shot effect list.
    Static,
}

/// Describes a static ability's continuous effect in the layer system
/// (rule 613), entirely as data: the layer it applies in, which objects it
/// affects, and the power/toughness delta it contributes (layer 7c). Grows
/// additional modifier kinds (ability grants, type changes) as cards that
/// need them are added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuousEffectDescriptor {
    pub layer: Layer,
    pub affects: ObjectFilter,
    pub power_delta: i64,
    pub toughness_delta: i64,
}

/// Which entity a [StaticReplacementDescriptor]'s matcher is scoped to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReplacementSubjectScope {
    /// The event's subject must be this ability's controller (e.g. "if
    /// you would draw a card while your library has no cards in it").
    You,
    /// The matcher applies regardless of who the event's subject is (e.g.
    /// "your opponents can't win the game").
    Anything,
}

/// Describes a static ability's standing rule 614 replacement effect,
/// entirely as data, analogous to [ContinuousEffectDescriptor] for the
/// power/toughness layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticReplacementDescriptor {
    pub event_kind: GameEventKind,
    pub subject: ReplacementSubjectScope,
    pub action: ReplacementAction,
}

/// The game-rules definition of one ability of a card: one entry per clause
/// of its oracle text, in order.
///
/// Unlike a closure-based ability system, every field here is plain data;
/// the interpreter that walks [AbilityDefinition::effects] lives in the
/// rules crate, not on this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub ability_type: AbilityType,

    /// Zones in which this ability functions. Static and triggered
    /// abilities on a creature typically function only on the battlefield;
    /// an activated mana ability on a land is the same. A few abilities
    /// (flashback, abilities of instants) function from other zones.
    pub zones: EnumSet<Zone>,

    /// Costs that must be paid to activate this ability. Empty for static
    /// and triggered abilities, and for spell abilities (the spell's own
    /// mana cost is tracked on [crate::card_definitions::card_definition::CardDefinition]).
    pub costs: Vec<Cost>,

    /// One entry per use of the word "target" in this ability's oracle
    /// text, in order.
    pub targets: Vec<TargetRequirement>,

    /// Present only for [AbilityType::Triggered] abilities.
    pub trigger: Option<TriggerCondition>,

    /// Present only for [AbilityType::Static] abilities describing a
    /// continuous effect.
    pub continuous_effect: Option<ContinuousEffectDescriptor>,

    /// Present only for [AbilityType::Static] abilities describing a
    /// standing replacement effect (mutually exclusive with
    /// [Self::continuous_effect] in every card defined so far, though
    /// nothing requires that).
    pub static_replacement: Option<StaticReplacementDescriptor>,

    /// The steps this ability performs when it resolves (spell and
    /// activated/triggered abilities), applied in order by the effect IR
    /// executor. Always empty for static abilities, whose effect is
    /// entirely described by [Self::continuous_effect].
    pub effects: Vec<EffectIr>,

    /// True for an activated ability that produces mana and meets 605.1a's
    /// other requirements (no targets, cannot be a loyalty ability): it does
    /// not use the stack and cannot be responded to.
    pub is_mana_ability: bool,
}

impl AbilityDefinition {
    /// A spell ability: the instructions an instant or sorcery performs
    /// when it resolves.
    pub fn spell(targets: Vec<TargetRequirement>, effects: Vec<EffectIr>) -> Self {
        Self {
            ability_type: AbilityType::Spell,
            zones: Zone::Stack.into(),
            costs: vec![],
            targets,
            trigger: None,
            continuous_effect: None,
            static_replacement: None,
            effects,
            is_mana_ability: false,
        }
    }

    /// An activated ability available while the source is on the
    /// battlefield.
    pub fn activated(
        costs: Vec<Cost>,
        targets: Vec<TargetRequirement>,
        effects: Vec<EffectIr>,
    ) -> Self {
        Self {
            ability_type: AbilityType::Activated,
            zones: Zone::Battlefield.into(),
            costs,
            targets,
            trigger: None,
            continuous_effect: None,
            static_replacement: None,
            effects,
            is_mana_ability: false,
        }
    }

    /// An activated mana ability: no targets, does not use the stack.
    pub fn mana_ability(costs: Vec<Cost>, effects: Vec<EffectIr>) -> Self {
        Self { is_mana_ability: true, ..Self::activated(costs, vec![], effects) }
    }

    /// A triggered ability that fires while the source is on the
    /// battlefield.
    pub fn triggered(trigger: TriggerCondition, effects: Vec<EffectIr>) -> Self {
        Self {
            ability_type: AbilityType::Triggered,
            zones: Zone::Battlefield.into(),
            costs: vec![],
            targets: vec![],
            trigger: Some(trigger),
            continuous_effect: None,
            static_replacement: None,
            effects,
            is_mana_ability: false,
        }
    }

    /// A static ability granting a power/toughness continuous effect while
    /// the source is on the battlefield.
    pub fn static_power_toughness(
        layer: Layer,
        affects: ObjectFilter,
        power_delta: i64,
        toughness_delta: i64,
    ) -> Self {
        Self {
            ability_type: AbilityType::Static,
            zones: Zone::Battlefield.into(),
            costs: vec![],
            targets: vec![],
            trigger: None,
            continuous_effect: Some(ContinuousEffectDescriptor {
                layer,
                affects,
                power_delta,
                toughness_delta,
            }),
            static_replacement: None,
            effects: vec![],
            is_mana_ability: false,
        }
    }

    /// A static ability maintaining a standing replacement effect (rule 614)
    /// while the source is on the battlefield, e.g. "if you would draw a
    /// card while your library has no cards in it, you win the game
    /// instead" or "your opponents can't win the game".
    pub fn static_replacement(
        event_kind: GameEventKind,
        subject: ReplacementSubjectScope,
        action: ReplacementAction,
    ) -> Self {
        Self {
            ability_type: AbilityType::Static,
            zones: Zone::Battlefield.into(),
            costs: vec![],
            targets: vec![],
            trigger: None,
            continuous_effect: None,
            static_replacement: Some(StaticReplacementDescriptor { event_kind, subject, action }),
            effects: vec![],
            is_mana_ability: false,
        }
    }
}
