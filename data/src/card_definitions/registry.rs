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

use std::collections::BTreeMap;

use enumset::EnumSet;
use once_cell::sync::Lazy;
use primitives::game_primitives::{CardSupertype, CardType, Color, Subtype};

use crate::card_definitions::ability_definition::{AbilityDefinition, ReplacementSubjectScope};
use crate::card_definitions::card_definition::CardDefinition;
use crate::card_definitions::card_name::{self, CardName};
use crate::card_definitions::cost::{Cost, ManaCost};
use crate::delegates::trigger::{Comparison, InterveningIf, TriggerCondition, TriggerSubject};
use crate::events::game_event::GameEventKind;
use crate::effects::effect_ir::{EffectIr, PlayerRef};
use crate::effects::replacement::ReplacementAction;
use crate::effects::target_requirement::{
    ObjectFilter, PlayerFilterKind, TargetFilter, TargetQuantity, TargetRequirement,
};
use crate::properties::layer::Layer;

fn basic_land(name: CardName, subtype: Subtype, color: Color) -> CardDefinition {
    CardDefinition::new(name)
        .supertypes(CardSupertype::Basic)
        .card_types(CardType::Land)
        .subtypes(subtype)
        .ability(AbilityDefinition::mana_ability(
            vec![Cost::TapThis],
            vec![EffectIr::AddMana { player: PlayerRef::Controller, amount: 1, color: Some(color) }],
        ))
}

fn grizzly_bears() -> CardDefinition {
    CardDefinition::new(card_name::GRIZZLY_BEARS)
        .mana_cost(ManaCost::generic(1).plus(ManaCost::colored(Color::Green, 1)))
        .card_types(CardType::Creature)
        .subtypes(Subtype::Bear)
        .colors(Color::Green)
        .power_toughness(2, 2)
}

fn elvish_warrior() -> CardDefinition {
    CardDefinition::new(card_name::ELVISH_WARRIOR)
        .mana_cost(ManaCost::generic(1).plus(ManaCost::colored(Color::Green, 1)))
        .card_types(CardType::Creature)
        .subtypes(EnumSet::from(Subtype::Elf) | Subtype::Warrior)
        .colors(Color::Green)
        .power_toughness(2, 3)
}

/// Canonical continuous-effect / layer-system test card: a lord granting
/// +1/+1 to other Elves its controller controls.
fn elvish_champion() -> CardDefinition {
    CardDefinition::new(card_name::ELVISH_CHAMPION)
        .mana_cost(ManaCost::generic(1).plus(ManaCost::colored(Color::Green, 1)))
        .card_types(CardType::Creature)
        .subtypes(EnumSet::from(Subtype::Elf) | Subtype::Warrior)
        .colors(Color::Green)
        .power_toughness(2, 2)
        .ability(AbilityDefinition::static_power_toughness(
            Layer::PowerToughnessModifyingEffects,
            ObjectFilter::any()
                .with_subtypes(Subtype::Elf)
                .controlled_by(PlayerFilterKind::You)
                .excluding_source(),
            1,
            1,
        ))
}

fn brainstorm() -> CardDefinition {
    CardDefinition::new(card_name::BRAINSTORM)
        .mana_cost(ManaCost::colored(Color::Blue, 1))
        .card_types(CardType::Instant)
        .colors(Color::Blue)
        .ability(AbilityDefinition::spell(vec![], vec![EffectIr::draw(PlayerRef::Controller, 3)]))
}

/// Canonical stack-interaction test card: counters target spell.
fn counterspell() -> CardDefinition {
    CardDefinition::new(card_name::COUNTERSPELL)
        .mana_cost(ManaCost::colored(Color::Blue, 1).plus(ManaCost::colored(Color::Blue, 1)))
        .card_types(CardType::Instant)
        .colors(Color::Blue)
        .ability(AbilityDefinition::spell(
            vec![TargetRequirement { quantity: TargetQuantity::Exactly(1), filter: TargetFilter::StackItem }],
            vec![EffectIr::CounterSpell { target: crate::effects::effect_ir::ObjectRef::Target(0) }],
        ))
}

/// Canonical triggered-ability test card: draws a card when it enters the
/// battlefield.
fn welcome_stranger() -> CardDefinition {
    CardDefinition::new(card_name::WELCOME_STRANGER)
        .mana_cost(ManaCost::generic(2).plus(ManaCost::colored(Color::White, 1)))
        .card_types(CardType::Creature)
        .subtypes(EnumSet::from(Subtype::Human) | Subtype::Soldier)
        .colors(Color::White)
        .power_toughness(2, 2)
        .ability(AbilityDefinition::triggered(
            TriggerCondition {
                event_kind: GameEventKind::EntersBattlefield,
                subject: TriggerSubject::ThisCard,
                intervening_if: None,
            },
            vec![EffectIr::draw(PlayerRef::Controller, 1)],
        ))
}

/// Canonical token test card: the 1/1 white Spirit created by
/// `EffectIr::CreateToken`.
fn spirit_token() -> CardDefinition {
    CardDefinition::new(card_name::SPIRIT_TOKEN)
        .card_types(CardType::Creature)
        .subtypes(Subtype::Spirit)
        .colors(Color::White)
        .power_toughness(1, 1)
}

/// Canonical intervening-if test card: draws a card when it deals combat
/// damage to a player, but only if that player still has two or fewer cards
/// in hand when the trigger resolves (rule 603.4).
fn ravenous_skitterclaw() -> CardDefinition {
    CardDefinition::new(card_name::RAVENOUS_SKITTERCLAW)
        .mana_cost(ManaCost::generic(1).plus(ManaCost::colored(Color::Black, 1)))
        .card_types(CardType::Creature)
        .subtypes(Subtype::Bear)
        .colors(Color::Black)
        .power_toughness(2, 2)
        .ability(AbilityDefinition::triggered(
            TriggerCondition {
                event_kind: GameEventKind::DealsCombatDamage,
                subject: TriggerSubject::ThisCard,
                intervening_if: Some(InterveningIf::EventSecondaryHandSize {
                    comparison: Comparison::LessOrEqual,
                    value: 2,
                }),
            },
            vec![EffectIr::draw(PlayerRef::Controller, 1)],
        ))
}

/// Canonical empty-library-win test card: replaces a would-be draw from an
/// empty library with its controller winning the game instead.
fn laboratory_maniac() -> CardDefinition {
    CardDefinition::new(card_name::LABORATORY_MANIAC)
        .mana_cost(ManaCost::generic(1).plus(ManaCost::colored(Color::Blue, 1)))
        .card_types(CardType::Creature)
        .subtypes(EnumSet::from(Subtype::Human) | Subtype::Wizard)
        .colors(Color::Blue)
        .power_toughness(2, 2)
        .ability(AbilityDefinition::static_replacement(
            GameEventKind::WouldDraw,
            ReplacementSubjectScope::You,
            ReplacementAction::Win,
        ))
}

/// Canonical win-prevention test card: its controller's opponents cannot
/// win the game.
fn nefarious_lich() -> CardDefinition {
    CardDefinition::new(card_name::NEFARIOUS_LICH)
        .mana_cost(ManaCost::generic(3).plus(ManaCost::colored(Color::Black, 2)))
        .card_types(CardType::Creature)
        .subtypes(Subtype::Wizard)
        .colors(Color::Black)
        .power_toughness(3, 3)
        .ability(AbilityDefinition::static_replacement(
            GameEventKind::WouldWin,
            ReplacementSubjectScope::Anything,
            ReplacementAction::Prevent,
        ))
}

/// The full table of card behavior, keyed by name. Each card's rules are
/// looked up here once its printed name is known; there is no other way to
/// discover a card's abilities.
pub static CARD_DEFINITIONS: Lazy<BTreeMap<CardName, CardDefinition>> = Lazy::new(|| {
    let defs = vec![
        basic_land(card_name::FOREST, Subtype::Forest, Color::Green),
        basic_land(card_name::ISLAND, Subtype::Island, Color::Blue),
        basic_land(card_name::MOUNTAIN, Subtype::Mountain, Color::Red),
        basic_land(card_name::PLAINS, Subtype::Plains, Color::White),
        basic_land(card_name::SWAMP, Subtype::Swamp, Color::Black),
        grizzly_bears(),
        elvish_warrior(),
        elvish_champion(),
        brainstorm(),
        counterspell(),
        welcome_stranger(),
        spirit_token(),
        ravenous_skitterclaw(),
        laboratory_maniac(),
        nefarious_lich(),
    ];
    defs.into_iter().map(|def| (def.name, def)).collect()
});

/// Looks up a card's rules definition by name.
///
/// Panics if `name` is not a known card; callers are expected to only ever
/// hold a [CardName] that was validated against this registry at
/// card-import time.
pub fn lookup(name: CardName) -> &'static CardDefinition {
    CARD_DEFINITIONS.get(&name).unwrap_or_else(|| panic!("Unknown card name: {name:?}"))
}
