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

//! Recomputes every card's continuous-effect accumulators from scratch
//! (rule 613).
//!
//! Static abilities are not applied incrementally as they enter and leave
//! the battlefield; instead every [crate::queries::card_queries::power] /
//! [crate::queries::card_queries::toughness] caller is expected to have
//! called [recompute] first this priority check, which clears and
//! repopulates every card's [data::properties::card_properties::CardProperties]
//! from the current battlefield.

use data::card_definitions::ability_definition::{AbilityType, ReplacementSubjectScope};
use data::card_definitions::registry;
use data::effects::replacement::{EventMatcher, ReplacementEffect, ReplacementEffectId};
use data::game_states::game_state::GameState;
use data::properties::card_property::IntModifier;
use primitives::game_primitives::{AbilityId, CardId, EntityId, Source};
use tracing::instrument;
use utils::outcome::{self, Outcome};

use crate::queries::card_queries;

/// Clears every battlefield card's continuous-effect accumulators and
/// repopulates them from the static abilities currently in play.
///
/// Idempotent and cheap to call redundantly; callers that mutate the
/// battlefield (entering/leaving permanents, counters) should call this
/// again before the next query that depends on power/toughness.
#[instrument(level = "debug", skip(game))]
pub fn recompute(game: &mut GameState) -> Outcome {
    let all_ids: Vec<CardId> = game.zones.all_cards().map(|card| card.id).collect();
    for id in &all_ids {
        if let Some(card) = game.zones.card_mut(*id) {
            card.properties.clear();
        }
    }
    game.replacement_effects.clear_static_ability_effects();

    // Static abilities only function from the battlefield (rule 113.6);
    // a card that has since left carries no continuous effect or
    // replacement into this pass.
    let battlefield: Vec<CardId> = game
        .zones
        .all_cards()
        .filter(|card| card.zone == primitives::game_primitives::Zone::Battlefield)
        .map(|card| card.id)
        .collect();

    for &source_id in &battlefield {
        let Some(source) = game.zones.card(source_id) else { continue };
        let definition = registry::lookup(source.card_name);
        let controller = source.controller;

        for (number, ability) in definition.all_abilities() {
            if ability.ability_type != AbilityType::Static {
                continue;
            }

            if let Some(descriptor) = &ability.continuous_effect {
                let affected: Vec<CardId> = battlefield
                    .iter()
                    .copied()
                    .filter(|&id| {
                        card_queries::matches_filter(game, id, &descriptor.affects, controller, source_id)
                    })
                    .collect();

                for id in affected {
                    let Some(card) = game.zones.card_mut(id) else { continue };
                    if descriptor.power_delta != 0 {
                        card.properties.power.add_static(descriptor.layer, IntModifier::Add(descriptor.power_delta));
                    }
                    if descriptor.toughness_delta != 0 {
                        card.properties
                            .toughness
                            .add_static(descriptor.layer, IntModifier::Add(descriptor.toughness_delta));
                    }
                }
            }

            if let Some(descriptor) = &ability.static_replacement {
                let subject = match descriptor.subject {
                    ReplacementSubjectScope::You => Some(EntityId::Player(controller)),
                    ReplacementSubjectScope::Anything => None,
                };
                game.replacement_effects.add_static_ability_effect(ReplacementEffect {
                    id: ReplacementEffectId(0),
                    source: Source::Ability(AbilityId { card_id: source_id, number }),
                    controller,
                    matcher: EventMatcher { kind: descriptor.event_kind, subject },
                    action: descriptor.action.clone(),
                });
            }
        }
    }

    outcome::OK
}

#[cfg(test)]
mod tests {
    use data::card_definitions::card_name::CardName;
    use data::card_states::card_kind::CardKind;
    use data::game_states::game_configuration::GameConfiguration;
    use data::player_states::player_state::{PlayerState, Players};
    use primitives::game_primitives::{GameId, PlayerName, Zone};

    use super::*;
    use crate::queries::card_queries;

    fn new_game() -> GameState {
        let players = Players::new([
            PlayerState::new(PlayerName::One, None, 20),
            PlayerState::new(PlayerName::Two, None, 20),
            PlayerState::new(PlayerName::Three, None, 20),
            PlayerState::new(PlayerName::Four, None, 20),
        ]);
        GameState::new(GameId(uuid::Uuid::nil()), GameConfiguration::default(), players, 7)
    }

    #[test]
    fn a_lord_boosts_other_matching_creatures_but_not_itself() {
        let mut game = new_game();
        let object_id = game.clock.new_object_id();
        let timestamp = game.clock.new_timestamp();
        let lord = game.zones.create_card_in_zone(
            CardName::ELVISH_CHAMPION,
            CardKind::Normal,
            PlayerName::One,
            Zone::Battlefield,
            object_id,
            timestamp,
        );
        let object_id = game.clock.new_object_id();
        let timestamp = game.clock.new_timestamp();
        let elf = game.zones.create_card_in_zone(
            CardName::ELVISH_WARRIOR,
            CardKind::Normal,
            PlayerName::One,
            Zone::Battlefield,
            object_id,
            timestamp,
        );

        recompute(&mut game).unwrap();

        let base_lord = registry::lookup(CardName::ELVISH_CHAMPION).base_power_toughness.unwrap();
        assert_eq!(card_queries::power(&game, lord), base_lord.0);
        let base_elf = registry::lookup(CardName::ELVISH_WARRIOR).base_power_toughness.unwrap();
        assert_eq!(card_queries::power(&game, elf), base_elf.0 + 1);
    }
}
