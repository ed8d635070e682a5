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

use data::card_states::counters::CounterKind;
use data::game_states::game_state::{GameState, GameStatus};
use data::game_states::state_based_event::StateBasedEvent;
use data::player_states::player_state::{LossReason, PlayerQueries};
use primitives::game_primitives::{PlayerName, Source, Zone};
use tracing::instrument;
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;
use crate::queries::{card_queries, player_queries};

/// Checks for and performs state-based actions (rule 704) until a full pass
/// makes no changes.
///
/// > 704.3. Whenever a player would get priority, the game checks for any
/// > of the listed conditions for state-based actions, then performs all
/// > applicable state-based actions simultaneously as a single event. If
/// > any state-based actions are performed as a result of a check, the
/// > check is repeated; otherwise all triggered abilities that are waiting
/// > to be put on the stack are put on the stack, then the check is
/// > repeated. Once no more state-based actions have been performed as the
/// > result of a check and no triggered abilities are waiting to be put on
/// > the stack, the appropriate player gets priority.
///
/// <https://yawgatog.com/resources/magic-rules/#R7043>
#[instrument(name = "state_based_actions_run", level = "debug", skip(game))]
pub fn run(game: &mut GameState) -> Outcome {
    if game.status.is_game_over() {
        return outcome::OK;
    }

    loop {
        let events = std::mem::take(&mut game.pending_state_based_events);
        if events.is_empty() {
            break;
        }

        for event in events {
            match event {
                StateBasedEvent::LifeTotalDecreased(player) => {
                    if game.player(player).life <= 0 {
                        lose(game, player, LossReason::LifeTotalZeroOrLess);
                    }
                }
                StateBasedEvent::DrawFromEmptyLibrary(player) => {
                    lose(game, player, LossReason::Decked);
                }
                StateBasedEvent::GainedPoisonCounters(player) => {
                    if game.player(player).counters.get(CounterKind::Poison) >= 10 {
                        lose(game, player, LossReason::TenOrMorePoisonCounters);
                    }
                }
                StateBasedEvent::CreatureToughnessChanged(card_id) => {
                    if game.zones.has_card(card_id)
                        && card_queries::is_creature(game, card_id)
                        && card_queries::toughness(game, card_id) <= 0
                    {
                        move_card::run(game, Source::Game, card_id, Zone::Graveyard)?;
                    }
                }
                StateBasedEvent::CreatureDamaged(card_id) => {
                    if let Some(card) = game.zones.card(card_id) {
                        if card_queries::is_creature(game, card_id)
                            && card.damage as i64 >= card_queries::toughness(game, card_id)
                        {
                            move_card::run(game, Source::Game, card_id, Zone::Graveyard)?;
                        }
                    }
                }
                StateBasedEvent::LegendaryPermanentEntered(card_id) => {
                    apply_legend_rule(game, card_id)?;
                }
                StateBasedEvent::CountersChanged(card_id) => {
                    if let Some(card) = game.zones.card_mut(card_id) {
                        card.counters.annihilate_plus_minus();
                    }
                }
            }
        }
    }

    outcome::OK
}

fn lose(game: &mut GameState, player: PlayerName, reason: LossReason) {
    if game.player(player).lost.is_some() {
        return;
    }
    game.player_mut(player).lost = Some(reason);
    let remaining = player_queries::active_players(game);
    if remaining.len() <= 1 {
        game.status = GameStatus::GameOver { winners: remaining.iter().collect() };
    }
}

/// > 704.5j. If two or more legendary permanents with the same name are
/// > controlled by the same player, that player chooses one of them, and the
/// > rest are put into their owners' graveyards. This is called the "legend
/// > rule."
///
/// <https://yawgatog.com/resources/magic-rules/#R7045j>
///
/// Simplified here to keep the oldest (lowest timestamp) copy rather than
/// offering the controller a choice, since that choice isn't yet modeled as
/// a prompt.
fn apply_legend_rule(game: &mut GameState, card_id: primitives::game_primitives::CardId) -> Outcome {
    let Some(card) = game.zones.card(card_id) else { return outcome::OK };
    if card.zone != Zone::Battlefield {
        return outcome::OK;
    }
    let controller = card.controller;
    let card_name = card.card_name;
    if !data::card_definitions::registry::lookup(card_name)
        .supertypes
        .contains(primitives::game_primitives::CardSupertype::Legendary)
    {
        return outcome::OK;
    }
    let duplicates: Vec<_> = game
        .zones
        .battlefield_controlled_by(controller)
        .filter(|&id| id != card_id && game.zones.card(id).map(|c| c.card_name) == Some(card_name))
        .collect();
    if duplicates.is_empty() {
        return outcome::OK;
    }

    let mut survivors = duplicates;
    survivors.push(card_id);
    survivors.sort_by_key(|id| game.zones.card(*id).map(|c| c.timestamp).unwrap_or_default());
    for id in survivors.into_iter().skip(1) {
        move_card::run(game, Source::Game, id, Zone::Graveyard)?;
    }
    outcome::OK
}
