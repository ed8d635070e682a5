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

use data::effects::replacement::ReplacementAction;
use data::events::game_event::GameEventKind;
use data::game_states::game_state::GameState;
use data::game_states::state_based_event::StateBasedEvent;
use data::prompts::prompt::{Prompt, PromptKind};
use primitives::game_primitives::{CardId, EntityId, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;
use crate::mutations::players;
use crate::replacement;

/// Draws a card from the top of `player`'s library (the back of the
/// library deque; see [data::card_states::zones::Zones::move_card]).
///
/// Drawing from an empty library queues a [StateBasedEvent] that causes the
/// player to lose the game the next time state-based actions are checked
/// (rule 104.3c, 704.5b), rather than failing outright.
pub fn draw(game: &mut GameState, source: Source, player: PlayerName) -> Outcome {
    let subject = EntityId::Player(player);
    let actions = replacement::matching_actions(game, GameEventKind::WouldDraw, subject);
    if actions.iter().any(|action| matches!(action, ReplacementAction::Prevent | ReplacementAction::Skip)) {
        return outcome::OK;
    }

    let Some(&id) = game.zones.library(player).back() else {
        if actions.iter().any(|action| matches!(action, ReplacementAction::Win))
            && !replacement::is_win_prevented(game, player)
        {
            return players::win_game(game, player);
        }
        game.add_state_based_event(StateBasedEvent::DrawFromEmptyLibrary(player));
        return outcome::OK;
    };
    move_card::run(game, source, id, Zone::Hand)
}

/// Draws `count` cards in sequence, firing one draw event per card (rule
/// 120.3 still applies to each draw individually).
pub fn draw_cards(game: &mut GameState, source: Source, player: PlayerName, count: usize) -> Outcome {
    for _ in 0..count {
        draw(game, source, player)?;
    }
    outcome::OK
}

/// Puts a card on top of its owner's library.
pub fn move_to_top(game: &mut GameState, source: Source, card_id: CardId) -> Outcome {
    move_card::run(game, source, card_id, Zone::Library)
}

/// Mills `count` cards from the top of `player`'s library into their
/// graveyard (rule 701.16a uses the same "from the top" direction as draw).
pub fn mill(game: &mut GameState, source: Source, player: PlayerName, count: usize) -> Outcome {
    for _ in 0..count {
        let Some(&id) = game.zones.library(player).back() else { break };
        move_card::run(game, source, id, Zone::Graveyard)?;
    }
    outcome::OK
}

/// Looks at the top `count` cards of `player`'s library and, for each,
/// decides whether it stays on top or moves to the bottom (rule 701.19a).
pub fn scry(game: &mut GameState, source: Source, player: PlayerName, count: usize) -> Outcome {
    let cards = top_cards(game, player, count);
    if cards.is_empty() {
        return outcome::OK;
    }
    let to_bottom = game.prompts.scry(Prompt {
        id: game.clock.new_decision_id(),
        player,
        kind: PromptKind::Scry { cards },
    })?;
    for id in to_bottom {
        move_to_bottom(game, source, id)?;
    }
    outcome::OK
}

/// Looks at the top `count` cards of `player`'s library and, for each,
/// decides whether it stays on top or goes to the graveyard (rule 701.42a).
pub fn surveil(game: &mut GameState, source: Source, player: PlayerName, count: usize) -> Outcome {
    let cards = top_cards(game, player, count);
    if cards.is_empty() {
        return outcome::OK;
    }
    let to_graveyard = game.prompts.surveil(Prompt {
        id: game.clock.new_decision_id(),
        player,
        kind: PromptKind::Surveil { cards },
    })?;
    for id in to_graveyard {
        move_card::run(game, source, id, Zone::Graveyard)?;
    }
    outcome::OK
}

/// Returns up to `count` cards from the top of `player`'s library, nearest
/// the top first.
fn top_cards(game: &GameState, player: PlayerName, count: usize) -> Vec<CardId> {
    game.zones.library(player).iter().rev().take(count).copied().collect()
}

/// Puts a card on the bottom of its owner's library, preserving the position
/// of every other card (rule 701.19a's "in any order").
fn move_to_bottom(game: &mut GameState, _source: Source, card_id: CardId) -> Outcome {
    game.zones.put_on_bottom_of_library(card_id)
}
