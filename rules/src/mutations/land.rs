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

//! Playing a land from hand (rule 305).

use data::game_states::game_state::GameState;
use primitives::game_primitives::{CardId, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;

/// Plays the land at `card_id` from `player`'s hand onto the battlefield,
/// counting against the once-per-turn limit tracked in
/// [data::game_states::game_history::GameHistory] (rule 305.2a).
///
/// Assumes [crate::legality::can_play_land] was already checked.
pub fn play(game: &mut GameState, player: PlayerName, card_id: CardId) -> Outcome {
    move_card::run(game, Source::Game, card_id, Zone::Battlefield)?;
    let turn = game.turn;
    game.history.counters_for_turn_mut(turn, player).lands_played += 1;
    outcome::OK
}
