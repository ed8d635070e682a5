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

use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::GameState;
use data::prompts::prompt::{Prompt, PromptKind};
use primitives::game_primitives::{EntityId, PlayerName, Source, Zone};
use utils::outcome::{self, Outcome};

use crate::mutations::move_card;
use crate::triggers;

/// Discards `count` cards from `player`'s hand (rule 701.8a), prompting them
/// to choose which ones when more remain than must be discarded.
pub fn discard(game: &mut GameState, source: Source, player: PlayerName, count: usize) -> Outcome {
    let hand: Vec<_> = game.zones.hand(player).iter().copied().collect();
    let chosen = if hand.len() <= count {
        hand
    } else {
        game.prompts.discard(Prompt {
            id: game.clock.new_decision_id(),
            player,
            kind: PromptKind::Discard { legal: hand, count },
        })?
    };

    for id in chosen {
        move_card::run(game, source, id, Zone::Graveyard)?;
        let event_id = game.clock.new_event_id();
        triggers::collect(
            game,
            GameEvent {
                id: event_id,
                kind: GameEventKind::Discards,
                subject: EntityId::Card(id),
                source,
                secondary: None,
                controller_at_time: player,
            },
        );
    }
    outcome::OK
}
