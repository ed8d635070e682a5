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

//! Declaring attackers and blockers (rules 508, 509).

use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::GameState;
use primitives::game_primitives::{CardId, EntityId, PlayerName, Source};
use utils::outcome::{self, Outcome};

use crate::mutations::permanents;
use crate::queries::player_queries;
use crate::triggers;

/// Declares `attackers` as attacking the active player's opponents (rule
/// 508.1), tapping each one (vigilance is not yet modeled) and firing one
/// `Attacks` trigger event per attacker.
///
/// Assumes [crate::legality::can_declare_attacker] was already checked for
/// each entry; a defending player is inferred as the next active opponent,
/// since multiplayer "choose who you're attacking" is not yet modeled.
pub fn declare_attackers(game: &mut GameState, player: PlayerName, attackers: Vec<CardId>) -> Outcome {
    let defender = player_queries::next_player_after(game, player);
    game.combat.get_or_insert_with(Default::default);

    for attacker in attackers {
        permanents::tap(game, attacker)?;
        let combat = game.combat.as_mut().expect("just inserted");
        combat.declare_attacker(attacker, defender);

        let event_id = game.clock.new_event_id();
        triggers::collect(
            game,
            GameEvent {
                id: event_id,
                kind: GameEventKind::Attacks,
                subject: EntityId::Card(attacker),
                source: Source::Game,
                secondary: Some(EntityId::Player(defender)),
                controller_at_time: player,
            },
        );
    }
    outcome::OK
}

/// Declares `blocks` (blocker, attacker) pairs (rule 509.1), firing one
/// `Blocks` trigger event per blocking creature. A blocker appearing more
/// than once blocks each of its listed attackers (rule 509.1h, multi-block).
pub fn declare_blockers(game: &mut GameState, blocks: Vec<(CardId, CardId)>) -> Outcome {
    let Some(combat) = game.combat.as_mut() else { return outcome::OK };
    for &(blocker, attacker) in &blocks {
        combat.declare_block(blocker, attacker);
    }

    for (blocker, attacker) in blocks {
        let controller = game.zones.card(blocker).map(|c| c.controller);
        let Some(controller) = controller else { continue };
        let event_id = game.clock.new_event_id();
        triggers::collect(
            game,
            GameEvent {
                id: event_id,
                kind: GameEventKind::Blocks,
                subject: EntityId::Card(blocker),
                source: Source::Game,
                secondary: Some(EntityId::Card(attacker)),
                controller_at_time: controller,
            },
        );
    }
    outcome::OK
}
