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

//! Reconstructs a game's state by loading its intent log and re-submitting
//! every entry, in order, to a fresh [GameSession].
//!
//! Determinism rests entirely on [crate::intent::Intent::RngSeed] being the
//! first entry and on [data::game_states::game_state::GameState]'s clock
//! counters being seeded identically every time, so the same log always
//! reproduces the same state.

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use data::game_states::game_state::GameState;
use data::game_states::game_configuration::GameConfiguration;
use data::player_states::player_state::{PlayerState, Players};
use primitives::game_primitives::{GameId, PlayerName};
use serde_json::Value;
use tracing::instrument;

use crate::config::EngineConfig;
use crate::intent::Intent;
use crate::log::EventLog;
use crate::session::{GameSession, SessionOutcome};

/// Normalizes one logged intent's JSON into the nested `{"type", "payload"}`
/// shape [Intent]'s [serde::Deserialize] impl expects.
///
/// Older logs may instead have written a flat shape, with the variant's
/// fields inlined alongside `type` rather than nested under a `payload` key
/// (e.g. `{"type": "passPriority", "player": "one"}` rather than
/// `{"type": "passPriority", "payload": {"player": "one"}}`). Both shapes
/// carry the same information; this only reshapes the flat form so a single
/// deserializer can handle both.
pub fn normalize_intent_json(value: Value) -> Value {
    let Value::Object(mut map) = value else {
        return value;
    };

    if map.contains_key("payload") || !map.contains_key("type") {
        return Value::Object(map);
    }

    let tag = map.remove("type").expect("checked above");
    let mut normalized = serde_json::Map::new();
    normalized.insert("type".to_string(), tag);
    normalized.insert("payload".to_string(), Value::Object(map));
    Value::Object(normalized)
}

/// Deserializes one logged entry after normalizing its shape.
pub fn intent_from_json(value: Value) -> Result<Intent> {
    serde_json::from_value(normalize_intent_json(value)).context("error deserializing logged intent")
}

/// Builds the empty starting [GameState] every replay begins from: four
/// seats, none of them yet joined by a real user, with `game_id` and
/// `starting_seed` fixed so replay is bit-for-bit reproducible.
///
/// `starting_seed` only seeds [data::game_states::game_state::GameState]'s
/// constructor; the actual game PRNG is reseeded by the log's own
/// [Intent::RngSeed] entry, which must be present.
pub fn initial_state(game_id: GameId, starting_seed: u64) -> GameState {
    let players = Players::new([
        PlayerState::new(PlayerName::One, None, 20),
        PlayerState::new(PlayerName::Two, None, 20),
        PlayerState::new(PlayerName::Three, None, 20),
        PlayerState::new(PlayerName::Four, None, 20),
    ]);
    GameState::new(game_id, GameConfiguration::default(), players, starting_seed)
}

/// Rebuilds `game_id`'s state by loading its log from `log` and
/// re-submitting every intent to a fresh [GameSession].
///
/// Returns an error if the log is empty, does not start with
/// [Intent::RngSeed], or any entry is rejected -- a well-formed log should
/// never produce any of these, so they indicate log corruption.
#[instrument(level = "debug", skip(log))]
pub fn replay<L: EventLog>(log: &L, game_id: GameId, config: EngineConfig) -> Result<GameState> {
    let intents = log.load(game_id).context("error loading intent log for replay")?;
    let Some(Intent::RngSeed { seed }) = intents.first() else {
        return Err(eyre!("intent log for {game_id:?} does not begin with rngSeed"));
    };

    let game = initial_state(game_id, *seed);
    let mut session = GameSession::new(game, config, crate::log::InMemoryEventLog::default());

    for (index, intent) in intents.into_iter().enumerate() {
        let outcome = session
            .submit(intent)
            .with_context(|| format!("replay of {game_id:?} failed at log entry {index}"))?;
        if matches!(outcome, SessionOutcome::GameOver) {
            break;
        }
    }

    Ok(session.game)
}

#[cfg(test)]
mod tests {
    use primitives::game_primitives::PlayerName;
    use serde_json::json;

    use super::*;
    use crate::log::InMemoryEventLog;

    #[test]
    fn normalizes_flat_payload_into_nested_shape() {
        let flat = json!({"type": "passPriority", "player": "one"});
        let normalized = normalize_intent_json(flat);
        assert_eq!(normalized, json!({"type": "passPriority", "payload": {"player": "one"}}));
    }

    #[test]
    fn leaves_already_nested_payload_unchanged() {
        let nested = json!({"type": "passPriority", "payload": {"player": "one"}});
        assert_eq!(normalize_intent_json(nested.clone()), nested);
    }

    #[test]
    fn flat_and_nested_shapes_deserialize_identically() {
        let flat = intent_from_json(json!({"type": "passPriority", "player": "one"})).unwrap();
        let nested = intent_from_json(json!({"type": "passPriority", "payload": {"player": "one"}})).unwrap();
        assert!(matches!(flat, Intent::PassPriority { player: PlayerName::One }));
        assert!(matches!(nested, Intent::PassPriority { player: PlayerName::One }));
    }

    #[test]
    fn replaying_an_empty_log_is_an_error() {
        let log = InMemoryEventLog::default();
        let result = replay(&log, GameId(uuid::Uuid::nil()), EngineConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn replay_reproduces_deck_import_and_draw() {
        let mut log = InMemoryEventLog::default();
        let game_id = GameId(uuid::Uuid::new_v4());
        log.append(game_id, &Intent::RngSeed { seed: 5 }).unwrap();
        log.append(
            game_id,
            &Intent::DeckImportResolved {
                player: PlayerName::One,
                cards: vec![data::card_definitions::card_name::CardName::FOREST; 5],
            },
        )
        .unwrap();
        log.append(game_id, &Intent::DrawCards { player: PlayerName::One, count: 2 }).unwrap();

        let state = replay(&log, game_id, EngineConfig::default()).unwrap();
        assert_eq!(state.zones.hand(PlayerName::One).len(), 2);
        assert_eq!(state.zones.library(PlayerName::One).len(), 3);
    }
}
