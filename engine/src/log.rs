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

//! The persistence boundary: appending committed intents to durable storage
//! and loading them back for replay.
//!
//! Nothing in [crate::tick] or [crate::replay] depends on a particular
//! storage backend, only on the [EventLog] trait here.

use color_eyre::eyre::Context;
use color_eyre::Result;
use primitives::game_primitives::GameId;
use serde_json::{de, ser};
use sled::Tree;

use crate::intent::Intent;

/// Durable storage for a game's intent log.
///
/// Implementations need not be transactional across games; each game's log
/// is independent and is only ever appended to or read in full.
pub trait EventLog {
    /// Appends `intent` to `game_id`'s log. Entries are assigned sequence
    /// numbers in append order, starting at zero.
    fn append(&mut self, game_id: GameId, intent: &Intent) -> Result<()>;

    /// Loads every intent previously appended for `game_id`, in commit
    /// order. Returns an empty vector for a game with no recorded history.
    fn load(&self, game_id: GameId) -> Result<Vec<Intent>>;
}

/// An in-memory [EventLog], used by tests and by simulation forks that are
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLog {
    games: std::collections::HashMap<GameId, Vec<Intent>>,
}

impl EventLog for InMemoryEventLog {
    fn append(&mut self, game_id: GameId, intent: &Intent) -> Result<()> {
        self.games.entry(game_id).or_default().push(intent.clone());
        Ok(())
    }

    fn load(&self, game_id: GameId) -> Result<Vec<Intent>> {
        Ok(self.games.get(&game_id).cloned().unwrap_or_default())
    }
}

/// A [sled]-backed [EventLog], one tree per game keyed by the intent's
/// sequence number within that game.
pub struct SledEventLog {
    db: sled::Db,
}

impl SledEventLog {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        Ok(Self { db: sled::open(path.into()).context("error opening sled database")? })
    }

    fn tree(&self, game_id: GameId) -> Result<Tree> {
        self.db
            .open_tree(game_id.0.as_u128().to_be_bytes())
            .with_context(|| format!("error opening intent log tree for game {game_id:?}"))
    }
}

impl EventLog for SledEventLog {
    fn append(&mut self, game_id: GameId, intent: &Intent) -> Result<()> {
        let tree = self.tree(game_id)?;
        let seq = tree.len() as u64;
        let bytes = ser::to_vec(intent).with_context(|| format!("error serializing intent for game {game_id:?}"))?;
        tree.insert(seq.to_be_bytes(), bytes)?;
        self.db.flush().context("error flushing sled database")?;
        Ok(())
    }

    fn load(&self, game_id: GameId) -> Result<Vec<Intent>> {
        let tree = self.tree(game_id)?;
        tree.iter()
            .values()
            .map(|result| {
                let bytes = result.context("error reading intent log entry")?;
                de::from_slice::<Intent>(&bytes)
                    .with_context(|| format!("error deserializing intent for game {game_id:?}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use primitives::game_primitives::PlayerName;

    use super::*;

    #[test]
    fn in_memory_log_round_trips_in_append_order() {
        let mut log = InMemoryEventLog::default();
        let game_id = GameId(uuid::Uuid::nil());
        log.append(game_id, &Intent::RngSeed { seed: 7 }).unwrap();
        log.append(game_id, &Intent::PassPriority { player: PlayerName::One }).unwrap();

        let loaded = log.load(game_id).unwrap();
        assert!(matches!(loaded[0], Intent::RngSeed { seed: 7 }));
        assert!(matches!(loaded[1], Intent::PassPriority { player: PlayerName::One }));
    }

    #[test]
    fn sled_log_round_trips_across_a_fresh_handle_to_the_same_path() {
        let dir = std::env::temp_dir().join(format!("engine-log-test-{}", uuid::Uuid::new_v4()));
        let path = dir.to_string_lossy().to_string();
        let game_id = GameId(uuid::Uuid::nil());

        {
            let mut log = SledEventLog::new(&path).unwrap();
            log.append(game_id, &Intent::RngSeed { seed: 42 }).unwrap();
            log.append(game_id, &Intent::ShuffleLibrary { player: PlayerName::One }).unwrap();
        }

        let log = SledEventLog::new(&path).unwrap();
        let loaded = log.load(game_id).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(matches!(loaded[0], Intent::RngSeed { seed: 42 }));

        std::fs::remove_dir_all(&dir).ok();
    }
}
