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
use primitives::clock::{GameClock, GameRng};
use primitives::game_primitives::{GameId, PlayerName};
use serde::{Deserialize, Serialize};

use crate::card_states::zones::Zones;
use crate::delegates::trigger::PendingTrigger;
use crate::effects::replacement::ReplacementEffectSet;
use crate::game_states::combat_state::CombatState;
use crate::game_states::game_configuration::GameConfiguration;
use crate::game_states::game_history::GameHistory;
use crate::game_states::game_phase_step::GamePhaseStep;
use crate::game_states::game_status::GameStatus;
use crate::game_states::state_based_event::StateBasedEvent;
use crate::game_states::turn_data::TurnData;
use crate::player_states::player_state::{PlayerQueries, PlayerState, Players};
use crate::prompts::prompt_manager::PromptManager;

/// The full state of a single game at one point in time: a pure function of
/// the ordered intent log that produced it. Two games replayed from the same
/// log and the same seed always produce an identical [GameState].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,

    pub status: GameStatus,

    /// Current game phase step. Meaningless while [Self::status] is
    /// [GameStatus::NotStarted].
    pub step: GamePhaseStep,

    /// Identifies the player whose turn it currently is and the current
    /// turn number.
    pub turn: TurnData,

    /// Player who can currently take a game action.
    pub priority: PlayerName,

    /// Players whose most recent game action was to pass priority. Once
    /// every player currently in the game has passed in succession, the top
    /// of the stack resolves or the current step ends.
    pub passed: EnumSet<PlayerName>,

    pub configuration: GameConfiguration,

    pub players: Players,

    /// State and zone membership for every card, token, and stack ability.
    pub zones: Zones,

    pub history: GameHistory,

    /// Mints monotonically-increasing IDs as a deterministic function of
    /// the intent sequence number; the sole source of object/event/decision
    /// identity in a game.
    pub clock: GameClock,

    pub rng: GameRng,

    /// Every currently-active rule 614 replacement effect.
    pub replacement_effects: ReplacementEffectSet,

    /// Triggered abilities that have fired and are waiting to be placed on
    /// the stack the next time a player would receive priority.
    pub pending_triggers: Vec<PendingTrigger>,

    /// Markers queued by mutations for the next state-based action check
    /// (rule 704), consumed and cleared each time state-based actions run.
    pub pending_state_based_events: Vec<StateBasedEvent>,

    pub prompts: PromptManager,

    /// State of creatures participating in the currently active combat
    /// phase, `None` outside of combat.
    pub combat: Option<CombatState>,
}

impl GameState {
    pub fn new(id: GameId, configuration: GameConfiguration, players: Players, seed: u64) -> Self {
        Self {
            id,
            status: GameStatus::NotStarted,
            step: GamePhaseStep::Untap,
            turn: TurnData { active_player: PlayerName::One, turn_number: 0 },
            priority: PlayerName::One,
            passed: EnumSet::empty(),
            configuration,
            players,
            zones: Zones::default(),
            history: GameHistory::default(),
            clock: GameClock::default(),
            rng: GameRng::new(seed),
            replacement_effects: ReplacementEffectSet::default(),
            pending_triggers: vec![],
            pending_state_based_events: vec![],
            prompts: PromptManager::default(),
            combat: None,
        }
    }

    /// Shuffles the order of cards in a player's library.
    pub fn shuffle_library(&mut self, player: PlayerName) {
        self.zones.shuffle_library(player, &mut self.rng)
    }

    /// Returns the player whose turn it currently is.
    pub fn active_player(&self) -> PlayerName {
        self.turn.active_player
    }

    /// Queues a state-based action check for the next time one runs.
    pub fn add_state_based_event(&mut self, event: StateBasedEvent) {
        self.pending_state_based_events.push(event);
    }

    /// Every player currently in the game, in turn order starting with the
    /// active player.
    pub fn players_in_turn_order(&self) -> impl Iterator<Item = PlayerName> + '_ {
        let active = self.active_player();
        enum_iterator::all::<PlayerName>()
            .cycle()
            .skip_while(move |p| *p != active)
            .take(4)
    }
}

impl PlayerQueries for GameState {
    fn player(&self, name: PlayerName) -> &PlayerState {
        self.players.player(name)
    }

    fn player_mut(&mut self, name: PlayerName) -> &mut PlayerState {
        self.players.player_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use primitives::game_primitives::Zone;

    use super::*;
    use crate::card_definitions::card_name;
    use crate::card_states::card_kind::CardKind;

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
    fn players_in_turn_order_starts_with_the_active_player() {
        let mut game = new_game();
        game.turn.active_player = PlayerName::Three;
        let order: Vec<_> = game.players_in_turn_order().collect();
        assert_eq!(
            order,
            vec![PlayerName::Three, PlayerName::Four, PlayerName::One, PlayerName::Two]
        );
    }

    #[test]
    fn shuffle_library_is_deterministic_for_a_fixed_seed() {
        let mut game_a = new_game();
        let mut game_b = new_game();
        for game in [&mut game_a, &mut game_b] {
            for _ in 0..10 {
                let object_id = game.clock.new_object_id();
                let timestamp = game.clock.new_timestamp();
                game.zones.create_card_in_zone(
                    card_name::FOREST,
                    CardKind::Normal,
                    PlayerName::One,
                    Zone::Library,
                    object_id,
                    timestamp,
                );
            }
        }
        game_a.shuffle_library(PlayerName::One);
        game_b.shuffle_library(PlayerName::One);
        assert_eq!(
            game_a.zones.library(PlayerName::One),
            game_b.zones.library(PlayerName::One)
        );
    }
}
