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

//! Host-settable knobs for running a [crate::session::GameSession], as
//! opposed to [data::game_states::game_configuration::GameConfiguration],
//! which affects rules behavior and is itself part of replayed state.

/// Settings that control how the tick loop and log are driven, not what the
/// rules of the game are.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Keep a pre-tick snapshot around so an [crate::error::EngineError::Inconsistent]
    /// result can roll the game back to it. Always on outside of tests --
    /// the only reason to disable it is a throwaway simulation fork where
    /// the caller discards the whole game on any error anyway.
    pub snapshot_for_rollback: bool,

    /// Upper bound on how many times [crate::tick::advance_to_next_turn] will call
    /// [rules::steps::advance] looking for the turn number to change, as a
    /// backstop against an infinite loop if turn-ending state-based actions
    /// never fire (e.g. every player's library and hand are both empty).
    pub max_steps_per_turn_advance: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { snapshot_for_rollback: true, max_steps_per_turn_advance: 32 }
    }
}
