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

//! Drives a `data::game_states::game_state::GameState` forward one
//! [intent::Intent] at a time.
//!
//! [tick] applies a single intent and classifies the result; [session] wraps
//! it with snapshotting, rollback, and the decision stall/resume mechanics a
//! live game needs; [log] is the persistence boundary a session's intents
//! are appended to; [replay] rebuilds a game from its log alone.

pub mod config;
pub mod error;
pub mod intent;
pub mod log;
pub mod replay;
pub mod session;
pub mod tick;
