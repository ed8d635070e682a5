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

//! Pure functions over `&mut data::game_states::game_state::GameState`,
//! returning `utils::outcome::Outcome`. Nothing in this crate owns a
//! `GameState` or drives a tick loop -- that belongs to `engine`.

pub mod layers;
pub mod legality;
pub mod mutations;
pub mod queries;
pub mod replacement;
pub mod resolve;
pub mod steps;
pub mod triggers;
