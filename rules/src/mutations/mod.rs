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

pub mod abilities;
pub mod combat;
pub mod hand;
pub mod land;
pub mod library;
pub mod mana;
pub mod move_card;
pub mod permanents;
pub mod players;
pub mod priority;
pub mod spells;
pub mod state_based_actions;
