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

use serde::{Deserialize, Serialize};

/// Distinguishes the different kinds of [super::card_state::CardState] that
/// can occupy a [primitives::game_primitives::CardId] slot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardKind {
    /// A normal card with a 1:1 printed-card backing.
    Normal,
    /// A token created by an effect; ceases to exist once it leaves the
    /// battlefield (rule 111.7).
    Token,
    /// A copy of a spell created on the stack (e.g. by Fork effects), which
    /// is not backed by a real owned card.
    Copy,
}
