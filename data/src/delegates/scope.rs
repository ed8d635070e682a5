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

use primitives::game_primitives::{AbilityId, HasCardId, HasSource, PlayerName, Source};

/// Context in which an ability is being evaluated: which card and ability
/// number it is, and who controls it. Passed down through the resolver and
/// trigger-matching pass instead of re-deriving it from game state each
/// time.
#[derive(Debug, Clone, Copy)]
pub struct Scope {
    pub ability_id: AbilityId,
    pub controller: PlayerName,
}

impl HasCardId for Scope {
    fn card_id(&self) -> primitives::game_primitives::CardId {
        self.ability_id.card_id
    }
}

impl HasSource for Scope {
    fn source(&self) -> Source {
        Source::Ability(self.ability_id)
    }
}
