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

use primitives::game_primitives::{CardId, PlayerName};
use serde::{Deserialize, Serialize};

/// A marker queued by a mutation for the next state-based action check
/// (rule 704), rather than a direct consequence computed eagerly.
///
/// Mutations append markers as a side effect (a life total decreasing, a
/// library running dry) instead of applying the resulting loss/destruction
/// themselves, since state-based actions are checked and applied together
/// as a single event the next time a player would receive priority.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum StateBasedEvent {
    /// `player`'s life total just decreased; checked against zero or less
    /// (rule 704.5a).
    LifeTotalDecreased(PlayerName),
    /// `player` just attempted to draw from an empty library (rule 704.5b).
    DrawFromEmptyLibrary(PlayerName),
    /// `player` just gained one or more poison counters; checked against
    /// the ten-or-more threshold (rule 704.5g).
    GainedPoisonCounters(PlayerName),
    /// `card_id`'s toughness just changed; checked against zero or less
    /// (rule 704.5f).
    CreatureToughnessChanged(CardId),
    /// `card_id` was just dealt damage; checked against its toughness
    /// (rule 704.5g).
    CreatureDamaged(CardId),
    /// `card_id` just entered the battlefield as a legendary permanent;
    /// checked for other legendary permanents sharing its name under the
    /// same controller (rule 704.5j).
    LegendaryPermanentEntered(CardId),
    /// `card_id`'s +1/+1 and -1/-1 counters may no longer be at most one
    /// nonzero kind (rule 704.5q).
    CountersChanged(CardId),
}
