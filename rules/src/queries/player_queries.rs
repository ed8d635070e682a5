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

use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerQueries;
use enumset::EnumSet;
use primitives::game_primitives::PlayerName;

/// Every player still in the game, i.e. who has not lost.
///
/// [data::player_states::player_state::Players] always has all four seats
/// populated (unused seats in a two- or three-player game simply never take
/// a turn), so "every player" here means every seat whose [data::player_states::player_state::PlayerState::lost]
/// is `None`.
pub fn active_players(game: &GameState) -> EnumSet<PlayerName> {
    game.players.iter().filter(|p| p.is_active()).map(|p| p.name).collect()
}

/// Returns the next active player in turn order after `player`, wrapping
/// around and skipping any player who has lost.
///
/// Panics if no player remains active.
pub fn next_player_after(game: &GameState, player: PlayerName) -> PlayerName {
    let mut candidates = enum_iterator::all::<PlayerName>().cycle().skip_while(|p| *p != player).skip(1);
    candidates
        .find(|p| game.player(*p).is_active())
        .expect("at least one active player must remain")
}

/// The [next_player_after] the active player in this game.
pub fn next_player(game: &GameState) -> PlayerName {
    next_player_after(game, game.turn.active_player)
}

/// Every opponent of `player` still in the game.
pub fn opponents_of(game: &GameState, player: PlayerName) -> EnumSet<PlayerName> {
    active_players(game).difference(EnumSet::only(player))
}

/// Number of players still in the game.
pub fn active_player_count(game: &GameState) -> usize {
    active_players(game).len()
}
