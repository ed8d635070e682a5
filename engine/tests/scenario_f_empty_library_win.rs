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

//! Drawing from an empty library is a state-based loss (rule 104.3c) unless
//! a replacement effect says otherwise. Laboratory Maniac turns that draw
//! into winning the game outright instead; Nefarious Lich can block that
//! replacement's win, in which case the would-be winner just decks as
//! normal.

mod support;

use data::card_definitions::card_name::CardName;
use data::game_states::game_status::GameStatus;
use data::player_states::player_state::{LossReason, PlayerQueries};
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::tick;
use primitives::game_primitives::{PlayerName, Zone};
use rules::layers;

#[test]
fn drawing_from_an_empty_library_with_laboratory_maniac_wins_the_game() {
    let mut game = support::new_game(3);
    let config = EngineConfig::default();

    support::put_card(&mut game, CardName::LABORATORY_MANIAC, PlayerName::One, Zone::Battlefield);
    layers::recompute(&mut game).unwrap();
    assert!(game.zones.library(PlayerName::One).is_empty());

    tick::apply(&mut game, &config, &Intent::DrawCards { player: PlayerName::One, count: 1 }).unwrap();

    assert!(matches!(&game.status, GameStatus::GameOver { winners } if winners == &vec![PlayerName::One]));
    for opponent in [PlayerName::Two, PlayerName::Three, PlayerName::Four] {
        assert_eq!(game.player(opponent).lost, Some(LossReason::OpponentWon));
    }
}

#[test]
fn nefarious_lich_prevents_the_win_so_the_would_be_winner_just_decks() {
    let mut game = support::new_game(4);
    let config = EngineConfig::default();

    support::put_card(&mut game, CardName::LABORATORY_MANIAC, PlayerName::One, Zone::Battlefield);
    support::put_card(&mut game, CardName::NEFARIOUS_LICH, PlayerName::Two, Zone::Battlefield);
    layers::recompute(&mut game).unwrap();
    assert!(game.zones.library(PlayerName::One).is_empty());

    tick::apply(&mut game, &config, &Intent::DrawCards { player: PlayerName::One, count: 1 }).unwrap();

    assert_eq!(game.player(PlayerName::One).lost, Some(LossReason::Decked));
    // Three of the four seats are still active, so the game plays on.
    assert!(matches!(game.status, GameStatus::NotStarted));
    for player in [PlayerName::Two, PlayerName::Three, PlayerName::Four] {
        assert_eq!(game.player(player).lost, None);
    }
}
