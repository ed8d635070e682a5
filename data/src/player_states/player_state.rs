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

use primitives::game_primitives::{EntityId, HasController, HasOwner, PlayerName, UserId};
use serde::{Deserialize, Serialize};

use crate::card_states::counters::Counters;
use crate::core::numerics::LifeValue;
use crate::player_states::mana_pool::ManaPool;
use crate::player_states::player_options::PlayerOptions;

/// Why a player is no longer active in the game, recorded rather than
/// removing them so replay and post-game review can see how they lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum LossReason {
    Decked,
    LifeTotalZeroOrLess,
    TenOrMorePoisonCounters,
    StateBasedActionLoss,
    Conceded,
    /// An opponent won the game outright via a replacement effect (e.g.
    /// Laboratory Maniac), ending the game for everyone else immediately
    /// rather than through the usual state-based-action loss checks.
    OpponentWon,
}

/// Represents the state of a single player within a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: PlayerName,

    /// Identifies the human or automated operator behind this player, if
    /// any -- `None` for an unused player slot in a smaller-than-four-player
    /// game.
    pub user_id: Option<UserId>,

    pub life: LifeValue,

    /// The player currently able to make decisions for this player; equal
    /// to `name` except under an effect like the Word of Command-style
    /// control-the-player's-turn cards, not otherwise modeled here.
    pub controller: PlayerName,

    pub counters: Counters,

    pub mana_pool: ManaPool,

    pub options: PlayerOptions,

    pub lost: Option<LossReason>,

    /// Whether this player has turned their starting hand face down and
    /// kept it (rule 103.4).
    pub mulligan_count: u32,
}

impl PlayerState {
    pub fn new(name: PlayerName, user_id: Option<UserId>, starting_life: LifeValue) -> Self {
        Self {
            name,
            user_id,
            life: starting_life,
            controller: name,
            counters: Counters::default(),
            mana_pool: ManaPool::default(),
            options: PlayerOptions::default(),
            lost: None,
            mulligan_count: 0,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        EntityId::Player(self.name)
    }

    pub fn is_active(&self) -> bool {
        self.lost.is_none()
    }
}

impl HasOwner for PlayerState {
    fn owner(&self) -> PlayerName {
        self.name
    }
}

impl HasController for PlayerState {
    fn controller(&self) -> PlayerName {
        self.controller
    }
}

pub trait PlayerQueries {
    fn player(&self, name: PlayerName) -> &PlayerState;
    fn player_mut(&mut self, name: PlayerName) -> &mut PlayerState;
}

/// Holds the [PlayerState] for every seat in the game. Always has all four
/// slots populated, with unused seats in a two- or three-player game simply
/// never assigned a turn (see [crate::game_states::turn_data::TurnData]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Players {
    one: PlayerState,
    two: PlayerState,
    three: PlayerState,
    four: PlayerState,
}

impl Players {
    pub fn new(players: [PlayerState; 4]) -> Self {
        let [one, two, three, four] = players;
        Self { one, two, three, four }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerState> {
        [&self.one, &self.two, &self.three, &self.four].into_iter()
    }
}

impl PlayerQueries for Players {
    fn player(&self, name: PlayerName) -> &PlayerState {
        match name {
            PlayerName::One => &self.one,
            PlayerName::Two => &self.two,
            PlayerName::Three => &self.three,
            PlayerName::Four => &self.four,
        }
    }

    fn player_mut(&mut self, name: PlayerName) -> &mut PlayerState {
        match name {
            PlayerName::One => &mut self.one,
            PlayerName::Two => &mut self.two,
            PlayerName::Three => &mut self.three,
            PlayerName::Four => &mut self.four,
        }
    }
}
