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

use data::card_states::counters::CounterKind;
use data::core::numerics::{Damage, LifeValue};
use data::events::game_event::{GameEvent, GameEventKind};
use data::game_states::game_state::{GameState, GameStatus};
use data::game_states::state_based_event::StateBasedEvent;
use data::player_states::player_state::{LossReason, PlayerQueries};
use primitives::game_primitives::{EntityId, PlayerName, Source};
use tracing::debug;
use utils::outcome::{self, Outcome};

use crate::queries::player_queries;
use crate::replacement;
use crate::triggers;

/// Deals `damage` to `player`, queuing a state-based check for their new
/// life total.
pub fn deal_damage(game: &mut GameState, source: Source, player: PlayerName, damage: Damage) -> Outcome {
    let subject = EntityId::Player(player);
    let Some(damage) = replacement::apply_to_amount(game, GameEventKind::DealsDamage, subject, damage as i64) else {
        return outcome::OK;
    };
    let damage = damage.max(0) as Damage;
    if damage == 0 {
        return outcome::OK;
    }

    debug!(?player, ?damage, "Dealing damage to player");
    game.player_mut(player).life -= damage as LifeValue;
    game.add_state_based_event(StateBasedEvent::LifeTotalDecreased(player));
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::DealsDamage,
            subject: EntityId::Player(player),
            source,
            secondary: None,
            controller_at_time: player,
        },
    );
    outcome::OK
}

/// `player` gains `amount` life (rule 119.3).
pub fn gain_life(game: &mut GameState, source: Source, player: PlayerName, amount: LifeValue) -> Outcome {
    if amount <= 0 {
        return outcome::OK;
    }
    let subject = EntityId::Player(player);
    let Some(amount) = replacement::apply_to_amount(game, GameEventKind::GainsLife, subject, amount) else {
        return outcome::OK;
    };
    if amount <= 0 {
        return outcome::OK;
    }

    debug!(?player, ?amount, "Player gains life");
    game.player_mut(player).life += amount;
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::GainsLife,
            subject: EntityId::Player(player),
            source,
            secondary: None,
            controller_at_time: player,
        },
    );
    outcome::OK
}

/// `player` loses `amount` life (rule 119.4), e.g. from a cost or a "lose
/// life" effect rather than combat/spell damage.
pub fn lose_life(game: &mut GameState, source: Source, player: PlayerName, amount: LifeValue) -> Outcome {
    if amount <= 0 {
        return outcome::OK;
    }
    let subject = EntityId::Player(player);
    let Some(amount) = replacement::apply_to_amount(game, GameEventKind::LosesLife, subject, amount) else {
        return outcome::OK;
    };
    if amount <= 0 {
        return outcome::OK;
    }

    debug!(?player, ?amount, "Player loses life");
    game.player_mut(player).life -= amount;
    game.add_state_based_event(StateBasedEvent::LifeTotalDecreased(player));
    let event_id = game.clock.new_event_id();
    triggers::collect(
        game,
        GameEvent {
            id: event_id,
            kind: GameEventKind::LosesLife,
            subject: EntityId::Player(player),
            source,
            secondary: None,
            controller_at_time: player,
        },
    );
    outcome::OK
}

/// `player` leaves the game by conceding (rule 104.3a), immediately and
/// unconditionally, unlike the other state-based losses in
/// [crate::mutations::state_based_actions].
pub fn concede(game: &mut GameState, player: PlayerName) -> Outcome {
    if game.player(player).lost.is_some() {
        return outcome::OK;
    }
    game.player_mut(player).lost = Some(LossReason::Conceded);
    let remaining = player_queries::active_players(game);
    if remaining.len() <= 1 {
        game.status = GameStatus::GameOver { winners: remaining.iter().collect() };
    }
    outcome::OK
}

/// `player` wins the game immediately via a replacement effect (e.g.
/// Laboratory Maniac's "you win the game instead"), rather than through the
/// usual elimination-to-one-remaining-player state-based check.
///
/// Callers are expected to have already checked
/// [crate::replacement::is_win_prevented]; this function does not re-check
/// it, matching [concede]'s unconditional immediacy.
pub fn win_game(game: &mut GameState, player: PlayerName) -> Outcome {
    if game.status.is_game_over() {
        return outcome::OK;
    }
    for opponent in player_queries::opponents_of(game, player).iter() {
        if game.player(opponent).lost.is_none() {
            game.player_mut(opponent).lost = Some(LossReason::OpponentWon);
        }
    }
    game.status = GameStatus::GameOver { winners: vec![player] };
    outcome::OK
}

/// Gives `player` `count` poison counters (rule 122.1e, 104.3h).
pub fn add_poison_counters(game: &mut GameState, player: PlayerName, count: u32) -> Outcome {
    if count == 0 {
        return outcome::OK;
    }
    game.player_mut(player).counters.add(CounterKind::Poison, count);
    game.add_state_based_event(StateBasedEvent::GainedPoisonCounters(player));
    outcome::OK
}
