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

//! Applies a single [Intent] to a [GameState]: the legality precheck,
//! dispatch to the owning `rules` mutation, and the replacement -> triggers
//! -> state-based actions -> layer recompute pipeline that follows every
//! mutation (rule 704.3).
//!
//! This module has no notion of logging, snapshotting, or rolling back --
//! see [crate::session::GameSession] for that. It exists separately so the
//! dispatch-and-classify step is easy to call identically from live play
//! and from [crate::replay].

use data::game_states::game_state::GameState;
use data::player_states::player_state::PlayerQueries;
use data::prompts::prompt::PromptResponse;
use primitives::game_primitives::{CardId, EntityId, PlayerName};
use rules::mutations::{abilities, combat, land, library, move_card, permanents, players, spells};
use rules::mutations::state_based_actions;
use rules::{layers, legality, resolve, steps, triggers};
use tracing::instrument;
use utils::outcome::{self, Outcome, StopCondition};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::intent::{CounterSelector, Intent};

/// What happened after dispatching one [Intent] all the way through the
/// post-mutation pipeline.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The intent was fully applied and the game is ready for the next one.
    Applied,
    /// A decision was raised; see `game.prompts.current_prompt`.
    Decision,
    /// The game has ended.
    GameOver,
}

/// Checks whether `intent` is legal for `game` to apply right now, without
/// mutating anything.
///
/// Distinguishes [EngineError::IllegalIntent] (the action violates a game
/// rule) from [EngineError::MalformedIntent] (the payload references an
/// object that does not exist or is of the wrong kind) so callers can
/// surface the right diagnosis to the submitter.
pub fn precheck(game: &GameState, intent: &Intent) -> Result<(), EngineError> {
    match intent {
        Intent::PassPriority { player } => illegal_unless(legality::can_pass_priority(game, *player), intent),
        Intent::CastSpell { player, card_id, .. } => {
            require_card(game, *card_id)?;
            illegal_unless(legality::can_cast_spell(game, *player, *card_id), intent)
        }
        Intent::ActivateAbility { player, ability_id, .. } => {
            require_card(game, ability_id.card_id)?;
            illegal_unless(legality::can_activate_ability(game, *player, *ability_id), intent)
        }
        Intent::PlayLand { player, card_id } => {
            require_card(game, *card_id)?;
            illegal_unless(legality::can_play_land(game, *player, *card_id), intent)
        }
        Intent::DeclareAttackers { attackers, .. } => {
            for &id in attackers {
                require_card(game, id)?;
                illegal_unless(legality::can_declare_attacker(game, id), intent)?;
            }
            Ok(())
        }
        Intent::DeclareBlockers { blocks } => {
            for &(blocker, attacker) in blocks {
                require_card(game, blocker)?;
                require_card(game, attacker)?;
                illegal_unless(legality::can_declare_blocker(game, attacker, blocker), intent)?;
            }
            Ok(())
        }
        Intent::TapPermanent { card_id } | Intent::UntapPermanent { card_id } => require_card(game, *card_id),
        Intent::SetCommander { card_id, .. } => require_card(game, *card_id),
        Intent::MulliganBottomCards { cards, .. } => {
            cards.iter().try_for_each(|&id| require_card(game, id))
        }
        _ => Ok(()),
    }
}

fn illegal_unless(condition: bool, intent: &Intent) -> Result<(), EngineError> {
    if condition {
        Ok(())
    } else {
        Err(EngineError::IllegalIntent(format!("{intent:?} is not legal right now")))
    }
}

fn require_card(game: &GameState, id: CardId) -> Result<(), EngineError> {
    if game.zones.has_card(id) {
        Ok(())
    } else {
        Err(EngineError::MalformedIntent(format!("no such card: {id:?}")))
    }
}

/// Dispatches `intent` to the `rules` mutation that owns it, then runs the
/// post-mutation pipeline, classifying the result.
#[instrument(level = "debug", skip(game, config))]
pub fn apply(game: &mut GameState, config: &EngineConfig, intent: &Intent) -> Result<DispatchOutcome, EngineError> {
    match dispatch(game, config, intent).and_then(|()| run_post_mutation_pipeline(game)) {
        Ok(()) => Ok(if game.status.is_game_over() { DispatchOutcome::GameOver } else { DispatchOutcome::Applied }),
        Err(StopCondition::Decision) => Ok(DispatchOutcome::Decision),
        Err(StopCondition::GameOver) => Ok(DispatchOutcome::GameOver),
        Err(StopCondition::Error(report)) => {
            if let Some(unknown) = report.downcast_ref::<UnknownDecision>() {
                Err(EngineError::UnknownDecision(unknown.0))
            } else {
                Err(EngineError::Inconsistent(format!("{report:#}")))
            }
        }
    }
}

/// A pending decision's id did not match the one named by a `submitDecision`
/// or `timeout` intent. Carried through [color_eyre::Report] since
/// [utils::outcome::Outcome] has no dedicated variant for it.
#[derive(Debug)]
struct UnknownDecision(primitives::game_primitives::DecisionId);

impl std::fmt::Display for UnknownDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no pending decision matches {:?}", self.0)
    }
}

impl std::error::Error for UnknownDecision {}

fn dispatch(game: &mut GameState, config: &EngineConfig, intent: &Intent) -> Outcome {
    match intent.clone() {
        Intent::RngSeed { seed } => {
            game.rng = primitives::clock::GameRng::new(seed);
            outcome::OK
        }
        Intent::Join { player, user_id } => {
            game.player_mut(player).user_id = Some(user_id);
            outcome::OK
        }
        Intent::SetCommander { player: _, card_id } => {
            move_card::run(game, primitives::game_primitives::Source::Game, card_id, primitives::game_primitives::Zone::Command)?;
            if let Some(card) = game.zones.card_mut(card_id) {
                card.is_commander = true;
            }
            outcome::OK
        }
        Intent::DeckImportResolved { player, cards } => {
            for card_name in cards {
                let object_id = game.clock.new_object_id();
                let timestamp = game.clock.new_timestamp();
                game.zones.create_card_in_zone(
                    card_name,
                    data::card_states::card_kind::CardKind::Normal,
                    player,
                    primitives::game_primitives::Zone::Library,
                    object_id,
                    timestamp,
                );
            }
            outcome::OK
        }
        Intent::ShuffleLibrary { player } => {
            game.shuffle_library(player);
            outcome::OK
        }
        Intent::DrawCards { player, count } => {
            library::draw_cards(game, primitives::game_primitives::Source::Game, player, count)
        }
        Intent::MulliganDecision { player, keep } => {
            reply_to_current_prompt(game, player, PromptResponse::Mulligan(keep))
        }
        Intent::MulliganBottomCards { player, cards } => {
            reply_to_current_prompt(game, player, PromptResponse::MulliganBottomCards(cards))
        }
        Intent::PassPriority { player } => rules::mutations::priority::pass(game, player),
        Intent::CastSpell { player, card_id, targets, x_value } => {
            spells::cast(game, player, card_id, targets, x_value)
        }
        Intent::ActivateAbility { player, ability_id, targets } => {
            abilities::activate(game, player, ability_id, targets)
        }
        Intent::PlayLand { player, card_id } => land::play(game, player, card_id),
        Intent::PushStack { item } => {
            game.zones.push_to_stack(item);
            outcome::OK
        }
        Intent::ResolveTop => resolve::resolve_top_of_stack(game),
        Intent::DeclareAttackers { player, attackers } => combat::declare_attackers(game, player, attackers),
        Intent::DeclareBlockers { blocks } => combat::declare_blockers(game, blocks),
        Intent::DealCombatDamage => steps::assign_combat_damage(game),
        Intent::NextStep => steps::advance(game),
        Intent::NextTurn => advance_to_next_turn(game, config.max_steps_per_turn_advance),
        Intent::SubmitDecision { player, reply_to, response } => {
            check_reply_to(game, reply_to)?;
            reply_to_current_prompt(game, player, response)
        }
        Intent::Concede { player } => players::concede(game, player),
        Intent::DealDamage { source, target, amount } => match target {
            EntityId::Player(player) => players::deal_damage(game, source, player, amount),
            EntityId::Card(card_id) => permanents::mark_damage(game, card_id, amount),
            EntityId::StackAbility(_) => outcome::OK,
        },
        Intent::SetCounters { target, kind, delta } => apply_counter_delta(game, target, kind, delta),
        Intent::CreateToken { controller, token_name, count } => {
            permanents::create_token(game, primitives::game_primitives::Source::Game, controller, token_name, count)
        }
        Intent::TapPermanent { card_id } => permanents::tap(game, card_id),
        Intent::UntapPermanent { card_id } => permanents::untap(game, card_id),
        Intent::Timeout { player, reply_to } => {
            check_reply_to(game, reply_to)?;
            let response = default_response_for_current_prompt(game)?;
            reply_to_current_prompt(game, player, response)
        }
    }
}

fn check_reply_to(game: &GameState, reply_to: primitives::game_primitives::DecisionId) -> Outcome {
    match &game.prompts.current_prompt {
        Some(prompt) if prompt.id == reply_to => outcome::OK,
        _ => Err(StopCondition::Error(color_eyre::Report::new(UnknownDecision(reply_to)))),
    }
}

/// Queues `response` and re-evaluates whatever rules call originally raised
/// the current prompt is out of scope here -- see
/// [crate::session::GameSession::submit] for how a stalled intent is
/// re-dispatched once its decision is answered.
fn reply_to_current_prompt(game: &mut GameState, _player: PlayerName, response: PromptResponse) -> Outcome {
    game.prompts.supply_response(response);
    outcome::OK
}

/// A conservative default answer for whatever prompt is currently pending,
/// used when a [Intent::Timeout] fires instead of a real reply.
fn default_response_for_current_prompt(game: &GameState) -> Result<PromptResponse, StopCondition> {
    let Some(prompt) = &game.prompts.current_prompt else {
        return Err(StopCondition::Error(color_eyre::eyre::eyre!("no prompt is currently pending")));
    };
    Ok(match &prompt.kind {
        data::prompts::prompt::PromptKind::Mulligan => PromptResponse::Mulligan(false),
        data::prompts::prompt::PromptKind::MulliganBottomCards { .. } => PromptResponse::MulliganBottomCards(vec![]),
        data::prompts::prompt::PromptKind::SelectTargets { .. } => PromptResponse::SelectTargets(vec![]),
        data::prompts::prompt::PromptKind::ChooseMode { .. } => PromptResponse::ChooseMode(vec![]),
        data::prompts::prompt::PromptKind::ChooseXValue { .. } => PromptResponse::ChooseXValue(0),
        data::prompts::prompt::PromptKind::DeclareAttackers { .. } => PromptResponse::DeclareAttackers(vec![]),
        data::prompts::prompt::PromptKind::DeclareBlockers { .. } => PromptResponse::DeclareBlockers(vec![]),
        data::prompts::prompt::PromptKind::OrderSimultaneousTriggers { pending } => {
            PromptResponse::OrderSimultaneousTriggers(pending.clone())
        }
        data::prompts::prompt::PromptKind::May { .. } => PromptResponse::May(false),
        data::prompts::prompt::PromptKind::Sacrifice { .. } => PromptResponse::Sacrifice(vec![]),
        data::prompts::prompt::PromptKind::Discard { .. } => PromptResponse::Discard(vec![]),
        data::prompts::prompt::PromptKind::Scry { .. } => PromptResponse::Scry(vec![]),
        data::prompts::prompt::PromptKind::Surveil { .. } => PromptResponse::Surveil(vec![]),
    })
}

fn apply_counter_delta(game: &mut GameState, target: EntityId, kind: CounterSelector, delta: i32) -> Outcome {
    let counters = match target {
        EntityId::Card(id) => match game.zones.card_mut(id) {
            Some(card) => &mut card.counters,
            None => return Err(StopCondition::Error(color_eyre::eyre::eyre!("no such card: {id:?}"))),
        },
        EntityId::Player(name) => &mut game.players.player_mut(name).counters,
        EntityId::StackAbility(_) => return outcome::OK,
    };

    match kind {
        CounterSelector::Plus1Plus1 => {
            if delta >= 0 {
                counters.p1p1 = counters.p1p1.saturating_add(delta as u32);
            } else {
                counters.p1p1 = counters.p1p1.saturating_sub(delta.unsigned_abs());
            }
        }
        CounterSelector::Minus1Minus1 => {
            if delta >= 0 {
                counters.m1m1 = counters.m1m1.saturating_add(delta as u32);
            } else {
                counters.m1m1 = counters.m1m1.saturating_sub(delta.unsigned_abs());
            }
        }
        CounterSelector::Named(kind) => {
            if delta >= 0 {
                counters.add(kind, delta as u32);
            } else {
                counters.remove(kind, delta.unsigned_abs());
            }
        }
    }
    outcome::OK
}

/// Calls [steps::advance] until the turn number increases, up to `limit`
/// times, so a single `nextTurn` intent skips through every remaining step
/// of the current turn.
fn advance_to_next_turn(game: &mut GameState, limit: u32) -> Outcome {
    let starting_turn = game.turn.turn_number;
    for _ in 0..limit {
        steps::advance(game)?;
        if game.turn.turn_number != starting_turn {
            return outcome::OK;
        }
    }
    Err(StopCondition::Error(color_eyre::eyre::eyre!(
        "turn did not advance within {limit} steps"
    )))
}

/// Runs the fixed pipeline that follows every committed mutation: recompute
/// continuous effects (so triggers observe current state), collect any
/// newly-pending triggered abilities onto the stack, check state-based
/// actions to a fixpoint (rule 704.3), then recompute once more so the next
/// legality check or query sees current layers.
fn run_post_mutation_pipeline(game: &mut GameState) -> Outcome {
    layers::recompute(game)?;
    triggers::push_pending_triggers_onto_stack(game)?;
    state_based_actions::run(game)?;
    layers::recompute(game)?;
    outcome::OK
}

#[cfg(test)]
mod tests {
    use data::card_definitions::card_name::CardName;
    use data::game_states::game_configuration::GameConfiguration;
    use data::player_states::player_state::{PlayerState, Players};
    use primitives::game_primitives::GameId;

    use super::*;

    fn new_game() -> GameState {
        let players = Players::new([
            PlayerState::new(PlayerName::One, None, 20),
            PlayerState::new(PlayerName::Two, None, 20),
            PlayerState::new(PlayerName::Three, None, 20),
            PlayerState::new(PlayerName::Four, None, 20),
        ]);
        GameState::new(GameId(uuid::Uuid::nil()), GameConfiguration::default(), players, 7)
    }

    #[test]
    fn deck_import_then_shuffle_then_draw_populates_hand() {
        let mut game = new_game();
        let config = EngineConfig::default();
        let cards = vec![CardName::FOREST; 10];

        apply(&mut game, &config, &Intent::RngSeed { seed: 99 }).unwrap();
        apply(&mut game, &config, &Intent::DeckImportResolved { player: PlayerName::One, cards }).unwrap();
        apply(&mut game, &config, &Intent::ShuffleLibrary { player: PlayerName::One }).unwrap();
        apply(&mut game, &config, &Intent::DrawCards { player: PlayerName::One, count: 3 }).unwrap();

        assert_eq!(game.zones.hand(PlayerName::One).len(), 3);
        assert_eq!(game.zones.library(PlayerName::One).len(), 7);
    }

    #[test]
    fn illegal_pass_priority_is_rejected_without_mutating_state() {
        let game = new_game();
        let err = precheck(&game, &Intent::PassPriority { player: PlayerName::Two }).unwrap_err();
        assert!(matches!(err, EngineError::IllegalIntent(_)));
    }

    #[test]
    fn malformed_cast_spell_referencing_unknown_card_is_rejected() {
        let game = new_game();
        let err = precheck(
            &game,
            &Intent::CastSpell { player: PlayerName::One, card_id: CardId::default(), targets: vec![], x_value: None },
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::MalformedIntent(_)));
    }
}
