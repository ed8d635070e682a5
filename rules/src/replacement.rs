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

//! Applies registered replacement effects to an event before it happens
//! (rule 614).
//!
//! Each function here consumes matching effects from
//! [data::game_states::game_state::GameState::replacement_effects] against a
//! single in-flight event and returns the outcome the caller should apply
//! instead of the original one. Everything here is a pure read-modify step;
//! deciding which effect applies when more than one matches (rule 616.1) is
//! simplified to registration order rather than prompting the affected
//! player to choose.

use data::card_states::counters::CounterKind;
use data::effects::replacement::{ReplacementAction, ReplacementEffectId};
use data::events::game_event::GameEventKind;
use data::game_states::game_state::GameState;
use primitives::game_primitives::{EntityId, PlayerName, Zone};

/// The result of applying every "would enter the battlefield" replacement
/// effect registered against `subject`.
#[derive(Debug, Clone)]
pub struct BattlefieldEntryPlan {
    /// The zone the object actually enters; `Battlefield` unless a
    /// [ReplacementAction::ChangeDestination] matched.
    pub zone: Zone,
    pub tapped: bool,
    pub counters: Vec<(CounterKind, u32)>,
}

/// Computes how `subject` actually enters the battlefield, consuming any
/// one-shot effects that applied.
///
/// Called by [crate::mutations::move_card::run] before an object's zone is
/// actually changed to `Battlefield`.
pub fn plan_battlefield_entry(game: &mut GameState, subject: EntityId) -> BattlefieldEntryPlan {
    let mut plan = BattlefieldEntryPlan { zone: Zone::Battlefield, tapped: false, counters: vec![] };

    for action in matching_actions(game, GameEventKind::WouldEnterBattlefield, subject) {
        match action {
            ReplacementAction::EnterTapped => plan.tapped = true,
            ReplacementAction::EnterWithCounters { kind, count } => plan.counters.push((kind, count)),
            ReplacementAction::ChangeDestination(zone) => plan.zone = zone,
            ReplacementAction::Prevent
            | ReplacementAction::Skip
            | ReplacementAction::Modify(_)
            | ReplacementAction::Win => {}
        }
    }

    plan
}

/// Applies every replacement effect matching an event of `kind` affecting
/// `subject` to `amount`, in registration order.
///
/// Returns `None` if the event is prevented or skipped outright, otherwise
/// the (possibly modified) amount to actually apply. Used for numeric events
/// like damage, life gain/loss, and card draw.
pub fn apply_to_amount(game: &mut GameState, kind: GameEventKind, subject: EntityId, amount: i64) -> Option<i64> {
    let mut value = amount;
    for action in matching_actions(game, kind, subject) {
        match action {
            ReplacementAction::Prevent | ReplacementAction::Skip => return None,
            ReplacementAction::Modify(modification) => value = modification.apply(value),
            ReplacementAction::EnterTapped
            | ReplacementAction::EnterWithCounters { .. }
            | ReplacementAction::ChangeDestination(_)
            | ReplacementAction::Win => {}
        }
    }
    Some(value)
}

/// Returns whether any effect matching an event of `kind` affecting
/// `subject` would prevent or skip it outright, without needing a numeric
/// amount (e.g. "this permanent can't be destroyed").
pub fn is_prevented(game: &mut GameState, kind: GameEventKind, subject: EntityId) -> bool {
    matching_actions(game, kind, subject)
        .iter()
        .any(|action| matches!(action, ReplacementAction::Prevent | ReplacementAction::Skip))
}

/// Returns whether `player` winning the game right now would itself be
/// blocked by an opponent's "your opponents can't win the game" style
/// effect (rule 104.4). A pure read, since this is always a continuous
/// static-ability effect rather than a one-shot usage.
pub fn is_win_prevented(game: &GameState, player: PlayerName) -> bool {
    game.replacement_effects
        .matching(GameEventKind::WouldWin, EntityId::Player(player))
        .iter()
        .any(|effect| matches!(effect.action, ReplacementAction::Prevent) && effect.controller != player)
}

/// Collects, and marks used, every action from effects currently registered
/// against an event of `kind` affecting `subject`. `pub(crate)` rather than
/// folded into [apply_to_amount]/[is_prevented] because some callers (e.g.
/// an empty-library draw) need to inspect a non-numeric, non-prevent action
/// like [ReplacementAction::Win] directly.
pub(crate) fn matching_actions(game: &mut GameState, kind: GameEventKind, subject: EntityId) -> Vec<ReplacementAction> {
    let ids: Vec<ReplacementEffectId> =
        game.replacement_effects.matching(kind, subject).iter().map(|effect| effect.id).collect();

    let mut actions = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(action) =
            game.replacement_effects.effects().iter().find(|effect| effect.id == id).map(|e| e.action.clone())
        else {
            continue;
        };
        actions.push(action);
        game.replacement_effects.mark_used(id);
    }
    actions
}
