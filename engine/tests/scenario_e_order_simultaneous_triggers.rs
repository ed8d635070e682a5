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

//! Two triggers controlled by the same player that fire simultaneously are
//! not auto-ordered: the engine stalls on a decision, and the order the
//! controller chooses decides which one resolves first (rule 603.3b).

mod support;

use data::card_definitions::card_name::CardName;
use data::game_states::game_phase_step::GamePhaseStep;
use data::prompts::prompt::{PromptKind, PromptResponse};
use engine::config::EngineConfig;
use engine::intent::Intent;
use engine::log::InMemoryEventLog;
use engine::session::{GameSession, SessionOutcome};
use primitives::game_primitives::{PlayerName, StackItemId};

#[test]
fn controller_chooses_trigger_order_and_the_stack_reflects_it() {
    let mut game = support::new_game(9);
    game.step = GamePhaseStep::PreCombatMain;
    game.turn.active_player = PlayerName::One;
    let mut session = GameSession::new(game, EngineConfig::default(), InMemoryEventLog::default());

    let outcome = session
        .submit(Intent::CreateToken { controller: PlayerName::One, token_name: CardName::WELCOME_STRANGER, count: 2 })
        .unwrap();
    assert!(matches!(outcome, SessionOutcome::Decision));

    let prompt = session.game.prompts.current_prompt.clone().expect("a decision should be pending");
    assert_eq!(prompt.player, PlayerName::One);
    let PromptKind::OrderSimultaneousTriggers { pending } = prompt.kind else {
        panic!("expected an OrderSimultaneousTriggers prompt, got {:?}", prompt.kind);
    };
    assert_eq!(pending.len(), 2);
    let (t1, t2) = (pending[0], pending[1]);

    let outcome = session
        .submit(Intent::SubmitDecision {
            player: PlayerName::One,
            reply_to: prompt.id,
            response: PromptResponse::OrderSimultaneousTriggers(vec![t1, t2]),
        })
        .unwrap();
    assert!(matches!(outcome, SessionOutcome::Applied));

    let stack: Vec<StackItemId> = session.game.zones.stack().to_vec();
    assert_eq!(stack, vec![StackItemId::StackAbility(t1), StackItemId::StackAbility(t2)]);

    let hand_before = session.game.zones.hand(PlayerName::One).len();
    session.submit(Intent::ResolveTop).unwrap();
    let stack_after: Vec<StackItemId> = session.game.zones.stack().to_vec();
    assert_eq!(stack_after, vec![StackItemId::StackAbility(t1)], "t2 was pushed last and resolves first");
    assert_eq!(session.game.zones.hand(PlayerName::One).len(), hand_before + 1);
}
