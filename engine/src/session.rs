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

//! Owns a single game's state, its event log, and the snapshot/rollback
//! bookkeeping around [crate::tick::apply].

use data::game_states::game_state::GameState;
use tracing::{instrument, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::intent::Intent;
use crate::log::EventLog;
use crate::tick::{self, DispatchOutcome};

/// A stalled intent waiting on a decision, together with the state snapshot
/// taken just before it was first dispatched.
///
/// [data::prompts::prompt_manager::PromptManager::send] answers a prompt by
/// replaying the owning rules call from scratch once a response is queued,
/// so the intent that raised the decision must be re-dispatched in full
/// against the *pre-dispatch* state, not resumed partway through.
struct PendingTick {
    intent: Intent,
    snapshot: Box<GameState>,
}

/// The result of submitting one intent to a [GameSession].
#[derive(Debug)]
pub enum SessionOutcome {
    /// The intent committed; the game is ready for the next one.
    Applied,
    /// A decision is now pending; answer it with a `submitDecision` or
    /// `timeout` intent carrying the same [data::prompts::prompt::Prompt::id].
    Decision,
    /// The game has ended.
    GameOver,
}

/// A single game together with everything needed to drive it one intent at
/// a time: its log, its engine-level configuration, and -- while a decision
/// is pending -- the stalled intent and the snapshot to resume it from.
pub struct GameSession<L: EventLog> {
    pub game: GameState,
    pub config: EngineConfig,
    log: L,
    pending: Option<PendingTick>,
    /// Set once an [EngineError::Fatal] occurs; refuses every subsequent
    /// intent without inspecting it.
    failed: bool,
}

impl<L: EventLog> GameSession<L> {
    pub fn new(game: GameState, config: EngineConfig, log: L) -> Self {
        Self { game, config, log, pending: None, failed: false }
    }

    /// Submits `intent` for application.
    ///
    /// On [EngineError::IllegalIntent], [EngineError::MalformedIntent], or
    /// [EngineError::UnknownDecision], the game is left untouched and the
    /// intent is not appended to the log. On [EngineError::Inconsistent],
    /// the game is rolled back to its state before this call and a
    /// diagnostic is logged, but the session keeps accepting intents. On
    /// [EngineError::Fatal], the game is marked failed and every subsequent
    /// call returns the same error without being applied.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self, intent: Intent) -> Result<SessionOutcome, EngineError> {
        if self.failed {
            return Err(EngineError::Fatal("game previously failed and accepts no further intents".to_string()));
        }

        // A submitDecision/timeout intent resumes whatever intent actually
        // stalled, rather than being dispatched on its own -- it only
        // supplies the queued response that the resumed dispatch consumes.
        if matches!(intent, Intent::SubmitDecision { .. } | Intent::Timeout { .. }) {
            return self.resume_pending(intent);
        }

        if self.pending.is_some() {
            return Err(EngineError::IllegalIntent(
                "a decision is pending; submit a submitDecision or timeout intent first".to_string(),
            ));
        }

        tick::precheck(&self.game, &intent)?;
        self.dispatch_and_classify(intent)
    }

    fn resume_pending(&mut self, reply: Intent) -> Result<SessionOutcome, EngineError> {
        let Some(pending) = self.pending.take() else {
            let reply_to = match &reply {
                Intent::SubmitDecision { reply_to, .. } | Intent::Timeout { reply_to, .. } => *reply_to,
                _ => unreachable!("checked by caller"),
            };
            return Err(EngineError::UnknownDecision(reply_to));
        };

        self.game = (*pending.snapshot).clone();
        // Re-raise the original prompt so the reply's `reply_to` can be
        // checked, then dispatch the reply itself to queue the response.
        if let Err(err) = self.redispatch_to_original_prompt(&pending.intent) {
            // Whatever the failed redispatch mutated, the pre-dispatch
            // snapshot is still clean; keep it around for the next attempt
            // rather than re-snapshotting the now-possibly-inconsistent game.
            self.game = (*pending.snapshot).clone();
            self.pending = Some(PendingTick { intent: pending.intent, snapshot: pending.snapshot });
            return Err(err);
        }

        if let Err(err) = tick::apply(&mut self.game, &self.config, &reply).map(|_| ()) {
            self.game = (*pending.snapshot).clone();
            self.pending = Some(PendingTick { intent: pending.intent, snapshot: pending.snapshot });
            return Err(err);
        }

        // The two dispatches above only got the response queued; some
        // prompts (e.g. one raised mid-way through ordering simultaneous
        // triggers) are stalled by code that drains state as it runs and
        // cannot be resumed partway through a second time. Go back to the
        // untouched pre-dispatch state and redispatch the original intent
        // once more, carrying forward only the now-queued response, so it
        // runs exactly once with the response already available instead of
        // stalling again.
        let prompts = self.game.prompts.clone();
        self.game = (*pending.snapshot).clone();
        self.game.prompts = prompts;
        self.dispatch_and_classify(pending.intent)
    }

    /// Replays `intent` up to the point it stalls again, so the decision it
    /// raised is back in `self.game.prompts.current_prompt` for the reply to
    /// be checked and queued against.
    fn redispatch_to_original_prompt(&mut self, intent: &Intent) -> Result<(), EngineError> {
        match tick::apply(&mut self.game, &self.config, intent) {
            Ok(DispatchOutcome::Decision) => Ok(()),
            Ok(_) => Err(EngineError::Inconsistent(
                "expected the resumed intent to still be waiting on a decision".to_string(),
            )),
            Err(err) => Err(err),
        }
    }

    fn dispatch_and_classify(&mut self, intent: Intent) -> Result<SessionOutcome, EngineError> {
        let snapshot = self.config.snapshot_for_rollback.then(|| Box::new(self.game.clone()));

        match tick::apply(&mut self.game, &self.config, &intent) {
            Ok(DispatchOutcome::Applied) => {
                if let Err(report) = self.log.append(self.game.id, &intent) {
                    warn!(?report, "failed to append intent to the event log");
                }
                self.game.clock.advance_seq();
                Ok(SessionOutcome::Applied)
            }
            Ok(DispatchOutcome::GameOver) => {
                if let Err(report) = self.log.append(self.game.id, &intent) {
                    warn!(?report, "failed to append intent to the event log");
                }
                Ok(SessionOutcome::GameOver)
            }
            Ok(DispatchOutcome::Decision) => {
                let snapshot = snapshot.unwrap_or_else(|| {
                    // Without rollback enabled there is no pre-dispatch state to
                    // resume from; treat the in-progress state as its own
                    // baseline, accepting that a second decision within the
                    // same intent cannot be resumed correctly.
                    Box::new(self.game.clone())
                });
                self.pending = Some(PendingTick { intent, snapshot });
                Ok(SessionOutcome::Decision)
            }
            Err(err) if err.requires_rollback() => {
                self.restore_and_reject(
                    snapshot.unwrap_or_else(|| Box::new(self.game.clone())),
                    err,
                )?;
                unreachable!("restore_and_reject always returns Err")
            }
            Err(EngineError::Fatal(detail)) => {
                self.failed = true;
                Err(EngineError::Fatal(detail))
            }
            Err(err) => Err(err),
        }
    }

    fn restore_and_reject(&mut self, snapshot: Box<GameState>, err: EngineError) -> Result<(), EngineError> {
        warn!(%err, "tick produced an inconsistent state, rolling back");
        self.game = *snapshot;
        Err(err)
    }
}
