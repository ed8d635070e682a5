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

//! The closed set of ways a submitted intent can fail to apply.
//!
//! Plain enum with a hand-written [std::fmt::Display] rather than a
//! `thiserror` derive, so that every caller matching on a variant -- to
//! decide whether to surface the error to the submitter, roll a tick back,
//! or stop accepting further intents entirely -- reads the propagation
//! policy directly off the match arms instead of an attribute.

use std::fmt;

use primitives::game_primitives::DecisionId;

/// Why [crate::tick::apply] rejected or failed to complete an intent.
#[derive(Debug)]
pub enum EngineError {
    /// The intent violates a game rule right now: wrong phase, not the
    /// actor's priority, an illegal target, insufficient mana. Rejected,
    /// state unchanged, not appended to the log, surfaced to the submitter
    /// only.
    IllegalIntent(String),
    /// The intent fails structural validation (a payload field referencing
    /// an object of the wrong kind, an out-of-range index). Same handling
    /// as [Self::IllegalIntent].
    MalformedIntent(String),
    /// A `submitDecision`/`timeout` intent's `replyTo` does not match any
    /// currently pending decision. Same handling as [Self::IllegalIntent].
    UnknownDecision(DecisionId),
    /// An internal invariant was violated partway through applying an
    /// intent (e.g. an object vanished from its claimed zone). The tick is
    /// aborted and the game state rolled back to its pre-tick snapshot; a
    /// diagnostic is recorded and the engine keeps serving later intents.
    Inconsistent(String),
    /// Unrecoverable corruption was detected (e.g. a gap in the event
    /// log's sequence numbers on replay). The game is marked failed; no
    /// further intents are accepted.
    Fatal(String),
}

impl EngineError {
    /// Whether this error leaves the game able to accept further intents.
    /// Only [Self::Fatal] does not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::Fatal(_))
    }

    /// Whether applying the intent that produced this error actually
    /// mutated game state that must now be rolled back. True only for
    /// [Self::Inconsistent]; the other variants are rejected before any
    /// mutation is attempted or committed.
    pub fn requires_rollback(&self) -> bool {
        matches!(self, EngineError::Inconsistent(_))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalIntent(detail) => write!(f, "illegal intent: {detail}"),
            EngineError::MalformedIntent(detail) => write!(f, "malformed intent: {detail}"),
            EngineError::UnknownDecision(id) => write!(f, "unknown or expired decision: {id:?}"),
            EngineError::Inconsistent(detail) => write!(f, "inconsistent game state, tick rolled back: {detail}"),
            EngineError::Fatal(detail) => write!(f, "fatal: {detail}"),
        }
    }
}

impl std::error::Error for EngineError {}
