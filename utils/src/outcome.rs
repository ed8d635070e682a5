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

use color_eyre::Report;

/// Possible reasons why the rules engine should halt.
#[derive(Debug)]
#[must_use]
pub enum StopCondition {
    /// A pending decision has been raised and the tick must stop and return
    /// it to the caller.
    Decision,
    /// The game has ended.
    GameOver,
    /// An unexpected internal error occurred.
    Error(Report),
}

impl<E: Into<Report>> From<E> for StopCondition {
    fn from(value: E) -> Self {
        StopCondition::Error(value.into())
    }
}

/// Represents the result of some game mutation.
///
/// The "outcome" system is a wrapper around [Result] that adds additional
/// cases where the rules engine should halt, which are not necessarily
/// traditional errors. See [StopCondition].
pub type Outcome = Result<(), StopCondition>;

/// Equivalent alias to [Outcome] which wraps a returned value.
pub type Value<T> = Result<T, StopCondition>;

/// Mutation completed successfully, execution can continue.
pub const OK: Outcome = Ok(());

/// Mutation produced a choice the user must make; execution should halt
/// until the choice is made and then resume.
pub const DECISION: Outcome = Err(StopCondition::Decision);

/// Mutation resulted in the game being over; execution should halt.
pub const GAME_OVER: Outcome = Err(StopCondition::GameOver);

/// Runs `function`, swallowing any [StopCondition::Decision] or
/// [StopCondition::GameOver] produced by it while still propagating hard
/// errors.
///
/// Used by dispatch loops (e.g. firing N independent trigger callbacks)
/// where one callback halting should not prevent the others from running.
pub fn execute(function: impl FnOnce() -> Outcome) {
    if let Err(StopCondition::Error(report)) = function() {
        tracing::warn!(?report, "Error while executing dispatched callback");
    }
}
