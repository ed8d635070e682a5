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

/// Returns an [crate::outcome::StopCondition::Error] [Outcome](crate::outcome::Outcome)
/// if the given condition is false, with a formatted message describing
/// which rule was violated.
///
/// Mirrors `anyhow::ensure!`, but produces a [crate::outcome::StopCondition]
/// instead of bailing out of the function with a bare `Result`.
#[macro_export]
macro_rules! verify {
    ($condition:expr, $($arg:tt)*) => {
        if !$condition {
            return Err($crate::outcome::StopCondition::Error(color_eyre::eyre::eyre!($($arg)*)));
        }
    };
}
