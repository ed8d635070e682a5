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

use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use utils::outcome::{StopCondition, Value};

use crate::prompts::prompt::{Prompt, PromptResponse};

/// Resolves player decisions during a single simulation pass.
///
/// Responses are supplied up front (from the intent log on replay, or
/// interactively one at a time when driving a live game) and consumed in
/// order. When a decision has no recorded response yet, the current prompt
/// is stashed here and [StopCondition::Decision] is returned so the caller
/// can halt the simulation and ask for player input, re-entering this exact
/// point in the rules once a response becomes available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptManager {
    pub current_prompt: Option<Prompt>,
    pub responses: Vec<PromptResponse>,
    pub response_index: usize,
}

impl PromptManager {
    /// Clears all stored prompt state and queues `responses` to satisfy
    /// upcoming decisions in order, as happens on log replay.
    pub fn reset_with_responses(&mut self, responses: Vec<PromptResponse>) {
        self.current_prompt = None;
        self.responses = responses;
        self.response_index = 0;
    }

    pub fn supply_response(&mut self, response: PromptResponse) {
        self.responses.push(response);
    }

    fn send(&mut self, prompt: Prompt) -> Value<&PromptResponse> {
        if let Some(response) = self.responses.get(self.response_index) {
            self.response_index += 1;
            Ok(response)
        } else {
            self.current_prompt = Some(prompt);
            Err(StopCondition::Decision)
        }
    }

    pub fn mulligan(&mut self, prompt: Prompt) -> Value<bool> {
        match self.send(prompt)? {
            PromptResponse::Mulligan(value) => Ok(*value),
            _ => Err(mismatch()),
        }
    }

    pub fn select_targets(&mut self, prompt: Prompt) -> Value<Vec<primitives::game_primitives::EntityId>> {
        match self.send(prompt)? {
            PromptResponse::SelectTargets(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn choose_mode(&mut self, prompt: Prompt) -> Value<Vec<usize>> {
        match self.send(prompt)? {
            PromptResponse::ChooseMode(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn choose_x_value(&mut self, prompt: Prompt) -> Value<u64> {
        match self.send(prompt)? {
            PromptResponse::ChooseXValue(value) => Ok(*value),
            _ => Err(mismatch()),
        }
    }

    pub fn declare_attackers(
        &mut self,
        prompt: Prompt,
    ) -> Value<Vec<primitives::game_primitives::CardId>> {
        match self.send(prompt)? {
            PromptResponse::DeclareAttackers(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn declare_blockers(
        &mut self,
        prompt: Prompt,
    ) -> Value<Vec<(primitives::game_primitives::CardId, primitives::game_primitives::CardId)>> {
        match self.send(prompt)? {
            PromptResponse::DeclareBlockers(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn order_simultaneous_triggers(
        &mut self,
        prompt: Prompt,
    ) -> Value<Vec<primitives::game_primitives::StackAbilityId>> {
        match self.send(prompt)? {
            PromptResponse::OrderSimultaneousTriggers(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn may(&mut self, prompt: Prompt) -> Value<bool> {
        match self.send(prompt)? {
            PromptResponse::May(value) => Ok(*value),
            _ => Err(mismatch()),
        }
    }

    pub fn sacrifice(&mut self, prompt: Prompt) -> Value<Vec<primitives::game_primitives::CardId>> {
        match self.send(prompt)? {
            PromptResponse::Sacrifice(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn discard(&mut self, prompt: Prompt) -> Value<Vec<primitives::game_primitives::CardId>> {
        match self.send(prompt)? {
            PromptResponse::Discard(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn scry(&mut self, prompt: Prompt) -> Value<Vec<primitives::game_primitives::CardId>> {
        match self.send(prompt)? {
            PromptResponse::Scry(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }

    pub fn surveil(&mut self, prompt: Prompt) -> Value<Vec<primitives::game_primitives::CardId>> {
        match self.send(prompt)? {
            PromptResponse::Surveil(value) => Ok(value.clone()),
            _ => Err(mismatch()),
        }
    }
}

fn mismatch() -> StopCondition {
    StopCondition::Error(eyre!("prompt response did not match the kind of prompt sent"))
}
