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

use primitives::game_primitives::{EntityId, HasController, HasObjectId, HasOwner, HasTimestamp};

/// Common properties shared by anything that can occupy a slot on the stack:
/// a spell or an ability.
pub trait ZoneObjectTrait: HasObjectId + HasOwner + HasController + HasTimestamp {
    /// Targets chosen for this object, if any.
    fn targets(&self) -> &[EntityId];
}
