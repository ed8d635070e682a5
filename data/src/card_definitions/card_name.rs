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

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Identifies a named oracle card: something a card definition, or a
/// "choose a card name" effect, can refer to.
///
/// Wraps a stable UUID rather than a string so renames of the printed card's
/// display name never change identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardName(pub Uuid);

pub const FOREST: CardName = CardName(uuid!("b34bb2dc-c1af-4d77-b0b3-a0fb342a5fc6"));
pub const ISLAND: CardName = CardName(uuid!("b2c6aa39-2d2a-459c-a555-fb48ba993373"));
pub const MOUNTAIN: CardName = CardName(uuid!("a3fb7228-e76b-4e96-a40e-20b5fed75685"));
pub const PLAINS: CardName = CardName(uuid!("bc71ebf6-2056-41f7-be35-b2e5c34afa99"));
pub const SWAMP: CardName = CardName(uuid!("56719f6a-1a6c-4c0a-8d21-18f7d7350b68"));

pub const GRIZZLY_BEARS: CardName = CardName(uuid!("14c8f55d-d177-4c25-a931-ebeb9e6062a0"));
pub const ELVISH_WARRIOR: CardName = CardName(uuid!("da587161-da7e-48ae-8af6-7f02ee71afd8"));

/// A static lord effect: gives other Elves you control +1/+1, used as the
/// canonical continuous-effect / layer-system test card.
pub const ELVISH_CHAMPION: CardName = CardName(uuid!("2b6a19e4-8f2d-4e3b-9c1a-6f6e6bb2d6a1"));

pub const BRAINSTORM: CardName = CardName(uuid!("36cd2364-d113-47d1-b2c4-b088d9eb88dd"));

/// Counter target spell, used as the canonical stack-interaction test card.
pub const COUNTERSPELL: CardName = CardName(uuid!("7b9e2b66-9b3e-4e5b-9e2f-d1c6e4a9f2a1"));

/// A creature with an enters-the-battlefield triggered ability that draws a
/// card, used as the canonical triggered-ability test card.
pub const WELCOME_STRANGER: CardName = CardName(uuid!("9c9e6a3a-1f6c-4a9e-9b0a-1a6d9e2f6c3a"));

/// A 1/1 white Spirit, the canonical token created by `EffectIr::CreateToken`.
pub const SPIRIT_TOKEN: CardName = CardName(uuid!("5e6f9b2a-7c3d-4f1e-8a2b-9d4c6e8f1a3b"));

/// A creature whose combat-damage trigger carries an intervening-if clause
/// re-checked at resolution, used as the canonical intervening-if test card.
pub const RAVENOUS_SKITTERCLAW: CardName = CardName(uuid!("6f1c8a2e-3b9d-4e7f-a1c5-2d8b6e9f4a7c"));

/// "If you would draw a card while your library has no cards in it, you win
/// the game instead," used as the canonical empty-library-win test card.
pub const LABORATORY_MANIAC: CardName = CardName(uuid!("8a2d5f1c-4b9e-4a7d-9c3f-1e6b8d2a5f9c"));

/// "Your opponents can't win the game," used as the canonical
/// win-prevention test card.
pub const NEFARIOUS_LICH: CardName = CardName(uuid!("3d7f9a1e-2c6b-4d8f-a5e3-9b1c7f4a8d2e"));
