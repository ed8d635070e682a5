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

use enum_iterator::Sequence;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use uuid::Uuid;

/// The five canonical colors of magic.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Sequence)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

/// Supertypes for a card.
#[derive(Debug, Serialize, Deserialize, EnumSetType)]
pub enum CardSupertype {
    Basic,
    Legendary,
    Snow,
    World,
}

/// Types for a card.
#[derive(Debug, Serialize, Deserialize, EnumSetType)]
pub enum CardType {
    Artifact,
    Battle,
    Creature,
    Enchantment,
    Instant,
    Land,
    Planeswalker,
    Sorcery,
}

impl CardType {
    /// Returns true if this is a type which can exist on the battlefield as
    /// a permanent.
    pub fn is_permanent(&self) -> bool {
        !matches!(self, CardType::Instant | CardType::Sorcery)
    }
}

/// Creature types and basic land types, used by filters that key off a
/// card's subtype line (e.g. a lord effect's "other Elves you control").
///
/// A representative subset, not the full set of printed creature types;
/// card data authoring rejects an oracle subtype with no matching variant
/// here rather than this type attempting to be exhaustive.
#[derive(Debug, Serialize, Deserialize, EnumSetType)]
pub enum Subtype {
    Plains,
    Island,
    Swamp,
    Mountain,
    Forest,
    Bear,
    Elf,
    Human,
    Soldier,
    Warrior,
    Wizard,
    Spirit,
}

/// Identifies one of the players in a game.
///
/// Two-player games are the common case, so `One`/`Two` are first-class, but
/// multiplayer games are supported via `Other`.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Ord, PartialOrd, Sequence)]
pub enum PlayerName {
    /// The player who plays first, who is "on the play".
    One,
    /// The player who plays second, who is "on the draw".
    Two,
    Three,
    Four,
}

/// Identifies a struct that is 1:1 associated with a given [PlayerName].
pub trait HasOwner {
    fn owner(&self) -> PlayerName;
}

impl HasOwner for PlayerName {
    fn owner(&self) -> PlayerName {
        *self
    }
}

/// Identifies a struct that has a controller, which may differ from its
/// owner.
pub trait HasController {
    fn controller(&self) -> PlayerName;
}

impl HasController for PlayerName {
    fn controller(&self) -> PlayerName {
        *self
    }
}

new_key_type! {
    /// Identifies a card or card-like object: a normal card, a copy of a
    /// card on the stack, a token, or an emblem.
    ///
    /// Stable across zone moves for as long as rules treat the underlying
    /// object as "the same object" -- see [ObjectId] for the identity that
    /// changes on zone transitions.
    pub struct CardId;
}

pub trait HasCardId {
    fn card_id(&self) -> CardId;
}

impl HasCardId for CardId {
    fn card_id(&self) -> CardId {
        *self
    }
}

new_key_type! {
    /// Identifies an ability on the stack, independent from the [CardId] of
    /// the permanent or spell which created it.
    pub struct StackAbilityId;
}

/// Identifies either a card or an ability occupying a slot on the stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StackItemId {
    Card(CardId),
    StackAbility(StackAbilityId),
}

/// An opaque, monotonically-increasing identifier for an object within a
/// game.
///
/// Cards mint a fresh [ObjectId] every time they change zones (per rule
/// 400.7), except where this specification documents an exception (e.g.
/// the commander marker). IDs are a deterministic function of the event
/// sequence number, so replay reproduces identical values.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct ObjectId(pub u64);

pub trait HasObjectId {
    fn object_id(&self) -> ObjectId;
}

impl HasObjectId for ObjectId {
    fn object_id(&self) -> ObjectId {
        *self
    }
}

/// Identifies an ability of a card: the (0-indexed) position of the ability
/// within its oracle text, one entry per textual clause.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AbilityNumber(pub usize);

/// Identifies a specific ability belonging to a specific card.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AbilityId {
    pub card_id: CardId,
    pub number: AbilityNumber,
}

impl HasCardId for AbilityId {
    fn card_id(&self) -> CardId {
        self.card_id
    }
}

/// Identifies the game object or rule which caused a mutation to happen, for
/// attribution in logging, replacement-effect "used up" bookkeeping, and
/// delegate activation checks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The mutation is a direct consequence of a game rule, not any specific
    /// object (e.g. the draw-for-turn, a state-based action).
    Game,
    /// The mutation was caused by the named ability.
    Ability(AbilityId),
}

pub trait HasSource {
    fn source(&self) -> Source;
}

impl HasSource for Source {
    fn source(&self) -> Source {
        *self
    }
}

/// A zone is a place where objects can be during the game.
#[derive(Debug, Serialize, Deserialize, Hash, EnumSetType, Sequence)]
pub enum Zone {
    Hand,
    Graveyard,
    Library,
    Battlefield,
    Stack,
    Exiled,
    Command,
    OutsideTheGame,
}

impl Zone {
    /// Is this zone's contents visible to all players?
    pub fn is_public(&self) -> bool {
        match self {
            Zone::Hand => false,
            Zone::Graveyard => true,
            Zone::Library => false,
            Zone::Battlefield => true,
            Zone::Stack => true,
            Zone::Exiled => true,
            Zone::Command => true,
            Zone::OutsideTheGame => false,
        }
    }

    /// Is the order of objects within this zone rules-significant?
    pub fn order_is_significant(&self) -> bool {
        matches!(self, Zone::Library | Zone::Stack)
    }
}

/// Monotonically increasing timestamp assigned to each continuous effect,
/// object, and stack item at the moment it is created. Used to break ties
/// within a layer (C6) and to order zone contents.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

pub trait HasTimestamp {
    fn timestamp(&self) -> Timestamp;
}

/// Identifies a single instance of an event callback invocation. Distinct
/// from [Timestamp] -- this does not order anything, it just distinguishes
/// recursive/simultaneous firings of the same event for de-duplication.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

/// Identifies a pending decision raised to a player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DecisionId(pub u64);

/// Unique identifier for a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

/// Unique identifier for a user: an operator of this software outside the
/// context of any one game. A "player" is a participant within a game who
/// may or may not be a user (e.g. an AI opponent is not a user).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// The full set of possible entities a target, filter, or selector might
/// refer to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EntityId {
    Card(CardId),
    Player(PlayerName),
    StackAbility(StackAbilityId),
}
