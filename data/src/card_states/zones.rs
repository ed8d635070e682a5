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

use std::collections::{BTreeSet, VecDeque};

use primitives::clock::GameRng;
use primitives::game_primitives::{
    AbilityId, CardId, ObjectId, PlayerName, StackAbilityId, StackItemId, Timestamp, Zone,
};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use utils::outcome::{self, Outcome};

use crate::card_definitions::card_name::CardName;
use crate::card_states::card_kind::CardKind;
use crate::card_states::card_state::CardState;
use crate::card_states::counters::Counters;
use crate::card_states::stack_ability::{StackAbilityKind, StackAbilityState};
use crate::delegates::trigger::InterveningIf;
use crate::events::game_event::GameEvent;
use crate::player_states::player_map::PlayerMap;

/// Stores the state and zone membership of every card, token, and stack
/// ability in a game.
///
/// Membership indices are keyed by *owner*, not controller, because a zone
/// is where an object physically resides: an aura under an opponent's
/// control via a continuous effect is still in the battlefield zone of the
/// player who owns it. Controller is consulted separately, from
/// [CardState::controller], whenever a query needs "cards controlled by".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zones {
    all_cards: SlotMap<CardId, CardState>,
    stack_abilities: SlotMap<StackAbilityId, StackAbilityState>,

    libraries: PlayerMap<VecDeque<CardId>>,
    hands: PlayerMap<BTreeSet<CardId>>,
    graveyards: PlayerMap<VecDeque<CardId>>,
    battlefield: PlayerMap<BTreeSet<CardId>>,
    exile: PlayerMap<BTreeSet<CardId>>,
    command_zone: PlayerMap<BTreeSet<CardId>>,
    outside_the_game_zone: PlayerMap<BTreeSet<CardId>>,

    /// Cards and abilities on the stack, bottom first; the last entry is the
    /// top of the stack and resolves next.
    stack: Vec<StackItemId>,
}

impl Zones {
    /// Looks up a card's state. Returns `None` if the id refers to a token
    /// that has since been destroyed.
    pub fn card(&self, id: CardId) -> Option<&CardState> {
        self.all_cards.get(id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut CardState> {
        self.all_cards.get_mut(id)
    }

    pub fn has_card(&self, id: CardId) -> bool {
        self.all_cards.contains_key(id)
    }

    /// Looks up the state for an ability occupying a slot on the stack.
    ///
    /// Panics if no such ability exists.
    pub fn stack_ability(&self, id: StackAbilityId) -> &StackAbilityState {
        &self.stack_abilities[id]
    }

    pub fn stack_ability_mut(&mut self, id: StackAbilityId) -> &mut StackAbilityState {
        &mut self.stack_abilities[id]
    }

    /// Returns all currently known cards, in an undefined order.
    pub fn all_cards(&self) -> impl Iterator<Item = &CardState> {
        self.all_cards.values()
    }

    pub fn all_cards_mut(&mut self) -> impl Iterator<Item = &mut CardState> {
        self.all_cards.values_mut()
    }

    /// Returns the IDs of cards owned by `player` in their library, in
    /// order; the back of the deque is the top card.
    pub fn library(&self, player: PlayerName) -> &VecDeque<CardId> {
        self.libraries.get(player)
    }

    pub fn hand(&self, player: PlayerName) -> &BTreeSet<CardId> {
        self.hands.get(player)
    }

    /// Returns the IDs of cards owned by `player` in their graveyard, in
    /// order; the back of the deque is the most recently placed card.
    pub fn graveyard(&self, player: PlayerName) -> &VecDeque<CardId> {
        self.graveyards.get(player)
    }

    /// Returns the IDs of cards and permanents owned by `player` on the
    /// battlefield. Does not account for control-changing effects; use
    /// [Self::battlefield_controlled_by] for that.
    pub fn battlefield(&self, player: PlayerName) -> &BTreeSet<CardId> {
        self.battlefield.get(player)
    }

    /// Returns the IDs of permanents currently *controlled* by `player`,
    /// regardless of who owns them.
    pub fn battlefield_controlled_by(&self, player: PlayerName) -> impl Iterator<Item = CardId> + '_ {
        self.all_cards
            .iter()
            .filter(move |(_, card)| card.zone == Zone::Battlefield && card.controller == player)
            .map(|(id, _)| id)
    }

    pub fn exile(&self, player: PlayerName) -> &BTreeSet<CardId> {
        self.exile.get(player)
    }

    pub fn command_zone(&self, player: PlayerName) -> &BTreeSet<CardId> {
        self.command_zone.get(player)
    }

    pub fn outside_the_game_zone(&self, player: PlayerName) -> &BTreeSet<CardId> {
        self.outside_the_game_zone.get(player)
    }

    /// Returns items on the stack, bottom first; the last entry resolves
    /// next.
    pub fn stack(&self) -> &[StackItemId] {
        &self.stack
    }

    pub fn abilities_on_stack(&self) -> impl Iterator<Item = StackAbilityId> + '_ {
        self.stack.iter().filter_map(|item| match item {
            StackItemId::StackAbility(id) => Some(*id),
            StackItemId::Card(_) => None,
        })
    }

    /// Returns true if some card or permanent currently has object identity
    /// `object_id` and resides on the battlefield.
    pub fn object_on_battlefield(&self, object_id: ObjectId) -> bool {
        self.all_cards
            .values()
            .any(|card| card.object_id == object_id && card.zone == Zone::Battlefield)
    }

    /// Returns true if some card, spell, or ability currently has object
    /// identity `object_id` and resides on the stack.
    pub fn object_on_stack(&self, object_id: ObjectId) -> bool {
        self.all_cards.values().any(|card| card.object_id == object_id && card.zone == Zone::Stack)
            || self.stack_abilities.values().any(|ability| ability.object_id == object_id)
    }

    /// Returns an iterator over cards owned by `player` in the given zone.
    ///
    /// For [Zone::Stack] this returns card objects only, not abilities; see
    /// [Self::abilities_on_stack].
    pub fn cards_in_zone(&self, zone: Zone, player: PlayerName) -> Box<dyn Iterator<Item = CardId> + '_> {
        match zone {
            Zone::Hand => Box::new(self.hand(player).iter().copied()),
            Zone::Graveyard => Box::new(self.graveyard(player).iter().copied()),
            Zone::Library => Box::new(self.library(player).iter().copied()),
            Zone::Battlefield => Box::new(self.battlefield(player).iter().copied()),
            Zone::Stack => Box::new(self.stack.iter().filter_map(move |item| match item {
                StackItemId::Card(id) if self.card(*id).is_some_and(|c| c.owner == player) => {
                    Some(*id)
                }
                _ => None,
            })),
            Zone::Exiled => Box::new(self.exile(player).iter().copied()),
            Zone::Command => Box::new(self.command_zone(player).iter().copied()),
            Zone::OutsideTheGame => Box::new(self.outside_the_game_zone(player).iter().copied()),
        }
    }

    /// Creates a new card or token, owned by `owner`, in the given zone.
    /// Caller supplies freshly-minted `object_id` and `timestamp` values
    /// (from [primitives::clock::GameClock]) so that identity assignment
    /// stays a single deterministic sequence shared across the whole game.
    #[allow(clippy::too_many_arguments)]
    pub fn create_card_in_zone(
        &mut self,
        card_name: CardName,
        kind: CardKind,
        owner: PlayerName,
        zone: Zone,
        object_id: ObjectId,
        timestamp: Timestamp,
    ) -> CardId {
        let id = self.all_cards.insert(CardState {
            id: CardId::default(),
            object_id,
            card_name,
            kind,
            owner,
            controller: owner,
            zone,
            tapped: false,
            summoning_sick: true,
            counters: Counters::default(),
            damage: 0,
            attached_to: None,
            attachments: vec![],
            timestamp,
            entered_control_turn: None,
            targets: vec![],
            modes: vec![],
            x_value: None,
            mana_spent: Default::default(),
            can_be_countered: true,
            is_commander: false,
            is_foretold: false,
            was_kicked: false,
            drew_from_empty_library: false,
            activated_or_triggered_ability: None,
            revealed_to: Default::default(),
            properties: Default::default(),
        });
        self.all_cards[id].id = id;
        self.add_to_zone(owner, id, zone);
        id
    }

    /// Creates a new triggered or activated ability occupying a stack slot.
    /// The caller is responsible for pushing its [StackItemId] onto the
    /// stack once the ability is actually placed there.
    pub fn create_stack_ability(
        &mut self,
        ability_id: AbilityId,
        kind: StackAbilityKind,
        owner: PlayerName,
        object_id: ObjectId,
        timestamp: Timestamp,
        intervening_if_at_trigger_time: Option<bool>,
    ) -> StackAbilityId {
        self.create_triggered_stack_ability(
            ability_id,
            kind,
            owner,
            object_id,
            timestamp,
            intervening_if_at_trigger_time,
            None,
            None,
        )
    }

    /// As [Self::create_stack_ability], additionally recording the
    /// intervening-if clause and triggering event so resolution can
    /// re-check the clause against game state as of resolution time
    /// rather than only trusting the trigger-time snapshot.
    pub fn create_triggered_stack_ability(
        &mut self,
        ability_id: AbilityId,
        kind: StackAbilityKind,
        owner: PlayerName,
        object_id: ObjectId,
        timestamp: Timestamp,
        intervening_if_at_trigger_time: Option<bool>,
        intervening_if: Option<InterveningIf>,
        triggering_event: Option<GameEvent>,
    ) -> StackAbilityId {
        let id = self.stack_abilities.insert(StackAbilityState {
            id: StackAbilityId::default(),
            object_id,
            ability_id,
            kind,
            owner,
            controller: owner,
            timestamp,
            targets: vec![],
            modes: vec![],
            intervening_if_at_trigger_time,
            intervening_if,
            triggering_event,
        });
        self.stack_abilities[id].id = id;
        id
    }

    /// Removes a stack ability, including from the stack itself if present.
    pub fn remove_stack_ability(&mut self, id: StackAbilityId) {
        if let Some(index) = self
            .stack
            .iter()
            .rposition(|item| *item == StackItemId::StackAbility(id))
        {
            self.stack.remove(index);
        }
        self.stack_abilities.remove(id);
    }

    /// Pushes an item onto the top of the stack.
    pub fn push_to_stack(&mut self, item: StackItemId) {
        self.stack.push(item);
    }

    /// Removes a card from the game entirely, e.g. a token leaving the
    /// battlefield via a state-based action.
    pub fn destroy_card(&mut self, id: CardId) -> Outcome {
        let card = self.card(id).ok_or_else(|| card_not_found(id))?;
        self.remove_from_zone(card.owner, id, card.zone);
        self.all_cards.remove(id);
        outcome::OK
    }

    /// Moves a card to a new zone, assigning it the given fresh object
    /// identity per rule 400.7. Call sites outside this crate should go
    /// through the rules crate's move-card operation rather than here
    /// directly, so that replacement effects and triggers can observe the
    /// move.
    pub fn move_card(
        &mut self,
        id: CardId,
        zone: Zone,
        new_object_id: ObjectId,
        timestamp: Timestamp,
    ) -> Outcome {
        let card = self.card(id).ok_or_else(|| card_not_found(id))?;
        let owner = card.owner;
        let old_zone = card.zone;
        self.remove_from_zone(owner, id, old_zone);
        let card = self.card_mut(id).expect("card removed from previous zone but not present");
        card.zone = zone;
        card.object_id = new_object_id;
        card.timestamp = timestamp;
        card.targets.clear();
        card.modes.clear();
        self.add_to_zone(owner, id, zone);
        outcome::OK
    }

    /// Shuffles a player's library.
    pub fn shuffle_library(&mut self, player: PlayerName, rng: &mut GameRng) {
        let mut cards: Vec<CardId> = self.libraries.get(player).iter().copied().collect();
        rng.shuffle(&mut cards);
        *self.libraries.get_mut(player) = cards.into_iter().collect();
    }

    /// Moves a card already in its owner's library to the bottom (rule
    /// 701.19a). Unlike [Self::move_card] this does not change zones, so no
    /// new object identity is assigned (rule 400.7 only applies to a zone
    /// change).
    pub fn put_on_bottom_of_library(&mut self, id: CardId) -> Outcome {
        let owner = self.card(id).ok_or_else(|| card_not_found(id))?.owner;
        let deque = self.libraries.get_mut(owner);
        remove_ordered(deque, id);
        deque.push_front(id);
        outcome::OK
    }

    fn add_to_zone(&mut self, owner: PlayerName, id: CardId, zone: Zone) {
        match zone {
            Zone::Library => self.libraries.get_mut(owner).push_back(id),
            Zone::Hand => {
                self.hands.get_mut(owner).insert(id);
            }
            Zone::Graveyard => self.graveyards.get_mut(owner).push_back(id),
            Zone::Battlefield => {
                self.battlefield.get_mut(owner).insert(id);
            }
            Zone::Stack => self.stack.push(StackItemId::Card(id)),
            Zone::Exiled => {
                self.exile.get_mut(owner).insert(id);
            }
            Zone::Command => {
                self.command_zone.get_mut(owner).insert(id);
            }
            Zone::OutsideTheGame => {
                self.outside_the_game_zone.get_mut(owner).insert(id);
            }
        }
    }

    fn remove_from_zone(&mut self, owner: PlayerName, id: CardId, zone: Zone) {
        match zone {
            Zone::Library => remove_ordered(self.libraries.get_mut(owner), id),
            Zone::Hand => {
                self.hands.get_mut(owner).remove(&id);
            }
            Zone::Graveyard => remove_ordered(self.graveyards.get_mut(owner), id),
            Zone::Battlefield => {
                self.battlefield.get_mut(owner).remove(&id);
            }
            Zone::Stack => {
                if let Some(index) = self.stack.iter().rposition(|item| *item == StackItemId::Card(id)) {
                    self.stack.remove(index);
                }
            }
            Zone::Exiled => {
                self.exile.get_mut(owner).remove(&id);
            }
            Zone::Command => {
                self.command_zone.get_mut(owner).remove(&id);
            }
            Zone::OutsideTheGame => {
                self.outside_the_game_zone.get_mut(owner).remove(&id);
            }
        }
    }
}

fn remove_ordered(deque: &mut VecDeque<CardId>, id: CardId) {
    if let Some(index) = deque.iter().rposition(|&card_id| card_id == id) {
        deque.remove(index);
    }
}

fn card_not_found(id: CardId) -> color_eyre::Report {
    color_eyre::eyre::eyre!("card not found: {id:?}")
}

#[cfg(test)]
mod tests {
    use primitives::game_primitives::PlayerName;

    use super::*;
    use crate::card_definitions::card_name;

    #[test]
    fn move_card_updates_zone_membership_and_object_id() {
        let mut zones = Zones::default();
        let id = zones.create_card_in_zone(
            card_name::FOREST,
            CardKind::Normal,
            PlayerName::One,
            Zone::Library,
            ObjectId(1),
            Timestamp(1),
        );
        assert!(zones.library(PlayerName::One).contains(&id));

        zones.move_card(id, Zone::Hand, ObjectId(2), Timestamp(2)).unwrap();
        assert!(!zones.library(PlayerName::One).contains(&id));
        assert!(zones.hand(PlayerName::One).contains(&id));
        assert_eq!(zones.card(id).unwrap().object_id, ObjectId(2));
    }

    #[test]
    fn object_on_battlefield_is_false_after_the_object_leaves() {
        let mut zones = Zones::default();
        let id = zones.create_card_in_zone(
            card_name::GRIZZLY_BEARS,
            CardKind::Normal,
            PlayerName::One,
            Zone::Battlefield,
            ObjectId(5),
            Timestamp(1),
        );
        assert!(zones.object_on_battlefield(ObjectId(5)));
        zones.move_card(id, Zone::Graveyard, ObjectId(6), Timestamp(2)).unwrap();
        assert!(!zones.object_on_battlefield(ObjectId(5)));
        assert!(!zones.object_on_battlefield(ObjectId(6)));
    }
}
