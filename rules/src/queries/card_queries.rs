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

use data::card_definitions::registry;
use data::core::numerics::{Power, Toughness};
use data::effects::target_requirement::{ObjectFilter, PlayerFilterKind};
use data::game_states::game_state::GameState;
use enumset::EnumSet;
use primitives::game_primitives::{CardId, CardType, Color, PlayerName, Subtype};
use tracing::error;

/// Current power of `id`, after every active continuous effect has been
/// applied (rule 613).
///
/// Assumes [crate::layers::recompute] has already run this priority check.
/// A missing `id` is an internal invariant violation rather than a
/// plausible input, so it degrades to `0` rather than panicking -- callers
/// that can detect the inconsistency (the engine tick loop) are expected to
/// roll the tick back.
pub fn power(game: &GameState, id: CardId) -> Power {
    let Some(card) = game.zones.card(id) else { return missing(id) };
    let definition = registry::lookup(card.card_name);
    let base = definition.base_power_toughness.map(|(p, _)| p).unwrap_or(0);
    card.properties.power.query(game, base)
}

/// Current toughness of `id`, after every active continuous effect has been
/// applied (rule 613).
pub fn toughness(game: &GameState, id: CardId) -> Toughness {
    let Some(card) = game.zones.card(id) else { return missing(id) };
    let definition = registry::lookup(card.card_name);
    let base = definition.base_power_toughness.map(|(_, t)| t).unwrap_or(0);
    card.properties.toughness.query(game, base)
}

/// The card types currently on `id`'s printed face.
///
/// Type-changing effects (layer 4) are not yet represented in
/// [data::properties::card_properties::CardProperties], so this is simply
/// the printed card's types; it is a seam for that layer once a card needs
/// it.
pub fn card_types(game: &GameState, id: CardId) -> EnumSet<CardType> {
    let Some(card) = game.zones.card(id) else { return missing(id) };
    registry::lookup(card.card_name).card_types
}

pub fn subtypes(game: &GameState, id: CardId) -> EnumSet<Subtype> {
    let Some(card) = game.zones.card(id) else { return missing(id) };
    registry::lookup(card.card_name).subtypes
}

pub fn colors(game: &GameState, id: CardId) -> EnumSet<Color> {
    let Some(card) = game.zones.card(id) else { return missing(id) };
    registry::lookup(card.card_name).colors
}

/// Logs a query against a card that no longer exists and returns that
/// type's zero value. A missing card here means some earlier mutation
/// removed it without the caller also dropping its references -- a bug for
/// the engine's tick loop to catch as [utils::outcome::StopCondition::Error],
/// never a panic.
fn missing<T: Default>(id: CardId) -> T {
    error!(?id, "Queried a card that is not present in any zone");
    T::default()
}

pub fn is_creature(game: &GameState, id: CardId) -> bool {
    card_types(game, id).contains(CardType::Creature)
}

/// Returns whether `id` matches `filter`, evaluated from the perspective of
/// an ability controlled by `controller` whose source is `source_id`.
///
/// Shared by target legality checking, continuous-effect application, and
/// cost filters (e.g. "sacrifice a creature"), since all three use the same
/// [ObjectFilter] algebra.
pub fn matches_filter(
    game: &GameState,
    id: CardId,
    filter: &ObjectFilter,
    controller: PlayerName,
    source_id: CardId,
) -> bool {
    let Some(card) = game.zones.card(id) else { return false };

    if filter.exclude_source && id == source_id {
        return false;
    }
    if let Some(types) = filter.card_types {
        if card_types(game, id).is_disjoint(types) {
            return false;
        }
    }
    if let Some(subtypes) = filter.subtypes {
        if self::subtypes(game, id).is_disjoint(subtypes) {
            return false;
        }
    }
    if let Some(controller_kind) = filter.controller {
        let matches = match controller_kind {
            PlayerFilterKind::You => card.controller == controller,
            PlayerFilterKind::Opponents => card.controller != controller,
            PlayerFilterKind::EachPlayer => true,
        };
        if !matches {
            return false;
        }
    }
    true
}
