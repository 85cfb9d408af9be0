use crate::{Card, Deck, RngState};
use serde::{Deserialize, Serialize};

pub const ROOM_SLOTS: usize = 4;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Card),
}

impl Slot {
    pub fn card(self) -> Option<Card> {
        match self {
            Slot::Occupied(card) => Some(card),
            Slot::Empty => None,
        }
    }
}

/// The four cards currently on the table. Slot order matters only for
/// display; a slot is addressed by its index 0..=3.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    slots: [Slot; ROOM_SLOTS],
}

/// What a refill request did. `NotReady` means the room still has cards to
/// play (or the player just ran and owes a play first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillOutcome {
    Refilled { ran: bool },
    NotReady,
}

impl Room {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cards condense to the left; trailing slots stay empty.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut slots = [Slot::Empty; ROOM_SLOTS];
        for (slot, card) in slots.iter_mut().zip(cards.iter()) {
            *slot = Slot::Occupied(*card);
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot; ROOM_SLOTS] {
        &self.slots
    }

    pub fn card(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().and_then(Slot::card)
    }

    /// Empties the slot, handing back whatever was in it.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        let slot = self.slots.get_mut(index)?;
        std::mem::take(slot).card()
    }

    /// The occupied cards in slot order.
    pub fn occupied(&self) -> Vec<Card> {
        self.slots.iter().filter_map(|slot| slot.card()).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.card().is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == ROOM_SLOTS
    }

    /// Refills this room from the deck, if the room is eligible.
    ///
    /// A full room that was not already run from goes back under the deck,
    /// shuffled, before four fresh cards are dealt. A room down to one card
    /// keeps that card in the first slot and tops the rest up from the
    /// deck's front (fewer when the deck runs short).
    pub fn refill(
        &mut self,
        deck: &mut Deck,
        ran_last_room: bool,
        rng: &mut RngState,
    ) -> RefillOutcome {
        let occupied = self.occupied();
        if occupied.len() == ROOM_SLOTS && !ran_last_room {
            let mut returned = occupied;
            rng.shuffle(&mut returned);
            deck.return_to_bottom(returned);
            let drawn = deck.draw(ROOM_SLOTS);
            *self = Room::from_cards(&drawn);
            return RefillOutcome::Refilled { ran: true };
        }
        if occupied.len() > 1 {
            return RefillOutcome::NotReady;
        }
        let mut next = occupied;
        next.extend(deck.draw(ROOM_SLOTS - next.len()));
        *self = Room::from_cards(&next);
        RefillOutcome::Refilled { ran: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Spades, rank)).collect()
    }

    #[test]
    fn run_returns_the_room_under_the_deck() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::from_cards(cards(&[2, 3, 4, 5, 6, 7]));
        let mut room = Room::from_cards(&cards(&[10, 11, 12, 13]));
        let outcome = room.refill(&mut deck, false, &mut rng);
        assert_eq!(outcome, RefillOutcome::Refilled { ran: true });
        assert!(room.is_full());
        // Nothing is lost: 6 in the deck + 4 returned - 4 redealt.
        assert_eq!(deck.len(), 6);
        assert_eq!(room.occupied(), cards(&[2, 3, 4, 5]));
    }

    #[test]
    fn run_is_rejected_right_after_a_run() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::from_cards(cards(&[2, 3, 4, 5]));
        let mut room = Room::from_cards(&cards(&[10, 11, 12, 13]));
        assert_eq!(room.refill(&mut deck, true, &mut rng), RefillOutcome::NotReady);
        assert_eq!(room.occupied(), cards(&[10, 11, 12, 13]));
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn partially_played_room_is_not_ready() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::from_cards(cards(&[2, 3, 4, 5]));
        for count in [2usize, 3] {
            let mut room = Room::from_cards(&cards(&[10, 11, 12, 13][..count]));
            assert_eq!(room.refill(&mut deck, false, &mut rng), RefillOutcome::NotReady);
        }
    }

    #[test]
    fn survivor_keeps_the_first_slot() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::from_cards(cards(&[2, 3, 4, 5]));
        let mut room = Room::from_cards(&cards(&[13]));
        let outcome = room.refill(&mut deck, false, &mut rng);
        assert_eq!(outcome, RefillOutcome::Refilled { ran: false });
        assert_eq!(room.occupied(), cards(&[13, 2, 3, 4]));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn short_deck_leaves_trailing_slots_empty() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::from_cards(cards(&[2]));
        let mut room = Room::empty();
        assert_eq!(
            room.refill(&mut deck, false, &mut rng),
            RefillOutcome::Refilled { ran: false }
        );
        assert_eq!(room.occupied_count(), 1);
        assert!(deck.is_empty());
    }

    #[test]
    fn take_empties_the_slot() {
        let mut room = Room::from_cards(&cards(&[10, 11]));
        assert_eq!(room.take(1), Some(Card::new(Suit::Spades, 11)));
        assert_eq!(room.take(1), None);
        assert_eq!(room.take(9), None);
        assert_eq!(room.occupied_count(), 1);
    }
}
