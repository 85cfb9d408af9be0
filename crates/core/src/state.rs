use crate::{Card, Deck, Room, DECK_SIZE};
use serde::{Deserialize, Serialize};

pub const MAX_HEALTH: i32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// One immutable snapshot of the whole game. Actions never mutate a
/// snapshot in place; the reducer builds the next one from the previous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// Always within `0..=MAX_HEALTH`.
    pub health: i32,
    pub deck: Deck,
    pub room: Room,
    /// Counts refills; at least 1 while a game is in progress.
    pub room_count: u32,
    /// Held weapon (Diamonds only). Holding is not wielding.
    pub current_weapon: Option<Card>,
    /// Most recent monster the weapon blocked; caps what it can block next.
    pub last_defeated: Option<Card>,
    pub ran_last_room: bool,
    pub potion_used_this_room: bool,
    pub weapon_equipped: bool,
    /// Fewest cards left to clear across the whole session. Lower is better.
    pub best: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            health: MAX_HEALTH,
            deck: Deck::default(),
            room: Room::empty(),
            room_count: 0,
            current_weapon: None,
            last_defeated: None,
            ran_last_room: false,
            potion_used_this_room: false,
            weapon_equipped: false,
            best: DECK_SIZE,
        }
    }

    /// Cards still standing between the player and the exit.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len() + self.room.occupied_count()
    }

    pub fn cards_cleared(&self) -> usize {
        DECK_SIZE - self.cards_remaining()
    }

    /// The weapon actually standing between the player and a monster.
    pub fn wielded_weapon(&self) -> Option<Card> {
        if self.weapon_equipped {
            self.current_weapon
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
