use crate::Card;
use serde::{Deserialize, Serialize};

/// Narration of what an action did, for front ends to log. Events carry no
/// rules authority; the state snapshot is the single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted { seed: u64 },
    RoomEntered { room: u32 },
    RoomFled { room: u32 },
    PotionQuaffed { card: Card, healed: i32 },
    PotionWasted { card: Card },
    MonsterFought { card: Card, damage: i32, blocked: bool },
    WeaponTaken { card: Card },
    WeaponToggled { equipped: bool },
    GameWon { best: usize },
    GameLost { room: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
