use crate::{
    resolve_attack, CardKind, Deck, Event, EventBus, GameState, Phase, RefillOutcome, RngState,
    MAX_HEALTH,
};
use serde::{Deserialize, Serialize};

/// The three inputs the presentation layer can send. Anything invalid in
/// the current snapshot is a defined no-op, never an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start (or restart) a game; while one is running and the room is
    /// untouched, run from the room instead.
    StartOrDraw,
    PlaySlot { index: usize },
    ToggleWeaponEquip,
}

impl GameState {
    /// Pure reducer: returns the next snapshot, leaving `self` untouched.
    pub fn apply(&self, action: Action, rng: &mut RngState, events: &mut EventBus) -> GameState {
        let mut next = self.clone();
        match action {
            Action::StartOrDraw => next.start_or_draw(rng, events),
            Action::PlaySlot { index } => next.play_slot(index, rng, events),
            Action::ToggleWeaponEquip => next.toggle_weapon(events),
        }
        next
    }

    fn start_or_draw(&mut self, rng: &mut RngState, events: &mut EventBus) {
        match self.phase {
            Phase::NotStarted | Phase::Won | Phase::Lost => self.start(rng, events),
            Phase::InProgress => {
                // Running is only on the table while no card has been
                // played this room; refill itself rejects a repeat run.
                if self.room.is_full() {
                    self.refill_room(rng, events);
                }
            }
        }
    }

    fn start(&mut self, rng: &mut RngState, events: &mut EventBus) {
        let best = self.best;
        *self = GameState::new();
        self.best = best;
        self.deck = Deck::dungeon(rng);
        self.phase = Phase::InProgress;
        events.push(Event::GameStarted { seed: rng.seed() });
        self.refill_room(rng, events);
    }

    fn play_slot(&mut self, index: usize, rng: &mut RngState, events: &mut EventBus) {
        if self.phase != Phase::InProgress {
            return;
        }
        let occupied_before = self.room.occupied_count();
        let deck_before = self.deck.len();
        let Some(card) = self.room.take(index) else {
            return;
        };

        match card.kind() {
            CardKind::Potion => {
                if self.potion_used_this_room {
                    // Only one potion heals per room; the rest go down the drain.
                    events.push(Event::PotionWasted { card });
                } else {
                    let healed = (self.health + i32::from(card.rank)).min(MAX_HEALTH) - self.health;
                    self.health += healed;
                    self.potion_used_this_room = true;
                    events.push(Event::PotionQuaffed { card, healed });
                }
            }
            CardKind::Monster => {
                let attack = resolve_attack(card.rank, self.wielded_weapon(), self.last_defeated);
                self.health -= attack.damage;
                if attack.blocked {
                    self.last_defeated = Some(card);
                }
                events.push(Event::MonsterFought {
                    card,
                    damage: attack.damage,
                    blocked: attack.blocked,
                });
            }
            CardKind::Weapon => {
                // A fresh weapon starts an unbroken defeat chain. Picking
                // one up does not wield it.
                self.current_weapon = Some(card);
                self.last_defeated = None;
                events.push(Event::WeaponTaken { card });
            }
        }

        if self.health <= 0 {
            self.health = 0;
            self.phase = Phase::Lost;
            events.push(Event::GameLost { room: self.room_count });
        } else {
            if occupied_before == 2 && !self.deck.is_empty() {
                self.refill_room(rng, events);
            }
            if occupied_before == 1 && self.deck.is_empty() {
                self.phase = Phase::Won;
            }
        }

        let remaining = deck_before + occupied_before - 1;
        if remaining < self.best {
            self.best = remaining;
        }
        if self.phase == Phase::Won {
            events.push(Event::GameWon { best: self.best });
        }
    }

    fn toggle_weapon(&mut self, events: &mut EventBus) {
        let equipped = !self.weapon_equipped && self.current_weapon.is_some();
        if equipped != self.weapon_equipped {
            self.weapon_equipped = equipped;
            events.push(Event::WeaponToggled { equipped });
        }
    }

    fn refill_room(&mut self, rng: &mut RngState, events: &mut EventBus) {
        let outcome = self.room.refill(&mut self.deck, self.ran_last_room, rng);
        if let RefillOutcome::Refilled { ran } = outcome {
            self.ran_last_room = ran;
            self.potion_used_this_room = false;
            self.room_count += 1;
            events.push(if ran {
                Event::RoomFled { room: self.room_count }
            } else {
                Event::RoomEntered { room: self.room_count }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Suit};

    #[test]
    fn toggle_without_a_weapon_stays_unequipped() {
        let mut events = EventBus::default();
        let mut rng = RngState::from_seed(1);
        let state = GameState::new();
        let next = state.apply(Action::ToggleWeaponEquip, &mut rng, &mut events);
        assert!(!next.weapon_equipped);
    }

    #[test]
    fn toggle_flips_both_ways_with_a_weapon_held() {
        let mut events = EventBus::default();
        let mut rng = RngState::from_seed(1);
        let mut state = GameState::new();
        state.current_weapon = Some(Card::new(Suit::Diamonds, 6));
        let equipped = state.apply(Action::ToggleWeaponEquip, &mut rng, &mut events);
        assert!(equipped.weapon_equipped);
        let unequipped = equipped.apply(Action::ToggleWeaponEquip, &mut rng, &mut events);
        assert!(!unequipped.weapon_equipped);
    }

    #[test]
    fn play_is_ignored_outside_a_game() {
        let mut events = EventBus::default();
        let mut rng = RngState::from_seed(1);
        let state = GameState::new();
        let next = state.apply(Action::PlaySlot { index: 0 }, &mut rng, &mut events);
        assert_eq!(next, state);
    }

    #[test]
    fn start_deals_a_full_room_and_full_health() {
        let mut events = EventBus::default();
        let mut rng = RngState::from_seed(1);
        let state = GameState::new().apply(Action::StartOrDraw, &mut rng, &mut events);
        assert_eq!(state.phase, Phase::InProgress);
        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.room_count, 1);
        assert!(state.room.is_full());
        assert_eq!(state.deck.len(), 40);
        assert_eq!(state.best, 44);
    }
}
