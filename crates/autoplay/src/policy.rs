use scoundrel_core::{
    describe, Action, CardKind, GameState, Phase, RngState, MAX_HEALTH, ROOM_SLOTS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Uniform pick over the currently legal moves.
    Random,
    /// Heals when hurt, wields and upgrades weapons, fights the cheapest
    /// monster first, runs from rooms it cannot survive.
    Greedy,
}

impl Policy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "greedy" => Some(Self::Greedy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Greedy => "greedy",
        }
    }
}

/// Picks the next action for the current snapshot. Outside a running game
/// this is always `StartOrDraw`, so a playout boots itself.
pub fn choose_action(policy: Policy, state: &GameState, rng: &mut RngState) -> Action {
    if state.phase != Phase::InProgress {
        return Action::StartOrDraw;
    }
    match policy {
        Policy::Random => choose_random(state, rng),
        Policy::Greedy => choose_greedy(state),
    }
}

fn can_run(state: &GameState) -> bool {
    state.room.is_full() && !state.ran_last_room
}

fn choose_random(state: &GameState, rng: &mut RngState) -> Action {
    let mut actions: Vec<Action> = (0..ROOM_SLOTS)
        .filter(|&index| state.room.card(index).is_some())
        .map(|index| Action::PlaySlot { index })
        .collect();
    if can_run(state) {
        actions.push(Action::StartOrDraw);
    }
    if state.current_weapon.is_some() && !state.weapon_equipped {
        actions.push(Action::ToggleWeaponEquip);
    }
    if actions.is_empty() {
        return Action::StartOrDraw;
    }
    let pick = (rng.next_u64() as usize) % actions.len();
    actions[pick]
}

fn choose_greedy(state: &GameState) -> Action {
    // Wield whatever we carry before fighting anything.
    if state.current_weapon.is_some() && !state.weapon_equipped {
        return Action::ToggleWeaponEquip;
    }
    let mut cheapest: Option<(i32, usize)> = None;
    let mut safest_hit = i32::MAX;
    for index in 0..ROOM_SLOTS {
        let Some(card) = state.room.card(index) else {
            continue;
        };
        let info = describe(card, state);
        let (cost, hit) = match info.kind {
            CardKind::Potion if !info.potion_spent => {
                let heal = i32::from(card.rank).min(MAX_HEALTH - state.health);
                (-heal, 0)
            }
            // A spent potion is a free discard, just not a priority.
            CardKind::Potion => (1, 0),
            CardKind::Weapon => {
                let held = state.current_weapon.map_or(0, |weapon| i32::from(weapon.rank));
                if i32::from(card.rank) > held {
                    (-2, 0)
                } else {
                    (2, 0)
                }
            }
            CardKind::Monster => {
                let damage = info.preview.map_or(i32::from(card.rank), |attack| attack.damage);
                (damage, damage)
            }
        };
        safest_hit = safest_hit.min(hit);
        if cheapest.map_or(true, |(best_cost, _)| cost < best_cost) {
            cheapest = Some((cost, index));
        }
    }
    // Every card in the room would kill us: flee while we still can.
    if can_run(state) && safest_hit >= state.health {
        return Action::StartOrDraw;
    }
    match cheapest {
        Some((_, index)) => Action::PlaySlot { index },
        None => Action::StartOrDraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoundrel_core::{Card, Deck, Room, Suit};

    fn in_progress(room: &[Card]) -> GameState {
        let mut state = GameState::new();
        state.phase = Phase::InProgress;
        state.room = Room::from_cards(room);
        state.deck = Deck::from_cards(vec![Card::new(Suit::Clubs, 2); 8]);
        state.room_count = 1;
        state
    }

    #[test]
    fn greedy_wields_a_carried_weapon_first() {
        let mut state = in_progress(&[Card::new(Suit::Spades, 4)]);
        state.current_weapon = Some(Card::new(Suit::Diamonds, 5));
        let mut rng = RngState::from_seed(1);
        assert_eq!(
            choose_action(Policy::Greedy, &state, &mut rng),
            Action::ToggleWeaponEquip
        );
    }

    #[test]
    fn greedy_prefers_a_heal_when_hurt() {
        let mut state = in_progress(&[
            Card::new(Suit::Spades, 9),
            Card::new(Suit::Hearts, 6),
            Card::new(Suit::Clubs, 3),
            Card::new(Suit::Diamonds, 2),
        ]);
        state.health = 8;
        state.current_weapon = Some(Card::new(Suit::Diamonds, 10));
        state.weapon_equipped = true;
        let mut rng = RngState::from_seed(1);
        assert_eq!(
            choose_action(Policy::Greedy, &state, &mut rng),
            Action::PlaySlot { index: 1 }
        );
    }

    #[test]
    fn greedy_runs_from_a_lethal_room() {
        let mut state = in_progress(&[
            Card::new(Suit::Spades, 14),
            Card::new(Suit::Clubs, 13),
            Card::new(Suit::Spades, 12),
            Card::new(Suit::Clubs, 11),
        ]);
        state.health = 5;
        let mut rng = RngState::from_seed(1);
        assert_eq!(
            choose_action(Policy::Greedy, &state, &mut rng),
            Action::StartOrDraw
        );
    }

    #[test]
    fn random_only_proposes_legal_moves() {
        let state = in_progress(&[Card::new(Suit::Spades, 4), Card::new(Suit::Hearts, 2)]);
        let mut rng = RngState::from_seed(9);
        for _ in 0..50 {
            match choose_action(Policy::Random, &state, &mut rng) {
                Action::PlaySlot { index } => assert!(state.room.card(index).is_some()),
                action => panic!("unexpected action {action:?}"),
            }
        }
    }
}
