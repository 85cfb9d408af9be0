use crate::{resolve_attack, Attack, Card, CardKind, GameState};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to label one card, including
/// the damage a monster would deal if it were fought right now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDescription {
    pub card: Card,
    pub kind: CardKind,
    /// Present for monsters only; honors the equip toggle.
    pub preview: Option<Attack>,
    /// True for a potion that would be wasted this room.
    pub potion_spent: bool,
}

/// Read-only preview; never mutates state.
pub fn describe(card: Card, state: &GameState) -> CardDescription {
    let kind = card.kind();
    let preview = match kind {
        CardKind::Monster => Some(resolve_attack(
            card.rank,
            state.wielded_weapon(),
            state.last_defeated,
        )),
        CardKind::Potion | CardKind::Weapon => None,
    };
    CardDescription {
        card,
        kind,
        preview,
        potion_spent: kind == CardKind::Potion && state.potion_used_this_room,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn monster_preview_tracks_the_equip_toggle() {
        let mut state = GameState::new();
        state.current_weapon = Some(Card::new(Suit::Diamonds, 7));
        let monster = Card::new(Suit::Spades, 5);

        let bare = describe(monster, &state);
        assert_eq!(bare.preview, Some(Attack { damage: 5, blocked: false }));

        state.weapon_equipped = true;
        let armed = describe(monster, &state);
        assert_eq!(armed.preview, Some(Attack { damage: 0, blocked: true }));
    }

    #[test]
    fn potion_marks_a_spent_room() {
        let mut state = GameState::new();
        let potion = Card::new(Suit::Hearts, 4);
        assert!(!describe(potion, &state).potion_spent);
        state.potion_used_this_room = true;
        assert!(describe(potion, &state).potion_spent);
        assert_eq!(describe(potion, &state).preview, None);
    }
}
