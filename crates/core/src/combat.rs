use crate::Card;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one monster against the current gear.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attack {
    pub damage: i32,
    pub blocked: bool,
}

/// Pure damage math, used both to resolve a fight and to preview one.
///
/// A weapon blocks only while the defeat chain is strictly decreasing:
/// once it has beaten a monster of rank R it can only block ranks below R.
/// An unblocked fight deals the monster's full rank and leaves the chain
/// untouched.
pub fn resolve_attack(monster_rank: u8, weapon: Option<Card>, last_defeated: Option<Card>) -> Attack {
    let Some(weapon) = weapon else {
        return Attack {
            damage: i32::from(monster_rank),
            blocked: false,
        };
    };
    let blocks = last_defeated.map_or(true, |beaten| monster_rank < beaten.rank);
    if blocks {
        Attack {
            damage: (i32::from(monster_rank) - i32::from(weapon.rank)).max(0),
            blocked: true,
        }
    } else {
        Attack {
            damage: i32::from(monster_rank),
            blocked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn weapon(rank: u8) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    fn monster(rank: u8) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn bare_handed_takes_full_rank() {
        let attack = resolve_attack(9, None, None);
        assert_eq!(attack, Attack { damage: 9, blocked: false });
    }

    #[test]
    fn fresh_weapon_blocks_anything() {
        let attack = resolve_attack(5, Some(weapon(7)), None);
        assert_eq!(attack, Attack { damage: 0, blocked: true });
    }

    #[test]
    fn blocked_damage_is_rank_minus_weapon() {
        let attack = resolve_attack(12, Some(weapon(7)), None);
        assert_eq!(attack, Attack { damage: 5, blocked: true });
    }

    #[test]
    fn chain_only_continues_strictly_downward() {
        let beaten = monster(5);
        let attack = resolve_attack(4, Some(weapon(7)), Some(beaten));
        assert!(attack.blocked);
        let attack = resolve_attack(5, Some(weapon(7)), Some(beaten));
        assert_eq!(attack, Attack { damage: 5, blocked: false });
        let attack = resolve_attack(9, Some(weapon(7)), Some(beaten));
        assert_eq!(attack, Attack { damage: 9, blocked: false });
    }
}
