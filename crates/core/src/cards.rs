use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn is_monster(self) -> bool {
        matches!(self, Suit::Spades | Suit::Clubs)
    }
}

/// What playing a card of this suit does. Total over [`Suit`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Monster,
    Potion,
    Weapon,
}

pub const RANK_MIN: u8 = 2;
pub const RANK_JACK: u8 = 11;
pub const RANK_QUEEN: u8 = 12;
pub const RANK_KING: u8 = 13;
pub const RANK_ACE: u8 = 14;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    pub fn kind(self) -> CardKind {
        match self.suit {
            Suit::Spades | Suit::Clubs => CardKind::Monster,
            Suit::Hearts => CardKind::Potion,
            Suit::Diamonds => CardKind::Weapon,
        }
    }

    pub fn rank_label(self) -> &'static str {
        match self.rank {
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            RANK_JACK => "J",
            RANK_QUEEN => "Q",
            RANK_KING => "K",
            RANK_ACE => "A",
            _ => "?",
        }
    }
}
