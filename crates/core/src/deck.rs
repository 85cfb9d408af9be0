use crate::{Card, RngState, Suit};
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 44;

/// Draw pile for one dungeon run. The front of the pile is the next card
/// drawn; run-from-room returns cards to the bottom.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 44-card dungeon: black suits keep their face cards and
    /// aces, red suits run 2..=10 only.
    pub fn dungeon(rng: &mut RngState) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in [Suit::Spades, Suit::Clubs] {
            for rank in 2..=14 {
                cards.push(Card::new(suit, rank));
            }
        }
        for suit in [Suit::Hearts, Suit::Diamonds] {
            for rank in 2..=10 {
                cards.push(Card::new(suit, rank));
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes up to `count` cards from the front.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn return_to_bottom(&mut self, mut cards: Vec<Card>) {
        self.cards.append(&mut cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
