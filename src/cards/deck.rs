use super::card::Card;
use crate::DECK;
use rand::Rng;

/// The 6-card Leduc deck as a bitmask, with ability to remove cards
/// from itself. Random selection via ::draw().
///
/// Draws take an external Rng so that fixed-seed runs deal
/// reproducible hands.
#[derive(Debug, Clone, Copy)]
pub struct Deck(u8);

impl Deck {
    pub fn new() -> Self {
        Self((1 << DECK) - 1)
    }

    pub fn size(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0 &= !(1 << u8::from(card));
    }

    /// remove a random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.size() > 0);
        let i = rng.random_range(0..self.size());
        let mut ones = 0u8;
        let mut deck = self.0;
        let mut card = self.0.trailing_zeros() as u8;
        while ones < i {
            deck = deck & (deck - 1);
            card = deck.trailing_zeros() as u8;
            ones = ones + 1;
        }
        let card = Card::from(card);
        self.remove(card);
        card
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..DECK {
            assert!(seen.insert(deck.draw(rng)));
        }
        assert!(deck.size() == 0);
    }

    #[test]
    fn removes_named_card() {
        let mut deck = Deck::new();
        deck.remove(Card::from(3u8));
        assert!(deck.size() == DECK as u8 - 1);
    }
}
