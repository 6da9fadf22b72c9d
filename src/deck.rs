use crate::cards::{Aces, Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 52-card deck, optionally with two jokers. The top of the deck is the end
/// of the internal vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_eval::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::new(Aces::High, false)
    }

    /// Build an unshuffled deck with aces valued per `aces`.
    pub fn new(aces: Aces, jokers: bool) -> Self {
        let mut cards = Vec::with_capacity(54);
        for &s in Suit::ALL.iter() {
            for &r in Rank::ALL.iter() {
                cards.push(Card::with_value(r, s, aces));
            }
        }
        if jokers {
            cards.push(Card::joker());
            cards.push(Card::joker());
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }

    /// Pull one card from a uniformly random position. O(n).
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(idx))
    }

    /// Return discarded cards to the bottom of the deck, one at a time.
    pub fn push_bottom<I>(&mut self, discards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in discards {
            self.cards.insert(0, card);
        }
    }
}
