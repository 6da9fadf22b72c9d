use crate::cards::{self, parse_cards, Card};
use crate::deck::Deck;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card: {0}")]
    DuplicateCard(String),
    #[error("too many community cards: {0}")]
    TooManyCommunityCards(usize),
    #[error("deck ran out after dealing {dealt} of {wanted} cards")]
    DeckExhausted { dealt: usize, wanted: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// An ordered, growable run of cards: a player's hole cards or the board.
///
/// ```
/// use holdem_eval::hand::Hand;
///
/// let mut hand: Hand = "9s 2d Ah".parse().unwrap();
/// hand.sort_by_rank(false);
/// assert_eq!(hand.to_string(), "2d 9s Ah");
/// assert_eq!(hand[2].value(), 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
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

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Take `n` cards off the top of `deck`. On a short deck the cards that
    /// were available stay in the hand and the shortfall is reported.
    pub fn deal(&mut self, deck: &mut Deck, n: usize) -> Result<(), HandError> {
        for dealt in 0..n {
            let card = deck.draw().ok_or(HandError::DeckExhausted { dealt, wanted: n })?;
            self.cards.push(card);
        }
        Ok(())
    }

    /// Like [`Hand::deal`] but pulls each card from a random position.
    pub fn deal_random<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        n: usize,
        rng: &mut R,
    ) -> Result<(), HandError> {
        for dealt in 0..n {
            let card = deck.draw_random(rng).ok_or(HandError::DeckExhausted { dealt, wanted: n })?;
            self.cards.push(card);
        }
        Ok(())
    }

    /// Remove every card, handing ownership back to the caller.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Return every card to the bottom of `deck`.
    pub fn discard_all(&mut self, deck: &mut Deck) {
        deck.push_bottom(self.cards.drain(..).rev());
    }

    /// Return the physical card matching `card` to the bottom of `deck`.
    /// Returns false when the hand does not hold that card.
    pub fn discard(&mut self, card: &Card, deck: &mut Deck) -> bool {
        match self.cards.iter().position(|c| c.identity() == card.identity()) {
            Some(idx) => {
                deck.push_bottom([self.cards.remove(idx)]);
                true
            }
            None => false,
        }
    }

    pub fn sort_by_rank(&mut self, descending: bool) {
        cards::sort_by_rank(&mut self.cards, descending);
    }

    pub fn sort_by_suit(&mut self) {
        cards::sort_by_suit(&mut self.cards);
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, idx: usize) -> &Card {
        &self.cards[idx]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::from_cards(cards))
    }
}

/// Validate hole and community cards before evaluation: at most five
/// community cards and no physical card twice. Jokers may repeat.
///
/// ```
/// use holdem_eval::cards::parse_cards;
/// use holdem_eval::hand::validate_deal;
///
/// let hole = parse_cards("As Ks").unwrap();
/// let board = parse_cards("2c 3c As").unwrap();
/// assert!(validate_deal(&hole, &board).is_err());
/// ```
pub fn validate_deal(hole: &[Card], community: &[Card]) -> Result<(), HandError> {
    if community.len() > 5 {
        return Err(HandError::TooManyCommunityCards(community.len()));
    }
    let mut seen = HashSet::with_capacity(hole.len() + community.len());
    for card in hole.iter().chain(community).filter(|c| !c.is_joker()) {
        if !seen.insert(card.identity()) {
            return Err(HandError::DuplicateCard(card.to_string()));
        }
    }
    Ok(())
}
