use crate::cards::{Aces, Card};
use crate::deck::Deck;
use crate::evaluator::{evaluate_best_hand_with, BestHand, EvalError, Rules};
use crate::hand::{Hand, HandError};
use std::fmt;

/// A seat at the table: alias, hole cards and the last best-hand record.
#[derive(Debug, Clone)]
pub struct Player {
    alias: String,
    hand: Hand,
    best: Option<BestHand>,
}

impl Player {
    pub fn new(alias: impl Into<String>) -> Self {
        Self { alias: alias.into(), hand: Hand::new(), best: None }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Best hand from the most recent evaluation, if any.
    pub fn best_hand(&self) -> Option<&BestHand> {
        self.best.as_ref()
    }

    /// Take `n` cards from the top of `deck`.
    pub fn deal(&mut self, deck: &mut Deck, n: usize) -> Result<(), HandError> {
        self.hand.deal(deck, n)
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Evaluate hole cards against `community` and store the result,
    /// replacing any earlier record. A failed evaluation clears it.
    pub fn assign_best_hand(
        &mut self,
        community: &[Card],
        aces: Aces,
        rules: &Rules,
    ) -> Result<&BestHand, EvalError> {
        self.best = None;
        let best = evaluate_best_hand_with(self.hand.as_slice(), community, aces, rules)?;
        Ok(&*self.best.insert(best))
    }

    /// Return hole cards to the bottom of `deck` and forget the last evaluation.
    pub fn muck(&mut self, deck: &mut Deck) {
        self.hand.discard_all(deck);
        self.best = None;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.alias, self.hand)?;
        if let Some(best) = &self.best {
            write!(f, " [{}]", best.category())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::Category;

    #[test]
    fn assign_and_replace_best_hand() {
        let mut p = Player::new("P1");
        for c in parse_cards("As Ah").unwrap() {
            p.receive(c);
        }
        let board = parse_cards("Ad Kc 7h").unwrap();
        let best = p.assign_best_hand(&board, Aces::High, &Rules::STANDARD).unwrap();
        assert_eq!(best.category(), Category::ThreeOfAKind);
        assert_eq!(best.candidates, 1);

        let river = parse_cards("Ad Kc 7h Ks 2d").unwrap();
        p.assign_best_hand(&river, Aces::High, &Rules::STANDARD).unwrap();
        assert_eq!(p.best_hand().map(BestHand::category), Some(Category::FullHouse));
        assert_eq!(p.to_string(), "P1: As Ah [full house]");
    }

    #[test]
    fn failed_evaluation_clears_record() {
        let mut p = Player::new("P1");
        for c in parse_cards("As Ah").unwrap() {
            p.receive(c);
        }
        let board = parse_cards("Ad Kc 7h").unwrap();
        p.assign_best_hand(&board, Aces::High, &Rules::STANDARD).unwrap();
        assert!(p.assign_best_hand(&[], Aces::High, &Rules::STANDARD).is_err());
        assert!(p.best_hand().is_none());
    }

    #[test]
    fn deal_and_muck() {
        let mut deck = Deck::standard();
        let mut p = Player::new("P2");
        p.deal(&mut deck, 2).unwrap();
        assert_eq!(p.hand().len(), 2);
        p.muck(&mut deck);
        assert!(p.hand().is_empty());
        assert_eq!(deck.len(), 52);
    }
}
