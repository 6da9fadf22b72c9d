use super::combinations::Combination;

/// Whether all five cards share a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    /// Sorts the combination by suit; after that a flush shows as the first
    /// and last cards sharing a suit. Jokers sort last and carry no suit.
    pub fn detect(combo: &mut Combination) -> Self {
        combo.sort_by_suit();
        let cards = combo.cards();
        let is_flush = cards[0].suit().is_some() && cards[0].suit() == cards[4].suit();
        SuitInfo { is_flush }
    }
}
