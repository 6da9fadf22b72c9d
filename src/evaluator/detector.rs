use super::combinations::Combination;
use super::straight_info::StraightInfo;
use crate::evaluator::{Category, HandKind};

/// Strategy pattern: each category detector imposes its own order on the
/// combination and reports the tiebreak fields of its category.
///
/// `flush` is computed once per combination by the classifier.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, combo: &mut Combination, flush: bool) -> Option<HandKind>;
}

/// Values sorted low to high.
fn ascending(combo: &mut Combination) -> [u8; 5] {
    combo.sort_by_rank(false);
    combo.values()
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: a straight whose five cards share a suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, combo: &mut Combination, flush: bool) -> Option<HandKind> {
        if !flush {
            return None;
        }
        let info = StraightInfo::detect(combo);
        if !info.is_straight {
            return None;
        }
        let top = info.top?;
        Some(HandKind::StraightFlush {
            high_card: combo.values()[4],
            top,
            top_straight: info.is_top_straight,
        })
    }
}

/// Straight: five consecutive values. Suited runs stay here under classic rules.
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, combo: &mut Combination, flush: bool) -> Option<HandKind> {
        let info = StraightInfo::detect(combo);
        if !info.is_straight {
            return None;
        }
        let top = info.top?;
        Some(HandKind::Straight {
            high_card: combo.values()[4],
            top,
            flush,
            top_straight: info.is_top_straight,
        })
    }
}

/// Four of a Kind: first four or last four values equal
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        let v = ascending(combo);
        let low_four = v[0] == v[1] && v[1] == v[2] && v[2] == v[3];
        let high_four = v[1] == v[2] && v[2] == v[3] && v[3] == v[4];
        (low_four || high_four).then_some(HandKind::FourOfAKind { rank: v[1] })
    }
}

/// Full House: three equal and two equal, in either order
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        let v = ascending(combo);
        if v[0] == v[1] && v[1] == v[2] && v[3] == v[4] {
            Some(HandKind::FullHouse { trips: v[0], pair: v[3] })
        } else if v[0] == v[1] && v[2] == v[3] && v[3] == v[4] {
            Some(HandKind::FullHouse { trips: v[2], pair: v[0] })
        } else {
            None
        }
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, _combo: &mut Combination, flush: bool) -> Option<HandKind> {
        flush.then_some(HandKind::Flush)
    }
}

/// Three of a Kind: a run of three equal values. The middle card is always part of it.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        let v = ascending(combo);
        v.windows(3)
            .any(|w| w[0] == w[1] && w[1] == w[2])
            .then_some(HandKind::ThreeOfAKind { rank: v[2] })
    }
}

/// Two Pair: a pair at 0-1 or 1-2 and another at 2-3 or 3-4
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        let v = ascending(combo);
        let lower = v[0] == v[1] || v[1] == v[2];
        let upper = v[2] == v[3] || v[3] == v[4];
        (lower && upper).then_some(HandKind::TwoPair { low: v[1], high: v[3], high_card: v[4] })
    }
}

/// One Pair: the first adjacent equal values
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        let v = ascending(combo);
        v.windows(2)
            .find(|w| w[0] == w[1])
            .map(|w| HandKind::Pair { rank: w[0], high_card: v[4] })
    }
}

/// High Card: always matches as the fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, combo: &mut Combination, _flush: bool) -> Option<HandKind> {
        Some(HandKind::HighCard { high_card: ascending(combo)[4] })
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &StraightDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn combo(s: &str) -> Combination {
        Combination::try_from(parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn test_straight_flush_detector() {
        let mut c = combo("9h 8h 7h 6h 5h");
        let kind = StraightFlushDetector.detect(&mut c, true).unwrap();
        assert_eq!(kind, HandKind::StraightFlush { high_card: 9, top: 9, top_straight: false });
        assert!(StraightFlushDetector.detect(&mut c, false).is_none());
    }

    #[test]
    fn test_straight_detector_carries_flush_flag() {
        let mut c = combo("Th Jh Qh Kh Ah");
        let kind = StraightDetector.detect(&mut c, true).unwrap();
        assert_eq!(
            kind,
            HandKind::Straight { high_card: 14, top: 14, flush: true, top_straight: true }
        );
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let mut low = combo("2s 2h 2d 2c 9s");
        assert_eq!(FourOfAKindDetector.detect(&mut low, false), Some(HandKind::FourOfAKind { rank: 2 }));
        let mut high = combo("As Ah Ad Ac Ks");
        assert_eq!(FourOfAKindDetector.detect(&mut high, false), Some(HandKind::FourOfAKind { rank: 14 }));
        let mut boat = combo("Ks Kh Kd Qc Qs");
        assert!(FourOfAKindDetector.detect(&mut boat, false).is_none());
    }

    #[test]
    fn test_full_house_detector_both_orders() {
        let mut low_trips = combo("3s 3h 3d 9c 9s");
        assert_eq!(
            FullHouseDetector.detect(&mut low_trips, false),
            Some(HandKind::FullHouse { trips: 3, pair: 9 })
        );
        let mut high_trips = combo("Ks Kh Kd 4c 4s");
        assert_eq!(
            FullHouseDetector.detect(&mut high_trips, false),
            Some(HandKind::FullHouse { trips: 13, pair: 4 })
        );
        let mut two_pair = combo("Ks Kh 4d 4c 2s");
        assert!(FullHouseDetector.detect(&mut two_pair, false).is_none());
    }

    #[test]
    fn test_flush_detector() {
        let mut c = combo("Ad Jd 9d 5d 2d");
        assert_eq!(FlushDetector.detect(&mut c, true), Some(HandKind::Flush));
        assert!(FlushDetector.detect(&mut c, false).is_none());
    }

    #[test]
    fn test_three_of_a_kind_detector_any_offset() {
        for (cards, rank) in [("4s 4h 4d 7c 9s", 4), ("2s 7h 7d 7c 9s", 7), ("2s 3h 9d 9c 9s", 9)] {
            let mut c = combo(cards);
            assert_eq!(ThreeOfAKindDetector.detect(&mut c, false), Some(HandKind::ThreeOfAKind { rank }));
        }
        let mut pair = combo("2s 2h 9d 8c 7s");
        assert!(ThreeOfAKindDetector.detect(&mut pair, false).is_none());
    }

    #[test]
    fn test_two_pair_detector() {
        let mut c = combo("As Ah Kd Kc Qs");
        assert_eq!(
            TwoPairDetector.detect(&mut c, false),
            Some(HandKind::TwoPair { low: 13, high: 14, high_card: 14 })
        );
        let mut split = combo("2s 2h 5d 9c 9s");
        assert_eq!(
            TwoPairDetector.detect(&mut split, false),
            Some(HandKind::TwoPair { low: 2, high: 9, high_card: 9 })
        );
    }

    #[test]
    fn test_one_pair_detector() {
        let mut c = combo("Js Jh 9d 7c 3s");
        assert_eq!(OnePairDetector.detect(&mut c, false), Some(HandKind::Pair { rank: 11, high_card: 11 }));
        let mut none = combo("As Kh Jd 9c 7s");
        assert!(OnePairDetector.detect(&mut none, false).is_none());
    }

    #[test]
    fn test_jokers_pair_at_zero() {
        let mut cards = parse_cards("9s 7h 4d").unwrap();
        cards.push(Card::joker());
        cards.push(Card::joker());
        let mut c = Combination::try_from(cards).unwrap();
        assert_eq!(OnePairDetector.detect(&mut c, false), Some(HandKind::Pair { rank: 0, high_card: 9 }));
    }

    #[test]
    fn test_high_card_detector() {
        let mut c = combo("7s Kh Jd 9c As");
        assert_eq!(HighCardDetector.detect(&mut c, false), Some(HandKind::HighCard { high_card: 14 }));
    }

    #[test]
    fn test_detector_order() {
        let order: Vec<u8> = DETECTORS.iter().map(|d| d.category().ordinal()).collect();
        assert_eq!(order, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }
}
