pub mod combinations;
pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Aces, Card};
use crate::hand::{validate_deal, HandError};
use combinations::Combination;
use core::cmp::Ordering;
use std::fmt;
use tracing::{event, Level};

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Hand category from weakest to strongest. In this variant a straight
/// outranks four of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    Straight = 8,
    StraightFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "3 of a kind",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "4 of a kind",
            Category::Straight => "straight",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a detector found, with only the tiebreak fields its category uses.
/// All ranks are card values (ace 1 or 14, joker 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    HighCard { high_card: u8 },
    Pair { rank: u8, high_card: u8 },
    TwoPair { low: u8, high: u8, high_card: u8 },
    ThreeOfAKind { rank: u8 },
    /// Carries no rank: the single-field comparison never splits two flushes.
    Flush,
    FullHouse { trips: u8, pair: u8 },
    FourOfAKind { rank: u8 },
    /// `top` is the highest card of the run, 5 for the wheel.
    Straight { high_card: u8, top: u8, flush: bool, top_straight: bool },
    StraightFlush { high_card: u8, top: u8, top_straight: bool },
}

impl HandKind {
    pub const fn category(&self) -> Category {
        match self {
            HandKind::HighCard { .. } => Category::HighCard,
            HandKind::Pair { .. } => Category::Pair,
            HandKind::TwoPair { .. } => Category::TwoPair,
            HandKind::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandKind::Flush => Category::Flush,
            HandKind::FullHouse { .. } => Category::FullHouse,
            HandKind::FourOfAKind { .. } => Category::FourOfAKind,
            HandKind::Straight { .. } => Category::Straight,
            HandKind::StraightFlush { .. } => Category::StraightFlush,
        }
    }

    /// Rank of the main group: quads, full house trips, trips, the lower of
    /// two pairs, or the pair.
    pub const fn primary_rank(&self) -> Option<u8> {
        match *self {
            HandKind::FourOfAKind { rank }
            | HandKind::ThreeOfAKind { rank }
            | HandKind::Pair { rank, .. } => Some(rank),
            HandKind::FullHouse { trips, .. } => Some(trips),
            HandKind::TwoPair { low, .. } => Some(low),
            _ => None,
        }
    }

    /// Full house pair, or the higher of two pairs.
    pub const fn secondary_rank(&self) -> Option<u8> {
        match *self {
            HandKind::FullHouse { pair, .. } => Some(pair),
            HandKind::TwoPair { high, .. } => Some(high),
            _ => None,
        }
    }

    pub const fn high_card(&self) -> Option<u8> {
        match *self {
            HandKind::HighCard { high_card }
            | HandKind::Pair { high_card, .. }
            | HandKind::TwoPair { high_card, .. }
            | HandKind::Straight { high_card, .. }
            | HandKind::StraightFlush { high_card, .. } => Some(high_card),
            _ => None,
        }
    }

    pub const fn is_top_straight(&self) -> bool {
        matches!(
            self,
            HandKind::Straight { top_straight: true, .. }
                | HandKind::StraightFlush { top_straight: true, .. }
        )
    }

    const fn straight_top(&self) -> Option<u8> {
        match *self {
            HandKind::Straight { top, .. } | HandKind::StraightFlush { top, .. } => Some(top),
            _ => None,
        }
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub kind: HandKind,
    /// All five cards share a suit, whatever category was assigned.
    pub flush: bool,
    /// The classified combination, highest value first.
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    fn new(kind: HandKind, flush: bool, mut combination: Combination) -> Self {
        combination.sort_by_rank(true);
        let tiebreak = match kind.straight_top() {
            Some(top) => vec![top],
            None => rank_groups::RankGroups::from_values(&combination.values()).tiebreak(),
        };
        let value = HandValue::from_parts(kind.category(), &tiebreak);
        Self { kind, flush, best_five: combination.into_cards(), value }
    }

    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    pub const fn primary_rank(&self) -> Option<u8> {
        self.kind.primary_rank()
    }

    pub const fn secondary_rank(&self) -> Option<u8> {
        self.kind.secondary_rank()
    }

    pub const fn high_card(&self) -> Option<u8> {
        self.kind.high_card()
    }

    pub const fn is_top_straight(&self) -> bool {
        self.kind.is_top_straight()
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category())?;
        for (i, card) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five ordered tiebreak values.
    pub fn from_parts(category: Category, tiebreak: &[u8]) -> Self {
        // [ category (8 bits) | t0 (6) | t1 (6) | t2 (6) | t3 (6) | t4 (6) | 18 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        debug_assert!(tiebreak.len() <= 5);
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= u64::from(*r & 0x3f) << offset;
        }
        HandValue(v)
    }
}

/// Which 5-card combinations are considered for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Search {
    /// Every hole card plus three community cards.
    BothHoleCards,
    /// Any five of the pooled hole and community cards.
    #[default]
    AnyFive,
}

/// How two hands of the same category are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tiebreak {
    /// The first of primary rank, secondary rank, top straight, high card
    /// that favours the challenger decides. Not symmetric: two hands can
    /// each outrank the other.
    FirstDiscriminator,
    /// Ordered kicker lists compared lexicographically.
    #[default]
    Kickers,
}

impl Tiebreak {
    /// True iff `a` beats `b` under this rule. Higher category always wins.
    pub fn outranks(self, a: &Evaluation, b: &Evaluation) -> bool {
        match self {
            Tiebreak::Kickers => a.value > b.value,
            Tiebreak::FirstDiscriminator => {
                if a.category() != b.category() {
                    return a.category() > b.category();
                }
                fn gt(x: Option<u8>, y: Option<u8>) -> bool {
                    matches!((x, y), (Some(x), Some(y)) if x > y)
                }
                gt(a.primary_rank(), b.primary_rank())
                    || gt(a.secondary_rank(), b.secondary_rank())
                    || (a.is_top_straight() && !b.is_top_straight())
                    || gt(a.high_card(), b.high_card())
            }
        }
    }

    /// Ordering view of [`Tiebreak::outranks`]. For `FirstDiscriminator`,
    /// `a` is checked first, so mutually outranking hands read as Greater.
    pub fn cmp(self, a: &Evaluation, b: &Evaluation) -> Ordering {
        match self {
            Tiebreak::Kickers => a.value.cmp(&b.value),
            Tiebreak::FirstDiscriminator => {
                if self.outranks(a, b) {
                    Ordering::Greater
                } else if self.outranks(b, a) {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            }
        }
    }
}

/// Evaluation rules: candidate search, straight flush category, tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub search: Search,
    pub straight_flush: bool,
    pub tiebreak: Tiebreak,
}

impl Rules {
    /// Both hole cards always play, suited straights stay straights and the
    /// first differing field decides.
    pub const CLASSIC: Rules = Rules {
        search: Search::BothHoleCards,
        straight_flush: false,
        tiebreak: Tiebreak::FirstDiscriminator,
    };

    /// Best five of seven, straight flushes on top, full kicker comparison.
    pub const STANDARD: Rules =
        Rules { search: Search::AnyFive, straight_flush: true, tiebreak: Tiebreak::Kickers };

    pub fn is_classic(&self) -> bool {
        *self == Rules::CLASSIC
    }

    pub fn label(&self) -> &'static str {
        if self.is_classic() {
            "classic"
        } else if *self == Rules::STANDARD {
            "standard"
        } else {
            "custom"
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::STANDARD
    }
}

/// The best evaluation found for a player and how many candidates were scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BestHand {
    pub evaluation: Evaluation,
    pub candidates: usize,
}

impl BestHand {
    pub const fn category(&self) -> Category {
        self.evaluation.category()
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.evaluation.best_five
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("a combination needs exactly five cards, got {0}")]
    CombinationSize(usize),
    #[error("no hole cards to evaluate")]
    NoHoleCards,
    #[error("no candidate combinations to rank")]
    NoCandidates,
}

/// Classify exactly five cards. Detectors run strongest first and the first
/// match wins; the straight flush detector only runs when the rules ask.
pub fn classify(mut combination: Combination, rules: &Rules) -> Evaluation {
    use detector::DETECTORS;

    let flush = suit_info::SuitInfo::detect(&mut combination).is_flush;
    for detector in DETECTORS.iter() {
        if detector.category() == Category::StraightFlush && !rules.straight_flush {
            continue;
        }
        if let Some(kind) = detector.detect(&mut combination, flush) {
            return Evaluation::new(kind, flush, combination);
        }
    }

    unreachable!("HighCard detector should always match")
}

/// Evaluate a player's best hand under [`Rules::STANDARD`].
///
/// ```
/// use holdem_eval::cards::{parse_cards, Aces};
/// use holdem_eval::evaluator::{evaluate_best_hand, Category};
///
/// let hole = parse_cards("As Ah").unwrap();
/// let board = parse_cards("Qc Jd 9h 3s 2c").unwrap();
/// let best = evaluate_best_hand(&hole, &board, Aces::High).unwrap();
/// assert_eq!(best.category(), Category::Pair);
/// assert_eq!(best.evaluation.primary_rank(), Some(14));
/// assert_eq!(best.candidates, 21);
/// ```
pub fn evaluate_best_hand(
    hole: &[Card],
    community: &[Card],
    aces: Aces,
) -> Result<BestHand, EvalError> {
    evaluate_best_hand_with(hole, community, aces, &Rules::STANDARD)
}

/// Evaluate every candidate combination and keep the one `rules` ranks
/// highest. The first candidate wins exact ties. Inputs are only read.
pub fn evaluate_best_hand_with(
    hole: &[Card],
    community: &[Card],
    aces: Aces,
    rules: &Rules,
) -> Result<BestHand, EvalError> {
    validate_deal(hole, community)?;
    let candidates = combinations::candidates(hole, community, aces, rules.search)?;
    let count = candidates.len();

    let mut best: Option<Evaluation> = None;
    for combination in candidates {
        let eval = classify(combination, rules);
        event!(Level::TRACE, category = ?eval.category(), hand = %eval, "scored candidate");
        if best.as_ref().map_or(true, |b| rules.tiebreak.outranks(&eval, b)) {
            best = Some(eval);
        }
    }

    let evaluation = best.ok_or(EvalError::NoCandidates)?;
    event!(Level::DEBUG, category = ?evaluation.category(), candidates = count, hand = %evaluation, "best hand");
    Ok(BestHand { evaluation, candidates: count })
}

/// True iff `a` outranks `b` under [`Tiebreak::Kickers`].
///
/// ```
/// use holdem_eval::cards::{parse_cards, Aces};
/// use holdem_eval::evaluator::{compare, evaluate_best_hand};
///
/// let board = parse_cards("Qc Jd 9h 3s 2c").unwrap();
/// let aces = evaluate_best_hand(&parse_cards("As Ah").unwrap(), &board, Aces::High).unwrap();
/// let kings = evaluate_best_hand(&parse_cards("Ks Kh").unwrap(), &board, Aces::High).unwrap();
/// assert!(compare(&aces.evaluation, &kings.evaluation));
/// assert!(!compare(&kings.evaluation, &aces.evaluation));
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> bool {
    Tiebreak::Kickers.outranks(a, b)
}
