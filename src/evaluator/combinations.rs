use super::{EvalError, Search};
use crate::cards::{self, Aces, Card};

/// Number of ways to choose `k` items from `n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

/// Iterator over all `K`-index combinations of `0..n`, in lexicographic order.
///
/// ```
/// use holdem_eval::evaluator::combinations::Combinations;
///
/// let combos: Vec<[usize; 3]> = Combinations::<3>::new(4).collect();
/// assert_eq!(combos, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    remaining: usize,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, remaining: binomial(n, K) }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.indices;
        self.remaining -= 1;
        if self.remaining == 0 {
            return Some(result);
        }

        // Find the rightmost index that can be incremented
        let mut i = K - 1;
        while self.indices[i] == self.n - (K - i) {
            i -= 1;
        }
        self.indices[i] += 1;
        // Reset all indices to the right
        for j in (i + 1)..K {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for Combinations<K> {}

/// Exactly five cards under evaluation. Detectors reorder it in place, so
/// every candidate gets its own copy.
#[derive(Debug, Clone)]
pub struct Combination {
    cards: [Card; 5],
}

impl Combination {
    pub fn new(cards: [Card; 5]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn into_cards(self) -> [Card; 5] {
        self.cards
    }

    /// Ranking values in the current order.
    pub fn values(&self) -> [u8; 5] {
        [
            self.cards[0].value(),
            self.cards[1].value(),
            self.cards[2].value(),
            self.cards[3].value(),
            self.cards[4].value(),
        ]
    }

    pub fn sort_by_rank(&mut self, descending: bool) {
        cards::sort_by_rank(&mut self.cards, descending);
    }

    pub fn sort_by_suit(&mut self) {
        cards::sort_by_suit(&mut self.cards);
    }
}

impl TryFrom<Vec<Card>> for Combination {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let cards: [Card; 5] =
            cards.try_into().map_err(|v: Vec<Card>| EvalError::CombinationSize(v.len()))?;
        Ok(Self::new(cards))
    }
}

impl TryFrom<&[Card]> for Combination {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from(cards.to_vec())
    }
}

fn pick<'a>(
    cards: &'a [Card],
    indices: &'a [usize],
    aces: Aces,
) -> impl Iterator<Item = Card> + 'a {
    indices.iter().map(move |&i| cards[i].clone().with_aces(aces))
}

/// Build every candidate combination for one player.
///
/// With three or fewer community cards there is no choice to make: the
/// single candidate is the hole cards followed by the board. Past the flop,
/// `Search::BothHoleCards` keeps all hole cards and picks three board cards,
/// while `Search::AnyFive` picks any five of the pooled cards.
///
/// Each candidate is freshly allocated from the borrowed inputs, re-valued
/// for `aces`.
pub fn candidates(
    hole: &[Card],
    community: &[Card],
    aces: Aces,
    search: Search,
) -> Result<Vec<Combination>, EvalError> {
    if hole.is_empty() {
        return Err(EvalError::NoHoleCards);
    }
    let all_hole: Vec<usize> = (0..hole.len()).collect();

    let out = if community.len() <= 3 {
        let all_board: Vec<usize> = (0..community.len()).collect();
        let cards: Vec<Card> =
            pick(hole, &all_hole, aces).chain(pick(community, &all_board, aces)).collect();
        vec![Combination::try_from(cards)?]
    } else {
        match search {
            Search::BothHoleCards => Combinations::<3>::new(community.len())
                .map(|board| {
                    let cards: Vec<Card> =
                        pick(hole, &all_hole, aces).chain(pick(community, &board, aces)).collect();
                    Combination::try_from(cards)
                })
                .collect::<Result<Vec<_>, _>>()?,
            Search::AnyFive => {
                let pool: Vec<Card> = hole.iter().chain(community).cloned().collect();
                Combinations::<5>::new(pool.len())
                    .map(|idx| Combination::new(idx.map(|i| pool[i].clone().with_aces(aces))))
                    .collect()
            }
        }
    };

    if out.is_empty() {
        return Err(EvalError::NoCandidates);
    }
    Ok(out)
}
