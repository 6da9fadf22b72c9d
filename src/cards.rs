use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card faces from Two (low) to Ace. The discriminant is the ace-high value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranking value of this face; only the ace depends on `aces`.
    pub const fn value(self, aces: Aces) -> u8 {
        match self {
            Rank::Ace => aces.value(),
            other => other as u8,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Name printed on the card face ("10" rather than "T").
    pub const fn face(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let upper = t.to_ascii_uppercase();
        let r = match upper.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// How aces are valued when a deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aces {
    /// Ace ranks below the Two (value 1).
    Low,
    /// Ace ranks above the King (value 14).
    #[default]
    High,
}

impl Aces {
    pub const fn value(self) -> u8 {
        match self {
            Aces::Low => 1,
            Aces::High => 14,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Aces::Low => Aces::High,
            Aces::High => Aces::Low,
        }
    }
}

/// Four suits, declared in the order `sort_by_suit` groups them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card. A joker has neither face nor suit and is valued 0.
///
/// Equality and ordering look at the ranking value only, so an ace of spades
/// and an ace of hearts compare equal. Use [`Card::identity`] to tell two
/// physical cards apart.
///
/// Cards are deliberately not `Copy`: a card lives in exactly one deck or hand
/// and moves between them.
///
/// ```
/// use holdem_eval::cards::{Aces, Card, Rank, Suit};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(ace.to_string(), "As");
/// assert_eq!(ace.value(), 14);
/// assert_eq!(ace.with_aces(Aces::Low).value(), 1);
/// assert_eq!(Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Clubs));
/// ```
#[derive(Debug, Clone)]
pub struct Card {
    rank: Option<Rank>,
    suit: Option<Suit>,
    value: u8,
}

impl Card {
    /// A suited card with aces high.
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::with_value(rank, suit, Aces::High)
    }

    pub const fn with_value(rank: Rank, suit: Suit, aces: Aces) -> Self {
        Self { rank: Some(rank), suit: Some(suit), value: rank.value(aces) }
    }

    pub const fn joker() -> Self {
        Self { rank: None, suit: None, value: 0 }
    }

    /// Re-value an ace for the given mode; other cards come back unchanged.
    pub fn with_aces(self, aces: Aces) -> Self {
        match self.rank {
            Some(rank) => Self { value: rank.value(aces), ..self },
            None => self,
        }
    }

    /// Ranking value: 1 or 14 for an ace, 2-13 for the other faces, 0 for a joker.
    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub const fn is_joker(&self) -> bool {
        self.rank.is_none()
    }

    /// Physical identity of the card, independent of ace mode.
    pub const fn identity(&self) -> (Option<Rank>, Option<Suit>) {
        (self.rank, self.suit)
    }

    /// Display name such as "♠A" or "♥10"; not used for comparisons.
    pub fn label(&self) -> String {
        match (self.rank, self.suit) {
            (Some(rank), Some(suit)) => format!("{}{}", suit.symbol(), rank.face()),
            _ => "Joker".to_string(),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.suit) {
            (Some(rank), Some(suit)) => write!(f, "{rank}{suit}"),
            _ => write!(f, "Jk"),
        }
    }
}

/// Sort cards by ranking value, ascending unless `descending` is set.
/// Stable, so equal values keep their relative order.
pub fn sort_by_rank(cards: &mut [Card], descending: bool) {
    if descending {
        cards.sort_by(|a, b| b.cmp(a));
    } else {
        cards.sort();
    }
}

/// Group cards by suit (spades, clubs, hearts, diamonds), suitless jokers last.
pub fn sort_by_suit(cards: &mut [Card]) {
    cards.sort_by_key(|c| (c.suit.is_none(), c.suit));
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("jk") || t.eq_ignore_ascii_case("joker") {
            return Ok(Card::joker());
        }
        // rank is everything but the last char ("10" included); suit is the last char
        let Some(suit_ch) = t.chars().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas, aces high.
///
/// ```
/// use holdem_eval::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0].identity(), Card::new(Rank::Ace, Suit::Spades).identity());
/// assert_eq!(cards[2].value(), 10);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    parse_cards_with(input, Aces::High)
}

/// Parse multiple cards, valuing aces according to `aces`.
pub fn parse_cards_with(input: &str, aces: Aces) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| Card::from_str(s).map(|c| c.with_aces(aces)))
        .collect()
}
