use crate::cards::{Aces, Card};
use crate::deck::Deck;
use crate::evaluator::{EvalError, Rules, Search, Tiebreak};
use crate::hand::Hand;
use crate::player::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{event, Level};

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("seat count must be between 2 and 10, got {0}")]
    SeatCount(usize),
    #[error("unsupported hole card count for these rules: {0}")]
    HoleCardCount(usize),
    #[error("deck exhausted while dealing")]
    DeckExhausted,
    #[error("cannot do that during the {}", .0.label())]
    WrongStreet(Street),
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}

/// Table setup. `seed` makes every shuffle reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub seats: usize,
    pub hole_cards: usize,
    pub aces: Aces,
    pub jokers: bool,
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 2,
            hole_cards: 2,
            aces: Aces::High,
            jokers: false,
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seats) {
            return Err(TableError::SeatCount(self.seats));
        }
        // hole + flop must form exactly one five-card candidate when every hole card plays
        let hole_ok = match self.rules.search {
            Search::BothHoleCards => self.hole_cards == 2,
            Search::AnyFive => (2..=4).contains(&self.hole_cards),
        };
        if !hole_ok {
            return Err(TableError::HoleCardCount(self.hole_cards));
        }
        Ok(())
    }
}

/// A community-card table walking one hand at a time from the deal to the
/// showdown. Cards always return to the bottom of the deck between hands.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    rng: ChaCha8Rng,
    players: Vec<Player>,
    board: Hand,
    street: Street,
    winners: Vec<usize>,
    hands_played: u64,
    rebuild_deck: bool,
}

impl Table {
    /// Validate `config`, shuffle a fresh deck and deal the first hand.
    ///
    /// ```
    /// use holdem_eval::table::{Street, Table, TableConfig};
    ///
    /// let mut table = Table::new(TableConfig { seed: Some(7), ..TableConfig::default() }).unwrap();
    /// while table.street() != Street::Showdown {
    ///     table.advance().unwrap();
    /// }
    /// assert_eq!(table.board().len(), 5);
    /// assert!(!table.winners().is_empty());
    /// ```
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let players = (1..=config.seats).map(|i| Player::new(format!("P{i}"))).collect();
        let mut table = Self {
            deck: Deck::new(config.aces, config.jokers),
            config,
            rng,
            players,
            board: Hand::new(),
            street: Street::Preflop,
            winners: Vec::new(),
            hands_played: 0,
            rebuild_deck: false,
        };
        table.new_hand()?;
        Ok(table)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Hand {
        &self.board
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Winning seats of the last showdown, in seat order.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Switch rules. A settled showdown is re-scored under the new rules.
    pub fn set_rules(&mut self, rules: Rules) -> Result<(), TableError> {
        TableConfig { rules, ..self.config.clone() }.validate()?;
        self.config.rules = rules;
        if self.street == Street::Showdown {
            self.showdown()?;
        }
        Ok(())
    }

    /// Switch ace mode. Cards are re-valued when evaluated, so this applies
    /// immediately; a settled showdown is re-scored.
    pub fn set_aces(&mut self, aces: Aces) -> Result<(), TableError> {
        self.config.aces = aces;
        if self.street == Street::Showdown {
            self.showdown()?;
        }
        Ok(())
    }

    /// Add or remove the jokers. Takes effect from the next hand.
    pub fn set_jokers(&mut self, jokers: bool) {
        if self.config.jokers != jokers {
            self.config.jokers = jokers;
            self.rebuild_deck = true;
        }
    }

    /// Collect every card, reshuffle and deal hole cards one at a time around the table.
    pub fn new_hand(&mut self) -> Result<(), TableError> {
        for p in &mut self.players {
            p.muck(&mut self.deck);
        }
        self.board.discard_all(&mut self.deck);
        if self.rebuild_deck {
            self.deck = Deck::new(self.config.aces, self.config.jokers);
            self.rebuild_deck = false;
        }
        self.deck.shuffle_with(&mut self.rng);
        self.winners.clear();
        self.street = Street::Preflop;

        for _ in 0..self.config.hole_cards {
            for p in &mut self.players {
                p.deal(&mut self.deck, 1).map_err(|_| TableError::DeckExhausted)?;
            }
        }
        self.hands_played += 1;
        event!(
            Level::INFO,
            hand = self.hands_played,
            seats = self.players.len(),
            rules = self.config.rules.label(),
            "dealt new hand"
        );
        Ok(())
    }

    /// Deal the next street, or settle the showdown after the river.
    pub fn advance(&mut self) -> Result<Street, TableError> {
        match self.street {
            Street::Preflop => self.deal_board(3, Street::Flop)?,
            Street::Flop => self.deal_board(1, Street::Turn)?,
            Street::Turn => self.deal_board(1, Street::River)?,
            Street::River => {
                self.showdown()?;
            }
            Street::Showdown => return Err(TableError::WrongStreet(Street::Showdown)),
        }
        Ok(self.street)
    }

    fn deal_board(&mut self, n: usize, next: Street) -> Result<(), TableError> {
        self.board.deal(&mut self.deck, n).map_err(|_| TableError::DeckExhausted)?;
        self.street = next;
        event!(Level::INFO, street = next.label(), board = %self.board, "dealt street");
        Ok(())
    }

    /// Assign every player's best hand and pick the winners. Classic rules
    /// name a single seat: the last seat leads and an earlier seat takes over
    /// only when it outranks the leader, so a tie stays with the later seat.
    /// Kicker rules return every seat tied for best.
    pub fn showdown(&mut self) -> Result<&[usize], TableError> {
        if !matches!(self.street, Street::River | Street::Showdown) {
            return Err(TableError::WrongStreet(self.street));
        }
        let rules = self.config.rules;
        let board: &[Card] = self.board.as_slice();
        for p in &mut self.players {
            p.assign_best_hand(board, self.config.aces, &rules)?;
        }

        let evals: Vec<_> = self
            .players
            .iter()
            .map(|p| p.best_hand().map(|b| &b.evaluation).ok_or(EvalError::NoCandidates))
            .collect::<Result<_, _>>()?;

        self.winners = match rules.tiebreak {
            Tiebreak::FirstDiscriminator => {
                let mut leader = evals.len().saturating_sub(1);
                for i in (0..leader).rev() {
                    if rules.tiebreak.outranks(evals[i], evals[leader]) {
                        leader = i;
                    }
                }
                vec![leader]
            }
            Tiebreak::Kickers => match evals.iter().max() {
                Some(top) => (0..evals.len()).filter(|&i| evals[i] == *top).collect(),
                None => Vec::new(),
            },
        };
        self.street = Street::Showdown;

        event!(
            Level::INFO,
            winners = ?self.winners,
            category = ?evals.get(self.winners.first().copied().unwrap_or(0)).map(|e| e.category()),
            "showdown settled"
        );
        Ok(&self.winners)
    }
}
