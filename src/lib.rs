//! holdem-eval: community-card poker hand evaluation
//!
//! Goals:
//! - Best five-card hand for a player from hole and community cards
//! - Selectable rules: the classic ranking of this variant, or standard
//!   best-of-seven with straight flushes and full kicker comparison
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate and compare two hands
//! ```
//! use holdem_eval::cards::{parse_cards, Aces};
//! use holdem_eval::evaluator::{compare, evaluate_best_hand, Category};
//!
//! let board = parse_cards("Kc Qd Jh 3s 2c").unwrap();
//! let aces = evaluate_best_hand(&parse_cards("As Ah").unwrap(), &board, Aces::High).unwrap();
//! let broadway = evaluate_best_hand(&parse_cards("Ad Th").unwrap(), &board, Aces::High).unwrap();
//!
//! assert_eq!(aces.category(), Category::Pair);
//! assert_eq!(broadway.category(), Category::Straight);
//! assert!(compare(&broadway.evaluation, &aces.evaluation));
//! ```
//!
//! ## TUI
//! Run the interactive dealer view with:
//! ```sh
//! cargo run --bin holdem-eval -- [seats] [seed]
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
