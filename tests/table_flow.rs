use holdem_eval::cards::Aces;
use holdem_eval::evaluator::{Rules, Tiebreak};
use holdem_eval::table::{Street, Table, TableConfig, TableError};
use std::collections::HashSet;

fn table(seats: usize, seed: u64, rules: Rules) -> Table {
    Table::new(TableConfig { seats, seed: Some(seed), rules, ..TableConfig::default() }).unwrap()
}

fn play_out(t: &mut Table) {
    while t.street() != Street::Showdown {
        t.advance().unwrap();
    }
}

#[test_log::test]
fn every_dealt_card_is_distinct() {
    let mut t = table(10, 21, Rules::STANDARD);
    play_out(&mut t);
    let mut seen = HashSet::new();
    for card in t.players().iter().flat_map(|p| p.hand().iter()).chain(t.board().iter()) {
        assert!(seen.insert(card.identity()), "dealt twice: {card}");
    }
    assert_eq!(seen.len(), 25);
    assert_eq!(t.deck_len(), 52 - 25);
}

#[test_log::test]
fn standard_winners_hold_the_best_value() {
    for seed in 0..20 {
        let mut t = table(6, seed, Rules::STANDARD);
        play_out(&mut t);
        let values: Vec<_> = t
            .players()
            .iter()
            .map(|p| p.best_hand().expect("evaluated at showdown").evaluation.value())
            .collect();
        let top = values.iter().max().copied();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(t.winners().contains(&i), Some(*v) == top, "seed {seed} seat {i}");
        }
    }
}

#[test_log::test]
fn classic_winner_is_never_outranked_by_an_earlier_seat() {
    for seed in 0..20 {
        let mut t = table(5, seed, Rules::CLASSIC);
        play_out(&mut t);
        assert_eq!(t.winners().len(), 1);
        let w = t.winners()[0];
        let evals: Vec<_> =
            t.players().iter().map(|p| &p.best_hand().expect("evaluated").evaluation).collect();
        for earlier in &evals[..w] {
            assert!(!Tiebreak::FirstDiscriminator.outranks(earlier, evals[w]), "seed {seed}");
        }
    }
}

#[test_log::test]
fn classic_tie_goes_to_the_last_seat() {
    let mut t = table(2, 1, Rules::CLASSIC);
    play_out(&mut t);
    let evals: Vec<_> =
        t.players().iter().map(|p| &p.best_hand().expect("evaluated").evaluation).collect();
    assert!(!Tiebreak::FirstDiscriminator.outranks(evals[0], evals[1]));
    assert!(!Tiebreak::FirstDiscriminator.outranks(evals[1], evals[0]));
    assert_eq!(t.winners(), [1]);
}

#[test]
fn hands_recycle_the_deck() {
    let mut t = table(4, 3, Rules::STANDARD);
    for hand in 1..=5 {
        assert_eq!(t.hands_played(), hand);
        play_out(&mut t);
        t.new_hand().unwrap();
    }
    assert_eq!(t.deck_len(), 52 - 8);
}

#[test]
fn ace_mode_switch_rescores_showdown() {
    let mut t = table(3, 17, Rules::STANDARD);
    play_out(&mut t);
    t.set_aces(Aces::Low).unwrap();
    assert_eq!(t.config().aces, Aces::Low);
    assert!(t.players().iter().all(|p| {
        p.best_hand().is_some_and(|b| b.cards().iter().all(|c| c.value() != 14))
    }));
}

#[test]
fn invalid_configs_are_rejected() {
    let err = Table::new(TableConfig { seats: 0, ..TableConfig::default() }).unwrap_err();
    assert_eq!(err, TableError::SeatCount(0));
    let err = Table::new(TableConfig { hole_cards: 1, ..TableConfig::default() }).unwrap_err();
    assert_eq!(err, TableError::HoleCardCount(1));
}

#[test]
fn four_hole_cards_with_any_five_search() {
    let mut t = Table::new(TableConfig {
        seats: 3,
        hole_cards: 4,
        seed: Some(2),
        ..TableConfig::default()
    })
    .unwrap();
    play_out(&mut t);
    // C(9, 5)
    assert!(t.players().iter().all(|p| p.best_hand().map(|b| b.candidates) == Some(126)));
}

#[test]
fn switching_to_classic_with_four_hole_cards_fails() {
    let mut t = Table::new(TableConfig { hole_cards: 4, seed: Some(1), ..TableConfig::default() })
        .unwrap();
    assert_eq!(t.set_rules(Rules::CLASSIC), Err(TableError::HoleCardCount(4)));
    assert_eq!(t.config().rules, Rules::STANDARD);
}
