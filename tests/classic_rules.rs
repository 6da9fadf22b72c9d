use holdem_eval::cards::{parse_cards, parse_cards_with, Aces, Card};
use holdem_eval::evaluator::combinations::{candidates, Combination};
use holdem_eval::evaluator::{
    classify, evaluate_best_hand_with, Category, Evaluation, Rules, Search, Tiebreak,
};

fn classic(s: &str) -> Evaluation {
    classify(Combination::try_from(parse_cards(s).unwrap()).unwrap(), &Rules::CLASSIC)
}

fn standard(s: &str) -> Evaluation {
    classify(Combination::try_from(parse_cards(s).unwrap()).unwrap(), &Rules::STANDARD)
}

#[test]
fn suited_low_straight_is_a_flushed_straight() {
    let e = classic("2s 3s 4s 5s 6s");
    assert_eq!(e.category().ordinal(), 8);
    assert!(e.flush);
    assert!(!e.is_top_straight());
}

#[test]
fn suited_top_straight() {
    let e = classic("Th Jh Qh Kh Ah");
    assert_eq!(e.category().ordinal(), 8);
    assert!(e.is_top_straight());
}

#[test]
fn four_twos() {
    let e = classic("2s 2h 2d 2c 9s");
    assert_eq!(e.category().ordinal(), 7);
    assert_eq!(e.primary_rank(), Some(2));
}

#[test]
fn threes_full_of_nines() {
    let e = classic("3s 3h 3d 9c 9s");
    assert_eq!(e.category().ordinal(), 6);
    assert_eq!(e.primary_rank(), Some(3));
    assert_eq!(e.secondary_rank(), Some(9));
}

#[test]
fn spade_flush() {
    assert_eq!(classic("2s 5s 9s Js Ks").category().ordinal(), 5);
}

#[test]
fn classic_flushes_never_split() {
    let ace_flush = classic("Ah 9h 7h 3h 2h");
    let king_flush = classic("Ks 9s 7s 3s 2s");
    assert_eq!(ace_flush.high_card(), None);
    assert!(!Tiebreak::FirstDiscriminator.outranks(&ace_flush, &king_flush));
    assert!(!Tiebreak::FirstDiscriminator.outranks(&king_flush, &ace_flush));
    assert!(Tiebreak::Kickers.outranks(&ace_flush, &king_flush));
}

#[test]
fn trip_fours() {
    let e = classic("4s 4h 4d 7c 9s");
    assert_eq!(e.category().ordinal(), 4);
    assert_eq!(e.primary_rank(), Some(4));
}

#[test]
fn wheel_beats_four_of_a_kind() {
    let wheel = classic("Ac 2d 3h 4s 5c");
    let quads = classic("Ks Kh Kd Kc Qs");
    assert_eq!(wheel.category(), Category::Straight);
    for rule in [Tiebreak::FirstDiscriminator, Tiebreak::Kickers] {
        assert!(rule.outranks(&wheel, &quads));
        assert!(!rule.outranks(&quads, &wheel));
    }
}

#[test]
fn standard_promotes_suited_straights() {
    assert_eq!(standard("2s 3s 4s 5s 6s").category().ordinal(), 9);
    assert_eq!(standard("Th Jh Qh Kh Ah").category().ordinal(), 9);
}

#[test]
fn classic_search_uses_every_hole_card() {
    let hole = parse_cards("2s 3d").unwrap();
    let board = parse_cards("Ah Ac Ad Kc Ks").unwrap();
    let best = evaluate_best_hand_with(&hole, &board, Aces::High, &Rules::CLASSIC).unwrap();
    assert_eq!(best.candidates, 10);
    // the board's full house is out of reach when both hole cards must play
    assert_eq!(best.category(), Category::ThreeOfAKind);
    let values: Vec<u8> = best.cards().iter().map(|c| c.value()).collect();
    assert!(values.contains(&2) && values.contains(&3));

    let standard = evaluate_best_hand_with(&hole, &board, Aces::High, &Rules::STANDARD).unwrap();
    assert_eq!(standard.candidates, 21);
    assert_eq!(standard.category(), Category::FullHouse);
}

#[test]
fn candidate_counts_by_street() {
    let hole = parse_cards("As Kd").unwrap();
    let flop = parse_cards("2c 3h 9s").unwrap();
    let turn = parse_cards("2c 3h 9s Td").unwrap();
    let river = parse_cards("2c 3h 9s Td 5h").unwrap();
    let count = |board: &[Card], search: Search| candidates(&hole, board, Aces::High, search).unwrap().len();
    assert_eq!(count(&flop, Search::BothHoleCards), 1);
    assert_eq!(count(&flop, Search::AnyFive), 1);
    assert_eq!(count(&turn, Search::BothHoleCards), 4);
    assert_eq!(count(&river, Search::BothHoleCards), 10);
    assert_eq!(count(&turn, Search::AnyFive), 6);
    assert_eq!(count(&river, Search::AnyFive), 21);
}

#[test]
fn first_discriminator_ties_read_as_losses() {
    let a = classic("Ah Kd 7s 5c 2d");
    let b = classic("Ac Kh 7d 5s 2h");
    assert!(!Tiebreak::FirstDiscriminator.outranks(&a, &b));
    assert!(!Tiebreak::FirstDiscriminator.outranks(&b, &a));
}

#[test]
fn first_discriminator_ignores_absent_fields() {
    // trips carry no high card, so kickers never matter
    let a = classic("4s 4h 4d Ac Ks");
    let b = classic("4c 4h 4d 3c 2s");
    assert!(!Tiebreak::FirstDiscriminator.outranks(&a, &b));
    assert!(Tiebreak::Kickers.outranks(&a, &b));
}

#[test]
fn joker_closes_an_ace_low_run() {
    let mut cards = parse_cards_with("Ac 2d 3h 4s", Aces::Low).unwrap();
    cards.push(Card::joker());
    let e = classify(Combination::try_from(cards).unwrap(), &Rules::CLASSIC);
    assert_eq!(e.category().ordinal(), 8);
    assert!(!e.flush);
}
