use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_eval::cards::{parse_cards, Aces};
use holdem_eval::evaluator::combinations::Combination;
use holdem_eval::evaluator::{classify, evaluate_best_hand_with, Rules};

fn combo(s: &str) -> Combination {
    Combination::try_from(parse_cards(s).expect("valid cards")).expect("five cards")
}

fn bench_classify(c: &mut Criterion) {
    let hi = combo("Ah Kd 7s 5c 2d");
    let sf = combo("As Ks Qs Js Ts");

    let mut g = c.benchmark_group("classify");
    for (name, input) in [("high_card", &hi), ("straight_flush", &sf)] {
        g.bench_with_input(BenchmarkId::new(name, "standard"), input, |b, input| {
            b.iter(|| classify(black_box(input.clone()), &Rules::STANDARD))
        });
    }
    g.finish();
}

fn bench_best_hand(c: &mut Criterion) {
    let hole = parse_cards("As Ah").expect("valid cards");
    let board = parse_cards("Ks Qs Js Ts 9s").expect("valid cards");

    let mut g = c.benchmark_group("evaluate_best_hand");
    for (name, rules) in [("classic", Rules::CLASSIC), ("standard", Rules::STANDARD)] {
        g.bench_function(name, |b| {
            b.iter(|| {
                evaluate_best_hand_with(black_box(&hole), black_box(&board), Aces::High, &rules)
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_classify, bench_best_hand);
criterion_main!(benches);
