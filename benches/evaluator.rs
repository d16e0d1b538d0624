use holdem_core::cards::deck::Deck;
use holdem_core::cards::evaluator::Evaluator;
use holdem_core::cards::hand::Hand;
use holdem_core::cards::strength::Strength;
use holdem_core::pot;
use std::collections::{HashMap, HashSet};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(3));
    targets =
        evaluating_seven_card_hand,
        shuffling_a_fresh_deck,
        computing_three_way_side_pots,
}

fn seven_cards() -> Hand {
    let mut deck = Deck::new();
    deck.draw(7).into_iter().collect()
}

fn evaluating_seven_card_hand(c: &mut criterion::Criterion) {
    let hand = seven_cards();
    c.bench_function("score the best 5-of-7 hand", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn shuffling_a_fresh_deck(c: &mut criterion::Criterion) {
    c.bench_function("shuffle and draw a 52-card deck", |b| {
        b.iter(|| Deck::new().draw(9))
    });
}

fn computing_three_way_side_pots(c: &mut criterion::Criterion) {
    let contributions: HashMap<String, holdem_core::Chips> = [
        ("a".to_string(), holdem_core::Chips(100)),
        ("b".to_string(), holdem_core::Chips(500)),
        ("c".to_string(), holdem_core::Chips(1000)),
    ]
    .into_iter()
    .collect();
    let folded: HashSet<String> = HashSet::new();
    c.bench_function("layer a three-way all-in into side pots", |b| {
        b.iter(|| pot::compute_side_pots(&contributions, &folded))
    });
}
