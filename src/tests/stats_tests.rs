/// Tests for the cosmetic stats generator. Only bounds and draw order are
/// checked; the numbers carry no meaning.
use crate::stats::{generate, ColorStats, RandomSource, ThreadRandom, STAT_BOUND};
use crate::tests::{MaxRandom, ScriptedRandom};
use crate::types::Color;

#[test]
fn thread_random_stats_stay_in_bounds() {
    for _ in 0..1_000 {
        for stats in generate(&ThreadRandom) {
            assert!(stats.win_percent < STAT_BOUND);
            assert!(stats.coin_count < STAT_BOUND);
        }
    }
}

#[test]
fn thread_random_below_respects_bound() {
    for _ in 0..1_000 {
        assert!(ThreadRandom.below(3) < 3);
    }
}

#[test]
fn one_entry_per_color_in_board_order() {
    let colors: Vec<Color> = generate(&ThreadRandom).iter().map(|s| s.color).collect();
    assert_eq!(colors, Color::ALL.to_vec());
}

#[test]
fn scripted_source_fills_win_then_coins_per_card() {
    let source = ScriptedRandom::new(vec![1, 2, 3, 4, 5, 6]);
    let stats = generate(&source);
    assert_eq!(
        stats,
        [
            ColorStats { color: Color::Red, win_percent: 1, coin_count: 2 },
            ColorStats { color: Color::Blue, win_percent: 3, coin_count: 4 },
            ColorStats { color: Color::Green, win_percent: 5, coin_count: 6 },
        ]
    );
}

#[test]
fn largest_draw_is_ninety_nine() {
    for stats in generate(&MaxRandom) {
        assert_eq!(stats.win_percent, 99);
        assert_eq!(stats.coin_count, 99);
    }
}

#[test]
fn each_generation_draws_fresh_values() {
    let source = ScriptedRandom::new((0..12).collect());
    let first = generate(&source);
    let second = generate(&source);
    assert_eq!(first[0].win_percent, 0);
    assert_eq!(second[0].win_percent, 6);
}
