use persona_core::models::item::Dimension;
use persona_core::models::trial::{GameResult, TrialResult};
use persona_instruments::speed::{game_score, speed_adjusted_score, speed_bonus, summarize_trials};

#[test]
fn bonus_saturates_at_both_ends() {
    assert_eq!(speed_bonus(0.0), 20.0);
    assert_eq!(speed_bonus(10.0), 15.0);
    assert_eq!(speed_bonus(40.0), 0.0);
    assert_eq!(speed_bonus(120.0), 0.0);
    assert_eq!(speed_bonus(-6.0), 20.0);
    assert_eq!(speed_bonus(f64::NAN), 0.0);
    assert_eq!(speed_bonus(f64::INFINITY), 0.0);
}

#[test]
fn final_score_never_exceeds_one_hundred() {
    assert_eq!(speed_adjusted_score(95.0, 1.0), 100);
    assert_eq!(speed_adjusted_score(100.0, 0.0), 100);
    assert_eq!(speed_adjusted_score(70.0, 10.0), 85);
    assert_eq!(speed_adjusted_score(70.0, 90.0), 70);
    assert_eq!(speed_adjusted_score(0.0, 60.0), 0);
    assert_eq!(speed_adjusted_score(-10.0, 60.0), 0);
}

#[test]
fn unplayed_game_earns_no_speed_bonus() {
    let game = GameResult {
        dimension: "memory".into(),
        correct: 0,
        total: 0,
        avg_response_seconds: 0.0,
    };
    assert_eq!(game_score(&game), 0);
}

#[test]
fn trials_summarize_per_dimension() {
    let dims = vec![
        Dimension { code: "memory".into(), name: "Memory".into(), description: None },
        Dimension { code: "logic".into(), name: "Logic".into(), description: None },
    ];
    let trials = vec![
        TrialResult { dimension: "memory".into(), correct: true, response_time_ms: 2000 },
        TrialResult { dimension: "memory".into(), correct: false, response_time_ms: 4000 },
        TrialResult { dimension: "unknown".into(), correct: true, response_time_ms: 100 },
    ];

    let games = summarize_trials(&trials, &dims);
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].dimension, "memory");
    assert_eq!(games[0].correct, 1);
    assert_eq!(games[0].total, 2);
    assert!((games[0].avg_response_seconds - 3.0).abs() < 1e-9);
    assert!((games[0].accuracy() - 50.0).abs() < 1e-9);
    assert_eq!(game_score(&games[0]), 69);
    assert_eq!(games[1].total, 0);
}
