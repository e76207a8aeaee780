use sw19_moneyball::heuristic::predict_match;
use sw19_moneyball::players::PlayerAttrs;
use sw19_moneyball::report::{self, BracketPrediction};
use sw19_moneyball::schedule::ScheduledMatch;

fn scheduled(p1: &str, p2: &str, p1_attrs: PlayerAttrs, p2_attrs: PlayerAttrs) -> ScheduledMatch {
    ScheduledMatch {
        court: "Centre Court".to_string(),
        time: "13:30".to_string(),
        player1: p1.to_string(),
        player2: p2.to_string(),
        p1_seed: Some(6),
        p2_seed: None,
        p1_ranking: p1_attrs.ranking,
        p2_ranking: p2_attrs.ranking,
        p1_age: p1_attrs.age,
        p2_age: p2_attrs.age,
        p1_grass_pct: p1_attrs.grass_pct,
        p2_grass_pct: p2_attrs.grass_pct,
        p1_form: p1_attrs.recent_form,
        p2_form: p2_attrs.recent_form,
        billing: "Defending finalist opens on Centre".to_string(),
    }
}

fn lopsided() -> (PlayerAttrs, PlayerAttrs) {
    (
        PlayerAttrs {
            ranking: 6,
            age: 37,
            grass_pct: 0.84,
            recent_form: 6,
        },
        PlayerAttrs {
            ranking: 85,
            age: 27,
            grass_pct: 0.30,
            recent_form: 4,
        },
    )
}

#[test]
fn daily_block_names_the_winner_and_both_probabilities() {
    let (a, b) = lopsided();
    let m = scheduled("Novak Djokovic", "Alexandre Muller", a, b);
    let prediction = predict_match(&m.player1, &m.player2, a, b);

    let block = report::daily_match_block(1, &m, &prediction, true);
    assert!(block.contains("Match 1: Centre Court - 13:30"));
    assert!(block.contains("PREDICTED WINNER: Novak Djokovic (99.6% confidence)"));
    assert!(block.contains("Novak Djokovic 99.6% | Alexandre Muller 0.4%"));
    assert!(block.contains("Key Factors:"));
}

#[test]
fn factors_are_omitted_when_not_requested() {
    let (a, b) = lopsided();
    let m = scheduled("A", "B", a, b);
    let prediction = predict_match("A", "B", a, b);

    let block = report::daily_match_block(2, &m, &prediction, false);
    assert!(!block.contains("Key Factors:"));
}

#[test]
fn confidence_summary_tiers_predictions() {
    let (strong_a, strong_b) = lopsided();
    let medium_a = PlayerAttrs {
        ranking: 10,
        age: 25,
        grass_pct: 0.55,
        recent_form: 7,
    };
    let medium_b = PlayerAttrs {
        ranking: 40,
        age: 24,
        grass_pct: 0.45,
        recent_form: 6,
    };
    let even = PlayerAttrs {
        ranking: 20,
        age: 25,
        grass_pct: 0.50,
        recent_form: 6,
    };

    let rows = vec![
        (
            scheduled("Strong", "Weak", strong_a, strong_b),
            predict_match("Strong", "Weak", strong_a, strong_b),
        ),
        (
            scheduled("Solid", "Outsider", medium_a, medium_b),
            predict_match("Solid", "Outsider", medium_a, medium_b),
        ),
        (
            scheduled("CoinFlip1", "CoinFlip2", even, even),
            predict_match("CoinFlip1", "CoinFlip2", even, even),
        ),
    ];

    let summary = report::confidence_summary(&rows);
    assert!(summary.contains("High Confidence: Strong"));
    assert!(summary.contains("Medium Confidence: Solid"));
    assert!(summary.contains("Potential Upsets: CoinFlip1 vs CoinFlip2"));
}

#[test]
fn bracket_block_reports_percent_confidence() {
    let prediction = BracketPrediction {
        player1: "Jannik Sinner".to_string(),
        player2: "Luca Nardi".to_string(),
        winner: "Jannik Sinner".to_string(),
        p1_prob: 0.875,
        p2_prob: 0.125,
    };
    let block = report::bracket_match_block(&prediction);
    assert!(block.contains("Jannik Sinner vs Luca Nardi"));
    assert!(block.contains("Predicted Winner: Jannik Sinner (87.5% confidence)"));
}
