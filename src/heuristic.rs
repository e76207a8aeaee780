//! Closed-form daily match scorer. No training involved: a weighted score over
//! the four attribute differences, squashed through a logistic transform.

use crate::players::PlayerAttrs;

const RANKING_WEIGHT: f64 = 0.004;
const GRASS_WEIGHT: f64 = 0.6;
const FORM_WEIGHT: f64 = 0.08;
// Slightly favors the younger player.
const AGE_WEIGHT: f64 = -0.01;
const SCORE_SCALE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    Player1,
    Player2,
}

impl Advantage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Player1 => "Player 1",
            Self::Player2 => "Player 2",
        }
    }
}

/// Which side leads on each of the qualitative factors shown in the daily
/// report.
#[derive(Debug, Clone, Copy)]
pub struct AdvantageFactors {
    pub ranking: Advantage,
    pub grass: Advantage,
    pub form: Advantage,
}

#[derive(Debug, Clone)]
pub struct MatchPrediction {
    pub winner: String,
    pub confidence: f64,
    pub p1_prob: f64,
    pub p2_prob: f64,
    pub factors: AdvantageFactors,
}

/// Raw weighted score; positive means player 1 is favored.
pub fn prediction_score(p1: PlayerAttrs, p2: PlayerAttrs) -> f64 {
    let ranking_diff = p2.ranking as f64 - p1.ranking as f64;
    let age_diff = p1.age as f64 - p2.age as f64;
    let grass_diff = p1.grass_pct - p2.grass_pct;
    let form_diff = p1.recent_form as f64 - p2.recent_form as f64;

    ranking_diff * RANKING_WEIGHT
        + grass_diff * GRASS_WEIGHT
        + form_diff * FORM_WEIGHT
        + age_diff * AGE_WEIGHT
}

pub fn predict_match(
    p1_name: &str,
    p2_name: &str,
    p1: PlayerAttrs,
    p2: PlayerAttrs,
) -> MatchPrediction {
    let score = prediction_score(p1, p2);
    let p1_prob = 1.0 / (1.0 + (-score * SCORE_SCALE).exp());
    let p2_prob = 1.0 - p1_prob;

    // The comparison is strict on purpose: an exact 0.5 goes to player 2.
    let winner = if p1_prob > 0.5 { p1_name } else { p2_name };

    MatchPrediction {
        winner: winner.to_string(),
        confidence: p1_prob.max(p2_prob),
        p1_prob,
        p2_prob,
        factors: AdvantageFactors {
            ranking: advantage(p2.ranking as f64 - p1.ranking as f64),
            grass: advantage(p1.grass_pct - p2.grass_pct),
            form: advantage(p1.recent_form as f64 - p2.recent_form as f64),
        },
    }
}

fn advantage(diff: f64) -> Advantage {
    if diff > 0.0 {
        Advantage::Player1
    } else {
        Advantage::Player2
    }
}
