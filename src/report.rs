//! Line-oriented report rendering for both binaries. Everything here is
//! presentational; blocks come back as strings so tests can assert on them.

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::favorites::FavoriteRow;
use crate::heuristic::MatchPrediction;
use crate::historical::{FEATURE_COUNT, FEATURE_NAMES};
use crate::schedule::ScheduledMatch;

const RULE: &str = "--------------------------------------------------";
const BANNER: &str =
    "============================================================";

const HIGH_CONFIDENCE: f64 = 0.90;
const MEDIUM_CONFIDENCE: f64 = 0.70;

/// One bracket prediction row from the fitted classifier.
#[derive(Debug, Clone)]
pub struct BracketPrediction {
    pub player1: String,
    pub player2: String,
    pub winner: String,
    pub p1_prob: f64,
    pub p2_prob: f64,
}

pub fn bracket_header() -> String {
    "\n🏆 Wimbledon 2025 First Round Predictions 🏆\n".to_string()
}

pub fn bracket_match_block(prediction: &BracketPrediction) -> String {
    format!(
        "{} vs {}\nPredicted Winner: {} ({:.1}% confidence)\n{RULE}",
        prediction.player1,
        prediction.player2,
        prediction.winner,
        prediction.p1_prob * 100.0,
    )
}

pub fn favorites_table(rows: &[FavoriteRow], top: usize) -> String {
    let mut out = String::new();
    out.push_str("\n🏆 Wimbledon 2025 Tournament Winner Predictions 🏆\n\n");
    out.push_str("Player               | Seed | Win Probability\n");
    for row in rows.iter().take(top) {
        let _ = writeln!(
            out,
            "{:20} | {:4} | {:14.1}%",
            row.player,
            row.seed,
            row.share * 100.0
        );
    }
    out
}

pub fn feature_importance_table(importances: &[f64; FEATURE_COUNT]) -> String {
    let mut rows: Vec<(&str, f64)> = FEATURE_NAMES
        .iter()
        .copied()
        .zip(importances.iter().copied())
        .collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = String::new();
    out.push_str("\n📊 Model Feature Importance:\n");
    for (name, value) in rows {
        let _ = writeln!(out, "{name:18} {value:.4}");
    }
    out
}

pub fn daily_header(now: DateTime<Local>, date: &str, headline: &str) -> String {
    format!(
        "🎾 WIMBLEDON 2025 - TODAY'S PREDICTIONS ({date}) 🎾\n{BANNER}\n⏰ Generated at: {} London Time\n🏆 {headline}\n{BANNER}",
        now.format("%H:%M"),
    )
}

pub fn daily_match_block(
    index: usize,
    scheduled: &ScheduledMatch,
    prediction: &MatchPrediction,
    show_factors: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Match {index}: {} - {}", scheduled.court, scheduled.time);
    let _ = writeln!(out, "🎾 {} vs {}", scheduled.player1, scheduled.player2);
    let _ = writeln!(out, "📝 {}", scheduled.billing);
    let _ = writeln!(
        out,
        "🏆 PREDICTED WINNER: {} ({:.1}% confidence)",
        prediction.winner,
        prediction.confidence * 100.0
    );
    let _ = writeln!(
        out,
        "📊 Probability: {} {:.1}% | {} {:.1}%",
        scheduled.player1,
        prediction.p1_prob * 100.0,
        scheduled.player2,
        prediction.p2_prob * 100.0
    );
    if show_factors {
        let factors = prediction.factors;
        let _ = writeln!(out, "🔍 Key Factors:");
        let _ = writeln!(out, "   • Ranking: {}", factors.ranking.label());
        let _ = writeln!(out, "   • Grass Court: {}", factors.grass.label());
        let _ = writeln!(out, "   • Recent Form: {}", factors.form.label());
    }
    out.push_str(RULE);
    out
}

/// Confidence tiers derived from the computed predictions rather than
/// hand-written prose.
pub fn confidence_summary(predicted: &[(ScheduledMatch, MatchPrediction)]) -> String {
    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut upsets = Vec::new();

    for (scheduled, prediction) in predicted {
        if prediction.confidence >= HIGH_CONFIDENCE {
            high.push(prediction.winner.clone());
        } else if prediction.confidence >= MEDIUM_CONFIDENCE {
            medium.push(prediction.winner.clone());
        } else {
            upsets.push(format!("{} vs {}", scheduled.player1, scheduled.player2));
        }
    }

    let mut out = String::new();
    out.push_str("\n🔮 PREDICTION CONFIDENCE:\n");
    if !high.is_empty() {
        let _ = writeln!(out, "   • High Confidence: {}", high.join(", "));
    }
    if !medium.is_empty() {
        let _ = writeln!(out, "   • Medium Confidence: {}", medium.join(", "));
    }
    if !upsets.is_empty() {
        let _ = writeln!(out, "   • Potential Upsets: {}", upsets.join(", "));
    }
    out
}
