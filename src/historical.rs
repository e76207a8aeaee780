use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::players::PlayerAttrs;

pub const FEATURE_COUNT: usize = 4;
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["ranking_diff", "age_diff", "grass_pct_diff", "form_diff"];

/// One historical match with a "player 1 won" label. Used only to fit the
/// bracket classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalMatch {
    pub p1_ranking: u32,
    pub p2_ranking: u32,
    pub p1_age: u32,
    pub p2_age: u32,
    pub p1_grass_pct: f64,
    pub p2_grass_pct: f64,
    pub p1_form: u32,
    pub p2_form: u32,
    pub p1_won: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TrainSample {
    pub x: [f64; FEATURE_COUNT],
    pub p1_won: bool,
}

/// Difference features, player 1 minus player 2 throughout.
pub fn feature_row(p1: PlayerAttrs, p2: PlayerAttrs) -> [f64; FEATURE_COUNT] {
    [
        p1.ranking as f64 - p2.ranking as f64,
        p1.age as f64 - p2.age as f64,
        p1.grass_pct - p2.grass_pct,
        p1.recent_form as f64 - p2.recent_form as f64,
    ]
}

pub fn engineer_features(matches: &[HistoricalMatch]) -> Vec<TrainSample> {
    matches
        .iter()
        .map(|m| TrainSample {
            x: [
                m.p1_ranking as f64 - m.p2_ranking as f64,
                m.p1_age as f64 - m.p2_age as f64,
                m.p1_grass_pct - m.p2_grass_pct,
                m.p1_form as f64 - m.p2_form as f64,
            ],
            p1_won: m.p1_won,
        })
        .collect()
}

/// Deterministic shuffled split: same seed, same partition. The test slice is
/// at least one sample and never the whole set.
pub fn split_train_test(
    samples: &[TrainSample],
    test_fraction: f64,
    seed: u64,
) -> (Vec<TrainSample>, Vec<TrainSample>) {
    if samples.len() < 2 {
        return (samples.to_vec(), Vec::new());
    }

    let mut shuffled = samples.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let test_len = ((samples.len() as f64) * test_fraction).round() as usize;
    let test_len = test_len.clamp(1, samples.len() - 1);
    let test = shuffled.split_off(shuffled.len() - test_len);
    (shuffled, test)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoricalFile {
    matches: Vec<HistoricalMatch>,
}

/// Loads the historical match table. `SW19_HISTORY_PATH` overrides the
/// bundled copy.
pub fn load_historical() -> Result<Vec<HistoricalMatch>> {
    if let Some(path) = path_override("SW19_HISTORY_PATH") {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read historical matches {}", path.display()))?;
        let file: HistoricalFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse historical matches {}", path.display()))?;
        return Ok(file.matches);
    }

    let file: HistoricalFile =
        serde_json::from_str(include_str!("../assets/historical_matches.json"))
            .context("parse bundled historical matches")?;
    Ok(file.matches)
}

fn path_override(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rank_diff: f64, won: bool) -> TrainSample {
        TrainSample {
            x: [rank_diff, 0.0, 0.0, 0.0],
            p1_won: won,
        }
    }

    #[test]
    fn split_is_deterministic_and_sized() {
        let samples: Vec<TrainSample> =
            (0..10).map(|i| sample(i as f64, i % 2 == 0)).collect();

        let (train_a, test_a) = split_train_test(&samples, 0.2, 42);
        let (train_b, test_b) = split_train_test(&samples, 0.2, 42);

        assert_eq!(train_a.len(), 8);
        assert_eq!(test_a.len(), 2);
        for (a, b) in train_a.iter().zip(&train_b) {
            assert_eq!(a.x, b.x);
        }
        for (a, b) in test_a.iter().zip(&test_b) {
            assert_eq!(a.x, b.x);
        }
    }

    #[test]
    fn tiny_input_keeps_everything_in_train() {
        let samples = vec![sample(1.0, true)];
        let (train, test) = split_train_test(&samples, 0.2, 42);
        assert_eq!(train.len(), 1);
        assert!(test.is_empty());
    }
}
