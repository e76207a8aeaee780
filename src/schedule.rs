use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::players::PlayerAttrs;

/// One fixed first-round bracket pairing. Player 1 is the seeded side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pairing {
    pub player1: String,
    pub player2: String,
}

/// One scheduled match on the day's order of play, attributes inline. The
/// schedule is maintained independently of the seed table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub court: String,
    pub time: String,
    pub player1: String,
    pub player2: String,
    #[serde(default)]
    pub p1_seed: Option<u32>,
    #[serde(default)]
    pub p2_seed: Option<u32>,
    pub p1_ranking: u32,
    pub p2_ranking: u32,
    pub p1_age: u32,
    pub p2_age: u32,
    pub p1_grass_pct: f64,
    pub p2_grass_pct: f64,
    pub p1_form: u32,
    pub p2_form: u32,
    pub billing: String,
}

impl ScheduledMatch {
    pub fn p1_attrs(&self) -> PlayerAttrs {
        PlayerAttrs {
            ranking: self.p1_ranking,
            age: self.p1_age,
            grass_pct: self.p1_grass_pct,
            recent_form: self.p1_form,
        }
    }

    pub fn p2_attrs(&self) -> PlayerAttrs {
        PlayerAttrs {
            ranking: self.p2_ranking,
            age: self.p2_age,
            grass_pct: self.p2_grass_pct,
            recent_form: self.p2_form,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: String,
    pub headline: String,
    pub men: Vec<ScheduledMatch>,
    pub women: Vec<ScheduledMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PairingFile {
    pairings: Vec<Pairing>,
}

/// Loads the first-round pairings. `SW19_FIRST_ROUND_PATH` overrides the
/// bundled copy.
pub fn load_first_round() -> Result<Vec<Pairing>> {
    if let Some(path) = path_override("SW19_FIRST_ROUND_PATH") {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read first-round pairings {}", path.display()))?;
        let file: PairingFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse first-round pairings {}", path.display()))?;
        return Ok(file.pairings);
    }

    let file: PairingFile = serde_json::from_str(include_str!("../assets/first_round.json"))
        .context("parse bundled first-round pairings")?;
    Ok(file.pairings)
}

/// Loads the day's order of play. `SW19_SCHEDULE_PATH` overrides the bundled
/// copy.
pub fn load_day_schedule() -> Result<DaySchedule> {
    if let Some(path) = path_override("SW19_SCHEDULE_PATH") {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read day schedule {}", path.display()))?;
        let schedule: DaySchedule = serde_json::from_str(&raw)
            .with_context(|| format!("parse day schedule {}", path.display()))?;
        return Ok(schedule);
    }

    serde_json::from_str(include_str!("../assets/todays_matches.json"))
        .context("parse bundled day schedule")
}

fn path_override(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
