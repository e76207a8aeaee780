use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Attributes substituted when a match references a name absent from the seed
/// table: ranking 50, age 26, grass 0.45, form 5.
pub const FALLBACK_ATTRS: PlayerAttrs = PlayerAttrs {
    ranking: 50,
    age: 26,
    grass_pct: 0.45,
    recent_form: 5,
};

/// Fixed attributes the bracket trainer assumes for the unseeded side of a
/// first-round pairing.
pub const UNSEEDED_OPPONENT: PlayerAttrs = PlayerAttrs {
    ranking: 80,
    age: 28,
    grass_pct: 0.35,
    recent_form: 4,
};

// Neutral grass percentage used when a player has no recorded grass matches.
const NEUTRAL_GRASS_PCT: f64 = 0.45;

/// The four-feature tuple every scorer consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerAttrs {
    pub ranking: u32,
    pub age: u32,
    pub grass_pct: f64,
    pub recent_form: u32,
}

/// One row of the seeded-player table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEntry {
    pub player: String,
    pub seed: u32,
    pub ranking: u32,
    pub age: u32,
    pub grass_wins: u32,
    pub grass_losses: u32,
    pub wimbledon_titles: u32,
    pub recent_form: u32,
}

impl SeedEntry {
    /// Grass-court win percentage. Zero recorded grass matches falls back to
    /// the neutral percentage instead of dividing 0 by 0.
    pub fn grass_pct(&self) -> f64 {
        let played = self.grass_wins + self.grass_losses;
        if played == 0 {
            return NEUTRAL_GRASS_PCT;
        }
        self.grass_wins as f64 / played as f64
    }

    pub fn attrs(&self) -> PlayerAttrs {
        PlayerAttrs {
            ranking: self.ranking,
            age: self.age,
            grass_pct: self.grass_pct(),
            recent_form: self.recent_form,
        }
    }
}

/// Result of a name lookup over the seed table. Callers can tell real data
/// from substituted defaults instead of getting a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrLookup {
    Seeded(PlayerAttrs),
    Fallback(PlayerAttrs),
}

impl AttrLookup {
    pub fn attrs(&self) -> PlayerAttrs {
        match self {
            Self::Seeded(attrs) | Self::Fallback(attrs) => *attrs,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

pub fn lookup_attrs(seeds: &[SeedEntry], name: &str) -> AttrLookup {
    for entry in seeds {
        if entry.player == name {
            return AttrLookup::Seeded(entry.attrs());
        }
    }
    AttrLookup::Fallback(FALLBACK_ATTRS)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedFile {
    players: Vec<SeedEntry>,
}

/// Loads the seed table. `SW19_SEEDS_PATH` points at an external file;
/// otherwise the bundled table ships with the binary.
pub fn load_seeds() -> Result<Vec<SeedEntry>> {
    if let Some(path) = path_override("SW19_SEEDS_PATH") {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read seed table {}", path.display()))?;
        let file: SeedFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse seed table {}", path.display()))?;
        return Ok(file.players);
    }

    let file: SeedFile = serde_json::from_str(include_str!("../assets/mens_seeds.json"))
        .context("parse bundled seed table")?;
    Ok(file.players)
}

fn path_override(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
