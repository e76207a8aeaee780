//! Tournament-favorite leaderboard over the seeded-player table. Independent
//! of the fitted bracket classifier by design: a plain weighted combination of
//! raw attributes, normalized so the shares sum to 1.

use crate::players::SeedEntry;

const SEED_WEIGHT: f64 = 0.4;
const GRASS_WEIGHT: f64 = 0.3;
const FORM_WEIGHT: f64 = 0.2;
const TITLE_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct FavoriteRow {
    pub player: String,
    pub seed: u32,
    pub share: f64,
}

pub fn tournament_favorites(seeds: &[SeedEntry]) -> Vec<FavoriteRow> {
    let mut rows: Vec<FavoriteRow> = seeds
        .iter()
        .map(|entry| FavoriteRow {
            player: entry.player.clone(),
            seed: entry.seed,
            share: raw_score(entry),
        })
        .collect();

    let total: f64 = rows.iter().map(|row| row.share).sum();
    if total > 0.0 {
        for row in &mut rows {
            row.share /= total;
        }
    }

    // Normalization only rescales, so a single sort afterwards is enough.
    rows.sort_by(|a, b| {
        b.share
            .partial_cmp(&a.share)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.seed.cmp(&b.seed))
    });
    rows
}

fn raw_score(entry: &SeedEntry) -> f64 {
    (1.0 / entry.seed.max(1) as f64) * SEED_WEIGHT
        + entry.grass_pct() * GRASS_WEIGHT
        + (entry.recent_form as f64 / 10.0) * FORM_WEIGHT
        + entry.wimbledon_titles as f64 * TITLE_WEIGHT
}
