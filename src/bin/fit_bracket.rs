use anyhow::Result;

use sw19_moneyball::gbdt::{self, GbdtModel, GbdtParams};
use sw19_moneyball::report::BracketPrediction;
use sw19_moneyball::{favorites, historical, players, report, schedule};

const TEST_FRACTION: f64 = 0.2;
const SPLIT_SEED: u64 = 42;
const TOP_FAVORITES: usize = 8;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let seeds = players::load_seeds()?;
    let history = historical::load_historical()?;
    let pairings = schedule::load_first_round()?;

    let samples = historical::engineer_features(&history);
    let (train, test) = historical::split_train_test(&samples, TEST_FRACTION, SPLIT_SEED);
    let model = GbdtModel::fit(&train, GbdtParams::default());
    println!("🎾 Model Accuracy: {:.2}", gbdt::accuracy(&model, &test));

    println!("{}", report::bracket_header());
    for pairing in &pairings {
        let lookup = players::lookup_attrs(&seeds, &pairing.player1);
        if lookup.is_fallback() {
            eprintln!(
                "[WARN] {} missing from the seed table; using fallback attributes",
                pairing.player1
            );
        }

        let x = historical::feature_row(lookup.attrs(), players::UNSEEDED_OPPONENT);
        let p1_prob = model.predict_proba(x);
        let prediction = BracketPrediction {
            player1: pairing.player1.clone(),
            player2: pairing.player2.clone(),
            winner: if p1_prob > 0.5 {
                pairing.player1.clone()
            } else {
                pairing.player2.clone()
            },
            p1_prob,
            p2_prob: 1.0 - p1_prob,
        };
        println!("{}", report::bracket_match_block(&prediction));
    }

    let leaderboard = favorites::tournament_favorites(&seeds);
    println!("{}", report::favorites_table(&leaderboard, TOP_FAVORITES));

    println!(
        "{}",
        report::feature_importance_table(&model.feature_importances())
    );

    println!("\n🎾 Model trained on {} historical matches", history.len());
    println!("⚡ Ready for Wimbledon 2025 predictions!");

    Ok(())
}
