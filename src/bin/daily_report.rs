use anyhow::Result;
use chrono::Local;

use sw19_moneyball::{heuristic, report, schedule};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let day = schedule::load_day_schedule()?;
    println!(
        "{}",
        report::daily_header(Local::now(), &day.date, &day.headline)
    );

    let mut predicted = Vec::with_capacity(day.men.len() + day.women.len());

    println!("\n🏆 MEN'S SINGLES PREDICTIONS - TODAY 🏆\n");
    for (i, scheduled) in day.men.iter().enumerate() {
        let prediction = heuristic::predict_match(
            &scheduled.player1,
            &scheduled.player2,
            scheduled.p1_attrs(),
            scheduled.p2_attrs(),
        );
        println!(
            "{}",
            report::daily_match_block(i + 1, scheduled, &prediction, true)
        );
        predicted.push((scheduled.clone(), prediction));
    }

    println!("\n🏆 WOMEN'S SINGLES PREDICTIONS - TODAY 🏆\n");
    for (i, scheduled) in day.women.iter().enumerate() {
        let prediction = heuristic::predict_match(
            &scheduled.player1,
            &scheduled.player2,
            scheduled.p1_attrs(),
            scheduled.p2_attrs(),
        );
        println!(
            "{}",
            report::daily_match_block(i + 1, scheduled, &prediction, false)
        );
        predicted.push((scheduled.clone(), prediction));
    }

    println!("{}", report::confidence_summary(&predicted));
    println!("\n🏆 Enjoy Day 1 of Wimbledon 2025! 🏆");

    Ok(())
}
