use sw19_moneyball::players::{self, FALLBACK_ATTRS};
use sw19_moneyball::{historical, schedule};

#[test]
fn bundled_seed_table_parses() {
    let seeds = players::load_seeds().expect("bundled seed table should parse");
    assert_eq!(seeds.len(), 12);
    assert_eq!(seeds[0].player, "Jannik Sinner");
    assert_eq!(seeds[0].seed, 1);

    let djokovic = seeds
        .iter()
        .find(|s| s.player == "Novak Djokovic")
        .expect("Djokovic is in the seed table");
    assert!((djokovic.grass_pct() - 0.84).abs() < 1e-12);
    assert_eq!(djokovic.wimbledon_titles, 7);
}

#[test]
fn bundled_historical_table_parses() {
    let history = historical::load_historical().expect("bundled history should parse");
    assert_eq!(history.len(), 10);
    assert_eq!(history.iter().filter(|m| m.p1_won).count(), 6);
}

#[test]
fn bundled_first_round_pairings_parse() {
    let pairings = schedule::load_first_round().expect("bundled pairings should parse");
    assert_eq!(pairings.len(), 8);
    assert_eq!(pairings[0].player1, "Jannik Sinner");
}

#[test]
fn bundled_day_schedule_parses() {
    let day = schedule::load_day_schedule().expect("bundled schedule should parse");
    assert_eq!(day.date, "June 30, 2025");
    assert_eq!(day.men.len(), 5);
    assert_eq!(day.women.len(), 3);
    for m in day.men.iter().chain(&day.women) {
        assert!(!m.court.is_empty());
        assert!(m.p1_grass_pct >= 0.0 && m.p1_grass_pct <= 1.0);
    }
}

#[test]
fn missing_name_gets_the_documented_defaults() {
    let seeds = players::load_seeds().expect("bundled seed table should parse");
    let lookup = players::lookup_attrs(&seeds, "Luca Nardi");
    assert!(lookup.is_fallback());

    let attrs = lookup.attrs();
    assert_eq!(attrs, FALLBACK_ATTRS);
    assert_eq!(attrs.ranking, 50);
    assert_eq!(attrs.age, 26);
    assert!((attrs.grass_pct - 0.45).abs() < 1e-12);
    assert_eq!(attrs.recent_form, 5);
}
