pub mod favorites;
pub mod gbdt;
pub mod heuristic;
pub mod historical;
pub mod players;
pub mod report;
pub mod schedule;
