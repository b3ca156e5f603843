pub mod codes;
pub mod leaderboard;
pub mod schedule;
pub mod scoring;
pub mod standings;
