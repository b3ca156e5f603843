pub mod common;
pub mod leaderboard;
pub mod matches;
pub mod pool;
pub mod prediction;
pub mod team;
pub mod user;
