pub mod config;
pub mod goal;
pub mod remind;
pub mod streak;
