pub mod ranking;
pub mod schedule;
