pub mod auth;
pub mod common;
pub mod fixture;
pub mod prediction;
pub mod ranking;
pub mod user;
