//! Ranking module - leaderboard projection over the points ledger.

mod ranking_service;


pub use ranking_service::{RankingService, RankingServiceTrait};
