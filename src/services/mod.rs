//! Business logic services

pub mod ingest_service;
pub mod rank_service;

pub use ingest_service::IngestService;
pub use rank_service::RankService;
