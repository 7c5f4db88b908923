//! Core persistence layer for parcel tracking.
//! This crate is the single source of truth for the parcel record shape and
//! the registered-status guard.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::parcel::{Parcel, STATUS_DELIVERED, STATUS_REGISTERED, STATUS_SENT};
pub use repo::parcel_repo::{ParcelRepository, RepoError, RepoResult, SqliteParcelRepository};
pub use service::parcel_service::ParcelService;
