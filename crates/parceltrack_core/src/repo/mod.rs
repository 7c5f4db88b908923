//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for parcel records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `NotRegistered`)
//!   in addition to DB transport errors.
//! - No retries and no local recovery; every failure bubbles to the caller.

pub mod parcel_repo;
