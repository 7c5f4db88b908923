//! Domain model for parcel tracking.
//!
//! # Responsibility
//! - Define the canonical parcel record persisted by the repository layer.
//!
//! # Invariants
//! - Every persisted parcel is identified by a store-assigned `number`.
//! - Deletion is a hard delete, gated by the registered-status guard.

pub mod parcel;
