//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for parcel tracking callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository guard contracts.
//! - The service layer remains storage-agnostic.

use crate::model::parcel::Parcel;
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};

/// Use-case service wrapper for parcel operations.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` and returns its assigned number.
    ///
    /// # Contract
    /// - Status starts as `registered`.
    /// - `created_at` is stamped from the current UTC time.
    pub fn register_parcel(&self, client: i64, address: impl Into<String>) -> RepoResult<i64> {
        let parcel = Parcel::register(client, address);
        self.repo.add(&parcel)
    }

    /// Gets one parcel by its assigned number.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn track(&self, number: i64) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    /// Lists every parcel owned by `client`.
    pub fn client_parcels(&self, client: i64) -> RepoResult<Vec<Parcel>> {
        self.repo.get_by_client(client)
    }

    /// Moves a parcel to a new status.
    pub fn advance_status(&self, number: i64, status: &str) -> RepoResult<()> {
        self.repo.set_status(number, status)
    }

    /// Changes the delivery address of a still-registered parcel.
    pub fn reroute(&self, number: i64, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)
    }

    /// Removes a still-registered parcel from tracking.
    pub fn cancel(&self, number: i64) -> RepoResult<()> {
        self.repo.delete(number)
    }
}
