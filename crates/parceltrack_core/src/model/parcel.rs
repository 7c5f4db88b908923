//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical shipment record shared by repository and service.
//! - Provide the registration constructor that stamps creation time.
//!
//! # Invariants
//! - `number` is assigned by the store and never reused for another parcel.
//! - `address` may change, and the record may be deleted, only while
//!   `status` equals [`STATUS_REGISTERED`].
//! - `created_at` is set once at registration and never updated.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Initial status of every new parcel. The only state in which address
/// changes and deletion are permitted.
pub const STATUS_REGISTERED: &str = "registered";
/// Parcel handed over to the carrier.
pub const STATUS_SENT: &str = "sent";
/// Parcel arrived at its destination address.
pub const STATUS_DELIVERED: &str = "delivered";

/// Canonical shipment record.
///
/// `status` is stored as free text rather than a closed enum: the store
/// accepts any string in status updates, and the well-known values above are
/// conventions, not a validated set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned identifier. Stays `0` until the record is persisted.
    pub number: i64,
    /// Owning client id. Immutable once set by the caller.
    pub client: i64,
    /// Current lifecycle status text.
    pub status: String,
    /// Delivery address. Frozen once the parcel leaves the registered state.
    pub address: String,
    /// RFC 3339 creation timestamp text. Immutable.
    pub created_at: String,
}

impl Parcel {
    /// Creates a fresh registered parcel for `client`, stamped with the
    /// current UTC time.
    ///
    /// The returned record is not yet persisted; `number` is `0` until the
    /// repository assigns one.
    pub fn register(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: STATUS_REGISTERED.to_string(),
            address: address.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Returns whether the parcel is still in its initial registered state.
    pub fn is_registered(&self) -> bool {
        self.status == STATUS_REGISTERED
    }
}
