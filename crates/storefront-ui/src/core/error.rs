//! Error types for catalog fetches and local persistence.
//!
//! Neither error ever escapes a component boundary: fetch failures become a
//! degraded view and storage failures fall back to an empty wishlist.

use thiserror::Error;

/// Failure while talking to the remote catalog API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, CORS, offline).
    #[error("request to {url} failed: {detail}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        detail: String,
    },
    /// Server answered with a non-success status code.
    #[error("request to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Body was not valid JSON.
    #[error("response from {url} could not be decoded: {detail}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Parser error description.
        detail: String,
    },
}

/// Failure while reading or writing durable local storage.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Backend refused the read.
    #[error("storage read failed for {key}: {detail}")]
    Read {
        /// Storage key.
        key: String,
        /// Backend error description.
        detail: String,
    },
    /// Backend refused the write (quota, privacy mode).
    #[error("storage write failed for {key}: {detail}")]
    Write {
        /// Storage key.
        key: String,
        /// Backend error description.
        detail: String,
    },
    /// Stored value could not be parsed.
    #[error("stored value under {key} is malformed: {detail}")]
    Malformed {
        /// Storage key.
        key: String,
        /// Parser error description.
        detail: String,
    },
}
