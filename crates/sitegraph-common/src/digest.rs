//! Content digests for emitted nodes
//!
//! The digest is computed over the payload's JSON serialization. Payload maps
//! preserve insertion order, so an unchanged record always serializes to the
//! same bytes and keeps the same digest across runs.

use crate::error::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 digest of a value's JSON serialization
pub fn content_digest<T: Serialize>(value: &T) -> Result<String> {
    let bytes = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
