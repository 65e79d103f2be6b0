//! Content fingerprints for computed records
use serde::Serialize;

/// Hash the canonical JSON encoding of `value`.
///
/// Two records with bit-identical fields always produce the same
/// fingerprint, so callers can cheaply detect whether a recompute changed
/// anything.
pub fn fingerprint<T: Serialize>(value: &T) -> String {
    let bytes = serde_json::to_vec(value).unwrap_or_default();
    format!("blake3:{}", blake3::hash(&bytes))
}
