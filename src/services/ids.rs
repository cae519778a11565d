//! Random lineup id generation.

use crate::constants::{ID_CHARSET, ID_LENGTH, MAX_ID_ATTEMPTS};
use crate::error::{Error, Result};
use rand::Rng;
use std::collections::HashSet;

/// Generates a 6-character uppercase alphanumeric id not in `existing`.
pub fn generate_unique_id(existing: &HashSet<String>) -> Result<String> {
    generate_unique_id_with(&mut rand::rng(), existing)
}

/// Like [`generate_unique_id`], drawing from the given rng.
pub fn generate_unique_id_with<R: Rng>(
    rng: &mut R,
    existing: &HashSet<String>,
) -> Result<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id: String = (0..ID_LENGTH)
            .map(|_| char::from(ID_CHARSET[rng.random_range(0..ID_CHARSET.len())]))
            .collect();
        if !existing.contains(&id) {
            return Ok(id);
        }
    }
    Err(Error::IdSpaceExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
