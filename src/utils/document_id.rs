//! Opaque document identifier generation.
//!
//! Identifiers are 20 alphanumeric characters drawn from a thread-local CSPRNG,
//! the same shape managed document databases hand out for auto-generated ids.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated identifier.
pub const DOCUMENT_ID_LENGTH: usize = 20;

/// Generates a random document identifier.
///
/// # Examples
///
/// ```ignore
/// let id = generate_document_id();
/// assert_eq!(id.len(), 20);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_document_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_document_id_has_correct_length() {
        assert_eq!(generate_document_id().len(), DOCUMENT_ID_LENGTH);
    }

    #[test]
    fn test_generate_document_id_alphanumeric() {
        let id = generate_document_id();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_document_id_produces_unique_ids() {
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(generate_document_id());
        }

        assert_eq!(ids.len(), 1000);
    }
}
