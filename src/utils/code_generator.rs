//! Short code generation and custom code validation.
//!
//! Generated codes are six characters drawn uniformly from an alphabet of 55
//! visually unambiguous characters (no `0/O`, `1/I/l`, `o/i`).

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::error::AppError;

/// Characters a generated code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Maximum length of a caller-chosen code (column width).
pub const CUSTOM_CODE_MAX_LENGTH: usize = 10;

/// Top-level paths a root-level code (`/{code}`) would shadow.
const RESERVED_CODES: &[&str] = &["shorten", "linklist", "clipboard", "health"];

/// Draws one code from `rng`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Process-wide code source with an injectable entropy source.
///
/// The RNG lock is held only for the synchronous draw of a single code.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Seeds the generator from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the system entropy source is unavailable.
    pub fn from_entropy() -> Result<Self, AppError> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).map_err(|e| {
            AppError::internal(
                "Failed to seed code generator",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(Self::from_rng(StdRng::from_seed(seed)))
    }

    /// Deterministic generator, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_code(&mut *rng)
    }
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_generated_shape(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

/// Validates a caller-chosen code.
///
/// # Rules
///
/// - Length: 1-10 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > CUSTOM_CODE_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-10 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

/// Validates a caller-chosen code served at the root path.
///
/// Applies [`validate_custom_code`] and additionally rejects the words of
/// the fixed top-level routes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_root_code(code: &str) -> Result<(), AppError> {
    validate_custom_code(code)?;

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_55_unambiguous_characters() {
        assert_eq!(ALPHABET.len(), 55);
        for confusable in [b'0', b'O', b'I', b'1', b'l', b'o', b'i'] {
            assert!(!ALPHABET.contains(&confusable));
        }
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_code_has_correct_length_and_alphabet() {
        let generator = CodeGenerator::seeded(7);
        for _ in 0..500 {
            let code = generator.generate();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(is_generated_shape(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let a = CodeGenerator::seeded(42);
        let b = CodeGenerator::seeded(42);
        let first: Vec<String> = (0..10).map(|_| a.generate()).collect();
        let second: Vec<String> = (0..10).map(|_| b.generate()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_entropy_codes_mostly_unique() {
        let generator = CodeGenerator::from_entropy().unwrap();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        // 1000 draws from ~27 billion codes: a collision is practically impossible.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_every_alphabet_character_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(generate_code(&mut rng).into_bytes());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_validate_custom_code_accepts_simple_codes() {
        assert!(validate_custom_code("promo").is_ok());
        assert!(validate_custom_code("My_Link-24").is_ok());
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_custom_code_length() {
        assert!(validate_custom_code("").is_err());
        let err = validate_custom_code("abcdefghijk").unwrap_err();
        assert!(err.to_string().contains("1-10 characters"));
    }

    #[test]
    fn test_validate_custom_code_characters() {
        let err = validate_custom_code("my code").unwrap_err();
        assert!(err.to_string().contains("letters, digits"));
        assert!(validate_custom_code("a/b").is_err());
        assert!(validate_custom_code("é").is_err());
    }

    #[test]
    fn test_reserved_words_are_only_rejected_at_root() {
        for &reserved in RESERVED_CODES {
            assert!(validate_custom_code(reserved).is_ok());
        }
        assert!(validate_root_code("promo").is_ok());
        assert!(validate_root_code("bad code").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_root_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
