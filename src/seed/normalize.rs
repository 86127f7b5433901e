//! Seed canonicalization into deterministic generator state
//!
//! Numeric text is kept as an integer so batch seeds can be derived by
//! addition. Any other text is expanded with a SHA-512 digest appended to its
//! UTF-8 bytes and folded into the 256-bit key of the generator.

use rand::{SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha512};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size in bytes of the generator key
const KEY_LEN: usize = 32;

/// Root of all randomness in a pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    /// Seed given as (or synthesized as) a decimal integer
    Numeric(u64),
    /// Arbitrary user text
    Text(String),
}

impl Seed {
    /// Classify text as numeric or free-form
    ///
    /// Digit strings that fit in a `u64` become [`Seed::Numeric`]; everything
    /// else, including longer digit strings, stays text.
    pub fn from_text(text: &str) -> Self {
        let all_digits = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
        match text.parse::<u64>() {
            Ok(value) if all_digits => Self::Numeric(value),
            _ => Self::Text(text.to_string()),
        }
    }

    /// Seed derived from the current wall-clock time in nanoseconds
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        Self::Numeric((nanos % u128::from(u64::MAX)) as u64)
    }

    /// Whether the seed carries an integer value
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Text bytes followed by their SHA-512 digest
    ///
    /// Numeric seeds expand to their big-endian bytes.
    pub fn expanded_bytes(&self) -> Vec<u8> {
        match self {
            Self::Numeric(value) => value.to_be_bytes().to_vec(),
            Self::Text(text) => {
                let bytes = text.as_bytes();
                let digest = Sha512::digest(bytes);
                let mut expanded = Vec::with_capacity(bytes.len() + digest.len());
                expanded.extend_from_slice(bytes);
                expanded.extend_from_slice(&digest);
                expanded
            }
        }
    }

    /// Fresh generator whose whole state derives from this seed
    pub fn rng(&self) -> StdRng {
        match self {
            Self::Numeric(value) => StdRng::seed_from_u64(*value),
            Self::Text(_) => StdRng::from_seed(fold_key(&self.expanded_bytes())),
        }
    }

    /// Generator for the named derivation stream `tag`
    ///
    /// Keyed by the SHA-512 digest of `tag` followed by the expanded seed, so
    /// it shares no words with [`Seed::rng`] or with other tags.
    pub fn stream_rng(&self, tag: &str) -> StdRng {
        let mut hasher = Sha512::new();
        hasher.update(tag.as_bytes());
        hasher.update(self.expanded_bytes());
        StdRng::from_seed(fold_key(&hasher.finalize()))
    }
}

// XOR-folds arbitrary length input so every byte influences the key
fn fold_key(bytes: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    for (index, byte) in bytes.iter().enumerate() {
        if let Some(slot) = key.get_mut(index % KEY_LEN) {
            *slot ^= byte;
        }
    }
    key
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Canonicalize optional user input into a seed
///
/// Absent or empty input is the only non-deterministic case and falls back
/// to [`Seed::from_clock`].
pub fn normalize_seed(input: Option<&str>) -> Seed {
    match input {
        None | Some("") => Seed::from_clock(),
        Some(text) => Seed::from_text(text),
    }
}
