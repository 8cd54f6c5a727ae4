// this_file: crates/mojif-core/src/error.rs

//! Error types for Mojif

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmojiError>;

/// Main error type for Mojif
#[derive(Debug, Clone, Error)]
pub enum EmojiError {
    #[error("Malformed UTF-16 input: {0}")]
    MalformedUtf16(#[from] MalformedUtf16),

    #[error("Registry integrity fault: {0}")]
    DuplicateRegistration(#[from] DuplicateRegistration),
}

/// UTF-16 decode errors
///
/// A well-formed buffer never contains an unpaired surrogate. Any of these
/// conditions indicates corrupt input, not a domain condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedUtf16 {
    #[error("offset {offset} is out of bounds for a buffer of {len} code units")]
    OutOfBounds { offset: usize, len: usize },

    #[error("lone low surrogate {unit:#06x} at offset {offset}")]
    LoneLowSurrogate { offset: usize, unit: u16 },

    #[error("high surrogate {unit:#06x} at offset {offset} is not followed by a low surrogate")]
    UnpairedHighSurrogate { offset: usize, unit: u16 },
}

/// Two distinct emoji mapped to the identical code-point sequence while the
/// finder trie was being built. The registry data is corrupt; a trie that
/// silently dropped one of them would lose matches, so this aborts the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "code point sequence [{}] is already bound to {existing:?}, rejected {rejected:?}",
    codes_hex(.sequence)
)]
pub struct DuplicateRegistration {
    /// The conflicting code-point path.
    pub sequence: Vec<u32>,
    /// Description of the emoji already registered at the path.
    pub existing: String,
    /// Description of the emoji whose registration was rejected.
    pub rejected: String,
}

fn codes_hex(codes: &[u32]) -> String {
    codes
        .iter()
        .map(|c| format!("{c:#x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
