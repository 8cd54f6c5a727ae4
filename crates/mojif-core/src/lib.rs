// this_file: crates/mojif-core/src/lib.rs

//! Mojif Core: the emoji data model and its derivation rules.
//!
//! This crate holds everything that does not depend on a concrete dataset:
//!
//! - [`codec`] - UTF-16 code-point decoding for raw buffers
//! - [`emoji`] - [`Emoji`], [`Details`], [`SkinTone`], and the static
//!   [`EmojiRecord`] input contract filled in by the offline data pipeline
//! - [`tone`] - the [`SkinToneGenerator`] arena that derives and memoizes
//!   the 5 single-tone and 25 double-tone variants of tone-capable emoji
//! - [`error`] - the error taxonomy
//!
//! The scanning trie, the shortcode catalog, and the bundled dataset live in
//! the `mojif` and `mojif-data` crates.

pub mod codec;
pub mod emoji;
pub mod error;
pub mod tone;

pub use emoji::{
    Details, Emoji, EmojiId, EmojiRecord, SkinTone, SkinToneSupport, ToneRecord, ToneTemplate,
    UnicodeVersion,
};
pub use error::{DuplicateRegistration, EmojiError, MalformedUtf16, Result};
pub use tone::SkinToneGenerator;
