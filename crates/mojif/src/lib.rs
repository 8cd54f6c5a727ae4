// this_file: crates/mojif/src/lib.rs

//! Mojif - emoji catalog, skin-tone variants, and text scanning.
//!
//! The pipeline, leaves first:
//!
//! 1. **Dataset** - `mojif-data` ships the generated catalog records
//! 2. **Registry** - [`EmojiRegistry`] materializes them into [`Emoji`]
//!    values and owns the shared [`SkinToneGenerator`]
//! 3. **Finder** - [`EmojiFinder`] indexes every literal form (bases,
//!    alternates, all tone variants) in a code-point trie for
//!    longest-match scanning
//! 4. **Catalog** - [`EmojiTemplateCatalog`] resolves `:shortcodes:` and
//!    emoticons back to emoji text
//!
//! Everything is built once and read-only afterwards; [`Emojis::shared`]
//! hands out the process-wide instance.
//!
//! # Example
//!
//! ```
//! use mojif::Emojis;
//!
//! let emojis = Emojis::shared();
//! assert_eq!(emojis.replace("boom :collision:"), "boom \u{1F4A5}");
//! let found: Vec<_> = emojis.find_emoji("ok \u{1F44D}").collect();
//! assert_eq!(found.len(), 1);
//! ```

pub mod catalog;
pub mod engine;
pub mod finder;
pub mod registry;

pub use catalog::{CatalogBuilder, EmojiTemplateCatalog};
pub use engine::Emojis;
pub use finder::{EmojiFinder, FindEmoji, FindEmojiUtf16, FoundEmoji};
pub use registry::EmojiRegistry;

pub use mojif_core::{
    codec, error, Details, DuplicateRegistration, Emoji, EmojiError, EmojiId, EmojiRecord,
    MalformedUtf16, Result, SkinTone, SkinToneGenerator, SkinToneSupport, ToneRecord, ToneTemplate,
    UnicodeVersion,
};

pub use mojif_data as data;

#[cfg(test)]
mod tests;
