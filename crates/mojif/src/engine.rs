// this_file: crates/mojif/src/engine.rs

//! The assembled engine: registry, finder, and catalog built once and
//! published immutable.
//!
//! Construction is the only mutation phase. [`Emojis::shared`] performs the
//! expensive build at most once per process behind a `OnceLock`; concurrent
//! first callers block until the completed instance is published, and no
//! caller can observe a partially built structure.

use std::sync::OnceLock;

use mojif_core::{Emoji, Result, SkinTone};

use crate::catalog::EmojiTemplateCatalog;
use crate::finder::{EmojiFinder, FindEmoji};
use crate::registry::EmojiRegistry;

/// A fully built, immutable emoji engine.
pub struct Emojis {
    registry: EmojiRegistry,
    finder: EmojiFinder,
    catalog: EmojiTemplateCatalog,
}

impl Emojis {
    /// Builds an engine over `registry`. Fails only on a registry integrity
    /// fault (two emoji claiming one code-point sequence), which is fatal by
    /// design: a trie that silently dropped entries would lose matches.
    pub fn new(registry: EmojiRegistry) -> Result<Emojis> {
        let finder = EmojiFinder::from_registry(&registry)?;
        let catalog = EmojiTemplateCatalog::new(&registry);
        Ok(Emojis {
            registry,
            finder,
            catalog,
        })
    }

    /// An engine over the bundled catalog.
    pub fn builtin() -> Result<Emojis> {
        Self::new(EmojiRegistry::builtin())
    }

    /// The process-wide engine over the bundled catalog, built on first use.
    ///
    /// # Panics
    ///
    /// If the bundled dataset is corrupt. That is a defect in the generated
    /// data, not a runtime condition, and nothing sensible can run on top of
    /// a half-built catalog.
    #[allow(clippy::panic)]
    pub fn shared() -> &'static Emojis {
        static SHARED: OnceLock<Emojis> = OnceLock::new();
        SHARED.get_or_init(|| match Emojis::builtin() {
            Ok(engine) => engine,
            Err(err) => panic!("bundled emoji catalog is corrupt: {err}"),
        })
    }

    pub fn registry(&self) -> &EmojiRegistry {
        &self.registry
    }

    pub fn finder(&self) -> &EmojiFinder {
        &self.finder
    }

    pub fn catalog(&self) -> &EmojiTemplateCatalog {
        &self.catalog
    }

    /// See [`EmojiFinder::find_emoji`].
    pub fn find_emoji<'a>(&'a self, text: &'a str) -> FindEmoji<'a> {
        self.finder.find_emoji(text)
    }

    /// See [`EmojiTemplateCatalog::replace`].
    pub fn replace(&self, text: &str) -> String {
        self.catalog.replace(text)
    }

    /// See [`EmojiTemplateCatalog::replace_shortcodes`].
    pub fn replace_shortcodes(&self, text: &str) -> String {
        self.catalog.replace_shortcodes(text)
    }

    /// See [`EmojiTemplateCatalog::replace_emoticons`].
    pub fn replace_emoticons(&self, text: &str) -> String {
        self.catalog.replace_emoticons(text)
    }

    /// Looks a base emoji up by alias in the bundled registry.
    pub fn by_alias(&self, alias: &str) -> Option<&Emoji> {
        self.registry.by_alias(alias)
    }

    /// See [`EmojiRegistry::with_skin_tone`].
    pub fn with_skin_tone(&self, base: &Emoji, tone: SkinTone) -> Option<Emoji> {
        self.registry.with_skin_tone(base, tone)
    }

    /// See [`EmojiRegistry::with_skin_tones`].
    pub fn with_skin_tones(&self, base: &Emoji, tone1: SkinTone, tone2: SkinTone) -> Option<Emoji> {
        self.registry.with_skin_tones(base, tone1, tone2)
    }
}
