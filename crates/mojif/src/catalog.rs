// this_file: crates/mojif/src/catalog.rs

//! Shortcode and emoticon substitution.
//!
//! The catalog maps alias strings (`:collision:`) and emoticon strings
//! (`<3`) back to emoji. Unresolvable shortcodes are not errors to the end
//! user, they are literal text: an unknown alias or an unsupported tone
//! suffix leaves the span untouched.

use std::collections::HashMap;

use regex::{Captures, Regex};

use mojif_core::{Emoji, SkinTone, SkinToneGenerator};

use crate::registry::EmojiRegistry;

/// `:alias:`, `:alias~tone:` or `:alias~tone1,tone2:`.
const SHORTCODE_PATTERN: &str =
    r":(?P<alias>[a-zA-Z0-9_-]+)(?:~(?P<tone1>[a-zA-Z-]+)(?:,(?P<tone2>[a-zA-Z-]+))?)?:";

// The pattern is a constant; failing to compile it is a programming error,
// not an input condition.
#[allow(clippy::expect_used)]
fn shortcode_regex() -> Regex {
    Regex::new(SHORTCODE_PATTERN).expect("invalid shortcode pattern")
}

/// Alias and emoticon maps over a registry snapshot, immutable once built.
pub struct EmojiTemplateCatalog {
    aliases: HashMap<String, Emoji>,
    emoticons: HashMap<String, Emoji>,
    tones: SkinToneGenerator,
    shortcode: Regex,
}

/// Adds caller-supplied aliases and emoticons on top of the registry's own.
pub struct CatalogBuilder {
    aliases: HashMap<String, Emoji>,
    emoticons: HashMap<String, Emoji>,
    tones: SkinToneGenerator,
}

impl CatalogBuilder {
    pub fn add_alias(mut self, alias: impl Into<String>, emoji: Emoji) -> CatalogBuilder {
        self.aliases.insert(alias.into(), emoji);
        self
    }

    pub fn add_emoticon(mut self, emoticon: impl Into<String>, emoji: Emoji) -> CatalogBuilder {
        self.emoticons.insert(emoticon.into(), emoji);
        self
    }

    pub fn build(self) -> EmojiTemplateCatalog {
        log::debug!(
            "emoji catalog built: {} aliases, {} emoticons",
            self.aliases.len(),
            self.emoticons.len()
        );
        EmojiTemplateCatalog {
            aliases: self.aliases,
            emoticons: self.emoticons,
            tones: self.tones,
            shortcode: shortcode_regex(),
        }
    }
}

impl EmojiTemplateCatalog {
    /// Builds the catalog for a registry snapshot.
    pub fn new(registry: &EmojiRegistry) -> EmojiTemplateCatalog {
        Self::builder(registry).build()
    }

    /// Starts a catalog over `registry`, open for extra registrations.
    pub fn builder(registry: &EmojiRegistry) -> CatalogBuilder {
        // Pre-size from the generated counts when this is the bundled
        // catalog; custom registries fall back to growth on demand.
        let bundled = registry.len() == mojif_data::EMOJI_COUNT;
        let mut aliases = if bundled {
            HashMap::with_capacity(mojif_data::ALIAS_COUNT)
        } else {
            HashMap::new()
        };
        let mut emoticons = if bundled {
            HashMap::with_capacity(mojif_data::EMOTICON_COUNT)
        } else {
            HashMap::new()
        };
        for emoji in registry.emojis() {
            for alias in &emoji.details().aliases {
                aliases.insert(alias.clone(), emoji.clone());
            }
            for emoticon in &emoji.details().emoticons {
                emoticons.insert(emoticon.clone(), emoji.clone());
            }
        }
        CatalogBuilder {
            aliases,
            emoticons,
            tones: registry.tones().clone(),
        }
    }

    /// The alias map, for callers that resolve shortcodes themselves.
    pub fn alias_map(&self) -> &HashMap<String, Emoji> {
        &self.aliases
    }

    /// The emoticon map.
    pub fn emoticon_map(&self) -> &HashMap<String, Emoji> {
        &self.emoticons
    }

    /// Replaces all `:shortcode:` spans by their corresponding emoji.
    ///
    /// Tone-capable emoji can be shortcoded as `:alias~tone:` or
    /// `:alias~tone1,tone2:` with the tones `light`, `medium-light`,
    /// `medium`, `medium-dark` and `dark`. Spans that do not resolve are
    /// left as-is.
    pub fn replace_shortcodes(&self, text: &str) -> String {
        self.shortcode
            .replace_all(text, |caps: &Captures<'_>| self.resolve_shortcode(caps))
            .into_owned()
    }

    fn resolve_shortcode(&self, caps: &Captures<'_>) -> String {
        let whole = caps[0].to_owned();
        let Some(alias) = caps.name("alias") else {
            return whole;
        };
        let Some(emoji) = self.aliases.get(alias.as_str()) else {
            return whole;
        };
        let tone1 = caps
            .name("tone1")
            .and_then(|m| SkinTone::from_alias(m.as_str()));
        let tone2 = caps
            .name("tone2")
            .and_then(|m| SkinTone::from_alias(m.as_str()));
        match (tone1, tone2) {
            (None, None) => emoji.as_str().to_owned(),
            (Some(tone), None) => self
                .tones
                .with_tone(emoji, tone)
                .map_or(whole, |toned| toned.as_str().to_owned()),
            (Some(tone1), Some(tone2)) => self
                .tones
                .with_tones(emoji, tone1, tone2)
                .map_or(whole, |toned| toned.as_str().to_owned()),
            (None, Some(_)) => whole,
        }
    }

    /// Replaces every registered emoticon occurrence by its emoji.
    ///
    /// Each emoticon is substituted independently over the text in map
    /// order; the order across different emoticons is unspecified.
    pub fn replace_emoticons(&self, text: &str) -> String {
        let mut result = text.to_owned();
        for (emoticon, emoji) in &self.emoticons {
            result = result.replace(emoticon.as_str(), emoji.as_str());
        }
        result
    }

    /// Shortcodes first, then emoticons.
    pub fn replace(&self, text: &str) -> String {
        self.replace_emoticons(&self.replace_shortcodes(text))
    }
}
