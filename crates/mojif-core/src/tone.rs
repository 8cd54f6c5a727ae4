// this_file: crates/mojif-core/src/tone.rs

//! Skin-tone variant derivation.
//!
//! [`SkinToneGenerator`] owns a single arena cache keyed by
//! `(base id, tone1, tone2)` so [`Emoji`] values stay purely immutable:
//! derivation is deterministic and idempotent, and repeated requests for the
//! same combination return the identical cached instance.
//!
//! The cache is populated during the registry build pass that feeds the
//! finder trie; post-build reads are lock-cheap and contention-free.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::emoji::{Details, Emoji, EmojiId, SkinTone, ToneTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VariantKey {
    base: EmojiId,
    tone1: SkinTone,
    tone2: Option<SkinTone>,
}

/// Derives and memoizes skin-toned variants of catalog emoji.
#[derive(Clone, Default)]
pub struct SkinToneGenerator {
    cache: Arc<RwLock<HashMap<VariantKey, Emoji>>>,
}

impl SkinToneGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variants derived so far.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// The single-toned variant of `base`, or `None` when `base` does not
    /// accept a skin tone.
    ///
    /// A two-tone base without a dedicated single-tone form degenerates to
    /// `with_tones(base, tone, tone)`.
    pub fn with_tone(&self, base: &Emoji, tone: SkinTone) -> Option<Emoji> {
        let template = base.tone_template()?;
        let details = base.details();
        let string = match template {
            ToneTemplate::Single { index } => insert_one(&details.string, *index, tone),
            ToneTemplate::SingleUnqualified { unqualified, index } => {
                splice_unqualified(unqualified, &details.string, *index, tone)
            }
            ToneTemplate::DoubleZwj { single_index, .. } => {
                insert_one(&details.string, *single_index, tone)
            }
            ToneTemplate::Double { .. } => return self.with_tones(base, tone, tone),
        };
        let key = VariantKey {
            base: base.id(),
            tone1: tone,
            tone2: None,
        };
        Some(self.cached(key, || {
            Emoji::toned(
                base.id(),
                Details {
                    string,
                    description: format!("{}, {} skin tone", details.description, tone.alias()),
                    unicode_version: details.unicode_version,
                    aliases: details
                        .aliases
                        .iter()
                        .map(|alias| format!("{alias}~{}", tone.alias()))
                        .collect(),
                    emoticons: Vec::new(),
                    noto_image_ratio: details.noto_image_ratio,
                    noto_animation_ratio: details.noto_animation_ratio,
                },
                base.clone(),
                tone,
                None,
            )
        }))
    }

    /// The two-toned variant of `base`, or `None` when `base` does not
    /// accept two independent skin tones.
    pub fn with_tones(&self, base: &Emoji, tone1: SkinTone, tone2: SkinTone) -> Option<Emoji> {
        let template = base.tone_template()?;
        let (string, unicode_version) = match template {
            ToneTemplate::Double { first, second } => (
                insert_two(&base.details().string, *first, *second, tone1, tone2),
                base.details().unicode_version,
            ),
            ToneTemplate::DoubleZwj {
                template,
                template_version,
                first,
                second,
                ..
            } => (
                insert_two(template, *first, *second, tone1, tone2),
                *template_version,
            ),
            ToneTemplate::Single { .. } | ToneTemplate::SingleUnqualified { .. } => return None,
        };
        let details = base.details();
        let key = VariantKey {
            base: base.id(),
            tone1,
            tone2: Some(tone2),
        };
        Some(self.cached(key, || {
            Emoji::toned(
                base.id(),
                Details {
                    string,
                    description: format!(
                        "{}, {} & {} skin tones",
                        details.description,
                        tone1.alias(),
                        tone2.alias()
                    ),
                    unicode_version,
                    aliases: details
                        .aliases
                        .iter()
                        .map(|alias| format!("{alias}~{},{}", tone1.alias(), tone2.alias()))
                        .collect(),
                    emoticons: Vec::new(),
                    noto_image_ratio: details.noto_image_ratio,
                    noto_animation_ratio: details.noto_animation_ratio,
                },
                base.clone(),
                tone1,
                Some(tone2),
            )
        }))
    }

    fn cached(&self, key: VariantKey, make: impl FnOnce() -> Emoji) -> Emoji {
        if let Some(hit) = self.cache.read().get(&key) {
            return hit.clone();
        }
        let mut cache = self.cache.write();
        cache.entry(key).or_insert_with(make).clone()
    }
}

fn byte_index(text: &str, cp_index: usize) -> usize {
    text.char_indices()
        .nth(cp_index)
        .map_or(text.len(), |(offset, _)| offset)
}

fn insert_one(text: &str, index: usize, tone: SkinTone) -> String {
    let cut = byte_index(text, index);
    format!("{}{}{}", &text[..cut], tone.as_str(), &text[cut..])
}

fn insert_two(text: &str, first: usize, second: usize, tone1: SkinTone, tone2: SkinTone) -> String {
    let cut1 = byte_index(text, first);
    let cut2 = byte_index(text, second);
    format!(
        "{}{}{}{}{}",
        &text[..cut1],
        tone1.as_str(),
        &text[cut1..cut2],
        tone2.as_str(),
        &text[cut2..]
    )
}

// The prefix comes from the legacy unqualified form, the suffix from the main
// form, both cut at the same code-point index. A variation selector trailing
// the insertion point is therefore kept, matching the catalog data.
fn splice_unqualified(unqualified: &str, main: &str, index: usize, tone: SkinTone) -> String {
    let cut_unqualified = byte_index(unqualified, index);
    let cut_main = byte_index(main, index);
    format!(
        "{}{}{}",
        &unqualified[..cut_unqualified],
        tone.as_str(),
        &main[cut_main..]
    )
}
