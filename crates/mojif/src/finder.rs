// this_file: crates/mojif/src/finder.rs

//! Longest-match emoji scanning.
//!
//! [`EmojiFinder`] is a prefix trie keyed by Unicode code points. It is built
//! once from a registry - every base form, every alternate spelling, and
//! every skin-tone variant gets its own path - and is read-only afterwards.
//!
//! Scanning walks the trie code point by code point, remembering the last
//! terminal it passed. When the walk can no longer extend, the match backs
//! off to that terminal, so a registered `👍🏽` always wins over a bare `👍`
//! followed by a stray tone modifier. On a miss the scan advances by exactly
//! one code point and retries.

use std::collections::HashMap;

use mojif_core::codec::{self, utf16_len};
use mojif_core::error::{DuplicateRegistration, MalformedUtf16};
use mojif_core::{Emoji, Result, SkinTone, SkinToneGenerator, ToneTemplate};

use crate::registry::EmojiRegistry;

#[derive(Default)]
struct Node {
    emoji: Option<Emoji>,
    branches: HashMap<u32, Node>,
}

/// One emoji occurrence in scanned text. Offsets count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundEmoji {
    pub start: usize,
    pub end: usize,
    pub emoji: Emoji,
}

impl FoundEmoji {
    /// Length of the occurrence in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Prefix trie over emoji code-point sequences.
#[derive(Default)]
pub struct EmojiFinder {
    root: Node,
    sequences: usize,
}

impl EmojiFinder {
    /// An empty finder. Most callers want [`EmojiFinder::from_registry`].
    pub fn new() -> EmojiFinder {
        EmojiFinder::default()
    }

    /// Builds the finder over a whole registry: base forms, alternate
    /// spellings, and all tone variants through the registry's shared
    /// generator.
    pub fn from_registry(registry: &EmojiRegistry) -> Result<EmojiFinder> {
        let mut finder = EmojiFinder::new();
        let tones = registry.tones();
        for entry in registry.entries() {
            let emoji = &entry.emoji;
            finder.add(&codec::code_points(emoji.as_str()), emoji.clone())?;
            for alternate in &entry.alternates {
                finder.add(&codec::code_points(alternate), emoji.clone())?;
            }
            match emoji.tone_template() {
                None => {}
                Some(ToneTemplate::Single { index }) => {
                    let mut template = with_slot(codec::code_points(emoji.as_str()), *index);
                    finder.add_tone1_variations(&mut template, *index, emoji, tones)?;
                }
                Some(ToneTemplate::SingleUnqualified { unqualified, index }) => {
                    let mut template = with_slot(codec::code_points(unqualified), *index);
                    finder.add_tone1_variations(&mut template, *index, emoji, tones)?;
                    // The spliced literal keeps the main form's variation
                    // selector, so it is a second textual path to the same
                    // variant.
                    for tone in SkinTone::ALL {
                        if let Some(variant) = tones.with_tone(emoji, tone) {
                            finder.add(&codec::code_points(variant.as_str()), variant.clone())?;
                        }
                    }
                }
                Some(ToneTemplate::Double { first, second }) => {
                    let mut template =
                        with_two_slots(codec::code_points(emoji.as_str()), *first, *second);
                    finder.add_tone2_variations(&mut template, *first, *second + 1, emoji, tones)?;
                }
                Some(ToneTemplate::DoubleZwj {
                    single_index,
                    template,
                    first,
                    second,
                    ..
                }) => {
                    let mut single =
                        with_slot(codec::code_points(emoji.as_str()), *single_index);
                    finder.add_tone1_variations(&mut single, *single_index, emoji, tones)?;
                    let mut double = with_two_slots(codec::code_points(template), *first, *second);
                    finder.add_tone2_variations(&mut double, *first, *second + 1, emoji, tones)?;
                }
            }
        }
        log::debug!(
            "emoji finder built: {} sequences over {} registry entries",
            finder.sequences,
            registry.len()
        );
        Ok(finder)
    }

    /// Number of registered code-point sequences.
    pub fn len(&self) -> usize {
        self.sequences
    }

    pub fn is_empty(&self) -> bool {
        self.sequences == 0
    }

    /// Registers `emoji` at the path described by `codes`.
    ///
    /// Re-adding the same emoji at the same path (an alternate spelling that
    /// collapsed onto an existing one) is a no-op; a *different* emoji at an
    /// occupied path is a fatal [`DuplicateRegistration`].
    pub fn add(&mut self, codes: &[u32], emoji: Emoji) -> Result<()> {
        let mut node = &mut self.root;
        for &code in codes {
            node = node.branches.entry(code).or_default();
        }
        match &node.emoji {
            Some(existing) if *existing != emoji => {
                let err = DuplicateRegistration {
                    sequence: codes.to_vec(),
                    existing: existing.details().description.clone(),
                    rejected: emoji.details().description.clone(),
                };
                log::error!("emoji finder: {err}");
                Err(err.into())
            }
            Some(_) => Ok(()),
            None => {
                node.emoji = Some(emoji);
                self.sequences += 1;
                Ok(())
            }
        }
    }

    /// Registers the 5 single-tone variations of `base`, overwriting the
    /// placeholder at `slot` in `template` with each tone's code point.
    ///
    /// The un-toned form is *not* added; register it separately with
    /// [`EmojiFinder::add`].
    pub fn add_tone1_variations(
        &mut self,
        template: &mut [u32],
        slot: usize,
        base: &Emoji,
        tones: &SkinToneGenerator,
    ) -> Result<()> {
        for tone in SkinTone::ALL {
            template[slot] = tone.code_point();
            let Some(variant) = tones.with_tone(base, tone) else {
                log::warn!("emoji {base:?} does not accept a single skin tone; skipping");
                return Ok(());
            };
            self.add(template, variant)?;
        }
        Ok(())
    }

    /// Registers the 25 double-tone variations of `base`, overwriting the
    /// placeholders at `slot1` and `slot2` in `template`.
    ///
    /// The un-toned form is *not* added; register it separately with
    /// [`EmojiFinder::add`].
    pub fn add_tone2_variations(
        &mut self,
        template: &mut [u32],
        slot1: usize,
        slot2: usize,
        base: &Emoji,
        tones: &SkinToneGenerator,
    ) -> Result<()> {
        for tone1 in SkinTone::ALL {
            template[slot1] = tone1.code_point();
            for tone2 in SkinTone::ALL {
                template[slot2] = tone2.code_point();
                let Some(variant) = tones.with_tones(base, tone1, tone2) else {
                    log::warn!("emoji {base:?} does not accept two skin tones; skipping");
                    return Ok(());
                };
                self.add(template, variant)?;
            }
        }
        Ok(())
    }

    /// Scans `text` lazily for registered emoji, yielding occurrences in
    /// left-to-right order with UTF-16 code-unit offsets.
    ///
    /// Each call starts a fresh single-pass scan.
    pub fn find_emoji<'a>(&'a self, text: &'a str) -> FindEmoji<'a> {
        FindEmoji {
            finder: self,
            text,
            byte_pos: 0,
            utf16_pos: 0,
        }
    }

    /// Scans a raw UTF-16 buffer. Unlike [`EmojiFinder::find_emoji`] the
    /// input may be malformed; an unpaired surrogate ends the scan with an
    /// `Err` item.
    pub fn find_emoji_utf16<'a>(&'a self, units: &'a [u16]) -> FindEmojiUtf16<'a> {
        FindEmojiUtf16 {
            finder: self,
            units,
            pos: 0,
            failed: false,
        }
    }
}

/// Inserts a placeholder slot at code-point position `index`.
fn with_slot(codes: Vec<u32>, index: usize) -> Vec<u32> {
    let mut template = codes;
    template.insert(index, 0);
    template
}

/// Inserts two placeholder slots; both positions are relative to the
/// un-toned sequence, so the second lands at `second + 1` after the first
/// insertion.
fn with_two_slots(codes: Vec<u32>, first: usize, second: usize) -> Vec<u32> {
    let mut template = codes;
    template.insert(first, 0);
    template.insert(second + 1, 0);
    template
}

/// Lazy scanner over a `&str`. Single pass, not restartable.
pub struct FindEmoji<'a> {
    finder: &'a EmojiFinder,
    text: &'a str,
    byte_pos: usize,
    utf16_pos: usize,
}

impl Iterator for FindEmoji<'_> {
    type Item = FoundEmoji;

    fn next(&mut self) -> Option<FoundEmoji> {
        while self.byte_pos < self.text.len() {
            let mut node = &self.finder.root;
            let mut bytes = 0;
            let mut units = 0;
            // (byte length, UTF-16 length, emoji) of the last terminal passed.
            let mut best: Option<(usize, usize, &Emoji)> = None;
            for ch in self.text[self.byte_pos..].chars() {
                match node.branches.get(&u32::from(ch)) {
                    Some(next) => {
                        bytes += ch.len_utf8();
                        units += ch.len_utf16();
                        node = next;
                        if let Some(emoji) = &node.emoji {
                            best = Some((bytes, units, emoji));
                        }
                    }
                    None => break,
                }
            }
            if let Some((match_bytes, match_units, emoji)) = best {
                let found = FoundEmoji {
                    start: self.utf16_pos,
                    end: self.utf16_pos + match_units,
                    emoji: emoji.clone(),
                };
                self.byte_pos += match_bytes;
                self.utf16_pos += match_units;
                return Some(found);
            }
            let ch = self.text[self.byte_pos..].chars().next()?;
            self.byte_pos += ch.len_utf8();
            self.utf16_pos += ch.len_utf16();
        }
        None
    }
}

/// Lazy scanner over a raw UTF-16 buffer. Yields `Err` once at the first
/// malformed position, then fuses.
pub struct FindEmojiUtf16<'a> {
    finder: &'a EmojiFinder,
    units: &'a [u16],
    pos: usize,
    failed: bool,
}

impl Iterator for FindEmojiUtf16<'_> {
    type Item = std::result::Result<FoundEmoji, MalformedUtf16>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.pos < self.units.len() {
            let mut node = &self.finder.root;
            let mut offset = self.pos;
            let mut best: Option<(usize, &Emoji)> = None;
            // A decode error mid-walk just ends the walk; the error position
            // is reported once the scan itself reaches it.
            while offset < self.units.len() {
                let Ok((code, width)) = codec::decode_at(self.units, offset) else {
                    break;
                };
                let Some(next) = node.branches.get(&code) else {
                    break;
                };
                offset += width;
                node = next;
                if let Some(emoji) = &node.emoji {
                    best = Some((offset, emoji));
                }
            }
            if let Some((end, emoji)) = best {
                let found = FoundEmoji {
                    start: self.pos,
                    end,
                    emoji: emoji.clone(),
                };
                self.pos = end;
                return Some(Ok(found));
            }
            match codec::decode_at(self.units, self.pos) {
                Ok((code, _)) => self.pos += utf16_len(code),
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
