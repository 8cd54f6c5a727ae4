// this_file: crates/mojif/src/registry.rs

//! The immutable emoji registry.
//!
//! A registry materializes static catalog records into [`Emoji`] values and
//! owns the [`SkinToneGenerator`] arena they share. Construction is the only
//! mutation phase; afterwards the registry is read-only and safe to share
//! across threads.

use mojif_core::{Emoji, EmojiId, EmojiRecord, SkinTone, SkinToneGenerator, SkinToneSupport, ToneTemplate};

pub(crate) struct RegistryEntry {
    pub(crate) emoji: Emoji,
    pub(crate) alternates: Vec<String>,
    pub(crate) group: String,
    pub(crate) subgroup: String,
}

/// The full emoji catalog plus its shared variant generator.
pub struct EmojiRegistry {
    entries: Vec<RegistryEntry>,
    tones: SkinToneGenerator,
}

impl EmojiRegistry {
    /// Materializes a registry from static catalog records.
    pub fn from_records(records: &[EmojiRecord]) -> EmojiRegistry {
        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| RegistryEntry {
                emoji: Emoji::from_record(EmojiId::new(index as u32), record),
                alternates: record.alternates.iter().map(|a| (*a).to_owned()).collect(),
                group: record.group.to_owned(),
                subgroup: record.subgroup.to_owned(),
            })
            .collect::<Vec<_>>();
        log::debug!("emoji registry loaded: {} entries", entries.len());
        EmojiRegistry {
            entries,
            tones: SkinToneGenerator::new(),
        }
    }

    /// The registry backed by the bundled `mojif-data` catalog.
    pub fn builtin() -> EmojiRegistry {
        Self::from_records(mojif_data::EMOJI_RECORDS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The base emoji, in catalog order. Tone variants are not included;
    /// see [`EmojiRegistry::all_with_variants`].
    pub fn emojis(&self) -> impl Iterator<Item = &Emoji> {
        self.entries.iter().map(|entry| &entry.emoji)
    }

    /// Looks a base emoji up by any of its aliases.
    pub fn by_alias(&self, alias: &str) -> Option<&Emoji> {
        self.emojis()
            .find(|emoji| emoji.details().aliases.iter().any(|a| a == alias))
    }

    /// The shared skin-tone variant generator.
    pub fn tones(&self) -> &SkinToneGenerator {
        &self.tones
    }

    /// Convenience for [`SkinToneGenerator::with_tone`].
    pub fn with_skin_tone(&self, base: &Emoji, tone: SkinTone) -> Option<Emoji> {
        self.tones.with_tone(base, tone)
    }

    /// Convenience for [`SkinToneGenerator::with_tones`].
    pub fn with_skin_tones(&self, base: &Emoji, tone1: SkinTone, tone2: SkinTone) -> Option<Emoji> {
        self.tones.with_tones(base, tone1, tone2)
    }

    /// All catalog group names, in catalog order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !groups.contains(&entry.group.as_str()) {
                groups.push(&entry.group);
            }
        }
        groups
    }

    /// All subgroup names of one group, in catalog order.
    pub fn subgroups_of(&self, group: &str) -> Vec<&str> {
        let mut subgroups: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if entry.group == group && !subgroups.contains(&entry.subgroup.as_str()) {
                subgroups.push(&entry.subgroup);
            }
        }
        subgroups
    }

    /// All base emoji of one group.
    pub fn all_of(&self, group: &str) -> Vec<Emoji> {
        self.entries
            .iter()
            .filter(|entry| entry.group == group)
            .map(|entry| entry.emoji.clone())
            .collect()
    }

    /// All base emoji of one subgroup.
    pub fn all_of_subgroup(&self, group: &str, subgroup: &str) -> Vec<Emoji> {
        self.entries
            .iter()
            .filter(|entry| entry.group == group && entry.subgroup == subgroup)
            .map(|entry| entry.emoji.clone())
            .collect()
    }

    /// Every base emoji followed by all of its tone variants: 5 per
    /// single-tone base, 25 per double-tone base, and for bases with a
    /// distinct single-tone form the 5 single-tone renderings on top.
    ///
    /// This walks the whole variant space; construct it once and keep it.
    pub fn all_with_variants(&self) -> Vec<Emoji> {
        let mut all = Vec::new();
        for entry in &self.entries {
            let emoji = &entry.emoji;
            all.push(emoji.clone());
            match emoji.skin_tone_support() {
                SkinToneSupport::None => {}
                SkinToneSupport::Single => {
                    all.extend(
                        SkinTone::ALL
                            .into_iter()
                            .filter_map(|tone| self.tones.with_tone(emoji, tone)),
                    );
                }
                SkinToneSupport::Double => {
                    if matches!(emoji.tone_template(), Some(ToneTemplate::DoubleZwj { .. })) {
                        all.extend(
                            SkinTone::ALL
                                .into_iter()
                                .filter_map(|tone| self.tones.with_tone(emoji, tone)),
                        );
                    }
                    for tone1 in SkinTone::ALL {
                        all.extend(
                            SkinTone::ALL
                                .into_iter()
                                .filter_map(|tone2| self.tones.with_tones(emoji, tone1, tone2)),
                        );
                    }
                }
            }
        }
        all
    }

    pub(crate) fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}
