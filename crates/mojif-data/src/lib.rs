// this_file: crates/mojif-data/src/lib.rs

//! The bundled emoji catalog.
//!
//! GENERATED by the mojif data pipeline from `emoji-test.txt`, the CLDR
//! annotation files, and the Noto asset manifests. Do not edit by hand;
//! regenerate with `tools/gen-emoji` instead.
//!
//! Records are ordered by group, subgroup, then catalog order. Tone insertion
//! positions are zero-based code-point indices into the un-toned form.

use mojif_core::{EmojiRecord, ToneRecord};

/// Number of catalog entries in [`EMOJI_RECORDS`].
pub const EMOJI_COUNT: usize = 36;
/// Total number of alias strings across all entries.
pub const ALIAS_COUNT: usize = 66;
/// Total number of emoticon strings across all entries.
pub const EMOTICON_COUNT: usize = 22;

pub static EMOJI_RECORDS: &[EmojiRecord] = &[
    // 😀 grinning face
    EmojiRecord {
        string: "\u{1F600}",
        description: "grinning face",
        group: "smileys-emotion",
        subgroup: "face-smiling",
        unicode_version: (6, 1),
        aliases: &["grinning-face", "grinning"],
        emoticons: &[":D", "=D"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😁 beaming face with smiling eyes
    EmojiRecord {
        string: "\u{1F601}",
        description: "beaming face with smiling eyes",
        group: "smileys-emotion",
        subgroup: "face-smiling",
        unicode_version: (6, 0),
        aliases: &["beaming-face-with-smiling-eyes", "grin"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😂 face with tears of joy
    EmojiRecord {
        string: "\u{1F602}",
        description: "face with tears of joy",
        group: "smileys-emotion",
        subgroup: "face-smiling",
        unicode_version: (6, 0),
        aliases: &["face-with-tears-of-joy", "joy"],
        emoticons: &[":')", ":'-)"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 🙂 slightly smiling face
    EmojiRecord {
        string: "\u{1F642}",
        description: "slightly smiling face",
        group: "smileys-emotion",
        subgroup: "face-smiling",
        unicode_version: (7, 0),
        aliases: &["slightly-smiling-face", "slight-smile"],
        emoticons: &[":)", ":-)"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😉 winking face
    EmojiRecord {
        string: "\u{1F609}",
        description: "winking face",
        group: "smileys-emotion",
        subgroup: "face-smiling",
        unicode_version: (6, 0),
        aliases: &["winking-face", "wink"],
        emoticons: &[";)", ";-)"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😎 smiling face with sunglasses
    EmojiRecord {
        string: "\u{1F60E}",
        description: "smiling face with sunglasses",
        group: "smileys-emotion",
        subgroup: "face-glasses",
        unicode_version: (6, 0),
        aliases: &["smiling-face-with-sunglasses", "sunglasses"],
        emoticons: &["8)"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😛 face with tongue
    EmojiRecord {
        string: "\u{1F61B}",
        description: "face with tongue",
        group: "smileys-emotion",
        subgroup: "face-tongue",
        unicode_version: (6, 1),
        aliases: &["face-with-tongue", "stuck-out-tongue"],
        emoticons: &[":P", ":p", ":-P"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😕 confused face
    EmojiRecord {
        string: "\u{1F615}",
        description: "confused face",
        group: "smileys-emotion",
        subgroup: "face-concerned",
        unicode_version: (6, 1),
        aliases: &["confused-face", "confused"],
        emoticons: &[":/", ":-/"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😢 crying face
    EmojiRecord {
        string: "\u{1F622}",
        description: "crying face",
        group: "smileys-emotion",
        subgroup: "face-concerned",
        unicode_version: (6, 0),
        aliases: &["crying-face", "cry"],
        emoticons: &[":'("],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😠 angry face
    EmojiRecord {
        string: "\u{1F620}",
        description: "angry face",
        group: "smileys-emotion",
        subgroup: "face-negative",
        unicode_version: (6, 0),
        aliases: &["angry-face", "angry"],
        emoticons: &[">:("],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😮 face with open mouth
    EmojiRecord {
        string: "\u{1F62E}",
        description: "face with open mouth",
        group: "smileys-emotion",
        subgroup: "face-neutral-skeptical",
        unicode_version: (6, 1),
        aliases: &["face-with-open-mouth", "open-mouth"],
        emoticons: &[":o", ":O"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 😗 kissing face
    EmojiRecord {
        string: "\u{1F617}",
        description: "kissing face",
        group: "smileys-emotion",
        subgroup: "face-affection",
        unicode_version: (6, 1),
        aliases: &["kissing-face", "kissing"],
        emoticons: &[":*", ":-*"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // ❤️ red heart
    EmojiRecord {
        string: "\u{2764}\u{FE0F}",
        description: "red heart",
        group: "smileys-emotion",
        subgroup: "heart",
        unicode_version: (1, 1),
        aliases: &["red-heart", "heart"],
        emoticons: &["<3"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &["\u{2764}"],
        tones: ToneRecord::None,
    },
    // 💔 broken heart
    EmojiRecord {
        string: "\u{1F494}",
        description: "broken heart",
        group: "smileys-emotion",
        subgroup: "heart",
        unicode_version: (6, 0),
        aliases: &["broken-heart"],
        emoticons: &["</3"],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 💥 collision
    EmojiRecord {
        string: "\u{1F4A5}",
        description: "collision",
        group: "smileys-emotion",
        subgroup: "emotion",
        unicode_version: (6, 0),
        aliases: &["collision", "boom"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 💯 hundred points
    EmojiRecord {
        string: "\u{1F4AF}",
        description: "hundred points",
        group: "smileys-emotion",
        subgroup: "emotion",
        unicode_version: (6, 0),
        aliases: &["hundred-points", "100"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 🔥 fire
    EmojiRecord {
        string: "\u{1F525}",
        description: "fire",
        group: "travel-places",
        subgroup: "sky-weather",
        unicode_version: (6, 0),
        aliases: &["fire", "flame"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // ✨ sparkles
    EmojiRecord {
        string: "\u{2728}",
        description: "sparkles",
        group: "activities",
        subgroup: "event",
        unicode_version: (6, 0),
        aliases: &["sparkles"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 🎉 party popper
    EmojiRecord {
        string: "\u{1F389}",
        description: "party popper",
        group: "activities",
        subgroup: "event",
        unicode_version: (6, 0),
        aliases: &["party-popper", "tada"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 🚀 rocket
    EmojiRecord {
        string: "\u{1F680}",
        description: "rocket",
        group: "travel-places",
        subgroup: "transport-air",
        unicode_version: (6, 0),
        aliases: &["rocket"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::None,
    },
    // 👍 thumbs up
    EmojiRecord {
        string: "\u{1F44D}",
        description: "thumbs up",
        group: "people-body",
        subgroup: "hand-fingers-closed",
        unicode_version: (6, 0),
        aliases: &["thumbs-up", "thumbsup"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 👎 thumbs down
    EmojiRecord {
        string: "\u{1F44E}",
        description: "thumbs down",
        group: "people-body",
        subgroup: "hand-fingers-closed",
        unicode_version: (6, 0),
        aliases: &["thumbs-down", "thumbsdown"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 👋 waving hand
    EmojiRecord {
        string: "\u{1F44B}",
        description: "waving hand",
        group: "people-body",
        subgroup: "hand-fingers-open",
        unicode_version: (6, 0),
        aliases: &["waving-hand", "wave"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 👏 clapping hands
    EmojiRecord {
        string: "\u{1F44F}",
        description: "clapping hands",
        group: "people-body",
        subgroup: "hands",
        unicode_version: (6, 0),
        aliases: &["clapping-hands", "clap"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 🙏 folded hands
    EmojiRecord {
        string: "\u{1F64F}",
        description: "folded hands",
        group: "people-body",
        subgroup: "hands",
        unicode_version: (6, 0),
        aliases: &["folded-hands", "pray"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 💪 flexed biceps
    EmojiRecord {
        string: "\u{1F4AA}",
        description: "flexed biceps",
        group: "people-body",
        subgroup: "body-parts",
        unicode_version: (6, 0),
        aliases: &["flexed-biceps", "muscle"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 🤝 handshake
    EmojiRecord {
        string: "\u{1F91D}",
        description: "handshake",
        group: "people-body",
        subgroup: "hands",
        unicode_version: (9, 0),
        aliases: &["handshake"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 👶 baby
    EmojiRecord {
        string: "\u{1F476}",
        description: "baby",
        group: "people-body",
        subgroup: "person",
        unicode_version: (6, 0),
        aliases: &["baby"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // 🧑 person
    EmojiRecord {
        string: "\u{1F9D1}",
        description: "person",
        group: "people-body",
        subgroup: "person",
        unicode_version: (11, 0),
        aliases: &["person", "adult"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::Single { index: 1 },
    },
    // ✌️ victory hand
    EmojiRecord {
        string: "\u{270C}\u{FE0F}",
        description: "victory hand",
        group: "people-body",
        subgroup: "hand-fingers-partial",
        unicode_version: (1, 1),
        aliases: &["victory-hand", "victory", "v"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &["\u{270C}"],
        tones: ToneRecord::SingleUnqualified {
            unqualified: "\u{270C}",
            index: 1,
        },
    },
    // ☝️ index pointing up
    EmojiRecord {
        string: "\u{261D}\u{FE0F}",
        description: "index pointing up",
        group: "people-body",
        subgroup: "hand-single-finger",
        unicode_version: (1, 1),
        aliases: &["index-pointing-up", "point-up"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &["\u{261D}"],
        tones: ToneRecord::SingleUnqualified {
            unqualified: "\u{261D}",
            index: 1,
        },
    },
    // ✍️ writing hand
    EmojiRecord {
        string: "\u{270D}\u{FE0F}",
        description: "writing hand",
        group: "people-body",
        subgroup: "hand-prop",
        unicode_version: (1, 1),
        aliases: &["writing-hand"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &["\u{270D}"],
        tones: ToneRecord::SingleUnqualified {
            unqualified: "\u{270D}",
            index: 1,
        },
    },
    // 🧑‍🤝‍🧑 people holding hands
    EmojiRecord {
        string: "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}",
        description: "people holding hands",
        group: "people-body",
        subgroup: "family",
        unicode_version: (12, 0),
        aliases: &["people-holding-hands"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::Double { first: 1, second: 5 },
    },
    // 👫 woman and man holding hands
    EmojiRecord {
        string: "\u{1F46B}",
        description: "woman and man holding hands",
        group: "people-body",
        subgroup: "family",
        unicode_version: (6, 0),
        aliases: &["woman-and-man-holding-hands", "couple"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 1.0,
        alternates: &[],
        tones: ToneRecord::DoubleZwj {
            single_index: 1,
            template: "\u{1F469}\u{200D}\u{1F91D}\u{200D}\u{1F468}",
            template_version: (12, 1),
            first: 1,
            second: 5,
        },
    },
    // 👭 women holding hands
    EmojiRecord {
        string: "\u{1F46D}",
        description: "women holding hands",
        group: "people-body",
        subgroup: "family",
        unicode_version: (6, 0),
        aliases: &["women-holding-hands", "two-women-holding-hands"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::DoubleZwj {
            single_index: 1,
            template: "\u{1F469}\u{200D}\u{1F91D}\u{200D}\u{1F469}",
            template_version: (12, 1),
            first: 1,
            second: 5,
        },
    },
    // 👬 men holding hands
    EmojiRecord {
        string: "\u{1F46C}",
        description: "men holding hands",
        group: "people-body",
        subgroup: "family",
        unicode_version: (6, 0),
        aliases: &["men-holding-hands", "two-men-holding-hands"],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::DoubleZwj {
            single_index: 1,
            template: "\u{1F468}\u{200D}\u{1F91D}\u{200D}\u{1F468}",
            template_version: (12, 1),
            first: 1,
            second: 5,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use mojif_core::codec;

    #[test]
    fn test_counts_match_tables() {
        assert_eq!(EMOJI_RECORDS.len(), EMOJI_COUNT);
        let aliases: usize = EMOJI_RECORDS.iter().map(|r| r.aliases.len()).sum();
        assert_eq!(aliases, ALIAS_COUNT);
        let emoticons: usize = EMOJI_RECORDS.iter().map(|r| r.emoticons.len()).sum();
        assert_eq!(emoticons, EMOTICON_COUNT);
    }

    #[test]
    fn test_aliases_are_unique_and_shortcode_safe() {
        let mut seen = std::collections::HashSet::new();
        for record in EMOJI_RECORDS {
            for alias in record.aliases {
                assert!(seen.insert(alias), "duplicate alias {alias}");
                assert!(
                    alias
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                    "alias {alias} would not match the shortcode pattern"
                );
            }
        }
    }

    #[test]
    fn test_first_alias_is_kebab_cased_description() {
        for record in EMOJI_RECORDS {
            let kebab = record.description.replace(' ', "-");
            assert_eq!(record.aliases[0], kebab, "{}", record.description);
        }
    }

    #[test]
    fn test_tone_indices_are_in_bounds() {
        for record in EMOJI_RECORDS {
            let len = codec::code_points(record.string).len();
            match record.tones {
                ToneRecord::None => {}
                ToneRecord::Single { index } => assert!(index <= len),
                ToneRecord::SingleUnqualified { unqualified, index } => {
                    assert!(index <= codec::code_points(unqualified).len());
                    assert!(index <= len);
                }
                ToneRecord::Double { first, second } => {
                    assert!(first < second);
                    assert!(second <= len);
                }
                ToneRecord::DoubleZwj {
                    single_index,
                    template,
                    first,
                    second,
                    ..
                } => {
                    assert!(single_index <= len);
                    assert!(first < second);
                    assert!(second <= codec::code_points(template).len());
                }
            }
        }
    }
}
