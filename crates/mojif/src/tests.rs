// this_file: crates/mojif/src/tests.rs

use mojif_core::{Emoji, EmojiError, EmojiId, EmojiRecord, ToneRecord};

use crate::catalog::EmojiTemplateCatalog;
use crate::finder::EmojiFinder;
use crate::registry::EmojiRegistry;

fn plain(string: &'static str, description: &'static str) -> EmojiRecord {
    EmojiRecord {
        string,
        description,
        group: "symbols",
        subgroup: "other-symbol",
        unicode_version: (6, 0),
        aliases: &[],
        emoticons: &[],
        noto_image_ratio: 1.0,
        noto_animation_ratio: 0.0,
        alternates: &[],
        tones: ToneRecord::None,
    }
}

fn emoji(record: &EmojiRecord) -> Emoji {
    Emoji::from_record(EmojiId::new(0), record)
}

fn finder_over(records: &[EmojiRecord]) -> EmojiFinder {
    EmojiFinder::from_registry(&EmojiRegistry::from_records(records)).unwrap()
}

#[test]
fn test_add_same_emoji_twice_is_noop() {
    let mut finder = EmojiFinder::new();
    let boom = emoji(&plain("\u{1F4A5}", "collision"));
    finder.add(&[0x1F4A5], boom.clone()).unwrap();
    finder.add(&[0x1F4A5], boom).unwrap();
    assert_eq!(finder.len(), 1);
}

#[test]
fn test_add_conflicting_emoji_fails() {
    let mut finder = EmojiFinder::new();
    finder
        .add(&[0x1F4A5], emoji(&plain("\u{1F4A5}", "collision")))
        .unwrap();
    let err = finder
        .add(&[0x1F4A5], emoji(&plain("\u{1F4A5}", "boom")))
        .unwrap_err();
    assert!(matches!(err, EmojiError::DuplicateRegistration(_)));
    // The losing entry was not inserted.
    assert_eq!(finder.len(), 1);
}

#[test]
fn test_scan_backs_off_to_last_terminal() {
    // "AB" and "ABCD" are registered; "ABC" is an interior node.
    let mut finder = EmojiFinder::new();
    let short = emoji(&plain("AB", "short"));
    let long = emoji(&plain("ABCD", "long"));
    finder.add(&[0x41, 0x42], short.clone()).unwrap();
    finder.add(&[0x41, 0x42, 0x43, 0x44], long.clone()).unwrap();

    let found: Vec<_> = finder.find_emoji("ABCX").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].start, 0);
    assert_eq!(found[0].end, 2);
    assert_eq!(found[0].emoji, short);

    let found: Vec<_> = finder.find_emoji("ABCD").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].end, 4);
    assert_eq!(found[0].emoji, long);
}

#[test]
fn test_scan_resumes_after_match() {
    let mut finder = EmojiFinder::new();
    let short = emoji(&plain("AB", "short"));
    finder.add(&[0x41, 0x42], short.clone()).unwrap();
    let found: Vec<_> = finder.find_emoji("ABAB").collect();
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].start, found[0].end), (0, 2));
    assert_eq!((found[1].start, found[1].end), (2, 4));
}

#[test]
fn test_scan_advances_one_code_point_on_miss() {
    // An astral non-emoji (𝄞, two UTF-16 units) before a match must not
    // desynchronize the offsets.
    let finder = finder_over(&[plain("\u{1F4A5}", "collision")]);
    let found: Vec<_> = finder.find_emoji("\u{1D11E}\u{1F4A5}").collect();
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (2, 4));
}

#[test]
fn test_scan_empty_and_plain_text() {
    let finder = finder_over(&[plain("\u{1F4A5}", "collision")]);
    assert_eq!(finder.find_emoji("").count(), 0);
    assert_eq!(finder.find_emoji("no emoji here").count(), 0);
}

#[test]
fn test_utf16_scan_matches_str_scan() {
    let finder = finder_over(&[plain("\u{1F4A5}", "collision")]);
    let text = "a \u{1F4A5}b\u{1F4A5}";
    let units: Vec<u16> = text.encode_utf16().collect();
    let from_str: Vec<_> = finder.find_emoji(text).collect();
    let from_units: Vec<_> = finder
        .find_emoji_utf16(&units)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(from_str, from_units);
}

#[test]
fn test_utf16_scan_reports_malformed_input() {
    let finder = finder_over(&[plain("\u{1F4A5}", "collision")]);
    // Collision, then a lone high surrogate.
    let units = [0xD83Du16, 0xDCA5, 0xD83D];
    let mut iter = finder.find_emoji_utf16(&units);
    let first = iter.next().unwrap().unwrap();
    assert_eq!((first.start, first.end), (0, 2));
    assert!(iter.next().unwrap().is_err());
    // Fused after the error.
    assert!(iter.next().is_none());
}

#[test]
fn test_utf16_scan_error_mid_walk_keeps_earlier_terminal() {
    // "AB" registered; "AB" followed by a lone surrogate still matches "AB"
    // before the error is reported.
    let mut finder = EmojiFinder::new();
    finder.add(&[0x41, 0x42], emoji(&plain("AB", "short"))).unwrap();
    let units = [0x41u16, 0x42, 0xD800];
    let mut iter = finder.find_emoji_utf16(&units);
    let first = iter.next().unwrap().unwrap();
    assert_eq!((first.start, first.end), (0, 2));
    assert!(iter.next().unwrap().is_err());
}

#[test]
fn test_registry_group_queries() {
    let registry = EmojiRegistry::builtin();
    let groups = registry.groups();
    assert!(groups.contains(&"smileys-emotion"));
    assert!(groups.contains(&"people-body"));
    let subgroups = registry.subgroups_of("people-body");
    assert!(subgroups.contains(&"family"));
    let family = registry.all_of_subgroup("people-body", "family");
    assert!(!family.is_empty());
    assert!(family.len() <= registry.all_of("people-body").len());
}

#[test]
fn test_registry_alias_lookup() {
    let registry = EmojiRegistry::builtin();
    let heart = registry.by_alias("red-heart").unwrap();
    assert_eq!(heart.as_str(), "\u{2764}\u{FE0F}");
    assert!(registry.by_alias("not-a-real-alias").is_none());
}

#[test]
fn test_all_with_variants_is_duplicate_free() {
    let registry = EmojiRegistry::builtin();
    let all = registry.all_with_variants();
    assert!(all.len() > registry.len());
    let unique: std::collections::HashSet<&str> =
        all.iter().map(|emoji| emoji.as_str()).collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_catalog_builder_accepts_custom_entries() {
    let registry = EmojiRegistry::from_records(&[plain("\u{1F4A5}", "collision")]);
    let boom = registry.emojis().next().unwrap().clone();
    let catalog = EmojiTemplateCatalog::builder(&registry)
        .add_alias("kaboom", boom.clone())
        .add_emoticon("*!*", boom)
        .build();
    assert_eq!(catalog.replace_shortcodes(":kaboom:"), "\u{1F4A5}");
    assert_eq!(catalog.replace_emoticons("*!*"), "\u{1F4A5}");
}

#[test]
fn test_shortcode_with_invalid_tone_name_falls_back_to_base() {
    let engine = crate::Emojis::shared();
    assert_eq!(
        engine.replace_shortcodes(":thumbs-up~sparkly:"),
        "\u{1F44D}"
    );
}
