// this_file: crates/mojif/tests/find_emoji.rs

//! Scanning over the bundled catalog.

use mojif::{Emojis, SkinTone};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_scan_mixed_text_reports_utf16_offsets() {
    init_logs();
    let emojis = Emojis::shared();
    let text = "\u{1F9D1}\u{1F3FC}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FE} \u{2764}\u{FE0F}\u{1F4A5}";
    let found: Vec<_> = emojis.find_emoji(text).collect();
    assert_eq!(found.len(), 3);

    assert_eq!((found[0].start, found[0].end), (0, 12));
    let people = emojis.by_alias("people-holding-hands").unwrap();
    let toned = emojis
        .with_skin_tones(people, SkinTone::MediumLight, SkinTone::MediumDark)
        .unwrap();
    assert_eq!(found[0].emoji, toned);

    assert_eq!((found[1].start, found[1].end), (13, 15));
    assert_eq!(&found[1].emoji, emojis.by_alias("red-heart").unwrap());

    assert_eq!((found[2].start, found[2].end), (15, 17));
    assert_eq!(&found[2].emoji, emojis.by_alias("collision").unwrap());
}

#[test]
fn test_longest_match_wins_over_toned_prefix() {
    // The scan passes the terminal for 🧑🏼 (person, medium-light) on its way
    // to the full two-person sequence; only the full sequence is reported.
    let emojis = Emojis::shared();
    let text = "\u{1F9D1}\u{1F3FC}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FE}";
    let found: Vec<_> = emojis.find_emoji(text).collect();
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (0, 12));
}

#[test]
fn test_single_tone_variant_matches_whole() {
    let emojis = Emojis::shared();
    let found: Vec<_> = emojis.find_emoji("\u{1F44D}\u{1F3FD}").collect();
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (0, 4));
    let thumbs = emojis.by_alias("thumbs-up").unwrap();
    let toned = emojis.with_skin_tone(thumbs, SkinTone::Medium).unwrap();
    assert_eq!(found[0].emoji, toned);
}

#[test]
fn test_stray_tone_modifier_is_not_part_of_a_plain_match() {
    // Collision takes no tone, so the modifier after it is plain text.
    let emojis = Emojis::shared();
    let found: Vec<_> = emojis.find_emoji("\u{1F4A5}\u{1F3FD}").collect();
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (0, 2));
    assert_eq!(&found[0].emoji, emojis.by_alias("collision").unwrap());
}

#[test]
fn test_alternate_spelling_scans_to_qualified_emoji() {
    let emojis = Emojis::shared();
    let found: Vec<_> = emojis.find_emoji("\u{2764}").collect();
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (0, 1));
    assert_eq!(&found[0].emoji, emojis.by_alias("red-heart").unwrap());
}

#[test]
fn test_unqualified_tone_literal_scans_back_to_its_variant() {
    let emojis = Emojis::shared();
    let victory = emojis.by_alias("victory-hand").unwrap();
    let toned = emojis.with_skin_tone(victory, SkinTone::Light).unwrap();
    // The generated variant keeps the main form's variation selector.
    assert_eq!(toned.as_str(), "\u{270C}\u{1F3FB}\u{FE0F}");
    for text in ["\u{270C}\u{1F3FB}", "\u{270C}\u{1F3FB}\u{FE0F}"] {
        let found: Vec<_> = emojis.find_emoji(text).collect();
        assert_eq!(found.len(), 1, "{text:?}");
        assert_eq!(found[0].start, 0);
        assert_eq!(found[0].end, text.encode_utf16().count());
        assert_eq!(found[0].emoji, toned);
    }
}

#[test]
fn test_adjacent_emoji_are_separate_matches() {
    let emojis = Emojis::shared();
    let found: Vec<_> = emojis.find_emoji("\u{1F4A5}\u{1F4A5}").collect();
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].start, found[0].end), (0, 2));
    assert_eq!((found[1].start, found[1].end), (2, 4));
}

#[test]
fn test_every_variant_round_trips_through_the_finder() {
    let emojis = Emojis::shared();
    for emoji in emojis.registry().all_with_variants() {
        let text = emoji.as_str();
        let found: Vec<_> = emojis.find_emoji(text).collect();
        assert_eq!(found.len(), 1, "{emoji:?}");
        assert_eq!(found[0].start, 0, "{emoji:?}");
        assert_eq!(found[0].end, text.encode_utf16().count(), "{emoji:?}");
        assert_eq!(found[0].emoji, emoji, "{emoji:?}");
    }
}

#[test]
fn test_utf16_scan_agrees_with_str_scan() {
    let emojis = Emojis::shared();
    let text = "\u{1F9D1}\u{1F3FC}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FE} \u{2764}\u{FE0F}\u{1F4A5}";
    let units: Vec<u16> = text.encode_utf16().collect();
    let from_str: Vec<_> = emojis.find_emoji(text).collect();
    let from_units: Vec<_> = emojis
        .finder()
        .find_emoji_utf16(&units)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(from_str, from_units);
}

#[test]
fn test_registry_size_matches_generated_count() {
    assert_eq!(Emojis::shared().registry().len(), mojif::data::EMOJI_COUNT);
}

#[test]
fn test_shared_engine_is_one_instance() {
    let a = Emojis::shared();
    let b = std::thread::spawn(Emojis::shared).join().unwrap();
    assert!(std::ptr::eq(a, b));
}
