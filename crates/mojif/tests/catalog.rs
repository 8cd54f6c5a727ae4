// this_file: crates/mojif/tests/catalog.rs

//! Shortcode and emoticon substitution over the bundled catalog.

use mojif::Emojis;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_replace_plain_shortcode() {
    init_logs();
    let emojis = Emojis::shared();
    assert_eq!(emojis.replace_shortcodes(":collision:"), "\u{1F4A5}");
    assert_eq!(
        emojis.replace_shortcodes("boom :collision: boom"),
        "boom \u{1F4A5} boom"
    );
}

#[test]
fn test_replace_shortcode_by_secondary_alias() {
    let emojis = Emojis::shared();
    assert_eq!(emojis.replace_shortcodes(":boom:"), "\u{1F4A5}");
    assert_eq!(emojis.replace_shortcodes(":heart:"), "\u{2764}\u{FE0F}");
}

#[test]
fn test_replace_single_tone_shortcode() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.replace_shortcodes(":thumbs-up~medium:"),
        "\u{1F44D}\u{1F3FD}"
    );
}

#[test]
fn test_replace_double_tone_shortcode() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.replace_shortcodes(":people-holding-hands~medium-light,medium-dark:"),
        "\u{1F9D1}\u{1F3FC}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FE}"
    );
}

#[test]
fn test_unknown_alias_is_left_alone() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.replace_shortcodes(":not-a-real-alias:"),
        ":not-a-real-alias:"
    );
    // Aliases are lowercase; lookups are case-sensitive.
    assert_eq!(emojis.replace_shortcodes(":COLLISION:"), ":COLLISION:");
}

#[test]
fn test_unsupported_tone_arity_is_left_alone() {
    let emojis = Emojis::shared();
    // Collision takes no tone at all.
    assert_eq!(
        emojis.replace_shortcodes(":collision~light:"),
        ":collision~light:"
    );
    // Thumbs up takes one tone, not two.
    assert_eq!(
        emojis.replace_shortcodes(":thumbs-up~light,dark:"),
        ":thumbs-up~light,dark:"
    );
}

#[test]
fn test_unknown_tone_name_falls_back_to_base() {
    let emojis = Emojis::shared();
    assert_eq!(emojis.replace_shortcodes(":thumbs-up~sparkly:"), "\u{1F44D}");
}

#[test]
fn test_replace_emoticons() {
    let emojis = Emojis::shared();
    assert_eq!(emojis.replace_emoticons("<3"), "\u{2764}\u{FE0F}");
    assert_eq!(emojis.replace_emoticons("nice :D"), "nice \u{1F600}");
    assert_eq!(emojis.replace_emoticons("also =D"), "also \u{1F600}");
    assert_eq!(emojis.replace_emoticons("no emoticon"), "no emoticon");
}

#[test]
fn test_replace_runs_shortcodes_then_emoticons() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.replace("my <3 goes :collision: :D!"),
        "my \u{2764}\u{FE0F} goes \u{1F4A5} \u{1F600}!"
    );
}

#[test]
fn test_replace_full_sentence() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.replace(
            "When I see :people-holding-hands~medium-light,medium-dark:, my <3 goes :collision: :D!"
        ),
        "When I see \u{1F9D1}\u{1F3FC}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FE}, \
         my \u{2764}\u{FE0F} goes \u{1F4A5} \u{1F600}!"
    );
}

#[test]
fn test_alias_map_covers_the_whole_catalog() {
    let emojis = Emojis::shared();
    assert_eq!(
        emojis.catalog().alias_map().len(),
        mojif::data::ALIAS_COUNT
    );
    assert_eq!(
        emojis.catalog().emoticon_map().len(),
        mojif::data::EMOTICON_COUNT
    );
}
