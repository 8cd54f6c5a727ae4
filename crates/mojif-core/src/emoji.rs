// this_file: crates/mojif-core/src/emoji.rs

//! The emoji data model.
//!
//! An [`Emoji`] is a cheap clonable handle to one specific rendering of an
//! emoji, either a base form from the catalog or a skin-toned variant derived
//! from one. Equality and hashing follow [`Details`] value semantics, never
//! identity: two handles with identical details compare equal even when they
//! come from different registries.
//!
//! Tone capability is data, not a type hierarchy: tone-capable bases carry a
//! [`ToneTemplate`] and capability checks go through
//! [`Emoji::skin_tone_support`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::codec;

/// A Unicode version as a (major, minor) pair, e.g. `12.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion {
    major: u16,
    minor: u16,
}

impl UnicodeVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub const fn major(self) -> u16 {
        self.major
    }

    pub const fn minor(self) -> u16 {
        self.minor
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The five Fitzpatrick-scale skin-tone modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// The modifier's Unicode code point (U+1F3FB..U+1F3FF).
    pub const fn code_point(self) -> u32 {
        match self {
            SkinTone::Light => 0x1F3FB,
            SkinTone::MediumLight => 0x1F3FC,
            SkinTone::Medium => 0x1F3FD,
            SkinTone::MediumDark => 0x1F3FE,
            SkinTone::Dark => 0x1F3FF,
        }
    }

    /// The modifier character as a string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            SkinTone::Light => "\u{1F3FB}",
            SkinTone::MediumLight => "\u{1F3FC}",
            SkinTone::Medium => "\u{1F3FD}",
            SkinTone::MediumDark => "\u{1F3FE}",
            SkinTone::Dark => "\u{1F3FF}",
        }
    }

    /// The lowercase-hyphenated name used in shortcodes and alias suffixes.
    pub const fn alias(self) -> &'static str {
        match self {
            SkinTone::Light => "light",
            SkinTone::MediumLight => "medium-light",
            SkinTone::Medium => "medium",
            SkinTone::MediumDark => "medium-dark",
            SkinTone::Dark => "dark",
        }
    }

    /// Looks a tone up by its alias, e.g. `"medium-dark"`.
    pub fn from_alias(alias: &str) -> Option<SkinTone> {
        SkinTone::ALL.into_iter().find(|tone| tone.alias() == alias)
    }
}

/// Everything the catalog knows about one emoji rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    /// The literal emoji text, ready to be inserted into a string.
    pub string: String,
    /// Human-readable description, e.g. `"people holding hands"`.
    pub description: String,
    /// Minimum Unicode version that defines this rendering.
    pub unicode_version: UnicodeVersion,
    /// Shortcode aliases; the first is the kebab-cased description.
    pub aliases: Vec<String>,
    /// Emoticon spellings, e.g. `":D"`. Empty for tone variants.
    pub emoticons: Vec<String>,
    /// Width/height of the Noto image asset, or 0 when unavailable.
    pub noto_image_ratio: f32,
    /// Width/height of the Noto animation asset, or 0 when unavailable.
    pub noto_animation_ratio: f32,
}

// Ratios are finite asset measurements, never NaN.
impl Eq for Details {}

impl Hash for Details {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
        self.description.hash(state);
        self.unicode_version.hash(state);
        self.aliases.hash(state);
        self.emoticons.hash(state);
        self.noto_image_ratio.to_bits().hash(state);
        self.noto_animation_ratio.to_bits().hash(state);
    }
}

impl Details {
    pub fn has_noto_image(&self) -> bool {
        self.noto_image_ratio != 0.0
    }

    pub fn has_noto_animation(&self) -> bool {
        self.noto_animation_ratio != 0.0
    }

    /// The suite of Unicode code points of this emoji.
    pub fn code_points(&self) -> Vec<u32> {
        codec::code_points(&self.string)
    }
}

/// Identifies a base emoji within the registry that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmojiId(u32);

impl EmojiId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// How a base emoji accepts skin tones. Insertion positions are zero-based
/// code-point indices into the un-toned text; splicing accounts for code
/// points that span several code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneTemplate {
    /// One tone, inserted into the main string.
    Single { index: usize },
    /// One tone, spliced against the legacy unqualified form: the prefix
    /// comes from `unqualified`, the suffix from the main string, both cut
    /// at `index`.
    SingleUnqualified { unqualified: String, index: usize },
    /// Two tones, both indices relative to the un-toned main string.
    Double { first: usize, second: usize },
    /// Two tones through a distinct ZWJ-joined template with its own
    /// minimum Unicode version; one tone goes into the main string at
    /// `single_index`.
    DoubleZwj {
        single_index: usize,
        template: String,
        template_version: UnicodeVersion,
        first: usize,
        second: usize,
    },
}

/// Tone arity a given emoji supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinToneSupport {
    None,
    Single,
    Double,
}

pub(crate) enum Shape {
    Plain,
    Tonable(ToneTemplate),
    Toned {
        original: Emoji,
        tone1: SkinTone,
        tone2: Option<SkinTone>,
    },
}

pub(crate) struct Inner {
    pub(crate) id: EmojiId,
    pub(crate) details: Details,
    pub(crate) shape: Shape,
}

/// An emoji that can be added into a string.
///
/// ```
/// # use mojif_core::{Emoji, EmojiId, EmojiRecord, ToneRecord};
/// # let record = EmojiRecord {
/// #     string: "\u{1F4A5}", description: "collision", group: "smileys-emotion",
/// #     subgroup: "emotion", unicode_version: (6, 0), aliases: &["collision"],
/// #     emoticons: &[], noto_image_ratio: 1.0, noto_animation_ratio: 1.0,
/// #     alternates: &[], tones: ToneRecord::None,
/// # };
/// # let collision = Emoji::from_record(EmojiId::new(0), &record);
/// let text = format!("Hello, World {collision}!");
/// ```
#[derive(Clone)]
pub struct Emoji {
    inner: Arc<Inner>,
}

impl Emoji {
    /// Materializes a base emoji from a static catalog record.
    pub fn from_record(id: EmojiId, record: &EmojiRecord) -> Emoji {
        let (major, minor) = record.unicode_version;
        let details = Details {
            string: record.string.to_owned(),
            description: record.description.to_owned(),
            unicode_version: UnicodeVersion::new(major, minor),
            aliases: record.aliases.iter().map(|a| (*a).to_owned()).collect(),
            emoticons: record.emoticons.iter().map(|e| (*e).to_owned()).collect(),
            noto_image_ratio: record.noto_image_ratio,
            noto_animation_ratio: record.noto_animation_ratio,
        };
        let shape = match record.tones.to_template() {
            Some(template) => Shape::Tonable(template),
            None => Shape::Plain,
        };
        Emoji {
            inner: Arc::new(Inner { id, details, shape }),
        }
    }

    pub(crate) fn toned(
        id: EmojiId,
        details: Details,
        original: Emoji,
        tone1: SkinTone,
        tone2: Option<SkinTone>,
    ) -> Emoji {
        Emoji {
            inner: Arc::new(Inner {
                id,
                details,
                shape: Shape::Toned {
                    original,
                    tone1,
                    tone2,
                },
            }),
        }
    }

    pub fn details(&self) -> &Details {
        &self.inner.details
    }

    /// The literal emoji text.
    pub fn as_str(&self) -> &str {
        &self.inner.details.string
    }

    /// The id of this emoji's base form within its registry.
    pub fn id(&self) -> EmojiId {
        self.inner.id
    }

    /// The tone arity this emoji accepts. Toned variants accept none.
    pub fn skin_tone_support(&self) -> SkinToneSupport {
        match &self.inner.shape {
            Shape::Plain | Shape::Toned { .. } => SkinToneSupport::None,
            Shape::Tonable(template) => match template {
                ToneTemplate::Single { .. } | ToneTemplate::SingleUnqualified { .. } => {
                    SkinToneSupport::Single
                }
                ToneTemplate::Double { .. } | ToneTemplate::DoubleZwj { .. } => {
                    SkinToneSupport::Double
                }
            },
        }
    }

    /// The tone template of a tone-capable base.
    pub fn tone_template(&self) -> Option<&ToneTemplate> {
        match &self.inner.shape {
            Shape::Tonable(template) => Some(template),
            _ => None,
        }
    }

    /// For a toned variant, the base emoji it was derived from.
    pub fn original(&self) -> Option<&Emoji> {
        match &self.inner.shape {
            Shape::Toned { original, .. } => Some(original),
            _ => None,
        }
    }

    /// The first tone applied to a variant.
    pub fn tone1(&self) -> Option<SkinTone> {
        match &self.inner.shape {
            Shape::Toned { tone1, .. } => Some(*tone1),
            _ => None,
        }
    }

    /// The second tone applied to a two-toned variant.
    pub fn tone2(&self) -> Option<SkinTone> {
        match &self.inner.shape {
            Shape::Toned { tone2, .. } => *tone2,
            _ => None,
        }
    }

    /// Whether two handles point at the same cached instance.
    pub fn ptr_eq(&self, other: &Emoji) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.details == other.inner.details
    }
}

impl Eq for Emoji {}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.details.hash(state);
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Emoji({} {:?})",
            self.inner.details.string, self.inner.details.description
        )
    }
}

/// One entry of the static catalog produced by the offline data pipeline.
///
/// This is the input contract of the whole crate: the pipeline parses the
/// Unicode data files and Noto asset metadata and emits a table of these.
#[derive(Debug, Clone, Copy)]
pub struct EmojiRecord {
    pub string: &'static str,
    pub description: &'static str,
    /// Catalog group, e.g. `"smileys-emotion"`.
    pub group: &'static str,
    /// Catalog subgroup, e.g. `"face-smiling"`.
    pub subgroup: &'static str,
    pub unicode_version: (u16, u16),
    pub aliases: &'static [&'static str],
    pub emoticons: &'static [&'static str],
    pub noto_image_ratio: f32,
    pub noto_animation_ratio: f32,
    /// Alternate (unqualified or minimally-qualified) spellings that scan
    /// back to the same emoji.
    pub alternates: &'static [&'static str],
    pub tones: ToneRecord,
}

/// Static-table form of [`ToneTemplate`].
#[derive(Debug, Clone, Copy)]
pub enum ToneRecord {
    None,
    Single {
        index: usize,
    },
    SingleUnqualified {
        unqualified: &'static str,
        index: usize,
    },
    Double {
        first: usize,
        second: usize,
    },
    DoubleZwj {
        single_index: usize,
        template: &'static str,
        template_version: (u16, u16),
        first: usize,
        second: usize,
    },
}

impl ToneRecord {
    fn to_template(self) -> Option<ToneTemplate> {
        match self {
            ToneRecord::None => None,
            ToneRecord::Single { index } => Some(ToneTemplate::Single { index }),
            ToneRecord::SingleUnqualified { unqualified, index } => {
                Some(ToneTemplate::SingleUnqualified {
                    unqualified: unqualified.to_owned(),
                    index,
                })
            }
            ToneRecord::Double { first, second } => Some(ToneTemplate::Double { first, second }),
            ToneRecord::DoubleZwj {
                single_index,
                template,
                template_version,
                first,
                second,
            } => Some(ToneTemplate::DoubleZwj {
                single_index,
                template: template.to_owned(),
                template_version: UnicodeVersion::new(template_version.0, template_version.1),
                first,
                second,
            }),
        }
    }
}
