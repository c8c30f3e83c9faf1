//! Curing configuration.
//!
//! `Options` is a plain struct of named booleans with chainable `const`
//! builder methods. The `u32` bit layout only exists at the boundary
//! (`from_bits`/`bits`) for callers that persist or transmit a configuration;
//! inside the crate everything reads the named fields.

use crate::unicode::Category;

macro_rules! options {
    ($($(#[$attr:meta])* $bit:literal => $name:ident),* $(,)?) => {
        /// Behavior switches for [`cure`](crate::cure).
        ///
        /// The default (all flags off, also available as
        /// [`Options::FORMATTING`]) cures maximally: lowercased output, bidi
        /// reordering applied, every known confusable translated.
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
        pub struct Options {
            $($(#[$attr])* pub $name: bool,)*
        }

        impl Options {
            /// Builds an `Options` from its boundary bit-set form.
            /// Unknown bits are ignored.
            #[must_use]
            pub const fn from_bits(bits: u32) -> Self {
                Self {
                    $($name: bits & (1 << $bit) != 0,)*
                }
            }

            /// Serializes to the boundary bit-set form.
            #[must_use]
            pub const fn bits(self) -> u32 {
                let mut out = 0;
                $(if self.$name { out |= 1 << $bit; })*
                out
            }

            $(
                $(#[$attr])*
                #[must_use]
                pub const fn $name(mut self) -> Self {
                    self.$name = true;
                    self
                }
            )*
        }
    };
}

options! {
    /// Keep the original casing in the canonical form. Matching stays
    /// case-insensitive either way.
    0 => retain_capitalization,
    /// Skip visual (bidirectional) reordering and cure in logical order.
    1 => disable_bidi,
    /// Keep precomposed letters with diacritics instead of stripping them
    /// down to their base letter.
    2 => retain_diacritics,
    /// Keep Greek codepoints untranslated.
    3 => retain_greek,
    /// Keep Cyrillic codepoints untranslated.
    4 => retain_cyrillic,
    /// Keep Hebrew codepoints untranslated.
    5 => retain_hebrew,
    /// Keep Arabic codepoints untranslated.
    6 => retain_arabic,
    /// Keep Devanagari codepoints untranslated.
    7 => retain_devanagari,
    /// Keep Bengali codepoints untranslated.
    8 => retain_bengali,
    /// Keep Armenian codepoints untranslated.
    9 => retain_armenian,
    /// Keep Gujarati codepoints untranslated.
    10 => retain_gujarati,
    /// Keep Tamil codepoints untranslated.
    11 => retain_tamil,
    /// Keep Thai codepoints untranslated.
    12 => retain_thai,
    /// Keep Lao codepoints untranslated.
    13 => retain_lao,
    /// Keep Burmese codepoints untranslated.
    14 => retain_burmese,
    /// Keep Khmer codepoints untranslated.
    15 => retain_khmer,
    /// Keep Mongolian codepoints untranslated.
    16 => retain_mongolian,
    /// Keep Han ideographs and bopomofo untranslated.
    17 => retain_chinese,
    /// Keep kana untranslated.
    18 => retain_japanese,
    /// Keep Hangul untranslated.
    19 => retain_korean,
    /// Keep Braille patterns untranslated.
    20 => retain_braille,
    /// Keep emoji untranslated instead of spelling them out.
    21 => retain_emojis,
    /// Keep the Turkish dotted/dotless i pair distinct from Latin `i`.
    22 => retain_turkish,
    /// Drop every non-ASCII unit from the canonical form.
    23 => ascii_only,
    /// Drop every unit outside `[0-9a-zA-Z ]` from the canonical form.
    24 => alphanumeric_only,
}

impl Options {
    /// Maximal curing. Identical to `Options::default()`; provided as a
    /// named preset for boundary callers.
    pub const FORMATTING: Self = Self::from_bits(0);

    /// Cure only structural homoglyphs: diacritics and all foreign scripts
    /// are retained, so visually-honest text in another script passes
    /// through while lookalike trickery is still flattened.
    pub const PURE_HOMOGLYPH: Self = Self::from_bits(0x005F_FFFC);

    /// Whether codepoints of `category` are exempt from translation.
    #[inline]
    pub(crate) fn retains(&self, category: Category) -> bool {
        match category {
            Category::Other => false,
            Category::Greek => self.retain_greek,
            Category::Cyrillic => self.retain_cyrillic,
            Category::Hebrew => self.retain_hebrew,
            Category::Arabic => self.retain_arabic,
            Category::Devanagari => self.retain_devanagari,
            Category::Bengali => self.retain_bengali,
            Category::Armenian => self.retain_armenian,
            Category::Gujarati => self.retain_gujarati,
            Category::Tamil => self.retain_tamil,
            Category::Thai => self.retain_thai,
            Category::Lao => self.retain_lao,
            Category::Burmese => self.retain_burmese,
            Category::Khmer => self.retain_khmer,
            Category::Mongolian => self.retain_mongolian,
            Category::Chinese => self.retain_chinese,
            Category::Japanese => self.retain_japanese,
            Category::Korean => self.retain_korean,
            Category::Braille => self.retain_braille,
            Category::Emoji => self.retain_emojis,
        }
    }
}
