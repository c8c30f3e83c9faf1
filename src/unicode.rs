//! Codepoint range predicates shared by the curing engine, the confusable
//! table and the matcher.
//!
//! Everything here is branch-light `matches!` arithmetic over codepoint
//! ranges so the hot curing loop never touches a hash table for the common
//! classification questions.

/// Codepoints that never survive curing: control characters (line breaks
/// excluded, they delimit bidi paragraphs), the surrogate gap and private
/// use area, variation selectors, zero-width and invisible formatting, and
/// the combining enclosing keycap.
#[inline(always)]
pub(crate) const fn is_discarded(cp: u32) -> bool {
    matches!(cp,
        0x0000..=0x0009 |
        0x000E..=0x001F |
        0x007F..=0x009F |
        0x00AD |
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x2064 |
        0x2066..=0x2069 |
        0x20E3 |
        0xD800..=0xF8FF |
        0xFE00..=0xFE0F |
        0xFEFF |
        0xFFF0..=0xFFFF |
        0xE0000..
    )
}

/// Combining marks: the Mn-heavy blocks plus the Hebrew and Arabic point
/// ranges. Standalone occurrences are zalgo decoration and cure to nothing;
/// the same predicate filters the combining tail of an NFD decomposition.
#[inline(always)]
pub(crate) const fn is_combining_mark(cp: u32) -> bool {
    matches!(cp,
        0x0300..=0x036F |
        0x0483..=0x0489 |
        0x0591..=0x05BD | 0x05BF | 0x05C1..=0x05C2 | 0x05C4..=0x05C5 | 0x05C7 |
        0x0610..=0x061A |
        0x064B..=0x065F | 0x0670 |
        0x06D6..=0x06DC | 0x06DF..=0x06E4 | 0x06E7..=0x06E8 | 0x06EA..=0x06ED |
        0x0711 |
        0x0730..=0x074A |
        0x07EB..=0x07F3 |
        0x0816..=0x0819 | 0x081B..=0x0823 | 0x0825..=0x0827 | 0x0829..=0x082D |
        0x0859..=0x085B |
        0x08D3..=0x08FF |
        0x0E31 | 0x0E34..=0x0E3A | 0x0E47..=0x0E4E |
        0x1AB0..=0x1AFF |
        0x1DC0..=0x1DFF |
        0x20D0..=0x20FF |
        0x2DE0..=0x2DFF |
        0xA66F..=0xA672 | 0xA674..=0xA67D |
        0xFE20..=0xFE2F |
        0x1D165..=0x1D169 | 0x1D16D..=0x1D172 | 0x1D17B..=0x1D182 |
        0x1D185..=0x1D18B | 0x1D1AA..=0x1D1AD |
        0xE0100..=0xE01EF
    )
}

/// The alphanumeric filter unit: ASCII digits, letters and the space.
/// The space survives so multi-word needles keep matching after filtering.
#[inline(always)]
pub(crate) const fn is_alphanumeric_unit(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A | 0x20)
}

/// The two Turkish dotted-i codepoints get their own retention flag because
/// they collide with plain Latin `i` once cured.
#[inline(always)]
pub(crate) const fn is_turkish_dotted(cp: u32) -> bool {
    matches!(cp, 0x0130 | 0x0131)
}

/// Script/category tag consulted by the per-script retention flags.
///
/// Classification is coarse on purpose: it only has to be as fine as the
/// retention configuration, not as fine as Unicode script properties.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Category {
    Other,
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Armenian,
    Gujarati,
    Tamil,
    Thai,
    Lao,
    Burmese,
    Khmer,
    Mongolian,
    Chinese,
    Japanese,
    Korean,
    Braille,
    Emoji,
}

impl Category {
    #[inline(always)]
    pub fn of(c: char) -> Self {
        let cp = c as u32;

        // ASCII is the overwhelmingly common case.
        if cp < 0x80 {
            return Self::Other;
        }

        match cp {
            0x0370..=0x03FF | 0x1F00..=0x1FFF => Self::Greek,
            0x0400..=0x052F | 0x1C80..=0x1C8F | 0xA640..=0xA69F => Self::Cyrillic,
            0x0530..=0x058F | 0xFB13..=0xFB17 => Self::Armenian,
            0x0590..=0x05FF | 0xFB1D..=0xFB4F => Self::Hebrew,
            0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF
            | 0xFE70..=0xFEFE | 0x1EE00..=0x1EEFF => Self::Arabic,
            0x0900..=0x097F | 0xA8E0..=0xA8FF => Self::Devanagari,
            0x0980..=0x09FF => Self::Bengali,
            0x0A80..=0x0AFF => Self::Gujarati,
            0x0B80..=0x0BFF | 0x11FC0..=0x11FFF => Self::Tamil,
            0x0E00..=0x0E7F => Self::Thai,
            0x0E80..=0x0EFF => Self::Lao,
            0x1000..=0x109F | 0xA9E0..=0xA9FF | 0xAA60..=0xAA7F => Self::Burmese,
            0x1780..=0x17FF | 0x19E0..=0x19FF => Self::Khmer,
            0x1800..=0x18AF | 0x11660..=0x1167F => Self::Mongolian,
            0x2800..=0x28FF => Self::Braille,
            // Hangul syllables and jamo.
            0x1100..=0x11FF | 0x3130..=0x318F | 0xA960..=0xA97F | 0xAC00..=0xD7FF => {
                Self::Korean
            }
            // Kana, phonetic extensions, halfwidth forms, kana supplement.
            0x3040..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9D | 0x1B000..=0x1B16F => {
                Self::Japanese
            }
            // Han ideographs, radicals, bopomofo.
            0x2E80..=0x2EFF | 0x2F00..=0x2FDF | 0x3007 | 0x3105..=0x312F
            | 0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x3134F => {
                Self::Chinese
            }
            0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x1F000..=0x1FAFF => Self::Emoji,
            _ => Self::Other,
        }
    }
}

/// Bidi-mirrored counterpart for paired brackets (UBA rule L4).
/// Only consulted inside reversed right-to-left runs.
#[inline(always)]
pub(crate) const fn mirrored(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        '⟨' => '⟩',
        '⟩' => '⟨',
        _ => c,
    }
}
