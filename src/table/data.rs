//! Static confusable data.
//!
//! Two layers, consulted in order by [`lookup`](super::lookup):
//! 1. `RANGES`: contiguous codepoint blocks whose translation is arithmetic
//!    (digit blocks, fullwidth forms, enclosed alphanumerics, regional
//!    indicators) or a small indexed string table (roman numerals, squared
//!    words). Sorted by `start` for binary search, non-overlapping.
//! 2. `CONFUSABLES`: a perfect-hash map for scattered homoglyphs that do
//!    not form useful blocks.
//!
//! Every translation targets lowercase ASCII; capitalization is restored by
//! the curing loop when configured.

use phf::phf_map;

pub(crate) struct MappedRange {
    pub start: u32,
    /// Inclusive.
    pub end: u32,
    pub kind: RangeKind,
}

pub(crate) enum RangeKind {
    /// Translate `cp` to `base + (cp - start)`.
    Shift(char),
    /// Every codepoint in the range translates to the same character.
    Single(char),
    /// Index `cp - start` into a string table.
    Texts(&'static [&'static str]),
}

const ONE_TO_TWENTY: [&str; 20] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20",
];

const ONE_TO_TEN: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

const ELEVEN_TO_TWENTY: [&str; 10] =
    ["11", "12", "13", "14", "15", "16", "17", "18", "19", "20"];

const ROMAN: [&str; 16] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "l", "c",
    "d", "m",
];

const SQUARED_WORDS: [&str; 11] =
    ["dj", "cl", "cool", "free", "id", "new", "ng", "ok", "sos", "up!", "vs"];

macro_rules! ranges {
    ($($start:literal..=$end:literal => $kind:expr),* $(,)?) => {
        &[$(MappedRange { start: $start, end: $end, kind: $kind }),*]
    };
}

use RangeKind::{Shift, Single, Texts};

pub(crate) static RANGES: &[MappedRange] = ranges! {
    // Spaces and super/subscript digits.
    0x00A0..=0x00A0 => Single(' '),
    0x00B2..=0x00B3 => Shift('2'),
    0x00B9..=0x00B9 => Single('1'),
    // Decimal digit blocks: Arabic-Indic through Mongolian.
    0x0660..=0x0669 => Shift('0'),
    0x06F0..=0x06F9 => Shift('0'),
    0x0966..=0x096F => Shift('0'),
    0x09E6..=0x09EF => Shift('0'),
    0x0A66..=0x0A6F => Shift('0'),
    0x0AE6..=0x0AEF => Shift('0'),
    0x0B66..=0x0B6F => Shift('0'),
    0x0BE6..=0x0BEF => Shift('0'),
    0x0C66..=0x0C6F => Shift('0'),
    0x0CE6..=0x0CEF => Shift('0'),
    0x0D66..=0x0D6F => Shift('0'),
    0x0E50..=0x0E59 => Shift('0'),
    0x0ED0..=0x0ED9 => Shift('0'),
    0x0F20..=0x0F29 => Shift('0'),
    0x1040..=0x1049 => Shift('0'),
    0x1680..=0x1680 => Single(' '),
    0x17E0..=0x17E9 => Shift('0'),
    0x1810..=0x1819 => Shift('0'),
    // Typographic spaces, dashes and quotes.
    0x2000..=0x200A => Single(' '),
    0x2010..=0x2015 => Single('-'),
    0x2018..=0x201B => Single('\''),
    0x201C..=0x201F => Single('"'),
    0x202F..=0x202F => Single(' '),
    0x205F..=0x205F => Single(' '),
    0x2070..=0x2070 => Single('0'),
    0x2074..=0x2079 => Shift('4'),
    0x2080..=0x2089 => Shift('0'),
    // Roman numerals, both cases.
    0x2160..=0x216F => Texts(&ROMAN),
    0x2170..=0x217F => Texts(&ROMAN),
    // Enclosed alphanumerics.
    0x2460..=0x2473 => Texts(&ONE_TO_TWENTY),
    0x2474..=0x2487 => Texts(&ONE_TO_TWENTY),
    0x2488..=0x249B => Texts(&ONE_TO_TWENTY),
    0x249C..=0x24B5 => Shift('a'),
    0x24B6..=0x24CF => Shift('a'),
    0x24D0..=0x24E9 => Shift('a'),
    0x24EA..=0x24EA => Single('0'),
    0x24EB..=0x24F4 => Texts(&ELEVEN_TO_TWENTY),
    0x24F5..=0x24FE => Texts(&ONE_TO_TEN),
    0x24FF..=0x24FF => Single('0'),
    0x2776..=0x277E => Shift('1'),
    0x2780..=0x2788 => Shift('1'),
    0x278A..=0x2792 => Shift('1'),
    0x3000..=0x3000 => Single(' '),
    // Fullwidth ASCII.
    0xFF01..=0xFF5E => Shift('!'),
    // Enclosed alphanumeric supplement.
    0x1F110..=0x1F129 => Shift('a'),
    0x1F130..=0x1F149 => Shift('a'),
    0x1F150..=0x1F169 => Shift('a'),
    0x1F170..=0x1F189 => Shift('a'),
    0x1F190..=0x1F19A => Texts(&SQUARED_WORDS),
    // Regional indicators.
    0x1F1E6..=0x1F1FF => Shift('a'),
};

/// Scattered homoglyphs. Keys never overlap `RANGES`; values are the
/// lowercase ASCII rendering.
pub(crate) static CONFUSABLES: phf::Map<u32, &'static str> = phf_map! {
    // Latin-1 signs.
    0x00A2u32 => "c", 0x00A3u32 => "e", 0x00A5u32 => "y", 0x00A7u32 => "s",
    0x00A9u32 => "c", 0x00AAu32 => "a", 0x00AEu32 => "r", 0x00B5u32 => "u",
    0x00B6u32 => "p", 0x00BAu32 => "o", 0x00D7u32 => "x", 0x00DFu32 => "b",
    0x00E6u32 => "ae", 0x00F0u32 => "o", 0x00F8u32 => "o", 0x00FEu32 => "p",
    // Latin Extended without an NFD decomposition.
    0x0111u32 => "d", 0x0127u32 => "h", 0x0131u32 => "i", 0x0138u32 => "k",
    0x0140u32 => "l", 0x0142u32 => "l", 0x014Bu32 => "n", 0x0153u32 => "oe",
    0x017Fu32 => "f", 0x0180u32 => "b", 0x0183u32 => "b", 0x0185u32 => "b",
    0x0188u32 => "c", 0x018Cu32 => "d", 0x0192u32 => "f", 0x0195u32 => "h",
    0x0199u32 => "k", 0x019Au32 => "l", 0x019Bu32 => "y", 0x019Eu32 => "n",
    0x01A1u32 => "o", 0x01A5u32 => "p", 0x01ABu32 => "t", 0x01ADu32 => "t",
    0x01B0u32 => "u", 0x01B4u32 => "y", 0x01B6u32 => "z", 0x01BFu32 => "p",
    0x01C0u32 => "l", 0x01C1u32 => "ll", 0x01C3u32 => "!", 0x01DDu32 => "e",
    0x0221u32 => "d", 0x0225u32 => "z", 0x0234u32 => "l", 0x0235u32 => "n",
    0x0236u32 => "t", 0x0237u32 => "j", 0x0239u32 => "q", 0x023Cu32 => "c",
    0x023Fu32 => "s", 0x0240u32 => "z", 0x0247u32 => "e", 0x0249u32 => "j",
    0x024Bu32 => "q", 0x024Du32 => "r", 0x024Fu32 => "y",
    // IPA.
    0x0250u32 => "a", 0x0251u32 => "a", 0x0252u32 => "a", 0x0253u32 => "b",
    0x0254u32 => "c", 0x0255u32 => "c", 0x0256u32 => "d", 0x0257u32 => "d",
    0x0258u32 => "e", 0x0259u32 => "e", 0x025Au32 => "e", 0x025Bu32 => "e",
    0x025Cu32 => "e", 0x025Eu32 => "e", 0x025Fu32 => "j", 0x0260u32 => "g",
    0x0261u32 => "g", 0x0262u32 => "g", 0x0263u32 => "y", 0x0265u32 => "h",
    0x0266u32 => "h", 0x0267u32 => "h", 0x0268u32 => "i", 0x026Au32 => "i",
    0x026Bu32 => "l", 0x026Cu32 => "l", 0x026Du32 => "l", 0x026Fu32 => "w",
    0x0270u32 => "w", 0x0271u32 => "m", 0x0272u32 => "n", 0x0273u32 => "n",
    0x0274u32 => "n", 0x0275u32 => "o", 0x0278u32 => "o", 0x027Cu32 => "r",
    0x027Du32 => "r", 0x027Eu32 => "r", 0x0280u32 => "r", 0x0282u32 => "s",
    0x0288u32 => "t", 0x0289u32 => "u", 0x028Bu32 => "v", 0x028Cu32 => "v",
    0x028Du32 => "m", 0x028Eu32 => "y", 0x0290u32 => "z", 0x0291u32 => "z",
    0x0292u32 => "z", 0x0299u32 => "b", 0x029Cu32 => "h", 0x029Du32 => "j",
    0x029Fu32 => "l", 0x02A0u32 => "q",
    // Modifier letters.
    0x02B0u32 => "h", 0x02B2u32 => "j", 0x02B3u32 => "r", 0x02B7u32 => "w",
    0x02B8u32 => "y",
    // Greek (lowercase; capitals case-fold before lookup).
    0x03B1u32 => "a", 0x03B2u32 => "b", 0x03B3u32 => "y", 0x03B4u32 => "d",
    0x03B5u32 => "e", 0x03B6u32 => "z", 0x03B7u32 => "n", 0x03B8u32 => "o",
    0x03B9u32 => "i", 0x03BAu32 => "k", 0x03BBu32 => "y", 0x03BCu32 => "u",
    0x03BDu32 => "v", 0x03BEu32 => "e", 0x03BFu32 => "o", 0x03C0u32 => "n",
    0x03C1u32 => "p", 0x03C2u32 => "s", 0x03C3u32 => "o", 0x03C4u32 => "t",
    0x03C5u32 => "u", 0x03C6u32 => "o", 0x03C7u32 => "x", 0x03C8u32 => "y",
    0x03C9u32 => "w", 0x03D0u32 => "b", 0x03D1u32 => "o", 0x03D5u32 => "o",
    0x03D6u32 => "w", 0x03DDu32 => "f", 0x03F2u32 => "c", 0x03F3u32 => "j",
    // Cyrillic.
    0x0430u32 => "a", 0x0431u32 => "6", 0x0432u32 => "b", 0x0433u32 => "r",
    0x0434u32 => "d", 0x0435u32 => "e", 0x0436u32 => "x", 0x0437u32 => "3",
    0x0438u32 => "n", 0x043Au32 => "k", 0x043Bu32 => "n", 0x043Cu32 => "m",
    0x043Du32 => "h", 0x043Eu32 => "o", 0x043Fu32 => "n", 0x0440u32 => "p",
    0x0441u32 => "c", 0x0442u32 => "t", 0x0443u32 => "y", 0x0444u32 => "o",
    0x0445u32 => "x", 0x0446u32 => "u", 0x0447u32 => "y", 0x0448u32 => "w",
    0x0449u32 => "w", 0x044Au32 => "b", 0x044Bu32 => "bl", 0x044Cu32 => "b",
    0x044Du32 => "e", 0x044Eu32 => "io", 0x044Fu32 => "r", 0x0452u32 => "h",
    0x0454u32 => "e", 0x0455u32 => "s", 0x0456u32 => "i", 0x0458u32 => "j",
    0x045Bu32 => "h", 0x045Fu32 => "u", 0x0461u32 => "w", 0x0463u32 => "b",
    0x0473u32 => "o", 0x0475u32 => "v", 0x04AFu32 => "y", 0x04BBu32 => "h",
    0x04CFu32 => "i", 0x04E9u32 => "o", 0x0501u32 => "d", 0x051Bu32 => "q",
    0x051Du32 => "w",
    // Armenian.
    0x0561u32 => "w", 0x0563u32 => "q", 0x0566u32 => "q", 0x0570u32 => "h",
    0x0578u32 => "n", 0x057Cu32 => "n", 0x057Du32 => "u", 0x0581u32 => "g",
    0x0584u32 => "f", 0x0585u32 => "o",
    // Hebrew.
    0x05C0u32 => "i", 0x05D0u32 => "x", 0x05D5u32 => "i", 0x05D8u32 => "v",
    0x05DFu32 => "i", 0x05E1u32 => "o",
    // Arabic.
    0x0627u32 => "i", 0x0647u32 => "o", 0x06BEu32 => "o", 0x06C1u32 => "o",
    0x06D5u32 => "o", 0x07C0u32 => "o",
    0xFBA6u32 => "o", 0xFBA7u32 => "o", 0xFBA8u32 => "o", 0xFBA9u32 => "o",
    0xFBAAu32 => "o", 0xFBABu32 => "o", 0xFBACu32 => "o", 0xFBADu32 => "o",
    0xFE8Du32 => "l", 0xFE8Eu32 => "l", 0xFEE9u32 => "o", 0xFEEAu32 => "o",
    0xFEEBu32 => "o", 0xFEECu32 => "o",
    // Georgian.
    0x10E7u32 => "y", 0x10FFu32 => "o",
    // Korean jamo.
    0x1102u32 => "l", 0x1103u32 => "c", 0x3147u32 => "o",
    // Letterlike symbols.
    0x2102u32 => "c", 0x2107u32 => "e", 0x210Au32 => "g", 0x210Bu32 => "h",
    0x210Cu32 => "h", 0x210Du32 => "h", 0x210Eu32 => "h", 0x210Fu32 => "h",
    0x2110u32 => "i", 0x2111u32 => "i", 0x2112u32 => "l", 0x2113u32 => "l",
    0x2115u32 => "n", 0x2116u32 => "no", 0x2117u32 => "p", 0x2118u32 => "p",
    0x2119u32 => "p", 0x211Au32 => "q", 0x211Bu32 => "r", 0x211Cu32 => "r",
    0x211Du32 => "r", 0x211Eu32 => "r", 0x2120u32 => "sm", 0x2121u32 => "tel",
    0x2122u32 => "tm", 0x2124u32 => "z", 0x2126u32 => "o", 0x2128u32 => "z",
    0x212Au32 => "k", 0x212Cu32 => "b", 0x212Du32 => "c", 0x212Eu32 => "e",
    0x212Fu32 => "e", 0x2130u32 => "e", 0x2131u32 => "f", 0x2133u32 => "m",
    0x2134u32 => "o", 0x2135u32 => "x", 0x2139u32 => "i", 0x213Cu32 => "n",
    0x213Du32 => "y", 0x2140u32 => "e", 0x2141u32 => "g", 0x2142u32 => "l",
    0x2143u32 => "l", 0x2144u32 => "y", 0x2145u32 => "d", 0x2146u32 => "d",
    0x2147u32 => "e", 0x2148u32 => "i", 0x2149u32 => "j", 0x214Eu32 => "f",
    // Double punctuation.
    0x203Cu32 => "!!", 0x2049u32 => "!?",
    // Mathematical operators that read as letters.
    0x2200u32 => "a", 0x2203u32 => "e", 0x2204u32 => "e", 0x2205u32 => "o",
    0x2208u32 => "e", 0x220Au32 => "e", 0x2211u32 => "e", 0x2218u32 => "o",
    0x221Au32 => "v", 0x2228u32 => "v", 0x2229u32 => "n", 0x222Au32 => "u",
    0x22A4u32 => "t", 0x22C1u32 => "v", 0x22C2u32 => "n", 0x22C3u32 => "u",
    // APL.
    0x2373u32 => "i", 0x2374u32 => "p", 0x2375u32 => "w", 0x237Au32 => "a",
    // Geometric shapes and dingbats.
    0x25CBu32 => "o", 0x2573u32 => "x", 0x2715u32 => "x", 0x2716u32 => "x",
    0x2717u32 => "x", 0x2718u32 => "x", 0x274Cu32 => "x", 0x2B55u32 => "o",
    0x292Bu32 => "x", 0x292Cu32 => "x",
    0x2753u32 => "?", 0x2754u32 => "?", 0x2755u32 => "!", 0x2757u32 => "!",
    // Currency.
    0x0E3Fu32 => "b", 0x20A3u32 => "f", 0x20A4u32 => "e", 0x20A5u32 => "m",
    0x20A6u32 => "n", 0x20A9u32 => "w", 0x20ACu32 => "e", 0x20ADu32 => "k",
    0x20AEu32 => "t", 0x20B1u32 => "p", 0x20B2u32 => "g", 0x20B3u32 => "a",
    0x20B4u32 => "s", 0x20B5u32 => "c", 0x20BDu32 => "p",
    0xFFE0u32 => "c", 0xFFE1u32 => "e", 0xFFE5u32 => "y", 0xFFE6u32 => "w",
    // Kana lookalikes.
    0x3057u32 => "l", 0x3068u32 => "y", 0x30E1u32 => "x", 0x30E8u32 => "e",
    0x30ECu32 => "v", 0x30EDu32 => "o",
    // Bopomofo.
    0x311Au32 => "y", 0x3125u32 => "l", 0x3129u32 => "u",
    // Han lookalikes.
    0x3007u32 => "o", 0x4E05u32 => "t", 0x4E28u32 => "i", 0x4E42u32 => "x",
    0x4E47u32 => "e", 0x4E59u32 => "z", 0x4E5Au32 => "l", 0x51E0u32 => "n",
    0x5343u32 => "f", 0x5369u32 => "p", 0x56DEu32 => "o", 0x5C38u32 => "p",
    0x5C3Au32 => "r", 0x5C71u32 => "w", 0x5DE5u32 => "i", 0x5DF1u32 => "s",
    // Braille letter patterns.
    0x2800u32 => " ",
    0x2801u32 => "a", 0x2803u32 => "b", 0x2809u32 => "c", 0x2819u32 => "d",
    0x2811u32 => "e", 0x280Bu32 => "f", 0x281Bu32 => "g", 0x2813u32 => "h",
    0x280Au32 => "i", 0x281Au32 => "j", 0x2805u32 => "k", 0x2807u32 => "l",
    0x280Du32 => "m", 0x281Du32 => "n", 0x2815u32 => "o", 0x280Fu32 => "p",
    0x281Fu32 => "q", 0x2817u32 => "r", 0x280Eu32 => "s", 0x281Eu32 => "t",
    0x2825u32 => "u", 0x2827u32 => "v", 0x283Au32 => "w", 0x282Du32 => "x",
    0x283Du32 => "y", 0x2835u32 => "z",
    // Enclosed supplement odds and ends.
    0x1F12Bu32 => "c", 0x1F12Cu32 => "r", 0x1F18Eu32 => "ab", 0x1F51Fu32 => "10",
};

/// Mathematical Greek (5 styled blocks of 58 starting at U+1D6A8): 25
/// capitals with theta symbol spliced after rho, nabla, 25 lowercase with
/// final sigma, then 7 symbol variants.
pub(crate) static MATH_GREEK: [&str; 58] = [
    "a", "b", "r", "d", "e", "z", "h", "o", "i", "k", "a", "m", "n", "e", "o", "n", "p",
    "o", "e", "t", "y", "o", "x", "y", "w", // capitals
    "v", // nabla
    "a", "b", "y", "d", "e", "z", "n", "o", "i", "k", "y", "u", "v", "e", "o", "n", "p",
    "s", "o", "t", "u", "o", "x", "y", "w", // lowercase
    "d", "e", "o", "k", "o", "p", "w", // partial, epsilon, theta, kappa, phi, rho, pi
];

/// ASCII visual-similarity classes for the matcher. Two units are similar
/// when some class contains both. `e` and `l` deliberately share no class.
pub(crate) static SIMILAR: &[&[u8]] = &[
    b"1il|", b"0o", b"2z", b"3e", b"5s", b"6g", b"8b", b"9gq", b"uv",
];
