//! Confusable table lookup.
//!
//! The table answers one question: what does this codepoint translate to
//! once every visual disguise is stripped? Mathematical alphanumerics are
//! decoded arithmetically, contiguous blocks by binary search over
//! [`data::RANGES`], and everything else through the perfect-hash map.

mod data;

/// The canonical rendering of a single codepoint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Translation {
    Character(char),
    Text(&'static str),
}

/// Looks up the confusable translation for `cp`. `None` means the
/// codepoint is not a known confusable and passes through untouched.
pub(crate) fn lookup(cp: u32) -> Option<Translation> {
    if let 0x1D400..=0x1D7FF = cp {
        return math_alphanumeric(cp);
    }

    let idx = data::RANGES.partition_point(|r| r.end < cp);
    if let Some(range) = data::RANGES.get(idx)
        && range.start <= cp
    {
        let offset = cp - range.start;
        return match range.kind {
            data::RangeKind::Shift(base) => {
                char::from_u32(base as u32 + offset).map(Translation::Character)
            }
            data::RangeKind::Single(c) => Some(Translation::Character(c)),
            data::RangeKind::Texts(texts) => {
                texts.get(offset as usize).copied().map(Translation::Text)
            }
        };
    }

    data::CONFUSABLES.get(&cp).copied().map(Translation::Text)
}

/// Mathematical alphanumeric symbols (U+1D400..U+1D7FF): 13 styled Latin
/// alphabets, 5 styled Greek alphabets, 5 styled digit runs. All decode
/// arithmetically; reserved holes fall through as unmapped.
fn math_alphanumeric(cp: u32) -> Option<Translation> {
    match cp {
        // Styled Latin: blocks of 52 (26 capitals then 26 smalls), so the
        // letter index is simply the offset mod 26.
        0x1D400..=0x1D6A3 => char::from_u32(b'a' as u32 + (cp - 0x1D400) % 26)
            .map(Translation::Character),
        // Dotless i and j.
        0x1D6A4 => Some(Translation::Character('i')),
        0x1D6A5 => Some(Translation::Character('j')),
        // Styled Greek: blocks of 58.
        0x1D6A8..=0x1D7C9 => Some(Translation::Text(
            data::MATH_GREEK[((cp - 0x1D6A8) % 58) as usize],
        )),
        // Bold digamma.
        0x1D7CA..=0x1D7CB => Some(Translation::Text("f")),
        // Styled digits: blocks of 10.
        0x1D7CE..=0x1D7FF => char::from_u32(b'0' as u32 + (cp - 0x1D7CE) % 10)
            .map(Translation::Character),
        _ => None,
    }
}

/// Whether two canonical units count as equal for matching: identical, or
/// members of the same ASCII visual-similarity class.
#[inline]
pub(crate) fn is_similar(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    if !a.is_ascii() || !b.is_ascii() {
        // Retained-capitalization canonical forms may hold non-ASCII
        // capitals; matching still folds case.
        return a.to_lowercase().eq(b.to_lowercase());
    }
    let (a, b) = (a.to_ascii_lowercase() as u8, b.to_ascii_lowercase() as u8);
    if a == b {
        return true;
    }
    data::SIMILAR
        .iter()
        .any(|class| class.contains(&a) && class.contains(&b))
}
