//! The curing engine.
//!
//! Codepoints are walked in visual order (unless bidi is disabled), each one
//! classified, translated through the confusable table and emitted into the
//! canonical sequence together with the byte range of its source codepoint.
//! Precomposed diacritics are peeled off with an NFD decomposition and the
//! bare base letter is translated in their place.

use std::ops::Range;
use std::sync::LazyLock;

use icu_normalizer::{DecomposingNormalizer, DecomposingNormalizerBorrowed};
use smallvec::SmallVec;
use thiserror::Error;

use crate::bidi::{self, BidiError};
use crate::cured::CuredText;
use crate::options::Options;
use crate::table::{self, Translation};
use crate::unicode::{self, Category};

static NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// Failure to construct a [`CuredText`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CureError {
    /// The input's directional formatting is pathological.
    #[error(transparent)]
    Bidi(#[from] BidiError),
    /// `cure_bytes` input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    Encoding,
    /// An internal invariant broke; never expected, surfaced distinctly
    /// from invalid input so callers can tell the two apart.
    #[error("internal curing invariant violated: {0}")]
    Internal(&'static str),
}

/// Cures `input` into its canonical, maximally-confusable-free form.
///
/// ```
/// let cured = sanitext::cure("vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣", sanitext::Options::default())?;
/// assert!(cured.equals("very funny text"));
/// # Ok::<(), sanitext::CureError>(())
/// ```
pub fn cure(input: &str, options: Options) -> Result<CuredText, CureError> {
    let mut curer = Curer {
        options: &options,
        canonical: Vec::with_capacity(input.len()),
        spans: Vec::with_capacity(input.len()),
    };

    if options.disable_bidi {
        for (i, c) in input.char_indices() {
            curer.cure_codepoint(c, &(i..i + c.len_utf8()));
        }
    } else {
        for (c, span) in bidi::reorder(input)? {
            curer.cure_codepoint(c, &span);
        }
    }

    if curer.canonical.len() != curer.spans.len() {
        return Err(CureError::Internal("offset map desynchronized"));
    }
    if curer.spans.iter().any(|s| s.end > input.len() || s.start > s.end) {
        return Err(CureError::Internal("offset map exceeds source text"));
    }

    Ok(CuredText::from_parts(
        input.to_owned(),
        curer.canonical,
        curer.spans,
        options,
    ))
}

/// [`cure`] over raw bytes; the input is UTF-8-validated first.
pub fn cure_bytes(bytes: &[u8], options: Options) -> Result<CuredText, CureError> {
    cure(validate_utf8(bytes)?, options)
}

#[cfg(feature = "simd")]
fn validate_utf8(bytes: &[u8]) -> Result<&str, CureError> {
    simdutf8::basic::from_utf8(bytes).map_err(|_| CureError::Encoding)
}

#[cfg(not(feature = "simd"))]
fn validate_utf8(bytes: &[u8]) -> Result<&str, CureError> {
    std::str::from_utf8(bytes).map_err(|_| CureError::Encoding)
}

/// Cures a needle into canonical units. Needles are logical-order
/// patterns, so no bidi pass runs and no failure is possible.
pub(crate) fn canonicalize(input: &str, options: &Options) -> Vec<char> {
    let mut curer = Curer {
        options,
        canonical: Vec::with_capacity(input.len()),
        spans: Vec::new(),
    };
    for (i, c) in input.char_indices() {
        curer.cure_codepoint(c, &(i..i + c.len_utf8()));
    }
    curer.canonical
}

struct Curer<'a> {
    options: &'a Options,
    canonical: Vec<char>,
    spans: Vec<Range<usize>>,
}

impl Curer<'_> {
    fn cure_codepoint(&mut self, c: char, span: &Range<usize>) {
        let cp = c as u32;

        if unicode::is_discarded(cp) {
            return;
        }

        // The dotted/dotless i pair folds messily (İ lowercases to i plus a
        // combining dot), so it is resolved before general case folding.
        if unicode::is_turkish_dotted(cp) {
            let unit = match (self.options.retain_turkish, cp) {
                (true, 0x0131) => 'ı',
                (true, 0x0130) if self.options.retain_capitalization => 'İ',
                _ if self.options.retain_capitalization && cp == 0x0130 => 'I',
                _ => 'i',
            };
            self.emit(unit, span);
            return;
        }

        if self.options.retains(Category::of(c)) {
            if self.options.retain_capitalization {
                self.emit(c, span);
            } else {
                for lower in c.to_lowercase() {
                    self.emit(lower, span);
                }
            }
            return;
        }

        // Standalone combining marks are zalgo decoration.
        if unicode::is_combining_mark(cp) {
            return;
        }

        let uppercase = self.options.retain_capitalization && c.is_uppercase();
        if self.options.retain_capitalization && !uppercase {
            self.translate(c, false, span);
        } else {
            // Lookup happens on the folded form; the original casing is
            // restored afterwards when retained.
            for lower in c.to_lowercase() {
                self.translate(lower, uppercase, span);
            }
        }
    }

    fn translate(&mut self, c: char, uppercase: bool, span: &Range<usize>) {
        if !c.is_ascii() {
            let mut buf = [0u8; 4];
            let decomposed: SmallVec<[char; 4]> =
                NFD.normalize(c.encode_utf8(&mut buf)).chars().collect();

            if decomposed.len() > 1
                && decomposed[1..]
                    .iter()
                    .all(|&m| unicode::is_combining_mark(m as u32))
            {
                if self.options.retain_diacritics {
                    self.emit_cased(c, uppercase, span);
                } else {
                    // Re-cure the bare base letter; it may itself be a
                    // confusable (Cyrillic ѓ decomposes to г).
                    self.translate(decomposed[0], uppercase, span);
                }
                return;
            }
        }

        match table::lookup(c as u32) {
            Some(Translation::Character(t)) => self.emit_cased(t, uppercase, span),
            Some(Translation::Text(s)) => {
                for t in s.chars() {
                    self.emit_cased(t, uppercase, span);
                }
            }
            None => self.emit_cased(c, uppercase, span),
        }
    }

    fn emit_cased(&mut self, c: char, uppercase: bool, span: &Range<usize>) {
        if uppercase {
            for u in c.to_uppercase() {
                self.emit(u, span);
            }
        } else {
            self.emit(c, span);
        }
    }

    fn emit(&mut self, c: char, span: &Range<usize>) {
        if self.options.ascii_only && !c.is_ascii() {
            return;
        }
        if self.options.alphanumeric_only && !unicode::is_alphanumeric_unit(c as u32) {
            return;
        }
        self.canonical.push(c);
        self.spans.push(span.clone());
    }
}
