//! Visual reordering.
//!
//! Curing operates on what the reader *sees*, so right-to-left runs are
//! resolved with the Unicode bidirectional algorithm before any translation
//! happens. Paired brackets inside reversed runs are mirrored (UBA L4).
//! Inputs that nest explicit directional formatting beyond the UBA depth
//! limit are rejected up front rather than silently clamped.

use std::ops::Range;

use thiserror::Error;
use unicode_bidi::BidiInfo;

use crate::unicode::mirrored;

/// UBA maximum explicit depth (BD2).
const MAX_DEPTH: usize = 125;

/// Rejection of pathological directional formatting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BidiError {
    /// More unterminated embeddings/overrides than the UBA depth limit.
    #[error("directional embeddings nested deeper than {MAX_DEPTH}")]
    EmbeddingOverflow,
    /// More unterminated isolates than the UBA depth limit.
    #[error("directional isolates nested deeper than {MAX_DEPTH}")]
    IsolateOverflow,
}

/// Yields the text's codepoints in visual order, each paired with its byte
/// range in the original buffer. Left-to-right text comes out unchanged;
/// right-to-left runs are reversed and brackets inside them mirrored.
pub(crate) fn reorder(text: &str) -> Result<Vec<(char, Range<usize>)>, BidiError> {
    check_explicit_depth(text)?;

    let mut out = Vec::with_capacity(text.len());
    let info = BidiInfo::new(text, None);

    for para in &info.paragraphs {
        let (levels, runs) = info.visual_runs(para, para.range.clone());

        for run in runs {
            if levels[run.start].is_rtl() {
                for (i, c) in text[run.clone()].char_indices().rev() {
                    let start = run.start + i;
                    out.push((mirrored(c), start..start + c.len_utf8()));
                }
            } else {
                for (i, c) in text[run.clone()].char_indices() {
                    let start = run.start + i;
                    out.push((c, start..start + c.len_utf8()));
                }
            }
        }
    }

    Ok(out)
}

/// Pre-scan for explicit formatting nested beyond BD2. The counters reset
/// at paragraph separators, matching the algorithm's paragraph isolation.
fn check_explicit_depth(text: &str) -> Result<(), BidiError> {
    let mut embeddings = 0usize;
    let mut isolates = 0usize;

    for c in text.chars() {
        match c {
            '\u{202A}' | '\u{202B}' | '\u{202D}' | '\u{202E}' => {
                embeddings += 1;
                if embeddings > MAX_DEPTH {
                    return Err(BidiError::EmbeddingOverflow);
                }
            }
            '\u{202C}' => embeddings = embeddings.saturating_sub(1),
            '\u{2066}' | '\u{2067}' | '\u{2068}' => {
                isolates += 1;
                if isolates > MAX_DEPTH {
                    return Err(BidiError::IsolateOverflow);
                }
            }
            '\u{2069}' => isolates = isolates.saturating_sub(1),
            '\n' | '\r' | '\u{1C}'..='\u{1E}' | '\u{85}' | '\u{2029}' => {
                embeddings = 0;
                isolates = 0;
            }
            _ => {}
        }
    }

    Ok(())
}
