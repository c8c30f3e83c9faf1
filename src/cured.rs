//! The cured document: original text, its canonical form, and the offset
//! map binding the two.
//!
//! Queries run over canonical units and report results in *original* byte
//! offsets, so a hit on an obfuscated corpus still censors the obfuscated
//! bytes. Mutations rebuild the original buffer and re-cure it, keeping
//! every invariant alive for follow-up queries.

use std::fmt;
use std::ops::Range;

use crate::cure::{self, CureError};
use crate::matcher;
use crate::options::Options;

/// A single fuzzy hit, in original byte offsets (end exclusive), together
/// with the matched original substring.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Match {
    pub range: Range<usize>,
    pub text: String,
}

/// The canonical form of a cured text, for comparison and display of the
/// *normalized* content. Distinct from [`CuredText::render`], which returns
/// the original text.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalForm {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalForm {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A cured text. Produced by [`cure`](crate::cure) /
/// [`cure_bytes`](crate::cure_bytes); owns everything it hands out.
#[derive(Clone)]
pub struct CuredText {
    original: String,
    canonical: Vec<char>,
    spans: Vec<Range<usize>>,
    options: Options,
}

impl CuredText {
    pub(crate) fn from_parts(
        original: String,
        canonical: Vec<char>,
        spans: Vec<Range<usize>>,
        options: Options,
    ) -> Self {
        Self {
            original,
            canonical,
            spans,
            options,
        }
    }

    /// An owned copy of the current original text, for display.
    #[must_use]
    pub fn render(&self) -> String {
        self.original.clone()
    }

    /// An owned copy of the canonical form.
    #[must_use]
    pub fn canonical(&self) -> CanonicalForm {
        CanonicalForm(self.canonical.iter().collect())
    }

    /// All non-overlapping fuzzy occurrences of `needle`, leftmost-first,
    /// as original byte ranges. An empty needle yields no matches.
    #[must_use]
    pub fn find(&self, needle: &str) -> Vec<Match> {
        let needle = cure::canonicalize(needle, &self.options);
        matcher::find(&self.canonical, &needle)
            .into_iter()
            .map(|hit| self.to_original(&hit))
            .collect()
    }

    /// Original byte ranges covered by any of `needles`, with overlapping
    /// or touching ranges merged. Which needle produced which span is lost
    /// by the merge.
    #[must_use]
    pub fn find_multiple<S: AsRef<str>>(&self, needles: &[S]) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = needles
            .iter()
            .flat_map(|needle| self.find(needle.as_ref()))
            .map(|hit| hit.range)
            .collect();
        matcher::merge_ranges(&mut ranges);
        ranges
    }

    /// Whether the whole canonical form fuzzily equals `other`.
    /// Empty equals empty.
    #[must_use]
    pub fn equals(&self, other: &str) -> bool {
        let needle = cure::canonicalize(other, &self.options);
        if needle.is_empty() {
            return self.canonical.is_empty();
        }
        matcher::find(&self.canonical, &needle)
            .first()
            .is_some_and(|hit| hit.start == 0 && hit.end == self.canonical.len())
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let needle = cure::canonicalize(needle, &self.options);
        !matcher::find(&self.canonical, &needle).is_empty()
    }

    #[must_use]
    pub fn starts_with(&self, needle: &str) -> bool {
        let needle = cure::canonicalize(needle, &self.options);
        matcher::find(&self.canonical, &needle)
            .first()
            .is_some_and(|hit| hit.start == 0)
    }

    /// Whether the canonical form fuzzily ends with `needle`. Anchored at
    /// the end, independently of the leftmost scan, so `hahaha` ends with
    /// `haha` even though the leftmost match sits at the front.
    #[must_use]
    pub fn ends_with(&self, needle: &str) -> bool {
        let needle = cure::canonicalize(needle, &self.options);
        matcher::matches_suffix(&self.canonical, &needle)
    }

    /// Overwrites every occurrence of `needle` in the original text with
    /// `fill`, one per censored codepoint, then re-cures.
    pub fn censor(&mut self, needle: &str, fill: char) -> Result<(), CureError> {
        let ranges = self.find(needle).into_iter().map(|hit| hit.range).collect();
        self.rewrite(ranges, |text| {
            std::iter::repeat(fill).take(text.chars().count()).collect()
        })
    }

    /// [`censor`](Self::censor) over the merged matches of all `needles`.
    pub fn censor_multiple<S: AsRef<str>>(
        &mut self,
        needles: &[S],
        fill: char,
    ) -> Result<(), CureError> {
        let ranges = self.find_multiple(needles);
        self.rewrite(ranges, |text| {
            std::iter::repeat(fill).take(text.chars().count()).collect()
        })
    }

    /// Substitutes every occurrence of `needle` in the original text with
    /// `with`, then re-cures.
    pub fn replace(&mut self, needle: &str, with: &str) -> Result<(), CureError> {
        let ranges = self.find(needle).into_iter().map(|hit| hit.range).collect();
        self.rewrite(ranges, |_| with.to_owned())
    }

    /// [`replace`](Self::replace) over the merged matches of all `needles`;
    /// each merged span becomes a single `with`.
    pub fn replace_multiple<S: AsRef<str>>(
        &mut self,
        needles: &[S],
        with: &str,
    ) -> Result<(), CureError> {
        let ranges = self.find_multiple(needles);
        self.rewrite(ranges, |_| with.to_owned())
    }

    fn to_original(&self, hit: &Range<usize>) -> Match {
        let spans = &self.spans[hit.clone()];
        let start = spans.iter().map(|s| s.start).min().unwrap_or(0);
        let end = spans.iter().map(|s| s.end).max().unwrap_or(0);
        Match {
            range: start..end,
            text: self.original[start..end].to_owned(),
        }
    }

    /// Rebuilds the original buffer in one pass, substituting each range,
    /// and re-cures the result. Ranges may arrive unsorted, and hits that
    /// are disjoint in canonical units can still cover overlapping original
    /// bytes when bidi reordering interleaves their source spans; those are
    /// collapsed into one substitution. Touching ranges stay separate.
    fn rewrite(
        &mut self,
        mut ranges: Vec<Range<usize>>,
        replacement: impl Fn(&str) -> String,
    ) -> Result<(), CureError> {
        if ranges.is_empty() {
            return Ok(());
        }
        ranges.sort_unstable_by_key(|r| r.start);

        let mut collapsed: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        for r in ranges.drain(..) {
            match collapsed.last_mut() {
                Some(last) if r.start < last.end => last.end = last.end.max(r.end),
                _ => collapsed.push(r),
            }
        }

        let mut rebuilt = String::with_capacity(self.original.len());
        let mut cursor = 0;
        for r in &collapsed {
            rebuilt.push_str(&self.original[cursor..r.start]);
            rebuilt.push_str(&replacement(&self.original[r.start..r.end]));
            cursor = r.end;
        }
        rebuilt.push_str(&self.original[cursor..]);

        *self = cure::cure(&rebuilt, self.options)?;
        Ok(())
    }
}

impl fmt::Display for CuredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl fmt::Debug for CuredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuredText")
            .field("original", &self.original)
            .field("canonical", &self.canonical().as_str())
            .finish()
    }
}

impl AsRef<str> for CuredText {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl PartialEq<&str> for CuredText {
    fn eq(&self, other: &&str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<String> for CuredText {
    fn eq(&self, other: &String) -> bool {
        self.equals(other)
    }
}
