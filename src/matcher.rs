//! Fuzzy matching over canonical sequences.
//!
//! Both sides of a comparison are already cured, so the matcher only has to
//! tolerate what curing cannot remove: repeated letters (`heellllo`) and
//! ASCII lookalike classes (`h3` vs `he`). Matches are leftmost-first and
//! non-overlapping; the scan resumes past each hit.

use std::ops::Range;

use crate::table::is_similar;

/// All non-overlapping matches of `needle` in `corpus`, in canonical-unit
/// indices. An empty needle matches nothing.
pub(crate) fn find(corpus: &[char], needle: &[char]) -> Vec<Range<usize>> {
    let mut matches = Vec::new();
    if needle.is_empty() {
        return matches;
    }

    let mut i = 0;
    while i < corpus.len() {
        match attempt(corpus, needle, i) {
            Some(end) => {
                matches.push(i..end);
                i = end;
            }
            None => i += 1,
        }
    }

    matches
}

/// Tries to match `needle` anchored at `corpus[start]`. On success returns
/// the exclusive end index, with trailing repeats of the final needle unit
/// absorbed.
fn attempt(corpus: &[char], needle: &[char], start: usize) -> Option<usize> {
    if !is_similar(corpus[start], needle[0]) {
        return None;
    }

    let mut j = 1;
    let mut k = start + 1;

    while j < needle.len() {
        let &c = corpus.get(k)?;

        if is_similar(c, needle[j]) {
            j += 1;
        } else if !is_similar(c, needle[j - 1]) {
            // Neither the next expected unit nor a repeat of the previous.
            return None;
        }
        k += 1;
    }

    while k < corpus.len() && is_similar(corpus[k], needle[needle.len() - 1]) {
        k += 1;
    }

    Some(k)
}

/// Whether `needle` matches anchored at the *end* of `corpus`. Scans
/// backwards, absorbing repeats of the unit just matched, so a suffix the
/// forward leftmost scan swallowed into an earlier hit is still found.
/// An empty needle matches nothing.
pub(crate) fn matches_suffix(corpus: &[char], needle: &[char]) -> bool {
    let (Some(&tail), Some(&last)) = (corpus.last(), needle.last()) else {
        return false;
    };
    if !is_similar(tail, last) {
        return false;
    }

    let mut j = needle.len() - 1;
    let mut k = corpus.len() - 1;

    while j > 0 {
        if k == 0 {
            return false;
        }
        let c = corpus[k - 1];

        if is_similar(c, needle[j - 1]) {
            j -= 1;
        } else if !is_similar(c, needle[j]) {
            return false;
        }
        k -= 1;
    }

    true
}

/// Sorts `ranges` and transitively merges overlapping or touching ones,
/// in place.
pub(crate) fn merge_ranges(ranges: &mut Vec<Range<usize>>) {
    ranges.sort_unstable_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges.drain(..) {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }

    *ranges = merged;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn find_in(corpus: &str, needle: &str) -> Vec<Range<usize>> {
        find(&chars(corpus), &chars(needle))
    }

    #[test]
    fn exact_matches() {
        assert_eq!(find_in("hello", "hello"), vec![0..5]);
        assert_eq!(find_in("say hello twice hello", "hello"), vec![4..9, 16..21]);
    }

    #[test]
    fn repeated_letters_absorb() {
        assert_eq!(find_in("hhheeeeelllloo", "hello"), vec![0..14]);
        assert_eq!(find_in("wow heellllo", "hello"), vec![4..12]);
        assert_eq!(find_in("helloooo!", "hello"), vec![0..8]);
    }

    #[test]
    fn similarity_classes_match() {
        assert_eq!(find_in("h3", "he"), vec![0..2]);
        assert_eq!(find_in("h311o", "hello"), vec![0..5]);
    }

    #[test]
    fn absorption_does_not_invent_letters() {
        // "eel" has no second "l" to give.
        assert_eq!(find_in("eel", "ell"), vec![]);
        assert_eq!(find_in("h", "he"), vec![]);
        assert_eq!(find_in("ello", "hello"), vec![]);
    }

    #[test]
    fn empty_needle_matches_nothing() {
        assert_eq!(find_in("hello", ""), vec![]);
        assert_eq!(find_in("", ""), vec![]);
    }

    #[test]
    fn adjacent_matches_stay_separate() {
        assert_eq!(find_in("abab", "ab"), vec![0..2, 2..4]);
        assert_eq!(find_in("hellohello", "hello"), vec![0..5, 5..10]);
    }

    #[test]
    fn suffixes_anchor_at_the_end() {
        assert!(matches_suffix(&chars("hahaha"), &chars("haha")));
        assert!(matches_suffix(&chars("ababa"), &chars("aba")));
        assert!(matches_suffix(&chars("haha"), &chars("haha")));
        assert!(matches_suffix(&chars("wow heellllo"), &chars("hello")));
        assert!(matches_suffix(&chars("h3110"), &chars("hello")));
        assert!(!matches_suffix(&chars("ello"), &chars("hello")));
        assert!(!matches_suffix(&chars("haha"), &chars("ab")));
        assert!(!matches_suffix(&chars("hello!"), &chars("hello")));
        assert!(!matches_suffix(&chars("hello"), &chars("")));
        assert!(!matches_suffix(&chars(""), &chars("a")));
    }

    #[test]
    fn merge_overlapping_and_touching() {
        let mut ranges = vec![4..11, 0..5];
        merge_ranges(&mut ranges);
        assert_eq!(ranges, vec![0..11]);

        let mut ranges = vec![0..2, 2..4, 7..9];
        merge_ranges(&mut ranges);
        assert_eq!(ranges, vec![0..4, 7..9]);

        let mut ranges = vec![0..1, 5..6];
        merge_ranges(&mut ranges);
        assert_eq!(ranges, vec![0..1, 5..6]);
    }
}
