#[cfg(test)]
mod unit_tests {

    use crate::{CureError, CuredText, Match, Options, cure};

    fn cured(input: &str) -> CuredText {
        cure(input, Options::default()).unwrap()
    }

    #[test]
    fn find_reports_original_byte_offsets() {
        let text = cured("very funny text");
        assert_eq!(
            text.find("funny"),
            vec![Match {
                range: 5..10,
                text: "funny".to_owned(),
            }]
        );
    }

    #[test]
    fn find_is_leftmost_and_non_overlapping() {
        let text = cured("aha aha aha");
        let ranges: Vec<_> = text.find("aha").into_iter().map(|m| m.range).collect();
        assert_eq!(ranges, vec![0..3, 4..7, 8..11]);
    }

    #[test]
    fn find_empty_needle_yields_nothing() {
        assert!(cured("hello").find("").is_empty());
        assert!(cured("").find("").is_empty());
    }

    #[test]
    fn comparison_predicates() {
        let text = cured("vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣");
        assert!(text.equals("very funny text"));
        assert!(text.starts_with("very"));
        assert!(text.ends_with("text"));
        assert!(text.contains("funny"));
        assert!(!text.equals("very funny"));
        assert!(!text.contains("dull"));
    }

    #[test]
    fn equality_is_fuzzy_and_case_insensitive() {
        assert!(cured("HELLO").equals("hello"));
        assert!(cured("heellllo").equals("hello"));
        assert!(cured("h3110").equals("hello"));
        assert!(!cured("eel").equals("ell"));
    }

    #[test]
    fn ends_with_finds_overlapped_suffixes() {
        // The leftmost scan claims "haha" at the front; the suffix is
        // still there.
        assert!(cured("hahaha").ends_with("haha"));
        assert!(cured("ababa").ends_with("aba"));
        assert!(cured("wow heellllo").ends_with("hello"));
        assert!(!cured("haha hi").ends_with("haha"));
        assert!(!cured("hello!").ends_with("hello"));
    }

    #[test]
    fn empty_equals_empty() {
        assert!(cured("").equals(""));
        assert!(!cured("a").equals(""));
        assert!(!cured("").equals("a"));
        // Input that cures to nothing equals empty too.
        assert!(cured("\u{300}\u{301}").equals(""));
    }

    #[test]
    fn canonical_form_is_distinct_from_render() {
        let text = cured("ＨＥＬＬＯ");
        assert_eq!(text.canonical(), "hello");
        assert_eq!(text.render(), "ＨＥＬＬＯ");
        assert_eq!(text.to_string(), "ＨＥＬＬＯ");
        assert_eq!(text.canonical().to_string(), "hello");
        assert_eq!(text.canonical().into_string(), "hello");
    }

    #[test]
    fn partial_eq_routes_through_the_matcher() {
        assert_eq!(cured("ＨＥＬＬＯ"), "hello");
        assert_eq!(cured("heellllo"), "hello".to_owned());
    }

    #[test]
    fn find_multiple_merges_touching_spans() {
        let text = cured("helloh yeah");
        assert_eq!(text.find_multiple(&["hello", "oh yeah"]), vec![0..11]);

        let text = cured("hello and oh yeah");
        assert_eq!(text.find_multiple(&["hello", "oh yeah"]), vec![0..5, 10..17]);
    }

    #[test]
    fn censor_preserves_uncensored_bytes() {
        let mut text = cured("keep this, drop that");
        text.censor("drop that", '#').unwrap();
        assert_eq!(text.render(), "keep this, #########");
    }

    #[test]
    fn censor_counts_codepoints_not_bytes() {
        // The match covers multi-byte codepoints; one fill char each.
        let mut text = cured("say 𝔽𝕌Ňℕｙ things");
        text.censor("funny", '*').unwrap();
        assert_eq!(text.render(), "say ***** things");
    }

    #[test]
    fn replace_substitutes_verbatim() {
        let mut text = cured("good morning");
        text.replace("morning", "night").unwrap();
        assert_eq!(text.render(), "good night");
    }

    #[test]
    fn replace_keeps_adjacent_matches_separate() {
        let mut text = cured("hellohello");
        text.replace("hello", "world").unwrap();
        assert_eq!(text.render(), "worldworld");
    }

    #[test]
    fn mutation_with_no_matches_is_a_no_op() {
        let mut text = cured("untouched");
        text.censor("missing", '*').unwrap();
        text.replace("absent", "x").unwrap();
        assert_eq!(text.render(), "untouched");
    }

    #[test]
    fn mutations_re_cure() {
        let mut text = cured("wow hello wow");
        text.replace("hello", "gＯＯdbye").unwrap();
        // The replacement itself is obfuscated; queries see it cured.
        assert!(text.contains("goodbye"));
        assert_eq!(text.render(), "wow gＯＯdbye wow");
    }

    #[test]
    fn debug_shows_both_layers() {
        let repr = format!("{:?}", cured("Ｈi"));
        assert!(repr.contains("Ｈi"));
        assert!(repr.contains("hi"));
    }

    #[test]
    fn errors_format() {
        assert_eq!(CureError::Encoding.to_string(), "input is not valid UTF-8");
        assert!(
            CureError::Internal("offset map desynchronized")
                .to_string()
                .contains("offset map")
        );
    }
}
