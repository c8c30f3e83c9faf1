mod prop_tests {
    use crate::{Options, cure};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cure_never_panics(s in ".{0,300}") {
            let _ = cure(&s, Options::default());
            let _ = cure(&s, Options::PURE_HOMOGLYPH);
            let _ = cure(&s, Options::default().retain_capitalization().disable_bidi());
        }

        #[test]
        fn cure_is_deterministic(s in ".{0,300}") {
            let a = cure(&s, Options::default());
            let b = cure(&s, Options::default());
            match (a, b) {
                (Ok(a), Ok(b)) => {
                    let (a, b) = (a.canonical(), b.canonical());
                    prop_assert_eq!(a, b.as_str());
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "determinism violated"),
            }
        }

        #[test]
        fn lowercase_ascii_is_a_fixed_point(s in "[a-z0-9 ]{0,200}") {
            let canonical = cure(&s, Options::default()).unwrap().canonical();
            prop_assert_eq!(canonical.as_str(), s.as_str());
        }

        #[test]
        fn curing_is_idempotent(s in ".{0,200}") {
            // Logical order both times: re-curing a reordered RTL canonical
            // would legitimately reorder it again.
            let opts = Options::default().disable_bidi();
            let once = cure(&s, opts).unwrap().canonical();
            let twice = cure(once.as_str(), opts).unwrap().canonical();
            prop_assert_eq!(once, twice.as_str());
        }

        #[test]
        fn ascii_only_filter_holds(s in ".{0,200}") {
            if let Ok(cured) = cure(&s, Options::default().ascii_only()) {
                prop_assert!(cured.canonical().as_str().is_ascii());
            }
        }

        #[test]
        fn alphanumeric_only_filter_holds(s in ".{0,200}") {
            if let Ok(cured) = cure(&s, Options::default().alphanumeric_only()) {
                prop_assert!(cured.canonical().as_str().chars().all(
                    |c| c.is_ascii_alphanumeric() || c == ' '
                ));
            }
        }

        #[test]
        fn options_bits_round_trip(bits in any::<u32>()) {
            let opts = Options::from_bits(bits);
            prop_assert_eq!(Options::from_bits(opts.bits()), opts);
            prop_assert_eq!(opts.bits() & !0x01FF_FFFF, 0);
        }

        #[test]
        fn match_offsets_index_the_original(
            corpus in "[a-zＡ-Ｚ𝔞-𝔷 ]{0,80}",
            needle in "[a-z]{1,4}",
        ) {
            let cured = cure(&corpus, Options::default()).unwrap();
            let rendered = cured.render();
            for m in cured.find(&needle) {
                prop_assert!(m.range.start <= m.range.end);
                prop_assert!(m.range.end <= rendered.len());
                prop_assert!(rendered.is_char_boundary(m.range.start));
                prop_assert!(rendered.is_char_boundary(m.range.end));
                prop_assert_eq!(m.text.as_str(), &rendered[m.range.clone()]);
            }
        }

        #[test]
        fn merged_ranges_are_disjoint_and_sorted(
            corpus in "[a-c ]{0,60}",
            needles in proptest::collection::vec("[a-c]{1,3}", 1..4),
        ) {
            let cured = cure(&corpus, Options::default()).unwrap();
            let ranges = cured.find_multiple(&needles);
            for pair in ranges.windows(2) {
                // Strictly apart: anything touching would have merged.
                prop_assert!(pair[0].end < pair[1].start);
            }
        }

        #[test]
        fn censoring_removes_the_needle(
            corpus in "[a-f ]{0,60}",
            needle in "[a-f]{2,4}",
        ) {
            let mut cured = cure(&corpus, Options::default()).unwrap();
            cured.censor(&needle, '*').unwrap();
            prop_assert!(!cured.contains(&needle));
        }
    }
}
