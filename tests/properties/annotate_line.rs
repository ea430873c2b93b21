//! Property tests for the annotate line parser.

use proptest::prelude::*;

use cvs_decode::AnnotateLine;

fn revision() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,3}(\\.[0-9]{1,3}){1,3}").unwrap()
}

fn author() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn date() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{2}-[A-Z][a-z]{2}-[0-9]{2}").unwrap()
}

/// Content as servers relay it: anything without a line terminator
fn content() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^\\r\\n]{0,80}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = AnnotateLine::parse(&s);
    }

    /// PROPERTY: A well-formed server line yields back its fields.
    ///
    /// Content may itself contain parentheses; only the first pair counts.
    #[test]
    fn property_well_formed_round_trip(
        rev in revision(),
        pad in 1usize..12,
        user in author(),
        day in date(),
        body in content(),
    ) {
        let line = format!("{rev}{}({user} {day}): {body}", " ".repeat(pad));
        let parsed = AnnotateLine::parse(&line);

        prop_assert!(parsed.is_some());
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.revision, rev);
        prop_assert_eq!(parsed.author, user);
        prop_assert_eq!(parsed.date_string, day);
        prop_assert_eq!(parsed.content, body);
    }

    /// PROPERTY: Lines without an opening parenthesis never parse.
    #[test]
    fn property_no_open_paren_is_malformed(s in "[^(]{0,128}") {
        prop_assert!(AnnotateLine::parse(&s).is_none());
    }

    /// PROPERTY: Malformed input is malformed every time.
    #[test]
    fn property_malformed_is_stable(s in "(?s).{0,128}") {
        let first = AnnotateLine::parse(&s);
        let second = AnnotateLine::parse(&s);
        prop_assert_eq!(first, second);
    }
}
