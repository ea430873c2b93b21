//! Property tests for the administrative entry parser.

use proptest::prelude::*;

use cvs_decode::Entry;

fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .:+_-]{0,16}").unwrap()
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = Entry::parse(&s);
    }

    /// PROPERTY: Display reproduces any line that parsed.
    #[test]
    fn property_display_reproduces_line(
        dir in any::<bool>(),
        n in name(),
        rev in field(),
        stamp in field(),
        opts in field(),
        tag in proptest::string::string_regex("[A-Za-z0-9/._-]{0,16}").unwrap(),
    ) {
        let line = format!("{}/{n}/{rev}/{stamp}/{opts}/{tag}", if dir { "D" } else { "" });
        let entry = Entry::parse(&line).unwrap();

        prop_assert_eq!(entry.to_string(), line);
        prop_assert_eq!(entry.name(), n.as_str());
        prop_assert_eq!(entry.is_directory(), dir);
    }

    /// PROPERTY: Revision markers drive the new/removed predicates.
    #[test]
    fn property_revision_predicates(n in name(), rev in "[0-9.]{1,8}") {
        let added = Entry::parse(&format!("/{n}/0///")).unwrap();
        prop_assert!(added.is_new_user_file());

        let removed = Entry::parse(&format!("/{n}/-{rev}///")).unwrap();
        prop_assert!(removed.is_user_file_to_be_removed());
        prop_assert!(!removed.is_new_user_file());
    }
}
