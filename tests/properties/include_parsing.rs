//! Property tests for `path[:dest]` include declarations.

use proptest::prelude::*;

use zipbundler::domain::value_objects::parse_include_with_dest;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics and never grows it.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,128}") {
        let (path, dest) = parse_include_with_dest(&raw);
        let rebuilt_len = path.len() + dest.as_ref().map_or(0, |d| d.len() + 1);
        prop_assert!(rebuilt_len <= raw.len());
    }

    /// PROPERTY: a path without a colon is returned unchanged.
    #[test]
    fn property_plain_path_is_untouched(path in relative_path()) {
        prop_assert_eq!(parse_include_with_dest(&path), (path.clone(), None));
    }

    /// PROPERTY: `path:dest` splits into exactly its two halves.
    #[test]
    fn property_destination_splits_on_last_colon(
        path in relative_path().prop_filter("longer than a drive letter", |p| p.len() > 2),
        dest in relative_path(),
    ) {
        let raw = format!("{}:{}", path, dest);
        prop_assert_eq!(parse_include_with_dest(&raw), (path, Some(dest)));
    }

    /// PROPERTY: a Windows drive letter is never mistaken for a separator.
    #[test]
    fn property_drive_letter_is_not_split(
        drive in "[A-Za-z]",
        rest in relative_path(),
    ) {
        let raw = format!("{}:\\{}", drive, rest.replace('/', "\\"));
        let (path, dest) = parse_include_with_dest(&raw);
        prop_assert_eq!(path, raw);
        prop_assert_eq!(dest, None);
    }
}
