//! Property tests for configuration parsing and validation.

use std::path::Path;

use proptest::prelude::*;

use zipbundler::config::{validate_config, BundlerConfig};

fn package_list() -> impl Strategy<Value = Vec<String>> {
    let package = proptest::string::string_regex("src/[a-z_]{1,10}").unwrap();
    proptest::collection::vec(package, 1..=3)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary TOML never panics the parser or the validator.
    #[test]
    fn property_arbitrary_toml_never_panics(content in "(?s).{0,256}") {
        if let Ok(config) = toml::from_str::<BundlerConfig>(&content) {
            let _ = validate_config(&config, Path::new("."));
        }
    }

    /// PROPERTY: any level outside 0-9 is a warning, never an error.
    #[test]
    fn property_out_of_range_level_only_warns(
        packages in package_list(),
        level in prop_oneof![i64::MIN..0i64, 10i64..i64::MAX],
    ) {
        let mut config = BundlerConfig {
            packages: Some(packages),
            ..Default::default()
        };
        config.options.compression_level = Some(level);

        let report = validate_config(&config, Path::new("."));
        prop_assert!(report.is_valid());
        prop_assert!(!report.passes(true));
    }

    /// PROPERTY: the output path always lands under the base directory
    /// when only a name is configured.
    #[test]
    fn property_output_name_stays_under_base(name in "[a-z][a-z0-9_]{0,12}") {
        let mut config = BundlerConfig::default();
        config.output.name = Some(name.clone());

        let output = config.output_path(Path::new("/project"));
        prop_assert!(output.starts_with("/project"));
        let expected = format!("{}.pyz", name);
        prop_assert_eq!(output.file_name().and_then(|f| f.to_str()), Some(expected.as_str()));
    }
}
