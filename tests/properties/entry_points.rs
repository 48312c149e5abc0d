//! Property tests for entry point parsing and generated startup code.

use proptest::prelude::*;

use zipbundler::domain::value_objects::{wrap_main_guard, EntryPoint};

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,10}").unwrap()
}

fn module_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(identifier(), 1..=4).prop_map(|parts| parts.join("."))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,64}") {
        let _ = raw.parse::<EntryPoint>();
    }

    /// PROPERTY: `module:function` is accepted and the code calls the function.
    #[test]
    fn property_function_entry_is_called(module in module_path(), function in identifier()) {
        let raw = format!("{}:{}", module, function);
        let entry: EntryPoint = raw.parse().unwrap();
        prop_assert_eq!(&entry.module, &module);

        let code = entry.to_code();
        let import = format!("from {} import {}", module, function);
        let call = format!("{}()", function);
        prop_assert!(code.contains(&import));
        prop_assert!(code.contains(&call));
    }

    /// PROPERTY: every line of guarded code is indented under the guard.
    #[test]
    fn property_main_guard_indents_every_line(module in module_path()) {
        let entry: EntryPoint = module.parse().unwrap();
        let wrapped = wrap_main_guard(&entry.to_code());
        let mut lines = wrapped.lines();
        prop_assert_eq!(lines.next(), Some("if __name__ == '__main__':"));
        for line in lines.filter(|l| !l.is_empty()) {
            prop_assert!(line.starts_with("    "), "unindented line: {:?}", line);
        }
    }
}
