mod common;

use common::*;

#[test]
fn version_prints_package_version() {
    let env = TestEnv::new();
    let result = env.run(&["version"]);

    assert!(result.success);
    assert!(
        result
            .stdout
            .starts_with(&format!("zipbundler {}", env!("CARGO_PKG_VERSION"))),
        "{}",
        result.stdout
    );
}
