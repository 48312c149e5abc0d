mod common;

use common::*;

#[test]
fn list_prints_archive_names_in_order() {
    let env = TestEnv::new();
    write_app_package(&env);

    let result = env.run(&["list", "src/app"]);
    assert!(result.success, "{}", result.combined_output());

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines, vec!["app/__init__.py", "app/cli.py", "app/utils.py"]);
}

#[test]
fn list_count_honours_excludes() {
    let env = TestEnv::new();
    write_app_package(&env);

    let result = env.run(&["list", "src/app", "--count", "--exclude", "**/cli.py"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout.trim(), "2");
}

#[test]
fn list_tree_draws_connectors() {
    let env = TestEnv::new();
    write_app_package(&env);

    let result = env.run(&["list", "src/app", "--tree"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("app"), "{}", result.stdout);
    assert!(result.stdout.contains("└── utils.py"), "{}", result.stdout);
}

#[test]
fn list_tree_and_count_conflict() {
    let env = TestEnv::new();
    let result = env.run(&["list", "src/app", "--tree", "--count"]);
    assert!(!result.success);
}
