//! Integration tests for `twhook.toml` and global flags.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_config_file_changes_lookup_names() {
    let project = TestProject::new().unwrap();
    project.write_file("twhook.toml", "local_binary = \"bin/tw\"\nconfig_file = \"tailwind.config.ts\"\n").unwrap();
    let binary = project.write_file("bin/tw", "").unwrap();
    let config = project.write_file("tailwind.config.ts", "export default {}\n").unwrap();

    project
        .run_twhook(&["locate", "src/app.css"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains(&format!("compiler: {}", binary.display()))
        .assert_stdout_contains(&format!("config:   {}", config.display()));
}

#[test]
fn test_explicit_config_path() {
    let project = TestProject::new().unwrap();
    project.write_file("configs/custom.toml", "compiler = \"twc\"\n").unwrap();
    let binary = project.write_file("twc", "").unwrap();

    project
        .run_twhook(&["locate", "app.css", "--config", "configs/custom.toml"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains(&format!("compiler: {}", binary.display()));
}

#[test]
fn test_invalid_config_is_reported() {
    let project = TestProject::new().unwrap();
    project.write_file("twhook.toml", "minfy = true\n").unwrap();

    project
        .command()
        .args(["locate", "app.css"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration in twhook.toml"))
        .stderr(predicate::str::contains("Check the syntax of your twhook.toml"));
}

#[cfg(unix)]
#[test]
fn test_minify_from_config_file() {
    use tailwind_hook::test_utils::fixtures::{FakeCompiler, MARKED_STYLESHEET};

    let project = TestProject::new().unwrap();
    project.write_file("twhook.toml", "minify = true\n").unwrap();
    let compiler = FakeCompiler::install(&project.project_path().join("node_modules/.bin/tailwindcss"));
    project.write_file("app.css", MARKED_STYLESHEET).unwrap();

    project.run_twhook(&["build", "app.css"]).unwrap().assert_success();

    assert_eq!(compiler.recorded_args().last().map(String::as_str), Some("-m"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new().unwrap();

    project.command().args(["--verbose", "--quiet", "locate", "app.css"]).assert().failure().code(2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let project = TestProject::new().unwrap();
    project.write_file("tailwindcss", "").unwrap();

    project
        .command()
        .args(["--verbose", "locate", "app.css"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tailwind_hook"));
}
