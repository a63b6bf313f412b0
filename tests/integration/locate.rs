//! Integration tests for `twhook locate`.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_locate_prefers_project_local_install() {
    let project = TestProject::new().unwrap();
    let local = project.write_file("node_modules/.bin/tailwindcss", "").unwrap();
    project.write_file("packages/web/tailwindcss", "").unwrap();
    project.write_file("packages/web/src/app.css", "").unwrap();

    project
        .run_twhook(&["locate", "packages/web/src/app.css"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains(&format!("compiler: {}", local.display()))
        .assert_stdout_contains("config:   none");
}

#[test]
fn test_locate_falls_back_to_bare_binary_and_finds_config() {
    let project = TestProject::new().unwrap();
    let bare = project.write_file("tools/tailwindcss", "").unwrap();
    let config = project.write_file("tools/tailwind.config.js", "module.exports = {}\n").unwrap();

    project
        .run_twhook(&["locate", "tools/styles/app.css"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains(&format!("compiler: {}", bare.display()))
        .assert_stdout_contains(&format!("config:   {}", config.display()));
}

#[cfg(unix)]
#[test]
fn test_locate_falls_back_to_search_path() {
    use tailwind_hook::test_utils::fixtures::FakeCompiler;

    let project = TestProject::new().unwrap();
    let bin = project.project_path().join("global-bin");
    let compiler = FakeCompiler::succeeding(&bin);

    project
        .command()
        .args(["locate", "src/app.css"])
        .env("PATH", &bin)
        .assert()
        .success()
        .stdout(predicate::str::contains(compiler.path().display().to_string()));
}

#[test]
fn test_locate_without_compiler_suggests_install() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["locate", "src/app.css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tailwindcss not found"))
        .stderr(predicate::str::contains("npm install -D tailwindcss"));
}
