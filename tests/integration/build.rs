//! Integration tests for `twhook build`.

use predicates::prelude::*;
use tailwind_hook::test_utils::fixtures::{COMPILED_OUTPUT, FakeCompiler, MARKED_STYLESHEET, PLAIN_STYLESHEET};

use crate::common::{FileAssert, TestProject};

/// Plain stylesheets need no compiler and are copied unchanged.
#[test]
fn test_plain_stylesheet_is_copied_without_compiler() {
    let project = TestProject::new().unwrap();
    project.write_file("src/site.css", PLAIN_STYLESHEET).unwrap();

    let output = project.run_twhook(&["build", "src/site.css"]).unwrap();
    output.assert_success().assert_stdout_contains("Bundled");

    FileAssert::equals(project.project_path().join("dist/site.css"), PLAIN_STYLESHEET);
    assert!(project.intermediate_files("src").is_empty());
}

/// Files outside the stylesheet filter are never compiled, markers or not.
#[cfg(unix)]
#[test]
fn test_non_stylesheet_is_not_compiled() {
    let project = TestProject::new().unwrap();
    let compiler = FakeCompiler::install(&project.project_path().join("node_modules/.bin/tailwindcss"));
    project.write_file("src/notes.txt", MARKED_STYLESHEET).unwrap();

    project.run_twhook(&["build", "src/notes.txt"]).unwrap().assert_success();

    FileAssert::equals(project.project_path().join("dist/notes.txt"), MARKED_STYLESHEET);
    assert_eq!(compiler.invocations(), 0);
}

#[cfg(unix)]
#[test]
fn test_marked_stylesheet_is_compiled_and_intermediate_removed() {
    let project = TestProject::new().unwrap();
    let compiler = FakeCompiler::install(&project.project_path().join("node_modules/.bin/tailwindcss"));
    let input = project.write_file("src/styles/app.css", MARKED_STYLESHEET).unwrap();

    project
        .command()
        .args(["build", "src/styles/app.css", "--outdir", "public"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled").and(predicate::str::contains("Finished 1 stylesheet(s)")));

    FileAssert::equals(project.project_path().join("public/app.css"), COMPILED_OUTPUT);
    FileAssert::not_exists(project.project_path().join("src/styles/app.tmp.css"));
    FileAssert::equals(&input, MARKED_STYLESHEET);

    let temp_output = project.project_path().join("src/styles/app.tmp.css");
    assert_eq!(
        compiler.recorded_args(),
        vec!["-i".to_string(), input.display().to_string(), "-o".to_string(), temp_output.display().to_string()]
    );
}

#[cfg(unix)]
#[test]
fn test_minify_flag_and_config_file_are_passed_to_compiler() {
    let project = TestProject::new().unwrap();
    let compiler = FakeCompiler::install(&project.project_path().join("node_modules/.bin/tailwindcss"));
    let config = project.write_file("tailwind.config.js", "module.exports = {}\n").unwrap();
    project.write_file("packages/web/src/app.css", MARKED_STYLESHEET).unwrap();

    project.run_twhook(&["build", "packages/web/src/app.css", "--minify"]).unwrap().assert_success();

    let args = compiler.recorded_args();
    assert_eq!(args[4..], ["-c".to_string(), config.display().to_string(), "-m".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_mixed_stylesheets_compile_only_marked_ones() {
    let project = TestProject::new().unwrap();
    let compiler = FakeCompiler::install(&project.project_path().join("node_modules/.bin/tailwindcss"));
    project.write_file("src/app.css", MARKED_STYLESHEET).unwrap();
    project.write_file("src/site.css", PLAIN_STYLESHEET).unwrap();
    project.write_file("src/admin.css", MARKED_STYLESHEET).unwrap();

    project.run_twhook(&["build", "src/app.css", "src/site.css", "src/admin.css"]).unwrap().assert_success();

    FileAssert::equals(project.project_path().join("dist/app.css"), COMPILED_OUTPUT);
    FileAssert::equals(project.project_path().join("dist/admin.css"), COMPILED_OUTPUT);
    FileAssert::equals(project.project_path().join("dist/site.css"), PLAIN_STYLESHEET);
    assert_eq!(compiler.invocations(), 2);
    assert!(project.intermediate_files("src").is_empty());
}

#[test]
fn test_missing_compiler_fails_build() {
    let project = TestProject::new().unwrap();
    project.write_file("src/app.css", MARKED_STYLESHEET).unwrap();

    project
        .command()
        .args(["build", "src/app.css"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[plugin tailwind]"))
        .stderr(predicate::str::contains("tailwindcss not found"))
        .stderr(predicate::str::contains("build failed with 1 error(s)"));

    FileAssert::not_exists(project.project_path().join("dist/app.css"));
    assert!(project.intermediate_files("src").is_empty());
}

#[cfg(unix)]
#[test]
fn test_compiler_failure_reports_stderr() {
    let project = TestProject::new().unwrap();
    FakeCompiler::install_failing(
        &project.project_path().join("node_modules/.bin/tailwindcss"),
        "CssSyntaxError: Unclosed block",
    );
    project.write_file("src/app.css", MARKED_STYLESHEET).unwrap();
    project.write_file("src/site.css", PLAIN_STYLESHEET).unwrap();

    let output = project.run_twhook(&["build", "src/app.css", "src/site.css"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("failed to compile stylesheet into")
        .assert_stderr_contains("CssSyntaxError: Unclosed block");

    // The other stylesheet is still bundled
    FileAssert::equals(project.project_path().join("dist/site.css"), PLAIN_STYLESHEET);
    assert!(project.intermediate_files("src").is_empty());
}

#[test]
fn test_missing_stylesheet_fails_build() {
    let project = TestProject::new().unwrap();

    project
        .run_twhook(&["build", "src/missing.css"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("failed to read stylesheet");
}

#[test]
fn test_quiet_build_prints_nothing_on_success() {
    let project = TestProject::new().unwrap();
    project.write_file("site.css", PLAIN_STYLESHEET).unwrap();

    project.command().args(["--quiet", "build", "site.css"]).assert().success().stdout(predicate::str::is_empty());
}
