use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gwiki2docbook(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gwiki2docbook");
    // Keep a developer's own config file out of the picture.
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_page_to_stdout() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Kernel.wiki");
    fs::write(&page, "= Kernel =\nThe *scheduler* runs tasks.\n").unwrap();

    let expected = "<article lang=\"\">\n\
        <sect1> <title>Kernel</title>\n\
        <para> The <emphasis role=\"bold\">scheduler</emphasis> runs tasks.\n\
        </para>\n\
        </sect1>\n\
        </article>\n";

    gwiki2docbook(dir.path())
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE article",
        ))
        .stdout(predicate::str::ends_with(expected))
        .stderr(predicate::str::is_empty());
}

#[test]
fn language_flag_sets_root_attribute() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Page.wiki");
    fs::write(&page, "text\n").unwrap();

    gwiki2docbook(dir.path())
        .args(["-l", "ru"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("<article lang=\"ru\">"));
}

#[test]
fn base_url_flag_rewrites_images() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Page.wiki");
    fs::write(&page, "[http://host/wiki/img/board.png]\n").unwrap();

    gwiki2docbook(dir.path())
        .args(["--base-url", "http://host/wiki/"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<graphic fileref=\"file:./img/board.png\"></graphic>",
        ));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Page.wiki");
    fs::write(&page, "text\n").unwrap();
    let config = dir.path().join("wiki.toml");
    fs::write(&config, "language = \"en\"\n").unwrap();

    gwiki2docbook(dir.path())
        .arg("--config")
        .arg(&config)
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("<article lang=\"en\">"));

    gwiki2docbook(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["-l", "ru"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("<article lang=\"ru\">"));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Page.wiki");
    fs::write(&page, "text\n").unwrap();
    let config = dir.path().join("wiki.toml");
    fs::write(&config, "language = [\n").unwrap();

    gwiki2docbook(dir.path())
        .arg("-c")
        .arg(&config)
        .arg(&page)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn missing_page_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("Missing.wiki");

    gwiki2docbook(dir.path())
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to convert wiki pages"))
        .stderr(predicate::str::contains("Missing.wiki"));
}

#[test]
fn no_pages_is_usage_error() {
    let dir = TempDir::new().unwrap();

    gwiki2docbook(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_option_is_usage_error() {
    let dir = TempDir::new().unwrap();

    gwiki2docbook(dir.path())
        .args(["--frobnicate", "page.wiki"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_exits_successfully() {
    let dir = TempDir::new().unwrap();

    gwiki2docbook(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("Page.wiki");
    fs::write(&page, "= A =\n").unwrap();

    gwiki2docbook(dir.path())
        .arg("-v")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("<sect1> <title>A</title>"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}
