use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `champa` pointed at a scratch data dir and an unreachable backend
fn champa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("champa").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("CHAMPA_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--base-url")
        .arg("http://127.0.0.1:9");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("admin-products"));
}

#[test]
fn products_show_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jersey Pro Blue"));
}

#[test]
fn added_product_is_kept_between_runs() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .args(["add", "--title", "Team Kit", "--price", "120,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added product"));

    champa(&dir)
        .args(["products", "--search", "Team Kit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Kit"));
}

#[test]
fn add_without_title_fails() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .args(["add", "--title", " ", "--price", "10"])
        .assert()
        .failure();
}

#[test]
fn search_finds_products() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .args(["search", "Storm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basket Pro Storm"));
}

#[test]
fn admin_listing_requires_login() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .arg("admins")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log in"));
}

#[test]
fn logout_without_session_succeeds() {
    let dir = TempDir::new().unwrap();
    champa(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}
