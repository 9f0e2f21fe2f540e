use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taxcost(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taxcost").unwrap();
    cmd.env("TAXCOST_CONFIG_DIR", config_dir.path())
        .env_remove("TAXCOST_LOCALE")
        .env_remove("RUST_LOG")
        .env("LC_ALL", "en_US.UTF-8");
    cmd
}

#[test]
fn calc_defaults_to_lowest_bracket() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["calc", "1234.5"])
        .assert()
        .success()
        .stdout("$1,234.50\n");
}

#[test]
fn calc_applies_bracket_rate() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["calc", "1000", "--bracket", "highest"])
        .assert()
        .success()
        .stdout("$550.00\n");

    taxcost(&dir)
        .args(["calc", "100", "-b", "bracket_45000"])
        .assert()
        .success()
        .stdout("$81.00\n");
}

#[test]
fn calc_unparsable_amount_is_zero() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["calc", "abc", "--bracket", "120000"])
        .assert()
        .success()
        .stdout("$0.00\n");
}

#[test]
fn calc_unknown_bracket_uses_highest_rate() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["calc", "1000", "--bracket", "nope"])
        .assert()
        .success()
        .stdout("$550.00\n")
        .stderr(predicate::str::contains("unknown bracket"));
}

#[test]
fn calc_respects_locale_override() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["--locale", "de_DE", "calc", "1000", "--bracket", "highest"])
        .assert()
        .success()
        .stdout("550,00\u{a0}€\n");
}

#[test]
fn calc_uses_locale_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "locale": "en_GB" }"#).unwrap();
    taxcost(&dir)
        .args(["calc", "100", "--bracket", "45000"])
        .assert()
        .success()
        .stdout("£81.00\n");
}

#[test]
fn invalid_locale_override_fails() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["--locale", "zz_ZZ", "calc", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported locale"));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{").unwrap();
    taxcost(&dir)
        .args(["calc", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn brackets_lists_table() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .args(["brackets", "--amount", "1000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Up to $18,200")
                .and(predicate::str::contains("Over $180,000"))
                .and(predicate::str::contains("32.5%"))
                .and(predicate::str::contains("$550.00")),
        );
}

#[test]
fn config_shows_paths_and_locale() {
    let dir = TempDir::new().unwrap();
    taxcost(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("config.json")
                .and(predicate::str::contains("en_US"))
                .and(predicate::str::contains("bracket_18200")),
        );
}
