use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gitsecret(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitsecret").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("none.yaml"));
    cmd
}

#[test]
fn test_create_https_export() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .args(["create", "podinfo-auth", "--url", "https://github.com/org/repo"])
        .args(["-u", "git", "-p", "token", "--export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("username: git"))
        .stdout(predicate::str::contains("password: token"))
        .stdout(predicate::str::contains("namespace: flux-system"))
        .stdout(predicate::str::contains("creationTimestamp").not());
}

#[test]
fn test_create_writes_manifest() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("clusters");

    gitsecret(&dir)
        .args(["create", "podinfo-auth", "--url", "https://github.com/org/repo"])
        .args(["-u", "git", "-p", "token"])
        .arg("--target-path")
        .arg(&target)
        .assert()
        .success();

    let written = std::fs::read_to_string(target.join("flux-system").join("secret.yaml")).unwrap();
    assert!(written.starts_with("---\napiVersion: v1\nkind: Secret\n"));
}

#[test]
fn test_create_https_requires_credentials() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .args(["create", "podinfo-auth", "--url", "https://github.com/org/repo", "--export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("username and password are required"));
}

#[test]
fn test_create_unsupported_scheme() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .args(["create", "podinfo-auth", "--url", "ftp://example.com/repo", "--export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_create_unsupported_algorithm() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .args(["create", "podinfo-auth", "--url", "ssh://git@github.com/org/repo"])
        .args(["--ssh-key-algorithm", "dsa", "--export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported public key algorithm: dsa"));
}

#[test]
fn test_config_prints_defaults() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace: flux-system"))
        .stdout(predicate::str::contains("manifest_file: secret.yaml"));
}

#[test]
fn test_config_prints_single_key() {
    let dir = TempDir::new().unwrap();

    gitsecret(&dir)
        .args(["config", "log.level"])
        .env("GITSECRET_LOG__LEVEL", "INFO")
        .assert()
        .success()
        .stdout("INFO\n");

    gitsecret(&dir)
        .args(["config", "no.such.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration value at 'no.such.key'"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "namespace: apps\n").unwrap();

    Command::cargo_bin("gitsecret")
        .unwrap()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["create", "podinfo-auth", "--url", "https://github.com/org/repo"])
        .args(["-u", "git", "-p", "token", "--export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace: apps"));
}

#[test]
fn test_version() {
    Command::cargo_bin("gitsecret")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
