use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with a clean color environment
fn signpost_cmd() -> Command {
    let mut cmd = Command::cargo_bin("signpost").expect("Failed to find signpost binary");
    cmd.env_remove("NO_COLOR").env_remove("SIGNPOST_COLOR");
    cmd
}

#[test]
fn test_cli_success_plain() {
    signpost_cmd()
        .args(["--no-color", "success", "deployed", "api", "to", "staging"])
        .assert()
        .success()
        .stdout("--> deployed: api to staging\n");
}

#[test]
fn test_cli_fail_colored() {
    signpost_cmd()
        .args(["fail", "build", "core"])
        .assert()
        .success()
        .stdout("--> \x1b[31mbuild\x1b[m: \x1b[33mcore\x1b[m\n");
}

#[test]
fn test_cli_info_does_not_color_first_segment() {
    signpost_cmd()
        .args(["info", "checking", "deps"])
        .assert()
        .success()
        .stdout("--> checking: \x1b[33mdeps\x1b[m\n");
}

#[test]
fn test_cli_no_segments_prints_nothing() {
    signpost_cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_no_color_env() {
    signpost_cmd()
        .env("NO_COLOR", "1")
        .args(["ok", "done"])
        .assert()
        .success()
        .stdout("--> done\n");
}

#[test]
fn test_cli_signpost_color_overrides_no_color_env() {
    signpost_cmd()
        .env("NO_COLOR", "1")
        .env("SIGNPOST_COLOR", "always")
        .args(["ok", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32mdone\x1b[m"));
}

#[test]
fn test_cli_invalid_signpost_color() {
    signpost_cmd()
        .env("SIGNPOST_COLOR", "sometimes")
        .args(["info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color choice 'sometimes'"));
}

#[test]
fn test_cli_say_with_tone() {
    signpost_cmd()
        .args(["say", "--tone", "fail", "--no-color", "oops"])
        .assert()
        .success()
        .stdout("--> oops\n");
}

#[test]
fn test_cli_say_rejects_unknown_tone() {
    signpost_cmd()
        .args(["say", "--tone", "warn", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tone 'warn'"));
}

#[test]
fn test_cli_requires_subcommand() {
    signpost_cmd().assert().failure();
}
