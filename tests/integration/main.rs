//! Integration tests for the setup-go binary
//!
//! These exercise the pre-download part of the run (input validation and
//! integration selection), which fails fast without touching the network.

mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn setup_go() -> Command {
        let mut cmd = Command::cargo_bin("setup-go").unwrap();
        // The pipeline engine injects inputs through the environment;
        // start each test from a clean slate.
        cmd.env_remove("version")
            .env_remove("cacheIntegration")
            .env_remove("cacheRepository")
            .env_remove("step_workspace_dir");
        cmd
    }

    #[test]
    fn help_displays() {
        setup_go()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Go toolchain"));
    }

    #[test]
    fn version_displays() {
        setup_go()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("setup-go"));
    }

    #[test]
    fn missing_version_fails() {
        setup_go()
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("version input is required"));
    }

    #[test]
    fn non_semver_version_fails() {
        setup_go()
            .args(["--version", "a.b.c"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "version input must be semver compatible",
            ));
    }

    #[test]
    fn named_integration_of_wrong_type_fails() {
        setup_go()
            .args(["--version", "1.0.0", "--cache-integration", "gh"])
            .env("int_gh_masterName", "GitHub")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("GitHub"));
    }

    #[test]
    fn unknown_named_integration_fails() {
        setup_go()
            .args(["--version", "1.0.0", "--cache-integration", "absent"])
            .env_remove("int_absent_masterName")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("absent"));
    }
}
