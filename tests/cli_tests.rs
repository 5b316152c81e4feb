//! End-to-end tests for the `mentions` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DATA: &str = "tests/fixtures/simple.json";

fn mentions() -> Command {
    let mut cmd = Command::cargo_bin("mentions").unwrap();
    // Keep the user's own config file out of the tests
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

mod render_tests {
    use super::*;

    #[test]
    fn test_render_substitutes_values() {
        mentions()
            .args(["render", "--data", DATA, "Hi {{user.name}}, order {{order.id}}"])
            .assert()
            .success()
            .stdout("Hi Alice, order 42\n");
    }

    #[test]
    fn test_render_missing_uses_marker() {
        mentions()
            .args(["render", "--data", DATA, "{{order.coupon}}"])
            .assert()
            .success()
            .stdout("[Not Found]\n");
    }

    #[test]
    fn test_render_custom_default() {
        mentions()
            .args(["render", "--data", DATA, "--default-value", "N/A", "{{nope}}"])
            .assert()
            .success()
            .stdout("N/A\n");
    }

    #[test]
    fn test_render_keep_unresolved() {
        mentions()
            .args(["render", "--data", DATA, "--keep-unresolved", "{{ nope }}"])
            .assert()
            .success()
            .stdout("{{ nope }}\n");
    }

    #[test]
    fn test_render_strict_fails_naming_path() {
        mentions()
            .args(["render", "--data", DATA, "--strict", "{{order.coupon}}"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Path not found: order.coupon"));
    }

    #[test]
    fn test_render_container_as_json() {
        mentions()
            .args(["render", "--data", DATA, "{{items}}"])
            .assert()
            .success()
            .stdout("[\"keyboard\",\"mouse\",\"monitor\"]\n");
    }

    #[test]
    fn test_render_template_from_stdin() {
        mentions()
            .args(["render", "--data", DATA, "-"])
            .write_stdin("City: {{user.address.city}}\n")
            .assert()
            .success()
            .stdout("City: Seattle\n");
    }

    #[test]
    fn test_render_data_from_stdin() {
        mentions()
            .args(["render", "{{a.b}}"])
            .write_stdin(r#"{"a": {"b": "piped"}}"#)
            .assert()
            .success()
            .stdout("piped\n");
    }

    #[test]
    fn test_render_invalid_json() {
        mentions()
            .args(["render", "--data", "tests/fixtures/invalid.json", "{{a}}"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid JSON"));
    }
}

mod complete_tests {
    use super::*;

    #[test]
    fn test_complete_top_level_braces() {
        mentions()
            .args(["complete", "--data", DATA, "{{"])
            .assert()
            .success()
            .stdout("user\norder\nitems\n");
    }

    #[test]
    fn test_complete_nested_prefix() {
        mentions()
            .args(["complete", "--data", DATA, "Hi {{user.ad"])
            .assert()
            .success()
            .stdout("address\n");
    }

    #[test]
    fn test_complete_array_indices() {
        mentions()
            .args(["complete", "--data", DATA, "--trigger", "@", "@items."])
            .assert()
            .success()
            .stdout("0\n1\n2\n");
    }

    #[test]
    fn test_complete_case_sensitive_flag() {
        mentions()
            .args(["complete", "--data", DATA, "--trigger", "@", "@US"])
            .assert()
            .success()
            .stdout("user\n");

        mentions()
            .args(["complete", "--data", DATA, "--trigger", "@", "--case-sensitive", "@US"])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_complete_with_caret() {
        mentions()
            .args(["complete", "--data", DATA, "--trigger", "@", "--caret", "9", "Hello @us World"])
            .assert()
            .success()
            .stdout("user\n");
    }

    #[test]
    fn test_complete_accept_splices() {
        mentions()
            .args([
                "complete", "--data", DATA, "--trigger", "@", "--caret", "9", "--accept", "users",
                "Hello @us World",
            ])
            .assert()
            .success()
            .stdout("Hello @users World\n")
            .stderr(predicate::str::contains("caret: 12"));
    }

    #[test]
    fn test_complete_closed_placeholder_is_empty() {
        mentions()
            .args(["complete", "--data", DATA, "{{user}} "])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_complete_caret_past_end() {
        mentions()
            .args(["complete", "--data", DATA, "--caret", "50", "{{"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("past the end"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_file_sets_trigger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trigger]\nmarker = \"$\"\nclosing = \"\"\n").unwrap();

        mentions()
            .args(["complete", "--data", DATA, "--config"])
            .arg(&path)
            .arg("$or")
            .assert()
            .success()
            .stdout("order\n");
    }

    #[test]
    fn test_config_file_sets_default_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[template]\ndefault_value = \"???\"\n").unwrap();

        mentions()
            .args(["render", "--data", DATA, "--config"])
            .arg(&path)
            .arg("{{nope}}")
            .assert()
            .success()
            .stdout("???\n");
    }

    #[test]
    fn test_invalid_config_marker_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trigger]\nmarker = \"\"\n").unwrap();

        mentions()
            .args(["complete", "--data", DATA, "--config"])
            .arg(&path)
            .arg("@")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Trigger marker must not be empty"));
    }

    #[test]
    fn test_render_ignores_trigger_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trigger]\nmarker = \"\"\n").unwrap();

        mentions()
            .args(["render", "--data", DATA, "--config"])
            .arg(&path)
            .args(["--trigger", "", "{{user.name}}"])
            .assert()
            .success()
            .stdout("Alice\n");
    }

    #[test]
    fn test_missing_config_file_fails() {
        mentions()
            .args(["render", "--data", DATA, "--config", "tests/fixtures/absent.toml", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }
}
