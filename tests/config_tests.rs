//! Configuration system tests
//!
//! Tests configuration loading, validation, and environment overrides
//! through the `config validate` command.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for configuration testing
struct ConfigFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl ConfigFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Self { _temp_dir: temp_dir, config_path }
    }

    fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    fn path(&self) -> &str {
        self.config_path.to_str().unwrap()
    }
}

fn validate_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("reddit-persona").unwrap();
    cmd.env_remove("REDDIT_CLIENT_ID");
    cmd.env_remove("REDDIT_CLIENT_SECRET");
    cmd.arg("config").arg("validate");
    cmd
}

// ─────────────────────────────────────────────────────────────────
// Valid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_minimal_config() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]

[output]

[logging]
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().success();
}

#[test]
fn test_full_config() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]
client_id = "abc123"
client_secret = "shhh"
user_agent = "reddit-persona/0.2 (integration test)"
item_limit = 25
request_timeout_secs = 10

[output]
dir = "/tmp/personas"
snippet_limit = 3
snippet_max_chars = 100

[logging]
level = "debug"
max_files = 3
json_format = false
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().success();
}

#[test]
fn test_empty_config_uses_defaults() {
    let fixture = ConfigFixture::new();
    fixture.write_config("");

    validate_cmd().arg("--config").arg(fixture.path()).assert().success();
}

// ─────────────────────────────────────────────────────────────────
// Invalid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_toml_syntax() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[reddit\nitem_limit = ");

    validate_cmd().arg("--config").arg(fixture.path()).assert().failure();
}

#[test]
fn test_item_limit_zero_rejected() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]
item_limit = 0
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().failure();
}

#[test]
fn test_item_limit_over_api_maximum_rejected() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]
item_limit = 250
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().failure();
}

#[test]
fn test_invalid_log_level_rejected() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[logging]
level = "verbose"
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().failure();
}

#[test]
fn test_empty_user_agent_rejected() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]
user_agent = ""
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().failure();
}

#[test]
fn test_unknown_keys_are_ignored() {
    // Forward compatibility: extra keys do not break loading
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[reddit]
future_option = true
"#,
    );

    validate_cmd().arg("--config").arg(fixture.path()).assert().success();
}
