//! Integration tests for the readygate binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A fake device tree plus a `.readygate/config.yml` pointing at it.
struct Device {
    temp: TempDir,
}

impl Device {
    fn new(hardware: bool, status_command: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("gnss")).unwrap();
        if hardware {
            fs::create_dir_all(root.join("gnss/gnss0")).unwrap();
        }
        fs::create_dir_all(root.join("rfkill")).unwrap();

        let config = format!(
            r#"
positioning:
  device_class: {root}/gnss
  status_command: "{status_command}"
radio:
  rfkill_class: {root}/rfkill
remediation:
  positioning_command: "true"
  radio_command: "true"
"#,
            root = root.display(),
        );
        fs::create_dir_all(root.join(".readygate")).unwrap();
        fs::write(root.join(".readygate/config.yml"), config).unwrap();
        Self { temp }
    }

    fn with_radio(self, soft: &str, hard: &str) -> Self {
        let switch = self.path().join("rfkill/rfkill0");
        fs::create_dir_all(&switch).unwrap();
        fs::write(switch.join("type"), "bluetooth\n").unwrap();
        fs::write(switch.join("soft"), format!("{}\n", soft)).unwrap();
        fs::write(switch.join("hard"), format!("{}\n", hard)).unwrap();
        self
    }

    fn path(&self) -> &Path {
        self.temp.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("readygate"));
        cmd.current_dir(self.path())
            .env_remove("READYGATE_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("readygate"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Readiness gate"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("readygate"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_succeeds_when_everything_is_enabled() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true").with_radio("0", "0");
    device
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn no_subcommand_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true").with_radio("0", "0");
    device
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("radio enabled"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_fails_when_positioning_is_off() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "false").with_radio("0", "0");
    device
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("positioning disabled"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_fails_without_radio_adapter() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    device
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no radio adapter found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn blocked_radio_is_disabled() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true").with_radio("0", "1");
    device.cmd().arg("check").assert().code(1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn hardware_less_device_ignores_positioning() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(false, "false").with_radio("0", "0");
    device
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no positioning hardware"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_json_reports_blocker() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    let output = device.cmd().args(["check", "--json"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["ready"], false);
    assert_eq!(report["blocker"], "radio");
    assert_eq!(report["radio"]["basis"], "handle_unavailable");
    assert!(report["evaluated_at"].is_string());
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_prompt_still_exits_not_ready() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "false").with_radio("1", "0");
    device
        .cmd()
        .args(["check", "--prompt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("run `readygate check` again"));
    Ok(())
}

#[test]
fn quiet_suppresses_status_output() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(false, "true").with_radio("0", "0");
    device
        .cmd()
        .args(["--quiet", "hardware"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn hardware_reports_presence() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    device
        .cmd()
        .arg("hardware")
        .assert()
        .success()
        .stdout(predicate::str::contains("Positioning hardware present"));
    Ok(())
}

#[test]
fn hardware_reports_absence_with_success() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(false, "true");
    device
        .cmd()
        .arg("hardware")
        .assert()
        .success()
        .stdout(predicate::str::contains("No positioning hardware"));
    Ok(())
}

#[test]
fn config_shows_discovered_file() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    device
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(".readygate/config.yml"))
        .stdout(predicate::str::contains("rfkill_class"));
    Ok(())
}

#[test]
fn config_defaults_without_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("readygate"));
    cmd.current_dir(temp.path())
        .env_remove("READYGATE_CONFIG")
        .arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("/sys/class/rfkill"));
    Ok(())
}

#[test]
fn config_env_var_selects_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("env.yml");
    fs::write(&path, "radio:\n  rfkill_class: /custom/rfkill\n")?;

    let mut cmd = Command::new(cargo_bin("readygate"));
    cmd.current_dir(temp.path())
        .env("READYGATE_CONFIG", &path)
        .arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/custom/rfkill"));
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    device
        .cmd()
        .args(["--config", "does-not-exist.yml", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    let bad = device.path().join("bad.yml");
    fs::write(&bad, "positioning:\n  status_command: \"  \"\n")?;
    device
        .cmd()
        .arg("--config")
        .arg(&bad)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn malformed_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let device = Device::new(true, "true");
    let bad = device.path().join("bad.yml");
    fs::write(&bad, "positioning: [unclosed\n")?;
    device
        .cmd()
        .arg("--config")
        .arg(&bad)
        .arg("hardware")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("readygate"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("readygate"));
    Ok(())
}
