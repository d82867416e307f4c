//! End-to-end tests running the `proxyenv` binary.

use std::io::Write;
use std::process::{Command, Output};

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    fn with_config(content: &str) -> Self {
        let sandbox = Self::new();
        let mut file = std::fs::File::create(sandbox.config_path()).expect("create config");
        file.write_all(content.as_bytes()).expect("write config");
        sandbox
    }

    fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Clean environment; config lookup pinned inside the sandbox.
    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_proxyenv"));
        cmd.env_clear()
            .current_dir(self.dir.path())
            .env("PROXYENV_CONFIG", self.config_path());
        cmd
    }
}

fn stdout_of(output: &Output) -> &str {
    assert!(output.status.success(), "exit status: {:?}", output.status);
    std::str::from_utf8(&output.stdout).expect("utf-8 stdout")
}

#[test]
fn no_configuration_prints_single_space() {
    let sandbox = Sandbox::new();
    let output = sandbox.command().output().unwrap();
    assert_eq!(stdout_of(&output), " ");
}

#[test]
fn env_host_without_port_prints_single_space() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("PROXYHOST", "10.0.0.1")
        .env("PROXYPORT", "")
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), " ");
}

#[test]
fn env_host_and_port_print_prefix() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("PROXYHOST", "1.2.3.4")
        .env("PROXYPORT", "3128")
        .output()
        .unwrap();
    assert_eq!(
        stdout_of(&output),
        "env http_proxy=http://1.2.3.4:3128/ https_proxy=http://1.2.3.4:3128/ \
         HTTP_PROXY=http://1.2.3.4:3128/  \n"
    );
}

#[test]
fn flags_override_environment() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("PROXYHOST", "1.2.3.4")
        .env("PROXYPORT", "3128")
        .args(["--port", "8080", "--extended"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_of(&output),
        "env http_proxy=http://1.2.3.4:8080/ https_proxy=http://1.2.3.4:8080/ \
         HTTP_PROXY=http://1.2.3.4:8080/ HTTPS_PROXY=http://1.2.3.4:8080/  \n"
    );
}

#[test]
fn config_file_supplies_values() {
    let sandbox = Sandbox::with_config("[proxy]\nhost = \"proxy.example.com\"\nport = 8080\n");
    let output = sandbox.command().output().unwrap();
    assert!(stdout_of(&output)
        .starts_with("env http_proxy=http://proxy.example.com:8080/ "));
}

#[test]
fn broken_config_file_still_exits_zero() {
    let sandbox = Sandbox::with_config("[proxy\n");
    let output = sandbox.command().output().unwrap();
    assert_eq!(stdout_of(&output), " ");
    assert!(output.stderr.is_empty());
}

#[test]
fn plain_run_ignores_user_config_dir() {
    let sandbox = Sandbox::new();
    let home = sandbox.dir.path();
    for dir in [home.join(".config/proxyenv"), home.join("Library/Application Support/proxyenv")] {
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[proxy]\nhost = \"other.host\"\nport = 9\n")
            .unwrap();
    }

    let output = Command::new(env!("CARGO_BIN_EXE_proxyenv"))
        .env_clear()
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), " ");
}

#[test]
fn plain_run_reads_only_environment() {
    let sandbox = Sandbox::with_config("[proxy]\nhost = \"other.host\"\nport = 9\n");
    let output = Command::new(env!("CARGO_BIN_EXE_proxyenv"))
        .env_clear()
        .current_dir(sandbox.dir.path())
        .env("HOME", sandbox.dir.path())
        .env("PROXYHOST", "1.2.3.4")
        .env("PROXYPORT", "3128")
        .output()
        .unwrap();
    assert!(stdout_of(&output).starts_with("env http_proxy=http://1.2.3.4:3128/ "));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let sandbox = Sandbox::new();
    let run = || {
        sandbox
            .command()
            .env("PROXYHOST", "h")
            .env("PROXYPORT", "1")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
