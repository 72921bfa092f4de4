//! Command helper methods for Test.

use super::fixtures::public_key_fixture;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a travis-encrypt command rooted in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("travis-encrypt").expect("failed to find travis-encrypt binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run an encryption against the fixture public key.
    ///
    /// Supplies a fixed repository slug and `--key-file` so no network is
    /// involved; `args` carries the per-test flags and the optional path.
    pub fn encrypt(&self, args: &[&str]) -> Output {
        let key = public_key_fixture();
        let mut cmd = self.cmd();
        cmd.args(["acme", "widgets"]).arg("--key-file").arg(&key);
        cmd.args(args);
        cmd.output().expect("failed to run travis-encrypt")
    }

    /// Same as `encrypt` but with bytes piped to stdin.
    pub fn encrypt_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let key = public_key_fixture();
        let mut cmd = self.cmd();
        cmd.args(["acme", "widgets"]).arg("--key-file").arg(&key);
        cmd.args(args);
        cmd.write_stdin(stdin);
        cmd.output().expect("failed to run travis-encrypt")
    }
}
