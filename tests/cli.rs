//! Exit-code behavior of the demo binary.

use assert_cmd::Command;
use std::io::Write;

#[test]
fn fetch_failure_exits_nonzero() {
    // Port 9 (discard) is closed on localhost, so the fetch fails fast with
    // a connection error and the binary must report failure to its caller.
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "base_url = \"http://127.0.0.1:9\"").unwrap();

    Command::cargo_bin("marsgrid")
        .unwrap()
        .env("MARSGRID_CONFIG", config.path())
        .assert()
        .failure();
}
