//! Build script that stamps the binary with a git-derived version string.

use std::process::Command;

fn main() {
    // The crate lives two levels below the repository root
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = describe_head().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=GAMEPASS_RELAY_VERSION={version}");
}

/// `git describe` output with any leading `v` removed, or `None` outside a
/// checkout.
fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
