#![cfg(unix)]

/// Shared helpers for integration tests
use std::fs;
use std::os::unix::fs::PermissionsExt;

use tempfile::TempDir;

/// Write an executable shell script standing in for the adb binary.
///
/// Returns the script's path inside `dir`; the caller keeps the TempDir
/// guard alive for the duration of the test.
pub fn fake_adb(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("adb");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake adb script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("make fake adb executable");
    path.to_string_lossy().into_owned()
}
