use assert_cmd::Command;
use std::path::Path;

pub fn triplog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("triplog").unwrap();
    cmd.env_remove("TRIPLOG_ROOT");
    cmd.env_remove("TRIPLOG_DATE_FORMAT");
    cmd.env_remove("TRIPLOG_LOG");
    cmd
}

/// Initialized store with a "japan" journal for 2025-01-10..2025-01-20
#[allow(dead_code)]
pub fn store_with_japan(root: &Path) {
    triplog_cmd().arg("init").arg(root).assert().success();
    triplog_cmd()
        .current_dir(root)
        .args(["new", "Japan", "--start", "2025-01-10", "--end", "2025-01-20"])
        .assert()
        .success();
}
