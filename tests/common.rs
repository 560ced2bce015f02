use std::process::Command as StdCommand;

use assert_cmd::Command;

// Return `true` if the host can run `git annex`. Tests that need it
// should return early (and so pass vacuously) when it can't.
#[allow(dead_code)]
pub fn annex_available() -> bool {
    let available = StdCommand::new("git")
        .args(&["annex", "version", "--raw"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    if !available {
        eprintln!("git-annex is not available; skipping test");
    }

    available
}

// Build a command for the rsdataset binary with a fixed git identity,
// since git-annex commits to its own branch during `init`.
pub fn rsdataset() -> Command {
    let mut cmd = Command::cargo_bin("rsdataset").unwrap();
    cmd.env("GIT_AUTHOR_NAME", "rsdataset tests")
        .env("GIT_AUTHOR_EMAIL", "rsdataset@example.com")
        .env("GIT_COMMITTER_NAME", "rsdataset tests")
        .env("GIT_COMMITTER_EMAIL", "rsdataset@example.com")
        .env_remove("RSDATASET_GIT")
        .env_remove("RSDATASET_DESCRIPTION")
        .env_remove("RUST_LOG");
    cmd
}

// Read the line git-annex keeps about the repository at `path` in its
// uuid log, which includes the repository's description.
#[allow(dead_code)]
pub fn uuid_log_entry(path: &std::path::Path) -> String {
    let git = |args: &[&str]| {
        let output = StdCommand::new("git")
            .current_dir(path)
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap()
    };

    let uuid = git(&["config", "--get", "annex.uuid"]);
    let uuid = uuid.trim_end();

    git(&["cat-file", "-p", "git-annex:uuid.log"])
        .lines()
        .find(|line| line.starts_with(uuid))
        .unwrap_or_else(|| panic!("uuid {} not in uuid.log", uuid))
        .to_string()
}
