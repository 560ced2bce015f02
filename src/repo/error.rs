use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise from rsdataset operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dataset location: {0}")]
    InvalidLocation(String),

    #[error("`{program} {}` failed{}: {stderr}", .args.join(" "), exit_code_suffix(.code))]
    CommandFailed {
        program: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("work dir {} doesn't exist", .0.display())]
    WorkDirDoesntExist(PathBuf),

    #[error("git dir {} doesn't exist", .0.display())]
    GitDirDoesntExist(PathBuf),

    #[error("annex dir {} doesn't exist; is git-annex initialized?", .0.display())]
    AnnexDirDoesntExist(PathBuf),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

/// A specialized `Result` type for rsdataset operations.
pub type Result<T> = std::result::Result<T, Error>;
