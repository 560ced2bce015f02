//! Creates and inspects the repositories that back a dataset.
//!
//! ## Design Goals
//!
//! Rsdataset doesn't reimplement version control or large-file storage. Every
//! dataset is a git repository with [git-annex](https://git-annex.branchable.com)
//! initialized, and both are driven through their command-line executables.
//!
//! The [`Backend`] trait is the seam between dataset semantics and that
//! machinery. [`GitAnnex`] is the implementation used in practice; tests
//! substitute their own to observe what the dataset layer asks for.

use std::path::Path;

mod annex;
pub use annex::{AnnexRepo, GitAnnex};

mod command;

mod error;
pub use error::{Error, Result};

/// A struct that implements the `Backend` trait knows how to materialize a
/// repository with large-file tracking on disk.
///
/// Implementations must create any missing directories leading up to `path`.
/// Whether creating at a path that already holds a repository is an error or
/// a reconfiguration is up to the implementation; callers pass its answer
/// through unchanged.
pub trait Backend {
    /// Create a repository with large-file tracking enabled at `path`.
    fn create(&self, path: &Path) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn create(&self, path: &Path) -> Result<()> {
        (**self).create(path)
    }
}

/// Return `true` if `path` is the working directory of a git repository.
///
/// Only the simplest layout is recognized: a `.git` directory directly
/// inside `path`.
pub fn is_git_repo<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().join(".git").is_dir()
}
