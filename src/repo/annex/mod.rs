//! Repositories managed by the `git` and `git annex` command-line tools.
//!
//! **IMPORTANT NOTE:** Both executables must be installed on the host. Nothing
//! here writes to a `.git` directory directly; all changes are made by
//! running `git` so that the results are exactly what command-line users get.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use super::{command, is_git_repo, Backend, Error, Result};

const DEFAULT_GIT: &str = "git";

/// Implementation of `rsdataset::repo::Backend` that runs `git init`
/// followed by `git annex init`.
///
/// Creating at a path that already holds an annex repository reinitializes
/// it: `git init` is safe to rerun and `git annex init` keeps the existing
/// UUID, so the second call succeeds.
#[derive(Clone, Debug)]
pub struct GitAnnex {
    git: PathBuf,
    description: Option<String>,
}

impl Default for GitAnnex {
    fn default() -> Self {
        GitAnnex {
            git: PathBuf::from(DEFAULT_GIT),
            description: None,
        }
    }
}

impl GitAnnex {
    /// Create a backend that runs `git` from the search path and lets
    /// git-annex pick the repository description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `git` executable.
    pub fn git<P: Into<PathBuf>>(mut self, git: P) -> Self {
        self.git = git.into();
        self
    }

    /// Describe new repositories with `description` rather than git-annex's
    /// default of `user@host:path`.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Return the `git` executable this backend runs.
    pub fn git_program(&self) -> &Path {
        self.git.as_path()
    }

    /// Return `true` if both `git` and its annex extension can be run.
    pub fn is_available(&self) -> bool {
        command::succeeds(&self.git, &["annex", "version", "--raw"])
    }

    /// Open an existing annex repository whose working directory is `work_dir`.
    ///
    /// The repository will run this backend's `git` executable for any
    /// queries made through it.
    pub fn open<P: AsRef<Path>>(&self, work_dir: P) -> Result<AnnexRepo> {
        AnnexRepo::open_with(&self.git, work_dir.as_ref())
    }
}

// Paths and descriptions are user data and may start with `-`, so each one
// follows a `--`. `-C` takes its value as a separate argument and needs none.
impl Backend for GitAnnex {
    fn create(&self, path: &Path) -> Result<()> {
        command::run(
            &self.git,
            &[
                OsStr::new("init"),
                OsStr::new("--quiet"),
                OsStr::new("--"),
                path.as_os_str(),
            ],
        )?;

        let mut args = vec![
            OsStr::new("-C"),
            path.as_os_str(),
            OsStr::new("annex"),
            OsStr::new("init"),
            OsStr::new("--quiet"),
        ];
        if let Some(description) = &self.description {
            args.push(OsStr::new("--"));
            args.push(OsStr::new(description));
        }

        command::run(&self.git, &args)?;
        Ok(())
    }
}

/// An existing git repository with git-annex initialized.
#[derive(Debug)]
pub struct AnnexRepo {
    work_dir: PathBuf,
    git_dir: PathBuf,
    git: PathBuf,
}

impl AnnexRepo {
    /// Open an annex repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory
    /// should exist at this path, and git-annex should have been initialized
    /// in it. Use [`GitAnnex`] to create one if necessary.
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        AnnexRepo::open_with(Path::new(DEFAULT_GIT), work_dir.as_ref())
    }

    fn open_with(git: &Path, work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(".git");
        if !git_dir.is_dir() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        let annex_dir = git_dir.join("annex");
        if !annex_dir.is_dir() {
            return Err(Error::AnnexDirDoesntExist(annex_dir));
        }

        Ok(AnnexRepo {
            work_dir,
            git_dir,
            git: git.to_path_buf(),
        })
    }

    /// Return `true` if `path` is the working directory of a git repository
    /// in which git-annex has been initialized.
    pub fn is_valid_repo<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        is_git_repo(path) && path.join(".git/annex").is_dir()
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the UUID git-annex assigned to this repository.
    pub fn uuid(&self) -> Result<Option<String>> {
        self.config("annex.uuid")
    }

    /// Look up a git config value as seen from this repository.
    ///
    /// Returns `None` if the key isn't set.
    pub fn config(&self, key: &str) -> Result<Option<String>> {
        let args = [
            OsStr::new("-C"),
            self.work_dir.as_os_str(),
            OsStr::new("config"),
            OsStr::new("--get"),
            OsStr::new(key),
        ];

        match command::run(&self.git, &args) {
            Ok(value) => Ok(Some(value)),
            // `git config --get` exits with 1 when the key is missing.
            Err(Error::CommandFailed { code: Some(1), .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
