//! Handles for datasets.

use std::path::{Path, PathBuf};

use crate::{
    create,
    repo::{AnnexRepo, Backend},
    Location, Result,
};

/// A lightweight reference to a dataset on the local file system.
///
/// A `Dataset` is nothing more than a path. Constructing one doesn't check
/// or change anything on disk, so a handle may point at a location where no
/// dataset exists yet. Two handles are equal when their paths are equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dataset {
    path: PathBuf,
}

impl Dataset {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Dataset { path: path.into() }
    }

    /// Return the path of this dataset, exactly as it was given.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Return `true` if a repository with large-file tracking exists at
    /// this dataset's path.
    pub fn is_installed(&self) -> bool {
        AnnexRepo::is_valid_repo(&self.path)
    }

    /// Open the repository backing this dataset.
    pub fn repo(&self) -> Result<AnnexRepo> {
        AnnexRepo::open(&self.path)
    }

    /// Create a dataset at this handle's own path.
    ///
    /// Equivalent to `rsdataset::create(self)`.
    pub fn create(&self) -> Result<Dataset> {
        self.create_at(Location::Default)
    }

    /// Create a dataset at `location`.
    ///
    /// An explicit location takes precedence over this handle's path;
    /// [`Location::Default`] means this handle's path rather than the
    /// current working directory.
    pub fn create_at<L: Into<Location>>(&self, location: L) -> Result<Dataset> {
        create::create(self.bind(location.into()))
    }

    /// Like [`Dataset::create_at`], with an explicit backend.
    pub fn create_at_with<B, L>(&self, backend: &B, location: L) -> Result<Dataset>
    where
        B: Backend + ?Sized,
        L: Into<Location>,
    {
        create::create_with(backend, self.bind(location.into()))
    }

    fn bind(&self, location: Location) -> Location {
        match location {
            Location::Default => Location::Dataset(self.clone()),
            other => other,
        }
    }
}

impl AsRef<Path> for Dataset {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
