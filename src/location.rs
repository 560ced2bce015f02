//! Where a dataset should be created.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{repo::Error, Dataset, Result};

/// The target of a dataset operation.
///
/// Every variant resolves to exactly one concrete path via
/// [`Location::resolve`] or [`Location::resolve_in`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// The current working directory.
    Default,

    /// A path, used as given. Relative paths are not made absolute.
    Path(PathBuf),

    /// The path of an existing dataset handle.
    Dataset(Dataset),
}

impl Default for Location {
    fn default() -> Self {
        Location::Default
    }
}

impl Location {
    /// Resolve to a concrete path, using `cwd` for [`Location::Default`].
    ///
    /// This never touches the file system.
    pub fn resolve_in(self, cwd: &Path) -> PathBuf {
        match self {
            Location::Default => cwd.to_path_buf(),
            Location::Path(path) => path,
            Location::Dataset(dataset) => dataset.into_path(),
        }
    }

    /// Resolve to a concrete path, reading the process's current working
    /// directory only if it is needed.
    ///
    /// An empty path (given directly or through a dataset handle) names no
    /// location and fails with [`Error::InvalidLocation`].
    pub fn resolve(self) -> Result<PathBuf> {
        let path = match self {
            Location::Default => env::current_dir()?,
            other => other.resolve_in(Path::new("")),
        };
        reject_empty(&path)?;
        Ok(path)
    }
}

fn reject_empty(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidLocation(
            "an empty path is not a location".to_string(),
        ));
    }
    Ok(())
}

/// Parses a location given on the command line.
///
/// An empty string doesn't name any location and is rejected here rather
/// than at resolution; omit the argument entirely to mean the current
/// working directory.
impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let path = PathBuf::from(s);
        reject_empty(&path)?;
        Ok(Location::Path(path))
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Location::Path(path.to_path_buf())
    }
}

impl From<&PathBuf> for Location {
    fn from(path: &PathBuf) -> Self {
        Location::Path(path.clone())
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Location::Path(path)
    }
}

impl From<Dataset> for Location {
    fn from(dataset: Dataset) -> Self {
        Location::Dataset(dataset)
    }
}

impl From<&Dataset> for Location {
    fn from(dataset: &Dataset) -> Self {
        Location::Dataset(dataset.clone())
    }
}

impl<T: Into<Location>> From<Option<T>> for Location {
    fn from(location: Option<T>) -> Self {
        location.map_or(Location::Default, Into::into)
    }
}
