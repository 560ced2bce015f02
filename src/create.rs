use tracing::info;

use crate::{
    repo::{Backend, GitAnnex},
    Dataset, Location, Result,
};

/// Create a new dataset.
///
/// `location` is where the dataset shall be created. Pass `None` or
/// [`Location::Default`] to create it in the current working directory,
/// a path to create it there, or an existing [`Dataset`] to create it at
/// that handle's path.
///
/// Datasets always come with large-file tracking: the repository is created
/// with `git init` and `git annex init` (see [`GitAnnex`]). Directories
/// leading up to the location are created as needed.
///
/// Any error from the backend is returned as-is. Nothing is cleaned up after
/// a failure.
pub fn create<L: Into<Location>>(location: L) -> Result<Dataset> {
    create_with(&GitAnnex::default(), location)
}

/// Create a new dataset using a specific repository backend.
///
/// Resolution of `location` is identical to [`create`].
pub fn create_with<B, L>(backend: &B, location: L) -> Result<Dataset>
where
    B: Backend + ?Sized,
    L: Into<Location>,
{
    let path = location.into().resolve()?;

    info!(path = %path.display(), "creating a new annex repo");
    backend.create(&path)?;

    Ok(Dataset::new(path))
}
