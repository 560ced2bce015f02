//! Rsdataset manages datasets: directories of data kept under version
//! control, with large files stored through git-annex rather than in git
//! history.
//!
//! The entry point is [`create`], which turns a location into a dataset:
//!
//! ```no_run
//! let ds = rsdataset::create("scans/2024")?;
//! assert!(ds.is_installed());
//! # Ok::<(), rsdataset::Error>(())
//! ```
//!
//! The library logs through [`tracing`] and never installs a subscriber of
//! its own; that is left to the application.

mod create;
pub use create::{create, create_with};

mod dataset;
pub use dataset::Dataset;

mod location;
pub use location::Location;

pub mod repo;
pub use repo::{Error, Result};
