use std::{
    cell::RefCell,
    io,
    path::{Path, PathBuf},
};

use crate::repo::{Backend, Error, Result};

// A RecordingBackend stands in for git-annex in tests that only care
// about what the dataset layer asks of its backend.
//
// Each call to `create` records the requested path. A backend built with
// `failing` records the path and then returns a permission-denied error,
// which is how a real backend reports an unwritable target.
#[derive(Default)]
pub(crate) struct RecordingBackend {
    created: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingBackend {
    #[allow(dead_code)]
    pub fn new() -> RecordingBackend {
        RecordingBackend::default()
    }

    #[allow(dead_code)]
    pub fn failing() -> RecordingBackend {
        RecordingBackend {
            created: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    // Return every path passed to `create` so far, in call order.
    #[allow(dead_code)]
    pub fn created(&self) -> Vec<PathBuf> {
        self.created.borrow().clone()
    }
}

impl Backend for RecordingBackend {
    fn create(&self, path: &Path) -> Result<()> {
        self.created.borrow_mut().push(path.to_path_buf());

        if self.fail {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot create {}", path.display()),
            )));
        }

        Ok(())
    }
}
