use std::{
    env,
    path::{Path, PathBuf},
};

/// Switches the process into another working directory until dropped.
///
/// Resolving `Location::Default` reads the process cwd, so tests of that
/// path need a cwd they control. `path()` is the cwd as the OS reports it
/// after the switch (symlinks resolved), which is what a default location
/// resolves to.
///
/// The cwd is process-wide: every test holding a `TempCwd` must be
/// marked `#[serial]`. Panics on failure since it only runs in tests.
pub(crate) struct TempCwd {
    restore_to: PathBuf,
    path: PathBuf,
    _scratch: Option<tempfile::TempDir>,
}

impl TempCwd {
    // Enter a fresh scratch directory, deleted again on drop.
    #[allow(dead_code)]
    pub fn new() -> TempCwd {
        let scratch = tempfile::tempdir().unwrap();
        let mut tcwd = TempCwd::enter(scratch.path());
        tcwd._scratch = Some(scratch);
        tcwd
    }

    // Enter an existing directory owned by the caller.
    #[allow(dead_code)]
    pub fn enter<P: AsRef<Path>>(dir: P) -> TempCwd {
        let restore_to = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();

        TempCwd {
            restore_to,
            path: env::current_dir().unwrap(),
            _scratch: None,
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        // Leave before `_scratch` is removed; fields drop after this runs.
        env::set_current_dir(&self.restore_to).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use serial_test::serial;

    use super::TempCwd;

    #[test]
    #[serial]
    fn scratch_dir_is_entered_and_removed() {
        let before = env::current_dir().unwrap();

        let scratch = {
            let tcwd = TempCwd::new();
            assert_eq!(env::current_dir().unwrap(), tcwd.path());
            assert_ne!(tcwd.path(), before.as_path());
            tcwd.path().to_path_buf()
        };

        assert_eq!(env::current_dir().unwrap(), before);
        assert!(!scratch.exists());
    }

    #[test]
    #[serial]
    fn enter_keeps_callers_dir() {
        let before = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        {
            let tcwd = TempCwd::enter(dir.path());
            assert_eq!(tcwd.path(), fs::canonicalize(dir.path()).unwrap());
        }

        assert_eq!(env::current_dir().unwrap(), before);
        assert!(dir.path().is_dir());
    }
}
