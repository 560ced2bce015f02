use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Output},
};

use tracing::debug;

use super::{Error, Result};

// Run an external program and return its stdout with the trailing
// newline chomped.
//
// A non-zero exit becomes `Error::CommandFailed`, carrying whatever the
// program wrote to stderr. Failure to spawn the program at all (typically
// because it isn't installed) is reported as `Error::IoError`.
pub(crate) fn run<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<String> {
    let output = spawn(program, args)?;

    if !output.status.success() {
        return Err(Error::CommandFailed {
            program: program.display().to_string(),
            args: lossy_args(args),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    Ok(stdout.trim_end_matches(&['\r', '\n'][..]).to_string())
}

// Run an external program and report only whether it exited successfully.
// Any failure, including failure to spawn, counts as `false`.
pub(crate) fn succeeds<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> bool {
    spawn(program, args)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn spawn<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<Output> {
    debug!(program = %program.display(), args = ?lossy_args(args), "running command");

    let output = Command::new(program).args(args).output()?;

    debug!(
        program = %program.display(),
        status = ?output.status.code(),
        "command finished"
    );

    Ok(output)
}

fn lossy_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .collect()
}
