//! Child process execution.

use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::RealRuntime;
use crate::status;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_impl(&self, program: &Path, args: &[OsString]) -> Result<i32> {
        debug!("Running {:?} with {:?}", program, args);
        let exit = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to execute {}", program.display()))?;
        Ok(exit_code(exit))
    }
}

/// Map a child's exit status to the status this process should report.
fn exit_code(exit: ExitStatus) -> i32 {
    if let Some(code) = exit.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = exit.signal() {
            return status::from_signal(signal);
        }
    }

    status::FAILURE
}
