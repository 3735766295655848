use anyhow::{Result, bail};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Settings shared by the commands of one invocation.
pub struct Config<R: Runtime> {
    pub runtime: R,
    /// Directory holding the `pkg-<command>` programs. When unset they are
    /// looked up on `PATH`.
    pub libexec_dir: Option<PathBuf>,
}

impl<R: Runtime> Config<R> {
    /// Validate the settings against the runtime.
    pub fn new(runtime: R, libexec_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = &libexec_dir {
            if !runtime.is_dir(dir) {
                bail!("libexec directory {} does not exist", dir.display());
            }
            debug!("Using libexec directory {:?}", dir);
        }
        Ok(Self {
            runtime,
            libexec_dir,
        })
    }
}
