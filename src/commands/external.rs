use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use super::{Command, config::Config};
use crate::{PROGRAM, catalog::Catalog, console::Console, runtime::Runtime, status};

/// A subcommand implemented by a separate `pkg-<name>` program.
///
/// The program receives the subcommand's arguments unchanged and its exit
/// status is returned as-is.
pub struct ExternalCommand<R: Runtime> {
    name: &'static str,
    synopsis: &'static str,
    config: Arc<Config<R>>,
}

impl<R: Runtime> ExternalCommand<R> {
    pub fn new(name: &'static str, synopsis: &'static str, config: Arc<Config<R>>) -> Self {
        Self {
            name,
            synopsis,
            config,
        }
    }

    /// File name of the implementing program, e.g. `pkg-add`.
    pub fn program_name(&self) -> String {
        format!("{}-{}{}", PROGRAM, self.name, std::env::consts::EXE_SUFFIX)
    }

    /// Find the implementing program in the libexec directory, or on `PATH`
    /// when none is configured.
    #[tracing::instrument(skip(self), fields(command = self.name))]
    pub fn locate(&self) -> Result<PathBuf> {
        let program = self.program_name();
        let dirs = match &self.config.libexec_dir {
            Some(dir) => vec![dir.clone()],
            None => self.config.runtime.search_path(),
        };

        dirs.iter()
            .map(|dir| dir.join(&program))
            .find(|candidate| self.config.runtime.is_executable(candidate))
            .with_context(|| format!("command program {} not found", program))
    }

    fn run(&self, args: &[OsString], console: &mut Console<'_>) -> Result<i32> {
        let program = self.locate()?;
        debug!("Dispatching {} to {:?}", self.name, program);
        // The child shares our stdout
        console.out.flush()?;
        self.config.runtime.run(&program, args)
    }
}

impl<R: Runtime> Command for ExternalCommand<R> {
    fn execute(&self, _catalog: &Catalog, args: &[OsString], console: &mut Console<'_>) -> i32 {
        match self.run(args, console) {
            Ok(code) => code,
            Err(e) => {
                let _ = writeln!(console.err, "{PROGRAM}: {}: {:#}", self.name, e);
                status::UNAVAILABLE
            }
        }
    }

    fn print_usage(&self, _catalog: &Catalog, err: &mut dyn Write) -> io::Result<()> {
        writeln!(err, "usage: {} {} {}", PROGRAM, self.name, self.synopsis)
    }
}
