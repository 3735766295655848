use std::ffi::OsString;
use std::io::{self, Write};

use log::debug;

use super::Command;
use crate::{PROGRAM, catalog::Catalog, console::Console, status};

/// `pkg help <command>`: print one command's usage.
///
/// The target must be an exact catalog name; abbreviations are rejected.
pub struct Help;

impl Command for Help {
    #[tracing::instrument(skip(self, catalog, console))]
    fn execute(&self, catalog: &Catalog, args: &[OsString], console: &mut Console<'_>) -> i32 {
        let [target] = args else {
            let _ = self.print_usage(catalog, console.err);
            return status::USAGE;
        };

        match target.to_str().and_then(|name| catalog.get(name)) {
            Some(descriptor) => {
                debug!("Showing usage of {}", descriptor.name());
                let _ = descriptor.command().print_usage(catalog, console.err);
                status::SUCCESS
            }
            None => {
                let _ = writeln!(
                    console.err,
                    "{PROGRAM}: {} is not a valid command",
                    target.to_string_lossy()
                );
                status::FAILURE
            }
        }
    }

    fn print_usage(&self, catalog: &Catalog, err: &mut dyn Write) -> io::Result<()> {
        writeln!(err, "usage: {PROGRAM} help <command>")?;
        writeln!(err, "Where <command> can be:")?;
        catalog.write_names(err)
    }
}
