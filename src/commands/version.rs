use std::ffi::OsString;
use std::io::{self, Write};

use super::Command;
use crate::{PROGRAM, VERSION, catalog::Catalog, console::Console, status};

/// `pkg version`: print the program version.
pub struct Version;

impl Command for Version {
    fn execute(&self, catalog: &Catalog, args: &[OsString], console: &mut Console<'_>) -> i32 {
        if !args.is_empty() {
            let _ = self.print_usage(catalog, console.err);
            return status::USAGE;
        }

        match writeln!(console.out, "{VERSION}") {
            Ok(()) => status::SUCCESS,
            Err(e) => {
                let _ = writeln!(console.err, "{PROGRAM}: version: {e}");
                status::FAILURE
            }
        }
    }

    fn print_usage(&self, _catalog: &Catalog, err: &mut dyn Write) -> io::Result<()> {
        writeln!(err, "usage: {PROGRAM} version")
    }
}
