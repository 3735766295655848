//! Command-name resolution and dispatch.
//!
//! A candidate resolves to a catalog entry when it equals the entry's name
//! (exact match) or is a prefix of exactly one name. An exact match always
//! wins, so `pkg repo` never collides with a longer name starting with `repo`.

use std::ffi::OsString;
use std::io::{self, Write};

use log::debug;

use crate::PROGRAM;
use crate::catalog::{Catalog, Descriptor};
use crate::console::Console;
use crate::status;

/// Outcome of matching a candidate against the catalog.
#[derive(Debug)]
pub enum Resolution<'a> {
    Exact(&'a Descriptor),
    Unique(&'a Descriptor),
    /// Every prefix match, in catalog order.
    Ambiguous(Vec<&'a Descriptor>),
    NoMatch,
}

impl<'a> Resolution<'a> {
    /// The selected descriptor, if resolution picked one.
    #[cfg(test)]
    pub(crate) fn selected(&self) -> Option<&'a Descriptor> {
        match self {
            Resolution::Exact(d) | Resolution::Unique(d) => Some(*d),
            Resolution::Ambiguous(_) | Resolution::NoMatch => None,
        }
    }
}

/// Classify `candidate` against `catalog`.
///
/// An empty candidate is a prefix of every name.
pub fn classify<'a>(catalog: &'a Catalog, candidate: &str) -> Resolution<'a> {
    let mut matches: Vec<&Descriptor> = catalog
        .iter()
        .filter(|d| d.name().starts_with(candidate))
        .collect();

    if let Some(exact) = matches
        .iter()
        .copied()
        .find(|d| d.name().len() == candidate.len())
    {
        return Resolution::Exact(exact);
    }

    match matches.len() {
        0 => Resolution::NoMatch,
        1 => Resolution::Unique(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// Resolve `args[0]` and run the selected command with the remaining
/// arguments, returning the status the process should exit with.
///
/// Diagnostics for empty, unknown and ambiguous commands go to `console.err`.
/// Arguments need not be valid UTF-8, but a non-UTF-8 candidate never matches.
#[tracing::instrument(skip(catalog, console))]
pub fn resolve_and_dispatch(
    catalog: &Catalog,
    args: &[OsString],
    console: &mut Console<'_>,
) -> i32 {
    let Some((candidate, rest)) = args.split_first() else {
        debug!("No command given");
        let _ = catalog.write_usage(console.err);
        return status::USAGE;
    };
    let Some(candidate) = candidate.to_str() else {
        debug!("{:?} is not valid UTF-8", candidate);
        let _ = catalog.write_usage(console.err);
        return status::USAGE;
    };

    match classify(catalog, candidate) {
        Resolution::Exact(descriptor) | Resolution::Unique(descriptor) => {
            debug!("Resolved {:?} to {}", candidate, descriptor.name());
            descriptor.command().execute(catalog, rest, console)
        }
        Resolution::Ambiguous(matches) => {
            debug!("{:?} matches {} commands", candidate, matches.len());
            let _ = write_ambiguous(console.err, candidate, &matches);
            status::USAGE
        }
        Resolution::NoMatch => {
            debug!("{:?} matches no command", candidate);
            let _ = catalog.write_usage(console.err);
            status::USAGE
        }
    }
}

fn write_ambiguous(err: &mut dyn Write, candidate: &str, matches: &[&Descriptor]) -> io::Result<()> {
    writeln!(
        err,
        "{PROGRAM}: Ambiguous command: '{candidate}'. See '{PROGRAM} help' for more information."
    )?;
    writeln!(err, "{PROGRAM}: '{candidate}' could be one of the following:")?;
    for descriptor in matches {
        writeln!(err, "{PROGRAM}: \t{}", descriptor.name())?;
    }
    Ok(())
}
