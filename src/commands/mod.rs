use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use crate::{
    catalog::{Catalog, Descriptor},
    console::Console,
    runtime::Runtime,
};

pub mod config;
mod external;
mod help;
mod version;

pub use external::ExternalCommand;
pub use help::Help;
pub use version::Version;

use config::Config;

/// A dispatchable subcommand.
pub trait Command {
    /// Run the command with its own arguments (the command name is not
    /// included) and return its exit status.
    fn execute(&self, catalog: &Catalog, args: &[OsString], console: &mut Console<'_>) -> i32;

    /// Write the command's usage text to the diagnostic stream.
    fn print_usage(&self, catalog: &Catalog, err: &mut dyn Write) -> io::Result<()>;
}

/// The catalog shipped with the binary.
///
/// `update` and `upgrade` are reserved: they are listed and take part in
/// prefix matching but have no implementation.
pub fn standard_catalog<R: Runtime + 'static>(config: Arc<Config<R>>) -> Catalog {
    let external = |name: &'static str, synopsis: &'static str| {
        Descriptor::bound(name, ExternalCommand::new(name, synopsis, config.clone()))
    };

    Catalog::new(vec![
        external("add", "<pkg-file> ..."),
        external("create", "[-o <outdir>] <pkg-name> ..."),
        external("delete", "[-f] <pkg-name> ..."),
        Descriptor::bound("help", Help),
        external("info", "[-a] [<pkg-name> ...]"),
        external("register", "-m <manifest-dir>"),
        external("repo", "<repo-path>"),
        Descriptor::reserved("update"),
        Descriptor::reserved("upgrade"),
        Descriptor::bound("version", Version),
        external("which", "<file>"),
    ])
}
