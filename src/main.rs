use anyhow::Result;
use clap::Parser;
use pkg::{
    PROGRAM, VERSION,
    commands::{config::Config, standard_catalog},
    console::Console,
    resolve::resolve_and_dispatch,
    runtime::RealRuntime,
    status,
};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// pkg - package management front-end
///
/// Runs `pkg <command> [<args>]`. Commands may be abbreviated to any
/// unambiguous prefix; `pkg help <command>` shows a command's usage.
#[derive(Parser, Debug)]
#[command(
    name = "pkg",
    version = VERSION,
    about,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    /// Directory containing the pkg-<command> programs (also via PKG_LIBEXEC_DIR)
    #[arg(long = "libexec-dir", env = "PKG_LIBEXEC_DIR", value_name = "PATH")]
    libexec_dir: Option<OsString>,

    /// The command followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<OsString>,
}

impl Cli {
    /// The configured libexec directory. An empty value counts as unset.
    fn libexec_dir(&self) -> Option<PathBuf> {
        self.libexec_dir
            .as_ref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                status::USAGE
            } else {
                status::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", PROGRAM, e);
            status::CONFIG
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = Config::new(RealRuntime, cli.libexec_dir())?;
    let catalog = standard_catalog(Arc::new(config));

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let code = resolve_and_dispatch(&catalog, &cli.args, &mut Console::new(&mut out, &mut err));
    out.flush()?;
    Ok(code)
}
