pub mod catalog;
pub mod commands;
pub mod console;
pub mod resolve;
pub mod runtime;
pub mod status;

/// Name used in usage text and diagnostics.
pub const PROGRAM: &str = "pkg";

/// Version string, derived from `git describe` at build time.
pub const VERSION: &str = env!("PKG_VERSION");
