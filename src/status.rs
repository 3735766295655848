//! Process exit statuses.
//!
//! Values follow `sysexits(3)` where a matching code exists.

/// Successful termination.
pub const SUCCESS: i32 = 0;

/// A command ran but failed (e.g. `help` was asked about an unknown command).
pub const FAILURE: i32 = 1;

/// The command line was malformed: no command, unknown or ambiguous command,
/// or wrong arguments to a built-in.
pub const USAGE: i32 = 64;

/// The program implementing a subcommand could not be found or started.
pub const UNAVAILABLE: i32 = 69;

/// The configuration is unusable (e.g. a missing libexec directory).
pub const CONFIG: i32 = 78;

/// Status reported for a child terminated by `signal`, as POSIX shells do.
pub fn from_signal(signal: i32) -> i32 {
    128 + signal
}
