//! Output streams handed to commands.

use std::io::Write;

/// The standard output and diagnostic streams of one invocation.
///
/// The binary wires these to the process's stdout and stderr; tests use
/// in-memory buffers.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}
