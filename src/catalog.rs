//! The fixed, ordered set of commands known to the front-end.

use std::fmt;
use std::io::{self, Write};

use crate::PROGRAM;
use crate::commands::Command;

/// What a catalog name is bound to.
pub enum Binding {
    /// A dispatchable command.
    Bound(Box<dyn Command>),
    /// Listed and matchable, but never dispatched.
    Reserved,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Bound(_) => f.write_str("Bound"),
            Binding::Reserved => f.write_str("Reserved"),
        }
    }
}

#[derive(Debug)]
pub struct Descriptor {
    name: &'static str,
    binding: Binding,
}

impl Descriptor {
    pub fn bound(name: &'static str, command: impl Command + 'static) -> Self {
        debug_assert!(!name.is_empty(), "command names must not be empty");
        Self {
            name,
            binding: Binding::Bound(Box::new(command)),
        }
    }

    pub fn reserved(name: &'static str) -> Self {
        debug_assert!(!name.is_empty(), "command names must not be empty");
        Self {
            name,
            binding: Binding::Reserved,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub(crate) fn is_reserved(&self) -> bool {
        matches!(self.binding, Binding::Reserved)
    }

    /// The bound command.
    ///
    /// # Panics
    ///
    /// Panics if the name is reserved. Reaching a reserved name means the
    /// catalog is malformed, which is not something a user can fix.
    pub fn command(&self) -> &dyn Command {
        match &self.binding {
            Binding::Bound(command) => command.as_ref(),
            Binding::Reserved => panic!("command '{}' is reserved and has no handler", self.name),
        }
    }
}

/// Ordered command descriptors. Order only affects how names are listed.
#[derive(Debug)]
pub struct Catalog {
    descriptors: Vec<Descriptor>,
}

impl Catalog {
    pub fn new(descriptors: Vec<Descriptor>) -> Self {
        debug_assert!(
            descriptors
                .iter()
                .enumerate()
                .all(|(i, d)| descriptors[i + 1..].iter().all(|o| o.name != d.name)),
            "command names must be unique"
        );
        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(Descriptor::name)
    }

    /// Exact lookup; never matches on a prefix.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Write one tab-indented line per command name, in catalog order.
    pub fn write_names(&self, out: &mut dyn Write) -> io::Result<()> {
        for name in self.names() {
            writeln!(out, "\t{}", name)?;
        }
        Ok(())
    }

    /// Write the top-level usage text.
    pub fn write_usage(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "usage: {} <command> [<args>]", PROGRAM)?;
        writeln!(out)?;
        writeln!(out, "Where <command> can be:")?;
        self.write_names(out)
    }
}
