//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the few system
//! operations the front-end needs, so lookup and dispatch can be tested
//! without touching the real environment.
//!
//! # Structure
//!
//! - `env` - Environment lookups (program search path)
//! - `fs` - File system queries (directories, executables)
//! - `process` - Child process execution

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    /// Directories listed in `PATH`, in order. Empty if `PATH` is unset.
    fn search_path(&self) -> Vec<PathBuf>;

    // File System
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file the current user may execute.
    fn is_executable(&self, path: &Path) -> bool;

    // Processes
    /// Run `program` with `args`, inheriting the standard streams, and wait
    /// for it. Returns the child's exit status.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<i32>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn search_path(&self) -> Vec<PathBuf> {
        self.search_path_impl()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.is_executable_impl(path)
    }

    fn run(&self, program: &Path, args: &[OsString]) -> Result<i32> {
        self.run_impl(program, args)
    }
}
