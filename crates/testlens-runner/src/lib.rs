//! # testlens-runner - Harness Process Management
//!
//! Spawns the test harness, streams its output and produces the single
//! [`ResultSet`](testlens_core::ResultSet) handed to the viewer.
//!
//! Depends on [`testlens_core`] for decoding, aggregation and error handling.
//!
//! ## Public API
//!
//! - [`HarnessCommand`] - Program, arguments and working directory
//! - [`HarnessProcess`] - Running child process with stdout/stderr readers
//! - [`HarnessEvent`] - Stdout line, stderr line or exit status
//! - [`LoadSource`] - Harness, recorded file or stdin
//! - [`load()`] - Read a source to completion and aggregate it

pub mod loader;
pub mod process;

pub use loader::{aggregate_lines, load, LoadSource};
pub use process::{HarnessCommand, HarnessEvent, HarnessProcess};
