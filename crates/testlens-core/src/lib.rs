//! # testlens-core - Core Domain Types
//!
//! Foundation crate for testlens. Decodes the harness event stream, folds
//! it into per-test records and orders the result.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Events (`events`)
//! - [`RawEvent`] - One decoded line of the harness's JSON event stream
//! - [`Action`] - Lifecycle action (start, run, output, pass, fail, skip)
//! - [`decode_event()`] - Parse a line, or discard it
//!
//! ### Aggregation (`aggregator`, `locator`, `ordering`)
//! - [`Aggregator`] - Folds events into [`TestRecord`]s
//! - [`SourceLocator`] - Extracts `file:line` references from output
//! - [`order_results()`] - Failures first, then by id
//!
//! ### Domain Types (`types`)
//! - [`TestStatus`], [`TestRecord`], [`ResultSet`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use testlens_core::prelude::*;
//! ```

pub mod aggregator;
pub mod error;
pub mod events;
pub mod locator;
pub mod logging;
pub mod ordering;
pub mod types;

/// Prelude for common imports used throughout all testlens crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use aggregator::Aggregator;
pub use error::{Error, Result, ResultExt};
pub use events::{decode_event, Action, RawEvent};
pub use locator::{SourceLocation, SourceLocator, DEFAULT_SOURCE_SUFFIX};
pub use ordering::order_results;
pub use types::{ResultSet, TestRecord, TestStatus};
