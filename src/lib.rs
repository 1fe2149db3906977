//! eta - progress estimation for iterators.
//!
//! Wrap any finite iterator in [`Eta`] and every retrieved element comes
//! paired with a [`Stats`] snapshot: elements done, elements remaining,
//! completion percentage, and a projected completion time based on the
//! average per-item cost so far. By default each advance also rewrites a
//! status line on standard output, suited to console progress reporting.
//!
//! ```no_run
//! use eta::Eta;
//!
//! let data = vec![10, 20, 30];
//! for (item, stats) in Eta::new(data.into_iter()).unwrap() {
//!     // do something useful with `item`
//!     let _ = (item, stats);
//! }
//! ```

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod estimator;
pub mod stats;

// Re-export key types for convenience
pub use estimator::{Eta, EtaError};
pub use stats::{AbsRelTime, Stats};
