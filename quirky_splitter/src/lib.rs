#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Predicate driven splitting of streams into segments.
//!
//! A [`Splitter`] consumes elements one at a time and emits the runs of
//! elements found between separators, a separator being any element matching
//! the caller's predicate. Separators are dropped from the output.
//!
//! ```
//! use quirky_splitter::prelude::*;
//!
//! let segments = Splitter::new(|x: &i32| *x == 0)
//!     .split([1, 2, 0, 3, 4, 0])
//!     .collect::<Vec<_>>();
//! assert_eq!(segments, vec![vec![1, 2], vec![3, 4], vec![]]);
//!
//! let segments = [10, 40, 30, 20, 60, 50, 30]
//!     .into_iter()
//!     .splitn_by(2, |x| x % 3 == 0)?
//!     .collect::<Vec<_>>();
//! assert_eq!(segments, vec![vec![10, 40], vec![20, 60, 50, 30]]);
//! # Ok::<(), SplitError>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate log;
#[macro_use]
extern crate thiserror;

pub mod iterator;
pub mod params;
pub mod prelude;
pub mod sink;
pub mod splitter;
pub mod state;
pub mod status;

pub use splitter::Splitter;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("Invalid split limit {limit}, expected at least 1")]
    InvalidLimit { limit: usize },
}
