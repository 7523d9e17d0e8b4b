//! Primseq - primitive-specialized collections and lazy sequences.
//!
//! Lists, sets and pipelines that store `i32`, `i64`, `f64` and `char`
//! values directly, without boxing. One generic engine serves every kind
//! through the [`Primitive`] trait; the `IntList`, `DoubleSet` and similar
//! aliases name the common instantiations.
//!
//! # Quick Start
//!
//! ```
//! use primseq::list::DoubleList;
//! use primseq::sequence::Sequence;
//!
//! let mut readings = DoubleList::new();
//! readings.append_all(&[1.0, 1.5, 1.25, 3.0, 2.75]);
//!
//! // Mean of every window of three readings
//! let means = (&readings)
//!     .window(3, 1)
//!     .filter(|w| w.len() == 3)
//!     .map(|w| w.fold(0.0, |a, b| a + b) / 3.0)
//!     .to_list();
//! assert_eq!(means.len(), 3);
//!
//! // Cursors fail fast when the list changes behind them
//! let mut cursor = readings.cursor(0).unwrap();
//! readings.push(4.0);
//! assert!(cursor.next(&readings).is_err());
//! ```
//!
//! Floating point values compare exactly, bit for bit. Tolerance checks
//! such as [`list::ArrayList::contains_within`] are always separate
//! operations.

pub mod arrays;
pub mod error;
pub mod list;
pub mod primitive;
pub mod sequence;
pub mod set;

pub use error::Error;
pub use error::Result;
pub use primitive::Discrete;
pub use primitive::Numeric;
pub use primitive::Precise;
pub use primitive::Primitive;
