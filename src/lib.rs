//! Immutable complex numbers with `f64` parts.
//!
//! [`DoubleComplex`] values are created with [`DoubleComplex::value_of`], which returns the shared
//! constants for `0`, `1` and `i` when the parts match them:
//!
//! ```
//! use dcomplex::DoubleComplex;
//!
//! let z = DoubleComplex::value_of(123.0, 456.0);
//! let w = DoubleComplex::value_of(345.0, 456.0);
//!
//! assert_eq!(z.added_to(&w).to_string(), "468.0+912.0i");
//! assert_eq!(z.subtracted_from(&w).to_string(), "222.0+0.0i");
//! assert!(z.divided_by(&DoubleComplex::ZERO).is_err());
//! ```

#[macro_use]
extern crate log;

mod complex;
mod double_complex;
mod error;
mod vector;

pub use crate::complex::Complex;
pub use crate::double_complex::DoubleComplex;
pub use crate::error::{Error, Result};
pub use crate::vector::Vector;
