//! Manual synthesis of IEEE754 single-precision floating-point numbers
//! from integer parts, plus binary fixed-point arithmetic.
//!
//! # Installation
//!
//! Add this to your Cargo.toml
//!
//! ```toml
//! [dependencies]
//! fixedfloat = "0.1"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fixedfloat::FloatBits;
//!
//! // the integer 3 with one fractional bit is 1.5
//! let mut f = FloatBits::new();
//! f.set_bits(false, 1, 3);
//! assert_eq!(f.value(), 1.5);
//! ```

#![no_std]
#[cfg(test)] #[macro_use] extern crate std;

mod bits;
mod fixed;
mod float;

pub use bits::{bit_count, top_set_bit};
pub use fixed::FixedPoint;
pub use float::FloatBits;
