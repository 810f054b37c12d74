//! # fixed_point
//!
//! A deterministic 24.8 fixed-point number type.
//!
//! ## Features
//!
//! - 32-bit signed storage with 8 fractional bits, compared bit for bit
//! - Conversions from integers, floats and raw bit patterns
//! - Arithmetic that never wraps: out-of-range results become zero
//! - Three ways to observe a failed operation:
//!   - operators log a `tracing` warning and return the zero sentinel
//!   - `*_with_status` methods return the sentinel with an [`ArithmeticStatus`]
//!   - `checked_*` methods return a `Result` with an [`ArithmeticError`]
//! - `bytemuck::Pod`, so slices of values can be viewed as bytes
//!
//! ## Examples
//!
//! ```
//! use fixed_point::{ArithmeticStatus, Fixed};
//!
//! let mut a = Fixed::ZERO;
//! let b = Fixed::from_f32(5.05) * Fixed::from_int(2);
//!
//! assert_eq!(a.increment().raw_bits(), 1);
//! assert_eq!(Fixed::max_of(a, b), b);
//!
//! // Overflow does not wrap
//! let outcome = Fixed::MAX.add_with_status(Fixed::ONE);
//! assert_eq!(outcome.value(), Fixed::ZERO);
//! assert_eq!(outcome.status(), ArithmeticStatus::Overflow);
//! ```

pub mod error;
pub mod fixed;
pub mod outcome;

pub use error::{ArithmeticError, ArithmeticStatus, Operation};
pub use fixed::Fixed;
pub use outcome::Outcome;
