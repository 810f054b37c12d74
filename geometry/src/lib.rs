//! Point-in-triangle classification on deterministic fixed-point numbers.
//!
//! Every intermediate value is a [`fixed_point::Fixed`], so a classification
//! depends only on the input bit patterns and never on the platform's float
//! rounding. Membership is strict: points on an edge or at a vertex are
//! outside, and degenerate triangles contain nothing.

pub mod point;
pub mod triangle;

pub use point::Point;
pub use triangle::{Barycentric, Classification, Triangle, is_point_in_triangle};
