use core::fmt;

use bytemuck_derive::{Pod, Zeroable};
use fixed_point::Fixed;

/// An immutable point with fixed-point coordinates.
///
/// # Examples
///
/// ```
/// use fixed_point::Fixed;
/// use geometry::Point;
///
/// let p = Point::from_f32(4.0, 2.5);
/// assert_eq!(p.x(), Fixed::from_int(4));
/// assert_eq!(p.y().to_f32(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    x: Fixed,
    y: Fixed,
}

impl Point {
    pub const ORIGIN: Self = Self::new(Fixed::ZERO, Fixed::ZERO);

    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Creates a point from float coordinates, rounding each to 1/256.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(Fixed::from_f32(x), Fixed::from_f32(y))
    }

    pub const fn x(&self) -> Fixed {
        self.x
    }

    pub const fn y(&self) -> Fixed {
        self.y
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::from_f32(x, y)
    }
}

impl From<(Fixed, Fixed)> for Point {
    fn from((x, y): (Fixed, Fixed)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
        assert_eq!(Point::ORIGIN.x(), Fixed::ZERO);
        assert_eq!(Point::ORIGIN.y(), Fixed::ZERO);
    }

    #[test]
    fn test_from_f32_rounds_coordinates() {
        let p = Point::from_f32(6.3, -0.001);
        assert_eq!(p.x().raw_bits(), 1613);
        assert_eq!(p.y(), Fixed::ZERO);
    }

    #[test]
    fn test_conversions() {
        let p: Point = (1.5f32, 0.8f32).into();
        assert_eq!(p, Point::from_f32(1.5, 0.8));

        let q: Point = (Fixed::ONE, Fixed::from_int(2)).into();
        assert_eq!(q, Point::from_f32(1.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::from_f32(4.0, 2.5).to_string(), "(4, 2.5)");
    }

    #[test]
    fn test_bytes_view() {
        let points = [Point::from_f32(1.0, -1.0)];
        let raws: &[i32] = bytemuck::cast_slice(&points);
        assert_eq!(raws, &[256, -256]);
    }
}
