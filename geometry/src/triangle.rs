use core::convert::Infallible;

use bytemuck_derive::{Pod, Zeroable};
use fixed_point::{ArithmeticError, Fixed, Outcome};
use tracing::debug;

use crate::point::Point;

/// Returns `true` if `p` lies strictly inside the triangle `a`, `b`, `c`.
///
/// Points on an edge or at a vertex are outside. A degenerate triangle
/// contains nothing. The winding order of the vertices does not matter.
///
/// # Examples
///
/// ```
/// use geometry::{Point, is_point_in_triangle};
///
/// let a = Point::from_f32(2.0, 1.0);
/// let b = Point::from_f32(6.0, 1.0);
/// let c = Point::from_f32(4.0, 5.0);
///
/// assert!(is_point_in_triangle(a, b, c, Point::from_f32(4.0, 2.5)));
/// assert!(!is_point_in_triangle(a, b, c, Point::from_f32(4.0, 1.0)));
/// ```
pub fn is_point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    Triangle::new(a, b, c).contains(p)
}

/// Where a query point lies relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Inside,
    /// Outside, on an edge, or on a vertex. Also reported when the vertices
    /// are not collinear but the solve loses the signed area to overflow or
    /// rounding.
    Outside,
    /// The vertices are collinear, so nothing is inside.
    Degenerate,
}

/// Barycentric weights of a point relative to `b - a` and `c - a`.
///
/// The point is `a + w1 * (b - a) + w2 * (c - a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barycentric {
    pub w1: Fixed,
    pub w2: Fixed,
}

/// Three vertices, in any winding order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

/// How intermediate results of the barycentric solve are resolved.
trait Arithmetic {
    type Error;

    fn resolve(&self, result: Result<Fixed, ArithmeticError>) -> Result<Fixed, Self::Error>;
}

/// Operator semantics: failed steps become zero and are logged.
struct Sentinel;

impl Arithmetic for Sentinel {
    type Error = Infallible;

    fn resolve(&self, result: Result<Fixed, ArithmeticError>) -> Result<Fixed, Infallible> {
        Ok(Outcome::from(result).report())
    }
}

/// Failed steps abort the solve.
struct Strict;

impl Arithmetic for Strict {
    type Error = ArithmeticError;

    fn resolve(&self, result: Result<Fixed, ArithmeticError>) -> Result<Fixed, ArithmeticError> {
        result
    }
}

/// Edge differences from `a` and the scaled signed area used by the solve.
struct Edges {
    s1: Fixed,
    s2: Fixed,
    s3: Fixed,
    ab_x: Fixed,
    denom: Fixed,
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns `true` if the vertices are collinear (zero signed area).
    ///
    /// The cross product is exact over the raw coordinates, so a large or tiny
    /// triangle is never reported as degenerate.
    pub fn is_degenerate(&self) -> bool {
        let (a, b, c) = (self.a, self.b, self.c);
        let delta = |p: Fixed, q: Fixed| i128::from(p.raw_bits()) - i128::from(q.raw_bits());

        let cross = delta(b.x(), a.x()) * delta(c.y(), a.y())
            - delta(b.y(), a.y()) * delta(c.x(), a.x());
        cross == 0
    }

    /// Returns `true` if `p` lies strictly inside the triangle.
    ///
    /// Intermediate overflow follows the operator policy: the step yields zero
    /// and a warning is logged.
    pub fn contains(&self, p: Point) -> bool {
        self.classify(p) == Classification::Inside
    }

    pub fn classify(&self, p: Point) -> Classification {
        let Ok(class) = self.evaluate(&Sentinel, p);
        class
    }

    /// Like [`Triangle::contains`], but fails if any intermediate step
    /// overflows or divides by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use geometry::{Point, Triangle};
    ///
    /// let big = Triangle::new(
    ///     Point::from_f32(-4000.0, -4000.0),
    ///     Point::from_f32(4000.0, -4000.0),
    ///     Point::from_f32(0.0, 4000.0),
    /// );
    /// assert!(big.try_contains(Point::ORIGIN).is_err());
    /// ```
    pub fn try_contains(&self, p: Point) -> Result<bool, ArithmeticError> {
        Ok(self.try_classify(p)? == Classification::Inside)
    }

    pub fn try_classify(&self, p: Point) -> Result<Classification, ArithmeticError> {
        self.evaluate(&Strict, p)
    }

    /// Returns the barycentric weights of `p`.
    ///
    /// Returns `None` if the triangle is degenerate, and also when the
    /// denominator of the solve collapses to zero because an intermediate
    /// product overflowed or rounded away.
    pub fn barycentric(&self, p: Point) -> Option<Barycentric> {
        if self.is_degenerate() {
            return None;
        }
        let Ok(weights) = self.solve(&Sentinel, p);
        weights
    }

    fn edges<A: Arithmetic>(&self, arith: &A) -> Result<Edges, A::Error> {
        let (a, b, c) = (self.a, self.b, self.c);

        let s1 = arith.resolve(c.y().checked_sub(a.y()))?;
        let s2 = arith.resolve(c.x().checked_sub(a.x()))?;
        let s3 = arith.resolve(b.y().checked_sub(a.y()))?;
        let ab_x = arith.resolve(b.x().checked_sub(a.x()))?;

        let lhs = arith.resolve(s3.checked_mul(s2))?;
        let rhs = arith.resolve(ab_x.checked_mul(s1))?;
        let denom = arith.resolve(lhs.checked_sub(rhs))?;

        Ok(Edges { s1, s2, s3, ab_x, denom })
    }

    fn solve<A: Arithmetic>(&self, arith: &A, p: Point) -> Result<Option<Barycentric>, A::Error> {
        let a = self.a;
        let Edges { s1, s2, s3, ab_x, denom } = self.edges(arith)?;

        if denom == Fixed::ZERO {
            debug!(triangle = ?self.vertices(), "signed area lost to overflow or rounding");
            return Ok(None);
        }

        let s4 = arith.resolve(p.y().checked_sub(a.y()))?;

        let t1 = arith.resolve(a.x().checked_mul(s1))?;
        let t2 = arith.resolve(s4.checked_mul(s2))?;
        let t3 = arith.resolve(p.x().checked_mul(s1))?;
        let num = arith.resolve(t1.checked_add(t2))?;
        let num = arith.resolve(num.checked_sub(t3))?;
        let w1 = arith.resolve(num.checked_div(denom))?;

        let w2 = if s1 == Fixed::ZERO {
            // c.y == a.y, so solve the x equation instead
            if s2 == Fixed::ZERO {
                debug!(triangle = ?self.vertices(), "edge a-c lost to overflow");
                return Ok(None);
            }
            let dx = arith.resolve(p.x().checked_sub(a.x()))?;
            let along = arith.resolve(w1.checked_mul(ab_x))?;
            let num = arith.resolve(dx.checked_sub(along))?;
            arith.resolve(num.checked_div(s2))?
        } else {
            let along = arith.resolve(w1.checked_mul(s3))?;
            let num = arith.resolve(s4.checked_sub(along))?;
            arith.resolve(num.checked_div(s1))?
        };

        Ok(Some(Barycentric { w1, w2 }))
    }

    fn evaluate<A: Arithmetic>(&self, arith: &A, p: Point) -> Result<Classification, A::Error> {
        if self.is_degenerate() {
            debug!(triangle = ?self.vertices(), "collinear vertices");
            return Ok(Classification::Degenerate);
        }
        let Some(Barycentric { w1, w2 }) = self.solve(arith, p)? else {
            return Ok(Classification::Outside);
        };

        // Strict comparisons keep edges and vertices outside
        let inside = w1 > Fixed::ZERO
            && w2 > Fixed::ZERO
            && arith.resolve(w1.checked_add(w2))? < Fixed::ONE;

        Ok(if inside {
            Classification::Inside
        } else {
            Classification::Outside
        })
    }
}

impl From<[Point; 3]> for Triangle {
    fn from([a, b, c]: [Point; 3]) -> Self {
        Self::new(a, b, c)
    }
}
