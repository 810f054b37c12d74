use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck_derive::{Pod, Zeroable};

use crate::error::{ArithmeticError, Operation};
use crate::outcome::Outcome;

/// A signed 32-bit fixed-point number with 8 fractional bits.
///
/// The value is `raw / 256`. Every comparison works on the raw integer, so two
/// values are equal exactly when their bit patterns are equal.
///
/// Arithmetic never wraps and never panics. When the exact result does not fit
/// in 32 bits, or when dividing by zero, the operators return [`Fixed::ZERO`]
/// and emit a `tracing` warning. Use the `checked_*` methods for a `Result`,
/// or the `*_with_status` methods for the sentinel together with its status.
///
/// # Examples
///
/// ```
/// use fixed_point::Fixed;
///
/// let x = Fixed::from_f32(3.14159);
/// assert_eq!(x.raw_bits(), 804);
/// assert!((x.to_f32() - 3.14159).abs() < 0.01);
///
/// let y = Fixed::from_int(2);
/// assert_eq!((x * y).raw_bits(), 1608);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable,
)]
#[repr(transparent)]
pub struct Fixed {
    raw: i32,
}

impl Fixed {
    /// Number of fractional bits in the representation.
    pub const FRACTIONAL_BITS: u32 = 8;

    const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    pub const ZERO: Self = Self { raw: 0 };
    pub const ONE: Self = Self { raw: Self::SCALE };

    /// Smallest positive step, `1 / 256`.
    pub const EPSILON: Self = Self { raw: 1 };

    pub const MIN: Self = Self { raw: i32::MIN };
    pub const MAX: Self = Self { raw: i32::MAX };

    /// Creates a fixed-point number from an integer.
    ///
    /// The shift is not guarded: integers outside `-2^23..2^23` lose their
    /// high bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// assert_eq!(Fixed::from_int(3).raw_bits(), 768);
    /// assert_eq!(Fixed::from_int(-1).to_int(), -1);
    /// ```
    pub const fn from_int(value: i32) -> Self {
        Self {
            raw: value.wrapping_shl(Self::FRACTIONAL_BITS),
        }
    }

    /// Creates a fixed-point number from an f32, rounding half away from zero.
    ///
    /// NaN becomes zero and out-of-range values clamp to the raw bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// assert_eq!(Fixed::from_f32(42.42).raw_bits(), 10860);
    /// assert_eq!(Fixed::from_f32(-0.001953125).raw_bits(), -1);
    /// ```
    pub fn from_f32(value: f32) -> Self {
        let scaled = value * Self::SCALE as f32;
        Self {
            raw: scaled.round() as i32,
        }
    }

    /// Creates a fixed-point number from an f64, rounding half away from zero.
    pub fn from_f64(value: f64) -> Self {
        let scaled = value * f64::from(Self::SCALE);
        Self {
            raw: scaled.round() as i32,
        }
    }

    /// Creates a fixed-point number from its raw bit pattern, without scaling.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// // With 8 fractional bits, raw value 256 represents 1.0
    /// let x = Fixed::from_raw(256);
    /// assert_eq!(x.to_f32(), 1.0);
    /// ```
    pub const fn from_raw(raw: i32) -> Self {
        Self { raw }
    }

    /// Returns the raw integer representation.
    pub const fn raw_bits(self) -> i32 {
        self.raw
    }

    /// Overwrites the raw integer representation.
    pub fn set_raw_bits(&mut self, raw: i32) {
        self.raw = raw;
    }

    /// Converts to an integer, rounding toward negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// assert_eq!(Fixed::from_f32(2.75).to_int(), 2);
    /// assert_eq!(Fixed::from_f32(-2.75).to_int(), -3);
    /// ```
    pub const fn to_int(self) -> i32 {
        self.raw >> Self::FRACTIONAL_BITS
    }

    pub fn to_f32(self) -> f32 {
        self.raw as f32 / Self::SCALE as f32
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.raw) / f64::from(Self::SCALE)
    }

    /// Narrows an exact 64-bit raw result, failing with `err` if it leaves
    /// the i32 range.
    fn narrow(wide: i64, err: ArithmeticError) -> Result<Self, ArithmeticError> {
        i32::try_from(wide).map(Self::from_raw).map_err(|_| err)
    }

    fn narrow_binary(op: Operation, lhs: i32, rhs: i32, wide: i64) -> Result<Self, ArithmeticError> {
        Self::narrow(wide, ArithmeticError::Overflow { op, lhs, rhs })
    }

    fn narrow_unary(op: Operation, operand: i32, wide: i64) -> Result<Self, ArithmeticError> {
        Self::narrow(wide, ArithmeticError::UnaryOverflow { op, operand })
    }
}

// Checked arithmetic
impl Fixed {
    /// Adds two fixed-point numbers, failing on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::{ArithmeticError, Fixed};
    ///
    /// let sum = Fixed::from_f32(1.5).checked_add(Fixed::from_f32(2.5))?;
    /// assert_eq!(sum, Fixed::from_int(4));
    ///
    /// assert!(Fixed::MAX.checked_add(Fixed::EPSILON).is_err());
    /// # Ok::<(), ArithmeticError>(())
    /// ```
    pub fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
        let wide = i64::from(self.raw) + i64::from(rhs.raw);
        Self::narrow_binary(Operation::Add, self.raw, rhs.raw, wide)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
        let wide = i64::from(self.raw) - i64::from(rhs.raw);
        Self::narrow_binary(Operation::Sub, self.raw, rhs.raw, wide)
    }

    /// Multiplies two fixed-point numbers, failing on overflow.
    ///
    /// The raw product is shifted right by the fractional bit count, which
    /// rounds toward negative infinity.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
        let wide = (i64::from(self.raw) * i64::from(rhs.raw)) >> Self::FRACTIONAL_BITS;
        Self::narrow_binary(Operation::Mul, self.raw, rhs.raw, wide)
    }

    /// Divides two fixed-point numbers, truncating toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::{ArithmeticError, Fixed};
    ///
    /// let q = Fixed::from_int(7).checked_div(Fixed::from_int(2))?;
    /// assert_eq!(q.to_f32(), 3.5);
    ///
    /// let err = Fixed::from_int(5).checked_div(Fixed::ZERO).unwrap_err();
    /// assert_eq!(err, ArithmeticError::DivisionByZero { lhs: 1280 });
    /// # Ok::<(), ArithmeticError>(())
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        if rhs.raw == 0 {
            return Err(ArithmeticError::DivisionByZero { lhs: self.raw });
        }
        let wide = (i64::from(self.raw) << Self::FRACTIONAL_BITS) / i64::from(rhs.raw);
        Self::narrow_binary(Operation::Div, self.raw, rhs.raw, wide)
    }

    /// Negates, failing for [`Fixed::MIN`].
    pub fn checked_neg(self) -> Result<Self, ArithmeticError> {
        Self::narrow_unary(Operation::Neg, self.raw, -i64::from(self.raw))
    }

    /// Absolute value, failing for [`Fixed::MIN`].
    pub fn checked_abs(self) -> Result<Self, ArithmeticError> {
        Self::narrow_unary(Operation::Abs, self.raw, i64::from(self.raw).abs())
    }
}

// Sentinel arithmetic with an inspectable status
impl Fixed {
    /// Adds, returning the zero sentinel and its status on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::{ArithmeticStatus, Fixed};
    ///
    /// let outcome = Fixed::from_raw(i32::MAX - 100).add_with_status(Fixed::from_raw(200));
    /// assert_eq!(outcome.value(), Fixed::ZERO);
    /// assert_eq!(outcome.status(), ArithmeticStatus::Overflow);
    /// ```
    pub fn add_with_status(self, rhs: Self) -> Outcome {
        self.checked_add(rhs).into()
    }

    pub fn sub_with_status(self, rhs: Self) -> Outcome {
        self.checked_sub(rhs).into()
    }

    pub fn mul_with_status(self, rhs: Self) -> Outcome {
        self.checked_mul(rhs).into()
    }

    pub fn div_with_status(self, rhs: Self) -> Outcome {
        self.checked_div(rhs).into()
    }

    /// Absolute value; [`Fixed::MIN`] yields zero and a warning.
    pub fn abs(self) -> Self {
        Outcome::from(self.checked_abs()).report()
    }
}

// Increment and decrement by the smallest step
impl Fixed {
    /// Adds one raw step in place and returns the new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// let mut a = Fixed::ZERO;
    /// assert_eq!(a.increment().raw_bits(), 1);
    /// assert_eq!(a.to_f32(), 1.0 / 256.0);
    /// ```
    pub fn increment(&mut self) -> Self {
        *self = *self + Self::EPSILON;
        *self
    }

    /// Adds one raw step in place and returns the previous value.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    pub fn decrement(&mut self) -> Self {
        *self = *self - Self::EPSILON;
        *self
    }

    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }
}

// Min / max with ties going to the second argument
impl Fixed {
    /// Returns a reference to the smaller operand, or to `b` on a tie.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_point::Fixed;
    ///
    /// let a = Fixed::from_int(1);
    /// let b = Fixed::from_int(1);
    /// assert!(std::ptr::eq(Fixed::min_ref(&a, &b), &b));
    /// ```
    pub fn min_ref<'a>(a: &'a Self, b: &'a Self) -> &'a Self {
        if a.raw < b.raw { a } else { b }
    }

    /// Returns a reference to the larger operand, or to `b` on a tie.
    pub fn max_ref<'a>(a: &'a Self, b: &'a Self) -> &'a Self {
        if a.raw > b.raw { a } else { b }
    }

    /// Mutable counterpart of [`Fixed::min_ref`].
    pub fn min_mut<'a>(a: &'a mut Self, b: &'a mut Self) -> &'a mut Self {
        if a.raw < b.raw { a } else { b }
    }

    /// Mutable counterpart of [`Fixed::max_ref`].
    pub fn max_mut<'a>(a: &'a mut Self, b: &'a mut Self) -> &'a mut Self {
        if a.raw > b.raw { a } else { b }
    }

    pub fn min_of(a: Self, b: Self) -> Self {
        *Self::min_ref(&a, &b)
    }

    pub fn max_of(a: Self, b: Self) -> Self {
        *Self::max_ref(&a, &b)
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_with_status(rhs).report()
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub_with_status(rhs).report()
    }
}

impl Mul for Fixed {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_with_status(rhs).report()
    }
}

impl Div for Fixed {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.div_with_status(rhs).report()
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Outcome::from(self.checked_neg()).report()
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl From<f32> for Fixed {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<f64> for Fixed {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Fixed> for f32 {
    fn from(value: Fixed) -> Self {
        value.to_f32()
    }
}

impl From<Fixed> for f64 {
    fn from(value: Fixed) -> Self {
        value.to_f64()
    }
}

/// Formats as the floating-point value; precision flags are honoured.
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}
