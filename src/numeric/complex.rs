// ============================================================================
// Complex Number
// Cartesian double-precision complex value type
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number `re + im·i` stored as two `f64` components.
///
/// Values are plain `Copy` data. Every operator and function returns a new
/// value and leaves its operands untouched. No normalization is ever applied:
/// signed zeros, NaN and infinities are kept exactly as the floating-point
/// operations produce them.
///
/// # Example
/// ```
/// use complex_scalar::numeric::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
///
/// let minus_one = Complex::I * Complex::I;
/// assert_eq!(minus_one, Complex::new(-1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    /// Real component
    pub re: f64,
    /// Imaginary component
    pub im: f64,
}

impl Complex {
    /// The imaginary unit (0, 1)
    pub const I: Self = Self::new(0.0, 1.0);

    /// Zero (0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One (1, 0)
    pub const ONE: Self = Self::new(1.0, 0.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from real and imaginary parts, verbatim.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Embed a real scalar as (value, 0).
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Create from polar coordinates: `r·(cos θ + i·sin θ)`.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Complex conjugate (re, -im).
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// True when both components compare equal to zero (either sign).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    // ========================================================================
    // Polar Queries
    // ========================================================================

    /// Magnitude `sqrt(re² + im²)`.
    ///
    /// NaN if either component is NaN; +∞ if either is infinite and the
    /// other is not NaN.
    #[inline]
    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Argument `atan2(im, re)`, the principal angle in (−π, π].
    ///
    /// The branch cut lies along the negative real axis. `ln`, `pow` and
    /// `sqrt` all take their angle from here.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    // ========================================================================
    // Scalar Conversion
    // ========================================================================

    /// Narrow to a real scalar. **Returns the magnitude, not the real part.**
    ///
    /// `Complex::new(-3.0, 4.0).to_real()` is `5.0`: sign and phase are lost.
    /// Use the `re` field for the real component, or `f64::try_from` to get
    /// it only when the value lies on the real axis.
    #[inline]
    pub fn to_real(self) -> f64 {
        self.abs()
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is (0, 0).
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::trace!(dividend = ?self, "complex division by zero rejected");
            return Err(NumericError::DivisionByZero);
        }
        Ok(self / rhs)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl TryFrom<Complex> for f64 {
    type Error = NumericError;

    /// Real component of a value lying on the real axis.
    fn try_from(z: Complex) -> Result<Self, Self::Error> {
        if z.im != 0.0 {
            tracing::trace!(value = ?z, "narrowing of non-real complex rejected");
            return Err(NumericError::NotReal);
        }
        Ok(z.re)
    }
}

impl Complex {
    /// Convert from a pair of `rust_decimal::Decimal` components.
    ///
    /// Intended for API boundaries where values arrive as decimals.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a component has no `f64` representation.
    pub fn from_decimal(
        re: rust_decimal::Decimal,
        im: rust_decimal::Decimal,
    ) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let re = re.to_f64().ok_or(NumericError::InvalidInput)?;
        let im = im.to_f64().ok_or(NumericError::InvalidInput)?;
        Ok(Self::new(re, im))
    }

    /// Convert both components to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `NonFinite` if a component is NaN or infinite, and
    /// `Overflow` if it exceeds the decimal range.
    pub fn to_decimal_parts(self) -> NumericResult<(rust_decimal::Decimal, rust_decimal::Decimal)> {
        use rust_decimal::prelude::FromPrimitive;

        if !self.is_finite() {
            return Err(NumericError::NonFinite);
        }
        let re = rust_decimal::Decimal::from_f64(self.re).ok_or(NumericError::Overflow)?;
        let im = rust_decimal::Decimal::from_f64(self.im).ok_or(NumericError::Overflow)?;
        Ok((re, im))
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    /// `(a+bi)(c+di) = (ac−bd) + (ad+bc)i`
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Self;

    /// `(a+bi)/(c+di) = [(ac+bd) + (bc−ad)i] / (c²+d²)`
    ///
    /// A (0, 0) divisor yields NaN or ±∞ components.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        let denom = c * c + d * d;
        Self::new((a * c + b * d) / denom, (b * c - a * d) / denom)
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

// ============================================================================
// Tests
// ============================================================================
