// ============================================================================
// Transcendental Functions
// Principal-branch exp, ln, pow and sqrt over Complex
// ============================================================================
//
// Branch convention: every angle comes from `Complex::arg`, i.e. atan2 with
// range (−π, π] and the cut along the negative real axis. Zero and
// non-finite inputs are not guarded; whatever the f64 cascade yields
// (ln(0) = −∞, atan2(±0, ±0) = ±0 or ±π) is returned as-is. The
// `checked_*` variants are the only place degenerate inputs are rejected.

use super::complex::Complex;
use super::errors::{NumericError, NumericResult};

/// Sign used for the imaginary part of a square root.
///
/// Follows the sign bit, so a signed zero picks the same side of the cut
/// as `arg`: `-x + 0i` maps to the upper half-plane (`arg = π`) and
/// `-x - 0i` to the lower one (`arg = −π`).
#[inline]
fn branch_sign(im: f64) -> f64 {
    if im.is_sign_negative() {
        -1.0
    } else {
        1.0
    }
}

impl Complex {
    // ========================================================================
    // Exponential and Logarithm
    // ========================================================================

    /// Complex exponential `e^a·(cos b + i·sin b)` for `z = a + bi`.
    ///
    /// Overflows to ±∞ (or NaN where ∞ meets a zero sine) for large `a`.
    #[inline]
    pub fn exp(z: Complex) -> Complex {
        let scale = z.re.exp();
        Complex::new(scale * z.im.cos(), scale * z.im.sin())
    }

    /// Principal natural logarithm `ln(a²+b²)/2 + i·arg(z)`.
    ///
    /// The imaginary part lies in (−π, π]. `ln(0)` is `(−∞, 0)`.
    #[inline]
    pub fn ln(z: Complex) -> Complex {
        Complex::new(z.norm_sqr().ln() / 2.0, z.arg())
    }

    /// Exponential that rejects overflow of a finite input.
    ///
    /// # Errors
    /// Returns `Overflow` if `z` is finite but `exp(z)` is not.
    pub fn checked_exp(z: Complex) -> NumericResult<Complex> {
        let w = Complex::exp(z);
        if z.is_finite() && !w.is_finite() {
            tracing::trace!(exponent = ?z, "complex exp overflow");
            return Err(NumericError::Overflow);
        }
        Ok(w)
    }

    /// Logarithm that rejects (0, 0).
    ///
    /// # Errors
    /// Returns `LogarithmOfZero` if `z` is zero.
    pub fn checked_ln(z: Complex) -> NumericResult<Complex> {
        if z.is_zero() {
            tracing::trace!("complex logarithm of zero rejected");
            return Err(NumericError::LogarithmOfZero);
        }
        Ok(Complex::ln(z))
    }

    // ========================================================================
    // Power and Square Root
    // ========================================================================

    /// `self` raised to the complex power `w`.
    ///
    /// With `r² = |self|²` and `θ = arg(self)`:
    ///
    /// ```text
    /// self^w = r^(w.re) · e^(−w.im·θ) · [cos φ + i·sin φ],
    /// φ = w.re·θ + ½·w.im·ln(r²)
    /// ```
    ///
    /// which is the principal value of `exp(w·ln(self))`. A zero base is
    /// not special-cased; `ln(0) = −∞` usually turns the result into NaN.
    ///
    /// # Example
    /// ```
    /// use complex_scalar::numeric::Complex;
    ///
    /// let minus_one = Complex::I.pow(Complex::from_real(2.0));
    /// assert!((minus_one.re + 1.0).abs() < 1e-12);
    /// assert!(minus_one.im.abs() < 1e-12);
    /// ```
    pub fn pow(self, w: Complex) -> Complex {
        let r2 = self.norm_sqr();
        let theta = self.arg();
        let modulus = r2.powf(w.re / 2.0) * (-w.im * theta).exp();
        let phase = w.re * theta + 0.5 * w.im * r2.ln();
        Complex::from_polar(modulus, phase)
    }

    /// Power that rejects a zero base.
    ///
    /// # Errors
    /// Returns `LogarithmOfZero` if `self` is zero.
    pub fn checked_pow(self, w: Complex) -> NumericResult<Complex> {
        if self.is_zero() {
            tracing::trace!(exponent = ?w, "complex power of zero base rejected");
            return Err(NumericError::LogarithmOfZero);
        }
        Ok(self.pow(w))
    }

    /// Principal square root.
    ///
    /// ```text
    /// re' = sqrt((re + |z|) / 2)
    /// im' = sign(im) · sqrt((−re + |z|) / 2)
    /// ```
    ///
    /// The real part of the result is never negative. Computed directly
    /// rather than through `pow(0.5)`, so roots of negative reals are exact.
    pub fn sqrt(self) -> Complex {
        let r = self.abs();
        Complex::new(
            ((self.re + r) / 2.0).sqrt(),
            branch_sign(self.im) * ((-self.re + r) / 2.0).sqrt(),
        )
    }
}
