// ============================================================================
// Complex Scalar Library
// Double-precision complex numbers with principal-branch transcendentals
// ============================================================================

//! # Complex Scalar
//!
//! A small `Copy` value type for complex arithmetic over `f64`.
//!
//! ## Features
//!
//! - **Cartesian representation** with `+ - * /` and negation operators
//! - **Polar queries**: magnitude (`abs`) and principal argument (`arg`)
//! - **Transcendental functions**: `exp`, `ln`, `pow`, `sqrt`, all sharing one
//!   branch cut along the negative real axis
//! - **IEEE semantics**: NaN and ±∞ propagate; nothing panics or errors
//! - **Checked variants** (`checked_div`, `checked_ln`, ...) for callers who
//!   want degenerate inputs reported as [`numeric::NumericError`]
//!
//! ## Example
//!
//! ```rust
//! use complex_scalar::prelude::*;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//!
//! // Narrowing yields the magnitude, not the real part
//! assert_eq!(z.to_real(), 5.0);
//!
//! // Principal square root of -1
//! assert_eq!(Complex::from_real(-1.0).sqrt(), Complex::I);
//!
//! // e^(ln z) round-trips
//! let back = Complex::exp(Complex::ln(z));
//! assert!((back - z).abs() < 1e-12);
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Complex, NumericError, NumericResult};
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::{quickcheck, TestResult};

    fn complex(range: f64) -> impl Strategy<Value = Complex> {
        (-range..range, -range..range).prop_map(|(re, im)| Complex::new(re, im))
    }

    fn near(actual: Complex, expected: Complex, scale: f64) -> bool {
        within(actual, expected, 1e-9 * (1.0 + scale))
    }

    fn within(actual: Complex, expected: Complex, tol: f64) -> bool {
        (actual - expected).abs() <= tol
    }

    proptest! {
        #[test]
        fn prop_identities(z in complex(1e6)) {
            prop_assert_eq!(z + Complex::ZERO, z);
            prop_assert_eq!(z * Complex::ONE, z);
        }

        #[test]
        fn prop_div_inverts_mul(z1 in complex(100.0), z2 in complex(100.0)) {
            prop_assume!(z2.abs() > 1e-3);
            prop_assert!(near((z1 * z2) / z2, z1, z1.abs()));
        }

        #[test]
        fn prop_abs_embeds_reals(a in -1e6..1e6f64) {
            prop_assert_eq!(Complex::from_real(a).abs(), a.abs());
        }

        #[test]
        fn prop_arg_in_principal_range(z in complex(1e3)) {
            let theta = z.arg();
            prop_assert!(theta > -std::f64::consts::PI);
            prop_assert!(theta <= std::f64::consts::PI);
        }

        #[test]
        fn prop_exp_ln_round_trip(z in complex(100.0)) {
            prop_assume!(!z.is_zero());
            prop_assert!(near(Complex::exp(Complex::ln(z)), z, z.abs()));
        }

        #[test]
        fn prop_sqrt_squares_back(z in complex(1e4)) {
            let s = z.sqrt();
            prop_assert!(s.re >= 0.0);
            // Cancellation in re + |z| near the cut costs about half the digits
            prop_assert!(within(s * s, z, 1e-6 * (1.0 + z.abs())));
        }

        #[test]
        fn prop_pow_matches_exp_ln(z in complex(10.0), w in complex(3.0)) {
            prop_assume!(z.abs() > 1e-3);
            let expected = Complex::exp(w * Complex::ln(z));
            prop_assert!(near(z.pow(w), expected, expected.abs()));
        }

        #[test]
        fn prop_to_real_is_magnitude(z in complex(1e6)) {
            prop_assert_eq!(z.to_real(), z.abs());
        }
    }

    quickcheck! {
        fn qc_add_commutes(a: f64, b: f64, c: f64, d: f64) -> TestResult {
            let (z1, z2) = (Complex::new(a, b), Complex::new(c, d));
            if !(z1.is_finite() && z2.is_finite()) {
                return TestResult::discard();
            }
            TestResult::from_bool(z1 + z2 == z2 + z1)
        }

        fn qc_mul_commutes(a: f64, b: f64, c: f64, d: f64) -> TestResult {
            let (z1, z2) = (Complex::new(a, b), Complex::new(c, d));
            let (p, q) = (z1 * z2, z2 * z1);
            if p.is_nan() || q.is_nan() {
                return TestResult::discard();
            }
            TestResult::from_bool(p == q)
        }
    }
}
