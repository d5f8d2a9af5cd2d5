//! Binomial coefficients and the bernstein basis polynomials with their derivatives.
//!
//! The degree `n` and index `i` are signed on purpose:
//! the derivatives are defined recursively through `n - 1` and `i - 1`,
//! and any term whose index leaves `[0, n]` simply vanishes.

use nalgebra::RealField;
use num::PrimInt;

use crate::error::{Error, Result};

/// Computes the binomial coefficient "`n` choose `k`" using the multiplicative formula.
///
/// Iterates `min(k, n - k)` times and divides after every multiplication,
/// so intermediate values stay as small as the result allows.
///
/// Returns `0` if `k` lies outside of `[0, n]` and `1` for `k = 0`.
///
/// # Errors
/// - [`Error::NegativeDegree`] if `n` is negative
/// - [`Error::Overflow`] if an intermediate product doesn't fit into `N`
pub fn n_choose_k<N: PrimInt>(n: N, k: N) -> Result<N> {
    if n < N::zero() {
        return Err(Error::NegativeDegree);
    }
    if k < N::zero() || k > n {
        return Ok(N::zero());
    }

    let lower = k.min(n - k);
    let mut total = N::one();
    let mut above = n;
    let mut i = N::zero();
    while i < lower {
        total = total.checked_mul(&above).ok_or(Error::Overflow)?;
        i = i + N::one();
        total = total / i;
        above = above - N::one();
    }
    Ok(total)
}

/// Converts a small integer into the real field `T`.
fn real<T: RealField>(x: i32) -> T {
    nalgebra::convert(f64::from(x))
}

/// Binomial coefficient as a real number.
///
/// Falls back to multiplying in floating point when the exact integer doesn't fit an `i64`.
fn binomial<T: RealField>(n: i32, k: i32) -> T {
    match n_choose_k(i64::from(n), i64::from(k)) {
        Ok(exact) => nalgebra::convert(exact as f64),
        Err(_) => {
            let lower = k.min(n - k);
            let mut total = T::one();
            for j in 0..lower {
                total *= real::<T>(n - j) / real::<T>(j + 1);
            }
            total
        }
    }
}

/// Evaluates the `i`-th bernstein basis polynomial of degree `n` at `u`:
/// $\binom{n}{i} u^i (1-u)^{n-i}$
///
/// Returns exactly zero for `i < 0` or `i > n`.
pub fn bernstein<T: RealField>(n: i32, i: i32, u: T) -> T {
    if i < 0 || i > n {
        return T::zero();
    }
    let one_minus_u = T::one() - u.clone();
    binomial::<T>(n, i) * u.powi(i) * one_minus_u.powi(n - i)
}

/// Evaluates the first derivative of [`bernstein`] with respect to `u`.
///
/// Uses $B'_{n,i} = n (B_{n-1,i-1} - B_{n-1,i})$.
pub fn bernstein_derivative<T: RealField>(n: i32, i: i32, u: T) -> T {
    let lower = bernstein(n - 1, i - 1, u.clone());
    let upper = bernstein(n - 1, i, u);
    real::<T>(n) * (lower - upper)
}

/// Evaluates the second derivative of [`bernstein`] with respect to `u`.
///
/// Applies the same recursion as [`bernstein_derivative`] one level deeper.
pub fn bernstein_second_derivative<T: RealField>(n: i32, i: i32, u: T) -> T {
    let lower = bernstein_derivative(n - 1, i - 1, u.clone());
    let upper = bernstein_derivative(n - 1, i, u);
    real::<T>(n) * (lower - upper)
}

/// Selects which per index coefficient a blend applies to the control points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coefficient {
    /// The bernstein basis itself, yielding points on the curve
    Basis,

    /// The basis' first derivative, yielding the curve's velocity
    FirstDerivative,

    /// The basis' second derivative, yielding the curve's acceleration
    SecondDerivative,
}

impl Coefficient {
    /// Evaluates the selected coefficient function for degree `n`, index `i` at `u`.
    pub fn evaluate<T: RealField>(self, n: i32, i: i32, u: T) -> T {
        match self {
            Coefficient::Basis => bernstein(n, i, u),
            Coefficient::FirstDerivative => bernstein_derivative(n, i, u),
            Coefficient::SecondDerivative => bernstein_second_derivative(n, i, u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn binomial_edges_and_symmetry() {
        for n in 0..30i64 {
            assert_eq!(n_choose_k(n, 0), Ok(1));
            assert_eq!(n_choose_k(n, n), Ok(1));
            for k in 0..=n {
                assert_eq!(n_choose_k(n, k), n_choose_k(n, n - k));
            }
        }
        assert_eq!(n_choose_k(5u32, 2), Ok(10));
        assert_eq!(n_choose_k(10i32, 3), Ok(120));
        assert_eq!(n_choose_k(52i64, 5), Ok(2_598_960));
    }

    #[test]
    fn binomial_failures() {
        assert_eq!(n_choose_k(-1i32, 0), Err(Error::NegativeDegree));
        assert_eq!(n_choose_k(4i32, 5), Ok(0));
        assert_eq!(n_choose_k(4i32, -1), Ok(0));
        assert_eq!(n_choose_k(40u8, 20), Err(Error::Overflow));
    }

    #[test]
    fn basis_out_of_range_is_zero() {
        for u in [0.0, 0.3, 1.0, 1.7] {
            assert_eq!(bernstein(3, -1, u), 0.0);
            assert_eq!(bernstein(3, 4, u), 0.0);
            assert_eq!(bernstein(-1, 0, u), 0.0);
        }
    }

    #[test]
    fn partition_of_unity() {
        for n in 0..12 {
            for step in 0..=20 {
                let u = step as f64 / 20.0;
                let sum: f64 = (0..=n).map(|i| bernstein(n, i, u)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn large_degree_falls_back_to_floats() {
        // C(80, 40) overflows an i64
        let sum: f64 = (0..=80).map(|i| bernstein(80, i, 0.5)).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-5;
        for n in 1..6 {
            for i in 0..=n {
                for u in [0.1, 0.4, 0.75] {
                    let numeric = (bernstein(n, i, u + h) - bernstein(n, i, u - h)) / (2.0 * h);
                    assert_relative_eq!(bernstein_derivative(n, i, u), numeric, epsilon = 1e-6);

                    let numeric = (bernstein_derivative(n, i, u + h)
                        - bernstein_derivative(n, i, u - h))
                        / (2.0 * h);
                    assert_relative_eq!(
                        bernstein_second_derivative(n, i, u),
                        numeric,
                        epsilon = 1e-4
                    );
                }
            }
        }
    }

    #[test]
    fn derivatives_sum_to_zero() {
        for n in 0..8 {
            let first: f64 = (0..=n).map(|i| bernstein_derivative(n, i, 0.35)).sum();
            let second: f64 = (0..=n)
                .map(|i| Coefficient::SecondDerivative.evaluate(n, i, 0.35))
                .sum();
            assert_relative_eq!(first, 0.0, epsilon = 1e-10);
            assert_relative_eq!(second, 0.0, epsilon = 1e-9);
        }
    }
}
