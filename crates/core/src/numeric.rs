//! Numeric element type for probability buffers.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub};

/// Floating-point element stored in a PDF buffer.
///
/// Implemented for `f32` and `f64`. Conversions are lossy in the same way
/// an `as` cast is.
pub trait Probability:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + MulAssign
    + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn exp(self) -> Self;
    fn from_usize(n: usize) -> Self;
    fn from_u64(n: u64) -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_probability {
    ($t:ty) => {
        impl Probability for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }
            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $t
            }
            #[inline]
            fn from_u64(n: u64) -> Self {
                n as $t
            }
            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_probability!(f32);
impl_probability!(f64);

/// Sum of a buffer, accumulated in `f64`.
pub fn total_mass<T: Probability>(pdf: &[T]) -> f64 {
    pdf.iter().map(|p| p.to_f64()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(<f32 as Probability>::from_usize(3), 3.0f32);
        assert_eq!(<f64 as Probability>::from_u64(7), 7.0f64);
        assert_eq!(<f32 as Probability>::from_f64(0.5).to_f64(), 0.5);
        assert_eq!(<f64 as Probability>::zero() + <f64 as Probability>::one(), 1.0);
    }

    #[test]
    fn test_exp_matches_std() {
        let x = 1.5f64;
        assert_eq!(Probability::exp(x), x.exp());
    }

    #[test]
    fn test_total_mass() {
        let pdf = [0.25f32, 0.25, 0.5];
        assert!((total_mass(&pdf) - 1.0).abs() < 1e-9);
        assert_eq!(total_mass::<f64>(&[]), 0.0);
    }
}
