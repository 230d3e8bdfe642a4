use crate::error::Result;

/// Arithmetic every complex number type offers, independent of the precision of its parts.
///
/// `Real` is the type of the real and imaginary parts.
pub trait Complex: Sized {
    type Real;

    fn real(&self) -> Self::Real;

    fn imaginary(&self) -> Self::Real;

    fn added_to(&self, other: &Self) -> Self;

    /// Returns `other - self`. The receiver is the subtrahend.
    fn subtracted_from(&self, other: &Self) -> Self;

    fn multiplied_by(&self, other: &Self) -> Self;

    /// Returns `self / other`, failing with `Error::DivideByZero` if `other` is zero.
    fn divided_by(&self, other: &Self) -> Result<Self>;
}
