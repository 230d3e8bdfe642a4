use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use crate::complex::Complex;
use crate::error::{Error, Result};

// mixed into every hash so a complex number doesn't hash like the tuple of its parts
const HASH_SEED: u64 = 0x6463_6f6d_706c_6578;

/// An immutable complex number with `f64` real and imaginary parts.
///
/// Values can only be created by [`DoubleComplex::value_of`] (or the conversions built on it),
/// which returns the canonical constants [`ZERO`](DoubleComplex::ZERO),
/// [`ONE`](DoubleComplex::ONE) and [`I`](DoubleComplex::I) whenever the parts match them.
///
/// Equality compares the parts numerically, so `-0.0` equals `0.0`, except that NaN equals
/// NaN so every value is equal to itself.
#[derive(Debug, Clone, Copy)]
pub struct DoubleComplex {
    real: f64,
    imag: f64,
}

impl DoubleComplex {
    /// The complex number `0`.
    pub const ZERO: DoubleComplex = DoubleComplex { real: 0.0, imag: 0.0 };
    /// The complex number `1`.
    pub const ONE: DoubleComplex = DoubleComplex { real: 1.0, imag: 0.0 };
    /// The imaginary unit `i`.
    pub const I: DoubleComplex = DoubleComplex { real: 0.0, imag: 1.0 };

    /// Returns the complex number `real + imag·i`.
    ///
    /// Any pair of values is accepted, including NaN and infinities. Pairs numerically equal to
    /// zero, the imaginary unit or one produce the canonical constant, so `value_of(-0.0, 0.0)`
    /// has the same bits as `ZERO`.
    pub fn value_of(real: f64, imag: f64) -> DoubleComplex {
        let canonical = if real == 0.0 && imag == 0.0 {
            Some(DoubleComplex::ZERO)
        } else if real == 0.0 && imag == 1.0 {
            Some(DoubleComplex::I)
        } else if real == 1.0 && imag == 0.0 {
            Some(DoubleComplex::ONE)
        } else {
            None
        };

        match canonical {
            Some(value) => {
                trace!("canonical value {} for ({:?}, {:?})", value, real, imag);
                value
            }
            None => DoubleComplex { real: real, imag: imag },
        }
    }

    /// Like `value_of` but for parts that might be absent, e.g. values coming from a
    /// generic numeric interface. Fails with `Error::InvalidArgument` if either part is `None`.
    pub fn try_value_of(real: Option<f64>, imag: Option<f64>) -> Result<DoubleComplex> {
        let real = real.ok_or(Error::InvalidArgument("real part"))?;
        let imag = imag.ok_or(Error::InvalidArgument("imaginary part"))?;
        Ok(DoubleComplex::value_of(real, imag))
    }

    pub fn real_part(&self) -> f64 {
        self.real
    }

    pub fn imaginary_part(&self) -> f64 {
        self.imag
    }

    /// Returns true if both parts have exactly the same bits as `other`'s.
    ///
    /// Stricter than `==`: it tells `-0.0` from `0.0` and NaNs with different bits apart.
    pub fn is_identical(&self, other: &DoubleComplex) -> bool {
        self.real.to_bits() == other.real.to_bits() && self.imag.to_bits() == other.imag.to_bits()
    }

    pub fn added_to(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::value_of(self.real + other.real, self.imag + other.imag)
    }

    /// Subtracts this number from `other`, returning `other - self`.
    pub fn subtracted_from(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::value_of(other.real - self.real, other.imag - self.imag)
    }

    pub fn multiplied_by(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::value_of(
            self.real * other.real - self.imag * other.imag,
            self.real * other.imag + self.imag * other.real,
        )
    }

    /// Returns `self / other`.
    ///
    /// Fails with `Error::DivideByZero` if `re² + im²` of `other` is exactly zero. Overflow and
    /// NaN follow the usual floating point rules and are not reported.
    pub fn divided_by(&self, other: &DoubleComplex) -> Result<DoubleComplex> {
        let scale = other.real * other.real + other.imag * other.imag;

        if scale == 0.0 {
            debug!("rejected division of {} by {}", self, other);
            return Err(Error::DivideByZero);
        }
        Ok(DoubleComplex::value_of(
            (self.real * other.real + self.imag * other.imag) / scale,
            (self.real * other.imag - self.imag * other.real) / scale,
        ))
    }
}

impl Complex for DoubleComplex {
    type Real = f64;

    fn real(&self) -> f64 {
        self.real_part()
    }

    fn imaginary(&self) -> f64 {
        self.imaginary_part()
    }

    fn added_to(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::added_to(self, other)
    }

    fn subtracted_from(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::subtracted_from(self, other)
    }

    fn multiplied_by(&self, other: &DoubleComplex) -> DoubleComplex {
        DoubleComplex::multiplied_by(self, other)
    }

    fn divided_by(&self, other: &DoubleComplex) -> Result<DoubleComplex> {
        DoubleComplex::divided_by(self, other)
    }
}

impl Default for DoubleComplex {
    fn default() -> DoubleComplex {
        DoubleComplex::ZERO
    }
}

impl From<f64> for DoubleComplex {
    fn from(real: f64) -> DoubleComplex {
        DoubleComplex::value_of(real, 0.0)
    }
}

impl From<(f64, f64)> for DoubleComplex {
    fn from((real, imag): (f64, f64)) -> DoubleComplex {
        DoubleComplex::value_of(real, imag)
    }
}

fn part_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for DoubleComplex {
    fn eq(&self, other: &DoubleComplex) -> bool {
        part_eq(self.real, other.real) && part_eq(self.imag, other.imag)
    }
}

impl Eq for DoubleComplex {}

/// Zero is hashed as `+0.0` and every NaN as `f64::NAN` so the hash agrees with `==`.
fn part_bits(part: f64) -> u64 {
    if part == 0.0 {
        0
    } else if part.is_nan() {
        f64::NAN.to_bits()
    } else {
        part.to_bits()
    }
}

impl Hash for DoubleComplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_SEED.hash(state);
        part_bits(self.real).hash(state);
        part_bits(self.imag).hash(state);
    }
}

/// Formats as `<real>+<imag>i`, or `<real><imag>i` when the imaginary part carries its own
/// minus sign. Parts always show a fractional digit, e.g. `123.0-456.0i`.
impl fmt::Display for DoubleComplex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.imag.is_sign_negative() && !self.imag.is_nan() {
            write!(f, "{:?}{:?}i", self.real, self.imag)
        } else {
            write!(f, "{:?}+{:?}i", self.real, self.imag)
        }
    }
}

impl Add for DoubleComplex {
    type Output = DoubleComplex;

    fn add(self, other: DoubleComplex) -> DoubleComplex {
        self.added_to(&other)
    }
}

impl Sub for DoubleComplex {
    type Output = DoubleComplex;

    fn sub(self, other: DoubleComplex) -> DoubleComplex {
        other.subtracted_from(&self)
    }
}

impl Mul for DoubleComplex {
    type Output = DoubleComplex;

    fn mul(self, other: DoubleComplex) -> DoubleComplex {
        self.multiplied_by(&other)
    }
}

//--------------------------------------------------------------------------------------------------
