use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

use crate::arith::{gcd, Checked};

use super::{Entry, Exact};

/// Exact non-negative rational over `u64`, with three regimes:
///
/// * finite: `den != 0`, reduced so that `gcd(num, den) == 1`;
/// * positive infinity: `num != 0, den == 0` (overflow happened);
/// * NaN: `num == 0, den == 0` (no exact result exists).
///
/// Zero (`num == 0, den != 0`) is a legitimate finite value, distinct
/// from NaN, but never worth recording in a search.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: u64,
    den: u64,
}

impl Fraction {
    /// Reduced fraction `num / den`. `new(n, 0)` with `n != 0` is ∞,
    /// `new(0, 0)` NaN.
    pub fn new(num: u64, den: u64) -> Self {
        let divisor = gcd(num, den);
        if divisor == 0 {
            return Self::nan();
        }
        Fraction {
            num: num / divisor,
            den: den / divisor,
        }
    }

    /// Constructor for parts already known to be coprime.
    fn canonical(num: u64, den: u64) -> Self {
        Fraction { num, den }
    }

    pub fn inf() -> Self {
        Fraction { num: 1, den: 0 }
    }

    pub fn nan() -> Self {
        Fraction { num: 0, den: 0 }
    }

    pub fn num(self) -> u64 {
        self.num
    }

    pub fn den(self) -> u64 {
        self.den
    }

    pub fn is_finite(self) -> bool {
        self.den != 0
    }

    pub fn is_infinite(self) -> bool {
        self.num != 0 && self.den == 0
    }

    pub fn is_nan(self) -> bool {
        self.num == 0 && self.den == 0
    }

    /// Finite and non-zero.
    pub fn is_normal(self) -> bool {
        self.num != 0 && self.den != 0
    }

    /// Swaps numerator and denominator: finite↔finite, ∞→0, 0→∞,
    /// NaN→NaN.
    pub fn inverse(self) -> Self {
        Fraction::canonical(self.den, self.num)
    }

    /// Exact square root: both parts must be perfect squares. ∞ stays
    /// ∞; everything else inexact is NaN.
    pub fn sqrt(self) -> Self {
        let num = self.num.isqrt();
        let den = self.den.isqrt();
        let valid = num * num == self.num && den * den == self.den;

        Fraction::canonical(
            num * ((valid || self.den == 0) as u64),
            den * (valid as u64),
        )
    }

    /// Product of two fractions whose cross parts are already coprime,
    /// so no reduction is needed. Denominator overflow is NaN,
    /// numerator overflow ∞.
    fn apply(self, other: Fraction) -> Fraction {
        let mut num = Checked::new(self.num);
        let mut den = Checked::new(self.den);

        let num_overflow = num.mul(other.num);
        if den.mul(other.den) {
            return Fraction::nan();
        }
        if num_overflow {
            return Fraction::inf();
        }
        Fraction::canonical(num.get(), den.get())
    }

    pub fn square(self) -> Self {
        self.apply(self)
    }

    /// Exact factorial of an integer fraction; overflow is ∞, a
    /// non-integer argument NaN.
    pub fn factorial(self) -> Self {
        if self.den != 1 {
            return Fraction::nan();
        }
        match Entry::from(self.num).factorial().value() {
            0 => Fraction::inf(),
            value => Fraction::from(value),
        }
    }

    /// Exact `self! / other!` for two integer fractions, inverted when
    /// `self < other` so the quotient of factorials is always taken
    /// larger over smaller.
    pub fn factorial_ratio(self, other: Fraction) -> Self {
        if self.den != 1 || other.den != 1 {
            return Fraction::nan();
        }

        let larger = Entry::from(self.num.max(other.num));
        let smaller = Entry::from(self.num.min(other.num));
        let ratio = larger.factorial_ratio(smaller).value();
        if ratio == 0 {
            return Fraction::nan();
        }

        let fraction = Fraction::from(ratio);
        if self.num > other.num {
            fraction
        } else {
            fraction.inverse()
        }
    }

    /// Exact power by binary exponentiation. `pow(0)` is 1.
    pub fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut result = Fraction::from(1);

        while exponent != 0 {
            if exponent & 1 == 1 {
                result = result.apply(base);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.square();
            }
        }
        result
    }

    /// Power with a fraction exponent, defined only for integer
    /// exponents.
    pub fn pow_fraction(self, exponent: Fraction) -> Self {
        if exponent.den == 1 {
            self.pow(exponent.num)
        } else {
            Fraction::nan()
        }
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Fraction { num: value, den: 1 }
    }
}

/// Finite fractions compare part-wise; NaN ≠ NaN and ∞ ≠ ∞, following
/// IEEE-754.
impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.den != 0 && self.den == other.den && self.num == other.num
    }
}

// Only normal fractions are ever used as map keys, and equality is
// reflexive on those.
impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.num.rotate_left(32) ^ self.den);
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else if self.den != 0 {
            write!(f, "({}/{})", self.num, self.den)
        } else if self.num != 0 {
            write!(f, "inf")
        } else {
            write!(f, "nan")
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        if self.is_nan() || other.is_nan() {
            return Fraction::nan();
        }
        if self.den == 0 || other.den == 0 {
            return Fraction::inf();
        }

        let divisor = gcd(self.den, other.den);
        let self_scale = other.den / divisor;
        let other_scale = self.den / divisor;

        let mut den = Checked::new(self.den);
        if den.mul(self_scale) {
            return Fraction::nan();
        }

        let mut num = Checked::new(self.num);
        let mut cross = Checked::new(other.num);
        if num.mul(self_scale) || cross.mul(other_scale) || num.add(cross.get()) {
            return Fraction::inf();
        }

        Fraction::new(num.get(), den.get())
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        if self.is_nan() || other.is_nan() {
            return Fraction::nan();
        }
        if self.den == 0 {
            return if other.den == 0 {
                Fraction::nan()
            } else {
                Fraction::inf()
            };
        }
        if other.den == 0 {
            return Fraction::nan();
        }

        let divisor = gcd(self.den, other.den);
        let self_scale = other.den / divisor;
        let other_scale = self.den / divisor;

        let mut den = Checked::new(self.den);
        let mut num = Checked::new(self.num);
        let mut cross = Checked::new(other.num);

        if den.mul(self_scale)
            || num.mul(self_scale)
            || cross.mul(other_scale)
            || num.sub(cross.get())
        {
            return Fraction::nan();
        }

        Fraction::new(num.get(), den.get())
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        Fraction::new(self.num, other.den).apply(Fraction::new(other.num, self.den))
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, other: Fraction) -> Fraction {
        self * other.inverse()
    }
}

impl Exact for Fraction {
    const MAP_CAPACITY: usize = 1 << 19;

    fn repunit(repeats: usize, digit: u8) -> Self {
        Fraction::from(Entry::repunit(repeats, digit).value())
    }

    fn one() -> Self {
        Fraction::from(1)
    }

    fn truthy(self) -> bool {
        self.is_normal()
    }

    fn sqrt(self) -> Self {
        Fraction::sqrt(self)
    }

    fn factorial(self) -> Self {
        Fraction::factorial(self)
    }

    fn factorial_ratio(self, other: Self) -> Self {
        Fraction::factorial_ratio(self, other)
    }

    fn pow(self, exponent: u64) -> Self {
        Fraction::pow(self, exponent)
    }

    fn exponent(self) -> Option<u64> {
        (self.den == 1 && self.num > 0 && self.num < u64::BITS as u64).then_some(self.num)
    }

    fn is_power_base(self) -> bool {
        self.is_normal() && !(self.num == 1 && self.den == 1)
    }

    fn reciprocal(self) -> Option<Self> {
        Some(self.inverse())
    }
}
