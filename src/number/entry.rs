use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::arith::{self, Checked};

use super::Exact;

/// Exact non-negative integer over `u64`.
///
/// 0 doubles as the sentinel for "no exact result". The collision is
/// benign: no legal Tchisla value is 0 (digits are 1..9, subtraction
/// only keeps positive differences, division only exact quotients).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entry(u64);

impl Entry {
    pub fn value(self) -> u64 {
        self.0
    }

    /// Exact `self! / lesser!`. Sentinel when `self < lesser` or the
    /// product leaves `u64`.
    pub fn factorial_ratio(self, lesser: Entry) -> Entry {
        let mut acc = Checked::new((self.0 >= lesser.0) as u64);
        let mut multiplier = self.0;

        while multiplier > lesser.0 && acc.get() != 0 {
            let overflow = acc.mul(multiplier);
            acc.gate(!overflow);
            multiplier -= 1;
        }

        Entry(acc.get())
    }
}

impl From<u64> for Entry {
    fn from(value: u64) -> Self {
        Entry(value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Entry {
    type Output = Entry;

    fn add(self, other: Entry) -> Entry {
        let mut acc = Checked::new(self.0);
        let overflow = acc.add(other.0);
        acc.gate(!overflow);
        Entry(acc.get())
    }
}

impl Sub for Entry {
    type Output = Entry;

    fn sub(self, other: Entry) -> Entry {
        let mut acc = Checked::new(self.0);
        let underflow = acc.sub(other.0);
        acc.gate(!underflow);
        Entry(acc.get())
    }
}

impl Mul for Entry {
    type Output = Entry;

    fn mul(self, other: Entry) -> Entry {
        let mut acc = Checked::new(self.0);
        let overflow = acc.mul(other.0);
        acc.gate(!overflow);
        Entry(acc.get())
    }
}

impl Div for Entry {
    type Output = Entry;

    fn div(self, other: Entry) -> Entry {
        if other.0 == 0 {
            return Entry(0);
        }
        let quotient = self.0 / other.0;
        Entry(quotient * ((quotient * other.0 == self.0) as u64))
    }
}

impl Exact for Entry {
    const MAP_CAPACITY: usize = 1 << 18;

    fn repunit(repeats: usize, digit: u8) -> Self {
        let mut acc = Checked::new(0);
        for _ in 0..repeats {
            if acc.mul(10) || acc.add(digit as u64) {
                return Entry(0);
            }
        }
        Entry(acc.get())
    }

    fn one() -> Self {
        Entry(1)
    }

    fn truthy(self) -> bool {
        self.0 != 0
    }

    fn sqrt(self) -> Self {
        let root = self.0.isqrt();
        Entry(root * ((root * root == self.0) as u64))
    }

    fn factorial(self) -> Self {
        Entry(arith::factorial(self.0))
    }

    fn factorial_ratio(self, other: Self) -> Self {
        Entry::factorial_ratio(self, other)
    }

    fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut result = Entry(1);

        while exponent != 0 {
            if exponent & 1 == 1 {
                result = result * base;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base * base;
            }
        }
        result
    }

    fn exponent(self) -> Option<u64> {
        (self.0 > 0 && self.0 < u64::BITS as u64).then_some(self.0)
    }

    fn is_power_base(self) -> bool {
        self.0 > 1
    }

    fn reciprocal(self) -> Option<Self> {
        None
    }
}
