use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Entry, Exact, Fraction};

#[test]
fn entry_repunit() {
    assert_eq!(Entry::repunit(1, 7).value(), 7);
    assert_eq!(Entry::repunit(4, 3).value(), 3333);
    assert_eq!(Entry::repunit(2, 9).value(), 99);
    // 21 nines do not fit in u64
    assert_eq!(Entry::repunit(21, 9).value(), 0);
}

#[test]
fn entry_addition_overflows_to_sentinel() {
    let almost = Entry::from(u64::MAX - 1);
    assert_eq!((almost + Entry::from(1)).value(), u64::MAX);
    assert_eq!((almost + Entry::from(2)).value(), 0);
}

#[test]
fn entry_subtraction_keeps_positive_differences() {
    assert_eq!((Entry::from(7) - Entry::from(3)).value(), 4);
    assert_eq!((Entry::from(3) - Entry::from(7)).value(), 0);
    assert_eq!((Entry::from(7) - Entry::from(7)).value(), 0);
}

#[test]
fn entry_division_is_exact_or_nothing() {
    assert_eq!((Entry::from(84) / Entry::from(7)).value(), 12);
    assert_eq!((Entry::from(85) / Entry::from(7)).value(), 0);
    assert_eq!((Entry::from(85) / Entry::from(0)).value(), 0);
}

#[test]
fn entry_pow_contracts() {
    assert_eq!(Entry::from(2).pow(10).value(), 1024);
    assert_eq!(Entry::from(7).pow(0).value(), 1);
    assert_eq!(Entry::from(0).pow(0).value(), 1);
    assert_eq!(Entry::from(0).pow(5).value(), 0);
    // 2^64 overflows
    assert_eq!(Entry::from(2).pow(64).value(), 0);
    assert_eq!(Entry::from(2).pow(63).value(), 1 << 63);
}

#[test]
fn entry_sqrt_requires_perfect_square() {
    assert_eq!(Entry::from(49).sqrt().value(), 7);
    assert_eq!(Entry::from(50).sqrt().value(), 0);
    assert_eq!(Entry::from(1).sqrt().value(), 1);
    assert_eq!(Entry::from(0).sqrt().value(), 0);
}

#[test]
fn entry_factorial_ratio() {
    let ten = Entry::from(10);
    let seven = Entry::from(7);
    assert_eq!(ten.factorial_ratio(seven).value(), 720);
    assert_eq!(seven.factorial_ratio(ten).value(), 0);
    assert_eq!(seven.factorial_ratio(seven).value(), 1);
    assert_eq!(seven.factorial_ratio(Entry::from(0)).value(), 5040);
    // collapses quickly instead of walking the whole range down
    let huge = Entry::from(u64::MAX - 3);
    assert_eq!(huge.factorial_ratio(seven).value(), 0);
}

#[test]
fn fraction_reduces_on_construction() {
    let f = Fraction::new(6, 8);
    assert_eq!((f.num(), f.den()), (3, 4));
    assert_eq!(Fraction::new(0, 5), Fraction::new(0, 9));
    assert_eq!(Fraction::new(0, 5).den(), 1);
}

#[test]
fn fraction_regimes() {
    assert!(Fraction::inf().is_infinite());
    assert!(!Fraction::inf().is_finite());
    assert!(Fraction::nan().is_nan());
    assert!(Fraction::new(0, 1).is_finite());
    assert!(!Fraction::new(0, 1).is_normal());
    assert!(Fraction::new(2, 3).is_normal());
}

#[test]
fn fraction_equality_follows_ieee() {
    assert_eq!(Fraction::new(2, 4), Fraction::new(1, 2));
    assert_ne!(Fraction::nan(), Fraction::nan());
    assert_ne!(Fraction::inf(), Fraction::inf());
    assert_ne!(Fraction::new(1, 2), Fraction::new(1, 3));
}

#[test]
fn fraction_inverse_cycles_regimes() {
    assert_eq!(Fraction::new(2, 3).inverse(), Fraction::new(3, 2));
    // inf⁻¹ = 0, 0⁻¹ = inf, nan⁻¹ = nan
    assert_eq!(Fraction::inf().inverse(), Fraction::new(0, 1));
    assert!(Fraction::new(0, 1).inverse().is_infinite());
    assert!(Fraction::nan().inverse().is_nan());
}

#[test]
fn fraction_sqrt() {
    assert_eq!(Fraction::new(4, 9).sqrt(), Fraction::new(2, 3));
    assert!(Fraction::new(2, 1).sqrt().is_nan());
    assert!(Fraction::new(4, 3).sqrt().is_nan());
    assert!(Fraction::inf().sqrt().is_infinite());
    assert!(Fraction::nan().sqrt().is_nan());
}

#[test]
fn fraction_square_overflow() {
    // numerator overflow is ∞
    assert!(Fraction::new(1 << 40, 3).square().is_infinite());
    // denominator overflow is NaN
    assert!(Fraction::new(3, 1 << 40).square().is_nan());
    assert_eq!(Fraction::new(2, 3).square(), Fraction::new(4, 9));
}

#[test]
fn fraction_arithmetic_regimes() {
    let x = Fraction::new(1, 6);
    let y = Fraction::new(5, 6);
    assert_eq!(x + y, Fraction::new(1, 1));
    assert_eq!(y - x, Fraction::new(2, 3));
    assert!((x - y).is_nan());
    assert_eq!(x * y, Fraction::new(5, 36));
    assert_eq!(x / y, Fraction::new(1, 5));

    assert!((Fraction::inf() + x).is_infinite());
    assert!((x + Fraction::inf()).is_infinite());
    assert!((Fraction::inf() - x).is_infinite());
    assert!((x - Fraction::inf()).is_nan());
    assert!((Fraction::inf() - Fraction::inf()).is_nan());
    assert!((Fraction::nan() + x).is_nan());
    assert!((Fraction::new(0, 1) * Fraction::inf()).is_nan());
    assert!((Fraction::inf() * x).is_infinite());
}

#[test]
fn fraction_factorial() {
    assert_eq!(Fraction::from(5).factorial(), Fraction::from(120));
    assert_eq!(Fraction::from(0).factorial(), Fraction::from(1));
    // overflow encodes as ∞, non-integers as NaN
    assert!(Fraction::from(21).factorial().is_infinite());
    assert!(Fraction::new(1, 2).factorial().is_nan());
    assert!(Fraction::nan().factorial().is_nan());
    assert!(Fraction::inf().factorial().is_nan());
}

#[test]
fn fraction_factorial_ratio_inverts_when_smaller() {
    let seven = Fraction::from(7);
    let nine = Fraction::from(9);
    assert_eq!(nine.factorial_ratio(seven), Fraction::from(72));
    assert_eq!(seven.factorial_ratio(nine), Fraction::new(1, 72));
    assert_eq!(seven.factorial_ratio(seven), Fraction::from(1));
    assert!(Fraction::new(1, 2).factorial_ratio(seven).is_nan());
}

#[test]
fn fraction_pow() {
    assert_eq!(Fraction::new(2, 3).pow(3), Fraction::new(8, 27));
    assert_eq!(Fraction::new(2, 3).pow(0), Fraction::from(1));
    assert_eq!(
        Fraction::new(2, 3).pow_fraction(Fraction::from(2)),
        Fraction::new(4, 9)
    );
    assert!(Fraction::new(2, 3)
        .pow_fraction(Fraction::new(1, 2))
        .is_nan());
}

#[test]
fn factorials_past_one_are_never_squares() {
    // Bertrand's postulate: n! for n ≥ 2 contains a prime to an odd
    // power, so the integer square root always misses.
    for n in 2..=20 {
        assert_eq!(Entry::from(n).factorial().sqrt().value(), 0, "n = {}", n);
    }
}

#[test]
fn random_round_trips() {
    let mut rng = StdRng::from_entropy();

    for _ in 0..100 {
        let x = Fraction::new(rng.gen::<u32>() as u64, rng.gen::<u32>() as u64);
        let y = Fraction::new(rng.gen::<u32>() as u64, rng.gen::<u32>() as u64);

        let sum = x + y;
        if sum.is_finite() {
            assert_eq!(sum - x, y, "({:?} + {:?}) - {:?}", x, y, x);
        }

        let product = x * y;
        if product.is_finite() && y.is_normal() {
            assert_eq!(product / y, x, "({:?} * {:?}) / {:?}", x, y, y);
        }

        let square = x.square();
        if square.is_finite() {
            assert_eq!(square.sqrt(), x, "sqrt({:?}^2)", x);
        }
    }
}
