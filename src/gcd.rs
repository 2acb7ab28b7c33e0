//! Greatest common divisor with interchangeable reduction strategies.
//!
//! Two strategies (the classic Euclidean remainder loop and Stein's binary
//! GCD) sit behind a single validation and normalization pipeline, so they
//! differ only in how two non-negative, non-both-zero integers are reduced.
//! Entry points exist for pairs, triples and slices; each has a timed variant
//! that also reports how long the reduction itself took.

use crate::error::{Error, Result};
use crate::ord::descending;
use num_traits::{PrimInt, Unsigned};
use std::mem;
use std::time::{Duration, Instant};

/// A reduction strategy: the GCD of two non-negative integers that are not
/// both zero. Implementors are stateless; validation happens outside.
trait Reduce {
    fn reduce<T: PrimInt + Unsigned>(&self, a: T, b: T) -> T;
}

/// Remainder-based reduction. When one operand is zero the loop is never
/// entered (or exits immediately) and the other operand falls through.
struct EuclideanGcd;

impl Reduce for EuclideanGcd {
    fn reduce<T: PrimInt + Unsigned>(&self, mut a: T, mut b: T) -> T {
        while !b.is_zero() {
            let t = a % b;
            a = b;
            b = t;
        }
        a
    }
}

/// Shift-and-subtract reduction, avoiding division entirely.
struct SteinGcd;

impl Reduce for SteinGcd {
    fn reduce<T: PrimInt + Unsigned>(&self, mut a: T, mut b: T) -> T {
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        // factor out the largest power of two dividing both operands
        let shift = (a | b).trailing_zeros() as usize;
        a = a >> shift;
        b = b >> shift;

        // the remaining twos in either operand are not common factors
        a = a >> a.trailing_zeros() as usize;
        loop {
            b = b >> b.trailing_zeros() as usize;
            if a > b {
                mem::swap(&mut a, &mut b);
            }
            b = b - a;
            if b.is_zero() {
                break;
            }
        }
        a << shift
    }
}

/// Selects which reduction algorithm drives the GCD pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcdStrategy {
    /// Classic Euclidean algorithm, remainder based.
    Euclidean,
    /// Stein's binary algorithm, shift and subtraction based.
    Stein,
}

impl GcdStrategy {
    /// Maps the selector string of the presentation boundary: `"euclidean"`
    /// picks [GcdStrategy::Euclidean], any other value picks
    /// [GcdStrategy::Stein].
    pub fn from_selector(selector: &str) -> Self {
        if selector == "euclidean" {
            GcdStrategy::Euclidean
        } else {
            GcdStrategy::Stein
        }
    }

    fn reduce(self, a: u32, b: u32) -> u32 {
        match self {
            GcdStrategy::Euclidean => EuclideanGcd.reduce(a, b),
            GcdStrategy::Stein => SteinGcd.reduce(a, b),
        }
    }

    /// Returns the greatest common divisor of `a` and `b`.
    ///
    /// Both operands zero is rejected as [Error::InvalidInput]; both operands
    /// equal to [i32::MIN] is rejected as [Error::OutOfRange], since their
    /// absolute values leave the i32 range. Negative operands are otherwise
    /// reduced by absolute value.
    ///
    /// Known gap carried over from the original contract: a single [i32::MIN]
    /// operand is accepted. Paired with a nonzero operand the result still
    /// fits (it divides the other operand); paired with zero the mathematical
    /// result 2^31 does not fit and wraps to a negative value.
    pub fn gcd(self, a: i32, b: i32) -> Result<i32> {
        check_pair(a, b)?;
        Ok(self.reduce(a.unsigned_abs(), b.unsigned_abs()) as i32)
    }

    /// Returns the greatest common divisor of a triple.
    ///
    /// The triple reduces through the pair pipeline with a rescue rule: when
    /// `a` and `b` are both zero but `c` is not, `c` takes the place of `a`,
    /// so a single nonzero value among three zeros yields its absolute
    /// magnitude instead of the pairwise both-zero rejection. Outside the
    /// rescue case the third operand does not participate in the reduction;
    /// this mirrors the original contract exactly.
    pub fn gcd3(self, a: i32, b: i32, c: i32) -> Result<i32> {
        self.gcd(rescue_triple(a, b, c), b)
    }

    /// Returns the greatest common divisor of a slice of numbers.
    ///
    /// `None` is rejected as [Error::NullInput] and slices with fewer than
    /// two elements as [Error::InvalidInput]. The input is sorted in
    /// descending order and folded pairwise from the two largest elements
    /// down, stopping early once an intermediate result reaches 1.
    pub fn gcd_of(self, numbers: Option<&[i32]>) -> Result<i32> {
        let numbers = check_numbers(numbers)?;
        let mut sorted = numbers.to_vec();
        sorted.sort_by(descending);
        self.fold(&sorted)
    }

    /// Same as [GcdStrategy::gcd], also reporting the elapsed wall-clock
    /// time of the reduction step. Validation and normalization run before
    /// the clock starts.
    pub fn gcd_timed(self, a: i32, b: i32) -> Result<(i32, Duration)> {
        check_pair(a, b)?;
        let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
        Ok(measure(|| self.reduce(a, b) as i32))
    }

    /// Same as [GcdStrategy::gcd3], also reporting the elapsed wall-clock
    /// time of the reduction step.
    pub fn gcd3_timed(self, a: i32, b: i32, c: i32) -> Result<(i32, Duration)> {
        self.gcd_timed(rescue_triple(a, b, c), b)
    }

    /// Same as [GcdStrategy::gcd_of], also reporting the elapsed wall-clock
    /// time of the sort-and-fold step.
    pub fn gcd_of_timed(self, numbers: Option<&[i32]>) -> Result<(i32, Duration)> {
        let numbers = check_numbers(numbers)?;
        let mut sorted = numbers.to_vec();
        let (gcd, elapsed) = measure(|| {
            sorted.sort_by(descending);
            self.fold(&sorted)
        });
        Ok((gcd?, elapsed))
    }

    /// Folds a descending-sorted slice of at least two elements pairwise.
    /// Each step goes through the validated pair entry, so a both-zero or
    /// both-minimum pair surfacing mid-fold still reports its error.
    fn fold(self, sorted: &[i32]) -> Result<i32> {
        let mut gcd = self.gcd(sorted[0], sorted[1])?;
        for &n in &sorted[2..] {
            if gcd == 1 {
                // 1 divides everything, no further fold can change it
                break;
            }
            gcd = self.gcd(gcd, n)?;
        }
        Ok(gcd)
    }
}

fn check_pair(a: i32, b: i32) -> Result<()> {
    if a == 0 && b == 0 {
        return Err(Error::InvalidInput("cannot compute the GCD of two zeros"));
    }
    if a == i32::MIN && b == i32::MIN {
        // negating i32::MIN overflows, so neither absolute value exists
        return Err(Error::OutOfRange(
            "the GCD of two i32::MIN operands exceeds the i32 range",
        ));
    }
    Ok(())
}

fn check_numbers(numbers: Option<&[i32]>) -> Result<&[i32]> {
    let numbers = numbers.ok_or(Error::NullInput)?;
    if numbers.len() < 2 {
        return Err(Error::InvalidInput("the array needs at least 2 elements"));
    }
    Ok(numbers)
}

fn rescue_triple(a: i32, b: i32, c: i32) -> i32 {
    if a == 0 && b == 0 && c != 0 {
        c
    } else {
        a
    }
}

/// Runs `f` once and returns its result together with the elapsed time.
fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    const STRATEGIES: [GcdStrategy; 2] = [GcdStrategy::Euclidean, GcdStrategy::Stein];

    #[test]
    fn pair_known_cases() {
        let cases = [
            (441, 700, 7),
            (30, 12, 6),
            (1, 1, 1),
            (5, 10, 5),
            (54, 24, 6),
            (270, 192, 6),
            (7, 13, 1),
            (i32::MAX, i32::MAX, i32::MAX),
            (i32::MIN, -1073741824, 1073741824),
            (i32::MIN, 1, 1),
        ];
        for strategy in STRATEGIES {
            for (a, b, expected) in cases {
                assert_eq!(
                    strategy.gcd(a, b),
                    Ok(expected),
                    "{:?} on ({}, {})",
                    strategy,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn pair_zero_identity() {
        for strategy in STRATEGIES {
            for a in [1, -1, 7, -7, 1024, i32::MAX] {
                assert_eq!(strategy.gcd(a, 0), Ok(a.abs()));
                assert_eq!(strategy.gcd(0, a), Ok(a.abs()));
            }
        }
    }

    #[test]
    fn pair_invalid_inputs() {
        for strategy in STRATEGIES {
            assert!(matches!(strategy.gcd(0, 0), Err(Error::InvalidInput(_))));
            assert!(matches!(
                strategy.gcd(i32::MIN, i32::MIN),
                Err(Error::OutOfRange(_))
            ));
            // validation is stateless, repeating gives the identical error
            assert_eq!(strategy.gcd(0, 0), strategy.gcd(0, 0));
            assert_eq!(
                strategy.gcd(i32::MIN, i32::MIN),
                strategy.gcd(i32::MIN, i32::MIN)
            );
        }
    }

    #[test]
    fn strategies_agree_with_oracle() {
        // both strategies against num_integer::gcd on random operands
        for _ in 0..10000 {
            let (a, b) = (random::<i32>(), random::<i32>());
            if a == 0 && b == 0 || a == i32::MIN && b == i32::MIN {
                continue;
            }
            let expected = num_integer::gcd(a.unsigned_abs(), b.unsigned_abs()) as i32;
            for strategy in STRATEGIES {
                assert_eq!(strategy.gcd(a, b), Ok(expected), "({}, {})", a, b);
            }
        }
    }

    #[test]
    fn pair_commutative() {
        for _ in 0..1000 {
            let (a, b) = (random::<i16>() as i32, random::<i16>() as i32);
            if a == 0 && b == 0 {
                continue;
            }
            for strategy in STRATEGIES {
                assert_eq!(strategy.gcd(a, b), strategy.gcd(b, a));
            }
        }
    }

    #[test]
    fn triple_known_cases() {
        // the third operand only participates through the rescue rule
        let cases = [
            (24654, 25473, 954, 21),
            (15, 10, 20, 5),
            (0, 0, 1, 1),
            (0, 0, -7, 7),
        ];
        for strategy in STRATEGIES {
            for (a, b, c, expected) in cases {
                assert_eq!(strategy.gcd3(a, b, c), Ok(expected));
            }
            assert!(matches!(
                strategy.gcd3(0, 0, 0),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn slice_known_cases() {
        let cases: [(&[i32], i32); 6] = [
            (&[750, 250, 2500, 1750], 250),
            (&[2, 4, 6, 8], 2),
            (&[i32::MAX, i32::MAX, i32::MAX, i32::MAX], i32::MAX),
            (&[1, 5], 1),
            (&[0, 0, 0, 0, 1], 1),
            (&[0, 1, 0], 1),
        ];
        for strategy in STRATEGIES {
            for (numbers, expected) in cases {
                assert_eq!(
                    strategy.gcd_of(Some(numbers)),
                    Ok(expected),
                    "{:?} on {:?}",
                    strategy,
                    numbers
                );
            }
        }
    }

    #[test]
    fn slice_invalid_inputs() {
        for strategy in STRATEGIES {
            assert_eq!(strategy.gcd_of(None), Err(Error::NullInput));
            assert!(matches!(
                strategy.gcd_of(Some(&[])),
                Err(Error::InvalidInput(_))
            ));
            assert!(matches!(
                strategy.gcd_of(Some(&[12])),
                Err(Error::InvalidInput(_))
            ));
            assert!(matches!(
                strategy.gcd_of(Some(&[0, 0, 0])),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn slice_does_not_mutate_input() {
        let numbers = [2, 8, 4, 6];
        assert_eq!(GcdStrategy::Euclidean.gcd_of(Some(&numbers)), Ok(2));
        assert_eq!(numbers, [2, 8, 4, 6]);
    }

    #[test]
    fn timed_variants_match_untimed() {
        for strategy in STRATEGIES {
            let (gcd, _) = strategy.gcd_timed(750, 250).unwrap();
            assert_eq!(Ok(gcd), strategy.gcd(750, 250));

            let (gcd, _) = strategy.gcd3_timed(15, 10, 20).unwrap();
            assert_eq!(Ok(gcd), strategy.gcd3(15, 10, 20));

            let numbers = [750, 250, 2500, 1750];
            let (gcd, _) = strategy.gcd_of_timed(Some(&numbers)).unwrap();
            assert_eq!(Ok(gcd), strategy.gcd_of(Some(&numbers)));

            // timing never rescues an invalid call
            assert!(strategy.gcd_timed(0, 0).is_err());
            assert_eq!(strategy.gcd_of_timed(None), Err(Error::NullInput));
        }
    }

    #[test]
    fn selector_mapping() {
        assert_eq!(
            GcdStrategy::from_selector("euclidean"),
            GcdStrategy::Euclidean
        );
        assert_eq!(GcdStrategy::from_selector("stein"), GcdStrategy::Stein);
        assert_eq!(GcdStrategy::from_selector(""), GcdStrategy::Stein);
        assert_eq!(
            GcdStrategy::from_selector("anything else"),
            GcdStrategy::Stein
        );
    }
}
