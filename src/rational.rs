//! Exact rational numbers over fixed-width integers.
//!
//! A [`Rational`] is always kept normalized: the denominator is positive and
//! shares no factor with the numerator, and zero is uniquely `0/1`. That
//! makes equality and hashing structural and keeps tableau entries as small
//! as cross-cancellation allows.

use crate::integer::Int;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Rational {
    numerator: Int,
    denominator: Int,
}

impl Rational {
    /// Creates a normalized rational. A zero denominator is a programmer
    /// error, not an input condition.
    pub fn new(numerator: Int, denominator: Int) -> Self {
        assert!(!denominator.is_zero(), "rational with zero denominator");
        let mut result = Rational {
            numerator,
            denominator,
        };
        if result.denominator.is_negative() {
            result.numerator = -result.numerator;
            result.denominator = -result.denominator;
        }
        result.reduce();
        result
    }

    pub fn from_integer(numerator: Int) -> Self {
        Rational {
            numerator,
            denominator: Int::one(),
        }
    }

    fn reduce(&mut self) {
        let x = self.numerator.gcd(self.denominator);
        self.numerator /= x;
        self.denominator /= x;
    }

    /// The multiplicative inverse; the sign moves to the numerator so the
    /// denominator stays positive.
    pub fn recip(self) -> Self {
        assert!(!self.numerator.is_zero(), "reciprocal of zero");
        if self.numerator.is_negative() {
            Rational {
                numerator: -self.denominator,
                denominator: -self.numerator,
            }
        } else {
            Rational {
                numerator: self.denominator,
                denominator: self.numerator,
            }
        }
    }

    pub fn numer(&self) -> Int {
        self.numerator
    }

    pub fn denom(&self) -> Int {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == Int::one()
    }

    pub fn to_f64(self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(Int::zero())
    }
}

impl From<u32> for Rational {
    fn from(x: u32) -> Self {
        Rational::from_integer(Int::from(x))
    }
}

impl From<u64> for Rational {
    fn from(x: u64) -> Self {
        Rational::from_integer(Int::from(x))
    }
}

impl From<i32> for Rational {
    fn from(x: i32) -> Self {
        Rational::from_integer(Int::from(x))
    }
}

impl From<i64> for Rational {
    fn from(x: i64) -> Self {
        Rational::from_integer(Int::from(x))
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(mut self) -> Rational {
        self.numerator = -self.numerator;
        self
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, other: Rational) -> Rational {
        Rational::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, other: Rational) -> Rational {
        self + (-other)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, other: Rational) -> Rational {
        // Cancel across the two fractions first to keep the products small.
        let mut l = self;
        let mut r = other;
        let x = l.numerator.gcd(r.denominator);
        if x != Int::one() {
            l.numerator /= x;
            r.denominator /= x;
        }
        let y = r.numerator.gcd(l.denominator);
        if y != Int::one() {
            r.numerator /= y;
            l.denominator /= y;
        }
        Rational::new(l.numerator * r.numerator, l.denominator * r.denominator)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, other: Rational) -> Rational {
        self * other.recip()
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, other: Rational) {
        *self = *self + other;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, other: Rational) {
        *self = *self - other;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, other: Rational) {
        *self = *self * other;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, other: Rational) {
        *self = *self / other;
    }
}

impl Ord for Rational {
    /// `a/b <=> c/d` iff `a*d <=> c*b`; both denominators are positive.
    fn cmp(&self, other: &Rational) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::default()
    }
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(Int::one())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.numerator, f)?;
        if self.denominator != Int::one() {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
