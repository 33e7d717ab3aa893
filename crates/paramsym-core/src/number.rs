//! Concrete scalar values.
//!
//! Integer and rational arithmetic is exact while it fits in machine words
//! and degrades to `f64` on overflow. Operations that have no finite result
//! (division by zero, `sqrt(-1)`, ...) return `None` so that callers can
//! keep the expression symbolic instead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg};

/// A concrete numeric value.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// A 64-bit integer.
    Integer(i64),

    /// A rational number (numerator, denominator).
    ///
    /// Invariant: denominator > 1, gcd(num, den) == 1.
    Rational(i64, u64),

    /// A floating-point number. Compared bitwise.
    Float(f64),
}

impl Number {
    /// Creates the rational `num / den` in lowest terms.
    ///
    /// Returns `None` if `den` is zero.
    #[must_use]
    pub fn rational(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        Some(Self::from_ratio(i128::from(num), i128::from(den)))
    }

    /// Normalizes a ratio of wide integers. `den` must be non-zero.
    fn from_ratio(num: i128, den: i128) -> Self {
        debug_assert!(den != 0);
        let (num, den) = if den < 0 {
            match num.checked_neg().zip(den.checked_neg()) {
                Some(flipped) => flipped,
                #[allow(clippy::cast_precision_loss)]
                None => return Number::Float(num as f64 / den as f64),
            }
        } else {
            (num, den)
        };
        // den is positive here, so the gcd fits in i128.
        let g = i128::try_from(gcd(num.unsigned_abs(), den.unsigned_abs())).unwrap_or(1);
        let (num, den) = (num / g, den / g);

        match (i64::try_from(num), u64::try_from(den)) {
            (Ok(n), Ok(1)) => Number::Integer(n),
            (Ok(n), Ok(d)) => Number::Rational(n, d),
            #[allow(clippy::cast_precision_loss)]
            _ => Number::Float(num as f64 / den as f64),
        }
    }

    /// Returns the exact ratio for integers and rationals.
    fn as_ratio(self) -> Option<(i128, i128)> {
        match self {
            Number::Integer(n) => Some((i128::from(n), 1)),
            Number::Rational(n, d) => Some((i128::from(n), i128::from(d))),
            Number::Float(_) => None,
        }
    }

    /// Converts to a floating-point approximation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Rational(n, d) => n as f64 / d as f64,
            Number::Float(x) => x,
        }
    }

    /// Returns true if this is an exact integer or rational.
    #[must_use]
    pub fn is_exact(self) -> bool {
        !matches!(self, Number::Float(_))
    }

    /// Returns true if this number equals zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(n) => n == 0,
            Number::Rational(..) => false,
            Number::Float(x) => x == 0.0,
        }
    }

    /// Returns true if this number equals one.
    #[must_use]
    pub fn is_one(self) -> bool {
        match self {
            Number::Integer(n) => n == 1,
            Number::Rational(..) => false,
            Number::Float(x) => x == 1.0,
        }
    }

    /// Returns true if this number is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Number::Integer(n) | Number::Rational(n, _) => n < 0,
            Number::Float(x) => x < 0.0,
        }
    }

    /// Computes `self / other`, or `None` when dividing by zero.
    #[must_use]
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        if let (Some((an, ad)), Some((bn, bd))) = (self.as_ratio(), other.as_ratio()) {
            if let Some((num, den)) = an.checked_mul(bd).zip(ad.checked_mul(bn)) {
                return Some(Self::from_ratio(num, den));
            }
        }
        finite(self.to_f64() / other.to_f64())
    }

    /// Computes `self ^ exp`, or `None` when the result is not a finite real.
    #[must_use]
    pub fn checked_pow(self, exp: Self) -> Option<Self> {
        if let (Some((num, den)), Number::Integer(e)) = (self.as_ratio(), exp) {
            if let Ok(k) = u32::try_from(e.unsigned_abs()) {
                let (num, den) = if e < 0 {
                    if num == 0 {
                        return None;
                    }
                    (den, num)
                } else {
                    (num, den)
                };
                if let Some((n, d)) = num.checked_pow(k).zip(den.checked_pow(k)) {
                    return Some(Self::from_ratio(n, d));
                }
            }
        }
        finite(self.to_f64().powf(exp.to_f64()))
    }
}

/// Wraps a float result, rejecting NaN and infinities.
pub(crate) fn finite(x: f64) -> Option<Number> {
    x.is_finite().then_some(Number::Float(x))
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}

impl Add for Number {
    type Output = Number;

    fn add(self, other: Self) -> Self {
        if let (Some((an, ad)), Some((bn, bd))) = (self.as_ratio(), other.as_ratio()) {
            let exact = an
                .checked_mul(bd)
                .zip(bn.checked_mul(ad))
                .and_then(|(x, y)| x.checked_add(y))
                .zip(ad.checked_mul(bd));
            if let Some((num, den)) = exact {
                return Self::from_ratio(num, den);
            }
        }
        Number::Float(self.to_f64() + other.to_f64())
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, other: Self) -> Self {
        if let (Some((an, ad)), Some((bn, bd))) = (self.as_ratio(), other.as_ratio()) {
            if let Some((num, den)) = an.checked_mul(bn).zip(ad.checked_mul(bd)) {
                return Self::from_ratio(num, den);
            }
        }
        Number::Float(self.to_f64() * other.to_f64())
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self {
        match self {
            Number::Integer(n) => n
                .checked_neg()
                .map_or_else(|| Number::Float(-self.to_f64()), Number::Integer),
            Number::Rational(n, d) => n
                .checked_neg()
                .map_or_else(|| Number::Float(-self.to_f64()), |n| Number::Rational(n, d)),
            Number::Float(x) => Number::Float(-x),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Rational(an, ad), Number::Rational(bn, bd)) => an == bn && ad == bd,
            (Number::Float(a), Number::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Number::Integer(n) => n.hash(state),
            Number::Rational(n, d) => {
                n.hash(state);
                d.hash(state);
            }
            Number::Float(x) => x.to_bits().hash(state),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Rational(n, d) => write!(f, "{n}/{d}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}
