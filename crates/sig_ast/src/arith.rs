//! Arithmetic combinators over [`Expr`] nodes.
//!
//! These are total functions that always return a new normalized node; the
//! heavy lifting (flattening, merging, sorting) lives in the [`Expr::sum`]
//! and [`Expr::product`] constructors.

use crate::expression::{Constant, Expr, Kind};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

pub fn add(a: &Expr, b: &Expr) -> Expr {
    Expr::sum(vec![a.clone(), b.clone()])
}

pub fn sub(a: &Expr, b: &Expr) -> Expr {
    Expr::sum(vec![a.clone(), neg(b)])
}

pub fn neg(a: &Expr) -> Expr {
    a.scale(&-BigRational::one())
}

pub fn mul(a: &Expr, b: &Expr) -> Expr {
    Expr::product(vec![a.clone(), b.clone()])
}

/// `a / b`, computed as `a * b^-1`.
pub fn div(a: &Expr, b: &Expr) -> Expr {
    mul(a, &pow(b, -1))
}

/// Raise to an integer power.
///
/// `e^0` is 1; a negative power of the number 0 is the `Infinity` constant
/// (matching the placeholder delta evaluator's arithmetic, which never
/// divides by zero anywhere else).
pub fn pow(e: &Expr, n: i32) -> Expr {
    if n == 0 {
        return Expr::one();
    }
    if n == 1 {
        return e.clone();
    }
    match &e.kind {
        Kind::Number => {
            if e.multiplier.is_zero() {
                if n > 0 {
                    Expr::zero()
                } else {
                    Expr::constant(Constant::Infinity)
                }
            } else {
                Expr::rational(rational_pow(&e.multiplier, n))
            }
        }
        Kind::Product(factors) => {
            let mut out: Vec<Expr> = factors.iter().map(|f| pow(f, n)).collect();
            out.push(Expr::rational(rational_pow(&e.multiplier, n)));
            Expr::product(out)
        }
        _ => Expr::make(
            rational_pow(&e.multiplier, n),
            e.power.saturating_mul(n),
            e.kind.clone(),
        ),
    }
}

/// Exact `r^n` for nonzero `r` when `n < 0`.
pub(crate) fn rational_pow(r: &BigRational, n: i32) -> BigRational {
    if n >= 0 {
        let p = r.numer().pow(n as u32);
        let q = r.denom().pow(n as u32);
        BigRational::new(p, q)
    } else {
        let m = (-n) as u32;
        let p = r.numer().pow(m);
        let q = r.denom().pow(m);
        // invert; sign stays on the numerator via BigRational::new
        BigRational::new(q, p)
    }
}

/// `n!` as an exact rational, for the Taylor series accumulator.
pub fn factorial(n: u32) -> BigRational {
    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= BigInt::from(k);
    }
    BigRational::from_integer(acc)
}

/// Smallest useful numeric view: the node's value as a rational, if numeric.
pub fn as_rational(e: &Expr) -> Option<&BigRational> {
    if e.is_numeric() {
        Some(&e.multiplier)
    } else {
        None
    }
}

/// The node's value as `i32`, if it is an integer that fits.
pub fn as_i32(e: &Expr) -> Option<i32> {
    use num_traits::ToPrimitive;
    if e.is_integer() {
        e.multiplier.to_integer().to_i32()
    } else {
        None
    }
}

/// Sign check used by display code.
pub fn is_negative(e: &Expr) -> bool {
    e.multiplier.is_negative()
}
