//! Algebraic expansion: distribute products over sums.
//!
//! Positive integer powers of sums expand by repeated multiplication; sums at
//! negative powers (reciprocals) are opaque and stay as factors. Function
//! arguments are not entered — expansion normalizes the top-level additive
//! structure, which is all the transform's linearity pass needs.

use crate::arith::mul;
use crate::expression::{Expr, Kind};

pub fn expand(e: &Expr) -> Expr {
    match &e.kind {
        Kind::Sum(terms) if e.power == 1 => Expr::sum(terms.iter().map(expand).collect()),
        Kind::Sum(terms) if e.power > 1 => {
            // Repeated term-by-term multiplication; multiplying whole sums
            // would just re-merge into the power we are unfolding.
            let base = Expr::sum(terms.iter().map(expand).collect());
            let base_terms = base.additive_terms();
            let mut acc = base_terms.clone();
            for _ in 1..e.power {
                let mut next = Vec::with_capacity(acc.len() * base_terms.len());
                for t in &acc {
                    for bt in &base_terms {
                        next.push(mul(t, bt));
                    }
                }
                acc = next;
            }
            Expr::sum(acc).scale(&e.multiplier)
        }
        Kind::Product(factors) => {
            let mut terms: Vec<Expr> = vec![Expr::rational(e.multiplier.clone())];
            for f in factors {
                let f = expand(f);
                match (&f.kind, f.power) {
                    (Kind::Sum(fterms), 1) => {
                        let mut next = Vec::with_capacity(terms.len() * fterms.len());
                        for t in &terms {
                            for ft in fterms {
                                next.push(mul(t, ft));
                            }
                        }
                        terms = next;
                    }
                    _ => {
                        terms = terms.iter().map(|t| mul(t, &f)).collect();
                    }
                }
            }
            Expr::sum(terms)
        }
        _ => e.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{add, pow};

    #[test]
    fn distributes_product_over_sum() {
        // 2*(x + 3) -> 2x + 6
        let e = mul(&Expr::num(2), &add(&Expr::var("x"), &Expr::num(3)));
        let expanded = expand(&e);
        let expected = add(
            &Expr::var("x").scale(&num_rational::BigRational::from_integer(2.into())),
            &Expr::num(6),
        );
        assert_eq!(expanded, expected);
    }

    #[test]
    fn expands_square_of_sum() {
        // (x + 1)^2 -> x^2 + 2x + 1
        let e = pow(&add(&Expr::var("x"), &Expr::num(1)), 2);
        let expanded = expand(&e);
        let expected = Expr::sum(vec![
            pow(&Expr::var("x"), 2),
            Expr::var("x").scale(&num_rational::BigRational::from_integer(2.into())),
            Expr::num(1),
        ]);
        assert_eq!(expanded, expected);
    }

    #[test]
    fn cross_multiplies_two_sums() {
        // (a + b)*(c + d) -> ac + ad + bc + bd
        let e = mul(
            &add(&Expr::var("a"), &Expr::var("b")),
            &add(&Expr::var("c"), &Expr::var("d")),
        );
        let expanded = expand(&e);
        if let Kind::Sum(terms) = &expanded.kind {
            assert_eq!(terms.len(), 4);
        } else {
            panic!("expected a sum, got {expanded:?}");
        }
    }

    #[test]
    fn reciprocal_sum_is_opaque() {
        let e = pow(&add(&Expr::var("x"), &Expr::num(1)), -1);
        assert_eq!(expand(&e), e);
    }
}
