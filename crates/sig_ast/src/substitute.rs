//! Structural variable substitution.

use crate::arith::pow;
use crate::expression::{Expr, Kind};

/// Replace every occurrence of `var` with `replacement`.
///
/// The occurrence's own multiplier and power are honored: substituting
/// `x -> y + 1` into `3*x^2` yields `3*(y + 1)^2`.
pub fn substitute(e: &Expr, var: &str, replacement: &Expr) -> Expr {
    match &e.kind {
        Kind::Variable(name) if name == var => {
            pow(replacement, e.power).scale(&e.multiplier)
        }
        Kind::Function(name, args) => {
            let new_args: Vec<Expr> = args.iter().map(|a| substitute(a, var, replacement)).collect();
            // Rebuild through the constructor so exact values fold
            // (substituting x -> 0 into exp(x) must give 1, not exp(0)).
            pow(&Expr::func(name, new_args), e.power).scale(&e.multiplier)
        }
        Kind::Sum(terms) => {
            let inner = Expr::sum(terms.iter().map(|t| substitute(t, var, replacement)).collect());
            pow(&inner, e.power).scale(&e.multiplier)
        }
        Kind::Product(factors) => {
            let inner =
                Expr::product(factors.iter().map(|f| substitute(f, var, replacement)).collect());
            pow(&inner, e.power).scale(&e.multiplier)
        }
        _ => e.clone(),
    }
}
