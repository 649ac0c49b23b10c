//! Symbolic differentiation.
//!
//! Just enough calculus for the Taylor-series utility: sum, product, power,
//! and chain rules, with a derivative table for the functions the transform
//! vocabulary uses. Anything underivable is an [`AstError::Unsupported`].

use crate::arith::{neg, pow};
use crate::error::AstError;
use crate::expression::{Expr, Kind};
use num_bigint::BigInt;
use num_rational::BigRational;

/// Derivative of `e` with respect to `var`.
pub fn diff(e: &Expr, var: &str) -> Result<Expr, AstError> {
    if !e.contains_variable(var) {
        return Ok(Expr::zero());
    }
    match &e.kind {
        // d/dx m*x^p = m*p*x^(p-1)
        Kind::Variable(_) => Ok(Expr::make(
            &e.multiplier * BigRational::from_integer(BigInt::from(e.power)),
            e.power - 1,
            e.kind.clone(),
        )),
        Kind::Sum(terms) => {
            let mut dterms = Vec::with_capacity(terms.len());
            for t in terms {
                dterms.push(diff(t, var)?);
            }
            let inner = Expr::sum(dterms);
            if e.power == 1 {
                Ok(inner)
            } else {
                // d/dx m*S^n = m*n*S^(n-1)*S'
                let outer = Expr::make(
                    &e.multiplier * BigRational::from_integer(BigInt::from(e.power)),
                    e.power - 1,
                    e.kind.clone(),
                );
                Ok(Expr::product(vec![outer, inner]))
            }
        }
        Kind::Product(factors) => {
            let mut terms = Vec::with_capacity(factors.len());
            for i in 0..factors.len() {
                let di = diff(&factors[i], var)?;
                let mut rest: Vec<Expr> = Vec::with_capacity(factors.len());
                rest.extend(factors.iter().take(i).cloned());
                rest.extend(factors.iter().skip(i + 1).cloned());
                rest.push(di);
                terms.push(Expr::product(rest));
            }
            Ok(Expr::sum(terms).scale(&e.multiplier))
        }
        Kind::Function(name, args) if args.len() == 1 => {
            let arg = &args[0];
            let outer_diff = match name.as_str() {
                "sin" => Expr::func("cos", vec![arg.clone()]),
                "cos" => neg(&Expr::func("sin", vec![arg.clone()])),
                "exp" => Expr::func("exp", vec![arg.clone()]),
                "ln" => pow(arg, -1),
                other => {
                    return Err(AstError::Unsupported(format!(
                        "no derivative rule for function '{other}'"
                    )))
                }
            };
            // d/dx m*F(u)^p = m*p*F(u)^(p-1) * F'(u) * u'
            let outer = Expr::make(
                &e.multiplier * BigRational::from_integer(BigInt::from(e.power)),
                e.power - 1,
                e.kind.clone(),
            );
            let chain = diff(arg, var)?;
            Ok(Expr::product(vec![outer, outer_diff, chain]))
        }
        Kind::Function(name, _) => Err(AstError::Unsupported(format!(
            "cannot differentiate multi-argument function '{name}'"
        ))),
        // contains_variable already ruled these out
        Kind::Number | Kind::Constant(_) => Ok(Expr::zero()),
    }
}
