//! Single-variable Taylor series.
//!
//! `staylor(expr, var, point, terms)`: term 0 is the expression evaluated at
//! the point; term n is `f⁽ⁿ⁾(point)/n! * (var - point)^n`. Differentiation
//! comes from [`sig_ast::diff`]; coefficients stay exact rationals.

use crate::error::EngineError;
use sig_ast::arith::{as_i32, factorial, pow, sub};
use sig_ast::{diff, mul, substitute, Expr};

pub fn taylor_series(
    expr: &Expr,
    var: &Expr,
    point: &Expr,
    terms: &Expr,
) -> Result<Expr, EngineError> {
    let name = var.bare_variable().ok_or_else(|| {
        EngineError::InvalidArgument("expansion variable must be a bare variable".into())
    })?;
    let count = as_i32(terms).ok_or_else(|| {
        EngineError::InvalidArgument("term count must be an integer".into())
    })?;
    if count <= 1 {
        return Err(EngineError::InvalidArgument(
            "term count must be greater than 1".into(),
        ));
    }

    let mut series = vec![substitute(expr, name, point)];
    let mut derivative = expr.clone();
    let displacement = sub(var, point);
    for n in 1..count {
        derivative = diff(&derivative, name)?;
        let coeff = substitute(&derivative, name, point)
            .scale(&factorial(n as u32).recip());
        series.push(mul(&coeff, &pow(&displacement, n)));
    }
    Ok(Expr::sum(series))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_series_at_zero() {
        // exp(x) ~ 1 + x + x^2/2
        let x = Expr::var("x");
        let e = Expr::func("exp", vec![x.clone()]);
        let series = taylor_series(&e, &x, &Expr::zero(), &Expr::num(3)).unwrap();
        let expected = Expr::sum(vec![
            Expr::one(),
            x.clone(),
            pow(&x, 2).scale(&num_rational::BigRational::new(1.into(), 2.into())),
        ]);
        assert_eq!(series, expected);
    }

    #[test]
    fn sine_series_is_odd() {
        // sin(x) ~ x - x^3/6 over 4 terms
        let x = Expr::var("x");
        let e = Expr::func("sin", vec![x.clone()]);
        let series = taylor_series(&e, &x, &Expr::zero(), &Expr::num(4)).unwrap();
        let expected = Expr::sum(vec![
            x.clone(),
            pow(&x, 3).scale(&num_rational::BigRational::new((-1).into(), 6.into())),
        ]);
        assert_eq!(series, expected);
    }

    #[test]
    fn rejects_non_variable() {
        let e = Expr::func("exp", vec![Expr::var("x")]);
        let bad = pow(&Expr::var("x"), 2);
        assert!(matches!(
            taylor_series(&e, &bad, &Expr::zero(), &Expr::num(3)),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_small_term_count() {
        let x = Expr::var("x");
        let e = Expr::func("exp", vec![x.clone()]);
        assert!(taylor_series(&e, &x, &Expr::zero(), &Expr::num(1)).is_err());
        assert!(taylor_series(&e, &x, &Expr::zero(), &Expr::frac(5, 2)).is_err());
    }
}
