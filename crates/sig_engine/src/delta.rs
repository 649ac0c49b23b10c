//! Placeholder Dirac delta evaluator.
//!
//! Until proper limit support exists, `delta` only evaluates at numeric
//! arguments: infinity at zero, zero elsewhere. Symbolic arguments stay as
//! an unevaluated function application.

use sig_ast::{Constant, Expr};

pub fn evaluate(arg: &Expr) -> Expr {
    if !arg.is_numeric() {
        return Expr::func("delta", vec![arg.clone()]);
    }
    if arg.is_zero() {
        Expr::constant(Constant::Infinity)
    } else {
        Expr::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_argument_stays_unevaluated() {
        let f = Expr::var("f");
        assert_eq!(evaluate(&f), Expr::func("delta", vec![f]));
    }

    #[test]
    fn zero_is_infinite() {
        assert_eq!(evaluate(&Expr::zero()), Expr::constant(Constant::Infinity));
    }

    #[test]
    fn nonzero_numbers_vanish() {
        assert!(evaluate(&Expr::num(3)).is_zero());
        assert!(evaluate(&Expr::frac(-1, 2)).is_zero());
    }
}
