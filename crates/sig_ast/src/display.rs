//! Infix rendering.
//!
//! Output round-trips through the parser (the CLI and several tests rely on
//! that), so composite bases are parenthesized whenever a coefficient or an
//! exponent attaches to them.

use crate::expression::{Expr, Kind};
use num_rational::BigRational;
use num_traits::{One, Signed};
use std::fmt;

fn fmt_rational(r: &BigRational, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if r.is_integer() {
        write!(f, "{}", r.numer())
    } else {
        write!(f, "{}/{}", r.numer(), r.denom())
    }
}

impl Expr {
    fn base_needs_parens(&self) -> bool {
        matches!(self.kind, Kind::Sum(_) | Kind::Product(_))
    }

    fn fmt_base(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Number => Ok(()), // value lives entirely in the multiplier
            Kind::Constant(c) => write!(f, "{}", c.name()),
            Kind::Variable(name) => write!(f, "{name}"),
            Kind::Function(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Kind::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        write!(f, "{term}")?;
                    } else if term.multiplier.is_negative() {
                        let flipped = term.scale(&-BigRational::one());
                        write!(f, " - {flipped}")?;
                    } else {
                        write!(f, " + {term}")?;
                    }
                }
                Ok(())
            }
            Kind::Product(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    if factor.base_needs_parens() && factor.power == 1 {
                        write!(f, "({factor})")?;
                    } else {
                        write!(f, "{factor}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Kind::Number = self.kind {
            return fmt_rational(&self.multiplier, f);
        }

        if self.multiplier == -BigRational::one() {
            write!(f, "-")?;
        } else if !self.multiplier.is_one() {
            fmt_rational(&self.multiplier, f)?;
            write!(f, "*")?;
        }

        let wrap = self.base_needs_parens() && (self.power != 1 || !self.multiplier.is_one());
        if wrap {
            write!(f, "(")?;
        }
        self.fmt_base(f)?;
        if wrap {
            write!(f, ")")?;
        }

        if self.power != 1 {
            if self.power < 0 {
                write!(f, "^({})", self.power)?;
            } else {
                write!(f, "^{}", self.power)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{add, mul, pow, sub};

    #[test]
    fn renders_rationals() {
        assert_eq!(Expr::frac(1, 2).to_string(), "1/2");
        assert_eq!(Expr::num(-3).to_string(), "-3");
    }

    #[test]
    fn renders_sums_with_signs() {
        let e = sub(&Expr::var("x"), &Expr::num(3));
        assert_eq!(e.to_string(), "-3 + x");
    }

    #[test]
    fn renders_scaled_function() {
        let e = Expr::func("rect", vec![Expr::var("t")]).scale(&BigRational::new(1.into(), 2.into()));
        assert_eq!(e.to_string(), "1/2*rect(t)");
    }

    #[test]
    fn parenthesizes_powered_sums() {
        let e = pow(&add(&Expr::var("x"), &Expr::num(1)), 2);
        assert_eq!(e.to_string(), "(1 + x)^2");
    }

    #[test]
    fn renders_products() {
        let e = mul(&Expr::var("x"), &Expr::var("y"));
        assert_eq!(e.to_string(), "x*y");
    }
}
