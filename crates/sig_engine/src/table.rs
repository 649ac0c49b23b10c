//! Canonical transform-pair table.
//!
//! Closed forms for the base functions at power 1 (plus `sinc^2`), stored as
//! templates over a reserved placeholder variable and instantiated with the
//! caller's output variable at lookup. Built exactly once, never mutated.

use sig_ast::arith::{add, div, mul, pow};
use sig_ast::{substitute, Constant, Expr};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Placeholder variable the templates are written over.
const OUT: &str = "__out";

fn out() -> Expr {
    Expr::var(OUT)
}

fn delta_of(arg: Expr) -> Expr {
    Expr::func("delta", vec![arg])
}

/// `(i*2*pi*<out>)^-1`
fn inverse_angular() -> Expr {
    pow(
        &Expr::product(vec![
            Expr::num(2),
            Expr::constant(Constant::I),
            Expr::constant(Constant::Pi),
            out(),
        ]),
        -1,
    )
}

/// `0.5*((i*2*pi*<out>)^-1 + delta(<out>))` — shared by `step` and `exp`.
fn step_form() -> Expr {
    add(&inverse_angular(), &delta_of(out())).scale(&num_rational::BigRational::new(1.into(), 2.into()))
}

fn build() -> HashMap<(&'static str, i32), Expr> {
    let half = Expr::frac(1, 2);
    let half_over_i = div(&half, &Expr::constant(Constant::I));
    // delta(<out> -/+ 1/(2*pi))
    let spacing = pow(&Expr::constant(Constant::Pi), -1).scale(&num_rational::BigRational::new(1.into(), 2.into()));
    let delta_minus = delta_of(sig_ast::sub(&out(), &spacing));
    let delta_plus = delta_of(add(&out(), &spacing));

    let mut table: HashMap<(&'static str, i32), Expr> = HashMap::new();
    table.insert(("delta", 1), Expr::one());
    table.insert(("rect", 1), Expr::func("sinc", vec![out()]));
    table.insert(("sinc", 1), Expr::func("rect", vec![out()]));
    table.insert(("tri", 1), pow(&Expr::func("sinc", vec![out()]), 2));
    table.insert(
        ("sign", 1),
        div(
            &Expr::one(),
            &Expr::product(vec![Expr::constant(Constant::I), Expr::constant(Constant::Pi), out()]),
        ),
    );
    table.insert(("step", 1), step_form());
    table.insert(("exp", 1), step_form());
    table.insert(
        ("cos", 1),
        add(
            &mul(&half, &delta_minus),
            &mul(&half, &delta_plus),
        ),
    );
    // sin(t) = (exp(i*t) - exp(-i*t))/(2i), so the minus-impulse carries +1/(2i)
    table.insert(
        ("sin", 1),
        sig_ast::sub(
            &mul(&half_over_i, &delta_minus),
            &mul(&half_over_i, &delta_plus),
        ),
    );
    table.insert(("sinc", 2), Expr::func("tri", vec![out()]));
    table
}

fn table() -> &'static HashMap<(&'static str, i32), Expr> {
    static TABLE: OnceLock<HashMap<(&'static str, i32), Expr>> = OnceLock::new();
    TABLE.get_or_init(build)
}

/// Closed-form transform of `name(<in>)^power`, instantiated over `out_var`.
///
/// `None` means the pair is not in the table; the caller passes the original
/// term through unchanged.
pub(crate) fn lookup(name: &str, power: i32, out_var: &str) -> Option<Expr> {
    let template = table().get(&(name, power))?;
    Some(substitute(template, OUT, &Expr::var(out_var)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duality_pairs_present() {
        let rect = lookup("rect", 1, "f").unwrap();
        assert_eq!(rect, Expr::func("sinc", vec![Expr::var("f")]));
        let sinc = lookup("sinc", 1, "f").unwrap();
        assert_eq!(sinc, Expr::func("rect", vec![Expr::var("f")]));
    }

    #[test]
    fn impulse_maps_to_one() {
        assert!(lookup("delta", 1, "f").unwrap().is_one());
    }

    #[test]
    fn sinc_squared_is_triangle() {
        assert_eq!(lookup("sinc", 2, "f").unwrap(), Expr::func("tri", vec![Expr::var("f")]));
    }

    #[test]
    fn absent_entries_are_none() {
        assert!(lookup("rect", 2, "f").is_none());
        assert!(lookup("gauss", 1, "f").is_none());
    }

    #[test]
    fn step_and_exp_share_a_form() {
        assert_eq!(lookup("step", 1, "f"), lookup("exp", 1, "f"));
    }
}
