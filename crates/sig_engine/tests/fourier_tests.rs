//! End-to-end transform properties: linearity, duality, the shift theorems,
//! modulation, Euler consistency, and the pass-through policy for
//! unrecognized shapes.

use sig_ast::arith::{add, mul, pow, sub};
use sig_ast::{Constant, Expr};
use sig_engine::{fourier_transform, EngineError};
use sig_parser::parse;

fn t() -> Expr {
    Expr::var("t")
}

fn f() -> Expr {
    Expr::var("f")
}

fn ft(src: &str) -> Expr {
    let expr = parse(src).unwrap();
    fourier_transform(&expr, &t(), &f()).unwrap()
}

fn delta_of(arg: Expr) -> Expr {
    Expr::func("delta", vec![arg])
}

#[test]
fn linearity_over_terms() {
    let combined = ft("rect(t) + 3*sinc(t)");
    let separate = add(&ft("rect(t)"), &ft("3*sinc(t)"));
    assert_eq!(combined, separate);
}

#[test]
fn homogeneity() {
    let scaled = ft("3*rect(t)");
    let expected = Expr::func("sinc", vec![f()]).scale(&num_rational::BigRational::from_integer(3.into()));
    assert_eq!(scaled, expected);
}

#[test]
fn duality_of_rect_and_sinc() {
    assert_eq!(ft("rect(t)"), Expr::func("sinc", vec![f()]));
    assert_eq!(ft("sinc(t)"), Expr::func("rect", vec![f()]));
}

#[test]
fn triangle_is_sinc_squared() {
    assert_eq!(ft("tri(t)"), pow(&Expr::func("sinc", vec![f()]), 2));
    assert_eq!(ft("sinc(t)^2"), Expr::func("tri", vec![f()]));
}

#[test]
fn impulse_transforms_to_one() {
    assert!(ft("delta(t)").is_one());
}

#[test]
fn constant_rule() {
    assert_eq!(ft("5"), delta_of(f()).scale(&num_rational::BigRational::from_integer(5.into())));
    assert!(ft("0").is_zero());
}

#[test]
fn constant_rule_for_symbolic_coefficients() {
    // a is constant with respect to t
    let result = ft("a");
    let expected = mul(&Expr::var("a"), &delta_of(f()));
    assert_eq!(result, expected);
}

#[test]
fn sign_rule() {
    let expected = sig_ast::div(
        &Expr::one(),
        &Expr::product(vec![Expr::constant(Constant::I), Expr::constant(Constant::Pi), f()]),
    );
    assert_eq!(ft("sign(t)"), expected);
}

#[test]
fn step_rule() {
    let inverse = pow(
        &Expr::product(vec![
            Expr::num(2),
            Expr::constant(Constant::I),
            Expr::constant(Constant::Pi),
            f(),
        ]),
        -1,
    );
    let expected = add(&inverse, &delta_of(f())).scale(&num_rational::BigRational::new(1.into(), 2.into()));
    assert_eq!(ft("step(t)"), expected);
    // the table maps exp at power 1 of the bare variable to the same form
    assert_eq!(ft("exp(t)"), expected);
}

#[test]
fn time_shift_multiplies_by_linear_phase() {
    // rect(t - 3): offset s = -3, phase exp(i*2*pi*f*s)
    let phase = Expr::func(
        "exp",
        vec![Expr::product(vec![
            Expr::num(-6),
            Expr::constant(Constant::I),
            Expr::constant(Constant::Pi),
            f(),
        ])],
    );
    let expected = mul(&phase, &Expr::func("sinc", vec![f()]));
    assert_eq!(ft("rect(t - 3)"), expected);
}

#[test]
fn advance_flips_the_phase_sign() {
    let phase = Expr::func(
        "exp",
        vec![Expr::product(vec![
            Expr::num(6),
            Expr::constant(Constant::I),
            Expr::constant(Constant::Pi),
            f(),
        ])],
    );
    let expected = mul(&phase, &Expr::func("sinc", vec![f()]));
    assert_eq!(ft("rect(t + 3)"), expected);
}

#[test]
fn modulation_shifts_the_transform() {
    // exp(i*2*pi*5*t) * rect(t)  ->  sinc(f - 5)
    let expected = Expr::func("sinc", vec![sub(&f(), &Expr::num(5))]);
    assert_eq!(ft("exp(i*2*pi*5*t)*rect(t)"), expected);
}

#[test]
fn pure_complex_exponential_is_an_impulse() {
    // exp(i*2*pi*5*t)  ->  delta(f - 5)
    let expected = delta_of(sub(&f(), &Expr::num(5)));
    assert_eq!(ft("exp(i*2*pi*5*t)"), expected);
}

#[test]
fn euler_consistency_for_cosine() {
    // cos(2*pi*3*t)  ->  0.5*delta(f - 3) + 0.5*delta(f + 3)
    let half = num_rational::BigRational::new(1.into(), 2.into());
    let expected = add(
        &delta_of(sub(&f(), &Expr::num(3))).scale(&half),
        &delta_of(add(&f(), &Expr::num(3))).scale(&half),
    );
    assert_eq!(ft("cos(2*pi*3*t)"), expected);
}

#[test]
fn euler_consistency_for_sine() {
    // sin(2*pi*3*t)  ->  (1/(2i))*delta(f - 3) - (1/(2i))*delta(f + 3)
    let c = sig_ast::div(&Expr::frac(1, 2), &Expr::constant(Constant::I));
    let expected = sub(
        &mul(&c, &delta_of(sub(&f(), &Expr::num(3)))),
        &mul(&c, &delta_of(add(&f(), &Expr::num(3)))),
    );
    assert_eq!(ft("sin(2*pi*3*t)"), expected);
}

#[test]
fn cosine_of_bare_variable_uses_the_table() {
    // cos(t) -> 0.5*delta(f - 1/(2*pi)) + 0.5*delta(f + 1/(2*pi))
    let half = num_rational::BigRational::new(1.into(), 2.into());
    let spacing = pow(&Expr::constant(Constant::Pi), -1).scale(&half);
    let expected = add(
        &delta_of(sub(&f(), &spacing)).scale(&half),
        &delta_of(add(&f(), &spacing)).scale(&half),
    );
    assert_eq!(ft("cos(t)"), expected);
}

#[test]
fn round_trip_through_duality() {
    let spectrum = ft("rect(t)");
    let back = fourier_transform(&spectrum, &f(), &t()).unwrap();
    assert_eq!(back, parse("rect(t)").unwrap());
}

#[test]
fn rejects_identical_variables() {
    let e = parse("rect(t)").unwrap();
    assert!(matches!(
        fourier_transform(&e, &t(), &t()),
        Err(EngineError::InvalidArgument(_))
    ));
}

#[test]
fn rejects_non_bare_variables() {
    let e = parse("rect(t)").unwrap();
    let two_t = parse("2*t").unwrap();
    assert!(matches!(
        fourier_transform(&e, &two_t, &f()),
        Err(EngineError::InvalidArgument(_))
    ));
    assert!(matches!(
        fourier_transform(&e, &t(), &parse("f^2").unwrap()),
        Err(EngineError::InvalidArgument(_))
    ));
}

#[test]
fn unknown_function_passes_through() {
    let e = parse("gauss(t)").unwrap();
    assert_eq!(ft("gauss(t)"), e);
    assert!(e.contains_variable("t"));
}

#[test]
fn unhandled_product_passes_through() {
    // two variable-bearing factors and no exponential: no rule applies
    let e = parse("t*rect(t)").unwrap();
    assert_eq!(ft("t*rect(t)"), e);
}

#[test]
fn modulation_of_unknown_remainder_keeps_only_the_remainder() {
    // the remainder passes through untransformed, so the frequency-shift
    // substitution is a no-op and the pulled-out exponential vanishes
    let result = ft("exp(i*2*pi*5*t)*gauss(t)");
    assert_eq!(result, parse("gauss(t)").unwrap());
}

#[test]
fn multi_argument_function_passes_through() {
    let e = parse("corr(t, u)").unwrap();
    assert_eq!(ft("corr(t, u)"), e);
}

#[test]
fn non_shift_argument_passes_through() {
    // neither a bare variable nor variable-plus-offset
    let squared = parse("rect(t^2)").unwrap();
    assert_eq!(ft("rect(t^2)"), squared);
    let scaled_sum = parse("rect(2*t + 3)").unwrap();
    assert_eq!(ft("rect(2*t + 3)"), scaled_sum);
}

#[test]
fn nested_function_argument_passes_through() {
    let e = parse("rect(sin(t))").unwrap();
    assert_eq!(ft("rect(sin(t))"), e);
}

#[test]
fn partial_transforms_keep_residual_input_variable() {
    // the rect part transforms, the unknown part survives untouched
    let result = ft("rect(t) + gauss(t)");
    let expected = add(
        &Expr::func("sinc", vec![f()]),
        &Expr::func("gauss", vec![t()]),
    );
    assert_eq!(result, expected);
    assert!(result.contains_variable("t"));
}
