//! The Fourier-transform rewriting core.
//!
//! [`fourier_transform`] rewrites an expression in the input variable into a
//! closed form in the output variable by recursive pattern matching:
//!
//! 1. expand and split into additive terms (linearity);
//! 2. per term, split multiplicative factors into variable-free coefficients
//!    and the variable-bearing main part;
//! 3. classify the main part into a [`MainShape`] and apply the matching
//!    rewrite: modulation extraction, frequency shift, time shift, the Euler
//!    rewrite of sine/cosine, or the canonical pair table.
//!
//! Every recursive call either reduces the number of variable-bearing
//! factors or canonicalizes a function argument to the bare variable, so the
//! recursion terminates on well-formed input.
//!
//! Shapes with no rule (multi-argument functions, nested function arguments,
//! multi-factor remainders after modulation separation, functions absent
//! from the table) pass through unchanged and are logged at `warn` level; a
//! result still containing the input variable is the caller's signal that
//! part of the input was not transformable.

use crate::error::EngineError;
use crate::table;
use num_traits::One;
use sig_ast::arith::{div, mul, pow, sub};
use sig_ast::{expand, substitute, Constant, Expr, Kind};
use tracing::{debug, warn};

/// Transform `expr` from `in_var` to `out_var`.
///
/// Both variables must be bare and distinct; anything else is an
/// [`EngineError::InvalidArgument`].
pub fn fourier_transform(expr: &Expr, in_var: &Expr, out_var: &Expr) -> Result<Expr, EngineError> {
    let vin = in_var.bare_variable().ok_or_else(|| {
        EngineError::InvalidArgument("input variable must be a bare variable".into())
    })?;
    let vout = out_var.bare_variable().ok_or_else(|| {
        EngineError::InvalidArgument("output variable must be a bare variable".into())
    })?;
    if vin == vout {
        return Err(EngineError::InvalidArgument(
            "input and output variables must differ".into(),
        ));
    }
    if expr.is_zero() {
        return Ok(Expr::zero());
    }

    let expanded = expand(expr);
    let mut out_terms = Vec::new();
    for term in expanded.additive_terms() {
        out_terms.push(transform_term(&term, vin, vout)?);
    }
    Ok(Expr::sum(out_terms))
}

/// Shape of a term's variable-bearing main part. One variant per rewrite
/// rule, so which rule fired is auditable from a debug log.
#[derive(Debug)]
enum MainShape {
    /// Product of more than one variable-bearing factor.
    Modulated(Vec<Expr>),
    /// sin/cos of a composite argument: Euler rewrite.
    Trig { name: String, arg: Expr },
    /// Function argument scaled or imaginary: impulse at the shifted frequency.
    FrequencyShift { name: String, arg: Expr },
    /// Function argument additively offset: linear-phase factor.
    TimeShift { name: String, arg: Expr, power: i32 },
    /// Function of the bare input variable: canonical pair table.
    Table { name: String, power: i32 },
    /// Structurally recognized, no rule defined: pass through unchanged.
    Unsupported(&'static str),
}

fn classify(main: &Expr, vin: &str) -> MainShape {
    match &main.kind {
        Kind::Product(factors) => MainShape::Modulated(factors.clone()),
        Kind::Function(name, args) => {
            if args.len() != 1 {
                return MainShape::Unsupported("multi-argument function");
            }
            let arg = &args[0];
            if matches!(arg.kind, Kind::Function(_, _)) {
                return MainShape::Unsupported("nested function argument");
            }
            if arg.bare_variable() == Some(vin) {
                return MainShape::Table {
                    name: name.clone(),
                    power: main.power,
                };
            }
            if (name == "sin" || name == "cos") && main.power == 1 {
                return MainShape::Trig {
                    name: name.clone(),
                    arg: arg.clone(),
                };
            }
            if !arg.multiplier.is_one() || arg.contains_imaginary() {
                return MainShape::FrequencyShift {
                    name: name.clone(),
                    arg: arg.clone(),
                };
            }
            MainShape::TimeShift {
                name: name.clone(),
                arg: arg.clone(),
                power: main.power,
            }
        }
        _ => MainShape::Unsupported("main part is not a function application"),
    }
}

/// Transform one additive term. This is the re-entry point for recursive
/// calls that already hold a single term (modulation remainder, rewritten
/// time-shift application) and must not re-run the linearity split.
fn transform_term(term: &Expr, vin: &str, vout: &str) -> Result<Expr, EngineError> {
    let mut coeffs: Vec<Expr> = Vec::new();
    let mut main_factors: Vec<Expr> = Vec::new();
    for f in term.multiplicative_factors() {
        if f.contains_variable(vin) {
            main_factors.push(f);
        } else {
            coeffs.push(f);
        }
    }

    // Constant with respect to the input variable: a DC term transforms to
    // an impulse at zero in the output domain.
    if main_factors.is_empty() {
        return Ok(mul(term, &Expr::func("delta", vec![Expr::var(vout)])));
    }

    let main = Expr::product(main_factors);
    let shape = classify(&main, vin);
    debug!(term = %term, shape = ?shape, "dispatching term");

    let transformed = match shape {
        MainShape::Modulated(factors) => modulated(&main, &factors, vin, vout)?,
        MainShape::Trig { name, arg } => euler_rewrite(&name, &arg, vin, vout)?,
        MainShape::FrequencyShift { name, arg } => frequency_shift(&main, &name, &arg, vin, vout),
        MainShape::TimeShift { name, arg, power } => time_shift(&name, &arg, power, vin, vout)?,
        MainShape::Table { name, power } => match table::lookup(&name, power, vout) {
            Some(result) => result,
            None => {
                warn!(main = %main, "no canonical pair for {name}^{power}; passing through");
                main.clone()
            }
        },
        MainShape::Unsupported(reason) => {
            warn!(main = %main, "{reason}: no transform rule applies; passing through");
            main.clone()
        }
    };

    coeffs.push(transformed);
    Ok(Expr::product(coeffs))
}

/// `2*i*pi*<vin>` — the factor relating an exponential's argument to its
/// frequency offset.
fn angular(vin: &str) -> Expr {
    Expr::product(vec![
        Expr::num(2),
        Expr::constant(Constant::I),
        Expr::constant(Constant::Pi),
        Expr::var(vin),
    ])
}

/// Modulation extraction: pull one exponential factor out of a multi-factor
/// product, transform the remainder, and reapply the frequency shift by
/// substitution (`exp(i*2*pi*a*t) * g(t)  ->  G(f - a)`).
///
/// If the remainder itself passes through untransformed, it contains no
/// occurrence of the output variable, the substitution is a no-op, and the
/// pulled-out exponential is not restored: the term comes back as just the
/// remainder.
fn modulated(main: &Expr, factors: &[Expr], vin: &str, vout: &str) -> Result<Expr, EngineError> {
    let mut shift_arg: Option<Expr> = None;
    let mut remainder: Vec<Expr> = Vec::new();
    for f in factors {
        match &f.kind {
            Kind::Function(name, args)
                if name == "exp" && f.power == 1 && args.len() == 1 && shift_arg.is_none() =>
            {
                shift_arg = Some(args[0].clone());
            }
            _ => remainder.push(f.clone()),
        }
    }

    match (shift_arg, remainder.as_slice()) {
        (Some(arg), [single]) => {
            let shifted = transform_term(single, vin, vout)?;
            let amount = div(&arg, &angular(vin));
            let target = sub(&Expr::var(vout), &amount);
            Ok(substitute(&shifted, vout, &target))
        }
        _ => {
            // No exponential factor, or more than one factor left after
            // pulling it out: no rule defined.
            warn!(main = %main, "modulation separation left an unhandled product; passing through");
            Ok(main.clone())
        }
    }
}

/// Frequency shift of a single function application: only the exponential
/// has a defined rule (`exp(arg) -> delta(out - arg/(2*i*pi*in))`).
fn frequency_shift(main: &Expr, name: &str, arg: &Expr, vin: &str, vout: &str) -> Expr {
    if name == "exp" && main.power == 1 {
        let target = sub(&Expr::var(vout), &div(arg, &angular(vin)));
        Expr::func("delta", vec![target])
    } else {
        warn!(main = %main, "no frequency-shift rule for {name}; passing through");
        main.clone()
    }
}

/// Time shift: split the argument's variable-free offset `s` into a
/// linear-phase factor `exp(i*2*pi*<out>*s)`, canonicalize the argument to
/// the bare variable, and transform the rewritten application.
fn time_shift(
    name: &str,
    arg: &Expr,
    power: i32,
    vin: &str,
    vout: &str,
) -> Result<Expr, EngineError> {
    let (offset_terms, var_terms): (Vec<Expr>, Vec<Expr>) = arg
        .additive_terms()
        .into_iter()
        .partition(|t| !t.contains_variable(vin));
    // The shift theorem needs the argument to be the bare variable plus a
    // variable-free offset; anything else has no rule.
    if !Expr::sum(var_terms).is_bare_variable() {
        let original = pow(&Expr::func(name, vec![arg.clone()]), power);
        warn!(main = %original, "argument is not a pure time shift; passing through");
        return Ok(original);
    }
    let offset = Expr::sum(offset_terms);
    let phase = Expr::func(
        "exp",
        vec![Expr::product(vec![
            Expr::num(2),
            Expr::constant(Constant::I),
            Expr::constant(Constant::Pi),
            Expr::var(vout),
            offset,
        ])],
    );

    let rewritten = pow(&Expr::func(name, vec![Expr::var(vin)]), power);
    let transformed = transform_term(&rewritten, vin, vout)?;
    Ok(mul(&phase, &transformed))
}

/// Euler rewrite: express sin/cos of a composite argument as exponentials
/// and re-enter the full transform, reusing linearity and the
/// frequency-shift rule instead of duplicating them.
fn euler_rewrite(name: &str, arg: &Expr, vin: &str, vout: &str) -> Result<Expr, EngineError> {
    let i = Expr::constant(Constant::I);
    let parts = arg.additive_terms();
    let pos = Expr::product(
        parts
            .iter()
            .map(|a| Expr::func("exp", vec![mul(&i, a)]))
            .collect(),
    );
    let neg = Expr::product(
        parts
            .iter()
            .map(|a| Expr::func("exp", vec![mul(&sig_ast::neg(&i), a)]))
            .collect(),
    );

    let half = Expr::frac(1, 2);
    let rewritten = match name {
        "cos" => sig_ast::add(&mul(&half, &pos), &mul(&half, &neg)),
        _ => {
            let c = div(&half, &i);
            sub(&mul(&c, &pos), &mul(&c, &neg))
        }
    };
    fourier_transform(&rewritten, &Expr::var(vin), &Expr::var(vout))
}
