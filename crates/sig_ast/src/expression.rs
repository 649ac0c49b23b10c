//! Expression nodes.
//!
//! Every node represents the value `multiplier * base^power`, where the base
//! is described by [`Kind`]. Keeping the coefficient and the exponent on the
//! node itself (instead of as surrounding `Mul`/`Pow` nodes) means the
//! rewriting engine can ask "is this exactly the variable `t`?" or "what power
//! is this function raised to?" without peeling wrapper nodes first.
//!
//! Nodes are immutable values: the constructors and the combinators in
//! [`crate::arith`] always build new nodes and never mutate their inputs.
//!
//! # Normal form
//!
//! The constructors maintain a normal form so that structural equality is
//! algebraic equality for anything built through them:
//!
//! - sums and products are flat and sorted by [`crate::ordering`];
//! - like terms of a sum merge by adding multipliers, zero terms drop;
//! - equal bases of a product merge by adding powers, power-0 factors drop;
//! - a power-1 sum always has multiplier 1 (it is distributed over the terms);
//! - product factors always have multiplier 1 (collected into the product's);
//! - the imaginary unit is reduced modulo `i^4 = 1`, so it only ever appears
//!   at power 1;
//! - anything with multiplier 0 collapses to the number 0.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Named constants that are not plain rationals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constant {
    /// The circle constant.
    Pi,
    /// The imaginary unit.
    I,
    /// Positive infinity, used by the placeholder delta evaluator.
    Infinity,
}

impl Constant {
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::I => "i",
            Constant::Infinity => "inf",
        }
    }
}

/// The base of an expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The base is 1: the node's value is its multiplier. Power is always 1.
    Number,
    Constant(Constant),
    Variable(String),
    /// Unevaluated function application, e.g. `rect(t)` or `log(x, 10)`.
    Function(String, Vec<Expr>),
    /// Additive composite. Multiplier is 1 whenever power is 1.
    Sum(Vec<Expr>),
    /// Multiplicative composite. Power is always 1; factors carry their own.
    Product(Vec<Expr>),
}

/// An immutable expression node: `multiplier * base^power`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub multiplier: BigRational,
    pub power: i32,
    pub kind: Kind,
}

impl Expr {
    pub fn zero() -> Self {
        Expr {
            multiplier: BigRational::zero(),
            power: 1,
            kind: Kind::Number,
        }
    }

    pub fn one() -> Self {
        Expr::num(1)
    }

    pub fn num(n: i64) -> Self {
        Expr::rational(BigRational::from_integer(BigInt::from(n)))
    }

    /// Exact rational `p/q`.
    pub fn frac(p: i64, q: i64) -> Self {
        Expr::rational(BigRational::new(BigInt::from(p), BigInt::from(q)))
    }

    pub fn rational(r: BigRational) -> Self {
        Expr {
            multiplier: r,
            power: 1,
            kind: Kind::Number,
        }
    }

    pub fn var(name: &str) -> Self {
        Expr {
            multiplier: BigRational::one(),
            power: 1,
            kind: Kind::Variable(name.to_string()),
        }
    }

    pub fn constant(c: Constant) -> Self {
        Expr {
            multiplier: BigRational::one(),
            power: 1,
            kind: Kind::Constant(c),
        }
    }

    /// Unevaluated function application.
    ///
    /// Folds the handful of exact values the engine relies on (`sin(0) = 0`,
    /// `cos(0) = 1`, `exp(0) = 1`, `ln(1) = 0`); everything else stays
    /// symbolic.
    pub fn func(name: &str, args: Vec<Expr>) -> Self {
        if args.len() == 1 {
            let a = &args[0];
            if a.is_numeric() {
                match name {
                    "sin" if a.multiplier.is_zero() => return Expr::zero(),
                    "cos" | "exp" if a.multiplier.is_zero() => return Expr::one(),
                    "ln" if a.multiplier.is_one() => return Expr::zero(),
                    _ => {}
                }
            }
        }
        Expr {
            multiplier: BigRational::one(),
            power: 1,
            kind: Kind::Function(name.to_string(), args),
        }
    }

    /// Normalizing constructor for a non-composite base.
    ///
    /// Collapses zero multipliers, power 0, and powers of the imaginary unit.
    pub(crate) fn make(multiplier: BigRational, power: i32, kind: Kind) -> Self {
        if multiplier.is_zero() {
            return Expr::zero();
        }
        match kind {
            Kind::Number => Expr::rational(multiplier),
            _ if power == 0 => Expr::rational(multiplier),
            Kind::Sum(terms) => {
                // A power-1 sum keeps multiplier 1: distribute it.
                if power == 1 && !multiplier.is_one() {
                    Expr::sum(terms.into_iter().map(|t| t.scale(&multiplier)).collect())
                } else {
                    Expr {
                        multiplier,
                        power,
                        kind: Kind::Sum(terms),
                    }
                }
            }
            // i^4 = 1, i^2 = -1, i^-1 = -i
            Kind::Constant(Constant::I) => match power.rem_euclid(4) {
                0 => Expr::rational(multiplier),
                1 => Expr {
                    multiplier,
                    power: 1,
                    kind: Kind::Constant(Constant::I),
                },
                2 => Expr::rational(-multiplier),
                _ => Expr {
                    multiplier: -multiplier,
                    power: 1,
                    kind: Kind::Constant(Constant::I),
                },
            },
            kind => Expr {
                multiplier,
                power,
                kind,
            },
        }
    }

    /// Normalized sum of `terms`: flat, like terms merged, sorted.
    pub fn sum(terms: Vec<Expr>) -> Self {
        let mut flat: Vec<Expr> = Vec::new();
        let mut queue: Vec<Expr> = terms;
        queue.reverse();
        while let Some(t) = queue.pop() {
            if t.multiplier.is_zero() {
                continue;
            }
            match t.kind {
                Kind::Sum(inner) if t.power == 1 => {
                    // Distribute the multiplier while flattening.
                    for term in inner.into_iter().rev() {
                        queue.push(term.scale(&t.multiplier));
                    }
                }
                _ => flat.push(t),
            }
        }

        let mut merged: Vec<Expr> = Vec::new();
        for t in flat {
            match merged
                .iter_mut()
                .find(|u| u.kind == t.kind && u.power == t.power)
            {
                Some(u) => u.multiplier += t.multiplier,
                None => merged.push(t),
            }
        }
        merged.retain(|t| !t.multiplier.is_zero());

        match merged.len() {
            0 => Expr::zero(),
            1 => merged.into_iter().next().unwrap_or_else(Expr::zero),
            _ => {
                merged.sort();
                Expr {
                    multiplier: BigRational::one(),
                    power: 1,
                    kind: Kind::Sum(merged),
                }
            }
        }
    }

    /// Normalized product of `factors`: flat, equal bases merged, sorted,
    /// numeric content collected into the multiplier.
    pub fn product(factors: Vec<Expr>) -> Self {
        let mut multiplier = BigRational::one();
        let mut flat: Vec<Expr> = Vec::new();
        let mut queue: Vec<Expr> = factors;
        queue.reverse();
        while let Some(f) = queue.pop() {
            if f.multiplier.is_zero() {
                return Expr::zero();
            }
            match f.kind {
                Kind::Number => multiplier *= f.multiplier,
                Kind::Product(inner) => {
                    multiplier *= f.multiplier;
                    if f.power == 1 {
                        for g in inner.into_iter().rev() {
                            queue.push(g);
                        }
                    } else {
                        // m * (g1*g2*...)^p  ==  m * g1^p * g2^p * ...
                        for g in inner.into_iter().rev() {
                            queue.push(crate::arith::pow(&g, f.power));
                        }
                    }
                }
                kind => {
                    multiplier *= f.multiplier;
                    flat.push(Expr {
                        multiplier: BigRational::one(),
                        power: f.power,
                        kind,
                    });
                }
            }
        }

        let mut merged: Vec<Expr> = Vec::new();
        for f in flat {
            match merged.iter_mut().find(|u| u.kind == f.kind) {
                Some(u) => u.power += f.power,
                None => merged.push(f),
            }
        }

        // Fold merged powers of i and drop power-0 factors.
        let mut kept: Vec<Expr> = Vec::new();
        for f in merged {
            if f.power == 0 {
                continue;
            }
            if let Kind::Constant(Constant::I) = f.kind {
                match f.power.rem_euclid(4) {
                    0 => {}
                    1 => kept.push(Expr::constant(Constant::I)),
                    2 => multiplier = -multiplier,
                    _ => {
                        multiplier = -multiplier;
                        kept.push(Expr::constant(Constant::I));
                    }
                }
            } else {
                kept.push(f);
            }
        }

        match kept.len() {
            0 => Expr::rational(multiplier),
            1 => {
                let f = kept.into_iter().next().unwrap_or_else(Expr::one);
                Expr::make(multiplier, f.power, f.kind)
            }
            _ => {
                kept.sort();
                Expr {
                    multiplier,
                    power: 1,
                    kind: Kind::Product(kept),
                }
            }
        }
    }

    /// New node with the multiplier scaled by `r`.
    pub fn scale(&self, r: &BigRational) -> Self {
        if r.is_zero() {
            return Expr::zero();
        }
        if r.is_one() {
            return self.clone();
        }
        if let Kind::Sum(terms) = &self.kind {
            if self.power == 1 {
                return Expr::sum(terms.iter().map(|t| t.scale(r)).collect());
            }
        }
        Expr {
            multiplier: &self.multiplier * r,
            power: self.power,
            kind: self.kind.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, Kind::Number)
    }

    pub fn is_zero(&self) -> bool {
        self.is_numeric() && self.multiplier.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.is_numeric() && self.multiplier.is_one()
    }

    /// Is this an integer-valued number?
    pub fn is_integer(&self) -> bool {
        self.is_numeric() && self.multiplier.is_integer()
    }

    /// A bare variable: exactly `name` with multiplier 1, power 1.
    pub fn is_bare_variable(&self) -> bool {
        matches!(self.kind, Kind::Variable(_)) && self.multiplier.is_one() && self.power == 1
    }

    /// Name of this node if it is a bare variable.
    pub fn bare_variable(&self) -> Option<&str> {
        match &self.kind {
            Kind::Variable(name) if self.multiplier.is_one() && self.power == 1 => Some(name),
            _ => None,
        }
    }

    /// View as a plain function call: `Some((name, args))` only when the
    /// node is an application with multiplier 1 and power 1.
    pub fn as_function_call(&self) -> Option<(&str, &[Expr])> {
        match &self.kind {
            Kind::Function(name, args) if self.multiplier.is_one() && self.power == 1 => {
                Some((name, args))
            }
            _ => None,
        }
    }

    /// Does `var` occur anywhere in this expression?
    pub fn contains_variable(&self, var: &str) -> bool {
        match &self.kind {
            Kind::Number | Kind::Constant(_) => false,
            Kind::Variable(name) => name == var,
            Kind::Function(_, args) => args.iter().any(|a| a.contains_variable(var)),
            Kind::Sum(children) | Kind::Product(children) => {
                children.iter().any(|c| c.contains_variable(var))
            }
        }
    }

    /// Does the imaginary unit occur anywhere in this expression?
    pub fn contains_imaginary(&self) -> bool {
        match &self.kind {
            Kind::Constant(Constant::I) => true,
            Kind::Number | Kind::Constant(_) | Kind::Variable(_) => false,
            Kind::Function(_, args) => args.iter().any(|a| a.contains_imaginary()),
            Kind::Sum(children) | Kind::Product(children) => {
                children.iter().any(|c| c.contains_imaginary())
            }
        }
    }

    // ------------------------------------------------------------------
    // Decomposition
    // ------------------------------------------------------------------

    /// Flat list of additive terms. Non-sums come back as a single term.
    pub fn additive_terms(&self) -> Vec<Expr> {
        match &self.kind {
            Kind::Sum(terms) if self.power == 1 => terms.clone(),
            _ => vec![self.clone()],
        }
    }

    /// Flat list of multiplicative factors.
    ///
    /// A non-unit multiplier comes back as a separate leading number factor,
    /// so coefficient partitioning sees the numeric content on its own.
    pub fn multiplicative_factors(&self) -> Vec<Expr> {
        match &self.kind {
            Kind::Product(factors) => {
                let mut out = Vec::with_capacity(factors.len() + 1);
                if !self.multiplier.is_one() {
                    out.push(Expr::rational(self.multiplier.clone()));
                }
                out.extend(factors.iter().cloned());
                out
            }
            Kind::Number => vec![self.clone()],
            _ if !self.multiplier.is_one() => vec![
                Expr::rational(self.multiplier.clone()),
                Expr {
                    multiplier: BigRational::one(),
                    power: self.power,
                    kind: self.kind.clone(),
                },
            ],
            _ => vec![self.clone()],
        }
    }
}
