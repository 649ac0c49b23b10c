//! Canonical ordering of expression nodes.
//!
//! Composite children are kept sorted by this ordering, which is what makes
//! structural equality usable as algebraic equality after normalization.
//! The comparison is total and consistent with the derived `PartialEq`:
//! rank by kind first, then payload, then power, then multiplier.

use crate::expression::{Expr, Kind};
use std::cmp::Ordering;

fn rank(kind: &Kind) -> u8 {
    match kind {
        Kind::Number => 0,
        Kind::Constant(_) => 1,
        Kind::Variable(_) => 2,
        Kind::Function(_, _) => 3,
        Kind::Product(_) => 4,
        Kind::Sum(_) => 5,
    }
}

fn compare_children(a: &[Expr], b: &[Expr]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match compare(x, y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

pub fn compare(a: &Expr, b: &Expr) -> Ordering {
    let by_kind = match (&a.kind, &b.kind) {
        (Kind::Number, Kind::Number) => Ordering::Equal,
        (Kind::Constant(c1), Kind::Constant(c2)) => c1.cmp(c2),
        (Kind::Variable(v1), Kind::Variable(v2)) => v1.cmp(v2),
        (Kind::Function(n1, a1), Kind::Function(n2, a2)) => {
            n1.cmp(n2).then_with(|| compare_children(a1, a2))
        }
        (Kind::Sum(c1), Kind::Sum(c2)) | (Kind::Product(c1), Kind::Product(c2)) => {
            compare_children(c1, c2)
        }
        (k1, k2) => rank(k1).cmp(&rank(k2)),
    };
    by_kind
        .then_with(|| a.power.cmp(&b.power))
        .then_with(|| a.multiplier.cmp(&b.multiplier))
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sort_before_variables() {
        assert_eq!(compare(&Expr::num(3), &Expr::var("a")), Ordering::Less);
    }

    #[test]
    fn variables_sort_by_name() {
        assert_eq!(compare(&Expr::var("a"), &Expr::var("b")), Ordering::Less);
    }

    #[test]
    fn equal_nodes_compare_equal() {
        let f = Expr::func("rect", vec![Expr::var("t")]);
        assert_eq!(compare(&f, &f.clone()), Ordering::Equal);
    }
}
