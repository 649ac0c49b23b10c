//! Named callables exposed to an embedding system.
//!
//! The engine's three operations (`ft`, `staylor`, `delta`) are registered
//! by name with a fixed arity. An embedder (the REPL, a scripting layer)
//! resolves a call site by name and dispatches through [`Registry::call`].

use crate::error::EngineError;
use crate::{delta, fourier, taylor};
use sig_ast::Expr;
use std::collections::HashMap;

type EvalFn = fn(&[Expr]) -> Result<Expr, EngineError>;

/// A registered builtin: fixed name, fixed arity, pure evaluation function.
#[derive(Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    eval: EvalFn,
}

/// Immutable name → builtin map, populated once at construction.
pub struct Registry {
    builtins: HashMap<&'static str, Builtin>,
}

impl Registry {
    /// Registry with the three engine callables: `ft`, `staylor`, `delta`.
    pub fn with_builtins() -> Self {
        let mut builtins = HashMap::new();
        for b in [
            Builtin {
                name: "ft",
                arity: 3,
                eval: |args| fourier::fourier_transform(&args[0], &args[1], &args[2]),
            },
            Builtin {
                name: "staylor",
                arity: 4,
                eval: |args| taylor::taylor_series(&args[0], &args[1], &args[2], &args[3]),
            },
            Builtin {
                name: "delta",
                arity: 1,
                eval: |args| Ok(delta::evaluate(&args[0])),
            },
        ] {
            builtins.insert(b.name, b);
        }
        Registry { builtins }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Dispatch `name(args...)`.
    pub fn call(&self, name: &str, args: &[Expr]) -> Result<Expr, EngineError> {
        let builtin = self
            .builtins
            .get(name)
            .ok_or_else(|| EngineError::UnknownFunction(name.to_string()))?;
        if args.len() != builtin.arity {
            return Err(EngineError::BadArity {
                name: builtin.name.to_string(),
                expected: builtin.arity,
                got: args.len(),
            });
        }
        (builtin.eval)(args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_delta() {
        let r = Registry::with_builtins();
        let result = r.call("delta", &[Expr::num(2)]).unwrap();
        assert!(result.is_zero());
    }

    #[test]
    fn dispatches_ft() {
        let r = Registry::with_builtins();
        let args = [
            Expr::func("rect", vec![Expr::var("t")]),
            Expr::var("t"),
            Expr::var("f"),
        ];
        let result = r.call("ft", &args).unwrap();
        assert_eq!(result, Expr::func("sinc", vec![Expr::var("f")]));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let r = Registry::with_builtins();
        assert!(matches!(
            r.call("laplace", &[Expr::num(1)]),
            Err(EngineError::UnknownFunction(_))
        ));
    }

    #[test]
    fn arity_is_checked() {
        let r = Registry::with_builtins();
        assert!(matches!(
            r.call("ft", &[Expr::num(1)]),
            Err(EngineError::BadArity { expected: 3, got: 1, .. })
        ));
    }
}
