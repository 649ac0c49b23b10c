//! Interactive REPL.
//!
//! Lines parse as expressions; a top-level call to a registered builtin
//! (`ft`, `staylor`, `delta`) dispatches through the engine registry,
//! anything else echoes back in normalized form.
//!
//! ```text
//! sig> ft(exp(i*2*pi*5*t)*rect(t), t, f)
//! = sinc(-5 + f)
//! ```

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sig_engine::Registry;
use tracing_subscriber::EnvFilter;

fn eval_line(registry: &Registry, line: &str) {
    match sig_parser::parse(line) {
        Ok(expr) => {
            let result = match expr.as_function_call() {
                Some((name, args)) if registry.contains(name) => registry.call(name, args),
                _ => Ok(expr.clone()),
            };
            match result {
                Ok(value) => println!("= {value}"),
                Err(e) => eprintln!("error: {e}"),
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::with_builtins();
    let mut rl = DefaultEditor::new()?;
    println!("sig - symbolic Fourier transforms (:quit to exit)");

    loop {
        match rl.readline("sig> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == ":quit" || line == ":q" {
                    break;
                }
                let _ = rl.add_history_entry(line);
                eval_line(&registry, line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        }
    }
    Ok(())
}
