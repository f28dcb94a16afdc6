//! Interactive prompt: one expression per line until EOF, `quit` or `exit`.

use std::io::{BufRead, Write};

use dimcalc_dimensions::Evaluator;

use crate::config::OutputFormat;
use crate::output;

pub fn run<R, W>(
    evaluator: &Evaluator<'_>,
    prompt: &str,
    format: OutputFormat,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    let mut evaluated = 0usize;

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let expr = line.trim();
        if expr.is_empty() {
            continue;
        }
        if matches!(expr, "quit" | "exit") {
            break;
        }

        evaluated += 1;
        match evaluator.evaluate(expr) {
            Ok(eval) => writeln!(out, "{}", output::evaluation(&eval, format)?)?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    tracing::debug!(evaluated, "Interactive session finished");
    Ok(())
}
