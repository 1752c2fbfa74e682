//! Line-oriented interactive loops
//!
//! Every loop reads one line per iteration, stops on EOF or the quit word,
//! and writes exactly one response line otherwise. Handlers never fail: bad
//! input becomes a diagnostic line and the loop goes on.

use kata_core::sorting::{enclosing, Enclosing};
use kata_core::{rot13_str, reverse_line, BigFactorialCache};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Runs `handle` over each input line until EOF or `quit_word`
pub fn run_loop<R, W, F>(
    mut input: R,
    output: &mut W,
    prompt: &str,
    quit_word: &str,
    mut handle: F,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> String,
{
    let mut handled = 0;
    let mut line = String::new();

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text == quit_word {
            break;
        }

        writeln!(output, "{}", handle(text))?;
        handled += 1;
    }

    debug!(handled, "interactive loop finished");
    Ok(handled)
}

/// Response for one factorial request: `<n>! = <result>` or a diagnostic
pub fn quote_line(cache: &BigFactorialCache, line: &str) -> String {
    let n = match line.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => return format!("Invalid input: '{}' is not an integer", line.trim()),
    };

    match cache.factorial(n) {
        Ok(value) => format!("{n}! = {value}"),
        Err(e) => format!("Invalid input: {e}"),
    }
}

pub fn rot13_line(line: &str) -> String {
    rot13_str(line)
}

pub fn reverse_text_line(line: &str) -> String {
    reverse_line(line)
}

/// Response for one enclosing-neighbours query against `sorted`
pub fn enclosing_line(sorted: &[f64], line: &str) -> String {
    let target = match line.trim().parse::<f64>() {
        Ok(t) if t.is_finite() => t,
        _ => return format!("Invalid input: '{}' is not a number", line.trim()),
    };

    match enclosing(target, sorted) {
        Enclosing::Below => format!("{target} is below all other elements"),
        Enclosing::Above => format!("{target} is above all other elements"),
        Enclosing::Between(lo, hi) => format!("{lo} < {target} <= {hi}"),
    }
}
