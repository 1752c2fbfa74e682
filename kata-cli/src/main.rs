//! kata - small algorithm exercises
//! Command-line adapters around kata-core and kata-structures

mod error;
mod repl;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use error::CliError;
use kata_core::{
    count_sequence, factorial, factorial_rec, fibonacci, fizz_buzz, fizz_buzz_table,
    largest_prime_up_to, reverse_all, reverse_line, sorted, substring, tribonacci,
    BigFactorialCache, BoundedFactorialCache, KataConfig,
};
use kata_structures::{radians_to_degrees, Circle, PlaneCircle, Rectangle, Shape};
use rand::Rng;
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "kata")]
#[command(author = "Kata Contributors")]
#[command(version = "2026.10.19")]
#[command(about = "kata - factorials, primes and other small exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FactorialMode {
    /// Arbitrary precision, memoized
    Big,
    /// 64-bit table, 0! through 20!
    Bounded,
    /// 64-bit loop, no cache
    Iterative,
    /// 64-bit recursion, no cache
    Recursive,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the factorial of a single number
    Factorial {
        /// Non-negative integer
        #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
        number: Option<String>,

        /// Which implementation computes the result
        #[arg(short, long, value_enum, default_value_t = FactorialMode::Big)]
        mode: FactorialMode,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read numbers from stdin and quote their factorials until `quit`
    Quoter,

    /// Find the largest prime less than or equal to MAX
    Sieve {
        #[arg(value_name = "MAX", allow_negative_numbers = true)]
        max: i64,

        /// Refuse MAX above this bound (defaults to KATA_SIEVE_LIMIT)
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Print the first N Fibonacci numbers
    Fibonacci {
        #[arg(value_name = "N")]
        n: usize,
    },

    /// Print the first N terms where each term sums the previous three
    Tribonacci {
        #[arg(value_name = "N")]
        n: usize,
    },

    /// FizzBuzz over 1..=N with 5 and 7
    Fizzbuzz {
        #[arg(value_name = "N")]
        n: usize,

        /// Use the remainder-table variant (N <= 35)
        #[arg(long)]
        table: bool,
    },

    /// Count up by ones, then back down by twos
    Count {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        start: i64,

        #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
        end: i64,
    },

    /// Reverse WORDS (order and letters), or reverse stdin lines until `tiuq`
    Reverse {
        #[arg(value_name = "WORDS")]
        words: Vec<String>,
    },

    /// ROT13 every stdin line until `quit`
    Rot13,

    /// Print the characters of STRING from START (inclusive) to END (exclusive)
    Substring {
        #[arg(value_name = "STRING")]
        string: String,

        #[arg(value_name = "START", allow_negative_numbers = true)]
        start: i64,

        #[arg(value_name = "END", allow_negative_numbers = true)]
        end: i64,
    },

    /// Locate stdin numbers between neighbours of a sorted random sample
    Enclosing {
        /// Sample size (defaults to KATA_ENCLOSING_SIZE)
        #[arg(long)]
        size: Option<usize>,
    },

    /// Describe a circle, a rectangle and a positioned circle
    Shapes {
        #[arg(long, default_value_t = 2.0)]
        radius: f64,

        #[arg(long, default_value_t = 3.0)]
        width: f64,

        #[arg(long, default_value_t = 4.0)]
        height: f64,

        /// Point to test against a circle centred at the origin, as X,Y
        #[arg(long, value_delimiter = ',', num_args = 2, allow_negative_numbers = true)]
        point: Option<Vec<f64>>,

        /// Print the shapes as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let config = KataConfig::from_env();
    init_tracing(&config);

    let cli = Cli::parse();

    if let Err(e) = run(cli.command, &config) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &KataConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("KATA_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(command: Commands, config: &KataConfig) -> anyhow::Result<()> {
    match command {
        Commands::Factorial { number, mode, json } => {
            factorial_command(number.as_deref(), mode, json)
        }
        Commands::Quoter => quoter_command(config),
        Commands::Sieve { max, limit } => sieve_command(max, limit.unwrap_or(config.sieve_limit)),
        Commands::Fibonacci { n } => {
            print_sequence(&fibonacci(n)?);
            Ok(())
        }
        Commands::Tribonacci { n } => {
            print_sequence(&tribonacci(n)?);
            Ok(())
        }
        Commands::Fizzbuzz { n, table } => {
            let out = if table { fizz_buzz_table(n)? } else { fizz_buzz(n) };
            for line in out {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Count { start, end } => {
            print_sequence(&count_sequence(start, end));
            Ok(())
        }
        Commands::Reverse { words } => reverse_command(&words, config),
        Commands::Rot13 => {
            let stdin = io::stdin();
            repl::run_loop(
                stdin.lock(),
                &mut io::stdout(),
                &config.prompt(""),
                &config.quit_word,
                repl::rot13_line,
            )?;
            Ok(())
        }
        Commands::Substring { string, start, end } => substring_command(&string, start, end),
        Commands::Enclosing { size } => {
            enclosing_command(io::stdin().lock(), size.unwrap_or(config.enclosing_size), config)
        }
        Commands::Shapes { radius, width, height, point, json } => {
            shapes_command(radius, width, height, point.as_deref(), json)
        }
    }
}

// ============================================================================
// Factorial commands
// ============================================================================

fn parse_argument(arg: Option<&str>) -> Result<i64, CliError> {
    let arg = arg.ok_or(CliError::MissingArgument)?;
    arg.trim()
        .parse()
        .map_err(|_| CliError::NotAnInteger(arg.to_string()))
}

fn compute_factorial(n: i64, mode: FactorialMode) -> kata_core::KataResult<String> {
    match mode {
        FactorialMode::Big => BigFactorialCache::global().factorial(n).map(|v| v.to_string()),
        FactorialMode::Bounded => BoundedFactorialCache::new().factorial(n).map(|v| v.to_string()),
        FactorialMode::Iterative => factorial(n).map(|v| v.to_string()),
        FactorialMode::Recursive => factorial_rec(n).map(|v| v.to_string()),
    }
}

fn factorial_command(number: Option<&str>, mode: FactorialMode, json: bool) -> anyhow::Result<()> {
    let n = parse_argument(number)?;
    debug!(n, ?mode, "computing factorial");

    let value = compute_factorial(n, mode).context("Bad argument")?;
    println!("{}", render_factorial(n, &value, json));
    Ok(())
}

/// Linha de saída do comando `factorial`; o valor vai como string no JSON
fn render_factorial(n: i64, value: &str, json: bool) -> String {
    if json {
        serde_json::json!({ "n": n, "factorial": value }).to_string()
    } else {
        format!("{n}! = {value}")
    }
}

fn quoter_command(config: &KataConfig) -> anyhow::Result<()> {
    let cache = BigFactorialCache::global();
    let stdin = io::stdin();

    let handled = repl::run_loop(
        stdin.lock(),
        &mut io::stdout(),
        &config.prompt("FactorialQuoter"),
        &config.quit_word,
        |line| repl::quote_line(cache, line),
    )?;

    info!(handled, cached = cache.cached_len(), "quoter finished");
    Ok(())
}

// ============================================================================
// Other exercises
// ============================================================================

fn sieve_command(max: i64, limit: i64) -> anyhow::Result<()> {
    if max > limit {
        return Err(CliError::SieveLimit { max, limit }.into());
    }
    let prime = largest_prime_up_to(max).context("Bad argument")?;
    println!("{prime}");
    Ok(())
}

fn print_sequence<T: std::fmt::Display>(values: &[T]) {
    let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", line.join(" "));
}

fn reverse_command(words: &[String], config: &KataConfig) -> anyhow::Result<()> {
    if !words.is_empty() {
        print_sequence(&reverse_all(words));
        return Ok(());
    }

    let quit_word = reverse_line(&config.quit_word);
    println!("Starting Reverser. Enter strings to reverse, or type {quit_word} to quit.");

    let stdin = io::stdin();
    repl::run_loop(
        stdin.lock(),
        &mut io::stdout(),
        &config.prompt("Reverser"),
        &quit_word,
        repl::reverse_text_line,
    )?;
    Ok(())
}

fn substring_command(string: &str, start: i64, end: i64) -> anyhow::Result<()> {
    let (start, end) = match (usize::try_from(start), usize::try_from(end)) {
        (Ok(s), Ok(e)) => (s, e),
        _ => return Err(CliError::ImproperIndexes.into()),
    };
    let sub = substring(string, start, end).map_err(|_| CliError::ImproperIndexes)?;
    println!("{sub}");
    Ok(())
}

fn enclosing_command<R: BufRead>(input: R, size: usize, config: &KataConfig) -> anyhow::Result<()> {
    anyhow::ensure!(size > 0, "sample size must be positive");

    let mut rng = rand::thread_rng();
    let sample: Vec<f64> = (0..size).map(|_| rng.r#gen::<f64>() * size as f64).collect();
    let nums = sorted(&sample);

    println!(
        "Choose a number between {} and {}",
        nums[0],
        nums[nums.len() - 1]
    );

    repl::run_loop(
        input,
        &mut io::stdout(),
        &config.prompt("PrintEnclosing"),
        &config.quit_word,
        |line| repl::enclosing_line(&nums, line),
    )?;
    Ok(())
}

fn shapes_command(
    radius: f64,
    width: f64,
    height: f64,
    point: Option<&[f64]>,
    json: bool,
) -> anyhow::Result<()> {
    let circle = Circle::new(radius)?;
    let rectangle = Rectangle::new(width, height);
    let plane = PlaneCircle::new(radius, 0.0, 0.0)?;

    if json {
        let value = serde_json::json!({
            "circle": circle,
            "rectangle": rectangle,
            "plane_circle": plane,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let shapes: [&dyn Shape; 2] = [&circle, &rectangle];
    for shape in shapes {
        println!(
            "{:<10} area {:>10.4}  circumference {:>10.4}",
            shape.name().cyan(),
            shape.area(),
            shape.circumference()
        );
    }
    println!("a full turn is {} degrees", radians_to_degrees(2.0 * std::f64::consts::PI));

    if let Some([x, y]) = point {
        let verdict = if plane.is_inside(*x, *y) { "inside" } else { "outside" };
        println!("({x}, {y}) is {verdict} the circle of radius {radius} at the origin");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_and_non_integer_are_distinct() {
        assert_eq!(parse_argument(None), Err(CliError::MissingArgument));
        assert_eq!(
            parse_argument(Some("ten")),
            Err(CliError::NotAnInteger("ten".to_string()))
        );
        assert_ne!(
            CliError::MissingArgument.to_string(),
            CliError::NotAnInteger("ten".to_string()).to_string()
        );
        assert_eq!(parse_argument(Some("-4")), Ok(-4));
    }

    #[test]
    fn test_modes_agree() {
        for n in [0, 1, 12, 20] {
            let big = compute_factorial(n, FactorialMode::Big).unwrap();
            for mode in [FactorialMode::Bounded, FactorialMode::Iterative, FactorialMode::Recursive] {
                assert_eq!(compute_factorial(n, mode).unwrap(), big);
            }
        }
    }

    #[test]
    fn test_factorial_output_formats() {
        let value = compute_factorial(25, FactorialMode::Big).unwrap();
        assert_eq!(
            render_factorial(25, &value, false),
            "25! = 15511210043330985984000000"
        );

        let parsed: serde_json::Value =
            serde_json::from_str(&render_factorial(25, &value, true)).unwrap();
        assert_eq!(parsed["n"], 25);
        assert_eq!(parsed["factorial"], "15511210043330985984000000");
        assert_eq!(parsed.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_bad_argument_context() {
        let err = factorial_command(Some("-1"), FactorialMode::Big, false).unwrap_err();
        assert_eq!(format!("{err:#}"), "Bad argument: x must be non-negative, was -1");

        let err = factorial_command(Some("21"), FactorialMode::Bounded, false).unwrap_err();
        assert!(format!("{err:#}").starts_with("Bad argument: Overflow"));
    }

    #[test]
    fn test_sieve_limit() {
        let err = sieve_command(1_000, 100).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>(),
            Some(&CliError::SieveLimit { max: 1_000, limit: 100 })
        );
        assert!(sieve_command(1, 100).is_err());
        assert!(sieve_command(348, 1_000).is_ok());
    }

    #[test]
    fn test_substring_indexes() {
        assert!(substring_command("hello", 1, 3).is_ok());
        for (start, end) in [(-1, 3), (2, 9), (4, 1)] {
            let err = substring_command("hello", start, end).unwrap_err();
            assert_eq!(err.downcast_ref::<CliError>(), Some(&CliError::ImproperIndexes));
        }
    }

    #[test]
    fn test_shapes_rejects_negative_radius() {
        assert!(shapes_command(-1.0, 1.0, 1.0, None, false).is_err());
        assert!(shapes_command(1.0, 1.0, 1.0, Some(&[0.5, 0.5]), false).is_ok());
    }
}
