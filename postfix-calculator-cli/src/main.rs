use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use postfix_calculator::interpreter::{evaluate, to_postfix_string};
use std::io;
use std::io::{BufRead, Write};

const PROMPT: &str = ">>> ";

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when left out
    expression: Option<String>,

    /// Also print the expression in postfix notation
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match &args.expression {
        Some(expression) => {
            print_postfix(&args, expression, &mut io::stdout())?;
            let value = evaluate(expression)
                .with_context(|| format!("could not evaluate `{}`", expression))?;
            println!("{}", value);
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            run_interactive(&args, stdin.lock(), &mut io::stdout())
        }
    }
}

fn run_interactive(args: &Arguments, input: impl BufRead, output: &mut impl Write) -> Result<()> {
    info!("starting interactive session");
    writeln!(output, "Interactive mode. Enter an expression, or 'exit' to quit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("could not flush output")?;

        let line = match lines.next() {
            Some(line) => line.context("could not read input")?,
            None => break,
        };
        if is_exit_command(&line) {
            break;
        }

        print_postfix(args, &line, output)?;
        match evaluate(&line) {
            Ok(value) => writeln!(output, "{}", value)?,
            Err(error) => writeln!(output, "error: {}", error)?,
        }
    }

    debug!("interactive session ended");
    Ok(())
}

/// Prints the postfix form when asked for. Expressions that cannot be converted
/// print nothing here and are reported by the evaluation that follows.
fn print_postfix(args: &Arguments, expression: &str, output: &mut impl Write) -> Result<()> {
    if !args.postfix || expression.trim().is_empty() {
        return Ok(());
    }
    match to_postfix_string(expression) {
        Ok(postfix) => writeln!(output, "{}", postfix)?,
        Err(error) => debug!("no postfix form for {:?}: {:#}", expression, error),
    }
    Ok(())
}

/// An empty line, `exit` or `quit` ends the session.
fn is_exit_command(line: &str) -> bool {
    let command = line.trim();
    line.is_empty() || command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit")
}
