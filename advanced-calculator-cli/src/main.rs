mod prompt;
mod shell;

use advanced_calculator::format_for_display;
use advanced_calculator::interpreter::{evaluate, steps_to_string};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::info;
use shell::{statistic_report, Shell, Statistic};
use std::io;
use std::io::Write;

/// Calculator with step-by-step expression evaluation and basic statistics.
///
/// Starts the interactive menu when no command is given.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Option<Command>,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression such as "100 / 4 + 3 * 2"
    Eval {
        /// The expression to evaluate
        #[clap(allow_hyphen_values = true)]
        expression: String,
    },
    /// Mean (average) of the given numbers
    #[clap(alias = "average")]
    Mean {
        #[clap(required = true, allow_hyphen_values = true)]
        numbers: Vec<f64>,
    },
    /// Median of the given numbers
    Median {
        #[clap(required = true, allow_hyphen_values = true)]
        numbers: Vec<f64>,
    },
    /// Most common of the given numbers
    Mode {
        #[clap(required = true, allow_hyphen_values = true)]
        numbers: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match args.command {
        None => {
            info!("Starting interactive shell");
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(stdin.lock(), stdout.lock()).run()
        }
        Some(Command::Eval { expression }) => print_evaluation(&mut io::stdout(), &expression),
        Some(Command::Mean { numbers }) => {
            print_statistic(&mut io::stdout(), Statistic::Mean, &numbers)
        }
        Some(Command::Median { numbers }) => {
            print_statistic(&mut io::stdout(), Statistic::Median, &numbers)
        }
        Some(Command::Mode { numbers }) => {
            print_statistic(&mut io::stdout(), Statistic::Mode, &numbers)
        }
    }
}

fn print_evaluation(output: &mut impl Write, expression: &str) -> Result<()> {
    let evaluation = evaluate(expression)
        .with_context(|| format!("could not evaluate expression '{}'", expression))?;
    if evaluation.steps.len() > 1 {
        writeln!(output, "{}", steps_to_string(&evaluation.steps)?)?;
    }
    writeln!(output, "{}", format_for_display(evaluation.result))?;
    Ok(())
}

fn print_statistic(output: &mut impl Write, statistic: Statistic, numbers: &[f64]) -> Result<()> {
    for line in statistic_report(statistic, numbers) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
