use crate::prompt::{ask, read_number, read_numbers};
use advanced_calculator::format_for_display;
use advanced_calculator::interpreter::operator::BinaryOperator;
use advanced_calculator::interpreter::{calculate, evaluate, steps_to_string};
use advanced_calculator::statistics::{mean, median, mode, StatisticsError};
use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use std::io::{BufRead, Write};

const RULE: &str = "====================================================";
const THIN_RULE: &str = "  -----------------------------------------";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
}

impl Statistic {
    fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean / Average",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
        }
    }

    fn compute(&self, numbers: &[f64]) -> Result<f64, StatisticsError> {
        match self {
            Statistic::Mean => mean(numbers),
            Statistic::Median => median(numbers),
            Statistic::Mode => mode(numbers),
        }
    }
}

fn format_list(numbers: &[f64]) -> String {
    format!(
        "[{}]",
        numbers.iter().map(|number| format_for_display(*number)).join(", ")
    )
}

/// Describes the statistic of the given numbers, one line per entry.
pub fn statistic_report(statistic: Statistic, numbers: &[f64]) -> Vec<String> {
    let mut lines = vec![format!("Numbers entered : {}", format_list(numbers))];
    match statistic.compute(numbers) {
        Ok(value) => lines.push(format!("{} = {}", statistic.label(), format_for_display(value))),
        Err(StatisticsError::NoUniqueMode { modes }) => {
            lines.push("No unique mode found (multiple values appear equally often).".into());
            lines.push(format!("All modes: {}", format_list(&modes)));
        }
        Err(error) => lines.push(format!("Error: {}", error)),
    }
    lines
}

/// The interactive menu. Reads choices from `input` until the user exits or input runs out.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Shell<R, W> {
        Shell { input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n  Welcome to the Advanced Calculator!")?;
        writeln!(self.output, "  * Separate mode    : enter numbers step by step")?;
        writeln!(self.output, "  * Single-line mode : type a full expression at once")?;

        loop {
            self.display_menu()?;
            let prompt = "  Enter your choice (0-9): ";
            let choice = match ask(&mut self.input, &mut self.output, prompt)? {
                Some(choice) => choice,
                None => break,
            };
            debug!("Menu choice {:?}", choice);

            match choice.as_str() {
                "0" => {
                    writeln!(self.output, "\n  Thank you for using the calculator. Goodbye!\n")?;
                    break;
                }
                "1" => self.separate_operation("ADDITION", BinaryOperator::Add)?,
                "2" => self.separate_operation("SUBTRACTION", BinaryOperator::Subtract)?,
                "3" => self.separate_operation("MULTIPLICATION", BinaryOperator::Multiply)?,
                "4" => self.separate_operation("DIVISION", BinaryOperator::Divide)?,
                "5" => self.separate_operation("MODULUS", BinaryOperator::Remainder)?,
                "6" => {
                    self.single_line_mode()?;
                    continue;
                }
                "7" => self.statistic_mode(Statistic::Mean)?,
                "8" => self.statistic_mode(Statistic::Median)?,
                "9" => self.statistic_mode(Statistic::Mode)?,
                _ => writeln!(
                    self.output,
                    "\n  Invalid choice! Please select between 0 and 9."
                )?,
            }

            let prompt = "\n  Press Enter to continue...";
            if ask(&mut self.input, &mut self.output, prompt)?.is_none() {
                break;
            }
        }

        info!("Leaving interactive shell");
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        let menu = [
            "",
            RULE,
            "            ADVANCED CALCULATOR",
            RULE,
            "  Basic - Separate Input (enter numbers one by one):",
            "    1. Addition          (+)",
            "    2. Subtraction       (-)",
            "    3. Multiplication    (*)",
            "    4. Division          (/)",
            "    5. Modulus           (%)",
            "",
            "  Basic - Single Line (type full expression):",
            "    6. Expression Evaluator  e.g.  10 + 5 * 3 - 2",
            "",
            "  Statistical Operations (list of numbers):",
            "    7. Mean / Average",
            "    8. Median",
            "    9. Mode",
            "",
            "    0. Exit",
            RULE,
        ];
        for line in menu {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn separate_operation(&mut self, title: &str, operator: BinaryOperator) -> Result<()> {
        writeln!(self.output, "\n  --- {}  [Separate Input] ---", title)?;
        let left_operand =
            match read_number(&mut self.input, &mut self.output, "  Enter first number  : ")? {
                Some(number) => number,
                None => return Ok(()),
            };
        let right_operand =
            match read_number(&mut self.input, &mut self.output, "  Enter second number : ")? {
                Some(number) => number,
                None => return Ok(()),
            };

        match calculate(left_operand, operator, right_operand) {
            Ok(step) => writeln!(self.output, "\n  Result: {}", step)?,
            Err(error) => {
                let label = match operator {
                    BinaryOperator::Remainder => "Modulus",
                    _ => "Division",
                };
                debug!("Separate {} failed: {}", operator, error);
                writeln!(self.output, "\n  Error: {} by zero is not allowed!", label)?
            }
        }
        Ok(())
    }

    fn single_line_mode(&mut self) -> Result<()> {
        let banner = [
            "",
            THIN_RULE,
            "  SINGLE LINE EXPRESSION MODE",
            THIN_RULE,
            "  Supports  : + - * / %",
            "  Precedence: (* / %) evaluated before (+ -)",
            "  Examples  :",
            "    10 + 5",
            "    100 / 4 + 3 * 2",
            "    15 % 4 - 1 * 2 + 7",
            "  Type 'back' to return to the main menu.",
            THIN_RULE,
        ];
        for line in banner {
            writeln!(self.output, "{}", line)?;
        }

        let prompt = "\n  Enter expression : ";
        while let Some(expression) = ask(&mut self.input, &mut self.output, prompt)? {
            if expression.eq_ignore_ascii_case("back") {
                break;
            }
            if expression.is_empty() {
                writeln!(self.output, "  Please enter an expression.")?;
                continue;
            }

            match evaluate(&expression) {
                Ok(evaluation) => {
                    writeln!(self.output, "\n  Expression : {}", expression)?;
                    if evaluation.steps.len() > 1 {
                        writeln!(self.output, "  Steps      :")?;
                        for line in steps_to_string(&evaluation.steps)?.lines() {
                            writeln!(self.output, "    {}", line)?;
                        }
                    }
                    writeln!(
                        self.output,
                        "\n  Final Result = {}",
                        format_for_display(evaluation.result)
                    )?;
                }
                Err(error) if error.is_arithmetic() => {
                    writeln!(self.output, "\n  Error: {}", error)?;
                }
                Err(error) => {
                    writeln!(self.output, "\n  Invalid expression: {}", error)?;
                    writeln!(self.output, "      Example: 10 + 5 * 3 / 2")?;
                }
            }
        }
        Ok(())
    }

    fn statistic_mode(&mut self, statistic: Statistic) -> Result<()> {
        writeln!(self.output, "\n  --- {} ---", statistic.label().to_uppercase())?;
        let numbers = match read_numbers(&mut self.input, &mut self.output)? {
            Some(numbers) => numbers,
            None => return Ok(()),
        };

        for line in statistic_report(statistic, &numbers) {
            writeln!(self.output, "  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_session(keystrokes: &str) -> String {
        let mut output = Vec::new();
        Shell::new(Cursor::new(keystrokes.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn exit_choice_says_goodbye() {
        let printed = run_session("0\n");
        assert!(printed.contains("ADVANCED CALCULATOR"));
        assert!(printed.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let printed = run_session("");
        assert!(!printed.contains("Goodbye!"));
    }

    #[test]
    fn separate_multiplication_prints_step() {
        let printed = run_session("3\n6\n7\n\n0\n");
        assert!(printed.contains("--- MULTIPLICATION  [Separate Input] ---"));
        assert!(printed.contains("Result: 6 × 7 = 42"));
    }

    #[test]
    fn separate_division_by_zero_is_reported() {
        let printed = run_session("4\n10\n0\n\n0\n");
        assert!(printed.contains("Error: Division by zero is not allowed!"));
    }

    #[test]
    fn separate_modulus_by_zero_is_reported() {
        let printed = run_session("5\n10\n0\n\n0\n");
        assert!(printed.contains("Error: Modulus by zero is not allowed!"));
    }

    #[test]
    fn expression_mode_prints_steps_and_result() {
        let printed = run_session("6\n100 / 4 + 3 * 2\nback\n0\n");
        assert!(printed.contains("Expression : 100 / 4 + 3 * 2"));
        assert!(printed.contains("    Step 1: 100 ÷ 4 = 25\n"));
        assert!(printed.contains("    Step 2: 3 × 2 = 6\n"));
        assert!(printed.contains("    Step 3: 25 + 6 = 31\n"));
        assert!(printed.contains("Final Result = 31"));
    }

    #[test]
    fn expression_mode_hides_single_step() {
        let printed = run_session("6\n10 + 5\nBACK\n0\n");
        assert!(!printed.contains("Steps      :"));
        assert!(printed.contains("Final Result = 15"));
    }

    #[test]
    fn expression_mode_reports_errors_and_keeps_asking() {
        let printed = run_session("6\n\n10 / 0\n10 +\n2 * 2\nback\n0\n");
        assert!(printed.contains("Please enter an expression."));
        assert!(printed.contains("Error: Division by zero."));
        assert!(printed.contains("Invalid expression: Expression ends with an operator."));
        assert!(printed.contains("Final Result = 4"));
    }

    #[test]
    fn invalid_menu_choice_is_reported() {
        let printed = run_session("42\n\n0\n");
        assert!(printed.contains("Invalid choice! Please select between 0 and 9."));
    }

    #[test]
    fn median_mode_prints_numbers_and_result() {
        let printed = run_session("8\n4 1 3 2\n\n0\n");
        assert!(printed.contains("Numbers entered : [4, 1, 3, 2]"));
        assert!(printed.contains("Median = 2.5"));
    }

    #[test]
    fn mode_tie_lists_all_modes() {
        let lines = statistic_report(Statistic::Mode, &[1.0, 1.0, 2.0, 2.0]);
        assert_eq!(
            lines,
            vec![
                "Numbers entered : [1, 1, 2, 2]".to_string(),
                "No unique mode found (multiple values appear equally often).".to_string(),
                "All modes: [1, 2]".to_string(),
            ]
        );
    }

    #[test]
    fn mean_report() {
        let lines = statistic_report(Statistic::Mean, &[1.0, 2.0]);
        assert_eq!(lines[1], "Mean / Average = 1.5");
    }
}
