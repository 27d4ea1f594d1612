pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::{evaluate_tokens, perform, Evaluation, Step};
use crate::interpreter::operator::BinaryOperator;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Evaluates an arithmetic expression, applying `*`, `/` and `%` before `+` and `-`.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, without parentheses.
///
/// returns: The result together with every step taken to reach it.
///
/// # Examples
///
/// ```
/// use advanced_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let evaluation = evaluate("100 / 4 + 3 * 2")?;
/// assert_eq!(evaluation.result, 31.0);
/// assert_eq!(
///     evaluation.step_descriptions(),
///     vec!["100 ÷ 4 = 25", "3 × 2 = 6", "25 + 6 = 31"]
/// );
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<Evaluation, EvaluationError> {
    let tokens = lexer::tokenize(expression);
    debug!("Tokenized {:?} into {} tokens", expression, tokens.len());
    evaluate_tokens(tokens).map_err(|error| {
        debug!("Could not evaluate {:?}: {}", expression, error);
        error
    })
}

/// Performs a single operation on two numbers, as entered one at a time.
///
/// # Examples
///
/// ```
/// use advanced_calculator::interpreter::calculate;
/// use advanced_calculator::interpreter::operator::BinaryOperator;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let step = calculate(6.0, BinaryOperator::Multiply, 7.0)?;
/// assert_eq!(step.to_string(), "6 × 7 = 42");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(
    left_operand: f64,
    operator: BinaryOperator,
    right_operand: f64,
) -> Result<Step, EvaluationError> {
    let (_, step) = perform(left_operand, operator, right_operand)?;
    Ok(step)
}

/// Pretty-prints the given steps as numbered lines.
///
/// # Arguments
///
/// * `steps`: The steps to print, in the order they were performed.
///
/// returns: One `Step n: ...` line per step.
///
/// # Examples
///
/// ```
/// use advanced_calculator::interpreter::{evaluate, steps_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let evaluation = evaluate("2 * 3 + 1")?;
/// let report = steps_to_string(&evaluation.steps)?;
/// assert_eq!(report, "Step 1: 2 × 3 = 6\nStep 2: 6 + 1 = 7");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn steps_to_string(steps: &[Step]) -> Result<String> {
    let mut builder = Builder::new(steps.len() * 24);

    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            builder.append("\n");
        }
        builder.append(format!("Step {}: {}", index + 1, step));
    }

    builder.string().context("Failed to build step report")
}
