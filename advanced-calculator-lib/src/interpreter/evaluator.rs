use crate::format::format_for_display;
use crate::interpreter::error::{EvaluationError, Expected};
use crate::interpreter::operator::{BinaryOperator, Tier};
use crate::interpreter::token::Token;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// One binary reduction performed during evaluation, with every value already formatted
/// for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub left_operand: String,
    pub operator: BinaryOperator,
    pub right_operand: String,
    pub result: String,
}

impl Step {
    fn new(left_operand: f64, operator: BinaryOperator, right_operand: f64, result: f64) -> Step {
        Step {
            left_operand: format_for_display(left_operand),
            operator,
            right_operand: format_for_display(right_operand),
            result: format_for_display(result),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left_operand,
            self.operator.glyph(),
            self.right_operand,
            self.result
        )
    }
}

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The full-precision result.
    pub result: f64,
    /// Every reduction in the order it was performed.
    pub steps: Vec<Step>,
}

impl Evaluation {
    pub fn step_descriptions(&self) -> Vec<String> {
        self.steps.iter().map(Step::to_string).collect()
    }
}

/// Applies a single operator and records the reduction as a step.
pub(crate) fn perform(
    left_operand: f64,
    operator: BinaryOperator,
    right_operand: f64,
) -> Result<(f64, Step), EvaluationError> {
    let result = operator.evaluate(left_operand, right_operand)?;
    let step = Step::new(left_operand, operator, right_operand, result);
    debug!("{}", step);
    Ok((result, step))
}

/// Evaluates an infix token sequence, giving `*`, `/` and `%` precedence over `+` and `-`.
/// Operators of the same tier are applied left to right.
///
/// # Arguments
///
/// * `tokens`: Alternating numbers and operators, starting and ending with a number.
///
/// returns: The result and the steps taken to reach it.
///
/// # Examples
///
/// ```
/// use advanced_calculator::interpreter::evaluator::evaluate_tokens;
/// use advanced_calculator::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let evaluation = evaluate_tokens(tokenize("2 + 3 * 4"))?;
/// assert_eq!(evaluation.result, 14.0);
/// assert_eq!(evaluation.steps.len(), 2);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_tokens(tokens: Vec<Token>) -> Result<Evaluation, EvaluationError> {
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    let (mut operands, mut operators) = split_alternating(tokens)?;
    let mut steps = Vec::with_capacity(operators.len());

    // Multiplicative tier: reduce in place without advancing, so chains like 2 * 3 * 4 collapse.
    let mut index = 0;
    while index < operators.len() {
        if operators[index].tier() == Tier::Multiplicative {
            steps.push(reduce_at(&mut operands, &mut operators, index)?);
        } else {
            index += 1;
        }
    }

    // Additive tier: only + and - remain.
    while !operators.is_empty() {
        steps.push(reduce_at(&mut operands, &mut operators, 0)?);
    }

    debug_assert_eq!(operands.len(), 1);
    Ok(Evaluation {
        result: operands[0],
        steps,
    })
}

/// Separates the tokens into operands and operators, checking that they alternate.
fn split_alternating(tokens: Vec<Token>) -> Result<(Vec<f64>, Vec<BinaryOperator>), EvaluationError> {
    let mut operands = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut operators = Vec::with_capacity(tokens.len() / 2);
    let mut expect_number = true;

    for token in tokens {
        match (expect_number, token) {
            (true, Token::Literal(value)) => operands.push(value),
            (false, Token::Operator(operator)) => operators.push(operator),
            (true, found) => {
                return Err(EvaluationError::MalformedExpression {
                    expected: Expected::Number,
                    found,
                })
            }
            (false, found) => {
                return Err(EvaluationError::MalformedExpression {
                    expected: Expected::Operator,
                    found,
                })
            }
        }
        expect_number = !expect_number;
    }

    if expect_number {
        return Err(EvaluationError::TrailingOperator);
    }
    if operands.is_empty() {
        return Err(EvaluationError::NoOperands);
    }
    Ok((operands, operators))
}

/// Combines `operands[index]` and `operands[index + 1]` with `operators[index]`, leaving the
/// result in place of the pair.
fn reduce_at(
    operands: &mut Vec<f64>,
    operators: &mut Vec<BinaryOperator>,
    index: usize,
) -> Result<Step, EvaluationError> {
    let operator = operators[index];
    let (result, step) = perform(operands[index], operator, operands[index + 1])?;
    operands[index] = result;
    operands.remove(index + 1);
    operators.remove(index);
    Ok(step)
}
