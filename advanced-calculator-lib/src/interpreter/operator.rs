use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Precedence class of an operator. Multiplicative operators bind tighter than additive ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Additive,
    Multiplicative,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '%' => Some(BinaryOperator::Remainder),
            _ => None,
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    /// The character used to write the operator in an expression.
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Remainder => '%',
        }
    }

    /// The character used when presenting a performed step to a reader.
    pub fn glyph(&self) -> char {
        match self {
            BinaryOperator::Multiply => '×',
            BinaryOperator::Divide => '÷',
            _ => self.symbol(),
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => Tier::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Remainder => {
                Tier::Multiplicative
            }
        }
    }

    /// Applies the operator to two full-precision operands.
    ///
    /// Division and remainder fail when the right operand is zero.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
            BinaryOperator::Remainder if b == 0.0 => Err(EvaluationError::ModulusByZero),
            BinaryOperator::Remainder => Ok(floored_remainder(a, b)),
        }
    }
}

/// Remainder whose sign follows the divisor, unlike `%` on `f64` which follows the dividend.
fn floored_remainder(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder == 0.0 {
        0f64.copysign(b)
    } else if (remainder < 0.0) != (b < 0.0) {
        remainder + b
    } else {
        remainder
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_tier() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Remainder;
        assert_eq!(equal1.tier(), equal2.tier())
    }

    #[test]
    fn multiplicative_tier_binds_tighter_than_additive() {
        let greater = BinaryOperator::Divide;
        let lesser = BinaryOperator::Subtract;
        assert!(greater.tier() > lesser.tier())
    }

    #[test]
    fn symbols_map_back_to_their_operator() {
        for operator in [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Remainder,
        ] {
            assert_eq!(BinaryOperator::from_symbol(operator.symbol()), Some(operator));
        }
        assert_eq!(BinaryOperator::from_symbol('^'), None);
    }

    #[test]
    fn multiplication_and_division_have_display_glyphs() {
        assert_eq!(BinaryOperator::Multiply.glyph(), '×');
        assert_eq!(BinaryOperator::Divide.glyph(), '÷');
        assert_eq!(BinaryOperator::Remainder.glyph(), '%');
    }

    #[parameterized(
    a = { 15.0, -7.0, 7.0, -7.0, 7.5, 6.0 },
    b = { 4.0, 3.0, -3.0, -3.0, 2.0, 3.0 },
    expected = { 3.0, 2.0, -2.0, -1.0, 1.5, 0.0 }
    )]
    fn remainder_takes_sign_of_divisor(a: f64, b: f64, expected: f64) {
        let actual = BinaryOperator::Remainder.evaluate(a, b).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let error = BinaryOperator::Divide.evaluate(10.0, 0.0).unwrap_err();
        assert_eq!(error, EvaluationError::DivisionByZero);
    }

    #[test]
    fn remainder_by_zero_is_rejected() {
        let error = BinaryOperator::Remainder.evaluate(10.0, 0.0).unwrap_err();
        assert_eq!(error, EvaluationError::ModulusByZero);
    }

    #[test]
    fn addition_with_zero_is_allowed() {
        assert_eq!(BinaryOperator::Add.evaluate(10.0, 0.0).unwrap(), 10.0);
    }
}
