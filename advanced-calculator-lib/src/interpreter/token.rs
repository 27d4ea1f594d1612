use crate::format::format_for_display;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Literal(f64),
    Operator(BinaryOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{}", format_for_display(*value)),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_print_as_written() {
        assert_eq!(Token::Literal(2.5).to_string(), "2.5");
        assert_eq!(Token::Literal(10.0).to_string(), "10");
        assert_eq!(Token::Operator(BinaryOperator::Multiply).to_string(), "*");
    }
}
