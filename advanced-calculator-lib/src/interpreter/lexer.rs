use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits the given expression into number and operator tokens.
///
/// Characters that belong to neither (whitespace, letters, stray symbols) are skipped
/// without complaint, so an expression without any recognizable part yields no tokens.
/// Only ASCII digits `0`-`9` form numbers; digits from other scripts (e.g. `٣`) are skipped
/// like any other unrecognized character.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `10 + 5 * 3`.
///
/// returns: The tokens in the order they appear in the expression.
///
/// # Examples
///
/// ```
/// use advanced_calculator::interpreter::lexer::tokenize;
/// use advanced_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("2.5 * 4");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::Literal(2.5));
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.char_indices().peekable();

    while let Some((start, character)) = characters.next() {
        if let Some(operator) = BinaryOperator::from_symbol(character) {
            tokens.push(operator.token());
            continue;
        }

        let starts_number = character.is_ascii_digit()
            || (character == '.' && next_is_digit(&mut characters));
        if !starts_number {
            trace!("Skipping unrecognized character {:?}", character);
            continue;
        }

        let mut end = start + character.len_utf8();
        if character.is_ascii_digit() {
            end = consume_digits(&mut characters, end);
            if let Some(&(_, '.')) = characters.peek() {
                characters.next();
                end += 1;
            }
        }
        end = consume_digits(&mut characters, end);

        let text = &expression[start..end];
        match text.parse::<f64>() {
            Ok(value) => tokens.push(Token::Literal(value)),
            Err(error) => trace!("Skipping unparsable number {:?}: {}", text, error),
        }
    }

    tokens
}

fn next_is_digit(characters: &mut Peekable<CharIndices>) -> bool {
    matches!(characters.peek(), Some((_, next)) if next.is_ascii_digit())
}

/// Advances past a run of ASCII digits, returning the byte offset just after it.
fn consume_digits(characters: &mut Peekable<CharIndices>, mut end: usize) -> usize {
    while let Some(&(index, digit)) = characters.peek() {
        if !digit.is_ascii_digit() {
            break;
        }
        characters.next();
        end = index + 1;
    }
    end
}
