use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A numeric literal, kept as written in the source.
    Number(String),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    pub fn number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParenthesis | Token::RightParenthesis)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Reads a single token from its textual form, e.g. `"+"` or `"12.5"`.
///
/// Number text is only checked for its character class here; whether it is a
/// valid numeral is decided when it gets evaluated.
impl str::FromStr for Token {
    type Err = SyntaxError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some('('), None) => return Ok(Token::LeftParenthesis),
            (Some(')'), None) => return Ok(Token::RightParenthesis),
            (Some(symbol), None) => {
                if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                    return Ok(Token::Operator(operator));
                }
            }
            _ => {}
        }

        if !input.is_empty() && input.chars().all(is_number_character) {
            Ok(Token::number(input))
        } else {
            Err(SyntaxError::UnexpectedToken(input.to_string()))
        }
    }
}

pub(crate) fn is_number_character(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
