use crate::interpreter::error::LexError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_number_character, Token};
use log::trace;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

type Cursor<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Splits the given infix expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens in the order they appear. Whitespace produces no tokens, so
/// blank input gives an empty vector.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::lexer::tokenize;
/// use postfix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("1 + .5")?;
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], Token::number(".5"));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut cursor: Cursor = expression.chars().enumerate().peekable();

    while let Some(&(position, character)) = cursor.peek() {
        if character.is_whitespace() {
            cursor.next();
            continue;
        }

        if is_number_character(character) {
            tokens.push(read_number(&mut cursor, position)?);
            continue;
        }

        let token = match character {
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => {
                    return Err(LexError::UnsupportedCharacter {
                        character,
                        position,
                    })
                }
            },
        };
        tokens.push(token);
        cursor.next();
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

/// Consumes the longest run of digits and decimal points starting at `start`.
fn read_number(cursor: &mut Cursor, start: usize) -> Result<Token, LexError> {
    let mut text = String::new();
    let mut decimal_points = 0;

    while let Some(&(_, character)) = cursor.peek() {
        if !is_number_character(character) {
            break;
        }
        if character == '.' {
            decimal_points += 1;
        }
        text.push(character);
        cursor.next();
    }

    if decimal_points > 1 || text == "." {
        return Err(LexError::MalformedNumber {
            text,
            position: start,
        });
    }
    Ok(Token::Number(text))
}
