pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `3 + 4 * (2 - 1)`.
///
/// returns: The value of the expression, or the first error any stage ran into.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluate;
///
/// let value = evaluate("3 + 4 * 2 / (1 - 5)");
/// assert_eq!(value, Ok(1.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    if expression.trim().is_empty() {
        debug!("rejected blank expression");
        return Err(EvaluationError::EmptyExpression);
    }

    let value = run_stages(expression);
    if let Err(error) = &value {
        debug!("could not evaluate {:?}: {}", expression, error);
    }
    value
}

fn run_stages(expression: &str) -> Result<f64, EvaluationError> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::to_postfix(tokens)?;
    Ok(evaluator::evaluate_postfix(postfix_tokens)?)
}

/// Converts the given infix expression into its postfix form, in text.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::to_postfix_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = to_postfix_string("2 - 3 - 4")?;
/// assert_eq!(postfix, "2 3 - 4 -");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix_string(expression: &str) -> Result<String> {
    let tokens = lexer::tokenize(expression).context("could not tokenize expression")?;
    let postfix_tokens =
        parser::to_postfix(tokens).context("could not convert expression to postfix")?;
    tokens_to_string(postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::tokens_to_string;
/// use postfix_calculator::interpreter::operator::BinaryOperator;
/// use postfix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::number("1"),
///     Token::number("2.5"),
///     Token::Operator(BinaryOperator::Multiply),
/// ];
/// let printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(printed_tokens, "1 2.5 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
