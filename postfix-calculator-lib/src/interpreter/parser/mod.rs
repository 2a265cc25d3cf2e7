mod infix_converter;

use crate::interpreter::error::SyntaxError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::trace;

/// Reorders the given infix tokens into postfix (reverse Polish) order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format.
///
/// returns: The same numbers and operators in postfix order, with all parentheses removed.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use postfix_calculator::interpreter::lexer::tokenize;
/// use postfix_calculator::interpreter::parser::to_postfix;
/// use postfix_calculator::interpreter::tokens_to_string;
///
/// let infix_tokens = tokenize("(1 + 2) * 3")?;
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(tokens_to_string(postfix_tokens)?, "1 2 + 3 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("postfix order: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
