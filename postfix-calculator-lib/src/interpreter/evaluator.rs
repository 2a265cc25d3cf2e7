use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use log::trace;

/// Computes the value of a postfix expression with a stack machine.
///
/// # Arguments
///
/// * `postfix_tokens`: Numbers and operators in postfix order.
///
/// returns: The single value left on the stack once every token is consumed.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluator::evaluate_postfix;
/// use postfix_calculator::interpreter::token::Token;
///
/// let postfix_tokens: Vec<Token> = ["3", "4", "+"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate_postfix(postfix_tokens), Ok(7.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Number(text) => stack.push(parse_number(text)?),
            Token::Operator(operator) => {
                let (a, b) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    _ => return Err(EvalError::InsufficientOperands(operator)),
                };
                stack.push(operator.evaluate(a, b)?);
            }
            parenthesis => return Err(EvalError::UnexpectedToken(parenthesis)),
        }
    }

    match stack[..] {
        [result] => {
            trace!("evaluated to {}", result);
            Ok(result)
        }
        _ => Err(EvalError::MalformedExpression {
            remaining: stack.len(),
        }),
    }
}

fn parse_number(text: String) -> Result<f64, EvalError> {
    match text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(EvalError::InvalidNumber(text)),
    }
}
