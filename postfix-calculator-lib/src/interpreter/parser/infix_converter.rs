use crate::interpreter::error::{SyntaxError, MISSING_OPENING_PARENTHESIS, UNBALANCED_PARENTHESES};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    while let Some(operator) = operators.pop() {
        if operator.is_parenthesis() {
            return Err(SyntaxError::UnbalancedParentheses(UNBALANCED_PARENTHESES));
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop() {
            None => {
                return Err(SyntaxError::UnbalancedParentheses(
                    MISSING_OPENING_PARENTHESIS,
                ));
            }
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(Token::Operator(other_operator)) = operators.last() {
        if !other_operator.pops_before(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(Token::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens_of(texts: &[&str]) -> Vec<Token> {
        texts.iter().map(|text| text.parse().unwrap()).collect()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = tokens_of(&["1", "+", "2"]);
        let postfix = tokens_of(&["1", "2", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = tokens_of(&["1", "-", "(", "2", "+", "3", ")"]);
        let postfix = tokens_of(&["1", "2", "3", "+", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 3 + 4 * 2 / (1 - 5)
        let infix = tokens_of(&["3", "+", "4", "*", "2", "/", "(", "1", "-", "5", ")"]);
        let postfix = tokens_of(&["3", "4", "2", "*", "1", "5", "-", "/", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = tokens_of(&["1", "+", "2", "*", "3", "-", "4"]);
        let postfix = tokens_of(&["1", "2", "3", "*", "+", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_left_associative_subtraction() {
        // 2 - 3 - 4
        let infix = tokens_of(&["2", "-", "3", "-", "4"]);
        let postfix = tokens_of(&["2", "3", "-", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_left_associative_division() {
        // 8 / 4 * 2
        let infix = tokens_of(&["8", "/", "4", "*", "2"]);
        let postfix = tokens_of(&["8", "4", "/", "2", "*"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // (1 + (2 * 3)) - 4
        let infix = tokens_of(&["(", "1", "+", "(", "2", "*", "3", ")", ")", "-", "4"]);
        let postfix = tokens_of(&["1", "2", "3", "*", "+", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_empty_input_gives_empty_output() {
        let actual = infix_to_postfix(vec![]).unwrap();

        assert_eq!(actual, Vec::<Token>::new())
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = tokens_of(&["(", "1", "+", "2"]);

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(
            error,
            SyntaxError::UnbalancedParentheses(UNBALANCED_PARENTHESES)
        )
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // 1 + 2)
        let infix = tokens_of(&["1", "+", "2", ")"]);

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(
            error,
            SyntaxError::UnbalancedParentheses(MISSING_OPENING_PARENTHESIS)
        )
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = tokens_of(&["(", "1", "+", "2", ")", ")"]);

        infix_to_postfix(infix).expect_err("Should return Err");
    }
}
