use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use thiserror::Error;

/// Failures while splitting the input text into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unsupported character '{character}' at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },
}

/// Failures while reordering infix tokens into postfix order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unbalanced parentheses: {0}")]
    UnbalancedParentheses(&'static str),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
}

/// Failures while running the postfix stack machine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("not enough operands for operator '{0}'")]
    InsufficientOperands(BinaryOperator),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unexpected token '{0}' in postfix expression")]
    UnexpectedToken(Token),
    #[error("malformed expression: {remaining} values left on the stack, expected 1")]
    MalformedExpression { remaining: usize },
}

/// Any failure of [`evaluate`](crate::interpreter::evaluate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("empty expression")]
    EmptyExpression,
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub(crate) const MISSING_OPENING_PARENTHESIS: &str = "missing opening parenthesis";
pub(crate) const UNBALANCED_PARENTHESES: &str = "unbalanced parentheses in expression";
