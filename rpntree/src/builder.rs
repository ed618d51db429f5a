use lexers::{DelimTokenizer, Scanner};
use thiserror::Error;

use crate::expr::{Expr, Operator};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("unsupported operator: '{0}'")]
    UnsupportedOperator(String),
}

enum Token {
    Operator(String),
    Operand(String),
}

// A token is an operator only if the whole of it is a single op symbol,
// so signed literals like "-3" stay operands.
fn classify(token: String) -> Token {
    let is_op = {
        let mut scanner = Scanner::new(token.chars());
        scanner.scan_math_op().is_some() && scanner.next().is_none()
    };
    if is_op {
        Token::Operator(token)
    } else {
        Token::Operand(token)
    }
}

pub struct PostfixBuilder;

impl PostfixBuilder {
    /// Build a tree from whitespace separated postfix tokens, eg: `"4 3 2 - 1 + *"`
    pub fn build_str(input: &str) -> Result<Expr, BuildError> {
        Self::build(DelimTokenizer::whitespace(input))
    }

    pub fn build(tokens: impl Iterator<Item = String>) -> Result<Expr, BuildError> {
        let mut stack: Vec<Expr> = Vec::new();

        for token in tokens {
            match classify(token) {
                Token::Operator(symbol) => {
                    let op = Operator::from_symbol(&symbol)
                        .ok_or_else(|| BuildError::UnsupportedOperator(symbol.clone()))?;
                    // top of the stack is the right hand side
                    let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                        (Some(rhs), Some(lhs)) => (rhs, lhs),
                        _ => {
                            return Err(BuildError::MalformedExpression(format!(
                                "operator '{}' needs two operands",
                                symbol
                            )))
                        }
                    };
                    stack.push(op.apply(lhs, rhs));
                    debug!("Reduced '{}', stack depth {}", symbol, stack.len());
                }
                Token::Operand(literal) => {
                    let number = Expr::from_token(&literal)?;
                    debug!("Pushing {}", number);
                    stack.push(number);
                }
            }
        }

        let root = stack.pop();
        match (root, stack.len()) {
            (Some(root), 0) => Ok(root),
            (None, _) => Err(BuildError::MalformedExpression("empty expression".to_string())),
            (Some(_), n) => Err(BuildError::MalformedExpression(format!(
                "{} operands left without an operator",
                n + 1
            ))),
        }
    }
}
