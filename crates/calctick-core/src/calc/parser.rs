//! Recursive-descent evaluator over calculator tokens.
//!
//! Grammar, lowest precedence first. All binary operators are
//! left-associative.
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-') unary | NUMBER
//! ```
//!
//! Arithmetic is IEEE-754 `f64`; division by zero yields an infinity and is
//! left for the caller to classify.

use super::lexer::{tokenize, Token};
use crate::error::CalcError;

/// Tokenize and evaluate `input`. An empty input evaluates to `0`.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Ok(0.0);
    }

    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(CalcError::InvalidSyntax);
    }
    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == Token::Plus { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            acc = if op == Token::Star { acc * rhs } else { acc / rhs };
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.bump() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Minus) => Ok(-self.unary()?),
            Some(Token::Plus) => self.unary(),
            _ => Err(CalcError::InvalidSyntax),
        }
    }
}
