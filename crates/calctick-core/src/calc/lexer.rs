//! Tokenizer for calculator expressions.
//!
//! Accepts decimal literals and the four binary operators. Literal rules
//! follow strict-mode numeric literals: `5.` and `.5` are fine, a bare `.`
//! is not, and a leading zero may not be followed by another digit.

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let token = match bytes[pos] {
            b'+' | b'-' => {
                // `++` and `--` are increment/decrement, never valid here.
                if bytes.get(pos + 1) == Some(&bytes[pos]) {
                    return Err(CalcError::InvalidSyntax);
                }
                if bytes[pos] == b'+' {
                    Token::Plus
                } else {
                    Token::Minus
                }
            }
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'0'..=b'9' | b'.' => {
                let (value, len) = lex_number(&input[pos..])?;
                tokens.push(Token::Number(value));
                pos += len;
                continue;
            }
            _ => return Err(CalcError::InvalidSyntax),
        };
        tokens.push(token);
        pos += 1;
    }

    Ok(tokens)
}

/// Lex one literal from the start of `src`, returning its value and length.
fn lex_number(src: &str) -> Result<(f64, usize), CalcError> {
    let bytes = src.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut len = int_len;
    let mut frac_len = 0;

    if bytes.get(len) == Some(&b'.') {
        len += 1;
        frac_len = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
        len += frac_len;
    }

    if int_len == 0 && frac_len == 0 {
        return Err(CalcError::InvalidSyntax);
    }
    if int_len > 1 && bytes[0] == b'0' {
        return Err(CalcError::InvalidSyntax);
    }

    let literal = &src[..len];
    let value = literal
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidSyntax)?;
    Ok((value, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_operators_and_numbers() {
        let tokens = tokenize("12.5+3*-4/2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::Plus,
                Token::Number(3.0),
                Token::Star,
                Token::Minus,
                Token::Number(4.0),
                Token::Slash,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn trailing_and_leading_decimal_point() {
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
    }

    #[test]
    fn bare_decimal_point_is_rejected() {
        assert_eq!(tokenize("."), Err(CalcError::InvalidSyntax));
        assert_eq!(tokenize("1+."), Err(CalcError::InvalidSyntax));
    }

    #[test]
    fn second_decimal_point_starts_new_literal() {
        // Parser rejects the adjacent literals; the lexer just splits them.
        assert_eq!(
            tokenize("1.2.3").unwrap(),
            vec![Token::Number(1.2), Token::Number(0.3)]
        );
    }

    #[test]
    fn leading_zero_literals() {
        assert_eq!(tokenize("0").unwrap(), vec![Token::Number(0.0)]);
        assert_eq!(tokenize("0.25").unwrap(), vec![Token::Number(0.25)]);
        assert_eq!(tokenize("05"), Err(CalcError::InvalidSyntax));
        assert_eq!(tokenize("1+007.5"), Err(CalcError::InvalidSyntax));
    }

    #[test]
    fn doubled_sign_is_rejected() {
        assert_eq!(tokenize("5--3"), Err(CalcError::InvalidSyntax));
        assert_eq!(tokenize("5++3"), Err(CalcError::InvalidSyntax));
        assert!(tokenize("5+-3").is_ok());
        assert!(tokenize("5-+3").is_ok());
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(tokenize("2x3"), Err(CalcError::InvalidSyntax));
    }
}
