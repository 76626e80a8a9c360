//! Expression engine.
//!
//! Accumulates an arithmetic expression one input at a time and evaluates
//! it on demand. Evaluation only updates the result; the expression text is
//! left untouched, so later input keeps extending what the user typed rather
//! than the displayed result.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::parser;
use crate::error::CalcError;
use crate::events::Event;
use crate::format::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

fn is_operator(c: char) -> bool {
    Operator::from_symbol(c).is_some()
}

/// What a front end renders for the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcSnapshot {
    pub expression: String,
    pub result: String,
    pub error: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpressionEngine {
    expression: String,
    result: String,
    #[serde(default)]
    error: Option<CalcError>,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Last result string or error label; empty before the first evaluation.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn snapshot(&self) -> CalcSnapshot {
        CalcSnapshot {
            expression: self.expression.clone(),
            result: self.result.clone(),
            error: self.error.is_some(),
        }
    }

    /// Operand currently being typed: text after the last operator.
    fn current_segment(&self) -> &str {
        self.expression.rsplit(is_operator).next().unwrap_or("")
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn append_digit(&mut self, digit: char) {
        self.expression.push(digit);
    }

    /// Appends `.` unless the current operand already has one.
    pub fn append_decimal(&mut self) {
        if !self.current_segment().contains('.') {
            self.expression.push('.');
        }
    }

    /// Appends `op`, or replaces a trailing operator with it.
    pub fn append_operator(&mut self, op: Operator) {
        let symbol = op.symbol();
        if self.expression.is_empty() && op == Operator::Sub {
            self.expression.push(symbol);
        } else if !self.expression.ends_with(is_operator) {
            self.expression.push(symbol);
        } else {
            self.expression.pop();
            self.expression.push(symbol);
        }
    }

    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.result.clear();
        self.error = None;
    }

    /// Evaluate the expression, storing the rendered result or error label.
    pub fn evaluate(&mut self) -> Result<String, CalcError> {
        match Self::compute(&self.expression) {
            Ok(value) => {
                self.result = format_number(value);
                self.error = None;
                tracing::debug!(expression = %self.expression, result = %self.result, "evaluated");
                Ok(self.result.clone())
            }
            Err(err) => {
                self.result = err.label();
                self.error = Some(err);
                tracing::debug!(expression = %self.expression, error = %err, "evaluation failed");
                Err(err)
            }
        }
    }

    /// Evaluate and report the outcome as an [`Event`].
    pub fn evaluate_event(&mut self) -> Event {
        let expression = self.expression.clone();
        match self.evaluate() {
            Ok(result) => Event::ExpressionEvaluated {
                expression,
                result,
                at: Utc::now(),
            },
            Err(error) => Event::EvaluationFailed {
                expression,
                error,
                at: Utc::now(),
            },
        }
    }

    fn compute(expression: &str) -> Result<f64, CalcError> {
        // At most one trailing operator is dropped ("5+" -> "5").
        let trimmed = match expression.strip_suffix(is_operator) {
            Some(rest) => rest,
            None => expression,
        };

        let allowed = |c: char| c.is_ascii_digit() || c == '.' || is_operator(c);
        if !trimmed.chars().all(allowed) {
            return Err(CalcError::InvalidExpression);
        }

        let value = parser::evaluate(trimmed)?;
        if !value.is_finite() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(value)
    }
}
