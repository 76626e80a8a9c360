//! Input commands for the expression engine.

use serde::{Deserialize, Serialize};

use super::engine::{ExpressionEngine, Operator};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "lowercase")]
pub enum CalcCommand {
    Digit(char),
    Decimal,
    Operator(Operator),
    Clear,
    Backspace,
    Equals,
}

impl CalcCommand {
    /// Map a keyboard key name to a command.
    ///
    /// `,` counts as a decimal point when `comma_as_decimal` is set.
    pub fn from_key(key: &str, comma_as_decimal: bool) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(CalcCommand::Equals),
            "Backspace" => Some(CalcCommand::Backspace),
            "Escape" => Some(CalcCommand::Clear),
            "." => Some(CalcCommand::Decimal),
            "," if comma_as_decimal => Some(CalcCommand::Decimal),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_digit() {
                    Some(CalcCommand::Digit(c))
                } else {
                    Operator::from_symbol(c).map(CalcCommand::Operator)
                }
            }
        }
    }

    /// Map a button's action tag and label to a command.
    ///
    /// Digit buttons carry their digit in the label and operator buttons
    /// their symbol. Unknown actions and unusable labels yield `None`.
    pub fn from_button(action: &str, label: &str) -> Option<Self> {
        let label = label.trim();
        let single = || {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        };
        match action {
            "digit" => single().map(CalcCommand::Digit),
            "decimal" => Some(CalcCommand::Decimal),
            "operator" => single()
                .and_then(Operator::from_symbol)
                .map(CalcCommand::Operator),
            "clear" => Some(CalcCommand::Clear),
            "backspace" => Some(CalcCommand::Backspace),
            "equals" => Some(CalcCommand::Equals),
            _ => None,
        }
    }
}

impl ExpressionEngine {
    /// Apply one input command. Only `Equals` produces an event.
    pub fn apply(&mut self, command: CalcCommand) -> Option<Event> {
        match command {
            CalcCommand::Digit(d) => self.append_digit(d),
            CalcCommand::Decimal => self.append_decimal(),
            CalcCommand::Operator(op) => self.append_operator(op),
            CalcCommand::Clear => self.clear(),
            CalcCommand::Backspace => self.backspace(),
            CalcCommand::Equals => return Some(self.evaluate_event()),
        }
        None
    }

    /// Type `text` one key at a time; keys with no mapping are skipped.
    pub fn type_keys(&mut self, text: &str, comma_as_decimal: bool) -> Vec<Event> {
        let mut buf = [0u8; 4];
        text.chars()
            .filter_map(|c| CalcCommand::from_key(c.encode_utf8(&mut buf), comma_as_decimal))
            .filter_map(|cmd| self.apply(cmd))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        assert_eq!(CalcCommand::from_key("7", true), Some(CalcCommand::Digit('7')));
        assert_eq!(
            CalcCommand::from_key("*", true),
            Some(CalcCommand::Operator(Operator::Mul))
        );
        assert_eq!(CalcCommand::from_key(".", false), Some(CalcCommand::Decimal));
        assert_eq!(CalcCommand::from_key(",", true), Some(CalcCommand::Decimal));
        assert_eq!(CalcCommand::from_key(",", false), None);
        assert_eq!(CalcCommand::from_key("Enter", true), Some(CalcCommand::Equals));
        assert_eq!(CalcCommand::from_key("=", true), Some(CalcCommand::Equals));
        assert_eq!(CalcCommand::from_key("Escape", true), Some(CalcCommand::Clear));
        assert_eq!(CalcCommand::from_key("Backspace", true), Some(CalcCommand::Backspace));
        assert_eq!(CalcCommand::from_key("a", true), None);
        assert_eq!(CalcCommand::from_key("Shift", true), None);
        assert_eq!(CalcCommand::from_key("12", true), None);
    }

    #[test]
    fn button_mapping() {
        assert_eq!(
            CalcCommand::from_button("digit", " 4 "),
            Some(CalcCommand::Digit('4'))
        );
        assert_eq!(
            CalcCommand::from_button("operator", "/"),
            Some(CalcCommand::Operator(Operator::Div))
        );
        assert_eq!(CalcCommand::from_button("operator", "%"), None);
        assert_eq!(CalcCommand::from_button("equals", "="), Some(CalcCommand::Equals));
        assert_eq!(CalcCommand::from_button("memory", "M+"), None);
    }

    #[test]
    fn apply_drives_engine() {
        let mut engine = ExpressionEngine::new();
        for cmd in [
            CalcCommand::Digit('9'),
            CalcCommand::Operator(Operator::Div),
            CalcCommand::Digit('3'),
        ] {
            assert!(engine.apply(cmd).is_none());
        }
        let event = engine.apply(CalcCommand::Equals);
        assert!(
            matches!(event, Some(Event::ExpressionEvaluated { ref result, .. }) if result == "3")
        );

        engine.apply(CalcCommand::Clear);
        assert_eq!(engine.expression(), "");
    }

    #[test]
    fn type_keys_skips_unmapped_characters() {
        let mut engine = ExpressionEngine::new();
        let events = engine.type_keys("1,5 + 2=", true);
        assert_eq!(engine.expression(), "1.5+2");
        assert_eq!(events.len(), 1);
        assert_eq!(engine.result(), "3.5");
    }

    #[test]
    fn command_serializes_with_action_tag() {
        let json = serde_json::to_value(CalcCommand::Operator(Operator::Sub)).unwrap();
        assert_eq!(json["action"], "operator");
        assert_eq!(json["value"], "sub");
    }
}
