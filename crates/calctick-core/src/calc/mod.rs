mod command;
mod engine;
mod lexer;
mod parser;

pub use command::CalcCommand;
pub use engine::{CalcSnapshot, ExpressionEngine, Operator};
