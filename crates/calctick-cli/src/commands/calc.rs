use std::io::{BufRead, Write};

use calctick_core::error::{CoreError, Result};
use calctick_core::{CalcCommand, Config, ExpressionEngine};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CalcAction {
    /// Type an expression key by key, then press Enter
    Eval {
        /// Expression, e.g. "2+3*4" or "-5+3"
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Print the full display snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply named key presses in order (e.g. 7 + 2 Backspace 3 Enter)
    Keys {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Read lines from stdin, typing each onto the expression and evaluating
    Repl,
}

pub fn run(action: CalcAction) -> Result<()> {
    let config = Config::load_or_default();
    let comma = config.calculator.comma_as_decimal;
    let mut engine = ExpressionEngine::new();

    match action {
        CalcAction::Eval { expression, json } => {
            engine.type_keys(&expression, comma);
            let outcome = engine.evaluate();
            if json {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            } else if let Ok(result) = &outcome {
                println!("{result}");
            }
            outcome?;
        }
        CalcAction::Keys { keys } => {
            for key in &keys {
                let command = CalcCommand::from_key(key, comma)
                    .ok_or_else(|| CoreError::Custom(format!("unknown key: {key}")))?;
                if let Some(event) = engine.apply(command) {
                    tracing::info!(?event, "calculator event");
                }
            }
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        CalcAction::Repl => repl(&mut engine, comma)?,
    }
    Ok(())
}

/// `clear` resets the calculator; any other line is typed onto the current
/// expression and evaluated, so results can be chained.
fn repl(engine: &mut ExpressionEngine, comma: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("clear") {
            engine.clear();
            writeln!(stdout, "cleared")?;
            continue;
        }

        engine.type_keys(line, comma);
        // Errors are shown in the result area; the session keeps going.
        let _ = engine.evaluate();
        writeln!(stdout, "{} = {}", engine.expression(), engine.result())?;
    }
    Ok(())
}
