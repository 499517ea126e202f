use crate::errors::AnalyzerResult;
use std::io::{self, Write};

pub fn prompt_input(label: &str) -> AnalyzerResult<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Resolves a credential with config-file value first, then the
/// environment, then an interactive prompt. Returns an empty string when
/// the user skips the prompt; the caller decides whether that is fatal.
pub fn resolve_credential(configured: Option<String>, env_var: &str, label: &str) -> AnalyzerResult<String> {
    if let Some(value) = configured {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Ok(value);
        }
    }

    if let Ok(value) = std::env::var(env_var) {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Ok(value);
        }
    }

    prompt_input(label)
}
