pub mod encrypt;
pub mod score;
pub mod solve;

use cipherforge::error::CfResult;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

/// Resolves the input text: `--text` wins, then `--input <file>`, then
/// stdin (with a prompt when stdin is a terminal).
pub fn read_text(text: Option<&str>, input: Option<&Path>, prompt: &str) -> CfResult<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }
    if let Some(path) = input {
        let content = fs::read_to_string(path)?;
        return Ok(content.trim_end_matches(['\r', '\n']).to_string());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("{}: ", prompt);
        io::stderr().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    } else {
        let mut content = String::new();
        stdin.lock().read_to_string(&mut content)?;
        Ok(content.trim_end_matches(['\r', '\n']).to_string())
    }
}
