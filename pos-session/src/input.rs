//! Prompt/retry combinators. Validation is not an error path: a bad
//! entry re-prompts until the parser accepts, and only end-of-input
//! breaks out of a prompt.

use std::io::{BufRead, Write};

use pos_core::money::{format_php, parse_php};

use crate::SessionError;

pub const RETRY_INPUT: &str = "Invalid input. Try again: ";
pub const RETRY_CHOICE: &str = "Invalid choice. Try again: ";

/// Write `prompt`, then read lines until `parse` accepts one,
/// re-prompting with `retry` after each rejection.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry: &str,
    parse: F,
) -> Result<T, SessionError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        output.write_all(retry.as_bytes())?;
        output.flush()?;
    }
}

/// Any integer; the menu prompt treats 0 as the stop sentinel
pub fn parse_i64(s: &str) -> Option<i64> {
    s.parse().ok()
}

/// Strictly positive integer (quantities)
pub fn parse_positive(s: &str) -> Option<i64> {
    s.parse().ok().filter(|v| *v > 0)
}

/// Integer restricted to `min..=max`. Non-numeric entries and
/// out-of-range numbers re-prompt with different messages.
pub fn prompt_choice<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: i64,
    max: i64,
) -> Result<i64, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut value = prompt_until(input, output, prompt, RETRY_INPUT, parse_i64)?;
    while !(min..=max).contains(&value) {
        value = prompt_until(input, output, RETRY_CHOICE, RETRY_INPUT, parse_i64)?;
    }
    Ok(value)
}

/// Peso amount of at least `min` centavos (cash tender)
pub fn prompt_cash<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: i64,
) -> Result<i64, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut value = prompt_until(input, output, prompt, RETRY_INPUT, parse_php)?;
    while value < min {
        let retry = format!("Enter at least PHP {}: ", format_php(min));
        value = prompt_until(input, output, &retry, RETRY_INPUT, parse_php)?;
    }
    Ok(value)
}
