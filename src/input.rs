//! Operator input: run time parsing and interactive prompts for `submit`.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Parse a run time into whole seconds.
///
/// Accepts `M:SS` as read off a stopwatch (`9:12`), plain seconds (`552`),
/// or a humantime duration (`9m 12s`). Fractions of a second are dropped.
pub fn parse_run_time(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        bail!("Run time is empty");
    }

    if let Some((minutes, seconds)) = s.split_once(':') {
        let minutes: u32 = minutes
            .trim()
            .parse()
            .with_context(|| format!("Invalid minutes in run time '{}'", s))?;
        let seconds: u32 = seconds
            .trim()
            .parse()
            .with_context(|| format!("Invalid seconds in run time '{}'", s))?;
        if seconds >= 60 {
            bail!("Seconds must be below 60 in run time '{}'", s);
        }
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .with_context(|| format!("Run time '{}' is too long", s));
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        return s
            .parse()
            .with_context(|| format!("Run time '{}' is too long", s));
    }

    let duration = humantime::parse_duration(s)
        .with_context(|| format!("Invalid run time '{}'. Use M:SS, seconds, or e.g. 9m12s", s))?;
    u32::try_from(duration.as_secs()).with_context(|| format!("Run time '{}' is too long", s))
}

/// Format whole seconds as `M:SS`.
pub fn format_run_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Prompt user with a message and return their trimmed input.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        bail!("No input provided");
    }
    Ok(input.trim().to_string())
}

/// Prompt until `parse` accepts the input, echoing the parse error between attempts.
pub fn prompt_until<T, F>(message: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input = prompt(message)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

/// Parse a repetition count.
pub fn parse_count(s: &str) -> Result<u32> {
    s.trim()
        .parse()
        .with_context(|| format!("'{}' is not a non-negative whole number", s.trim()))
}
