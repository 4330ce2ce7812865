//! Interactive prompts for values not given on the command line.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Writes `message`, reads one line and parses it as `T`.
pub fn ask<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Unexpected end of input at prompt: {}", message.trim());
    }

    let value = line.trim();
    value
        .parse::<T>()
        .with_context(|| format!("Invalid number: '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use waypoint::harness::Density;

    #[test]
    fn test_ask_parses_value() {
        let mut input = Cursor::new("  12 \n");
        let mut output = Vec::new();

        let value: usize = ask(&mut input, &mut output, "Enter number of vertices: ").unwrap();
        assert_eq!(value, 12);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter number of vertices: ");
    }

    #[test]
    fn test_ask_reads_lines_in_order() {
        let mut input = Cursor::new("3\n150\n");
        let mut output = Vec::new();

        let vertices: usize = ask(&mut input, &mut output, "a: ").unwrap();
        let density: Density = ask(&mut input, &mut output, "b: ").unwrap();
        assert_eq!(vertices, 3);
        assert_eq!(density.percent(), 100);
    }

    #[test]
    fn test_ask_rejects_malformed_input() {
        let mut input = Cursor::new("ten\n");
        let mut output = Vec::new();

        let err = ask::<usize, _, _>(&mut input, &mut output, "n: ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number: 'ten'");
    }

    #[test]
    fn test_ask_fails_on_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(ask::<usize, _, _>(&mut input, &mut output, "n: ").is_err());
    }
}
