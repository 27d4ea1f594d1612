use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Reads one trimmed line, or `None` once the input is exhausted.
pub fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Shows the prompt and reads a line of input.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush().context("Failed to flush output")?;
    read_line(input)
}

/// Asks until a valid number is entered.
pub fn read_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<f64>> {
    while let Some(line) = ask(input, output, prompt)? {
        match line.parse::<f64>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => writeln!(output, "  Invalid input! Please enter a valid number.")?,
        }
    }
    Ok(None)
}

/// Asks until at least one valid number is entered, separated by whitespace.
pub fn read_numbers(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<Vec<f64>>> {
    while let Some(line) = ask(input, output, "  Enter numbers separated by spaces: ")? {
        let parsed = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>();
        match parsed {
            Ok(numbers) if numbers.is_empty() => {
                writeln!(output, "  Please enter at least one number.")?
            }
            Ok(numbers) => return Ok(Some(numbers)),
            Err(_) => writeln!(
                output,
                "  Invalid input! Please enter valid numbers separated by spaces."
            )?,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn invalid_number_is_asked_for_again() {
        let mut input = Cursor::new("twelve\n12.5\n");
        let mut output = Vec::new();

        let number = read_number(&mut input, &mut output, "> ").unwrap();

        assert_eq!(number, Some(12.5));
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(
            printed,
            ">   Invalid input! Please enter a valid number.\n> "
        );
    }

    #[test]
    fn exhausted_input_yields_no_number() {
        let mut input = Cursor::new("oops\n");
        let mut output = Vec::new();

        assert_eq!(read_number(&mut input, &mut output, "> ").unwrap(), None);
    }

    #[test]
    fn numbers_are_read_until_list_is_valid() {
        let mut input = Cursor::new("\n1 two 3\n  1 -2.5   3 \n");
        let mut output = Vec::new();

        let numbers = read_numbers(&mut input, &mut output).unwrap();

        assert_eq!(numbers, Some(vec![1.0, -2.5, 3.0]));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Please enter at least one number."));
        assert!(printed.contains("Please enter valid numbers separated by spaces."));
    }
}
