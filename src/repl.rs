use anyhow::Error;
use std::io::BufRead;
use std::io::Write;
use tracing::debug;
use tracing::info;

use crate::converter;
use crate::converter::ConversionRequest;
use crate::error::ConversionError;
use crate::rates::RateTable;

const PROMPT_REQUEST: &str = "Enter conversion (e.g. 25 miles to kilometers): ";
const PROMPT_CONTINUE: &str = "Convert another? (yes/no): ";
const ANSWER_CONTINUE: &str = "yes";
const MESSAGE_FAREWELL: &str = "Goodbye!";

/// The states of the interactive loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Prompting,
    Terminated,
}

/// Runs the interactive loop until the user declines to continue or the input
/// ends.
///
/// Conversion failures are reported on the output and never end the loop. Only
/// failures to read the input or write the output are returned.
pub fn run(table: &RateTable, mut input: impl BufRead, mut output: impl Write)
-> Result<(), Error> {
    let mut state = State::Prompting;

    while state == State::Prompting {
        let line = match prompt(&mut input, &mut output, PROMPT_REQUEST)? {
            Some(line) => line,
            None => {
                // Leave the prompt on its own line.
                writeln!(output)?;
                break;
            }
        };

        match perform(table, &line) {
            Ok((request, result)) => {
                // Debug formatting always shows a decimal point.
                writeln!(output, "{:?} {} is {}", request.magnitude, request.unit_source, result)?;
            }
            Err(error) => {
                debug!(%error, "conversion failed");
                writeln!(output, "Error: {}", error)?;
            }
        }

        let answer = prompt(&mut input, &mut output, PROMPT_CONTINUE)?
        .unwrap_or_default();

        if answer.trim().to_lowercase() != ANSWER_CONTINUE {
            state = State::Terminated;
        }
    }

    info!("terminating");

    writeln!(output, "{}", MESSAGE_FAREWELL)?;
    output.flush()?;

    Ok(())
}

/// Parses and converts a single request line.
fn perform(table: &RateTable, line: &str)
-> Result<(ConversionRequest, converter::ConversionResult), ConversionError> {
    let request = line.parse::<ConversionRequest>()?;

    debug!(?request, "parsed request");

    let result = converter::convert(table, &request)?;

    Ok((request, result))
}

/// Writes a prompt and reads a line in response, returning `None` once the
/// input has ended.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str)
-> Result<Option<String>, Error> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}
