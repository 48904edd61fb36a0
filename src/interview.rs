//! An interactive interview that builds an observation `Assignment` one feature at a time.

use crate::glossary::Glossary;
use crate::util::Result;
use crate::variable::Assignment;

use itertools::Itertools;
use tracing::debug;

use std::io::{BufRead, Write};


/// Interview the user over `input` and `output`, accepting only features and codes known to
/// `glossary`.
///
/// Each round lists the features and the observations so far, then asks for a feature and one of
/// its codes. An unknown code is asked for again. A blank feature line or the end of `input` ends
/// the interview.
pub fn interview<R: BufRead, W: Write>(glossary: &Glossary, input: &mut R, output: &mut W) -> Result<Assignment> {
    let mut observations = Assignment::new();

    loop {
        writeln!(output)?;
        writeln!(output, "Features: {}", glossary.features().collect::<Vec<_>>().join(", "))?;
        writeln!(output, "Observations: {}", describe(glossary, &observations))?;
        write!(output, "Enter a feature (blank to finish): ")?;
        output.flush()?;

        let feature = match read_line(input)? {
            Some(line) if ! line.is_empty() => line,
            _ => break
        };

        let values = match glossary.values(&feature) {
            Some(values) => values,
            None => {
                writeln!(output, "Unrecognized feature: {}. Try again.", feature)?;
                continue;
            }
        };

        let choices: Vec<String> = values.iter().map(|(l, c)| format!("{}={}", l, c)).collect();
        writeln!(output, "Values of {}: {}", feature, choices.join(", "))?;

        let code = loop {
            write!(output, "Enter a value: ")?;
            output.flush()?;

            match read_line(input)? {
                Some(code) if glossary.is_valid_code(&feature, &code) => break Some(code),
                Some(code) => writeln!(output, "Unrecognized value: {}. Try again.", code)?,
                None => break None
            }
        };

        match code {
            Some(code) => {
                debug!(feature = %feature, code = %code, "observed");
                observations.set(&feature, &code);
            }
            None => break
        }
    }

    Ok(observations)
}


/// The observations as ```feature: label``` pairs
fn describe(glossary: &Glossary, observations: &Assignment) -> String {
    let pairs = observations.iter()
                            .map(|(f, c)| format!("{}: {}", f, glossary.label(f, c).unwrap_or(c)))
                            .join(", ");
    format!("{{{}}}", pairs)
}


/// Read one trimmed line, or `None` at the end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from(line.trim())))
}
