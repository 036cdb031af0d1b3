//! PLA (Programmable Logic Array) format support
//!
//! This module handles the line-oriented sum-of-products exchange format
//! consumed and produced by the minimizer:
//!
//! ```text
//! .i 2
//! .o 1
//! .p 3
//! 00 |1
//! 01 |1
//! 11 |1
//! .e
//! ```
//!
//! `.i` declares the input count (and with it the term width), `.o` the
//! output count, `.p` the declared number of term lines (advisory only),
//! and `.e` ends the table. Term lines carry the input pattern before the
//! `|` separator; only that pattern is consumed as a minterm or implicant
//! seed. Blank lines, `#` comments, unknown dot-directives and lines
//! without a `|` are skipped.
//!
//! The writer emits the same four header/footer sections, with one bare
//! input pattern per term and the actual term count in `.p`.

mod error;

pub use error::{PLAError, PLAReadError, PLAWriteError};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::cover::{Cover, Term};

/// Types that can be parsed from PLA format data
///
/// The core deserialization method is `from_pla_reader`; the string and
/// file variants delegate to it.
pub trait PLAReader: Sized {
    /// Parse from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns [`PLAReadError`] on IO failure or malformed input.
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, PLAReader};
    ///
    /// let pla = ".i 2\n.o 1\n.p 1\n01 |1\n.e\n";
    /// let cover = Cover::from_pla_string(pla).unwrap();
    /// assert_eq!(cover.num_inputs(), 2);
    /// assert_eq!(cover.num_terms(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PLAReadError`] on malformed input.
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(s.as_bytes())
    }

    /// Load from a PLA format file
    ///
    /// # Errors
    ///
    /// Returns [`PLAReadError`] on IO failure or malformed input.
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

/// Types that can be serialized to PLA format
pub trait PLAWriter {
    /// Write PLA format to any writer
    ///
    /// # Errors
    ///
    /// Returns [`PLAWriteError`] on IO failure.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Serialize to a PLA format string
    ///
    /// # Errors
    ///
    /// Returns [`PLAWriteError`] on IO failure.
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        // PLA format is ASCII, so this conversion is safe
        Ok(String::from_utf8(buffer).unwrap())
    }

    /// Write to a PLA file
    ///
    /// # Errors
    ///
    /// Returns [`PLAWriteError`] on IO failure.
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn parse_directive_value<F>(value: Option<&str>, err: F) -> Result<usize, PLAError>
where
    F: FnOnce(Arc<str>) -> PLAError,
{
    let raw = value.unwrap_or("");
    raw.parse().map_err(|_| err(Arc::from(raw)))
}

impl PLAReader for Cover {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut num_outputs: Option<usize> = None;
        let mut terms: Vec<Term> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let mut parts = line.split_whitespace();
                match parts.next() {
                    Some(".i") => {
                        num_inputs = Some(parse_directive_value(parts.next(), |value| {
                            PLAError::InvalidInputDirective { value }
                        })?);
                    }
                    Some(".o") => {
                        num_outputs = Some(parse_directive_value(parts.next(), |value| {
                            PLAError::InvalidOutputDirective { value }
                        })?);
                    }
                    Some(".p") => {
                        // Advisory; validated but not used
                        parse_directive_value(parts.next(), |value| {
                            PLAError::InvalidTermCountDirective { value }
                        })?;
                    }
                    Some(".e") => break,
                    _ => {}
                }
                continue;
            }

            // Term lines carry a '|' separator; anything else is noise
            if let Some((pattern, _outputs)) = line.split_once('|') {
                let expected = num_inputs.ok_or(PLAError::MissingInputDirective)?;
                let term: Term = pattern.trim().parse()?;
                if term.len() != expected {
                    return Err(PLAError::TermWidthMismatch {
                        line: index + 1,
                        expected,
                        actual: term.len(),
                    }
                    .into());
                }
                terms.push(term);
            }
        }

        let num_inputs = num_inputs.ok_or(PLAError::MissingInputDirective)?;
        let num_outputs = num_outputs.ok_or(PLAError::MissingOutputDirective)?;
        Ok(Cover::from_parts(num_inputs, num_outputs, terms))
    }
}

impl PLAWriter for Cover {
    /// Emits `.i`, `.o`, `.p <term count>`, one input pattern per line
    /// with no output field, and a trailing `.e`.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        writeln!(writer, ".i {}", self.num_inputs())?;
        writeln!(writer, ".o {}", self.num_outputs())?;
        writeln!(writer, ".p {}", self.num_terms())?;
        for term in self.terms() {
            writeln!(writer, "{}", term)?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}
