//! Entry-at-a-time reading of a result file.
//!
//! Logging levels:
//! - **DEBUG**: Entries emitted, incomplete trailing entries discarded
//! - **WARN**: Malformed data lines that end decoding
//! - **TRACE**: Line classification

use std::io::{self, BufRead};

use resultforge_config::{DEFAULT_METADATA_MARKER, DEFAULT_SEPARATOR_MARKER};
use resultforge_core::{Entry, Population, ProblemSchema};
use tracing::{debug, trace, warn};

use crate::decode::VariableDecoder;
use crate::line::parse_solution;
use crate::properties::parse_properties;

/// Line prefixes that give a result file its structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Prefix of entry boundary lines.
    pub separator: String,
    /// Prefix of metadata lines.
    pub metadata: String,
}

impl Markers {
    pub fn new(separator: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            metadata: metadata.into(),
        }
    }

    /// Classifies a line. Separators win over metadata.
    ///
    /// Only an empty line is blank. A line of whitespace is data and fails
    /// to parse.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if line.starts_with(&self.separator) {
            LineKind::Separator
        } else if let Some(content) = line.strip_prefix(self.metadata.as_str()) {
            LineKind::Metadata(content)
        } else if line.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Data
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR_MARKER, DEFAULT_METADATA_MARKER)
    }
}

/// The role of one line in a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// An entry boundary.
    Separator,
    /// A metadata line, with the marker stripped.
    Metadata(&'a str),
    /// An empty line.
    Blank,
    /// A solution line.
    Data,
}

/// What one call to [`EntryReader::read_entry`] produced.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A complete entry closed by a separator line.
    Entry(Entry),
    /// No complete entry remains. An entry cut off by the end of input is
    /// discarded.
    Exhausted,
    /// A data line could not be decoded. The partial entry is discarded.
    Faulted,
}

/// Reads entries line by line from a buffered source.
///
/// The first line is read lazily on the first call to `read_entry`.
pub struct EntryReader<R> {
    source: R,
    bytes: Vec<u8>,
    line: Option<String>,
    primed: bool,
    line_number: usize,
    markers: Markers,
    schema: ProblemSchema,
    decoder: VariableDecoder,
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(
        source: R,
        schema: ProblemSchema,
        markers: Markers,
        decoder: VariableDecoder,
    ) -> Self {
        Self {
            source,
            bytes: Vec::new(),
            line: None,
            primed: false,
            line_number: 0,
            markers,
            schema,
            decoder,
        }
    }

    pub fn schema(&self) -> &ProblemSchema {
        &self.schema
    }

    /// Number of lines read from the source so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next entry.
    ///
    /// # Errors
    ///
    /// Returns error only if the source cannot be read. Malformed content is
    /// reported as [`ReadOutcome::Faulted`].
    pub fn read_entry(&mut self) -> io::Result<ReadOutcome> {
        if !self.primed {
            self.advance()?;
            self.primed = true;
        }

        // Skip boundary noise between entries.
        while let Some(line) = self.line.as_deref() {
            match self.markers.classify(line) {
                LineKind::Separator | LineKind::Blank => {}
                LineKind::Metadata(_) | LineKind::Data => break,
            }
            self.advance()?;
        }
        if self.line.is_none() {
            return Ok(ReadOutcome::Exhausted);
        }

        let first_line = self.line_number;
        let mut population = Population::new();
        let mut metadata = String::new();

        loop {
            let Some(line) = self.line.as_deref() else {
                debug!(
                    first_line,
                    solutions = population.len(),
                    "Discarding entry without closing separator"
                );
                return Ok(ReadOutcome::Exhausted);
            };

            let kind = self.markers.classify(line);
            trace!(line = self.line_number, ?kind, "Classified line");
            match kind {
                LineKind::Separator => break,
                LineKind::Metadata(content) => {
                    metadata.push_str(content);
                    metadata.push('\n');
                }
                LineKind::Blank => {}
                LineKind::Data => match parse_solution(line, &self.schema, &mut self.decoder) {
                    Ok(solution) => population.add(solution),
                    Err(err) => {
                        warn!(
                            line = self.line_number,
                            error = %err,
                            "Malformed data line, discarding entry and stopping"
                        );
                        return Ok(ReadOutcome::Faulted);
                    }
                },
            }
            self.advance()?;
        }

        let properties = parse_properties(&metadata);
        debug!(
            first_line,
            last_line = self.line_number,
            solutions = population.len(),
            properties = properties.len(),
            "Read entry"
        );
        Ok(ReadOutcome::Entry(Entry::new(population, properties)))
    }

    /// Moves to the next line, or to end of input.
    ///
    /// Bytes that are not valid UTF-8, such as a character torn by an
    /// interrupted writer, become U+FFFD and the line is parsed as usual.
    fn advance(&mut self) -> io::Result<()> {
        self.line = None;
        self.bytes.clear();
        if self.source.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(());
        }
        if self.bytes.ends_with(b"\n") {
            self.bytes.pop();
            if self.bytes.ends_with(b"\r") {
                self.bytes.pop();
            }
        }
        self.line_number += 1;
        self.line = Some(String::from_utf8_lossy(&self.bytes).into_owned());
        Ok(())
    }
}

#[cfg(test)]
#[path = "entry_reader_tests.rs"]
mod tests;
