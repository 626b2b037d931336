//! Pull-based iteration over the entries of a result file.
//!
//! The reader recovers from incomplete or malformed files: unless an I/O
//! error occurs, it yields every complete entry up to the first broken one
//! and then reports that no entries remain. A writer can therefore resume
//! appending after the last entry this reader returns.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use resultforge_core::{ProblemSchema, VariableSpec};
//! use resultforge_reader::ResultFileReader;
//!
//! let schema = ProblemSchema::new(1)
//!     .with_variable(VariableSpec::real(0.0, 10.0))
//!     .with_variable(VariableSpec::real(0.0, 10.0));
//! let text = "#\n1.0 2.0 5.0\n//NFE=100\n#\n3.0 4.0 6.0\n";
//!
//! let mut reader = ResultFileReader::new(schema, Cursor::new(text)).unwrap();
//! assert!(reader.has_next().unwrap());
//!
//! let entry = reader.next_entry().unwrap();
//! assert_eq!(entry.population().len(), 1);
//! assert_eq!(entry.property("NFE"), Some("100"));
//!
//! // the second entry was never closed by a separator
//! assert!(!reader.has_next().unwrap());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use resultforge_config::ReaderConfig;
use resultforge_core::{Entry, ProblemSchema};
use tracing::{debug, info, warn};

use crate::decode::{AdvisorySink, PayloadDeserializer, VariableDecoder};
use crate::entry_reader::{EntryReader, Markers, ReadOutcome};
use crate::error::{ReaderError, Result};

/// Where the reader stands in its single pass over the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    Reading,
    Exhausted,
    Faulted,
}

/// Builder for [`ResultFileReader`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use resultforge_core::ProblemSchema;
/// use resultforge_reader::ReaderBuilder;
///
/// let reader = ReaderBuilder::new(ProblemSchema::new(2))
///     .with_separator_marker("%")
///     .build(Cursor::new("%\n1.0 2.0\n%\n"))
///     .unwrap();
///
/// assert_eq!(reader.count(), 1);
/// ```
pub struct ReaderBuilder {
    config: ReaderConfig,
    decoder: VariableDecoder,
}

impl ReaderBuilder {
    /// Creates a builder with default markers for the given schema.
    pub fn new(schema: ProblemSchema) -> Self {
        Self::from_config(ReaderConfig::new(schema))
    }

    /// Creates a builder from a loaded configuration.
    pub fn from_config(config: ReaderConfig) -> Self {
        Self {
            config,
            decoder: VariableDecoder::new(),
        }
    }

    pub fn with_separator_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.separator_marker = marker.into();
        self
    }

    pub fn with_metadata_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.metadata_marker = marker.into();
        self
    }

    /// Sets the deserializer for opaque variable payloads.
    pub fn with_payload_deserializer(
        mut self,
        deserializer: impl PayloadDeserializer + 'static,
    ) -> Self {
        self.decoder = self.decoder.with_deserializer(deserializer);
        self
    }

    /// Sets the sink that receives decoder advisories.
    pub fn with_advisory_sink(mut self, sink: impl AdvisorySink + 'static) -> Self {
        self.decoder = self.decoder.with_advisory_sink(sink);
        self
    }

    /// Builds a reader over an already opened stream.
    ///
    /// # Errors
    ///
    /// Returns error if the markers or schema are invalid.
    pub fn build<R: BufRead>(self, source: R) -> Result<ResultFileReader<R>> {
        self.config.validate()?;
        let ReaderConfig {
            separator_marker,
            metadata_marker,
            schema,
        } = self.config;
        let markers = Markers::new(separator_marker, metadata_marker);
        Ok(ResultFileReader::from_entries(EntryReader::new(
            source,
            schema,
            markers,
            self.decoder,
        )))
    }

    /// Opens a result file and builds a reader over it.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the file cannot be opened.
    pub fn open(self, path: impl AsRef<Path>) -> Result<ResultFileReader<BufReader<File>>> {
        self.config.validate()?;
        let path = path.as_ref();
        info!("Reading result file {}", path.display());
        let file = File::open(path)?;
        self.build(BufReader::new(file))
    }
}

/// Reads the entries of a result file one at a time.
///
/// The reader owns its stream and releases it on [`close`](Self::close) or
/// when dropped. One entry is read ahead so [`has_next`](Self::has_next)
/// can be called repeatedly without advancing the stream.
///
/// Once a malformed line or the end of input is reached, the reader reports
/// no further entries for the rest of its life. I/O failures are returned as
/// errors and also end iteration.
///
/// A reader is not meant to be shared between threads; callers serialize
/// access themselves.
pub struct ResultFileReader<R = BufReader<File>> {
    entries: Option<EntryReader<R>>,
    next_entry: Option<Entry>,
    state: ReaderState,
    entries_read: usize,
    closed_reported: bool,
}

impl ResultFileReader<BufReader<File>> {
    /// Opens a result file with default markers.
    ///
    /// # Errors
    ///
    /// Returns error if the schema is invalid or the file cannot be opened.
    pub fn open(schema: ProblemSchema, path: impl AsRef<Path>) -> Result<Self> {
        ReaderBuilder::new(schema).open(path)
    }

    /// Opens a result file using a loaded configuration.
    pub fn open_with_config(config: ReaderConfig, path: impl AsRef<Path>) -> Result<Self> {
        ReaderBuilder::from_config(config).open(path)
    }
}

impl<R: BufRead> ResultFileReader<R> {
    /// Creates a reader over an already opened stream with default markers.
    pub fn new(schema: ProblemSchema, source: R) -> Result<Self> {
        ReaderBuilder::new(schema).build(source)
    }

    fn from_entries(entries: EntryReader<R>) -> Self {
        Self {
            entries: Some(entries),
            next_entry: None,
            state: ReaderState::Reading,
            entries_read: 0,
            closed_reported: false,
        }
    }

    /// Returns true if another complete entry is available.
    ///
    /// Reads ahead at most one entry; repeated calls return the same answer
    /// without touching the stream.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Closed`] after [`close`](Self::close), or
    /// [`ReaderError::Io`] if the stream cannot be read.
    pub fn has_next(&mut self) -> Result<bool> {
        let Some(entries) = self.entries.as_mut() else {
            return Err(ReaderError::Closed);
        };
        if self.next_entry.is_some() {
            return Ok(true);
        }
        if self.state != ReaderState::Reading {
            return Ok(false);
        }

        match entries.read_entry() {
            Ok(ReadOutcome::Entry(entry)) => {
                self.next_entry = Some(entry);
                Ok(true)
            }
            Ok(ReadOutcome::Exhausted) => {
                debug!(entries = self.entries_read, "No more complete entries");
                self.state = ReaderState::Exhausted;
                Ok(false)
            }
            Ok(ReadOutcome::Faulted) => {
                self.state = ReaderState::Faulted;
                Ok(false)
            }
            Err(err) => {
                warn!(
                    line = entries.line_number(),
                    error = %err,
                    "Failed to read result file"
                );
                self.state = ReaderState::Faulted;
                Err(err.into())
            }
        }
    }

    /// Returns the next entry.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::NoSuchEntry`] if no entry remains, plus any
    /// error from [`has_next`](Self::has_next).
    pub fn next_entry(&mut self) -> Result<Entry> {
        if !self.has_next()? {
            return Err(ReaderError::NoSuchEntry);
        }
        let entry = self.next_entry.take().ok_or(ReaderError::NoSuchEntry)?;
        self.entries_read += 1;
        Ok(entry)
    }

    /// Releases the stream. Later calls to `has_next` and `next_entry` fail
    /// with [`ReaderError::Closed`]. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.entries.take().is_some() {
            debug!(entries = self.entries_read, "Closed result file reader");
        }
        self.next_entry = None;
    }

    pub fn is_closed(&self) -> bool {
        self.entries.is_none()
    }

    /// Returns true if reading stopped at a malformed line or an I/O error.
    pub fn is_faulted(&self) -> bool {
        self.state == ReaderState::Faulted
    }

    /// Number of entries handed out so far.
    pub fn entries_read(&self) -> usize {
        self.entries_read
    }

    /// The schema this reader decodes with, or `None` once closed.
    pub fn schema(&self) -> Option<&ProblemSchema> {
        self.entries.as_ref().map(EntryReader::schema)
    }
}

/// Yields `Ok` for each complete entry and at most one `Err` for an I/O
/// failure. Iterating a closed reader yields `Err(ReaderError::Closed)`
/// once, then nothing.
impl<R: BufRead> Iterator for ResultFileReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_entry() {
            Ok(entry) => Some(Ok(entry)),
            Err(ReaderError::NoSuchEntry) => None,
            Err(ReaderError::Closed) if self.closed_reported => None,
            Err(ReaderError::Closed) => {
                self.closed_reported = true;
                Some(Err(ReaderError::Closed))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Reads every complete entry of a result file.
///
/// # Errors
///
/// Returns error if the file cannot be opened or read.
pub fn read_all(schema: ProblemSchema, path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    ResultFileReader::open(schema, path)?.collect()
}

/// Returns the last complete entry of a result file, the point a writer
/// resumes from.
///
/// # Errors
///
/// Returns error if the file cannot be opened or read.
pub fn last_entry(schema: ProblemSchema, path: impl AsRef<Path>) -> Result<Option<Entry>> {
    let mut last = None;
    for entry in ResultFileReader::open(schema, path)? {
        last = Some(entry?);
    }
    Ok(last)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
