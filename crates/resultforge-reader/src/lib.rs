//! Fault-tolerant reader for optimization result files.
//!
//! A result file is a sequence of entries, each a population of solutions
//! followed by `key=value` metadata and closed by a separator line:
//!
//! ```text
//! #
//! 0.25 1011 2,0,1 0.5 1.5
//! 0.75 0110 0,2,1 0.9 0.2
//! //NFE=1000
//! //ElapsedTime=12.5
//! #
//! ```
//!
//! Writers may be interrupted mid-entry. [`ResultFileReader`] returns every
//! complete entry up to the first incomplete or malformed one and then stops,
//! without raising an error, so the writer can resume after the last intact
//! entry.
//!
//! - [`decode`] - Per-kind variable token decoding and encoding
//! - [`line`] - Data line to solution parsing
//! - [`properties`] - Metadata block parsing
//! - [`entry_reader`] - Line classification and entry assembly
//! - [`reader`] - The entry iterator

pub mod decode;
pub mod entry_reader;
pub mod error;
pub mod line;
pub mod properties;
pub mod reader;

pub use decode::{
    encode, Advisory, AdvisorySink, PayloadDeserializer, RawPayload, TracingAdvisory,
    VariableDecoder,
};
pub use entry_reader::{EntryReader, LineKind, Markers, ReadOutcome};
pub use error::{BoxError, DecodeError, LineError, ReaderError, Result};
pub use line::parse_solution;
pub use properties::parse_properties;
pub use reader::{last_entry, read_all, ReaderBuilder, ResultFileReader};
