//! ResultForge - Fault-tolerant reading of optimization result files
//!
//! Result files hold a sequence of entries, each a population of solutions
//! plus `key=value` metadata. Files cut short by an interrupted writer are
//! read up to the last complete entry.
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use resultforge::prelude::*;
//!
//! let schema = ProblemSchema::new(1)
//!     .with_variable(VariableSpec::real(0.0, 10.0))
//!     .with_variable(VariableSpec::permutation(3));
//! let text = "#\n2.5 2,0,1 0.75\n//NFE=100\n#\n";
//!
//! let entries: Vec<Entry> = ResultFileReader::new(schema, Cursor::new(text))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let solution = &entries[0].population()[0];
//! assert_eq!(solution.variable(0).unwrap().as_real(), Some(2.5));
//! assert_eq!(solution.objectives(), &[0.75]);
//! ```

// Domain types
pub use resultforge_core::{
    Entry, OpaqueValue, Population, ProblemSchema, Properties, SchemaError, Solution, Variable,
    VariableKind, VariableSpec,
};

// Configuration
pub use resultforge_config::{ConfigError, ReaderConfig};

// Reading
pub use resultforge_reader::{
    encode, last_entry, read_all, Advisory, AdvisorySink, BoxError, DecodeError, LineError,
    PayloadDeserializer, RawPayload, ReaderBuilder, ReaderError, ResultFileReader,
    TracingAdvisory,
};

/// Lower-level building blocks: line classification, line and property parsing.
pub mod parse {
    pub use resultforge_reader::{
        parse_properties, parse_solution, EntryReader, LineKind, Markers, ReadOutcome,
        VariableDecoder,
    };
}

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Entry, OpaqueValue, Population, ProblemSchema, Properties, Solution, Variable,
        VariableKind, VariableSpec,
    };
    pub use super::{ReaderBuilder, ReaderConfig, ReaderError, ResultFileReader};
}
