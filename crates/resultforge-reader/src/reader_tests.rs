//! Tests for the entry iterator.

use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex};

use resultforge_core::{OpaqueValue, Variable, VariableSpec};
use resultforge_test::{schemas, ResultFileText};

use super::*;
use crate::decode::Advisory;
use crate::error::BoxError;

fn reader_over(text: &str, schema: ProblemSchema) -> ResultFileReader<Cursor<Vec<u8>>> {
    ResultFileReader::new(schema, Cursor::new(text.as_bytes().to_vec())).unwrap()
}

/// Serves `data`, then fails every read.
struct FailingRead {
    data: Cursor<Vec<u8>>,
}

impl Read for FailingRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "disk unplugged")),
            n => Ok(n),
        }
    }
}

#[test]
fn test_scenario_two_reals_one_objective() {
    let text = ResultFileText::new()
        .solution(["1.0", "2.0", "5.0"])
        .separator()
        .build();
    let mut reader = reader_over(&text, schemas::two_reals_one_objective());

    let entry = reader.next_entry().unwrap();
    let solution = &entry.population()[0];
    assert_eq!(solution.variable(0).unwrap().as_real(), Some(1.0));
    assert_eq!(solution.variable(1).unwrap().as_real(), Some(2.0));
    assert_eq!(solution.objectives(), &[5.0]);
}

#[test]
fn test_multiple_entries_in_order() {
    let text = ResultFileText::new()
        .objectives(&[1.0])
        .property("NFE", "100")
        .separator()
        .objectives(&[2.0])
        .objectives(&[3.0])
        .property("NFE", "200")
        .separator()
        .build();
    let reader = reader_over(&text, ProblemSchema::new(1));

    let entries: Vec<Entry> = reader.collect::<Result<_>>().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].property("NFE"), Some("100"));
    assert_eq!(entries[1].property("NFE"), Some("200"));
    assert_eq!(entries[1].population().len(), 2);
}

#[test]
fn test_has_next_is_idempotent() {
    let text = ResultFileText::new().objectives(&[1.0]).separator().build();
    let mut reader = reader_over(&text, ProblemSchema::new(1));

    assert!(reader.has_next().unwrap());
    assert!(reader.has_next().unwrap());
    assert!(reader.has_next().unwrap());
    assert_eq!(reader.entries_read(), 0);

    reader.next_entry().unwrap();
    assert!(!reader.has_next().unwrap());
    assert!(!reader.has_next().unwrap());
}

#[test]
fn test_next_entry_without_has_next() {
    let text = ResultFileText::new().objectives(&[1.0]).separator().build();
    let mut reader = reader_over(&text, ProblemSchema::new(1));

    assert!(reader.next_entry().is_ok());
    assert!(matches!(reader.next_entry(), Err(ReaderError::NoSuchEntry)));
    assert!(matches!(reader.next_entry(), Err(ReaderError::NoSuchEntry)));
}

#[test]
fn test_fault_is_sticky() {
    let text = ResultFileText::new()
        .objectives(&[1.0])
        .separator()
        .line("garbage")
        .separator()
        .objectives(&[3.0])
        .separator()
        .build();
    let mut reader = reader_over(&text, ProblemSchema::new(1));

    assert!(reader.next_entry().is_ok());
    assert!(!reader.has_next().unwrap());
    assert!(reader.is_faulted());
    // the intact entry after the broken one is never reached
    assert!(!reader.has_next().unwrap());
    assert_eq!(reader.entries_read(), 1);
}

#[test]
fn test_bad_bit_string_emits_no_entry() {
    let schema = ProblemSchema::new(1).with_variable(VariableSpec::binary(4));
    let text = ResultFileText::new()
        .solution(["1010", "1.0"])
        .separator()
        .solution(["101", "2.0"])
        .separator()
        .build();
    let mut reader = reader_over(&text, schema);

    assert!(reader.next_entry().is_ok());
    assert!(!reader.has_next().unwrap());
    assert!(reader.is_faulted());
}

#[test]
fn test_bad_permutation_emits_no_entry() {
    let schema = ProblemSchema::new(1).with_variable(VariableSpec::permutation(3));
    let text = ResultFileText::new()
        .solution(["0,1,1", "2.0"])
        .separator()
        .build();
    let mut reader = reader_over(&text, schema);

    assert!(!reader.has_next().unwrap());
    assert!(reader.is_faulted());
}

#[test]
fn test_truncated_entry_is_not_emitted() {
    let text = ResultFileText::new()
        .objectives(&[1.0])
        .property("NFE", "100")
        .separator()
        .objectives(&[2.0])
        .raw("3.")
        .build();
    let mut reader = reader_over(&text, ProblemSchema::new(1));

    let entry = reader.next_entry().unwrap();
    assert_eq!(entry.property("NFE"), Some("100"));
    assert!(!reader.has_next().unwrap());
    assert!(!reader.is_faulted());
}

#[test]
fn test_close_releases_stream() {
    let text = ResultFileText::new().objectives(&[1.0]).separator().build();
    let mut reader = reader_over(&text, ProblemSchema::new(1));

    assert!(reader.has_next().unwrap());
    reader.close();

    assert!(reader.is_closed());
    assert!(reader.schema().is_none());
    assert!(matches!(reader.has_next(), Err(ReaderError::Closed)));
    assert!(matches!(reader.next_entry(), Err(ReaderError::Closed)));
    assert!(matches!(reader.next(), Some(Err(ReaderError::Closed))));
    assert!(reader.next().is_none());

    reader.close();
    assert!(reader.is_closed());
}

#[test]
fn test_io_error_is_surfaced_once() {
    let text = ResultFileText::new()
        .objectives(&[1.0])
        .separator()
        .objectives(&[2.0])
        .build();
    let source = io::BufReader::new(FailingRead {
        data: Cursor::new(text.into_bytes()),
    });
    let mut reader = ResultFileReader::new(ProblemSchema::new(1), source).unwrap();

    assert!(matches!(reader.next(), Some(Ok(_))));
    assert!(matches!(reader.next(), Some(Err(ReaderError::Io(_)))));
    assert!(reader.next().is_none());
    assert!(reader.is_faulted());
}

#[test]
fn test_torn_utf8_tail_keeps_complete_entries() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"#\n1.0 2.0 5.0\n//NFE=100\n#\n\xc3").unwrap();
    let schema = schemas::two_reals_one_objective();

    let entries = read_all(schema.clone(), file.path()).unwrap();
    assert_eq!(entries.len(), 1);

    let last = last_entry(schema, file.path()).unwrap().unwrap();
    assert_eq!(last.property("NFE"), Some("100"));
}

#[test]
fn test_invalid_utf8_data_line_faults() {
    let text = b"#\n5.0\n#\n\xff\xfe\n#\n7.0\n#\n".to_vec();
    let mut reader = ResultFileReader::new(ProblemSchema::new(1), Cursor::new(text)).unwrap();

    assert!(matches!(reader.next(), Some(Ok(_))));
    assert!(reader.next().is_none());
    assert!(reader.is_faulted());
}

#[test]
fn test_invalid_schema_is_rejected() {
    let result = ResultFileReader::new(ProblemSchema::new(0), Cursor::new(Vec::new()));
    assert!(matches!(result, Err(ReaderError::Config(_))));
}

#[test]
fn test_builder_custom_markers() {
    let text = "%\n1.0\n;;run=7\n%\n";
    let mut reader = ReaderBuilder::new(ProblemSchema::new(1))
        .with_separator_marker("%")
        .with_metadata_marker(";;")
        .build(Cursor::new(text))
        .unwrap();

    let entry = reader.next_entry().unwrap();
    assert_eq!(entry.property("run"), Some("7"));
}

#[test]
fn test_builder_rejects_empty_marker() {
    let result = ReaderBuilder::new(ProblemSchema::new(1))
        .with_metadata_marker("")
        .build(Cursor::new(""));
    assert!(matches!(result, Err(ReaderError::Config(_))));
}

#[test]
fn test_builder_advisory_sink() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink_seen = Arc::clone(&seen);
    let schema = ProblemSchema::new(1).with_variable(VariableSpec::opaque());
    let text = ResultFileText::new()
        .solution(["-", "1.0"])
        .solution(["-", "2.0"])
        .separator()
        .build();

    let reader = ReaderBuilder::new(schema)
        .with_advisory_sink(move |a: &Advisory| sink_seen.lock().unwrap().push(a.clone()))
        .build(Cursor::new(text))
        .unwrap();

    assert_eq!(reader.count(), 1);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_builder_payload_deserializer() {
    let schema = ProblemSchema::new(1).with_variable(VariableSpec::opaque());
    let deserializer = |_: &Variable, payload: &[u8]| -> std::result::Result<Variable, BoxError> {
        Ok(Variable::Opaque {
            type_name: Some("Upper".to_string()),
            value: OpaqueValue::Bytes(payload.to_ascii_uppercase()),
        })
    };
    // "abc" in base64
    let text = ResultFileText::new()
        .solution(["YWJj", "1.0"])
        .separator()
        .build();

    let mut reader = ReaderBuilder::new(schema)
        .with_payload_deserializer(deserializer)
        .build(Cursor::new(text))
        .unwrap();

    let entry = reader.next_entry().unwrap();
    assert_eq!(
        entry.population()[0].variable(0).unwrap().as_opaque(),
        Some(&OpaqueValue::Bytes(b"ABC".to_vec()))
    );
}

#[test]
fn test_open_file() {
    let file = ResultFileText::new()
        .objectives(&[1.0, 2.0])
        .separator()
        .write_temp()
        .unwrap();

    let mut reader = ResultFileReader::open(ProblemSchema::new(2), file.path()).unwrap();
    assert_eq!(reader.next_entry().unwrap().population().len(), 1);
    assert!(!reader.has_next().unwrap());
}

#[test]
fn test_open_with_config() {
    let file = ResultFileText::empty()
        .line("%")
        .objectives(&[4.0])
        .line("%")
        .write_temp()
        .unwrap();
    let config = ReaderConfig::new(ProblemSchema::new(1)).with_separator_marker("%");

    let entries: Vec<Entry> = ResultFileReader::open_with_config(config, file.path())
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_open_missing_file() {
    let result = ResultFileReader::open(
        ProblemSchema::new(1),
        "/nonexistent/resultforge/results.txt",
    );
    assert!(matches!(result, Err(ReaderError::Io(_))));
}

#[test]
fn test_read_all_and_last_entry() {
    let file = ResultFileText::new()
        .objectives(&[1.0])
        .property("NFE", "100")
        .separator()
        .objectives(&[2.0])
        .property("NFE", "200")
        .separator()
        .objectives(&[3.0])
        .write_temp()
        .unwrap();

    let all = read_all(ProblemSchema::new(1), file.path()).unwrap();
    assert_eq!(all.len(), 2);

    let last = last_entry(ProblemSchema::new(1), file.path()).unwrap().unwrap();
    assert_eq!(last.property("NFE"), Some("200"));
}

#[test]
fn test_last_entry_of_empty_file() {
    let file = ResultFileText::empty().write_temp().unwrap();
    assert!(last_entry(ProblemSchema::new(1), file.path()).unwrap().is_none());
}
