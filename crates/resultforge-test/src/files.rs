//! Result file text builders.
//!
//! # Example
//!
//! ```
//! use resultforge_test::ResultFileText;
//!
//! let text = ResultFileText::new()
//!     .solution(["1.0", "2.0", "5.0"])
//!     .property("NFE", "100")
//!     .separator()
//!     .build();
//!
//! assert_eq!(text, "#\n1.0 2.0 5.0\n//NFE=100\n#\n");
//! ```

use std::io::Write;

use tempfile::NamedTempFile;

/// Builds result file text line by line.
///
/// Starts with a separator line, the way the writer begins every file.
#[derive(Debug, Clone)]
pub struct ResultFileText {
    text: String,
}

impl ResultFileText {
    pub fn new() -> Self {
        Self {
            text: String::from("#\n"),
        }
    }

    /// Starts from empty text, without the leading separator.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends a separator line.
    pub fn separator(self) -> Self {
        self.line("#")
    }

    /// Appends a data line from its tokens.
    pub fn solution<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&line)
    }

    /// Appends an objectives-only data line.
    pub fn objectives(self, values: &[f64]) -> Self {
        self.solution(values.iter().map(|v| format!("{v:?}")))
    }

    /// Appends a metadata line.
    pub fn property(self, key: &str, value: &str) -> Self {
        self.line(&format!("//{key}={value}"))
    }

    /// Appends a raw line.
    pub fn line(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Appends raw text without a trailing newline.
    pub fn raw(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    pub fn build(self) -> String {
        self.text
    }

    /// Writes the text to a temporary file that lives as long as the handle.
    pub fn write_temp(&self) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.text.as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

impl Default for ResultFileText {
    fn default() -> Self {
        Self::new()
    }
}
