//! INI documents as read and written by the UT2004 engine
//!
//! A [`Document`] is an ordered list of [`Section`]s, each holding an ordered
//! list of [`Entry`]s. A key may carry several values: every value is written
//! as its own `key=value` line, and the engine reads repeated keys back as an
//! ordered list (search paths, `EditPackages`). Order is therefore part of the
//! data and is never changed on write or parse.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::IniError;

/// Ordered collection of sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a section
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// All sections in document order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with exactly this name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Look up the values of `key` in section `section`
    ///
    /// The section name is matched exactly, the key ignoring ASCII case. The
    /// first match wins in both cases. Returns `None` when either is absent.
    pub fn values(&self, section: &str, key: &str) -> Option<&[String]> {
        self.section(section)?.values(key)
    }

    /// Serialize the document to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Parse a document from text
    pub fn parse(text: &str) -> Result<Self, IniError> {
        let mut parser = Parser::default();
        for (index, line) in text.lines().enumerate() {
            parser.line(index + 1, line)?;
        }
        Ok(parser.finish())
    }

    /// Parse a document from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IniError> {
        let mut parser = Parser::default();
        for (index, line) in reader.lines().enumerate() {
            parser.line(index + 1, &line?)?;
        }
        Ok(parser.finish())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry with a single value
    #[must_use]
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_values(key, [value])
    }

    /// Append an entry with an ordered list of values
    #[must_use]
    pub fn with_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries.push(Entry::new(key, values));
        self
    }

    /// Append an entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append `value` to the entry named exactly `key`, creating it if needed
    pub fn push_value(&mut self, key: &str, value: impl Into<String>) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.values.push(value.into()),
            None => self.entries.push(Entry::new(key, [value])),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Values of the first entry whose key matches ignoring ASCII case
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.values.as_slice())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        writeln!(f)
    }
}

/// Key with one or more ordered values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    values: Vec<String>,
}

impl Entry {
    pub fn new<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            writeln!(f, "{}={value}", self.key)?;
        }
        Ok(())
    }
}

/// Line-at-a-time parser state
#[derive(Default)]
struct Parser {
    sections: Vec<Section>,
}

impl Parser {
    fn line(&mut self, number: usize, line: &str) -> Result<(), IniError> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some(rest) = line.trim_end().strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or(IniError::UnterminatedSection { line: number })?;
            self.sections.push(Section::new(name));
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| IniError::MissingSeparator {
                line: number,
                content: line.to_string(),
            })?;

        if key.is_empty() {
            return Err(IniError::EmptyKey { line: number });
        }

        match self.sections.last_mut() {
            Some(section) => section.push_value(key, value),
            None => tracing::debug!("Ignoring line {number} outside of any section"),
        }

        Ok(())
    }

    fn finish(self) -> Document {
        Document {
            sections: self.sections,
        }
    }
}
