//! JSON Emitter
//!
//! Machine-readable diagnostic output for host diagnostic engines. Labels
//! carry exact byte offset and length so hosts can highlight precise ranges.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    lines: Option<LineOffsetTable>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            lines: None,
        }
    }

    /// Add a 1-based `line` field to every label, resolved against `source`.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.set_source(source);
        self
    }

    /// Resolve subsequent labels against `source`; used when one array spans
    /// several units.
    pub fn set_source(&mut self, source: &str) {
        self.lines = Some(LineOffsetTable::build(source));
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        // Build JSON manually (no serde dependency)
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(self.writer, "    \"severity\": \"{}\",", diagnostic.severity);
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"offset\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"length\": {},", label.span.len());
            if let Some(lines) = &self.lines {
                let line = lines.line_from_offset(label.span.start);
                let _ = writeln!(self.writer, "        \"line\": {line},");
            }
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(
                self.writer,
                "      \"{}\"{}",
                escape_json(suggestion),
                comma
            );
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // The array itself is the summary
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
