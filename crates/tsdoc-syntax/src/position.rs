//! Line/column positions for byte offsets.

use serde::{Deserialize, Serialize};

/// Zero-based line and column. The column counts UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Start offsets of every line in a source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> LineMap {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut pos = 0;
        while pos < bytes.len() {
            match bytes[pos] {
                b'\r' => {
                    if bytes.get(pos + 1) == Some(&b'\n') {
                        pos += 1;
                    }
                    line_starts.push(pos as u32 + 1);
                }
                b'\n' => line_starts.push(pos as u32 + 1),
                _ => {}
            }
            pos += 1;
        }
        LineMap { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset into `source`; offsets past the end clamp to
    /// the end of the last line.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let end = (offset as usize).min(source.len());
        let start = self
            .line_starts
            .get(line)
            .map_or(0, |&start| (start as usize).min(end));
        let character = source
            .get(start..end)
            .unwrap_or("")
            .chars()
            .map(|ch| ch.len_utf16() as u32)
            .sum();
        Position::new(line as u32, character)
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;
