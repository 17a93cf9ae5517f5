// Line-oriented record reader for /proc text files.

use std::path::Path;
use std::str::Lines;

use super::CollectError;

/// Yields one whitespace-split record per line. The stream ends at EOF or at the first
/// blank line, whichever comes first.
pub struct RecordReader<'a> {
    lines: Lines<'a>,
    done: bool,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            done: false,
        }
    }

    /// The first `n` records (fewer if the stream ends early).
    pub fn first(self, n: usize) -> Vec<Vec<&'a str>> {
        self.take(n).collect()
    }
}

impl<'a> Iterator for RecordReader<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lines.next() {
            Some(line) if !line.trim().is_empty() => Some(line.split_whitespace().collect()),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Read a whole pseudo-file. /proc entries report a zero size, so this goes through
/// read-to-end rather than a sized buffer.
pub async fn read_source(path: &Path) -> Result<String, CollectError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CollectError::io(path, e))
}
