//! JSON-lines recording player
//!
//! One sample per line, blank lines skipped:
//!
//! ```text
//! {"x": 0.01, "y": -0.86, "z": 0.50}
//! {"x": 0.02, "y": -0.87, "z": 0.49}
//! ```

use crate::error::{Error, Result};
use crate::sensors::SampleSource;
use crate::types::OrientationSample;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Plays back a recording one sample per poll
pub struct ReplaySource<R: BufRead + Send> {
    reader: R,
    line_number: usize,
    line: String,
    samples_read: u64,
}

impl ReplaySource<BufReader<File>> {
    /// Open a recording for playback
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::info!("Replaying orientation samples from {}", path.display());
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead + Send> ReplaySource<R> {
    /// Play back from any buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            line: String::new(),
            samples_read: 0,
        }
    }

    pub fn samples_read(&self) -> u64 {
        self.samples_read
    }
}

impl<R: BufRead + Send> SampleSource for ReplaySource<R> {
    fn name(&self) -> &str {
        "replay"
    }

    fn read(&mut self) -> Result<Option<OrientationSample>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }

            let sample = serde_json::from_str(text).map_err(|source| Error::ReplayParse {
                line: self.line_number,
                source,
            })?;
            self.samples_read += 1;
            return Ok(Some(sample));
        }
    }
}
