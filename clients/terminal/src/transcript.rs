use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use casino_blackjack::{EventSink, RoundEvent, TableError};

/// Appends every round event to a JSON-lines file, flushed line by line.
pub struct TranscriptSink<W: Write> {
    out: W,
    broken: bool,
}

impl TranscriptSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, TableError> {
        let file = File::options().create(true).append(true).open(path)?;
        log::info!("Recording transcript to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TranscriptSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, broken: false }
    }

    fn write_event(&mut self, event: &RoundEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> EventSink for TranscriptSink<W> {
    fn notify(&mut self, event: &RoundEvent) {
        if self.broken {
            return;
        }
        if let Err(e) = self.write_event(event) {
            log::warn!("Transcript disabled after write failure: {e}");
            self.broken = true;
        }
    }
}
