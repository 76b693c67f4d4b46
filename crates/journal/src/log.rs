//! Append-only, line-delimited event log with a bounded in-memory batch
//! buffer. Writes are flushed on buffer-full, on the caller's periodic
//! save tick, and on shutdown.
use crate::event::Event;
use anyhow::Context;
use anyhow::Result;
use classboard_core::JOURNAL_BATCH_SIZE;
use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

pub struct EventLog {
    path: PathBuf,
    buffer: Vec<Event>,
}

impl EventLog {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), buffer: Vec::with_capacity(JOURNAL_BATCH_SIZE) }
    }

    /// Buffers `events`, flushing to disk once the buffer reaches
    /// `JOURNAL_BATCH_SIZE`.
    pub fn append(&mut self, events: Vec<Event>) -> Result<()> {
        self.buffer.extend(events);
        if self.buffer.len() >= JOURNAL_BATCH_SIZE {
            self.flush()?;
        }
        Ok(())
    }

    /// Writes any buffered events to the log file, clearing the buffer
    /// whether or not the write succeeds -- a write failure loses the
    /// batch rather than growing it unboundedly.
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.write_batch();
        self.buffer.clear();
        result
    }

    fn write_batch(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("create log directory")?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open event log {}", self.path.display()))?;
        for event in &self.buffer {
            let line = serde_json::to_string(event).context("serialize event")?;
            writeln!(file, "{line}").context("append event line")?;
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

/// Reads every well-formed event from `path`. A truncated final line (left
/// by a crash mid-write) is discarded rather than treated as an error.
pub fn read_all(path: &Path) -> Result<Vec<Event>> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).context("open event log"),
    };
    let reader = std::io::BufReader::new(file);
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>().context("read event log")?;
    let mut events = Vec::with_capacity(lines.len());
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(event) => events.push(event),
            Err(_) => break,
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn sample(word: &str) -> Event {
        Event::new("s1", 1, EventType::WordAdded, 0, word, 4.0, vec!['a'])
    }

    #[test]
    fn appends_below_batch_size_stay_buffered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let mut log = EventLog::open(&path);
        log.append(vec![sample("cat")]).unwrap();
        assert_eq!(log.pending(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn full_batch_flushes_automatically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let mut log = EventLog::open(&path);
        let events: Vec<Event> = (0..JOURNAL_BATCH_SIZE).map(|i| sample(&format!("w{i}"))).collect();
        log.append(events).unwrap();
        assert_eq!(log.pending(), 0);
        let read = read_all(&path).unwrap();
        assert_eq!(read.len(), JOURNAL_BATCH_SIZE);
    }

    #[test]
    fn manual_flush_writes_partial_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let mut log = EventLog::open(&path);
        log.append(vec![sample("cat"), sample("dog")]).unwrap();
        log.flush().unwrap();
        assert_eq!(read_all(&path).unwrap().len(), 2);
    }

    #[test]
    fn truncated_final_line_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        {
            let mut log = EventLog::open(&path);
            log.append(vec![sample("cat")]).unwrap();
            log.flush().unwrap();
        }
        let mut raw = std::fs::read_to_string(&path).unwrap();
        raw.push_str("{\"id\":\"not-fin");
        std::fs::write(&path, raw).unwrap();
        let events = read_all(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].word, "cat");
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        assert!(read_all(&path).unwrap().is_empty());
    }
}
