//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying its `type` tag,
//! its fields and a `timestamp`. The file is opened in append mode so
//! successive chat sessions accumulate in the same log.

use barista_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Every line is flushed as soon as it is written.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` and warns if the file cannot be opened; the caller
    /// then runs without a conversation log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(logger) => Some(logger),
            Err(e) => {
                warn!("Could not open conversation log {}: {}", path.display(), e);
                None
            }
        }
    }

    fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The event's own fields plus a `timestamp`.
fn record(event: &ConversationEvent, timestamp: String) -> Value {
    let mut value = serde_json::to_value(event).unwrap_or_else(|e| {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(event.kind().to_string()));
        map.insert("error".to_string(), Value::String(e.to_string()));
        Value::Object(map)
    });
    if let Value::Object(map) = &mut value {
        map.insert("timestamp".to_string(), Value::String(timestamp));
    }
    value
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&record(&event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
