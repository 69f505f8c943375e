//! JSONL file writer for playback events.
//!
//! Each transcript event is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use board_application::TranscriptSink;
use board_domain::{ConsensusItem, SequencerRun, Specialist, Turn};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL transcript logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlTranscriptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTranscriptLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create transcript log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn log(&self, event_type: &str, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::String(event_type.to_string()));
        record.insert("timestamp".to_string(), Value::String(timestamp));

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only; flush each line so a crash loses nothing
            let _ = writer.flush();
        }
    }
}

impl TranscriptSink for JsonlTranscriptLogger {
    fn on_playback_start(&self, run: &SequencerRun) {
        self.log(
            "playback_start",
            json!({
                "run_id": run.id,
                "case": run.case_input,
                "specialists": run.selected.iter().map(|s| s.id).collect::<Vec<_>>(),
                "turns": run.turn_count(),
            }),
        );
    }

    fn on_typing(&self, specialist: Option<&Specialist>) {
        self.log("typing", json!({ "specialist": specialist.map(|s| s.id) }));
    }

    fn on_turn_revealed(&self, index: usize, turn: &Turn) {
        self.log(
            "turn",
            json!({
                "index": index,
                "speaker": turn.speaker,
                "kind": turn.kind,
                "content": turn.content,
            }),
        );
    }

    fn on_complete(&self, consensus: &[ConsensusItem]) {
        self.log("complete", json!({ "consensus": consensus }));
    }
}

impl Drop for JsonlTranscriptLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
