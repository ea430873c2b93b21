//! JSON Event Sink
//!
//! Outputs client events as NDJSON, one object per completed record.

use crate::command::AnnotateRecord;
use crate::domain::ports::{ClientEvent, EventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn file_info_json(record: &AnnotateRecord) -> serde_json::Value {
    let mut json = serde_json::json!({
        "event": "file_info",
        "command": "annotate",
        "path": record.file().display().to_string(),
        "lines": record.line_count(),
        "complete": record.is_complete(),
    });

    match record.annotate_lines() {
        Ok(lines) => {
            json["annotations"] = lines
                .into_iter()
                .map(|line| {
                    serde_json::json!({
                        "line": line.line_num,
                        "revision": line.revision,
                        "author": line.author,
                        "date": line.date_string,
                        "content": line.content,
                    })
                })
                .collect();
        }
        Err(e) => {
            json["complete"] = false.into();
            json["error"] = e.to_string().into();
        }
    }
    json
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: ClientEvent) {
        let json = match event {
            ClientEvent::FileInfo(record) => file_info_json(&record),

            ClientEvent::EntryUpdated { path, entry } => {
                serde_json::json!({
                    "event": "entry_updated",
                    "command": "checkin",
                    "path": path.display().to_string(),
                    "revision": entry.revision(),
                    "entry": entry.to_string(),
                })
            }
        };

        self.write_event(json);
    }
}
