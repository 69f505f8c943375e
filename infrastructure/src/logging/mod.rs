//! Logging infrastructure: structured transcript logging.
//!
//! Provides [`JsonlTranscriptLogger`], a JSONL file writer that implements
//! the [`TranscriptSink`](board_application::TranscriptSink) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTranscriptLogger;
