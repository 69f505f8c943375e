//! Transcript port
//!
//! Defines the interface the playback sequencer uses to drive a visible
//! transcript. Implementations live in the presentation layer (console) and
//! infrastructure (JSONL log).

use board_domain::{ConsensusItem, SequencerRun, Specialist, Turn};
use std::sync::Arc;

/// Callbacks for a transcript being revealed turn by turn
///
/// Once a playback is cancelled no method is called again for that run.
pub trait TranscriptSink: Send + Sync {
    /// Called once when playback enters the running state
    fn on_playback_start(&self, _run: &SequencerRun) {}

    /// Typing indicator: `Some` while a specialist is "typing", `None` to clear
    fn on_typing(&self, specialist: Option<&Specialist>);

    /// A turn is appended to the visible transcript
    fn on_turn_revealed(&self, index: usize, turn: &Turn);

    /// Playback finished; the precomputed consensus is handed over
    fn on_complete(&self, _consensus: &[ConsensusItem]) {}
}

/// No-op sink for when nothing is displayed
pub struct NoTranscript;

impl TranscriptSink for NoTranscript {
    fn on_typing(&self, _specialist: Option<&Specialist>) {}
    fn on_turn_revealed(&self, _index: usize, _turn: &Turn) {}
}

/// A sink that fans every event out to several sinks, in order.
///
/// ```text
/// PlaybackSequencer ──► CompositeTranscript ──┬──► ConsoleTranscript
///                                             └──► JsonlTranscriptLogger
/// ```
pub struct CompositeTranscript {
    delegates: Vec<Arc<dyn TranscriptSink>>,
}

impl CompositeTranscript {
    pub fn new(delegates: Vec<Arc<dyn TranscriptSink>>) -> Self {
        Self { delegates }
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

/// Macro to delegate a method call to all inner sinks.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl TranscriptSink for CompositeTranscript {
    fn on_playback_start(&self, run: &SequencerRun) {
        delegate!(self, on_playback_start, run);
    }

    fn on_typing(&self, specialist: Option<&Specialist>) {
        delegate!(self, on_typing, specialist);
    }

    fn on_turn_revealed(&self, index: usize, turn: &Turn) {
        delegate!(self, on_turn_revealed, index, turn);
    }

    fn on_complete(&self, consensus: &[ConsensusItem]) {
        delegate!(self, on_complete, consensus);
    }
}
