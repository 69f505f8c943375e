//! Live transcript rendering for playback

use crate::output::console::ConsoleFormatter;
use board_application::TranscriptSink;
use board_domain::{ConsensusItem, SequencerRun, Specialist, Turn};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Prints turns as they are revealed, with a spinner as typing indicator
pub struct ConsoleTranscript {
    show_progress: bool,
    typing: Mutex<Option<ProgressBar>>,
}

impl ConsoleTranscript {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            typing: Mutex::new(None),
        }
    }

    /// Plain line output, no spinner
    pub fn quiet() -> Self {
        Self {
            show_progress: false,
            typing: Mutex::new(None),
        }
    }

    fn typing_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn typing(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.typing.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_indicator(&self) {
        if let Some(pb) = self.typing().take() {
            pb.finish_and_clear();
        }
    }

    /// Print above the spinner if one is active
    fn println(&self, line: String) {
        match self.typing().as_ref() {
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }
}

impl Default for ConsoleTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptSink for ConsoleTranscript {
    fn on_playback_start(&self, run: &SequencerRun) {
        println!("{}", ConsoleFormatter::format_header(run));
    }

    fn on_typing(&self, specialist: Option<&Specialist>) {
        self.clear_indicator();

        let Some(specialist) = specialist else {
            return;
        };
        if !self.show_progress {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::typing_style());
        pb.set_message(format!(
            "{} is typing...",
            specialist.name.dimmed()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.typing() = Some(pb);
    }

    fn on_turn_revealed(&self, _index: usize, turn: &Turn) {
        self.println(ConsoleFormatter::format_turn(turn));
    }

    fn on_complete(&self, _consensus: &[ConsensusItem]) {
        self.clear_indicator();
    }
}

impl Drop for ConsoleTranscript {
    fn drop(&mut self) {
        self.clear_indicator();
    }
}
