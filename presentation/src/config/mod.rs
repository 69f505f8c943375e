//! Presentation-level configuration
//!
//! Resolved settings for how a consultation is shown on the terminal.

use board_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the typing indicator while a specialist is "typing"
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Turn colored output on or off for the whole process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Whether the transcript is rendered live while playing
    pub fn plays_live(&self) -> bool {
        self.format != OutputFormat::Json
    }
}
