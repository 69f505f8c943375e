//! Configuration file loading for tumor-board
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TUMOR_BOARD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tumor-board.toml` or `./.tumor-board.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tumor-board/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConsultationConfig, FileOutputConfig, FilePlaybackConfig,
};
pub use loader::ConfigLoader;
