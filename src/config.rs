//! Session configuration.

use clap::ValueEnum;

/// How listings and combat reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Output format for listings and combat reports.
    pub format: OutputFormat,
    /// Wait for Enter after a listing or an unknown option.
    pub pause: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pause: true,
        }
    }
}
