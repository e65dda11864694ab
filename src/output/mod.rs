//! Event log formatting and writing

pub mod formats;

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use crate::config::{OutputConfig, OutputFormat};
use crate::event::SpeechRecognitionEvent;

pub use formats::{format_json, format_text};

/// Output writer that handles multiple destinations
pub struct OutputWriter {
    config: OutputConfig,
    file: Option<File>,
    sequence_number: u32,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(config: OutputConfig) -> io::Result<Self> {
        let file = if let Some(ref path) = config.output_path {
            // Ensure parent directory exists
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            )
        } else {
            None
        };

        Ok(Self {
            config,
            file,
            sequence_number: 0,
        })
    }

    /// Write one event
    pub fn write(&mut self, event: &SpeechRecognitionEvent) -> io::Result<()> {
        self.sequence_number += 1;

        let formatted = self.format(event);

        if self.config.enable_console {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", formatted)?;
        }

        if let Some(ref mut file) = self.file {
            writeln!(file, "{}", formatted)?;
        }

        Ok(())
    }

    /// Write every event in order
    pub fn write_all(&mut self, events: &[SpeechRecognitionEvent]) -> io::Result<()> {
        for event in events {
            self.write(event)?;
        }
        self.flush()
    }

    /// Format an event according to the configured format
    pub fn format(&self, event: &SpeechRecognitionEvent) -> String {
        match self.config.format {
            OutputFormat::Text => format_text(event, self.sequence_number),
            OutputFormat::Json => format_json(event, self.sequence_number),
        }
    }

    /// Flush any buffered output
    pub fn flush(&mut self) -> io::Result<()> {
        if self.config.enable_console {
            io::stdout().flush()?;
        }
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    /// Number of events written so far
    pub fn written(&self) -> u32 {
        self.sequence_number
    }
}
