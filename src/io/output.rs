use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    /// `-` means stdout, anything else is a file path.
    pub fn parse(spec: &str) -> Self {
        if spec == "-" {
            OutputDestination::Stdout
        } else {
            OutputDestination::file(spec)
        }
    }
}

/// Where and how the collected field values are written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }
}

impl OutputOptions {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

pub fn emit(values: &Map<String, Value>, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = serialize_values(values, options)?;
    for destination in &options.destinations {
        match destination {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{payload}").context("failed to write to stdout")?;
                stdout.flush().context("failed to flush stdout")?;
            }
            OutputDestination::File(path) => {
                fs::write(path, format!("{payload}\n"))
                    .with_context(|| format!("failed to write to file {}", path.display()))?;
            }
        }
    }
    Ok(())
}

fn serialize_values(values: &Map<String, Value>, options: &OutputOptions) -> Result<String> {
    match options.format {
        DocumentFormat::Json if options.pretty => {
            serde_json::to_string_pretty(values).context("failed to serialize JSON")
        }
        DocumentFormat::Json => serde_json::to_string(values).context("failed to serialize JSON"),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(values).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml if options.pretty => {
            toml::to_string_pretty(values).context("failed to serialize TOML")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::to_string(values).context("failed to serialize TOML"),
    }
}
