//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::paths::find_config;

/// Sample rate given to text input when none is specified.
pub const DEFAULT_TEXT_SAMPLE_RATE: u32 = 44100;

/// Settings for the command-line layer.
///
/// # TOML Format
///
/// ```toml
/// [streams]
/// stdin_fallback = true
/// stdout_fallback = true
///
/// [naming]
/// policy = "append"
///
/// [text]
/// sample_rate = 44100
/// ```
///
/// Every table and key is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Standard stream fallback behavior.
    pub streams: StreamSettings,
    /// Default output file naming.
    pub naming: NamingSettings,
    /// Text input defaults.
    pub text: TextSettings,
}

/// When a missing path means a standard stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreamSettings {
    /// A missing input path reads standard input.
    pub stdin_fallback: bool,
    /// A missing output path, with standard input as the source, writes standard output.
    pub stdout_fallback: bool,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            stdin_fallback: true,
            stdout_fallback: true,
        }
    }
}

/// Output naming configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingSettings {
    /// How an output name is derived from the input name.
    pub policy: NamingPolicy,
}

/// How a default output path is derived from an input path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NamingPolicy {
    /// Append the new extension: `song.txt` becomes `song.txt.wav`.
    #[default]
    Append,
    /// Replace the extension: `song.txt` becomes `song.wav`.
    Replace,
}

impl NamingPolicy {
    /// Derive an output path for `input` with the given extension (no dot).
    ///
    /// [`NamingPolicy::Replace`] falls back to appending when replacing
    /// would name the input file itself.
    pub fn output_path(self, input: &Path, extension: &str) -> PathBuf {
        let appended = || {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(extension);
            PathBuf::from(name)
        };
        match self {
            NamingPolicy::Append => appended(),
            NamingPolicy::Replace => {
                let replaced = input.with_extension(extension);
                if replaced == input {
                    appended()
                } else {
                    replaced
                }
            }
        }
    }
}

/// Defaults for text input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextSettings {
    /// Sample rate in Hz assigned to decoded text.
    pub sample_rate: u32,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_TEXT_SAMPLE_RATE,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load the user's settings file if one exists, otherwise the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match find_config() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::create_dir(parent, e))?;
            }
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the tools cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.sample_rate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "text.sample_rate",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Set the naming policy.
    pub fn with_naming(mut self, policy: NamingPolicy) -> Self {
        self.naming.policy = policy;
        self
    }

    /// Set both standard stream fallbacks.
    pub fn with_stream_fallback(mut self, stdin: bool, stdout: bool) -> Self {
        self.streams = StreamSettings {
            stdin_fallback: stdin,
            stdout_fallback: stdout,
        };
        self
    }
}
