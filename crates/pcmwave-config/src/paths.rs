//! Platform-specific paths for the settings file.
//!
//! - Linux: `~/.config/pcmwave/config.toml`
//! - macOS: `~/Library/Application Support/pcmwave/config.toml`
//! - Windows: `%APPDATA%\pcmwave\config.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "pcmwave";

/// File name of the settings file.
const CONFIG_FILE: &str = "config.toml";

/// Name of the settings file inside the config directory.
pub fn config_file_name() -> &'static str {
    CONFIG_FILE
}

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user settings file, whether or not it exists.
pub fn user_config_file() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// The user settings file, if present.
pub fn find_config() -> Option<PathBuf> {
    let path = user_config_file();
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_in_app_dir() {
        let file = user_config_file();
        assert!(file.ends_with("pcmwave/config.toml"));
        assert_eq!(file.parent().unwrap(), user_config_dir());
    }
}
