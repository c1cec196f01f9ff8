//! Configuration for the pcmwave tools.
//!
//! The conversion core never opens files or invents names; everything about
//! how paths and standard streams are chosen lives here as [`Settings`],
//! loaded from TOML.
//!
//! # Example
//!
//! ```rust
//! use pcmwave_config::{NamingPolicy, Settings};
//!
//! let settings = Settings::from_toml(
//!     r#"
//!     [streams]
//!     stdin_fallback = false
//!
//!     [naming]
//!     policy = "replace"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(!settings.streams.stdin_fallback);
//! assert!(settings.streams.stdout_fallback);
//! assert_eq!(settings.naming.policy, NamingPolicy::Replace);
//! assert_eq!(settings.text.sample_rate, 44100);
//! ```

mod error;
mod settings;

/// Platform-specific configuration paths.
pub mod paths;

pub use error::ConfigError;
pub use paths::{config_file_name, find_config, user_config_dir, user_config_file};
pub use settings::{
    DEFAULT_TEXT_SAMPLE_RATE, NamingPolicy, NamingSettings, Settings, StreamSettings,
    TextSettings,
};
