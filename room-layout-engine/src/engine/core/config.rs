use bevy::prelude::*;
use constants::paths::{DEFAULT_USER_ID, LAYOUT_DATA_ASSET_PATH};
use std::fmt;

pub const USAGE: &str = "Usage: room-layout-engine [--data <asset-path>] [--user <user-id>] [--layout <layout-id>]";

/// Where the layout library lives and which layout to open first.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Layout library path, relative to the asset directory.
    pub data_path: String,
    pub user_id: String,
    /// Explicit layout to open. When absent the user's first layout is used.
    pub layout_id: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_path: LAYOUT_DATA_ASSET_PATH.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            layout_id: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown argument: {}", flag),
            ConfigError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EditorConfig {
    /// Parse flags, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            let slot = match flag.as_str() {
                "--data" => &mut config.data_path,
                "--user" => &mut config.user_id,
                "--layout" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?;
                    config.layout_id = Some(value.clone());
                    continue;
                }
                _ => return Err(ConfigError::UnknownFlag(flag.clone())),
            };
            *slot = iter
                .next()
                .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?
                .clone();
        }

        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args)
    }

    // The browser host has no command line; layouts arrive over RPC instead.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let config = EditorConfig::from_args(&[]).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.data_path, LAYOUT_DATA_ASSET_PATH);
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert!(config.layout_id.is_none());
    }

    #[test]
    fn flags_override_in_any_order() {
        let config = EditorConfig::from_args(&args(&[
            "--layout",
            "layout2",
            "--data",
            "data/other.json",
            "--user",
            "user123",
        ]))
        .unwrap();

        assert_eq!(config.data_path, "data/other.json");
        assert_eq!(config.user_id, "user123");
        assert_eq!(config.layout_id.as_deref(), Some("layout2"));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert_eq!(
            EditorConfig::from_args(&args(&["--colour", "red"])),
            Err(ConfigError::UnknownFlag("--colour".to_string()))
        );
        assert_eq!(
            EditorConfig::from_args(&args(&["--user"])),
            Err(ConfigError::MissingValue("--user".to_string()))
        );
        assert_eq!(
            EditorConfig::from_args(&args(&["--layout"])),
            Err(ConfigError::MissingValue("--layout".to_string()))
        );
    }
}
