use crate::error::{Result, UsersError};
use crate::repl::{SessionOptions, DEFAULT_PROMPT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for usersapp, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersConfig {
    /// Colorize status messages
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print the welcome banner when the session starts
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Question asked at the main prompt
    #[serde(default = "default_prompt_message")]
    pub prompt_message: String,
}

fn default_true() -> bool {
    true
}

fn default_prompt_message() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_banner: true,
            prompt_message: default_prompt_message(),
        }
    }
}

impl UsersConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UsersConfig = serde_json::from_str(&content).map_err(|err| {
            UsersError::Config(format!("{}: {}", config_path.display(), err))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    #[cfg(test)]
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            show_banner: self.show_banner,
            prompt_message: self.prompt_message.clone(),
        }
    }
}
