use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use serde::{Deserialize, Deserializer};

use crate::{error::ConfigError, resolver::EmojiToken};

/// The only platform integration reactions are sent on
pub const EXPECTED_PLATFORM: &str = "aiocqhttp";

pub const DEFAULT_DATA_DIR: &str = "data/plugins/admin_emoji_reply";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_REPLY_DELAY_SECONDS: f64 = 0.3;
pub const DEFAULT_ENABLE_COMMAND: &str = "打开表情回复";
pub const DEFAULT_DISABLE_COMMAND: &str = "关闭表情回复";

/// Automatically react with emoji to messages from selected QQ users
#[derive(Parser, Debug)]
#[command(name = "emojireply")]
#[command(about = "Reacts with emoji to messages from selected QQ users", long_about = None)]
pub struct Args {
    /// Plugin configuration file (YAML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory holding the persisted on/off status
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Keep the on/off status in memory only
    #[arg(long)]
    pub memory_state: bool,
}

/// Plugin settings as read from the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Senders whose messages get reactions
    #[serde(deserialize_with = "deserialize_id_list")]
    pub target_qq_ids: Vec<String>,
    /// Emoji names or literal emoji characters, in reaction order
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub emoji_names: Vec<EmojiToken>,
    /// Pause between two reactions on the same message, in seconds
    pub reply_delay: f64,
    /// Senders allowed to run the on/off commands
    #[serde(deserialize_with = "deserialize_id_list")]
    pub admin_ids: Vec<String>,
    pub enable_command: String,
    pub disable_command: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            target_qq_ids: Vec::new(),
            emoji_names: Vec::new(),
            reply_delay: DEFAULT_REPLY_DELAY_SECONDS,
            admin_ids: Vec::new(),
            enable_command: DEFAULT_ENABLE_COMMAND.to_string(),
            disable_command: DEFAULT_DISABLE_COMMAND.to_string(),
        }
    }
}

impl PluginConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file is a valid, default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load config from file. A missing file means defaults
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match tokio::fs::read_to_string(path).await {
            Ok(content) => Self::from_yaml(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Config file {:?} not found, using defaults", path);
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if Duration::try_from_secs_f64(config.reply_delay).is_err() {
            log::warn!(
                "reply_delay {} is not a valid duration, reactions will not be paced",
                config.reply_delay
            );
        }
        log::info!(
            "Loaded config: {} target(s), {} emoji token(s), reply delay {}s",
            config.target_qq_ids.len(),
            config.emoji_names.len(),
            config.reply_delay
        );
        Ok(config)
    }

    /// Pause between reactions. Invalid values (negative, NaN, infinite) mean no pause
    pub fn reply_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.reply_delay).unwrap_or_default()
    }

    pub fn is_admin(&self, sender_id: &str) -> bool {
        !sender_id.is_empty() && self.admin_ids.iter().any(|id| id == sender_id)
    }
}

/// An explicit `null` list is the same as an empty one
fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep string ids only. Sender ids are compared as strings, so a bare YAML
/// number could never match and is dropped with a warning
fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<serde_yaml::Value> = deserialize_null_as_empty(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_yaml::Value::String(s) => Some(s),
            serde_yaml::Value::Number(n) => {
                log::warn!("Id {} is a number and will never match, quote it as a string", n);
                None
            }
            other => {
                log::warn!("Ignoring id {:?}: expected a string", other);
                None
            }
        })
        .collect())
}
