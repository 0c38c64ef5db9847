//
// The plugin's on/off switch, stored as a single human-readable YAML record
// ("status.yaml") in the plugin's data directory
//

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

pub const STATUS_FILE_NAME: &str = "status.yaml";

/// Trait for enablement flag persistence. Neither operation fails from the
/// caller's point of view: problems are logged and defaults are used instead
#[async_trait::async_trait]
pub trait StatusStorageTrait: Send + Sync {
    /// Load the stored flag, `true` if nothing usable is stored
    async fn load(&self) -> bool;

    /// Overwrite the stored flag
    async fn save(&self, enabled: bool);
}

fn default_enabled() -> bool {
    true
}

/// Serializable structure for the status record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusData {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for StatusData {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// In-memory status storage, nothing survives a restart
#[derive(Clone, Default)]
pub struct StatusMemoryStorage {
    data: Arc<Mutex<Option<StatusData>>>,
}

impl StatusMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StatusStorageTrait for StatusMemoryStorage {
    async fn load(&self) -> bool {
        let data_guard = self.data.lock().await;
        data_guard.clone().unwrap_or_default().enabled
    }

    async fn save(&self, enabled: bool) {
        let mut data_guard = self.data.lock().await;
        *data_guard = Some(StatusData { enabled });
    }
}

/// Status storage backed by a YAML file in the plugin data directory
#[derive(Clone)]
pub struct StatusFileStorage {
    storage_dir: PathBuf,
}

impl StatusFileStorage {
    pub fn new(storage_dir: PathBuf) -> Self {
        Self { storage_dir }
    }

    /// Get the path of the status file
    pub fn file_path(&self) -> PathBuf {
        self.storage_dir.join(STATUS_FILE_NAME)
    }

    async fn write_status(&self, data: &StatusData) -> Result<(), std::io::Error> {
        // Create directory if it doesn't exist
        fs::create_dir_all(&self.storage_dir).await?;

        match serde_yaml::to_string(data) {
            Ok(content) => fs::write(self.file_path(), content).await,
            Err(e) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to serialize status to YAML: {}", e),
            )),
        }
    }
}

#[async_trait::async_trait]
impl StatusStorageTrait for StatusFileStorage {
    async fn load(&self) -> bool {
        let file_path = self.file_path();
        match fs::read_to_string(&file_path).await {
            Ok(content) => match serde_yaml::from_str::<StatusData>(&content) {
                Ok(data) => data.enabled,
                Err(e) => {
                    log::error!("Failed to parse plugin status {:?}: {}", file_path, e);
                    default_enabled()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No plugin status at {:?}, starting enabled", file_path);
                default_enabled()
            }
            Err(e) => {
                log::error!("Failed to load plugin status {:?}: {}", file_path, e);
                default_enabled()
            }
        }
    }

    async fn save(&self, enabled: bool) {
        let file_path = self.file_path();
        match self.write_status(&StatusData { enabled }).await {
            Ok(()) => log::info!("Saved plugin status enabled={} to {:?}", enabled, file_path),
            Err(e) => log::error!("Failed to save plugin status {:?}: {}", file_path, e),
        }
    }
}
