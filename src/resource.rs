pub mod config;

use std::path::PathBuf;

use crate::prelude::{app_dir, AnyError};

pub trait ResourceFile
where
    Self: Default + serde::de::DeserializeOwned,
{
    const FILE_NAME: &'static str;

    fn path() -> PathBuf {
        app_dir().join(Self::FILE_NAME)
    }

    /// If the resource file does not exist, use default data and apply these modifications.
    fn initialize(self) -> Self {
        self
    }

    /// Update any legacy settings on load.
    fn migrate(self) -> Self {
        self
    }

    fn load() -> Result<Self, AnyError> {
        let path = Self::path();
        if !path.is_file() {
            return Ok(Self::default().initialize());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::load_from_string(&content)
    }

    fn load_from_string(content: &str) -> Result<Self, AnyError> {
        Ok(ResourceFile::migrate(serde_yaml::from_str(content)?))
    }
}

pub trait SaveableResourceFile
where
    Self: ResourceFile + serde::Serialize,
{
    fn save(&self) {
        let new_content = match serde_yaml::to_string(&self) {
            Ok(x) => x,
            Err(e) => {
                log::error!("Unable to serialize {}: {e:?}", Self::FILE_NAME);
                return;
            }
        };

        let path = Self::path();
        if let Ok(old_content) = std::fs::read_to_string(&path) {
            if old_content == new_content {
                return;
            }
        }

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::error!("Unable to create folder for {}: {e:?}", Self::FILE_NAME);
                return;
            }
        }

        if let Err(e) = std::fs::write(&path, new_content.as_bytes()) {
            log::error!("Unable to save {}: {e:?}", Self::FILE_NAME);
        }
    }
}
