use std::io::ErrorKind;

use arcade_engine::Validate;
use serde::{Deserialize, Serialize};

pub trait ContentProvider {
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: String,
}

impl FileContentProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ContentProvider for FileContentProvider {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read preferences file {}: {}", self.file_path, err)),
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write preferences file {}: {}", self.file_path, e))
    }
}

/// Loads and saves YAML preferences. A missing file yields the defaults.
pub struct PreferencesStore<TProvider: ContentProvider> {
    provider: TProvider,
}

impl PreferencesStore<FileContentProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path.to_string()))
    }
}

impl<TProvider: ContentProvider> PreferencesStore<TProvider> {
    pub fn new(provider: TProvider) -> Self {
        Self { provider }
    }

    pub fn load<T>(&self) -> Result<T, String>
    where
        T: for<'de> Deserialize<'de> + Validate + Default,
    {
        let Some(content) = self.provider.read()? else {
            return Ok(T::default());
        };

        let value: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse preferences: {}", e))?;
        value
            .validate()
            .map_err(|e| format!("Preferences validation error: {}", e))?;
        Ok(value)
    }

    pub fn save<T>(&self, value: &T) -> Result<(), String>
    where
        T: Serialize + Validate,
    {
        value
            .validate()
            .map_err(|e| format!("Preferences validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(value)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;
        self.provider.write(&content)
    }
}
