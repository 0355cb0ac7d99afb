use std::fs;
use std::path::Path;
use serde_derive::{Deserialize, Serialize};
use crate::errors::SynapseError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SynapseApiMode {
    Sandbox,
    Production,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SynapseSettings {
    pub client_id: String,
    pub client_secret: String,
    /// Device fingerprint sent with every request.
    pub fingerprint: String,
    /// IP address reported for the acting user.
    pub user_ip: String,
    pub mode: SynapseApiMode,
}

impl SynapseSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SynapseError> {
        let contents = fs::read_to_string(path)?;
        let settings: SynapseSettings = toml::from_str(&contents)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SynapseError> {
        let toml_string = toml::to_string(self).expect("Failed to serialize settings");
        fs::write(path, toml_string)?;
        Ok(())
    }
}
