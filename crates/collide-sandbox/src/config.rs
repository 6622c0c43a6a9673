// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service, storage port, and the filesystem adapter.

use std::fs;
use std::path::{Path, PathBuf};

use collide_physics::EngineConfig;
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::scenes::SceneKind;

/// Key under which [`SandboxConfig`] is stored.
pub const SANDBOX_CONFIG_KEY: &str = "sandbox";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Loads the value for `key`; `Ok(None)` when missing or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serializes and persists `value` under `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// JSON files under one directory, one file per key.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the platform config directory (e.g. `~/.config/collide`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Collide")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::in_dir(proj.config_dir())
    }

    /// Store rooted at `dir`, created if missing.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = dir.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

/// Persistent sandbox settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Engine strategy selection.
    pub engine: EngineConfig,
    /// Scene to run.
    pub scene: SceneKind,
    /// Frames to simulate.
    pub frames: u64,
    /// Fixed time step in seconds.
    pub dt: f32,
    /// Seed for scene layout.
    pub seed: u64,
    /// Polygon count for the bouncing scene.
    pub polygons: usize,
    /// Visible world height; the width follows from `aspect_ratio`.
    pub world_height: f32,
    /// Width over height of the simulated area.
    pub aspect_ratio: f32,
    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            scene: SceneKind::Bouncing,
            frames: 600,
            dt: 1.0 / 60.0,
            seed: 0x00c0_111d,
            polygons: 200,
            world_height: 50.0,
            aspect_ratio: 16.0 / 9.0,
            log_level: "info".into(),
        }
    }
}

impl SandboxConfig {
    /// Width of the simulated area.
    pub fn world_width(&self) -> f32 {
        self.world_height * self.aspect_ratio
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore(RefCell<HashMap<String, Vec<u8>>>);

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.0.borrow().get(key).cloned().ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.0.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_and_empty_load_as_none() {
        let svc = ConfigService::new(MemStore::default());
        assert!(svc.load::<SandboxConfig>("sandbox").unwrap().is_none());
        let store = svc.into_inner();
        store.save_raw("sandbox", b"").unwrap();
        let svc = ConfigService::new(store);
        assert!(svc.load::<SandboxConfig>("sandbox").unwrap().is_none());
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let store = MemStore::default();
        store
            .save_raw("sandbox", br#"{"frames": 5, "engine": {"broad_phase": "brute_force"}}"#)
            .unwrap();
        let cfg: SandboxConfig = ConfigService::new(store).load("sandbox").unwrap().unwrap();
        assert_eq!(cfg.frames, 5);
        assert_eq!(cfg.engine.broad_phase, collide_physics::BroadPhase::BruteForce);
        assert_eq!(cfg.engine.sat_kernel, collide_physics::SatKernel::Wide);
        assert!(cfg.engine.start_active);
        assert_eq!(cfg.scene, SceneKind::Bouncing);
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let store = MemStore::default();
        store.save_raw("sandbox", b"{ nope").unwrap();
        let err = ConfigService::new(store).load::<SandboxConfig>("sandbox").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }
}
