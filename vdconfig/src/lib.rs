//! # VidDeck Configuration Module
//!
//! This module provides configuration management for VidDeck, including:
//! - Loading configuration from YAML files
//! - Merging with embedded default configuration
//! - Environment variable overrides
//! - Type-safe getters and setters for configuration values
//! - Thread-safe singleton access pattern
//!
//! ## Usage
//!
//! ```no_run
//! use vdconfig::get_config;
//!
//! // Get the global configuration
//! let config = get_config();
//!
//! // Access configuration values
//! let port = config.get_dlna_port();
//! let aspect = config.get_player_aspect();
//! ```

use anyhow::{Result, anyhow};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Number, Value};
use std::collections::HashSet;
use std::{
    env, fs,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::info;
use uuid::Uuid;
use vdutils::{get_os_string, guess_local_ip};

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("viddeck.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> =
        Arc::new(Config::load_config("").expect("Failed to load VidDeck configuration"));
}

const ENV_CONFIG_DIR: &str = "VIDDECK_CONFIG";
const ENV_PREFIX: &str = "VIDDECK_CONFIG__";

// Default values for configuration
const DEFAULT_DLNA_PORT: u16 = 9958;
const DEFAULT_PLAYER_ASPECT: &str = "-1";

/// Configuration manager for VidDeck
///
/// This structure manages the application configuration, including:
/// - Loading configuration from YAML files
/// - Merging with default configuration
/// - Handling environment variable overrides
/// - Providing typed getters/setters for configuration values
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

// Implémentation manuelle de Clone
impl Clone for Config {
    fn clone(&self) -> Self {
        let data = self.data.lock().unwrap().clone();
        Self {
            config_dir: self.config_dir.clone(),
            path: self.path.clone(),
            data: Mutex::new(data),
        }
    }
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        // 1. Try provided directory
        if !directory.is_empty() {
            return directory.to_string();
        }

        // 2. Try environment variable
        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var=ENV_CONFIG_DIR, path=%env_path, "Trying to load config from env");
            return env_path;
        }

        // 3. Try current directory
        if Path::new(".viddeck").exists() {
            return ".viddeck".to_string();
        }

        // 4. Try home directory
        if let Some(home) = home_dir() {
            let home_config = home.join(".viddeck");
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        // Default fallback
        ".viddeck".to_string()
    }

    /// Validates and prepares a config directory
    fn validate_config_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(anyhow!("Le chemin spécifié n'est pas un répertoire"));
        }

        // Test write permission
        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `VIDDECK_CONFIG` environment variable
    /// 3. `.viddeck` in the current directory
    /// 4. `.viddeck` in the user's home directory
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or validated
    pub fn config_dir(directory: &str) -> String {
        let dir_path = Self::find_config_dir(directory);
        let path = Path::new(&dir_path);

        Self::validate_config_dir(path)
            .expect("Impossible de valider le répertoire de configuration");

        dir_path
    }

    /// Loads the configuration from the specified directory
    ///
    /// This method:
    /// 1. Determines the configuration directory
    /// 2. Loads the default embedded configuration
    /// 3. Merges it with the external config.yaml file if present
    /// 4. Applies environment variable overrides
    /// 5. Saves the merged configuration
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::config_dir(directory);
        info!(config_dir=%config_dir, "Using config directory");

        let config_file_path = Path::new(&config_dir).join("config.yaml");
        let path = config_file_path.to_string_lossy().to_string();

        // Charger la configuration par défaut
        let mut default_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        // Essayer de charger le fichier de configuration
        let yaml_data = if let Ok(data) = fs::read(&path) {
            info!(config_file=%path, "Loaded config file");
            data
        } else {
            info!(config_file=%path, "Config file not found, using default embedded config");
            DEFAULT_CONFIG.as_bytes().to_vec()
        };

        // Merger avec la config par défaut
        let external_value: Value = serde_yaml::from_slice(&yaml_data)?;
        merge_yaml(&mut default_value, &external_value);
        let mut config_value = Self::lower_keys_value(default_value);

        // Appliquer les overrides depuis les variables d'environnement
        Self::apply_env_overrides(&mut config_value);

        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        config.save()?;
        Ok(config)
    }

    /// Saves the current configuration to the config.yaml file
    pub fn save(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        let yaml = serde_yaml::to_string(&*data)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["dlna", "port"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        Self::set_value_internal(&mut data, path, value)?;
        drop(data);
        self.save()?;
        Ok(())
    }

    fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
        if path.is_empty() {
            *data = value;
            return Ok(());
        }
        if let Value::Mapping(map) = data {
            let key = path[0].to_lowercase();
            let key_value = Value::String(key.clone());
            if path.len() == 1 {
                map.insert(key_value, value);
            } else {
                let entry = map
                    .entry(key_value)
                    .or_insert(Value::Mapping(Mapping::new()));
                Self::set_value_internal(entry, &path[1..], value)?;
            }
            Ok(())
        } else {
            Err(anyhow!("Current node is not a map"))
        }
    }

    /// Gets a configuration value at the specified path
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.data.lock().unwrap();
        Self::get_value_internal(&data, path)
    }

    fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
        let mut current = data;
        for (i, key) in path.iter().enumerate() {
            if let Value::Mapping(map) = current {
                let key = key.to_lowercase();

                if let Some(next) = map.get(&Value::String(key)) {
                    current = next;
                } else {
                    return Err(anyhow!("Path {} does not exist", path[..=i].join(".")));
                }
            } else {
                return Err(anyhow!("Path {} is not a Config", path[..i].join(".")));
            }
        }
        Ok(current.clone())
    }

    fn apply_env_overrides(config: &mut Value) {
        for (key, value) in env::vars() {
            if key.starts_with(ENV_PREFIX) {
                let key_path = key
                    .trim_start_matches(ENV_PREFIX)
                    .split("__")
                    .collect::<Vec<_>>();
                let yaml_value = Self::convert_env_value(&value);
                let _ = Self::set_value_internal(config, &key_path, yaml_value);
            }
        }
    }

    fn convert_env_value(value: &str) -> Value {
        if let Ok(parsed) = serde_yaml::from_str::<Value>(value) {
            return parsed;
        }
        Value::String(value.to_string())
    }

    fn lower_keys_value(value: Value) -> Value {
        match value {
            Value::Mapping(map) => {
                let mut new_map = Mapping::new();
                for (k, v) in map {
                    if let Value::String(s) = k {
                        let new_key = Value::String(s.to_lowercase());
                        new_map.insert(new_key, Self::lower_keys_value(v));
                    } else {
                        new_map.insert(k, Self::lower_keys_value(v));
                    }
                }
                Value::Mapping(new_map)
            }
            Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Self::lower_keys_value).collect())
            }
            _ => value,
        }
    }

    /// Rapport d'affichage appliqué au moteur de lecture ("-1" = automatique).
    pub fn get_player_aspect(&self) -> String {
        match self.get_value(&["player", "aspect"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            Ok(Value::Number(n)) => n.to_string(),
            _ => DEFAULT_PLAYER_ASPECT.to_string(),
        }
    }

    /// Adresse IP annoncée par le renderer DLNA.
    ///
    /// Retourne l'adresse configurée, ou l'adresse IP locale devinée si la
    /// configuration est vide.
    pub fn get_dlna_ip(&self) -> String {
        match self.get_value(&["dlna", "ip"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => guess_local_ip(),
        }
    }

    /// Port d'écoute du renderer DLNA (défaut : 9958).
    pub fn get_dlna_port(&self) -> u16 {
        match self.get_value(&["dlna", "port"]) {
            Ok(Value::Number(n)) if n.is_i64() => n.as_i64().unwrap() as u16,
            Ok(Value::String(s)) => match s.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(
                        "Invalid DLNA port '{}', using default {}",
                        s,
                        DEFAULT_DLNA_PORT
                    );
                    DEFAULT_DLNA_PORT
                }
            },
            _ => DEFAULT_DLNA_PORT,
        }
    }

    /// Sets the DLNA port in configuration
    pub fn set_dlna_port(&self, port: u16) -> Result<()> {
        let n = Number::from(port);
        self.set_value(&["dlna", "port"], Value::Number(n))
    }

    /// Nom du device annoncé aux points de contrôle.
    ///
    /// Retourne le nom configuré, ou "VidDeck <plateforme>" si la
    /// configuration est vide.
    pub fn get_dlna_name(&self) -> String {
        match self.get_value(&["dlna", "name"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => format!("VidDeck {}", get_os_string()),
        }
    }

    /// Identifiant persistant du client, généré au premier accès.
    ///
    /// Cet identifiant sert de graine à la dérivation déterministe de l'UDN
    /// du renderer : un même client annonce toujours le même device.
    pub fn get_client_id(&self) -> Result<String> {
        match self.get_value(&["client", "id"]) {
            Ok(Value::String(id)) if !id.is_empty() => Ok(id),
            _ => {
                let new_id = Uuid::new_v4().to_string();
                self.set_value(&["client", "id"], Value::String(new_id.clone()))?;
                Ok(new_id)
            }
        }
    }

    /// Ensemble des propriétaires de contenu masqués dans les listes.
    pub fn get_banned_owners(&self) -> HashSet<u64> {
        match self.get_value(&["client", "banned_owners"]) {
            Ok(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|v| match v {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.parse::<u64>().ok(),
                    _ => None,
                })
                .collect(),
            _ => HashSet::new(),
        }
    }

    /// Teste l'appartenance d'un propriétaire à la liste de bannissement.
    pub fn is_owner_banned(&self, mid: u64) -> bool {
        self.get_banned_owners().contains(&mid)
    }

    /// Répertoire de configuration effectif.
    pub fn dir(&self) -> &str {
        &self.config_dir
    }
}

/// Returns the global configuration instance
///
/// This function provides access to the singleton configuration instance,
/// which is lazily loaded on first access.
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

/// Merges external YAML configuration into default configuration
///
/// This function recursively merges two YAML value trees:
/// - For mappings (objects), it merges keys from external into default
/// - For scalars and sequences, external values replace default values
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (Value::Mapping(dmap), Value::Mapping(emap)) => {
            for (k, v) in emap {
                match dmap.get_mut(k) {
                    Some(dv) => merge_yaml(dv, v),
                    None => {
                        dmap.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (d, e) => *d = e.clone(), // pour les scalaires ou séquences, on remplace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config::load_config(dir.path().to_str().unwrap()).unwrap()
    }

    #[test]
    fn defaults_are_available_without_a_config_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        assert_eq!(config.get_dlna_port(), 9958);
        assert_eq!(config.get_player_aspect(), "-1");
        assert!(config.get_banned_owners().is_empty());
    }

    #[test]
    fn external_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "dlna:\n  port: 1900\n  name: Salon\nclient:\n  banned_owners: [42, \"7\"]\n",
        )
        .unwrap();

        let config = config_in(&dir);
        assert_eq!(config.get_dlna_port(), 1900);
        assert_eq!(config.get_dlna_name(), "Salon");
        assert!(config.is_owner_banned(42));
        assert!(config.is_owner_banned(7));
        assert!(!config.is_owner_banned(8));
    }

    #[test]
    fn client_id_is_generated_once_and_persisted() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let first = config.get_client_id().unwrap();
        assert!(!first.is_empty());
        let second = config.get_client_id().unwrap();
        assert_eq!(first, second);

        // Un rechargement depuis le même répertoire retrouve le même id
        let reloaded = config_in(&dir);
        assert_eq!(reloaded.get_client_id().unwrap(), first);
    }

    #[test]
    fn set_value_round_trips_through_save() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        config.set_dlna_port(9959).unwrap();
        assert_eq!(config.get_dlna_port(), 9959);

        let reloaded = config_in(&dir);
        assert_eq!(reloaded.get_dlna_port(), 9959);
    }
}
