//! Configuration management for gitsecret.
//!
//! Values are resolved from several layers, highest priority first:
//! 1. Environment variables (`GITSECRET_NAMESPACE`, `GITSECRET_LOG__LEVEL`, ...)
//! 2. Programmatically set values
//! 3. Values loaded from the YAML config file
//! 4. Built-in defaults
//!
//! Keys are dotted paths (`log.level`). In environment variable names a
//! double underscore separates path segments.
//!
//! ## Example
//!
//! ```no_run
//! use gitsecret_core::config::Config;
//!
//! let mut config = Config::load_default()?.with_env_prefix("GITSECRET");
//! config.set("log.level", "DEBUG")?;
//!
//! let namespace: String = config.get("namespace").unwrap_or_default();
//! let defaults = config.defaults()?;
//! # Ok::<(), gitsecret_core::GitSecretError>(())
//! ```

use gitsecret_types::config::Defaults;
use gitsecret_types::{GitSecretError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Schema every merged configuration must satisfy.
const DEFAULTS_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "namespace": { "type": "string", "minLength": 1 },
    "target_path": { "type": "string" },
    "manifest_file": { "type": "string", "minLength": 1 },
    "key_algorithm": { "enum": ["rsa", "ecdsa", "ed25519"] },
    "rsa_bits": { "type": "integer", "minimum": 1024, "maximum": 16384 },
    "ecdsa_curve": { "enum": ["p256", "p384", "p521"] },
    "log": {
      "type": "object",
      "properties": {
        "path": { "type": ["string", "null"] },
        "level": { "enum": ["NONE", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"] },
        "format": { "enum": ["pretty", "json", "compact"] }
      }
    }
  }
}"#;

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
    /// Values from environment variables
    Environment = 3,
}

impl ConfigLayer {
    const ASCENDING: [ConfigLayer; 4] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Set,
        ConfigLayer::Environment,
    ];
}

/// Layered configuration.
#[derive(Clone, Debug)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Configuration holding only the built-in defaults.
    pub fn new() -> Result<Self> {
        let mut layers = HashMap::new();
        layers.insert(ConfigLayer::Default, serde_json::to_value(Defaults::default())?);

        Ok(Self {
            layers,
            file_path: None,
        })
    }

    /// Create a configuration from a file path.
    ///
    /// A missing file is not an error; only the defaults apply then.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::new()?;
        config.file_path = Some(path.to_path_buf());

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| GitSecretError::Config(format!("Failed to read config file: {}", e)))?;

            let value: Value = serde_yaml::from_str(&content)
                .map_err(|e| GitSecretError::Config(format!("Failed to parse config: {}", e)))?;

            debug!(path = %path.display(), "loaded configuration file");
            if !value.is_null() {
                config.layers.insert(ConfigLayer::Loaded, value);
            }
        }

        Ok(config)
    }

    /// Load from [`Config::default_path`], or defaults only when no config
    /// directory exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(path),
            None => Self::new(),
        }
    }

    /// `<config_dir>/gitsecret/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.yaml"))
    }

    /// Path of the loaded file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Populate the environment layer from process variables starting with
    /// `<prefix>_`.
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_vars(prefix, std::env::vars())
    }

    fn with_env_vars(mut self, prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let prefix = format!("{}_", prefix);
        let mut env_layer = Value::Object(Default::default());

        for (name, raw) in vars {
            let Some(key) = name.strip_prefix(&prefix) else {
                continue;
            };
            let path = key.to_lowercase().replace("__", ".");
            if path.is_empty() {
                continue;
            }
            // Accept numbers and booleans unquoted; anything else stays a string.
            let value = match serde_yaml::from_str::<Value>(&raw) {
                Ok(Value::Null) | Err(_) => Value::String(raw),
                Ok(v) => v,
            };
            if Self::set_value_at_path(&mut env_layer, &path, value).is_ok() {
                debug!(variable = %name, "configuration override from environment");
            }
        }

        self.layers.insert(ConfigLayer::Environment, env_layer);
        self
    }

    /// Get a configuration value by dotted key from the merged layers.
    ///
    /// Returns None if the key doesn't exist or doesn't convert to `T`.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let merged = self.merged();
        let value = Self::get_value_at_path(&merged, key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| GitSecretError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Default::default()));

        Self::set_value_at_path(set_layer, key, value)
    }

    /// Get merged data from all layers.
    pub fn merged(&self) -> Value {
        let mut merged = Value::Object(serde_json::Map::new());

        for layer in &ConfigLayer::ASCENDING {
            if let Some(layer_data) = self.layers.get(layer) {
                merged = crate::util::data::deep_merge(merged, layer_data.clone());
            }
        }

        merged
    }

    /// Validate the merged configuration against the schema.
    pub fn validate(&self) -> Result<()> {
        let schema: Value = serde_json::from_str(DEFAULTS_SCHEMA)?;
        let instance = self.merged();

        let compiled = jsonschema::JSONSchema::compile(&schema)
            .map_err(|e| GitSecretError::Bug(format!("Invalid configuration schema: {}", e)))?;

        let result = compiled.validate(&instance);
        if let Err(errors) = result {
            let error_msgs: Vec<String> = errors
                .map(|e| format!("{} (at '{}')", e, e.instance_path))
                .collect();
            return Err(GitSecretError::Config(format!(
                "Validation failed: {}",
                error_msgs.join(", ")
            )));
        }
        Ok(())
    }

    /// Validate and convert into the typed [`Defaults`] view.
    pub fn defaults(&self) -> Result<Defaults> {
        self.validate()?;
        serde_json::from_value(self.merged())
            .map_err(|e| GitSecretError::Config(format!("Failed to parse configuration: {}", e)))
    }

    // Helper: Get value at dotted path
    fn get_value_at_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
        path.split('.').try_fold(data, |current, part| current.get(part))
    }

    // Helper: Set value at dotted path, creating intermediate objects
    fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
        let mut parts: Vec<&str> = path.split('.').collect();
        let last = match parts.pop() {
            Some(last) if !last.is_empty() => last,
            _ => gitsecret_types::bail!(Config, "Invalid key: '{}'", path),
        };

        let mut current = data;
        for part in parts {
            if !current.is_object() {
                *current = Value::Object(Default::default());
            }
            let Value::Object(map) = current else {
                gitsecret_types::bug!("config path segment '{}' is not an object", part);
            };
            current = map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }

        match current {
            Value::Object(map) => {
                map.insert(last.to_string(), value);
            }
            other => {
                let mut map = serde_json::Map::new();
                map.insert(last.to_string(), value);
                *other = Value::Object(map);
            }
        }

        Ok(())
    }
}
