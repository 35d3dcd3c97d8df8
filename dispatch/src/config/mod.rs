//! Configuration discovery, parsing and validation.
//!
//! A YAML document is deserialized into the `raw` structs and then checked
//! and converted into a [`DispatchConfig`].
//!
//! ```yaml
//! version: 1
//! sender:
//!   scope: singleton
//! handlers:
//!   - kind: foo
//!   - kind: bar
//!     scope: singleton
//! ```

pub mod processed;
pub mod raw;

pub use processed::{DispatchConfig, HandlerBinding};

use crate::error::{Error, Result};
use processed::process_raw_config;
use raw::ConfigRaw;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_BASE_NAME: &str = "courier";
const DEFAULT_CONFIG_EXTENSION: &str = "yaml";

/// Finds the configuration file in the current directory.
///
/// `courier.<env>.yaml` is preferred over `courier.yaml`, where `<env>` comes
/// from `environment_suffix`, then `COURIER_ENV`, then `APP_ENV`.
pub fn find_config_file(environment_suffix: Option<&str>) -> Result<PathBuf> {
  find_config_file_in(Path::new("."), environment_suffix)
}

/// Same as [`find_config_file`] but searching `dir`.
pub fn find_config_file_in(dir: &Path, environment_suffix: Option<&str>) -> Result<PathBuf> {
  let env_from_var = environment_suffix
    .map(|s| s.to_string())
    .or_else(|| env::var("COURIER_ENV").ok())
    .or_else(|| env::var("APP_ENV").ok());

  let mut files_to_check: Vec<String> = Vec::new();
  if let Some(env_str) = &env_from_var {
    if !env_str.is_empty() {
      files_to_check.push(format!(
        "{}.{}.{}",
        DEFAULT_CONFIG_BASE_NAME, env_str, DEFAULT_CONFIG_EXTENSION
      ));
    }
  }
  files_to_check.push(format!(
    "{}.{}",
    DEFAULT_CONFIG_BASE_NAME, DEFAULT_CONFIG_EXTENSION
  ));

  for file_name in &files_to_check {
    let path = dir.join(file_name);
    if path.is_file() {
      return Ok(path);
    }
  }

  Err(Error::ConfigNotFound(format!(
    "Searched for: {:?} in {:?}. Provide a config file or check COURIER_ENV/APP_ENV.",
    files_to_check, dir
  )))
}

/// Parses and validates a YAML document. An empty document yields the defaults.
pub fn from_yaml_str(yaml: &str) -> Result<DispatchConfig> {
  let raw = if yaml.trim().is_empty() {
    ConfigRaw::default()
  } else {
    serde_yaml::from_str::<ConfigRaw>(yaml).map_err(|e| Error::ConfigParse(e.to_string()))?
  };
  process_raw_config(raw)
}

/// Reads, parses and validates the configuration file at `config_path`.
pub fn load_from_file(config_path: &Path) -> Result<DispatchConfig> {
  debug!(path = ?config_path, "loading configuration");
  let contents = std::fs::read_to_string(config_path)?;
  from_yaml_str(&contents)
}
