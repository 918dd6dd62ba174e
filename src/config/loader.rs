//! Parameter file loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{VacationError, VacationResult};
use crate::store::ParameterStore;

/// On-disk shape of the parameter file.
///
/// ```yaml
/// parameters:
///   vacation_days: "15"
/// ```
#[derive(Debug, Deserialize)]
struct ParameterFile {
    parameters: HashMap<String, String>,
}

/// Loads system parameters from a YAML file and serves them as a
/// [`ParameterStore`].
///
/// Values are kept as strings; consumers parse them into the type they
/// need, mirroring how the back-office parameter table stores them.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    parameters: HashMap<String, String>,
}

impl ConfigLoader {
    /// Loads parameters from the given YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`VacationError::ConfigNotFound`] if the file is missing
    /// and [`VacationError::ConfigParseError`] if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> VacationResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| VacationError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: ParameterFile =
            serde_yaml::from_str(&content).map_err(|e| VacationError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            parameters: file.parameters,
        })
    }
}

impl ParameterStore for ConfigLoader {
    fn get_value(&self, key: &str) -> Option<String> {
        self.parameters.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::VACATION_DAYS_KEY;

    fn config_path() -> &'static str {
        "./config/parameters.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.get_value(VACATION_DAYS_KEY), Some("15".to_string()));
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.get_value("unknown_key"), None);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/parameters.yaml");
        match result {
            Err(VacationError::ConfigNotFound { path }) => {
                assert!(path.contains("parameters.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other.err()),
        }
    }
}
