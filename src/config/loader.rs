//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the vacation
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::VacationPolicy;

/// Loads and provides access to the vacation policy.
///
/// The `PolicyLoader` reads `policy.yaml` from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Pool sizes, flexible threshold, advance accrual
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// println!("Flexible pool: {}", loader.policy().flexible_days_available);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: VacationPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if the
    /// policy file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &VacationPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> VacationPolicy {
        self.policy
    }
}
