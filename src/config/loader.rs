//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LeavePolicy, PolicyFile, WithholdingFile};

/// Loads and provides access to the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── policy.yaml       # Accrual tiers, working hours, warning window
/// └── withholding.yaml  # Flat withholding brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory").unwrap();
/// println!("Jurisdiction: {}", loader.policy().jurisdiction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or a missing field (`ConfigParseError`)
    /// - The combined policy is inconsistent (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let withholding_path = path.join("withholding.yaml");
        let withholding_file = Self::load_yaml::<WithholdingFile>(&withholding_path)?;

        let policy = LeavePolicy::from_files(policy_file, withholding_file);
        policy
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            })?;

        tracing::debug!(
            path = %path.display(),
            jurisdiction = %policy.jurisdiction,
            brackets = policy.withholding.len(),
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Wraps the built-in statutory policy.
    pub fn statutory() -> Self {
        Self {
            policy: LeavePolicy::statutory(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}
