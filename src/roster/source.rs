//! Employee data sources.
//!
//! The engine takes a `&[Employee]` and never asks where it came from. A
//! source only has to produce the records: [`FileSource`] reads an HR export,
//! [`SyntheticSource`](super::SyntheticSource) generates a demo population.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Supplies employee records.
pub trait EmployeeSource: Send + Sync {
    /// A short label for logs and error messages.
    fn name(&self) -> String;

    /// Produces the employee records.
    fn load(&self) -> EngineResult<Vec<Employee>>;
}

/// Reads a list of employees from a JSON or YAML file.
///
/// The format follows the extension: `.json`, or `.yaml`/`.yml`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl Into<String>) -> EngineError {
        EngineError::DataSourceError {
            source_name: self.name(),
            message: message.into(),
        }
    }
}

impl EmployeeSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> EngineResult<Vec<Employee>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.error(e.to_string()))?;

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => serde_json::from_str(&content).map_err(|e| self.error(e.to_string())),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| self.error(e.to_string()))
            }
            _ => Err(self.error("expected a .json, .yaml or .yml file")),
        }
    }
}
