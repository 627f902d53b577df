//! Resource and file-category vocabulary for the job layout
//!
//! The path tokens returned here are fixed: downstream job-launch scripts
//! reference the assembled directories by these exact names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR, DEPENDENCIES_DIR};
use crate::error::EnvironmentError;

/// Kinds of catalog resources a job depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Application,
    Command,
    Cluster,
}

impl ResourceKind {
    /// Directory token used when naming this resource's directories
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Application => "application",
            ResourceKind::Command => "command",
            ResourceKind::Cluster => "cluster",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ResourceKind {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application" => Ok(ResourceKind::Application),
            "command" => Ok(ResourceKind::Command),
            "cluster" => Ok(ResourceKind::Cluster),
            other => Err(EnvironmentError::Validation(format!(
                "unsupported resource kind: {other}"
            ))),
        }
    }
}

/// Purpose of a file staged for a resource instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Config,
    Setup,
    Dependency,
}

impl FileCategory {
    /// Sub-directory token for this category, if any.
    ///
    /// Setup files live at the resource instance root and carry no
    /// sub-segment.
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            FileCategory::Config => Some(CONFIG_DIR),
            FileCategory::Setup => None,
            FileCategory::Dependency => Some(DEPENDENCIES_DIR),
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileCategory::Config => "config",
            FileCategory::Setup => "setup",
            FileCategory::Dependency => "dependency",
        };
        f.write_str(name)
    }
}

impl FromStr for FileCategory {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "config" => Ok(FileCategory::Config),
            "setup" => Ok(FileCategory::Setup),
            "dependency" => Ok(FileCategory::Dependency),
            other => Err(EnvironmentError::Validation(format!(
                "unsupported file category: {other}"
            ))),
        }
    }
}
