//! Assembly configuration
//!
//! Configuration for the job environment assembly components, loaded from
//! environment variables with sane defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use genie_core::{EnvironmentError, Result};

/// Configuration for job environment assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Root directory under which per-job working directories are created
    pub jobs_dir: PathBuf,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            jobs_dir: PathBuf::from("/tmp/genie/jobs"),
        }
    }
}

impl AssemblyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let jobs_dir = std::env::var("GENIE_JOBS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default().jobs_dir);

        let config = Self { jobs_dir };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.jobs_dir.as_os_str().is_empty() {
            return Err(EnvironmentError::Validation(
                "jobs directory cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Working directory assigned to a job
    pub fn job_working_dir(&self, job_id: &str) -> PathBuf {
        self.jobs_dir.join(job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs_dir() {
        let config = AssemblyConfig::default();
        assert_eq!(config.jobs_dir, PathBuf::from("/tmp/genie/jobs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_job_working_dir_is_under_the_jobs_root() {
        let config = AssemblyConfig {
            jobs_dir: PathBuf::from("/var/lib/genie/jobs"),
        };
        assert_eq!(
            config.job_working_dir("job-42"),
            PathBuf::from("/var/lib/genie/jobs/job-42")
        );
    }

    #[test]
    fn test_blank_jobs_dir_is_rejected() {
        let config = AssemblyConfig {
            jobs_dir: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(EnvironmentError::Validation(_))
        ));
    }
}
