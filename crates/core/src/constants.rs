//! Well-known tokens of the job layout and generated scripts
//!
//! These literals are part of the execution contract: job-launch scripts
//! reference the generated directories and variables by these exact names,
//! so renaming any of them breaks running jobs.

/// Root directory for all assembled resources inside a job working directory.
pub const GENIE_DIR: &str = "genie";

/// Sub-directory holding a resource instance's configuration files.
pub const CONFIG_DIR: &str = "config";

/// Sub-directory holding a resource instance's dependency files.
pub const DEPENDENCIES_DIR: &str = "dependencies";

/// Environment variable the job shell resolves to the job working directory.
pub const GENIE_JOB_DIR_ENV_VAR: &str = "GENIE_JOB_DIR";

/// Shell directive prefix used when sourcing a setup file.
pub const SOURCE_DIRECTIVE: &str = "source ";

/// Path delimiter of the layout contract.
pub const FILE_PATH_DELIMITER: char = '/';
