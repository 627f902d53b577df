//! Environment script generation
//!
//! Appends per-resource sourcing fragments to the job's master environment
//! script. Absolute paths under the job working directory are rewritten to
//! `${GENIE_JOB_DIR}` references, so the generated script stays valid when
//! the job directory is mounted at a different absolute location on the
//! execution host.

use prometheus::Registry;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use genie_core::constants::{GENIE_JOB_DIR_ENV_VAR, SOURCE_DIRECTIVE};
use genie_core::Result;

/// Writes setup-file sourcing fragments for job resources.
#[derive(Clone)]
pub struct SetupScriptEmitter {
    registry: Registry,
}

impl SetupScriptEmitter {
    /// Create an emitter holding the injected metrics registry handle.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Metrics registry handle shared with sibling components.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append the sourcing fragment for one resource's setup file.
    ///
    /// Writes a comment identifying the resource, a `source` directive whose
    /// path has the literal `job_working_dir` replaced by the job-directory
    /// variable reference, and a blank separator line. The substitution is a
    /// plain string replacement; the rest of the path is left untouched.
    ///
    /// The sink is the job's single environment script, so callers emit one
    /// resource at a time in processing order: later resources may override
    /// variables exported by earlier ones.
    ///
    /// # Errors
    /// Returns `EnvironmentError::Io` if the sink rejects a write. The
    /// fragment may be partially written and the caller must discard the
    /// output.
    pub async fn emit_setup_sourcing<W>(
        &self,
        resource_id: &str,
        resource_type_label: &str,
        setup_file_path: &str,
        job_working_dir: &str,
        sink: &mut W,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        debug!(
            resource_id,
            resource_type = resource_type_label,
            "Emitting setup sourcing fragment"
        );

        let comment = format!("# Sourcing setup file from {resource_type_label} {resource_id}\n");
        sink.write_all(comment.as_bytes()).await?;

        let job_dir_var = format!("${{{GENIE_JOB_DIR_ENV_VAR}}}");
        let directive = format!(
            "{SOURCE_DIRECTIVE}{}\n",
            setup_file_path.replace(job_working_dir, &job_dir_var)
        );
        sink.write_all(directive.as_bytes()).await?;

        sink.write_all(b"\n").await?;

        Ok(())
    }
}
