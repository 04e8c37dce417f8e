//! Archive packaging: `tar -czf` straight into the output directory

use crate::domain::entities::{artifact_file_name, ApplicationConfig, Artifact, ArtifactKind};
use crate::domain::ports::{ArtifactBuilder, BuildContext, ToolInvocation};
use crate::domain::value_objects::Version;
use crate::error::DeployResult;
use crate::infrastructure::fs::describe_artifact;

use super::{absolute, ensure_output_dir, run_checked, Toolchain};

/// Tars the configured source directory. No workspace is involved; the
/// source tree is only read.
#[derive(Debug)]
pub struct ArchiveBuilder {
    name: String,
    context: BuildContext,
}

impl ArchiveBuilder {
    pub fn new(toolchain: &'static Toolchain, context: BuildContext) -> Self {
        Self {
            name: format!("{}-archive", toolchain.language),
            context,
        }
    }
}

impl ArtifactBuilder for ArchiveBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, app: &ApplicationConfig, version: &Version) -> DeployResult<Artifact> {
        let source_dir = absolute(app.require_source_dir()?)?;
        let output_dir = ensure_output_dir(&self.context)?;
        let archive = output_dir.join(artifact_file_name(app.name(), version, ArtifactKind::Tarball));

        run_checked(
            &self.context,
            ToolInvocation::new(self.context.tools.tar.clone(), &source_dir)
                .arg("-czf")
                .arg(archive.to_string_lossy())
                .arg("-C")
                .arg(source_dir.to_string_lossy())
                .arg("."),
        )?;

        Ok(describe_artifact(&archive, ArtifactKind::Tarball)?)
    }
}
