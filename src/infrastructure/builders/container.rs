//! Container-image mode: Dockerfile synthesis, `docker build`, `docker save`

use crate::domain::entities::{artifact_file_name, ApplicationConfig, Artifact, ArtifactKind};
use crate::domain::ports::{ArtifactBuilder, BuildContext, ToolInvocation};
use crate::domain::services::{image_reference, Dockerfile, ImageSpec};
use crate::domain::value_objects::Version;
use crate::error::{BuildError, DeployResult};
use crate::infrastructure::fs::describe_artifact;

use super::{ensure_output_dir, publish, run_checked, stage_tree, BuildWorkspace, Toolchain};

/// Directory inside the workspace used as the docker build context
const CONTEXT_DIR: &str = "context";
const DOCKERFILE: &str = "Dockerfile";
/// `docker save` target inside the workspace; published only once complete
const SAVED_IMAGE: &str = "image.docker.tar";

#[derive(Debug)]
pub struct ContainerBuilder {
    name: String,
    toolchain: &'static Toolchain,
    context: BuildContext,
}

impl ContainerBuilder {
    pub fn new(toolchain: &'static Toolchain, context: BuildContext) -> Self {
        Self {
            name: format!("{}-container", toolchain.language),
            toolchain,
            context,
        }
    }

    /// `<language>_base_image`, then `base_image`, then the toolchain default
    fn base_image(&self, app: &ApplicationConfig) -> String {
        let options = app.options();
        options
            .get_str(&self.toolchain.base_image_option())
            .or_else(|| options.get_str("base_image"))
            .unwrap_or(self.toolchain.container.default_base_image)
            .to_string()
    }

    pub fn dockerfile(
        &self,
        app: &ApplicationConfig,
        version: &Version,
    ) -> DeployResult<Dockerfile> {
        let recipe = &self.toolchain.container;
        Ok(Dockerfile::synthesize(&ImageSpec {
            app_name: app.name().to_string(),
            version: version.clone(),
            base_image: self.base_image(app),
            workdir: recipe.workdir.to_string(),
            setup: recipe.setup.iter().map(|s| s.to_string()).collect(),
            extra: app.string_list_option("docker_commands")?,
        }))
    }
}

impl ArtifactBuilder for ContainerBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, app: &ApplicationConfig, version: &Version) -> DeployResult<Artifact> {
        let source_dir = app.require_source_dir()?;
        let dockerfile = self.dockerfile(app, version)?;
        let workspace = BuildWorkspace::create(self.context.workspace_parent.as_deref())?;
        let root = workspace.path();
        stage_tree(source_dir, &root.join(CONTEXT_DIR))?;

        let dockerfile_path = root.join(DOCKERFILE);
        std::fs::write(&dockerfile_path, dockerfile.render())
            .map_err(|e| BuildError::io(&dockerfile_path, e))?;

        let image = image_reference(app.name(), version);
        let docker = &self.context.tools.docker;
        run_checked(
            &self.context,
            ToolInvocation::new(docker.clone(), root).args([
                "build",
                "-t",
                image.as_str(),
                "-f",
                DOCKERFILE,
                CONTEXT_DIR,
            ]),
        )?;

        let saved = root.join(SAVED_IMAGE);
        run_checked(
            &self.context,
            ToolInvocation::new(docker.clone(), root)
                .arg("save")
                .arg("-o")
                .arg(saved.to_string_lossy())
                .arg(image.as_str()),
        )?;

        let output_dir = ensure_output_dir(&self.context)?;
        let archive = output_dir.join(artifact_file_name(
            app.name(),
            version,
            ArtifactKind::ImageArchive,
        ));
        publish(&saved, &archive)?;

        Ok(describe_artifact(&archive, ArtifactKind::ImageArchive)?)
    }
}
