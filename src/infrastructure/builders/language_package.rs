//! Language-package mode: wheel for Python, CPAN distribution for Perl

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{artifact_file_name, ApplicationConfig, Artifact};
use crate::domain::ports::{ArtifactBuilder, BuildContext, EventLevel, ToolInvocation};
use crate::domain::services::select_single;
use crate::domain::value_objects::Version;
use crate::error::{BuildError, DeployResult};
use crate::infrastructure::fs::describe_artifact;

use super::{ensure_output_dir, publish, run_checked, stage_tree, BuildWorkspace, Toolchain};

/// Runs the language's packaging tool on a staged copy of the source tree
#[derive(Debug)]
pub struct LanguagePackageBuilder {
    name: String,
    toolchain: &'static Toolchain,
    context: BuildContext,
}

impl LanguagePackageBuilder {
    pub fn new(toolchain: &'static Toolchain, context: BuildContext) -> Self {
        Self {
            name: format!("{}-package", toolchain.language),
            toolchain,
            context,
        }
    }
}

impl ArtifactBuilder for LanguagePackageBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, app: &ApplicationConfig, version: &Version) -> DeployResult<Artifact> {
        let recipe = &self.toolchain.package;
        let suffix = recipe.kind.extension();
        let source_dir = app.require_source_dir()?;

        let workspace = BuildWorkspace::create(self.context.workspace_parent.as_deref())?;
        let root = workspace.path();
        let staged = stage_tree(source_dir, root)?;
        self.context.events.diagnostic(
            EventLevel::Debug,
            &self.name,
            format!("staged {} files into {}", staged, root.display()),
        );

        if !root.join(recipe.descriptor).is_file() {
            return Err(BuildError::MissingDescriptor {
                descriptor: recipe.descriptor.to_string(),
                dir: root.to_path_buf(),
            }
            .into());
        }

        let scan_dir = match recipe.output_subdir {
            Some(sub) => root.join(sub),
            None => root.to_path_buf(),
        };
        // Packages already present in the source tree are not build output.
        let preexisting = files_with_suffix(&scan_dir, suffix)?;

        for step in (recipe.steps)(&self.context.tools) {
            run_checked(
                &self.context,
                ToolInvocation::new(step.program, root).args(step.args.iter().copied()),
            )?;
        }

        let produced: Vec<PathBuf> = files_with_suffix(&scan_dir, suffix)?
            .difference(&preexisting)
            .cloned()
            .collect();
        let package = select_single(produced, suffix, &scan_dir)?;

        let output_dir = ensure_output_dir(&self.context)?;
        let dest = output_dir.join(artifact_file_name(app.name(), version, recipe.kind));
        publish(&package, &dest)?;

        Ok(describe_artifact(&dest, recipe.kind)?)
    }
}

/// Regular files directly inside `dir` whose name ends with `suffix`.
/// A missing directory has none.
fn files_with_suffix(dir: &Path, suffix: &str) -> Result<BTreeSet<PathBuf>, BuildError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(e) => return Err(BuildError::io(dir, e)),
    };

    let mut found = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::io(dir, e))?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix));
        if matches && path.is_file() {
            found.insert(path);
        }
    }
    Ok(found)
}
