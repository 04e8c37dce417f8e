//! Artifact Builders
//!
//! Three packaging modes, each parameterised by a [`Toolchain`]:
//!
//! - `archive` - tar the source tree straight into the output directory
//! - `language_package` - run the language's own packaging tool in a
//!   private workspace and keep the single package it produces
//! - `container` - synthesize a Dockerfile, build and save the image
//!
//! Builders reach external programs only through the injected
//! [`ToolRunner`](crate::domain::ports::ToolRunner).

mod archive;
mod container;
mod language_package;
mod staging;
mod toolchain;
mod workspace;

pub use archive::ArchiveBuilder;
pub use container::ContainerBuilder;
pub use language_package::LanguagePackageBuilder;
pub use staging::stage_tree;
pub use toolchain::{ContainerRecipe, PackageRecipe, ToolStep, Toolchain, PERL, PYTHON};
pub use workspace::{BuildWorkspace, WORKSPACE_PREFIX};

use std::path::{Path, PathBuf};

use crate::domain::ports::{ArtifactBuilder, BuildContext, DeployEvent, ToolInvocation, ToolOutput};
use crate::domain::value_objects::PackageMode;
use crate::error::BuildError;

/// Lines of stderr kept in a [`BuildError::ToolFailed`]
const STDERR_TAIL_LINES: usize = 20;

/// Factory mapping each packaging mode to the builder for `toolchain`
pub fn builder_factory(
    toolchain: &'static Toolchain,
) -> impl Fn(PackageMode, BuildContext) -> Option<Box<dyn ArtifactBuilder>> + Send + Sync + 'static
{
    move |mode, context| -> Option<Box<dyn ArtifactBuilder>> {
        match mode {
            PackageMode::Tarball => Some(Box::new(ArchiveBuilder::new(toolchain, context))),
            PackageMode::Wheel => Some(Box::new(LanguagePackageBuilder::new(toolchain, context))),
            PackageMode::Docker => Some(Box::new(ContainerBuilder::new(toolchain, context))),
        }
    }
}

/// Run a tool and turn a non-zero exit into [`BuildError::ToolFailed`]
pub(crate) fn run_checked(
    context: &BuildContext,
    invocation: ToolInvocation,
) -> Result<ToolOutput, BuildError> {
    let invocation = invocation.timeout(context.tool_timeout);
    context.events.on_event(DeployEvent::ToolInvoked {
        command: invocation.command_line(),
        cwd: invocation.cwd().to_path_buf(),
    });

    let output = context.runner.run(&invocation)?;
    if output.success() {
        Ok(output)
    } else {
        Err(BuildError::ToolFailed {
            command: invocation.command_line(),
            status: output.status_description(),
            stderr: tail_lines(&output.stderr, STDERR_TAIL_LINES),
        })
    }
}

/// Create the output directory if a caller has not already done so
pub(crate) fn ensure_output_dir(context: &BuildContext) -> Result<PathBuf, BuildError> {
    std::fs::create_dir_all(&context.output_dir)
        .map_err(|e| BuildError::io(&context.output_dir, e))?;
    absolute(&context.output_dir)
}

/// Copy a finished file into `dest` atomically.
///
/// The bytes land in a temporary file next to `dest` first and are renamed
/// over it only once complete, so an existing artifact at `dest` is either
/// kept intact or fully replaced.
pub(crate) fn publish(finished: &Path, dest: &Path) -> Result<(), BuildError> {
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::Builder::new()
        .prefix(".deploykit-publish-")
        .tempfile_in(dir)
        .map_err(|e| BuildError::io(dir, e))?;
    let mut source = std::fs::File::open(finished).map_err(|e| BuildError::io(finished, e))?;
    std::io::copy(&mut source, staged.as_file_mut())
        .map_err(|e| BuildError::io(staged.path(), e))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| BuildError::io(staged.path(), e))?;
    staged
        .persist(dest)
        .map_err(|e| BuildError::io(dest, e.error))?;
    Ok(())
}

/// Absolute form of `path` without requiring it to exist
pub(crate) fn absolute(path: &Path) -> Result<PathBuf, BuildError> {
    std::path::absolute(path).map_err(|e| BuildError::io(path, e))
}

fn tail_lines(text: &str, max: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max);
    lines[start..].join("\n")
}
