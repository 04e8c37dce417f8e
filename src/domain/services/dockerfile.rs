//! Dockerfile synthesis for container packaging
//!
//! The file is assembled from four ordered blocks: base image and working
//! directory, the language's fixed setup, app metadata, then the caller's
//! extra instructions verbatim.

use crate::domain::value_objects::Version;

/// Inputs for one container image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub app_name: String,
    pub version: Version,
    pub base_image: String,
    pub workdir: String,
    /// Language-specific instructions that follow `WORKDIR`
    pub setup: Vec<String>,
    /// Caller-supplied instructions appended last, unmodified
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dockerfile {
    lines: Vec<String>,
}

impl Dockerfile {
    pub fn synthesize(spec: &ImageSpec) -> Self {
        let mut lines = Vec::with_capacity(7 + spec.setup.len() + spec.extra.len());
        lines.push(format!("FROM {}", spec.base_image));
        lines.push(format!("WORKDIR {}", spec.workdir));
        lines.extend(spec.setup.iter().cloned());
        lines.push(format!("LABEL app.name=\"{}\"", spec.app_name));
        lines.push(format!("LABEL app.version=\"{}\"", spec.version));
        lines.push(format!("ENV APP_VERSION={}", spec.version));
        lines.extend(spec.extra.iter().cloned());
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One instruction per line, newline terminated
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// `<lowercased name>:<version>`; image repositories must be lowercase
pub fn image_reference(app_name: &str, version: &Version) -> String {
    format!("{}:{}", app_name.to_lowercase(), version)
}
