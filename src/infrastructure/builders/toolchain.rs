//! Per-language packaging recipes
//!
//! Everything that differs between Python and Perl lives here as data, so
//! the three builders stay language-agnostic.

use crate::domain::entities::ArtifactKind;
use crate::domain::value_objects::ToolCommands;

/// One tool run inside the build workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStep {
    pub program: String,
    pub args: &'static [&'static str],
}

/// How the language's own packaging tool is driven
#[derive(Debug)]
pub struct PackageRecipe {
    /// File that must exist at the root of the staged tree
    pub descriptor: &'static str,
    /// Commands run in order in the workspace root
    pub steps: fn(&ToolCommands) -> Vec<ToolStep>,
    /// Where the package appears, relative to the workspace root
    pub output_subdir: Option<&'static str>,
    pub kind: ArtifactKind,
}

#[derive(Debug)]
pub struct ContainerRecipe {
    pub default_base_image: &'static str,
    pub workdir: &'static str,
    /// Instructions placed right after `WORKDIR`
    pub setup: &'static [&'static str],
}

#[derive(Debug)]
pub struct Toolchain {
    /// Application type tag; also the prefix of the `<language>_base_image` option
    pub language: &'static str,
    pub package: PackageRecipe,
    pub container: ContainerRecipe,
}

impl Toolchain {
    pub fn base_image_option(&self) -> String {
        format!("{}_base_image", self.language)
    }
}

pub static PYTHON: Toolchain = Toolchain {
    language: "python",
    package: PackageRecipe {
        descriptor: "setup.py",
        steps: python_steps,
        output_subdir: Some("dist"),
        kind: ArtifactKind::Wheel,
    },
    container: ContainerRecipe {
        default_base_image: "python:3.9-slim",
        workdir: "/app",
        setup: &[
            "COPY . /app",
            "ENV PYTHONDONTWRITEBYTECODE=1",
            "ENV PYTHONUNBUFFERED=1",
        ],
    },
};

pub static PERL: Toolchain = Toolchain {
    language: "perl",
    package: PackageRecipe {
        descriptor: "Makefile.PL",
        steps: perl_steps,
        output_subdir: None,
        kind: ArtifactKind::Distribution,
    },
    container: ContainerRecipe {
        default_base_image: "perl:5.36-slim",
        workdir: "/app",
        setup: &["COPY . /app", "ENV PERL5LIB=/app/lib"],
    },
};

fn python_steps(tools: &ToolCommands) -> Vec<ToolStep> {
    vec![ToolStep {
        program: tools.python.clone(),
        args: &["setup.py", "bdist_wheel"],
    }]
}

fn perl_steps(tools: &ToolCommands) -> Vec<ToolStep> {
    vec![
        ToolStep {
            program: tools.perl.clone(),
            args: &["Makefile.PL"],
        },
        ToolStep {
            program: tools.make.clone(),
            args: &["dist"],
        },
    ]
}
