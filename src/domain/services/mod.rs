//! Domain Services
//!
//! Pure logic shared by the builders. No process spawning, no file I/O.

mod artifact_selection;
mod dockerfile;

pub use artifact_selection::select_single;
pub use dockerfile::{image_reference, Dockerfile, ImageSpec};
