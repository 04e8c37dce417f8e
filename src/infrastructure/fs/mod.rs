//! File System Helpers
//!
//! Output directory layout and artifact fingerprinting.

mod hash;
mod output_layout;

pub use hash::{describe_artifact, sha256_file};
pub use output_layout::OutputLayout;
