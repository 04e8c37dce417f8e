//! Domain Layer
//!
//! The core of deploykit: deployment concepts and the ports through which
//! the pipeline talks to the outside world.
//!
//! ## Structure
//!
//! - `entities/` - Configured applications, environments, requests, artifacts
//! - `value_objects/` - Immutable value types (Version, PackageMode, PipelinePhase)
//! - `services/` - Pure helpers (Dockerfile synthesis, artifact selection)
//! - `ports/` - Interface definitions implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Nothing here spawns processes or touches the file system
//! 2. **Ports & Adapters** - Validators, builders, preparers, transporters and
//!    the tool runner are all trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
