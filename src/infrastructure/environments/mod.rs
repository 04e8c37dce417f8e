//! Environment Preparers

mod vm;

pub use vm::VmPreparer;
