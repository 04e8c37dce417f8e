//! External process execution

mod system;

pub use system::SystemToolRunner;
