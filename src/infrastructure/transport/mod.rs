//! Transporters

mod planned;

pub use planned::PlannedTransfer;
