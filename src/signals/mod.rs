//! Signal aggregation interfaces.

pub mod sentiment;

pub use sentiment::aggregate;
