pub mod service;
pub mod telemetry;

pub use service::{PoolFinderService, ServiceComponents};
