pub mod browse;
pub mod metrics;
pub mod snapshot;
pub mod summary;
