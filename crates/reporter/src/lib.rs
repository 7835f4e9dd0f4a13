pub mod error;
pub mod export;
pub mod report;
pub mod tags;

pub use error::{ReporterError, Result};
pub use tags::TagArg;
