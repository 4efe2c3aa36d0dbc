pub mod config;
pub mod error;
pub mod money;
pub mod pricing;
pub mod scan;

pub use config::{Config, ReportFormat};
pub use error::ValidationError;
pub use money::Cents;
pub use pricing::{ModelParams, ScanRange};
pub use scan::{PricePoint, ScanResult};
