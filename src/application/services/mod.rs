//! 应用服务

pub mod availability;
pub mod config_service;
pub mod locator;
pub mod unpack;

pub use availability::AvailabilityChecker;
pub use config_service::ConfigService;
pub use locator::{LocatorService, LookupOptions};
pub use unpack::{Prepared, UnpackService};
