//! 领域实体

pub mod environment;
pub mod resource;

pub use environment::{
    ConfigKey, ConfigTarget, DEFAULT_ENVIRONMENT, EnvironmentName, KNOWN_ENVIRONMENTS, Settings,
};
pub use resource::{LogicalPath, ResolutionRequest, ResourceKind};
