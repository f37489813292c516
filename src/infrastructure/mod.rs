//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - storage: JSON 配置文件存储
//! - probe: 文件系统存在性探测
//! - archive: zip 解压
//! - reveal: 调用系统文件浏览器
//! - paths: 路径工具

pub mod archive;
pub mod paths;
pub mod probe;
pub mod reveal;
pub mod storage;

pub use archive::ZipExtractor;
pub use probe::FsPathProbe;
pub use reveal::SystemRevealer;
pub use storage::JsonSettingsRepository;
