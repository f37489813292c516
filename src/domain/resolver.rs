//! 路径映射规则
//!
//! 纯函数，不做任何 I/O。目录布局由外部系统决定：
//!
//! ```text
//! <root>/INSTANCES/<shard>/<guid>/<guid>.idml
//! <root>/TEMPLATES/<folder>/<leaf>.idml
//! ```

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{LogicalPath, ResolutionRequest, ResourceKind};

/// IDML 文件扩展名
pub const IDML_EXTENSION: &str = ".idml";

/// 按请求类型计算候选路径
pub fn resolve(base_root: &str, request: &ResolutionRequest) -> Result<LogicalPath> {
    match request.kind {
        ResourceKind::Instance => resolve_instance_path(base_root, &request.identifier),
        ResourceKind::Template => resolve_template_path(base_root, &request.identifier),
    }
}

/// GUID 的分片目录名
///
/// 前两个字符加一位数字：第三个字符为 `0`-`7` 时为 `0`，否则为 `1`。
pub fn shard_for(guid: &str) -> Result<String> {
    let mut chars = guid.chars();
    let (Some(a), Some(b), Some(c)) = (chars.next(), chars.next(), chars.next()) else {
        return Err(DomainError::InvalidIdentifier(format!(
            "GUID \"{}\" must be at least 3 characters",
            guid
        )));
    };

    let bucket = if ('0'..='7').contains(&c) { '0' } else { '1' };
    Ok([a, b, bucket].iter().collect())
}

/// 实例路径：`<root>/INSTANCES/<shard>/<guid>/<guid>.idml`
pub fn resolve_instance_path(base_root: &str, guid: &str) -> Result<LogicalPath> {
    if guid.contains(['/', '\\']) {
        return Err(DomainError::InvalidIdentifier(format!(
            "GUID \"{}\" must not contain path separators",
            guid
        )));
    }
    let shard = shard_for(guid)?;

    Ok(LogicalPath::new(base_root)
        .join(ResourceKind::Instance.directory())
        .join(shard)
        .join(guid)
        .join(format!("{}{}", guid, IDML_EXTENSION)))
}

/// 模板路径：`<root>/TEMPLATES/<folder>/<leaf>.idml`
pub fn resolve_template_path(base_root: &str, partial_path: &str) -> Result<LogicalPath> {
    let (folder, leaf) = split_template(partial_path)?;

    let mut path = LogicalPath::new(base_root).join(ResourceKind::Template.directory());
    for segment in folder {
        path = path.join(segment);
    }
    Ok(path.join(format!("{}{}", leaf, IDML_EXTENSION)))
}

/// 拆分模板路径为目录段与文件名
fn split_template(partial_path: &str) -> Result<(Vec<&str>, &str)> {
    if partial_path.is_empty() {
        return Err(DomainError::InvalidIdentifier(
            "Missing <template> parameter".to_string(),
        ));
    }

    if partial_path.contains('\\') {
        return Err(DomainError::InvalidIdentifier(format!(
            "Template \"{}\" must use '/' as separator",
            partial_path
        )));
    }

    let mut segments: Vec<&str> = partial_path.split('/').collect();
    let leaf = segments.pop().unwrap_or_default();
    if leaf.is_empty() {
        return Err(DomainError::InvalidIdentifier(format!(
            "Template \"{}\" has no file name",
            partial_path
        )));
    }

    if leaf == ".." || segments.contains(&"..") {
        return Err(DomainError::InvalidIdentifier(format!(
            "Template \"{}\" must not contain '..'",
            partial_path
        )));
    }

    segments.retain(|s| !s.is_empty());
    Ok((segments, leaf))
}
