//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 使用单一错误枚举承载两条流程（格式修正 / 商店素材生成）中的所有错误来源。
//! 通过 `thiserror` 保持人类可读错误，消息中统一携带出错路径，
//! 调用侧既可以直接打印，也可以按分支匹配（例如区分“文件不存在”）。
//!
//! # 实现思路
//!
//! - 不为 `std::io::Error` 派生 `From`：IO 错误必须在调用点附上路径再上转。
//! - 变体负载统一为 `String`，与日志/控制台输出保持同一格式。

use std::path::Path;

/// 资源处理统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// 输入路径不存在
    #[error("文件不存在：{0}")]
    NotFound(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    /// 配置文件读取或校验失败
    #[error("配置错误：{0}")]
    Config(String),
}

impl AssetError {
    /// 为 IO 错误附加路径信息。
    pub(crate) fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::FileSystem(format!("{} {} 失败：{}", action, path.display(), err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}
