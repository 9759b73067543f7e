//! 统一错误类型定义

use thiserror::Error;

/// 控制台错误类型
///
/// 页面分发与导航本身不会失败，这里只覆盖 Backend 层（配置、本地模型目录、目录清单）。
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// 未知的页面标识
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// 模型不存在
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// 模型目录不存在
    #[error("Models directory not found: {0}")]
    ModelsDirNotFound(String),

    /// 目录清单目录不存在
    #[error("Catalogs directory not found: {0}")]
    CatalogsDirNotFound(String),

    /// 存储层错误（文件读写）
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 控制台 Result 类型别名
pub type ConsoleResult<T> = Result<T, ConsoleError>;
