//!
//! src/backend/mod.rs
//! Backend 层：本地服务
//!
//! Backend 层与 UI 完全解耦，只负责读写本地数据。
//! 控制台本身不与 Kronk 服务器通信，所有操作都同步完成。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod catalog_repository; // 目录清单仓库（<base>/catalogs/*.yaml）
//!         mod config_service;     // 配置服务（JSON 文件 + 环境变量）
//!         mod model_repository;   // 模型仓库（本地模型目录）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件位于 <config_dir>/kronk-console-tui/config.json。
//!     首次启动时写入默认配置，方便用户发现所有选项。
//!
//!     覆盖顺序：
//!         默认值 → 配置文件 → KRONK_WEB_API_HOST / KRONK_MODELS → 命令行参数
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、模型仓库（ModelRepository）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LocalModelRepository 扫描 <models_dir>/<organization>/<family>/<file>：
//!         - 跳过 .DS_Store 和 mmproj 开头的投影文件
//!         - 模型 ID 为去掉扩展名的文件名
//!         - 结果按 ID 排序
//!
//!     删除按文件路径定位（不同组织下可能有同名文件），
//!     同目录下的 mmproj-<文件名> 投影文件一并删除。
//!
//!     MemoryModelRepository 把模型放在内存里，用于测试。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、目录清单仓库（CatalogRepository）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LocalCatalogRepository 读取 <base_dir>/catalogs 下的 .yaml 文件：
//!         - 跳过子目录和其他扩展名
//!         - 任一文件解析失败，整次读取失败
//!
//!     清单只读，由 `kronk catalog update` 写入。
//!

mod catalog_repository;
mod config_service;
mod model_repository;

pub use catalog_repository::{CatalogRepository, LocalCatalogRepository, MemoryCatalogRepository};
pub use config_service::{
    default_base_dir, default_models_dir, get_config_dir, AppConfig, ConfigService,
    JsonConfigService, DEFAULT_HOST, ENV_MODELS, ENV_WEB_API_HOST,
};
pub use model_repository::{LocalModelRepository, MemoryModelRepository, ModelRepository};
