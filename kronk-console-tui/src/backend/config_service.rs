//! 配置服务
//!
//! 优先级：默认值 → 配置文件 → 环境变量 → 命令行参数

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};
use crate::view::theme::Theme;

/// 服务器地址环境变量
pub const ENV_WEB_API_HOST: &str = "KRONK_WEB_API_HOST";
/// 模型目录环境变量
pub const ENV_MODELS: &str = "KRONK_MODELS";

/// 默认服务器地址
pub const DEFAULT_HOST: &str = "localhost:3000";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// Kronk 服务器地址（host:port）
    pub host: String,
    /// 本地模型目录
    pub models_dir: PathBuf,
    /// Kronk 数据根目录，目录清单位于其下的 catalogs
    pub base_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            host: DEFAULT_HOST.to_string(),
            models_dir: default_models_dir(),
            base_dir: default_base_dir(),
        }
    }
}

impl AppConfig {
    /// 目录清单所在目录
    pub fn catalogs_dir(&self) -> PathBuf {
        self.base_dir.join("catalogs")
    }

    /// 用环境变量覆盖配置
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// 用给定的查找函数覆盖配置（空值忽略）
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup(ENV_WEB_API_HOST).filter(|v| !v.is_empty()) {
            debug!("{ENV_WEB_API_HOST} overrides host: {host}");
            self.host = host;
        }
        if let Some(dir) = lookup(ENV_MODELS).filter(|v| !v.is_empty()) {
            debug!("{ENV_MODELS} overrides models dir: {dir}");
            self.models_dir = PathBuf::from(dir);
        }
    }
}

/// 默认数据根目录：`$HOME/kronk`，取不到 HOME 时使用当前目录
pub fn default_base_dir() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from("./kronk"), |home| home.join("kronk"))
}

/// 默认模型目录：`$HOME/kronk/models`，取不到 HOME 时使用当前目录
pub fn default_models_dir() -> PathBuf {
    default_base_dir().join("models")
}

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kronk-console-tui")
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> ConsoleResult<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> ConsoleResult<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件位置
    pub fn default_path() -> PathBuf {
        get_config_dir().join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件是否存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> ConsoleResult<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ConsoleError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConsoleError::SerializationError(e.to_string()))
    }

    fn save(&self, config: &AppConfig) -> ConsoleResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConsoleError::StorageError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| ConsoleError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| ConsoleError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(tmp.path().join("config.json"));
        assert!(!service.exists());
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(tmp.path().join("nested").join("config.json"));

        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            host: "10.0.0.5:3000".to_string(),
            models_dir: PathBuf::from("/srv/models"),
            base_dir: PathBuf::from("/srv/kronk"),
        };
        service.save(&config).unwrap();

        assert!(service.exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = JsonConfigService::new(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.base_dir, default_base_dir());
    }

    #[test]
    fn catalogs_live_under_base_dir() {
        let config = AppConfig {
            base_dir: PathBuf::from("/srv/kronk"),
            ..AppConfig::default()
        };
        assert_eq!(config.catalogs_dir(), PathBuf::from("/srv/kronk/catalogs"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = JsonConfigService::new(&path).load();
        assert!(matches!(result, Err(ConsoleError::SerializationError(_))));
    }

    #[test]
    fn env_overrides_non_empty_values() {
        let mut config = AppConfig::default();
        config.apply_env_with(|key| match key {
            ENV_WEB_API_HOST => Some("example:9000".to_string()),
            ENV_MODELS => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.host, "example:9000");
        assert_eq!(config.models_dir, default_models_dir());
    }
}
