//! 文件日志
//!
//! 终端被 TUI 占用，日志只能写入文件。

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// 默认日志文件路径
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kronk-console-tui")
        .join("console.log")
}

/// 初始化文件日志
///
/// 失败时返回 false，程序照常运行，只是没有日志。
pub fn init_logging(path: &Path, level: LevelFilter) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(path) {
        Ok(file) => WriteLogger::init(level, config, file).is_ok(),
        Err(_) => false,
    }
}
