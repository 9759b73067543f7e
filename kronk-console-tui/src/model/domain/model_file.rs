//! 本地模型文件数据模型

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 本地模型文件
///
/// 对应模型目录下 `<organization>/<family>/<file>` 的一个文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFile {
    /// 模型 ID（文件名去掉扩展名）
    pub id: String,
    /// 发布组织
    pub organization: String,
    /// 模型家族
    pub family: String,
    /// 文件大小（字节）
    pub size: u64,
    /// 最后修改时间
    pub modified: DateTime<Local>,
    /// 文件完整路径
    pub path: PathBuf,
}

impl ModelFile {
    /// 获取可读的文件大小（十进制单位）
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }

    /// 获取修改时间的显示文本
    pub fn display_modified(&self) -> String {
        self.modified.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// 格式化字节数，如 `4.9 GB`
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    if size < 1000 {
        return format!("{size} B");
    }

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sizes_are_shown_in_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
    }

    #[test]
    fn large_sizes_use_decimal_units() {
        assert_eq!(format_size(1_000), "1.0 kB");
        assert_eq!(format_size(1_500_000), "1.5 MB");
        assert_eq!(format_size(4_920_000_000), "4.9 GB");
        assert_eq!(format_size(2_000_000_000_000_000), "2000.0 TB");
    }
}
