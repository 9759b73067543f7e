//! 弹窗/对话框状态

use std::path::{Path, PathBuf};

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除模型
    ConfirmRemove {
        /// 模型 ID（仅用于显示）
        model_id: String,
        /// 模型文件路径，删除时按它定位
        path: PathBuf,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗，默认焦点在“取消”
    pub fn show_confirm_remove(&mut self, model_id: &str, path: &Path) {
        self.active = Some(Modal::ConfirmRemove {
            model_id: model_id.to_string(),
            path: path.to_path_buf(),
            focus: 0,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
