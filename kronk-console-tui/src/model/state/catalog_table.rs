//! 目录列表页面状态
//!
//! 清单只在目录列表页使用，数据直接放在页面状态里。

use crate::model::domain::CatalogEntry;

/// 目录表格状态
#[derive(Debug, Default)]
pub struct CatalogTableState {
    /// 当前选中的索引
    pub selected: usize,
    /// 排好序的清单行
    pub entries: Vec<CatalogEntry>,
    /// 是否已加载过
    pub loaded: bool,
    /// 最近一次加载的错误信息
    pub error: Option<String>,
}

impl CatalogTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置清单行（加载成功），光标限制在范围内
    pub fn set_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = entries;
        self.loaded = true;
        self.error = None;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    /// 记录加载失败
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loaded = true;
        self.error = Some(message.into());
    }

    /// 是否需要（重新）读取
    pub fn needs_load(&self) -> bool {
        !self.loaded || self.error.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }
}
