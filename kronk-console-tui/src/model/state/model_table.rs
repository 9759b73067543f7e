//! 模型表格页面状态
//!
//! 模型列表页与删除页各持有一份，数据来自共享的 `ModelListContext`。

use crate::model::context::{ModelListContext, Subscription};

/// 模型表格状态
#[derive(Debug, Default)]
pub struct ModelTableState {
    /// 当前选中的索引
    pub selected: usize,
    subscription: Subscription,
}

impl ModelTableState {
    /// 创建新的表格状态，并订阅上下文
    pub fn new(ctx: &ModelListContext) -> Self {
        Self {
            selected: 0,
            subscription: ctx.subscribe(),
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 上下文变化后把光标限制在列表范围内
    ///
    /// 返回上下文是否发生过变化。
    pub fn sync(&mut self, ctx: &ModelListContext) -> bool {
        if !self.subscription.changed(ctx) {
            return false;
        }
        let len = ctx.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        true
    }
}
