//! 导航相关消息

use crate::model::Page;

/// 导航消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 光标跳到第一项
    SelectFirst,
    /// 光标跳到最后一项
    SelectLast,
    /// 切换到指定页面
    Navigate(Page),
    /// 按页面标识切换，未知标识回到首页
    NavigateToId(String),
}
