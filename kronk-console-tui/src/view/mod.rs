//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航栏 + 内容区 + 状态栏
//!         pub mod dispatch;       // Page → PageView 分发表
//!         mod components;         // 导航栏、状态栏、弹窗
//!         mod pages;              // 各页面视图
//!         pub mod theme;          // 主题和样式
//!
//!         pub fn render(app: &App, frame: &mut Frame) {...}
//!

mod components;
pub mod dispatch;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

pub use dispatch::{dispatch, dispatch_id, PageView};

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
