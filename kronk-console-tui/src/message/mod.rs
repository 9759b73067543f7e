//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! Event 层把按键翻译成 Message，Update 层根据 Message 更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航子消息
//!
//!
//!     导航的唯一入口：
//!         AppMessage::Navigation(NavigationMessage::Navigate(page))
//!         AppMessage::Navigation(NavigationMessage::NavigateToId(id))
//!
//!     两者最终都调用 App::set_current_page，
//!     其余消息只移动光标、操作列表或弹窗，不会改变当前页面。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
