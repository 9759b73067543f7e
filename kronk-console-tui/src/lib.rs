//! Kronk Console TUI
//!
//! Kronk 模型服务器的终端管理控制台。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与本地模型目录 (`backend/`)
//! - **Util**: 终端与日志 (`util/`)

pub mod app;
pub mod backend;
pub mod error;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;

pub use error::{ConsoleError, ConsoleResult};
