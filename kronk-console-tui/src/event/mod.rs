//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   本地模型目录      │           │
//！│                                           │ ~/kronk/models    │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             其余事件（Resize、Mouse 等）         // 返回 Noop，下一帧自动重绘
//!
//!             当接收到键盘事件时，判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         Ctrl+C / Alt+q  → AppMessage::Quit
//!         ? / Alt+h       → AppMessage::ShowHelp
//!         Alt+r           → AppMessage::Refresh
//!         Esc             → AppMessage::GoBack
//!         Tab             → AppMessage::ToggleFocus
//!
//!     导航面板：
//!         ↑↓ / j k        → 移动光标
//!         Home / End      → 跳到首项 / 末项
//!         Enter           → NavigationMessage::Navigate(光标所在页面)
//!         q               → 退出
//!
//!     内容面板：
//!         ↑↓ / j k        → 移动表格光标
//!         Enter           → ContentMessage::Confirm
//!         Alt+d           → ContentMessage::Delete（仅删除模型页面）
//!         ←               → 回到导航面板
//!
//!     弹窗：
//!         Esc             → ModalMessage::Close
//!         Tab / ← →       → ModalMessage::ToggleFocus（确认删除弹窗）
//!         Enter           → ModalMessage::Confirm
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{DefaultKeymap, KeyBinding};
