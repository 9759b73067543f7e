//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 初始化为以下状态：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState {
//!         items: [Home, ModelList, ..., SecurityTokenCreate],   // 每个页面一项
//!         selected: 0                                 // 光标位置
//!     },
//!     current_page: Page::Home,                       // 当前显示的页面
//!     model_list: ModelListContext,                   // 共享模型列表，首次进入列表页时加载
//!     status_message: None,                           // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 把按键翻译成消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use log::info;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    info!("console started on page {}", app.current_page());

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    info!("console exiting");
    Ok(())
}
