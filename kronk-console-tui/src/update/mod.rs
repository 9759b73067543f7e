//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理（唯一会切换页面的地方）
//!         mod content;            // 内容面板子消息处理、模型列表和目录清单加载
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!     每次处理完消息后，两个模型表格都会和共享上下文同步一次，
//!     这样删除模型后光标不会停在列表之外。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, Page};

pub use content::{load_catalogs, load_model_list};
pub use navigation::navigate;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Refresh => {
            load_model_list(app, true);
            if app.current_page() == Page::CatalogList {
                load_catalogs(app, true);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }

    sync_tables(app);
}

fn sync_tables(app: &mut App) {
    let ctx = app.model_list().clone();
    app.model_list_table.sync(&ctx);
    app.model_remove_table.sync(&ctx);
}
