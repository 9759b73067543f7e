//! 弹窗更新逻辑

use std::path::Path;

use log::error;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::ConfirmRemove { .. }) => handle_confirm_remove(app, msg),
        Some(Modal::Help | Modal::Error { .. }) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_remove(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmRemove {
        ref path,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let path = path.clone();
                app.modal.close();
                remove_model(app, &path);
            } else {
                app.modal.close();
                app.clear_status();
            }
        }
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::ToggleFocus => {}
    }
}

/// 删除模型并同步到共享上下文（不重新读取目录）
fn remove_model(app: &mut App, path: &Path) {
    let result = app.models().remove(path);
    match result {
        Ok(model) => {
            app.model_list().update(|data| {
                data.remove(&model.path);
            });
            app.set_status(format!("{}: {}", t().status.model_removed, model.id));
        }
        Err(e) => {
            error!("failed to remove model {}: {e}", path.display());
            app.modal.show_error(t().modal.remove_failed, &e.to_string());
        }
    }
}
