//! 内容面板更新逻辑

use chrono::Local;
use log::{info, warn};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::domain::catalog_entries;
use crate::model::{App, CatalogTableState, ModelTableState, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let len = app.model_list().len();

    match app.current_page() {
        Page::ModelList => move_cursor(&mut app.model_list_table, len, &msg),
        Page::ModelRemove => match msg {
            ContentMessage::Confirm | ContentMessage::Delete => request_remove(app),
            other => move_cursor(&mut app.model_remove_table, len, &other),
        },
        Page::CatalogList => move_catalog_cursor(&mut app.catalog_table, &msg),
        // 其余页面只展示信息，没有可操作的内容
        _ => {}
    }
}

/// 读取模型列表到共享上下文
///
/// `force` 为 false 时，已成功加载过就不再读取；上次失败则重试。
pub fn load_model_list(app: &mut App, force: bool) {
    if !force && !app.model_list().needs_load() {
        return;
    }

    let result = app.models().list();
    match result {
        Ok(models) => {
            let count = models.len();
            info!(
                "loaded {count} models from {}",
                app.models().location().display()
            );
            app.model_list()
                .update(|data| data.set_models(models, Local::now()));
            app.set_status(format!("{}: {count}", t().status.models_loaded));
        }
        Err(e) => {
            warn!("failed to load models: {e}");
            app.model_list().update(|data| data.set_error(e.to_string()));
            app.set_status(t().model_table.load_failed);
        }
    }
}

/// 读取目录清单到目录列表页
///
/// 与模型列表相同：`force` 为 false 时，已成功加载过就不再读取。
pub fn load_catalogs(app: &mut App, force: bool) {
    if !force && !app.catalog_table.needs_load() {
        return;
    }

    let result = app.catalogs().list();
    match result {
        Ok(catalogs) => {
            let entries = catalog_entries(catalogs);
            let count = entries.len();
            info!(
                "loaded {count} catalog models from {}",
                app.catalogs().location().display()
            );
            app.catalog_table.set_entries(entries);
            app.set_status(format!("{}: {count}", t().status.catalogs_loaded));
        }
        Err(e) => {
            warn!("failed to load catalogs: {e}");
            app.catalog_table.set_error(e.to_string());
            app.set_status(t().catalog_table.load_failed);
        }
    }
}

fn move_catalog_cursor(table: &mut CatalogTableState, msg: &ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => table.select_previous(),
        ContentMessage::SelectNext => table.select_next(),
        ContentMessage::SelectFirst => table.select_first(),
        ContentMessage::SelectLast => table.select_last(),
        ContentMessage::Confirm | ContentMessage::Delete => {}
    }
}

fn move_cursor(table: &mut ModelTableState, len: usize, msg: &ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => table.select_previous(),
        ContentMessage::SelectNext => table.select_next(len),
        ContentMessage::SelectFirst => table.select_first(),
        ContentMessage::SelectLast => table.select_last(len),
        ContentMessage::Confirm | ContentMessage::Delete => {}
    }
}

/// 为选中的模型打开确认删除弹窗
fn request_remove(app: &mut App) {
    let selected = app.model_remove_table.selected;
    let target = app
        .model_list()
        .read(|data| data.get(selected).map(|m| (m.id.clone(), m.path.clone())));

    if let Some((id, path)) = target {
        app.modal.show_confirm_remove(&id, &path);
    }
}
