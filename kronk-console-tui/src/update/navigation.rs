//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, Page};

use super::content;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Navigate(page) => navigate(app, page),
        NavigationMessage::NavigateToId(id) => navigate(app, Page::resolve(&id)),
    }
}

/// 切换页面
///
/// 切换到当前页面时什么都不做。
pub fn navigate(app: &mut App, page: Page) {
    if app.current_page() == page {
        return;
    }
    app.set_current_page(page);
    after_navigate(app);
}

fn after_navigate(app: &mut App) {
    app.clear_status(); // 切换页面时清除状态消息
    if app.current_page().uses_model_list() {
        content::load_model_list(app, false);
    }
    if app.current_page() == Page::CatalogList {
        content::load_catalogs(app, false);
    }
}
