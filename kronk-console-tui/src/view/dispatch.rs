//! 页面分发表
//!
//! 每个 `Page` 对应一个 `PageView`。`dispatch` 使用穷尽匹配，
//! 新增页面变体而没有对应视图时无法通过编译。

use ratatui::{layout::Rect, Frame};

use super::pages;
use crate::model::{App, Page};

/// 页面视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageView {
    Welcome,
    ModelList,
    ModelPs,
    ModelPull,
    ModelRemove,
    CatalogList,
    CatalogPull,
    LibsPull,
    SecurityKeyList,
    SecurityKeyCreate,
    SecurityKeyDelete,
    SecurityTokenCreate,
}

/// 获取页面对应的视图
pub fn dispatch(page: Page) -> PageView {
    match page {
        Page::Home => PageView::Welcome,
        Page::ModelList => PageView::ModelList,
        Page::ModelPs => PageView::ModelPs,
        Page::ModelPull => PageView::ModelPull,
        Page::ModelRemove => PageView::ModelRemove,
        Page::CatalogList => PageView::CatalogList,
        Page::CatalogPull => PageView::CatalogPull,
        Page::LibsPull => PageView::LibsPull,
        Page::SecurityKeyList => PageView::SecurityKeyList,
        Page::SecurityKeyCreate => PageView::SecurityKeyCreate,
        Page::SecurityKeyDelete => PageView::SecurityKeyDelete,
        Page::SecurityTokenCreate => PageView::SecurityTokenCreate,
    }
}

/// 按页面标识获取视图，未知标识得到欢迎页
pub fn dispatch_id(id: &str) -> PageView {
    dispatch(Page::resolve(id))
}

impl PageView {
    /// 在内容区渲染该视图
    pub fn render(self, app: &App, frame: &mut Frame, area: Rect) {
        match self {
            PageView::Welcome => pages::welcome::render(app, frame, area),
            PageView::ModelList => pages::model_list::render(app, frame, area),
            PageView::ModelRemove => pages::model_remove::render(app, frame, area),
            PageView::ModelPs => pages::info::render(app, frame, area, pages::info::MODEL_PS),
            PageView::ModelPull => pages::info::render(app, frame, area, pages::info::MODEL_PULL),
            PageView::CatalogList => pages::catalog_list::render(app, frame, area),
            PageView::CatalogPull => {
                pages::info::render(app, frame, area, pages::info::CATALOG_PULL);
            }
            PageView::LibsPull => pages::info::render(app, frame, area, pages::info::LIBS_PULL),
            PageView::SecurityKeyList => {
                pages::info::render(app, frame, area, pages::info::SECURITY_KEY_LIST);
            }
            PageView::SecurityKeyCreate => {
                pages::info::render(app, frame, area, pages::info::SECURITY_KEY_CREATE);
            }
            PageView::SecurityKeyDelete => {
                pages::info::render(app, frame, area, pages::info::SECURITY_KEY_DELETE);
            }
            PageView::SecurityTokenCreate => {
                pages::info::render(app, frame, area, pages::info::SECURITY_TOKEN_CREATE);
            }
        }
    }
}
