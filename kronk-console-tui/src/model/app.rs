//! 应用主状态结构

use log::debug;

use super::{
    CatalogTableState, FocusPanel, ModalState, ModelListContext, ModelTableState, NavigationState,
    Page,
};
use crate::backend::{AppConfig, CatalogRepository, MemoryCatalogRepository, ModelRepository};

/// 应用主状态（组合根）
///
/// 持有唯一的“当前页面”，以及在整个生命周期内共享的模型列表上下文。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航栏状态
    pub navigation: NavigationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 生效中的配置
    pub config: AppConfig,

    // === 各页面状态 ===
    /// 模型列表页面状态
    pub model_list_table: ModelTableState,
    /// 删除模型页面状态
    pub model_remove_table: ModelTableState,
    /// 目录列表页面状态
    pub catalog_table: CatalogTableState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前页面，只能通过 `set_current_page` 修改
    current_page: Page,

    /// 共享模型列表上下文
    model_list: ModelListContext,

    /// 本地模型仓库
    models: Box<dyn ModelRepository>,

    /// 目录清单仓库
    catalogs: Box<dyn CatalogRepository>,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 目录清单仓库默认为空，用 `with_catalogs` 指定。
    pub fn new(config: AppConfig, models: Box<dyn ModelRepository>) -> Self {
        let model_list = ModelListContext::new();

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            status_message: None,
            config,
            model_list_table: ModelTableState::new(&model_list),
            model_remove_table: ModelTableState::new(&model_list),
            catalog_table: CatalogTableState::new(),
            modal: ModalState::new(),
            current_page: Page::Home,
            model_list,
            models,
            catalogs: Box::new(MemoryCatalogRepository::default()),
        }
    }

    /// 指定目录清单仓库
    #[must_use]
    pub fn with_catalogs(mut self, catalogs: Box<dyn CatalogRepository>) -> Self {
        self.catalogs = catalogs;
        self
    }

    /// 当前页面
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    /// 切换当前页面
    ///
    /// 无条件替换，任意页面之间都可以直接切换；重复设置同一页面没有可见效果。
    pub fn set_current_page(&mut self, page: Page) {
        if self.current_page != page {
            debug!("navigate: {} -> {}", self.current_page, page);
        }
        self.current_page = page;
        self.navigation.select_page(page);
    }

    /// 共享模型列表上下文
    pub fn model_list(&self) -> &ModelListContext {
        &self.model_list
    }

    /// 本地模型仓库
    pub fn models(&self) -> &dyn ModelRepository {
        self.models.as_ref()
    }

    /// 目录清单仓库
    pub fn catalogs(&self) -> &dyn CatalogRepository {
        self.catalogs.as_ref()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::MemoryModelRepository;
    use crate::model::domain::Catalog;

    fn app() -> App {
        App::new(AppConfig::default(), Box::new(MemoryModelRepository::new(Vec::new())))
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.current_page(), Page::Home);
        assert!(app.focus.is_navigation());
        assert!(!app.should_quit);
    }

    #[test]
    fn set_then_read_returns_value_for_every_page() {
        let mut app = app();
        for page in Page::ALL {
            app.set_current_page(page);
            assert_eq!(app.current_page(), page);
            assert_eq!(app.navigation.current_page(), page);
        }
    }

    #[test]
    fn any_page_reaches_any_page() {
        let mut app = app();
        for from in Page::ALL {
            for to in Page::ALL {
                app.set_current_page(from);
                app.set_current_page(to);
                assert_eq!(app.current_page(), to);
            }
        }
    }

    #[test]
    fn setting_same_page_twice_is_a_no_op() {
        let mut app = app();
        app.set_current_page(Page::CatalogList);
        app.set_current_page(Page::CatalogList);
        assert_eq!(app.current_page(), Page::CatalogList);
        assert_eq!(app.navigation.current_page(), Page::CatalogList);
    }

    #[test]
    fn context_survives_navigation() {
        let mut app = app();
        let before = app.model_list().clone();
        app.set_current_page(Page::ModelList);
        app.set_current_page(Page::SecurityKeyList);
        assert!(app.model_list().ptr_eq(&before));
    }

    #[test]
    fn catalogs_default_to_empty_until_configured() {
        assert!(app().catalogs().list().unwrap().is_empty());

        let catalog = Catalog {
            name: "Embedding".to_string(),
            models: Vec::new(),
        };
        let app = app().with_catalogs(Box::new(MemoryCatalogRepository::new(vec![catalog])));
        assert_eq!(app.catalogs().list().unwrap().len(), 1);
        assert!(!app.catalog_table.loaded);
    }
}
