//! 导航栏状态定义

use super::Page;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

/// 导航栏状态
///
/// 只记录光标位置；当前显示哪个页面由 `App` 持有。
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前光标所在的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态（每个页面一项）
    pub fn new() -> Self {
        Self {
            items: Page::ALL
                .into_iter()
                .map(|page| NavItem {
                    page,
                    icon: icon_for(page),
                })
                .collect(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 把光标移到指定页面
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.selected = index;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取光标下的页面
    pub fn current_page(&self) -> Page {
        self.current_item().map(|item| item.page).unwrap_or_default()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_for(page: Page) -> &'static str {
    match page {
        Page::Home => "◆",
        Page::ModelList | Page::CatalogList | Page::SecurityKeyList => "≡",
        Page::ModelPs => "▸",
        Page::ModelPull | Page::CatalogPull | Page::LibsPull => "↓",
        Page::ModelRemove | Page::SecurityKeyDelete => "✕",
        Page::SecurityKeyCreate | Page::SecurityTokenCreate => "+",
    }
}
