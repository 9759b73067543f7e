//! 页面状态定义

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::ConsoleError;
use crate::i18n::t;

/// 页面枚举
///
/// 封闭集合：每个变体对应一个稳定的 kebab-case 标识（见 [`Page::id`]）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// 首页（欢迎页）
    #[default]
    Home,
    /// 本地模型列表
    ModelList,
    /// 运行中的模型
    ModelPs,
    /// 拉取模型
    ModelPull,
    /// 删除模型
    ModelRemove,
    /// 模型目录
    CatalogList,
    /// 从目录拉取模型
    CatalogPull,
    /// 拉取 llama.cpp 运行库
    LibsPull,
    /// 私钥列表
    SecurityKeyList,
    /// 创建私钥
    SecurityKeyCreate,
    /// 删除私钥
    SecurityKeyDelete,
    /// 创建访问令牌
    SecurityTokenCreate,
}

/// 导航栏分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Models,
    Catalog,
    Libs,
    Security,
}

impl Page {
    /// 所有页面，按导航栏顺序排列
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::ModelList,
        Page::ModelPs,
        Page::ModelPull,
        Page::ModelRemove,
        Page::CatalogList,
        Page::CatalogPull,
        Page::LibsPull,
        Page::SecurityKeyList,
        Page::SecurityKeyCreate,
        Page::SecurityKeyDelete,
        Page::SecurityTokenCreate,
    ];

    /// 页面标识
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ModelList => "model-list",
            Page::ModelPs => "model-ps",
            Page::ModelPull => "model-pull",
            Page::ModelRemove => "model-remove",
            Page::CatalogList => "catalog-list",
            Page::CatalogPull => "catalog-pull",
            Page::LibsPull => "libs-pull",
            Page::SecurityKeyList => "security-key-list",
            Page::SecurityKeyCreate => "security-key-create",
            Page::SecurityKeyDelete => "security-key-delete",
            Page::SecurityTokenCreate => "security-token-create",
        }
    }

    /// 从页面标识解析，未知标识返回 None
    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    /// 从页面标识解析，未知标识回到首页
    pub fn resolve(id: &str) -> Page {
        Page::from_id(id).unwrap_or_else(|| {
            warn!("unknown page id {id:?}, falling back to home");
            Page::Home
        })
    }

    /// 所属的导航栏分组
    pub fn section(self) -> NavSection {
        match self {
            Page::Home => NavSection::Home,
            Page::ModelList | Page::ModelPs | Page::ModelPull | Page::ModelRemove => {
                NavSection::Models
            }
            Page::CatalogList | Page::CatalogPull => NavSection::Catalog,
            Page::LibsPull => NavSection::Libs,
            Page::SecurityKeyList
            | Page::SecurityKeyCreate
            | Page::SecurityKeyDelete
            | Page::SecurityTokenCreate => NavSection::Security,
        }
    }

    /// 获取页面标题（内容区边框上显示）
    pub fn title(self) -> &'static str {
        let titles = &t().pages;
        match self {
            Page::Home => titles.home,
            Page::ModelList => titles.model_list,
            Page::ModelPs => titles.model_ps,
            Page::ModelPull => titles.model_pull,
            Page::ModelRemove => titles.model_remove,
            Page::CatalogList => titles.catalog_list,
            Page::CatalogPull => titles.catalog_pull,
            Page::LibsPull => titles.libs_pull,
            Page::SecurityKeyList => titles.security_key_list,
            Page::SecurityKeyCreate => titles.security_key_create,
            Page::SecurityKeyDelete => titles.security_key_delete,
            Page::SecurityTokenCreate => titles.security_token_create,
        }
    }

    /// 获取导航栏中的短标签
    pub fn nav_label(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Home => nav.home,
            Page::ModelList | Page::CatalogList | Page::SecurityKeyList => nav.list,
            Page::ModelPs => nav.running,
            Page::ModelPull | Page::CatalogPull | Page::LibsPull => nav.pull,
            Page::ModelRemove => nav.remove,
            Page::SecurityKeyCreate => nav.create_key,
            Page::SecurityKeyDelete => nav.delete_key,
            Page::SecurityTokenCreate => nav.create_token,
        }
    }

    /// 该页面是否读取共享的模型列表
    ///
    /// 目录列表页用它标记已拉取的模型。
    pub fn uses_model_list(self) -> bool {
        matches!(self, Page::ModelList | Page::ModelRemove | Page::CatalogList)
    }
}

impl NavSection {
    /// 分组标题，Home 分组没有标题
    pub fn heading(self) -> Option<&'static str> {
        let nav = &t().nav;
        match self {
            NavSection::Home => None,
            NavSection::Models => Some(nav.models),
            NavSection::Catalog => Some(nav.catalog),
            NavSection::Libs => Some(nav.libs),
            NavSection::Security => Some(nav.security),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_id(s).ok_or_else(|| ConsoleError::UnknownPage(s.to_string()))
    }
}
