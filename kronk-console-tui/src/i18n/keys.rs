//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：如 `welcome.*`, `model_table.*`, `catalog_table.*`, `info.*`
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 页面标题
    pub pages: PageTitles,
    /// 欢迎页文本
    pub welcome: WelcomeTexts,
    /// 模型表格（列表页、删除页）文本
    pub model_table: ModelTableTexts,
    /// 目录列表页文本
    pub catalog_table: CatalogTableTexts,
    /// 信息面板类页面文本
    pub info: InfoTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub not_loaded: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str,
    pub refresh: &'static str,
    pub remove: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub refresh: &'static str,
    pub remove: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    // 分组标题
    pub models: &'static str,
    pub catalog: &'static str,
    pub libs: &'static str,
    pub security: &'static str,
    // 导航项短标签
    pub home: &'static str,
    pub list: &'static str,
    pub running: &'static str,
    pub pull: &'static str,
    pub remove: &'static str,
    pub create_key: &'static str,
    pub delete_key: &'static str,
    pub create_token: &'static str,
}

/// 页面标题（内容区边框）
pub struct PageTitles {
    pub home: &'static str,
    pub model_list: &'static str,
    pub model_ps: &'static str,
    pub model_pull: &'static str,
    pub model_remove: &'static str,
    pub catalog_list: &'static str,
    pub catalog_pull: &'static str,
    pub libs_pull: &'static str,
    pub security_key_list: &'static str,
    pub security_key_create: &'static str,
    pub security_key_delete: &'static str,
    pub security_token_create: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct WelcomeTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub models: &'static str,
    pub server: &'static str,
    pub models_dir: &'static str,
}

pub struct ModelTableTexts {
    pub id: &'static str,
    pub organization: &'static str,
    pub family: &'static str,
    pub size: &'static str,
    pub modified: &'static str,
    pub no_models: &'static str,
    pub load_failed: &'static str,
    pub refreshed_at: &'static str,
    pub remove_hint: &'static str,
}

pub struct CatalogTableTexts {
    pub catalog: &'static str,
    pub model_id: &'static str,
    pub pulled: &'static str,
    pub endpoint: &'static str,
    pub images: &'static str,
    pub audio: &'static str,
    pub video: &'static str,
    pub streaming: &'static str,
    pub reasoning: &'static str,
    pub tooling: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub no_catalogs: &'static str,
    pub load_failed: &'static str,
}

pub struct InfoTexts {
    pub command: &'static str,
    pub server: &'static str,
    pub note: &'static str,
    pub descriptions: InfoDescriptions,
}

/// 各信息面板的说明
pub struct InfoDescriptions {
    pub model_ps: &'static str,
    pub model_pull: &'static str,
    pub catalog_pull: &'static str,
    pub libs_pull: &'static str,
    pub security_key_list: &'static str,
    pub security_key_create: &'static str,
    pub security_key_delete: &'static str,
    pub security_token_create: &'static str,
}

// ============================================================================
// 弹窗 / 状态栏 / 帮助
// ============================================================================

pub struct ModalTexts {
    pub confirm_remove_title: &'static str,
    pub confirm_remove_message: &'static str,
    pub remove_button: &'static str,
    pub remove_failed: &'static str,
    pub close_hint: &'static str,
}

pub struct StatusTexts {
    pub models_loaded: &'static str,
    pub catalogs_loaded: &'static str,
    pub model_removed: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub lists: &'static str,
    pub close_hint: &'static str,
}
