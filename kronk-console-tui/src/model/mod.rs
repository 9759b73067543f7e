//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和最小的访问方法，状态变更由 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态（组合根）
//!         mod context;        // 共享模型列表上下文
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏光标
//!         mod page;           // 页面标识
//!
//!         pub mod domain;     // 领域模型（本地模型文件）
//!         pub mod state;      // 页面 UI 状态
//!
//!     Page 与 ModelListContext 的分工：
//!         - Page 是一个封闭的枚举，只表示“当前在哪个页面”；
//!         - ModelListContext 是跨页面共享的数据，页面切换时不会重建。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App 在启动时创建一次，之后：
//!         - current_page 初始为 Page::Home，只能通过 set_current_page 修改；
//!         - model_list 在 App::new 中创建，生命周期与 App 相同。
//!
//!     数据流：
//!         用户在导航栏按 Enter
//!             ↓
//!         event/handler.rs 返回 Navigation(Navigate(page))
//!             ↓
//!         update/navigation.rs 调用 app.set_current_page(page)
//!             ↓
//!         view/layout.rs 调用 dispatch(app.current_page()) 渲染对应页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、共享模型列表上下文（ModelListContext）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Rc<RefCell<ModelListData>> 的薄包装，由 App 持有并显式传给需要它的页面。
//!     第一次进入模型列表或删除页时加载，之后离开再回来不会重新读取目录；
//!     Alt+R 强制刷新。上次加载失败时，再次进入会重新读取。
//!
//!     目录列表页也读取它，用来标记清单中哪些模型已经拉取到本地。
//!

mod app;
pub mod context;
mod focus;
mod navigation;
mod page;
pub mod state;

pub mod domain;

pub use app::App;
pub use context::{ModelListContext, ModelListData, Subscription};
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use page::{NavSection, Page};
pub use state::{CatalogTableState, Modal, ModalState, ModelTableState};
