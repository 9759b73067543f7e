//! 页面状态模块
//!
//! 定义各个页面自己的 UI 状态（光标、弹窗），列表数据本身放在共享上下文中

mod catalog_table;
mod modal;
mod model_table;

pub use catalog_table::CatalogTableState;
pub use modal::{Modal, ModalState};
pub use model_table::ModelTableState;
