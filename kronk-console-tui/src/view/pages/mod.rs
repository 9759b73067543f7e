//! 页面视图

pub mod catalog_list;
pub mod info;
pub mod model_list;
pub mod model_remove;
pub mod welcome;
