//! 业务领域模型
//!
//! 与 Kronk 本地目录结构对应的数据类型

mod catalog;
mod model_file;

pub use catalog::{catalog_entries, pulled_ids, Capabilities, Catalog, CatalogEntry, CatalogModel};
pub use model_file::ModelFile;
