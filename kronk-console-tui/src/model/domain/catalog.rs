//! 模型目录清单数据模型
//!
//! 对应 `<base>/catalogs/*.yaml`，每个文件是一个清单。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ModelFile;

/// 一个目录清单文件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// 清单名称
    pub name: String,
    pub models: Vec<CatalogModel>,
}

/// 清单中的一个模型
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogModel {
    pub id: String,
    pub capabilities: Capabilities,
}

/// 模型能力
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// 服务端点，如 `chat_completion`
    pub endpoint: String,
    pub images: bool,
    pub audio: bool,
    pub video: bool,
    pub streaming: bool,
    pub reasoning: bool,
    pub tooling: bool,
}

/// 目录列表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 所属清单名称
    pub catalog: String,
    pub model: CatalogModel,
}

impl CatalogEntry {
    /// 本地是否已有该模型（ID 忽略大小写）
    pub fn is_pulled(&self, pulled: &HashSet<String>) -> bool {
        pulled.contains(&self.model.id.to_lowercase())
    }
}

/// 把清单展开成行，按清单名、模型 ID 排序（忽略大小写）
pub fn catalog_entries(catalogs: Vec<Catalog>) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = catalogs
        .into_iter()
        .flat_map(|catalog| {
            let name = catalog.name;
            catalog.models.into_iter().map(move |model| CatalogEntry {
                catalog: name.clone(),
                model,
            })
        })
        .collect();

    entries.sort_by_cached_key(|e| (e.catalog.to_lowercase(), e.model.id.to_lowercase()));
    entries
}

/// 本地模型 ID 集合（小写），用于标记已拉取
pub fn pulled_ids(models: &[ModelFile]) -> HashSet<String> {
    models.iter().map(|m| m.id.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(name: &str, ids: &[&str]) -> Catalog {
        Catalog {
            name: name.to_string(),
            models: ids
                .iter()
                .map(|id| CatalogModel {
                    id: (*id).to_string(),
                    capabilities: Capabilities::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn entries_sort_by_catalog_then_id_ignoring_case() {
        let entries = catalog_entries(vec![
            catalog("text-generation", &["Qwen3-8B-Q8_0", "gpt-oss-20b-Q8_0"]),
            catalog("Embedding", &["embeddinggemma-300m-qat-Q8_0"]),
            catalog("image-text-to-text", &["Qwen2.5-VL-3B-Instruct-Q8_0", "gemma-3-4b-it-q4_0"]),
        ]);

        let rows: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.catalog.as_str(), e.model.id.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Embedding", "embeddinggemma-300m-qat-Q8_0"),
                ("image-text-to-text", "gemma-3-4b-it-q4_0"),
                ("image-text-to-text", "Qwen2.5-VL-3B-Instruct-Q8_0"),
                ("text-generation", "gpt-oss-20b-Q8_0"),
                ("text-generation", "Qwen3-8B-Q8_0"),
            ]
        );
    }

    #[test]
    fn pulled_marker_ignores_case() {
        let pulled: HashSet<String> = ["qwen3-8b-q8_0".to_string()].into_iter().collect();
        let entries = catalog_entries(vec![catalog("text", &["Qwen3-8B-Q8_0", "other"])]);

        assert!(entries[0].is_pulled(&pulled));
        assert!(!entries[1].is_pulled(&pulled));
    }
}
