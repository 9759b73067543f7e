//! 目录清单仓库
//!
//! 读取 `<base>/catalogs` 下的 YAML 清单文件

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ConsoleError, ConsoleResult};
use crate::model::domain::Catalog;

/// 目录清单仓库 trait
pub trait CatalogRepository {
    /// 读取所有清单（按文件名顺序）
    fn list(&self) -> ConsoleResult<Vec<Catalog>>;

    /// 清单目录位置
    fn location(&self) -> &Path;
}

/// 基于本地 YAML 文件的清单仓库
pub struct LocalCatalogRepository {
    dir: PathBuf,
}

impl LocalCatalogRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 清单目录下的 `.yaml` 文件，跳过子目录和其他扩展名
    fn yaml_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CatalogRepository for LocalCatalogRepository {
    fn list(&self) -> ConsoleResult<Vec<Catalog>> {
        let files = self.yaml_files().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConsoleError::CatalogsDirNotFound(self.dir.display().to_string())
            } else {
                ConsoleError::StorageError(e.to_string())
            }
        })?;

        let mut catalogs = Vec::with_capacity(files.len());
        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let content = fs::read_to_string(&path)
                .map_err(|e| ConsoleError::StorageError(format!("read file {name}: {e}")))?;

            // 任何一个清单解析失败都视为整体失败
            let catalog: Catalog = serde_yaml::from_str(&content)
                .map_err(|e| ConsoleError::SerializationError(format!("unmarshal {name}: {e}")))?;

            debug!("catalog {name}: {} models", catalog.models.len());
            catalogs.push(catalog);
        }

        info!("read {} catalogs from {}", catalogs.len(), self.dir.display());
        Ok(catalogs)
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}

/// 内存清单仓库（用于测试）
#[derive(Default)]
pub struct MemoryCatalogRepository {
    catalogs: Vec<Catalog>,
    location: PathBuf,
}

impl MemoryCatalogRepository {
    pub fn new(catalogs: Vec<Catalog>) -> Self {
        Self {
            catalogs,
            location: PathBuf::from("memory"),
        }
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    fn list(&self) -> ConsoleResult<Vec<Catalog>> {
        Ok(self.catalogs.clone())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
