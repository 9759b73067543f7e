//! 模型仓库
//!
//! 读取 Kronk 模型目录，目录结构为 `<root>/<organization>/<family>/<file>`

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, info};

use crate::error::{ConsoleError, ConsoleResult};
use crate::model::domain::ModelFile;

/// 模型仓库 trait
pub trait ModelRepository {
    /// 列出所有模型（按 ID 排序）
    fn list(&self) -> ConsoleResult<Vec<ModelFile>>;

    /// 按文件路径删除模型，返回被删除的模型
    ///
    /// 不同组织或家族下可能有同名文件，ID 不唯一，所以用路径定位。
    fn remove(&self, path: &Path) -> ConsoleResult<ModelFile>;

    /// 模型目录位置
    fn location(&self) -> &Path;
}

/// 基于本地文件系统的模型仓库
pub struct LocalModelRepository {
    root: PathBuf,
}

impl LocalModelRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 读取一个目录下的所有子目录
    fn sub_dirs(path: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
            }
        }
        Ok(dirs)
    }

    /// 读取模型家族目录下的模型文件
    fn model_files(organization: &str, family: &str, path: &Path) -> io::Result<Vec<ModelFile>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name == ".DS_Store" || name.starts_with("mmproj") {
                continue;
            }

            // 读不到元数据的文件直接跳过
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            let modified = metadata
                .modified()
                .map(DateTime::<Local>::from)
                .unwrap_or_else(|_| Local::now());

            let path = entry.path();
            let id = path
                .file_stem()
                .map_or_else(|| name.clone(), |stem| stem.to_string_lossy().into_owned());

            files.push(ModelFile {
                id,
                organization: organization.to_string(),
                family: family.to_string(),
                size: metadata.len(),
                modified,
                path,
            });
        }
        Ok(files)
    }
}

/// 模型对应的投影文件：`<dir>/mmproj-<file name>`
fn projection_path(model_path: &Path) -> Option<PathBuf> {
    let name = model_path.file_name()?.to_string_lossy();
    Some(model_path.with_file_name(format!("mmproj-{name}")))
}

impl ModelRepository for LocalModelRepository {
    fn list(&self) -> ConsoleResult<Vec<ModelFile>> {
        let organizations = Self::sub_dirs(&self.root).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConsoleError::ModelsDirNotFound(self.root.display().to_string())
            } else {
                ConsoleError::StorageError(e.to_string())
            }
        })?;

        let mut list = Vec::new();
        for (organization, org_path) in organizations {
            // 单个组织或家族目录不可读时跳过，不影响其他模型
            let Ok(families) = Self::sub_dirs(&org_path) else {
                continue;
            };
            for (family, family_path) in families {
                match Self::model_files(&organization, &family, &family_path) {
                    Ok(files) => list.extend(files),
                    Err(e) => debug!("skipping {}: {e}", family_path.display()),
                }
            }
        }

        list.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(list)
    }

    fn remove(&self, path: &Path) -> ConsoleResult<ModelFile> {
        let model = self
            .list()?
            .into_iter()
            .find(|m| m.path == path)
            .ok_or_else(|| ConsoleError::ModelNotFound(path.display().to_string()))?;

        fs::remove_file(&model.path).map_err(|e| ConsoleError::StorageError(e.to_string()))?;
        info!("removed model {} ({})", model.id, model.path.display());

        // 同目录下的投影文件随模型一起删除
        if let Some(projection) = projection_path(&model.path) {
            if projection.is_file() {
                fs::remove_file(&projection)
                    .map_err(|e| ConsoleError::StorageError(e.to_string()))?;
                info!("removed projection {}", projection.display());
            }
        }

        Ok(model)
    }

    fn location(&self) -> &Path {
        &self.root
    }
}

/// 内存模型仓库（用于测试和无模型目录时的演示）
pub struct MemoryModelRepository {
    models: RefCell<Vec<ModelFile>>,
    location: PathBuf,
}

impl MemoryModelRepository {
    pub fn new(models: Vec<ModelFile>) -> Self {
        Self {
            models: RefCell::new(models),
            location: PathBuf::from("memory"),
        }
    }
}

impl ModelRepository for MemoryModelRepository {
    fn list(&self) -> ConsoleResult<Vec<ModelFile>> {
        let mut list = self.models.borrow().clone();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(list)
    }

    fn remove(&self, path: &Path) -> ConsoleResult<ModelFile> {
        let mut models = self.models.borrow_mut();
        let index = models
            .iter()
            .position(|m| m.path == path)
            .ok_or_else(|| ConsoleError::ModelNotFound(path.display().to_string()))?;
        Ok(models.remove(index))
    }

    fn location(&self) -> &Path {
        &self.location
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_file(root: &Path, rel: &str, bytes: usize) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![0u8; bytes]).unwrap();
    }

    #[test]
    fn lists_models_sorted_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "Qwen/Qwen3-8B-GGUF/Qwen3-8B-Q8_0.gguf", 10);
        write_file(tmp.path(), "ggml-org/embeddinggemma/embeddinggemma-300m-qat-Q8_0.gguf", 20);

        let repo = LocalModelRepository::new(tmp.path());
        let models = repo.list().unwrap();

        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["Qwen3-8B-Q8_0", "embeddinggemma-300m-qat-Q8_0"]);
        assert_eq!(models[0].organization, "Qwen");
        assert_eq!(models[0].family, "Qwen3-8B-GGUF");
        assert_eq!(models[0].size, 10);
        assert_eq!(models[1].size, 20);
    }

    #[test]
    fn skips_projection_files_and_stray_entries() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "org/family/model.gguf", 1);
        write_file(tmp.path(), "org/family/mmproj-model-f16.gguf", 1);
        write_file(tmp.path(), "org/family/.DS_Store", 1);
        write_file(tmp.path(), "org/family/nested/deeper.gguf", 1);
        write_file(tmp.path(), "org/loose-file.gguf", 1);
        write_file(tmp.path(), "top-level.gguf", 1);

        let repo = LocalModelRepository::new(tmp.path());
        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["model"]);
    }

    #[test]
    fn missing_root_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LocalModelRepository::new(tmp.path().join("does-not-exist"));
        assert!(matches!(repo.list(), Err(ConsoleError::ModelsDirNotFound(_))));
    }

    #[test]
    fn remove_deletes_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "org/family/keep.gguf", 1);
        write_file(tmp.path(), "org/family/drop.gguf", 1);

        let repo = LocalModelRepository::new(tmp.path());
        let removed = repo.remove(&tmp.path().join("org/family/drop.gguf")).unwrap();
        assert_eq!(removed.id, "drop");
        assert!(!removed.path.exists());

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["keep"]);
    }

    #[test]
    fn remove_unknown_model_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LocalModelRepository::new(tmp.path());
        let ghost = tmp.path().join("org/family/nope.gguf");
        assert!(matches!(repo.remove(&ghost), Err(ConsoleError::ModelNotFound(_))));
    }

    #[test]
    fn remove_also_deletes_projection_file() {
        let tmp = tempfile::tempdir().unwrap();
        let family = "ggml-org/Qwen2.5-VL-3B-Instruct-GGUF";
        write_file(tmp.path(), &format!("{family}/Qwen2.5-VL-3B-Instruct-Q8_0.gguf"), 4);
        write_file(tmp.path(), &format!("{family}/mmproj-Qwen2.5-VL-3B-Instruct-Q8_0.gguf"), 2);

        let repo = LocalModelRepository::new(tmp.path());
        let models = repo.list().unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "Qwen2.5-VL-3B-Instruct-Q8_0");

        repo.remove(&models[0].path).unwrap();

        let left: Vec<_> = fs::read_dir(tmp.path().join(family)).unwrap().collect();
        assert!(left.is_empty());
    }

    #[test]
    fn remove_keeps_projection_of_other_models() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "org/family/a.gguf", 1);
        write_file(tmp.path(), "org/family/b.gguf", 1);
        write_file(tmp.path(), "org/family/mmproj-b.gguf", 1);

        let repo = LocalModelRepository::new(tmp.path());
        repo.remove(&tmp.path().join("org/family/a.gguf")).unwrap();

        assert!(tmp.path().join("org/family/mmproj-b.gguf").exists());
        assert!(tmp.path().join("org/family/b.gguf").exists());
    }

    #[test]
    fn duplicate_ids_are_removed_by_path() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "alpha/family/dup.gguf", 1);
        write_file(tmp.path(), "beta/family/dup.gguf", 1);

        let repo = LocalModelRepository::new(tmp.path());
        let target = tmp.path().join("beta/family/dup.gguf");
        let removed = repo.remove(&target).unwrap();
        assert_eq!(removed.organization, "beta");

        let left = repo.list().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].organization, "alpha");
        assert!(tmp.path().join("alpha/family/dup.gguf").exists());
    }

    #[test]
    fn memory_repository_removes() {
        let repo = MemoryModelRepository::new(Vec::new());
        assert!(repo.list().unwrap().is_empty());
        assert!(matches!(repo.remove(Path::new("x.gguf")), Err(ConsoleError::ModelNotFound(_))));
    }
}
