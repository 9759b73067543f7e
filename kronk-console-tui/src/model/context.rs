//! 共享模型列表上下文
//!
//! `ModelListContext` 在 `App` 创建时建立一次，之后在所有页面切换中保持同一份数据，
//! 所有需要模型列表的页面都通过它读取，而不是各自持有一份拷贝。
//!
//! 读写接口：
//!     - read(|data| ...)      只读访问
//!     - update(|data| ...)    写访问，每次调用都会递增 revision
//!     - subscribe()           获取订阅，之后用 Subscription::changed() 检测变化

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::model::domain::ModelFile;

/// 模型列表数据
#[derive(Debug, Default)]
pub struct ModelListData {
    /// 模型列表（按 ID 排序）
    pub models: Vec<ModelFile>,
    /// 是否已加载过
    pub loaded: bool,
    /// 最近一次加载的错误信息
    pub error: Option<String>,
    /// 最近一次成功加载的时间
    pub refreshed_at: Option<DateTime<Local>>,
    revision: u64,
}

impl ModelListData {
    /// 设置模型列表（加载成功）
    pub fn set_models(&mut self, models: Vec<ModelFile>, at: DateTime<Local>) {
        self.models = models;
        self.loaded = true;
        self.error = None;
        self.refreshed_at = Some(at);
    }

    /// 记录加载失败，保留已有列表
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loaded = true;
        self.error = Some(message.into());
    }

    /// 是否需要（重新）读取：从未加载过，或上次加载失败
    pub fn needs_load(&self) -> bool {
        !self.loaded || self.error.is_some()
    }

    /// 按文件路径从列表中移除模型
    pub fn remove(&mut self, path: &Path) -> Option<ModelFile> {
        let index = self.models.iter().position(|m| m.path == path)?;
        Some(self.models.remove(index))
    }

    /// 按索引获取模型
    pub fn get(&self, index: usize) -> Option<&ModelFile> {
        self.models.get(index)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// 当前数据版本号
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// 共享模型列表上下文句柄
///
/// 克隆得到的是同一份数据的另一个引用。
#[derive(Debug, Clone, Default)]
pub struct ModelListContext {
    inner: Rc<RefCell<ModelListData>>,
}

impl ModelListContext {
    /// 创建新的上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 只读访问
    pub fn read<R>(&self, f: impl FnOnce(&ModelListData) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// 写访问
    pub fn update<R>(&self, f: impl FnOnce(&mut ModelListData) -> R) -> R {
        let mut data = self.inner.borrow_mut();
        let result = f(&mut data);
        data.revision += 1;
        result
    }

    /// 订阅数据变化
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            seen: self.revision(),
        }
    }

    /// 当前数据版本号
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// 是否已加载过
    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().loaded
    }

    /// 是否需要（重新）读取
    pub fn needs_load(&self) -> bool {
        self.inner.borrow().needs_load()
    }

    /// 模型数量
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// 两个句柄是否指向同一份数据
    pub fn ptr_eq(&self, other: &ModelListContext) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// 上下文订阅
///
/// 记录最后一次看到的版本号。
#[derive(Debug, Clone, Copy, Default)]
pub struct Subscription {
    seen: u64,
}

impl Subscription {
    /// 自上次调用以来数据是否变化过
    pub fn changed(&mut self, ctx: &ModelListContext) -> bool {
        let revision = ctx.revision();
        if revision == self.seen {
            false
        } else {
            self.seen = revision;
            true
        }
    }
}
